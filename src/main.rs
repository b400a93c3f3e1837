fn main() {
    std::process::exit(i32::from(ccx_conformance::run()));
}
