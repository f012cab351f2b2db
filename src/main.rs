fn main() {
    std::process::exit(nhanes_check_lib::run())
}
