fn main() {
    std::process::exit(fixhelp::app::run());
}
