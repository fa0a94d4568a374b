fn main() {
    logoforge::app::cli::run();
}
