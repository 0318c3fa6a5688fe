fn main() {
    wsboot::app::cli::run();
}
