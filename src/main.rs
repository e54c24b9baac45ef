fn main() {
    polgen::app::cli::run();
}
