fn main() {
    mvcgen::app::cli::run();
}
