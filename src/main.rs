fn main() {
    sbgen::app::cli::run();
}
