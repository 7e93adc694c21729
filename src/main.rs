fn main() {
    pqs::cli::run();
}
