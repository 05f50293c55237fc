fn main() {
    argprof::app::cli::run();
}
