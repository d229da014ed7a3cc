fn main() {
    artprompt::app::cli::run();
}
