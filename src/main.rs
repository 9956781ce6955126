mod app;
mod cli;

fn main() {
    amfproxy::engine::init_tracing();
    app::run_and_exit(cli::parse())
}
