use tag_version::cli::{orchestration, Args};
use tag_version::ui;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `debug`
const LOG_ENV: &str = "TAG_VERSION_LOG";

fn main() {
    let args = Args::from_env();

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();

    match orchestration::run(&args) {
        Ok(version) => ui::print_version(&version),
        Err(e) if e.is_fatal() => {
            ui::display_fatal(&e.to_string());
            std::process::exit(1);
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
