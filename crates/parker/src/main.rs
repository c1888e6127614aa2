//! Parker — parking lot simulator driven by a command file.

use parker_cli::ui::print_error;
use parker_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Logs go to stderr so stdout carries only command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    match app::run(&config) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            print_error(&format!("{err:#}"));
            std::process::exit(errors::exit_code_for(&err));
        }
    }
}
