//! Plugin config validation CLI
//!
//! # Usage
//!
//! ```bash
//! # Validate the wiring document
//! plugin-config-validate dynamic-plugins-config.yaml
//!
//! # Validate wiring and branding together
//! plugin-config-validate dynamic-plugins-config.yaml app-config.yaml
//! ```
//!
//! # Exit Codes
//!
//! - 0: zero errors (warnings allowed)
//! - 1: one or more errors, or the required argument is missing

use clap::Parser;
use plugin_config_validation::{run_cli, Cli};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing subscriber for logging; -v raises the default level
    let default_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    // Run the CLI and exit with the appropriate code
    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}
