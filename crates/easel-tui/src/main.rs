//! Interactive terminal form for composing image-generation prompts.
//!
//! Opens a full-screen form over every prompt field, previews the
//! assembled prompt live, and copies it to the system clipboard with `y`.
//!
//! # Examples
//!
//! ```sh
//! # Open the form with defaults
//! easel-tui
//!
//! # Prefix environments with "in" and pin a version token
//! easel-tui --env-prefix in --version-token "--v 6.1"
//! ```

use std::time::Duration;

use clap::Parser;
use easel_rs::assemble::AssembleConfig;
use easel_rs::catalog::UNSET_VALUE;
use easel_rs::trace::LogCaptureLayer;
use easel_tui::{DEFAULT_COPY_FLASH_MS, TuiConfig, run_tui};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Interactive terminal form for composing image-generation prompts.
#[derive(Parser)]
#[command(name = "easel-tui")]
struct Cli {
    /// Word prepended to the environment segment (e.g. "in").
    #[arg(long, value_name = "WORD")]
    env_prefix: Option<String>,

    /// Sentinel option that means "unset" in every dropdown.
    #[arg(long, default_value = UNSET_VALUE)]
    sentinel: String,

    /// Version token appended after all other engine parameters.
    #[arg(long, value_name = "TOKEN")]
    version_token: Option<String>,

    /// How long the "copied" indicator stays visible, in milliseconds.
    #[arg(long, default_value_t = DEFAULT_COPY_FLASH_MS)]
    copy_flash_ms: u64,
}

fn main() {
    let cli = Cli::parse();

    // Route tracing into the TUI log pane; nothing may write to stdout
    // while the alternate screen is up.
    let (tracing_layer, log_buffer) = LogCaptureLayer::new();
    tracing_subscriber::registry().with(tracing_layer).init();

    let mut assemble = AssembleConfig::default().with_unset_sentinel(&cli.sentinel);
    if let Some(ref prefix) = cli.env_prefix {
        assemble = assemble.with_environment_prefix(prefix);
    }
    if let Some(ref token) = cli.version_token {
        assemble = assemble.with_version_token(token);
    }

    let config = TuiConfig {
        assemble,
        copy_flash: Duration::from_millis(cli.copy_flash_ms),
        log_buffer: Some(log_buffer),
    };

    if let Err(e) = run_tui(&config) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
