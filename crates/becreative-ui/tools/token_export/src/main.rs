#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! CLI entrypoint for the token export tool.
//!
//! # Design
//! Parses flags, installs a `tracing` subscriber, delegates to the library
//! implementation and surfaces errors via `anyhow`.

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;
use token_export::{Mode, Options};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_LEVEL: &str = "info";
const VERBOSE_LOG_LEVEL: &str = "debug";

#[derive(Debug, Parser)]
#[command(
    name = "token_export",
    about = "Generate the Bê Creative color token stylesheet"
)]
struct Cli {
    /// Output directory; relative paths resolve against the UI crate root.
    #[arg(long, env = "BECREATIVE_TOKENS_OUT", default_value = token_export::DEFAULT_OUT_DIR)]
    out: PathBuf,
    /// Fail instead of writing when the committed outputs are stale.
    #[arg(long)]
    check: bool,
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn options(self) -> Options {
        Options {
            out: self.out,
            mode: if self.check { Mode::Check } else { Mode::Write },
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    token_export::run(&cli.options())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_options() {
        let cli = Cli::parse_from(["token_export", "--out", "dist", "--check"]);
        let options = cli.options();
        assert_eq!(options.out, PathBuf::from("dist"));
        assert_eq!(options.mode, Mode::Check);
    }

    #[test]
    fn defaults_write_into_static() {
        let cli = Cli::parse_from(["token_export"]);
        assert!(!cli.verbose);
        let options = cli.options();
        assert_eq!(options.out, PathBuf::from(token_export::DEFAULT_OUT_DIR));
        assert_eq!(options.mode, Mode::Write);
    }
}
