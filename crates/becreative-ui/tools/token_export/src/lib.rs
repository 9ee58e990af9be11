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
#![allow(clippy::multiple_crate_versions)]
//! Export the Bê Creative color palette into static assets.
//!
//! # Design
//! - Validates the catalog before rendering anything.
//! - Renders `tokens.css` with the same declarations the token cards copy,
//!   plus a `tokens.json` dump of the palette.
//! - Emits a deterministic `TOKENS_LOCK.txt` holding the sha256 of both files
//!   and the token count.
//! - Relative output paths resolve against the UI root derived from
//!   `CARGO_MANIFEST_DIR`, so the tool can run from any cwd.
//! - Check mode renders in memory and compares byte for byte; it never writes.
//!
//! Failure modes include an invalid catalog, serialization errors, unwritable
//! outputs, and stale or missing outputs in check mode.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use becreative_catalog::colors::{COLOR_CATEGORIES, all_tokens};
use becreative_catalog::{CatalogError, css};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Output directory used when none is given, relative to the UI root.
pub const DEFAULT_OUT_DIR: &str = "static";
/// Generated stylesheet file name.
pub const CSS_FILE: &str = "tokens.css";
/// Generated JSON dump file name.
pub const JSON_FILE: &str = "tokens.json";
/// Lock file name.
pub const LOCK_FILE: &str = "TOKENS_LOCK.txt";

/// Errors returned by the token export tool.
#[derive(Debug, Error)]
pub enum TokenExportError {
    /// The catalog broke one of its invariants.
    #[error("catalog is invalid: {0}")]
    Catalog(#[from] CatalogError),
    /// The palette could not be serialized.
    #[error("failed to serialize tokens: {0}")]
    Json(#[from] serde_json::Error),
    /// A filesystem operation failed.
    #[error("io error at {}: {source}", path.display())]
    Io {
        /// Path involved in the failing IO operation.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Check mode found an output that differs from the rendered one.
    #[error("{} is stale; rerun token_export without --check", path.display())]
    Stale {
        /// Output that is missing or outdated.
        path: PathBuf,
    },
    /// The UI root could not be derived from the manifest directory.
    #[error("cannot resolve the UI root from {}", path.display())]
    MissingRoot {
        /// Manifest directory that was inspected.
        path: PathBuf,
    },
}

/// What the tool does with the rendered outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Write every output and the lock file.
    #[default]
    Write,
    /// Compare the outputs on disk against a fresh render.
    Check,
}

/// Resolved invocation options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Output directory.
    pub out: PathBuf,
    /// Write or check.
    pub mode: Mode,
}

/// Rendered file contents, keyed by file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outputs {
    /// Stylesheet with a light and a dark scope.
    pub css: String,
    /// Pretty-printed palette.
    pub json: String,
    /// Hashes of the two files above.
    pub lock: String,
}

impl Outputs {
    fn files(&self) -> [(&'static str, &str); 3] {
        [
            (CSS_FILE, self.css.as_str()),
            (JSON_FILE, self.json.as_str()),
            (LOCK_FILE, self.lock.as_str()),
        ]
    }
}

/// Render every output in memory.
///
/// # Errors
/// Returns an error if the catalog is invalid or cannot be serialized.
pub fn render_outputs() -> Result<Outputs, TokenExportError> {
    becreative_catalog::validate()?;
    let css = css::stylesheet(COLOR_CATEGORIES);
    let mut json = serde_json::to_string_pretty(COLOR_CATEGORIES)?;
    json.push('\n');
    let count = all_tokens().count();
    let lock = format!(
        "{CSS_FILE} sha256 {}\n{JSON_FILE} sha256 {}\ntokens {count}\n",
        sha256_hex(css.as_bytes()),
        sha256_hex(json.as_bytes()),
    );
    debug!(tokens = count, css_bytes = css.len(), "rendered token outputs");
    Ok(Outputs { css, json, lock })
}

/// Run the export with the given options.
///
/// # Errors
/// Returns an error if rendering fails, outputs cannot be written, or check
/// mode finds stale outputs.
pub fn run(options: &Options) -> Result<(), TokenExportError> {
    let out_dir = resolve_out_dir(&options.out)?;
    match options.mode {
        Mode::Write => export(&out_dir),
        Mode::Check => check(&out_dir),
    }
}

/// Write every output into `out_dir`, creating it if needed.
///
/// # Errors
/// Returns an error if rendering fails or a file cannot be written.
pub fn export(out_dir: &Path) -> Result<(), TokenExportError> {
    let outputs = render_outputs()?;
    fs::create_dir_all(out_dir).map_err(|source| TokenExportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;
    for (name, contents) in outputs.files() {
        let path = out_dir.join(name);
        fs::write(&path, contents).map_err(|source| TokenExportError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "wrote output");
    }
    info!(out = %out_dir.display(), "token outputs written");
    Ok(())
}

/// Compare the outputs in `out_dir` against a fresh render.
///
/// # Errors
/// Returns [`TokenExportError::Stale`] for the first missing or outdated file.
pub fn check(out_dir: &Path) -> Result<(), TokenExportError> {
    let outputs = render_outputs()?;
    for (name, expected) in outputs.files() {
        let path = out_dir.join(name);
        let actual = match fs::read_to_string(&path) {
            Ok(actual) => actual,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "token output missing");
                return Err(TokenExportError::Stale { path });
            }
            Err(source) => return Err(TokenExportError::Io { path, source }),
        };
        if actual != expected {
            warn!(path = %path.display(), "token output out of date");
            return Err(TokenExportError::Stale { path });
        }
    }
    info!(out = %out_dir.display(), "token outputs up to date");
    Ok(())
}

/// Lowercase hex sha256 digest.
#[must_use]
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn resolve_out_dir(out: &Path) -> Result<PathBuf, TokenExportError> {
    if out.is_absolute() {
        return Ok(out.to_path_buf());
    }
    Ok(ui_root_dir()?.join(out))
}

fn ui_root_dir() -> Result<PathBuf, TokenExportError> {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let ui_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .ok_or_else(|| TokenExportError::MissingRoot {
            path: manifest_dir.to_path_buf(),
        })?;
    Ok(ui_root.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    type TestResult = Result<(), Box<dyn Error>>;

    #[test]
    fn export_writes_outputs_and_lock() -> TestResult {
        let temp = tempfile::tempdir()?;
        export(temp.path())?;

        let css = fs::read_to_string(temp.path().join(CSS_FILE))?;
        assert!(css.starts_with("/* Generated by token_export."));
        assert!(css.contains("--bc-primary-500: #a855f7;"));
        assert!(css.contains("--bc-primary-500: #6366f1;"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(temp.path().join(JSON_FILE))?)?;
        assert_eq!(json[0]["tokens"][5]["name"], "bc-primary-500");

        let lock = fs::read_to_string(temp.path().join(LOCK_FILE))?;
        assert!(lock.contains(&format!("{CSS_FILE} sha256 {}", sha256_hex(css.as_bytes()))));
        assert!(lock.ends_with(&format!("tokens {}\n", all_tokens().count())));
        Ok(())
    }

    #[test]
    fn check_passes_after_export() -> TestResult {
        let temp = tempfile::tempdir()?;
        let out = temp.path().join("nested/static");
        export(&out)?;
        check(&out)?;
        Ok(())
    }

    #[test]
    fn check_flags_edited_stylesheet() -> TestResult {
        let temp = tempfile::tempdir()?;
        export(temp.path())?;
        let css_path = temp.path().join(CSS_FILE);
        let mut css = fs::read_to_string(&css_path)?;
        css.push_str("/* local tweak */\n");
        fs::write(&css_path, css)?;

        let result = check(temp.path());
        assert!(
            matches!(&result, Err(TokenExportError::Stale { path }) if path == &css_path),
            "expected Stale error, got {result:?}"
        );
        Ok(())
    }

    #[test]
    fn check_flags_missing_outputs() -> TestResult {
        let temp = tempfile::tempdir()?;
        let result = check(temp.path());
        assert!(
            matches!(&result, Err(TokenExportError::Stale { path }) if path.ends_with(CSS_FILE)),
            "expected Stale error, got {result:?}"
        );
        Ok(())
    }

    #[test]
    fn rendering_is_deterministic() -> TestResult {
        assert_eq!(render_outputs()?, render_outputs()?);
        Ok(())
    }

    #[test]
    fn absolute_out_dirs_are_kept() -> TestResult {
        let temp = tempfile::tempdir()?;
        assert_eq!(resolve_out_dir(temp.path())?, temp.path());
        let relative = resolve_out_dir(Path::new(DEFAULT_OUT_DIR))?;
        assert!(relative.ends_with("becreative-ui/static"));
        Ok(())
    }

    #[test]
    fn sha256_matches_known_digest() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
