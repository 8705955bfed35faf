//! `vgen check`: verifies that a library file matches what `generate`
//! would write for the current configuration.

use std::path::Path;

use vgen_common::ContentHash;
use vgen_library::{render_library, Catalog, LibraryOptions};

use crate::pipeline::load_session;
use crate::{CheckArgs, GlobalArgs};

/// Result of comparing a library file against a fresh rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The file is byte-identical to the fresh rendering.
    UpToDate(ContentHash),
    /// The file differs.
    Stale {
        /// Digest of the fresh rendering.
        expected: ContentHash,
        /// Digest of the file on disk.
        found: ContentHash,
    },
    /// The file does not exist.
    Missing,
}

/// Runs the `vgen check` command.
///
/// Returns exit code 0 when the file is up to date, 1 when it is stale or
/// missing.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let session = load_session(global)?;
    let path = session.output_path(args.path.as_deref());

    let outcome = check_file(&session.catalog, &session.options, &path)?;
    let code = match outcome {
        CheckOutcome::UpToDate(hash) => {
            if !global.quiet {
                eprintln!("  Up to date {} ({})", path.display(), hash.short());
            }
            0
        }
        CheckOutcome::Stale { expected, found } => {
            eprintln!(
                "       Stale {} (expected {}, found {})",
                path.display(),
                expected.short(),
                found.short()
            );
            1
        }
        CheckOutcome::Missing => {
            eprintln!("     Missing {}", path.display());
            1
        }
    };
    Ok(code)
}

/// Compares the file at `path` with the library rendered from `catalog`.
pub fn check_file(
    catalog: &Catalog,
    options: &LibraryOptions,
    path: &Path,
) -> Result<CheckOutcome, Box<dyn std::error::Error>> {
    if !path.exists() {
        return Ok(CheckOutcome::Missing);
    }
    let expected = ContentHash::from_text(&render_library(catalog, options)?);
    let bytes = std::fs::read(path).map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    let found = ContentHash::from_bytes(&bytes);
    tracing::debug!(path = %path.display(), %expected, %found, "compared library");

    if expected == found {
        Ok(CheckOutcome::UpToDate(found))
    } else {
        Ok(CheckOutcome::Stale { expected, found })
    }
}
