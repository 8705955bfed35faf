//! `vgen generate`: writes the library file.
//!
//! The file is created or truncated, then modules are streamed into it one
//! at a time. A failure part way leaves the file holding everything written
//! before the failing module.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use vgen_library::{write_library, Catalog, LibraryOptions, LibrarySummary};

use crate::pipeline::load_session;
use crate::{GenerateArgs, GlobalArgs};

/// Runs the `vgen generate` command. Returns exit code 0 on success.
pub fn run(args: &GenerateArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let session = load_session(global)?;
    let path = session.output_path(args.output.as_deref());

    let summary = generate_file(&session.catalog, &session.options, &path)?;

    if !global.quiet {
        eprintln!(
            "   Generated {} ({} modules, {} bytes, {})",
            path.display(),
            summary.modules.len(),
            summary.bytes,
            summary.hash.short()
        );
    }
    Ok(0)
}

/// Writes the library to `path`, creating missing parent directories.
pub fn generate_file(
    catalog: &Catalog,
    options: &LibraryOptions,
    path: &Path,
) -> Result<LibrarySummary, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("cannot create {}: {e}", parent.display()))?;
        }
    }
    let file = File::create(path).map_err(|e| format!("cannot create {}: {e}", path.display()))?;
    let mut out = BufWriter::new(file);
    let summary = write_library(catalog, options, &mut out)?;
    tracing::info!(path = %path.display(), hash = %summary.hash, "library written");
    Ok(summary)
}
