//! Emission of the complete library artifact.
//!
//! The artifact is a fixed sequence of sections, each introduced by a
//! comment line. Modules are built, rendered, and written one at a time, so
//! a failure part way leaves the output truncated at the failing module.

use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};
use vgen_common::{ContentHash, ContentHasher, OpCategory};
use vgen_config::{LibraryConfig, DEFAULT_WIDTH};
use vgen_module::{render, ModuleDescriptor};

use crate::catalog::Catalog;
use crate::combinational::{mux_module, operation_module};
use crate::error::LibraryError;
use crate::register::{register_module, RegisterFlags};

/// Parameter defaults shared by every generated module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryOptions {
    /// Default of every `WIDTH` parameter.
    pub width: u32,
    /// Default of every `INIT` parameter.
    pub init: u64,
}

impl Default for LibraryOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            init: 0,
        }
    }
}

impl From<&LibraryConfig> for LibraryOptions {
    fn from(config: &LibraryConfig) -> Self {
        Self {
            width: config.width,
            init: config.init,
        }
    }
}

/// A section of the artifact, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Catalog operations of one category.
    Operations(OpCategory),
    /// The 2:1 multiplexer.
    Mux,
    /// The register variants.
    Registers,
}

impl Section {
    /// All sections in emission order.
    pub const ALL: [Section; 6] = [
        Section::Operations(OpCategory::Unary),
        Section::Operations(OpCategory::UnaryReduce),
        Section::Operations(OpCategory::Binary),
        Section::Operations(OpCategory::BinaryReduce),
        Section::Mux,
        Section::Registers,
    ];

    /// Short name of the section, e.g. `binaryReduce` or `register`.
    pub fn label(self) -> &'static str {
        match self {
            Section::Operations(category) => category.label(),
            Section::Mux => "ternary",
            Section::Registers => "register",
        }
    }

    /// The comment line that opens the section, without its newline.
    pub fn header(self) -> String {
        match self {
            Section::Operations(category) => format!("//{category} ops"),
            Section::Mux => "//ternary op".to_string(),
            Section::Registers => "//Now all the register permutations".to_string(),
        }
    }

    /// Lazily builds the section's descriptors in emission order.
    pub fn modules<'a>(
        self,
        catalog: &'a Catalog,
        options: &'a LibraryOptions,
    ) -> Box<dyn Iterator<Item = ModuleDescriptor> + 'a> {
        match self {
            Section::Operations(category) => Box::new(
                catalog
                    .entries(category)
                    .map(move |op| operation_module(op, options)),
            ),
            Section::Mux => Box::new(std::iter::once(mux_module(options))),
            Section::Registers => Box::new(
                RegisterFlags::variants().map(move |flags| register_module(flags, options)),
            ),
        }
    }
}

/// What a completed emission produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibrarySummary {
    /// Module names in emission order.
    pub modules: Vec<String>,
    /// Total bytes written.
    pub bytes: usize,
    /// Digest of the written text.
    pub hash: ContentHash,
}

/// Every descriptor the library would contain, with its section, in
/// emission order.
pub fn plan(catalog: &Catalog, options: &LibraryOptions) -> Vec<(Section, ModuleDescriptor)> {
    Section::ALL
        .into_iter()
        .flat_map(move |section| section.modules(catalog, options).map(move |m| (section, m)))
        .collect()
}

/// Writes the complete library to `out`.
///
/// Stops at the first module that fails to render; the error names it.
pub fn write_library<W: Write>(
    catalog: &Catalog,
    options: &LibraryOptions,
    out: &mut W,
) -> Result<LibrarySummary, LibraryError> {
    let mut sink = HashingSink::new(out);
    let mut modules = Vec::new();

    for section in Section::ALL {
        sink.write(&section.header())?;
        sink.write("\n")?;
        let before = modules.len();
        for module in section.modules(catalog, options) {
            let text = render(&module).map_err(|source| LibraryError::Module {
                module: module.name().to_string(),
                source,
            })?;
            sink.write(&text)?;
            debug!(module = module.name(), bytes = text.len(), "emitted module");
            modules.push(module.name().to_string());
        }
        info!(
            section = %section.header(),
            modules = modules.len() - before,
            "emitted section"
        );
    }
    sink.out.flush()?;

    Ok(LibrarySummary {
        modules,
        bytes: sink.bytes,
        hash: sink.hasher.finish(),
    })
}

/// Renders the complete library into a string.
pub fn render_library(catalog: &Catalog, options: &LibraryOptions) -> Result<String, LibraryError> {
    let mut buf = Vec::new();
    write_library(catalog, options, &mut buf)?;
    // only UTF-8 text is ever written
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

struct HashingSink<'w, W: Write> {
    out: &'w mut W,
    hasher: ContentHasher,
    bytes: usize,
}

impl<'w, W: Write> HashingSink<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self {
            out,
            hasher: ContentHasher::new(),
            bytes: 0,
        }
    }

    fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.hasher.update(text.as_bytes());
        self.bytes += text.len();
        Ok(())
    }
}
