//! Configuration types deserialized from `vgen.toml`.

use serde::Deserialize;
use vgen_common::OpCategory;

/// Default artifact path, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "stdlib.v";

/// Default value of every generated `WIDTH` parameter.
pub const DEFAULT_WIDTH: u32 = 16;

/// The top-level generator configuration.
///
/// ```toml
/// [library]
/// output = "stdlib.v"
/// width = 16
/// init = 0
/// arithmetic = false
///
/// [[operations]]
/// category = "binary"
/// name = "nand"
/// expr = "~(in0 & in1)"
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct GeneratorConfig {
    /// Artifact and parameter-default settings.
    #[serde(default)]
    pub library: LibraryConfig,
    /// Extra combinational operations, appended in file order.
    #[serde(default)]
    pub operations: Vec<OperationDef>,
}

/// Settings for the generated library as a whole.
#[derive(Debug, Deserialize)]
pub struct LibraryConfig {
    /// Path of the generated Verilog file.
    #[serde(default = "default_output")]
    pub output: String,
    /// Default for every `WIDTH` parameter.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Default for every `INIT` parameter.
    #[serde(default)]
    pub init: u64,
    /// Whether to append the arithmetic group (`mul`, `udiv`, `urem`,
    /// `sdiv`, `srem`) to the binary operations.
    #[serde(default)]
    pub arithmetic: bool,
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            width: DEFAULT_WIDTH,
            init: 0,
            arithmetic: false,
        }
    }
}

fn default_output() -> String {
    DEFAULT_OUTPUT.to_string()
}

fn default_width() -> u32 {
    DEFAULT_WIDTH
}

/// A user-defined combinational operation.
#[derive(Debug, Clone, Deserialize)]
pub struct OperationDef {
    /// Port shape of the generated module.
    pub category: OpCategory,
    /// Operation name; the module name is its capitalized form.
    pub name: String,
    /// Right-hand side of `assign out = ...;`, emitted verbatim.
    pub expr: String,
}
