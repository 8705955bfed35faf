//! Generator for the parameterized Verilog standard library.
//!
//! The library consists of one module per combinational operation in a
//! [`Catalog`], a 2:1 `Mux`, and the twelve register variants described by
//! [`RegisterFlags`]. [`write_library`] emits them in a fixed order so that
//! the artifact is byte-identical across runs.
//!
//! # Usage
//!
//! ```
//! use vgen_library::{render_library, Catalog, LibraryOptions};
//!
//! let text = render_library(&Catalog::standard(), &LibraryOptions::default()).unwrap();
//! assert!(text.contains("module Add #(parameter WIDTH=16) (\n"));
//! ```

#![warn(missing_docs)]

pub mod catalog;
pub mod combinational;
pub mod error;
pub mod library;
pub mod register;

pub use catalog::{Catalog, Operation};
pub use combinational::{mux_module, operation_module};
pub use error::LibraryError;
pub use library::{plan, render_library, write_library, LibraryOptions, LibrarySummary, Section};
pub use register::{register_module, Edge, RegisterFlags};

/// Name of the width parameter every module declares.
pub const WIDTH_PARAM: &str = "WIDTH";

/// Name of the reset/clear value parameter of register variants.
pub const INIT_PARAM: &str = "INIT";

/// Name of the multiplexer module.
pub const MUX_MODULE: &str = "Mux";
