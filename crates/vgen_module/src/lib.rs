//! Module descriptors and their Verilog text rendering.
//!
//! A [`ModuleDescriptor`] holds one module's name, parameters, ports, and
//! body. [`render`] turns a valid descriptor into the exact source text the
//! generated library uses; an invalid one is a [`ConstructionError`].

#![warn(missing_docs)]

pub mod descriptor;
pub mod emit;
pub mod error;

pub use descriptor::{ModuleDescriptor, Parameter, Port, PortDirection, Width};
pub use emit::render;
pub use error::ConstructionError;
