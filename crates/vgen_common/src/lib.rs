//! Shared foundational types for the vgen library generator.
//!
//! Provides the combinational operation categories, Verilog identifier
//! helpers, and the content hash used to compare generated artifacts.

#![warn(missing_docs)]

pub mod category;
pub mod hash;
pub mod ident;

pub use category::OpCategory;
pub use hash::{ContentHash, ContentHasher};
pub use ident::{capitalize, is_identifier};
