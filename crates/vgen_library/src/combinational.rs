//! Descriptors for combinational operations and the 2:1 multiplexer.

use vgen_module::{ModuleDescriptor, Width};

use crate::catalog::Operation;
use crate::library::LibraryOptions;
use crate::{MUX_MODULE, WIDTH_PARAM};

/// Builds the module for one catalog operation.
///
/// Inputs are `in` or `in0`/`in1` of `WIDTH` bits; `out` is `WIDTH` bits,
/// or a single bit for reductions.
pub fn operation_module(op: &Operation, options: &LibraryOptions) -> ModuleDescriptor {
    let mut module = ModuleDescriptor::new(op.module_name()).param(WIDTH_PARAM, options.width);
    for input in op.category.inputs() {
        module = module.input(*input, WIDTH_PARAM);
    }
    let out_width = if op.category.is_reduction() {
        Width::Literal(1)
    } else {
        Width::from(WIDTH_PARAM)
    };
    module
        .output("out", out_width)
        .body(format!("  assign out = {};", op.expr))
}

/// Builds the `Mux` module: `out` is `d0` when `sel` is high, else `d1`.
pub fn mux_module(options: &LibraryOptions) -> ModuleDescriptor {
    ModuleDescriptor::new(MUX_MODULE)
        .param(WIDTH_PARAM, options.width)
        .input("d0", WIDTH_PARAM)
        .input("d1", WIDTH_PARAM)
        .input("sel", 1)
        .output("out", WIDTH_PARAM)
        .body("  assign out = sel ? d0 : d1;")
}
