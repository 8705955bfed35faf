//! Rendering of module descriptors to Verilog source text.
//!
//! The layout is fixed for compatibility with previously generated
//! libraries:
//!
//! ```text
//! module Add #(parameter WIDTH=16) (
//!   input [WIDTH-1:0] in0,
//!   input [WIDTH-1:0] in1,
//!   output [WIDTH-1:0] out
//! );
//!   assign out = in0 + in1;
//! endmodule
//!
//! ```
//!
//! Port lines are sorted by their rendered text, not by declaration order.

use crate::descriptor::{ModuleDescriptor, Parameter, Port, Width};
use crate::error::ConstructionError;

/// Renders a descriptor to Verilog source.
///
/// Fails if the descriptor violates any invariant checked by
/// [`ModuleDescriptor::validate`].
pub fn render(module: &ModuleDescriptor) -> Result<String, ConstructionError> {
    module.validate()?;

    let mut out = format!("module {} ", module.name());
    if !module.parameters().is_empty() {
        let params: Vec<String> = module.parameters().iter().map(render_parameter).collect();
        out.push_str(&format!("#({}) ", params.join(",")));
    }

    let mut ports: Vec<String> = module.ports().iter().map(render_port).collect();
    ports.sort();
    out.push_str(&format!("(\n{}\n);\n", ports.join(",\n")));

    // validate() guarantees a body
    out.push_str(module.body_text().unwrap_or_default());
    out.push('\n');
    out.push_str("endmodule\n\n");
    Ok(out)
}

/// The packed-range text for a width: empty for a single bit.
///
/// `Width::Param("WIDTH")` gives `[WIDTH-1:0]`, `Width::Literal(16)` gives
/// `[15:0]`. Only reached through [`render`], after the width is validated.
pub(crate) fn bracket(width: &Width) -> String {
    if width.is_single_bit() {
        return String::new();
    }
    match width {
        // validate() rejects zero
        Width::Literal(bits) => format!("[{}:0]", bits.saturating_sub(1)),
        Width::Param(name) => format!("[{name}-1:0]"),
    }
}

/// Renders one port line, including its two-space indent.
pub(crate) fn render_port(port: &Port) -> String {
    let range = bracket(&port.width);
    if range.is_empty() {
        format!("  {} {}", port.direction.keyword(), port.name)
    } else {
        format!("  {} {} {}", port.direction.keyword(), range, port.name)
    }
}

fn render_parameter(param: &Parameter) -> String {
    match &param.default {
        Some(default) => format!("parameter {}={}", param.name, default),
        None => format!("parameter {}", param.name),
    }
}
