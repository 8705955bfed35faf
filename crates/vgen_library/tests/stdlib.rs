//! End-to-end tests over the complete standard library text.
//!
//! These render the whole artifact and check its structure: section order,
//! module order, the exact text of representative modules, and run-to-run
//! determinism.

use vgen_library::{
    render_library, write_library, Catalog, LibraryOptions, RegisterFlags,
};

fn stdlib() -> String {
    render_library(&Catalog::standard(), &LibraryOptions::default()).unwrap()
}

/// Module names in the order they appear in `text`.
fn module_names(text: &str) -> Vec<&str> {
    text.lines()
        .filter_map(|l| l.strip_prefix("module "))
        .filter_map(|rest| rest.split_whitespace().next())
        .collect()
}

/// The full text of one module, from `module` through `endmodule`.
fn module_text<'a>(text: &'a str, name: &str) -> &'a str {
    let start = text
        .find(&format!("module {name} "))
        .unwrap_or_else(|| panic!("module {name} not found"));
    let end = start + text[start..].find("endmodule\n").unwrap() + "endmodule\n".len();
    &text[start..end]
}

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

#[test]
fn module_order_is_fixed() {
    let text = stdlib();
    assert_eq!(
        module_names(&text),
        [
            "Not", "Neg", "Andr", "Orr", "Xorr", "And", "Or", "Xor", "Dshl", "Dlshr", "Dashr",
            "Add", "Sub", "Eq", "Slt", "Sgt", "Sle", "Sge", "Ult", "Ugt", "Uge", "Mux",
            "Reg_N", "Reg_P", "Reg_NR", "Reg_PR", "Reg_NC", "Reg_PC", "Reg_NE", "Reg_PE",
            "Reg_NRE", "Reg_PRE", "Reg_NCE", "Reg_PCE",
        ]
    );
}

#[test]
fn section_comments_precede_their_modules() {
    let text = stdlib();
    let comments: Vec<&str> = text.lines().filter(|l| l.starts_with("//")).collect();
    assert_eq!(
        comments,
        [
            "//unary ops",
            "//unaryReduce ops",
            "//binary ops",
            "//binaryReduce ops",
            "//ternary op",
            "//Now all the register permutations",
        ]
    );
    assert!(text.starts_with("//unary ops\nmodule Not "));
    assert!(text.contains("endmodule\n\n//ternary op\nmodule Mux "));
    assert!(text.ends_with("  assign Q = r;\nendmodule\n\n"));
}

#[test]
fn every_module_is_closed() {
    let text = stdlib();
    let opened = text.lines().filter(|l| l.starts_with("module ")).count();
    let closed = text.lines().filter(|l| *l == "endmodule").count();
    assert_eq!(opened, 34);
    assert_eq!(opened, closed);
}

#[test]
fn generation_is_deterministic() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    let a = write_library(&Catalog::standard(), &LibraryOptions::default(), &mut first).unwrap();
    let b = write_library(&Catalog::standard(), &LibraryOptions::default(), &mut second).unwrap();
    assert_eq!(first, second);
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// Combinational modules
// ---------------------------------------------------------------------------

#[test]
fn add_scenario() {
    assert_eq!(
        module_text(&stdlib(), "Add"),
        "module Add #(parameter WIDTH=16) (\n\
         \x20 input [WIDTH-1:0] in0,\n\
         \x20 input [WIDTH-1:0] in1,\n\
         \x20 output [WIDTH-1:0] out\n\
         );\n\
         \x20 assign out = in0 + in1;\n\
         endmodule\n"
    );
}

#[test]
fn andr_scenario() {
    assert_eq!(
        module_text(&stdlib(), "Andr"),
        "module Andr #(parameter WIDTH=16) (\n\
         \x20 input [WIDTH-1:0] in,\n\
         \x20 output out\n\
         );\n\
         \x20 assign out = &in;\n\
         endmodule\n"
    );
}

#[test]
fn binary_reductions_take_two_operands() {
    let text = stdlib();
    for name in ["Eq", "Slt", "Sgt", "Sle", "Sge", "Ult", "Ugt", "Uge"] {
        let m = module_text(&text, name);
        assert!(m.contains("  input [WIDTH-1:0] in0,\n  input [WIDTH-1:0] in1,\n  output out\n"), "{name}");
    }
}

#[test]
fn ult_is_strict_and_unique() {
    let text = stdlib();
    assert!(!text.contains("module Ule "));
    assert_eq!(text.matches("module Ult ").count(), 1);
    assert!(module_text(&text, "Ult").contains("  assign out = in0 < in1;\n"));
}

#[test]
fn signed_shift_expression_is_verbatim() {
    assert!(module_text(&stdlib(), "Dashr").contains("  assign out = $signed(in0) >>> in1;\n"));
}

// ---------------------------------------------------------------------------
// Registers
// ---------------------------------------------------------------------------

#[test]
fn reg_n_scenario() {
    assert_eq!(
        module_text(&stdlib(), "Reg_N"),
        "module Reg_N #(parameter WIDTH=16) (\n\
         \x20 input [WIDTH-1:0] D,\n\
         \x20 input clk,\n\
         \x20 output [WIDTH-1:0] Q\n\
         );\n\
         \x20 reg [WIDTH-1:0] r;\n\
         \x20 always @(negedge clk) begin\n\
         \x20   r <= D;\n\
         \x20 end\n\
         \x20 assign Q = r;\n\
         endmodule\n"
    );
}

#[test]
fn reg_nce_scenario() {
    assert_eq!(
        module_text(&stdlib(), "Reg_NCE"),
        "module Reg_NCE #(parameter WIDTH=16,parameter INIT=0) (\n\
         \x20 input [WIDTH-1:0] D,\n\
         \x20 input clk,\n\
         \x20 input clr,\n\
         \x20 input en,\n\
         \x20 output [WIDTH-1:0] Q\n\
         );\n\
         \x20 reg [WIDTH-1:0] r;\n\
         \x20 always @(negedge clk) begin\n\
         \x20   r <= en ? (clr ? INIT : D) : r;\n\
         \x20 end\n\
         \x20 assign Q = r;\n\
         endmodule\n"
    );
}

#[test]
fn sync_clear_without_enable_still_clears() {
    assert!(module_text(&stdlib(), "Reg_PC").contains("    r <= (clr ? INIT : D);\n"));
}

#[test]
fn no_reset_plus_clear_variants() {
    let text = stdlib();
    let regs: Vec<&str> = module_names(&text)
        .into_iter()
        .filter(|n| n.starts_with("Reg_"))
        .collect();
    assert_eq!(regs.len(), 12);
    assert!(regs.iter().all(|n| !n.contains("RC")));
}

#[test]
fn emitted_register_names_decode_to_their_flags() {
    let text = stdlib();
    let decoded: Vec<RegisterFlags> = module_names(&text)
        .into_iter()
        .filter_map(RegisterFlags::parse_name)
        .collect();
    let expected: Vec<RegisterFlags> = RegisterFlags::variants().collect();
    assert_eq!(decoded, expected);

    for flags in decoded {
        let m = module_text(&text, &flags.module_name());
        assert_eq!(m.contains(" input rst"), flags.async_reset);
        assert_eq!(m.contains(" input clr"), flags.sync_clear);
        assert_eq!(m.contains(" input en"), flags.enable);
        assert!(m.contains(&format!("always @({} clk", flags.edge.keyword())));
    }
}

// ---------------------------------------------------------------------------
// Configuration-driven variants
// ---------------------------------------------------------------------------

#[test]
fn configured_library_extends_standard() {
    let config = vgen_config::load_config_from_str(
        r#"
[library]
width = 8
arithmetic = true

[[operations]]
category = "binaryReduce"
name = "neq"
expr = "in0 != in1"
"#,
    )
    .unwrap();
    let catalog = Catalog::from_config(&config).unwrap();
    let text = render_library(&catalog, &LibraryOptions::from(&config.library)).unwrap();
    let names = module_names(&text);

    let sub = names.iter().position(|n| *n == "Sub").unwrap();
    assert_eq!(&names[sub + 1..sub + 6], ["Mul", "Udiv", "Urem", "Sdiv", "Srem"]);
    let uge = names.iter().position(|n| *n == "Uge").unwrap();
    assert_eq!(names[uge + 1], "Neq");
    assert_eq!(names[uge + 2], "Mux");
    assert!(text.contains("module Neq #(parameter WIDTH=8) (\n"));
    assert!(!text.contains("WIDTH=16"));
}

#[test]
fn summary_serializes() {
    let mut buf = Vec::new();
    let summary =
        write_library(&Catalog::standard(), &LibraryOptions::default(), &mut buf).unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["modules"].as_array().unwrap().len(), 34);
    assert_eq!(json["bytes"].as_u64().unwrap() as usize, buf.len());
}
