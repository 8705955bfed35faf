//! Clocked register variants.
//!
//! Every register in the library is one point in a 4-bit flag space, read
//! from a variant index `i` in `0..16`:
//!
//! | bit | flag          | set means                              |
//! |-----|---------------|----------------------------------------|
//! | 0   | edge          | `posedge clk` (clear: `negedge clk`)   |
//! | 1   | async reset   | active-low `rst` forces `INIT`         |
//! | 2   | sync clear    | `clr` loads `INIT` on the clock edge   |
//! | 3   | enable        | `en` gates the update                  |
//!
//! A register never carries both an asynchronous reset and a synchronous
//! clear, which leaves 12 variants. Names follow `Reg_(P|N)R?C?E?`.

use serde::Serialize;
use std::fmt;

use vgen_module::ModuleDescriptor;

use crate::library::LibraryOptions;
use crate::{INIT_PARAM, WIDTH_PARAM};

/// Clock edge that triggers a register update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    /// Falling edge.
    Negedge,
    /// Rising edge.
    Posedge,
}

impl Edge {
    /// The sensitivity-list keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            Edge::Negedge => "negedge",
            Edge::Posedge => "posedge",
        }
    }

    /// The name letter following `Reg_`.
    pub fn letter(self) -> char {
        match self {
            Edge::Negedge => 'N',
            Edge::Posedge => 'P',
        }
    }
}

/// One register configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RegisterFlags {
    /// Active clock edge.
    pub edge: Edge,
    /// Asynchronous active-low reset on `rst`.
    pub async_reset: bool,
    /// Synchronous clear on `clr`.
    pub sync_clear: bool,
    /// Clock enable on `en`.
    pub enable: bool,
}

impl RegisterFlags {
    /// Number of indices in the flag space, valid or not.
    pub const INDEX_COUNT: u8 = 16;

    /// Decodes a variant index. Bits above bit 3 are ignored.
    pub fn from_index(index: u8) -> Self {
        Self {
            edge: if index & 0b0001 != 0 {
                Edge::Posedge
            } else {
                Edge::Negedge
            },
            async_reset: index & 0b0010 != 0,
            sync_clear: index & 0b0100 != 0,
            enable: index & 0b1000 != 0,
        }
    }

    /// Encodes back to the variant index.
    pub fn index(self) -> u8 {
        u8::from(self.edge == Edge::Posedge)
            | u8::from(self.async_reset) << 1
            | u8::from(self.sync_clear) << 2
            | u8::from(self.enable) << 3
    }

    /// Whether the library generates this configuration.
    pub fn is_valid(self) -> bool {
        !(self.async_reset && self.sync_clear)
    }

    /// All generated configurations in ascending index order.
    pub fn variants() -> impl Iterator<Item = RegisterFlags> {
        (0..Self::INDEX_COUNT)
            .map(Self::from_index)
            .filter(|flags| flags.is_valid())
    }

    /// Whether the module carries an `INIT` parameter.
    pub fn has_init(self) -> bool {
        self.async_reset || self.sync_clear
    }

    /// The module name, e.g. `Reg_PRE`.
    pub fn module_name(self) -> String {
        let mut name = String::from("Reg_");
        name.push(self.edge.letter());
        if self.async_reset {
            name.push('R');
        }
        if self.sync_clear {
            name.push('C');
        }
        if self.enable {
            name.push('E');
        }
        name
    }

    /// Recovers the flags from a module name produced by
    /// [`module_name`](Self::module_name).
    ///
    /// Returns `None` for anything that is not exactly a generated name,
    /// including out-of-order or repeated letters and the excluded
    /// reset-plus-clear combination.
    pub fn parse_name(name: &str) -> Option<Self> {
        let mut chars = name.strip_prefix("Reg_")?.chars();
        let edge = match chars.next()? {
            'P' => Edge::Posedge,
            'N' => Edge::Negedge,
            _ => return None,
        };
        let mut flags = Self {
            edge,
            async_reset: false,
            sync_clear: false,
            enable: false,
        };
        let mut last_rank = 0;
        for c in chars {
            let rank = match c {
                'R' => 1,
                'C' => 2,
                'E' => 3,
                _ => return None,
            };
            if rank <= last_rank {
                return None;
            }
            last_rank = rank;
            match c {
                'R' => flags.async_reset = true,
                'C' => flags.sync_clear = true,
                _ => flags.enable = true,
            }
        }
        flags.is_valid().then_some(flags)
    }

    /// The value loaded into `r` on an active edge outside reset.
    pub fn next_value(self) -> String {
        let data = if self.sync_clear {
            format!("(clr ? {INIT_PARAM} : D)")
        } else {
            "D".to_string()
        };
        if self.enable {
            format!("en ? {data} : r")
        } else {
            data
        }
    }

    /// The module body: a storage reg, one always block, and the output
    /// assignment.
    pub fn body(self) -> String {
        let mut body = format!("  reg [{WIDTH_PARAM}-1:0] r;\n");
        body.push_str(&format!("  always @({} clk", self.edge.keyword()));
        if self.async_reset {
            body.push_str(", negedge rst");
        }
        body.push_str(") begin\n");
        if self.async_reset {
            body.push_str(&format!("    if (!rst) r <= {INIT_PARAM};\n"));
            body.push_str(&format!("    else r <= {};\n", self.next_value()));
        } else {
            body.push_str(&format!("    r <= {};\n", self.next_value()));
        }
        body.push_str("  end\n");
        body.push_str("  assign Q = r;");
        body
    }
}

impl fmt::Display for RegisterFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.module_name())
    }
}

/// Builds the descriptor for one register variant.
pub fn register_module(flags: RegisterFlags, options: &LibraryOptions) -> ModuleDescriptor {
    let mut module = ModuleDescriptor::new(flags.module_name()).param(WIDTH_PARAM, options.width);
    if flags.has_init() {
        module = module.param(INIT_PARAM, options.init);
    }
    module = module
        .input("D", WIDTH_PARAM)
        .input("clk", 1)
        .output("Q", WIDTH_PARAM);
    if flags.async_reset {
        module = module.input("rst", 1);
    }
    if flags.sync_clear {
        module = module.input("clr", 1);
    }
    if flags.enable {
        module = module.input("en", 1);
    }
    module.body(flags.body())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vgen_module::{render, PortDirection, Width};

    fn names() -> Vec<String> {
        RegisterFlags::variants().map(|f| f.module_name()).collect()
    }

    #[test]
    fn twelve_variants_in_index_order() {
        assert_eq!(
            names(),
            [
                "Reg_N", "Reg_P", "Reg_NR", "Reg_PR", "Reg_NC", "Reg_PC", "Reg_NE", "Reg_PE",
                "Reg_NRE", "Reg_PRE", "Reg_NCE", "Reg_PCE",
            ]
        );
    }

    #[test]
    fn reset_and_clear_excluded() {
        let excluded: Vec<u8> = (0..RegisterFlags::INDEX_COUNT)
            .filter(|&i| !RegisterFlags::from_index(i).is_valid())
            .collect();
        assert_eq!(excluded, [6, 7, 14, 15]);
        assert!(RegisterFlags::variants().all(|f| !(f.async_reset && f.sync_clear)));
    }

    #[test]
    fn bit_mapping() {
        let f = RegisterFlags::from_index(0b1011);
        assert_eq!(f.edge, Edge::Posedge);
        assert!(f.async_reset);
        assert!(!f.sync_clear);
        assert!(f.enable);
        assert_eq!(f.module_name(), "Reg_PRE");
    }

    #[test]
    fn index_roundtrip_over_full_space() {
        for i in 0..RegisterFlags::INDEX_COUNT {
            assert_eq!(RegisterFlags::from_index(i).index(), i);
        }
    }

    #[test]
    fn name_decoding_is_a_bijection() {
        for flags in RegisterFlags::variants() {
            assert_eq!(RegisterFlags::parse_name(&flags.module_name()), Some(flags));
        }
        let mut seen: Vec<String> = names();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn parse_rejects_non_generated_names() {
        for name in [
            "Reg_", "Reg_X", "Reg_PER", "Reg_PRR", "Reg_PRC", "Reg_NRCE", "Reg_Pe", "Mux", "reg_P",
        ] {
            assert_eq!(RegisterFlags::parse_name(name), None, "{name}");
        }
    }

    #[test]
    fn next_value_selection() {
        let plain = RegisterFlags::from_index(0);
        let clear = RegisterFlags::from_index(0b0100);
        let enable = RegisterFlags::from_index(0b1000);
        let clear_enable = RegisterFlags::from_index(0b1100);
        assert_eq!(plain.next_value(), "D");
        assert_eq!(clear.next_value(), "(clr ? INIT : D)");
        assert_eq!(enable.next_value(), "en ? D : r");
        assert_eq!(clear_enable.next_value(), "en ? (clr ? INIT : D) : r");
    }

    #[test]
    fn negedge_plain_register() {
        let flags = RegisterFlags::from_index(0);
        let m = register_module(flags, &LibraryOptions::default());
        assert_eq!(m.name(), "Reg_N");
        assert_eq!(m.parameters().len(), 1);
        let ports: Vec<_> = m.ports().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(ports, ["D", "clk", "Q"]);
        assert_eq!(
            m.body_text(),
            Some(
                "  reg [WIDTH-1:0] r;\n  always @(negedge clk) begin\n    r <= D;\n  end\n  assign Q = r;"
            )
        );
    }

    #[test]
    fn async_reset_body() {
        let flags = RegisterFlags::from_index(0b0011);
        assert_eq!(
            flags.body(),
            "  reg [WIDTH-1:0] r;\n\
             \x20 always @(posedge clk, negedge rst) begin\n\
             \x20   if (!rst) r <= INIT;\n\
             \x20   else r <= D;\n\
             \x20 end\n\
             \x20 assign Q = r;"
        );
    }

    #[test]
    fn init_parameter_only_with_reset_or_clear() {
        let opts = LibraryOptions::default();
        for flags in RegisterFlags::variants() {
            let m = register_module(flags, &opts);
            let has_init = m.parameters().iter().any(|p| p.name == "INIT");
            assert_eq!(has_init, flags.async_reset || flags.sync_clear, "{flags}");
            assert_eq!(m.parameters()[0].name, "WIDTH");
        }
    }

    #[test]
    fn control_ports_follow_flags() {
        let opts = LibraryOptions::default();
        for flags in RegisterFlags::variants() {
            let m = register_module(flags, &opts);
            assert_eq!(m.find_port("rst").is_some(), flags.async_reset);
            assert_eq!(m.find_port("clr").is_some(), flags.sync_clear);
            assert_eq!(m.find_port("en").is_some(), flags.enable);
            for ctl in ["clk", "rst", "clr", "en"] {
                if let Some(port) = m.find_port(ctl) {
                    assert_eq!(port.width, Width::Literal(1));
                    assert_eq!(port.direction, PortDirection::Input);
                }
            }
            let q = m.find_port("Q").unwrap();
            assert_eq!(q.direction, PortDirection::Output);
        }
    }

    #[test]
    fn full_text_reg_pre() {
        let m = register_module(RegisterFlags::from_index(11), &LibraryOptions::default());
        let expected = "module Reg_PRE #(parameter WIDTH=16,parameter INIT=0) (\n\
                        \x20 input [WIDTH-1:0] D,\n\
                        \x20 input clk,\n\
                        \x20 input en,\n\
                        \x20 input rst,\n\
                        \x20 output [WIDTH-1:0] Q\n\
                        );\n\
                        \x20 reg [WIDTH-1:0] r;\n\
                        \x20 always @(posedge clk, negedge rst) begin\n\
                        \x20   if (!rst) r <= INIT;\n\
                        \x20   else r <= en ? D : r;\n\
                        \x20 end\n\
                        \x20 assign Q = r;\n\
                        endmodule\n\n";
        assert_eq!(render(&m).unwrap(), expected);
    }

    #[test]
    fn every_variant_renders() {
        let opts = LibraryOptions::default();
        for flags in RegisterFlags::variants() {
            assert!(render(&register_module(flags, &opts)).is_ok(), "{flags}");
        }
    }
}
