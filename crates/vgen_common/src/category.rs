//! Combinational operation categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The arity/reduction shape of a combinational operation.
///
/// The category fixes the port list of the generated module: reductions
/// produce a single-bit `out`, the others produce a `WIDTH`-bit `out`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OpCategory {
    /// One `WIDTH` input, `WIDTH` output.
    Unary,
    /// One `WIDTH` input, 1-bit output.
    UnaryReduce,
    /// Two `WIDTH` inputs, `WIDTH` output.
    Binary,
    /// Two `WIDTH` inputs, 1-bit output.
    BinaryReduce,
}

impl OpCategory {
    /// All categories in emission order.
    pub const ALL: [OpCategory; 4] = [
        OpCategory::Unary,
        OpCategory::UnaryReduce,
        OpCategory::Binary,
        OpCategory::BinaryReduce,
    ];

    /// The category label used in section comments and configuration.
    pub fn label(self) -> &'static str {
        match self {
            OpCategory::Unary => "unary",
            OpCategory::UnaryReduce => "unaryReduce",
            OpCategory::Binary => "binary",
            OpCategory::BinaryReduce => "binaryReduce",
        }
    }

    /// Input port names, in declaration order.
    pub fn inputs(self) -> &'static [&'static str] {
        match self {
            OpCategory::Unary | OpCategory::UnaryReduce => &["in"],
            OpCategory::Binary | OpCategory::BinaryReduce => &["in0", "in1"],
        }
    }

    /// Whether the output collapses to a single bit.
    pub fn is_reduction(self) -> bool {
        matches!(self, OpCategory::UnaryReduce | OpCategory::BinaryReduce)
    }
}

impl fmt::Display for OpCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
