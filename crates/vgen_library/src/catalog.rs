//! The ordered table of combinational operations.
//!
//! Entries are kept in a `Vec` and iterated in declaration order so that
//! repeated runs emit byte-identical libraries.

use vgen_common::{capitalize, OpCategory};
use vgen_config::GeneratorConfig;

use crate::error::LibraryError;
use crate::MUX_MODULE;

/// One combinational operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// Port shape of the generated module.
    pub category: OpCategory,
    /// Operation name, e.g. `add`.
    pub name: String,
    /// Right-hand side of the output assignment, emitted verbatim.
    pub expr: String,
}

impl Operation {
    /// Creates an operation.
    pub fn new(category: OpCategory, name: impl Into<String>, expr: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            expr: expr.into(),
        }
    }

    /// The generated module name: `add` becomes `Add`.
    pub fn module_name(&self) -> String {
        capitalize(&self.name)
    }
}

// There is no unsigned less-or-equal entry; configure `ule` if needed.
const STANDARD: &[(OpCategory, &str, &str)] = &[
    (OpCategory::Unary, "not", "~in"),
    (OpCategory::Unary, "neg", "-in"),
    (OpCategory::UnaryReduce, "andr", "&in"),
    (OpCategory::UnaryReduce, "orr", "|in"),
    (OpCategory::UnaryReduce, "xorr", "^in"),
    (OpCategory::Binary, "and", "in0 & in1"),
    (OpCategory::Binary, "or", "in0 | in1"),
    (OpCategory::Binary, "xor", "in0 ^ in1"),
    (OpCategory::Binary, "dshl", "in0 << in1"),
    (OpCategory::Binary, "dlshr", "in0 >> in1"),
    (OpCategory::Binary, "dashr", "$signed(in0) >>> in1"),
    (OpCategory::Binary, "add", "in0 + in1"),
    (OpCategory::Binary, "sub", "in0 - in1"),
    (OpCategory::BinaryReduce, "eq", "in0 == in1"),
    (OpCategory::BinaryReduce, "slt", "$signed(in0) < $signed(in1)"),
    (OpCategory::BinaryReduce, "sgt", "$signed(in0) > $signed(in1)"),
    (OpCategory::BinaryReduce, "sle", "$signed(in0) <= $signed(in1)"),
    (OpCategory::BinaryReduce, "sge", "$signed(in0) >= $signed(in1)"),
    (OpCategory::BinaryReduce, "ult", "in0 < in1"),
    (OpCategory::BinaryReduce, "ugt", "in0 > in1"),
    (OpCategory::BinaryReduce, "uge", "in0 >= in1"),
];

// smod is left out: `%` on signed operands is a remainder, not a modulus.
const ARITHMETIC: &[(&str, &str)] = &[
    ("mul", "in0 * in1"),
    ("udiv", "in0 / in1"),
    ("urem", "in0 % in1"),
    ("sdiv", "$signed(in0) / $signed(in1)"),
    ("srem", "$signed(in0) % $signed(in1)"),
];

/// An ordered set of combinational operations with unique module names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    ops: Vec<Operation>,
}

impl Catalog {
    /// A catalog with no operations.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard operation set.
    pub fn standard() -> Self {
        Self {
            ops: STANDARD
                .iter()
                .map(|&(category, name, expr)| Operation::new(category, name, expr))
                .collect(),
        }
    }

    /// Builds the catalog described by a configuration: the standard set,
    /// the arithmetic group if enabled, then the user operations in file
    /// order.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self, LibraryError> {
        let mut catalog = Self::standard();
        if config.library.arithmetic {
            catalog.add_arithmetic()?;
        }
        for def in &config.operations {
            catalog.push(Operation::new(def.category, &def.name, &def.expr))?;
        }
        Ok(catalog)
    }

    /// Appends the multiply/divide/remainder group to the binary operations.
    pub fn add_arithmetic(&mut self) -> Result<(), LibraryError> {
        for &(name, expr) in ARITHMETIC {
            self.push(Operation::new(OpCategory::Binary, name, expr))?;
        }
        Ok(())
    }

    /// Appends an operation.
    ///
    /// Rejects an operation whose module name is already generated, either
    /// by another catalog entry or by the mux section. Module names are
    /// compared after capitalization, so `ult` and `ULT` collide. Register
    /// names cannot collide: capitalization lower-cases everything after the
    /// first letter.
    pub fn push(&mut self, op: Operation) -> Result<(), LibraryError> {
        let module = op.module_name();
        if module == MUX_MODULE {
            return Err(LibraryError::ReservedName { name: op.name, module });
        }
        if self.ops.iter().any(|existing| existing.module_name() == module) {
            return Err(LibraryError::DuplicateOperation {
                category: op.category,
                name: op.name,
            });
        }
        self.ops.push(op);
        Ok(())
    }

    /// Operations of one category, in declaration order.
    pub fn entries(&self, category: OpCategory) -> impl Iterator<Item = &Operation> + '_ {
        self.ops.iter().filter(move |op| op.category == category)
    }

    /// All operations in emission order: by category, then declaration.
    pub fn iter(&self) -> impl Iterator<Item = &Operation> + '_ {
        OpCategory::ALL
            .into_iter()
            .flat_map(move |category| self.entries(category))
    }

    /// Looks up an operation by name.
    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.ops.iter().find(|op| op.name == name)
    }

    /// Number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the catalog has no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}
