//! Structured representation of one Verilog module prior to rendering.
//!
//! A [`ModuleDescriptor`] is built field by field by a generator, rendered
//! once by [`render`](crate::render), and discarded.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::error::ConstructionError;

/// The direction of a port on a module boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// Data flows into the module.
    Input,
    /// Data flows out of the module.
    Output,
}

impl PortDirection {
    /// The Verilog keyword for this direction.
    pub fn keyword(self) -> &'static str {
        match self {
            PortDirection::Input => "input",
            PortDirection::Output => "output",
        }
    }
}

/// The bit width of a port.
///
/// Either a literal bit count or the name of a module parameter. Only a
/// positive literal or a legal parameter name is renderable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Width {
    /// A fixed number of bits.
    Literal(u32),
    /// The value of a named parameter, e.g. `WIDTH`.
    Param(String),
}

impl Width {
    /// Returns `true` for the literal width `1`.
    pub fn is_single_bit(&self) -> bool {
        matches!(self, Width::Literal(1))
    }
}

impl From<u32> for Width {
    fn from(bits: u32) -> Self {
        Width::Literal(bits)
    }
}

impl From<&str> for Width {
    fn from(param: &str) -> Self {
        Width::Param(param.to_string())
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Literal(bits) => write!(f, "{bits}"),
            Width::Param(name) => write!(f, "{name:?}"),
        }
    }
}

/// A module parameter with an optional default literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// The parameter name.
    pub name: String,
    /// Default value text, emitted verbatim after `=`.
    pub default: Option<String>,
}

/// A port in a module's external interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Port {
    /// Input or output.
    pub direction: PortDirection,
    /// The port name.
    pub name: String,
    /// The port width.
    pub width: Width,
}

/// One hardware module: name, parameters, ports, and body text.
///
/// Parameters and ports keep declaration order. The body is opaque text that
/// is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDescriptor {
    name: String,
    parameters: Vec<Parameter>,
    ports: Vec<Port>,
    body: Option<String>,
}

impl ModuleDescriptor {
    /// Starts a descriptor with no parameters, ports, or body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            ports: Vec::new(),
            body: None,
        }
    }

    /// Declares a parameter with a default value.
    pub fn param(mut self, name: impl Into<String>, default: impl fmt::Display) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            default: Some(default.to_string()),
        });
        self
    }

    /// Declares a parameter without a default value.
    pub fn bare_param(mut self, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            default: None,
        });
        self
    }

    /// Declares an input port.
    pub fn input(self, name: impl Into<String>, width: impl Into<Width>) -> Self {
        self.port(PortDirection::Input, name, width)
    }

    /// Declares an output port.
    pub fn output(self, name: impl Into<String>, width: impl Into<Width>) -> Self {
        self.port(PortDirection::Output, name, width)
    }

    fn port(
        mut self,
        direction: PortDirection,
        name: impl Into<String>,
        width: impl Into<Width>,
    ) -> Self {
        self.ports.push(Port {
            direction,
            name: name.into(),
            width: width.into(),
        });
        self
    }

    /// Sets the body text, replacing any previous body.
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The module name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Ports in declaration order.
    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// The body text, if one has been set.
    pub fn body_text(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Looks up a port by name.
    pub fn find_port(&self, name: &str) -> Option<&Port> {
        self.ports.iter().find(|p| p.name == name)
    }

    /// Checks the invariants required for rendering.
    ///
    /// The module name must be a legal identifier. There must be at least
    /// one port and a non-blank body. Port names must be legal identifiers
    /// and distinct, and every width must be a positive literal or a legal
    /// parameter name.
    pub fn validate(&self) -> Result<(), ConstructionError> {
        if !vgen_common::is_identifier(&self.name) {
            return Err(ConstructionError::InvalidName(self.name.clone()));
        }
        if self.ports.is_empty() {
            return Err(ConstructionError::MissingPorts {
                module: self.name.clone(),
            });
        }
        if self.body.as_deref().map_or(true, |b| b.trim().is_empty()) {
            return Err(ConstructionError::MissingBody {
                module: self.name.clone(),
            });
        }
        let mut seen = BTreeSet::new();
        for port in &self.ports {
            if !vgen_common::is_identifier(&port.name) {
                return Err(ConstructionError::InvalidPortName {
                    module: self.name.clone(),
                    port: port.name.clone(),
                });
            }
            if !seen.insert(port.name.as_str()) {
                return Err(ConstructionError::DuplicatePort {
                    module: self.name.clone(),
                    port: port.name.clone(),
                });
            }
            let ok = match &port.width {
                Width::Literal(bits) => *bits > 0,
                Width::Param(name) => vgen_common::is_identifier(name),
            };
            if !ok {
                return Err(ConstructionError::InvalidWidth {
                    module: self.name.clone(),
                    port: port.name.clone(),
                    width: port.width.to_string(),
                });
            }
        }
        Ok(())
    }
}
