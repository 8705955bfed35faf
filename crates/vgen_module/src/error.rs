//! Errors raised when a module descriptor cannot be rendered.

/// A descriptor that violates a rendering invariant.
///
/// Construction errors are fatal: the generator aborts the run on the first
/// one rather than emitting a partial module.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// The module name is empty or not a legal Verilog identifier.
    #[error("invalid module name '{0}'")]
    InvalidName(String),

    /// The module declares no ports.
    #[error("module '{module}' has no ports")]
    MissingPorts {
        /// The offending module.
        module: String,
    },

    /// The module has no body or a blank one.
    #[error("module '{module}' has no body")]
    MissingBody {
        /// The offending module.
        module: String,
    },

    /// A port name is empty or not a legal Verilog identifier.
    #[error("module '{module}': invalid port name '{port}'")]
    InvalidPortName {
        /// The offending module.
        module: String,
        /// The port name as written.
        port: String,
    },

    /// Two ports share a name.
    #[error("module '{module}': port '{port}' declared more than once")]
    DuplicatePort {
        /// The offending module.
        module: String,
        /// The repeated port name.
        port: String,
    },

    /// A port width is neither a positive literal nor a parameter name.
    #[error("module '{module}': port '{port}' has unsupported width {width}")]
    InvalidWidth {
        /// The offending module.
        module: String,
        /// The port carrying the bad width.
        port: String,
        /// The width as written.
        width: String,
    },
}
