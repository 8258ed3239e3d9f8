//! Error types for articulation configuration.

use thiserror::Error;

/// Errors raised while validating, loading or binding an articulation configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A joint-name pattern is not a valid regular expression.
    #[error("invalid joint pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A scalar field holds a value outside its allowed range.
    #[error("{field} = {value} is out of range ({expected})")]
    OutOfRange {
        field: String,
        value: f64,
        expected: &'static str,
    },

    /// A joint is not selected by any actuator group.
    #[error("joint '{0}' is not covered by any actuator group")]
    UnactuatedJoint(String),

    /// The asset's joint list names the same joint twice.
    #[error("joint '{0}' is listed more than once")]
    DuplicateJoint(String),

    /// A joint is selected by more than one actuator group.
    #[error("joint '{joint}' is claimed by actuator groups '{first}' and '{second}'")]
    DuplicateActuator {
        joint: String,
        first: String,
        second: String,
    },

    /// A `joint_names_expr` entry selects no joint of the asset.
    #[error("pattern '{pattern}' of actuator group '{group}' matches no joint")]
    UnmatchedPattern { group: String, pattern: String },

    /// A joint selected by a group has no stiffness or damping entry.
    #[error("joint '{joint}' in actuator group '{group}' has no {gain} entry")]
    MissingGain {
        group: String,
        joint: String,
        gain: &'static str,
    },

    /// The initial state names a joint the asset does not have.
    #[error("initial state references unknown joint '{0}'")]
    UnknownJoint(String),

    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
