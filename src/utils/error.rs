use thiserror::Error;

#[derive(Error, Debug)]
pub enum MachineError {
    #[error("Unknown beverage: {name}")]
    UnknownBeverage { name: String },

    #[error("{beverage} does not take milk")]
    MilkNotSupported { beverage: String },

    #[error("Invalid configuration value for {field} ({value}): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfig { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl MachineError {
    /// Exit code for the CLI: configuration problems are distinguished
    /// from order problems so scripts can tell them apart.
    pub fn exit_code(&self) -> i32 {
        match self {
            MachineError::InvalidConfigValue { .. }
            | MachineError::MissingConfig { .. }
            | MachineError::Io(_)
            | MachineError::Toml(_) => 2,
            MachineError::UnknownBeverage { .. }
            | MachineError::MilkNotSupported { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, MachineError>;
