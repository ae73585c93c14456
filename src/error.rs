use crate::types::RobotName;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BreederError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Robot {0} is not present in the population")]
    MissingRobot(RobotName),

    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BreederError>;
