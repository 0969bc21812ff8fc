use thiserror::Error;

#[derive(Error, Debug)]
pub enum PizzeriaError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] toml::de::Error),
    #[error("Unknown pizza type: {0}")]
    UnknownPizza(String),
    #[error("Unknown topping: {0}")]
    UnknownTopping(String),
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),
    #[error("{0} is out of stock")]
    OutOfStock(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl PizzeriaError {
    /// True when the caller supplied a label nothing on the menu answers to.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::UnknownPizza(_) | Self::UnknownTopping(_) | Self::UnknownPaymentMethod(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PizzeriaError>;
