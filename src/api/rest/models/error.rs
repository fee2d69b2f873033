use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuantityValidationError {
    #[error("Quantity must be greater than zero, got {value}")]
    NotPositive { value: f64 },

    #[error("Quantity must be a finite value")]
    NotFinite,
}

#[derive(Debug, Error)]
pub enum BoundedPercentageValidationError {
    #[error("Percentage {value} is below the minimum of 0.1")]
    BelowMinimum { value: f64 },

    #[error("Percentage {value} is above the maximum of 99.9")]
    AboveMaximum { value: f64 },
}
