use thiserror::Error;

pub type GfResult<T> = Result<T, GfError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Query {value} outside tabulated range [{lower}, {upper}]")]
    OutOfRange { value: f64, lower: f64, upper: f64 },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
