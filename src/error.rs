use thiserror::Error;

/// Crate-specific error enum.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Wrapper around `std::io::Error`.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A component of the vector text is not a float.
    #[error(transparent)]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// The vector text is not enclosed in parentheses.
    #[error("the vector text is not enclosed in parentheses: {0}")]
    MissingParentheses(String),

    /// The vector text does not hold exactly three components.
    #[error("expected three components, found {1}: {0}")]
    InvalidComponentCount(String, usize),
}
