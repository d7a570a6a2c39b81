use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HaversineError {
    #[error("expected 4 coordinate arguments, got {found}")]
    Usage { found: usize },

    #[error("invalid numeric argument for {name}: {value:?}")]
    InvalidNumber {
        name: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("non-finite numeric argument for {name}: {value:?}")]
    NonFinite { name: &'static str, value: String },
}
