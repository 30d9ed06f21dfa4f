//! Error types for cycle description.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CycleError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Non-physical condition: {what}")]
    NonPhysical { what: &'static str },
}

pub type CycleResult<T> = Result<T, CycleError>;
