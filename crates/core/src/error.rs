use thiserror::Error;

use crate::model::code::CodeParseError;
use crate::model::{MockTestValidationError, PlanError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Code(#[from] CodeParseError),
    #[error(transparent)]
    MockTest(#[from] MockTestValidationError),
}
