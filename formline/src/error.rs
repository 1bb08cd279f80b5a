//! Form error type.

use thiserror::Error;

use crate::form::FieldId;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("field `{prompt}` already has a validator")]
    ValidatorAlreadyAttached { prompt: String },
    #[error("no field with id {0:?} in this form")]
    UnknownField(FieldId),
    #[error("console error: {0}")]
    Io(#[from] std::io::Error),
}
