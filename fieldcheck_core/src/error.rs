use thiserror::Error;

use crate::FieldKind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Unknown field kind: {0}")]
    UnknownKind(String),

    #[error("Value does not match the `{kind}` field format")]
    NoMatch { kind: FieldKind },
}
