#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum ArgError {
    #[error(transparent)]
    Hex(#[from] hex::FromHexError),

    #[error("expected {expected} bytes, got {actual}")]
    WrongLength { expected: usize, actual: usize },
}
