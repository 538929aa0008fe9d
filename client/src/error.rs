use ethers::{abi::AbiError, contract::ContractError, prelude::Middleware, providers::ProviderError};

#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    ProviderError(#[from] ProviderError),

    #[error("Contract error {0}")]
    ContractError(String),

    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error("Invalid contract address {0}")]
    InvalidAddress(String),

    #[error("Function {0} is not declared by IRelayer")]
    UnknownFunction(String),
}

impl<M: Middleware> From<ContractError<M>> for Error {
    fn from(value: ContractError<M>) -> Self {
        Self::ContractError(value.to_string())
    }
}

/// The client result type.
pub type Result<T> = std::result::Result<T, Error>;
