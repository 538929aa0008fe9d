//! ABI wrappers for the `IRelayer` contract.

use std::{str::FromStr, sync::Arc};

use ethers::{abi::Abi, providers::Middleware, types::Address, utils::to_checksum};

use crate::{Error, Result};

#[allow(missing_docs)]
pub mod codegen {
    use ethers::prelude::abigen;

    abigen!(IRelayer, "./src/contracts/IRelayer.json");
}

pub use codegen::{
    IRelayer, IRelayerCalls, ReplaceMessageCall, SendMessageCall, SendMessageReturn,
    SendMessageWithCallerCall, SendMessageWithCallerReturn,
};

/// Names of the functions declared by `IRelayer`, in ABI order.
pub const FUNCTION_NAMES: [&str; 3] = ["replaceMessage", "sendMessage", "sendMessageWithCaller"];

/// The `IRelayer` ABI.
///
/// Parsed once on first access and shared by every caller for the
/// lifetime of the process.
pub fn abi() -> &'static Abi {
    &codegen::IRELAYER_ABI
}

/// Bind the `IRelayer` ABI to a deployed contract.
///
/// # Arguments
///
/// * `address` - An address of the deployed contract
/// * `client` - A middleware to perform calls with. A plain provider
///   only allows static calls and gas estimation, a signing middleware
///   can also submit transactions.
pub fn connect<M: Middleware>(address: Address, client: Arc<M>) -> IRelayer<M> {
    IRelayer::new(address, client)
}

/// Parse a hex address, with or without the `0x` prefix.
///
/// Mixed-case input must carry a valid EIP-55 checksum.
pub fn parse_address(address: &str) -> Result<Address> {
    let invalid = || Error::InvalidAddress(address.to_string());

    let parsed = Address::from_str(address).map_err(|_| invalid())?;

    let digits = address.strip_prefix("0x").unwrap_or(address);
    let mixed_case = digits.chars().any(|c| c.is_ascii_uppercase())
        && digits.chars().any(|c| c.is_ascii_lowercase());

    if mixed_case && to_checksum(&parsed, None)[2..] != *digits {
        return Err(invalid());
    }

    Ok(parsed)
}

/// Same as [`connect`] but takes the contract address in its textual form.
pub fn connect_str<M: Middleware>(address: &str, client: Arc<M>) -> Result<IRelayer<M>> {
    Ok(connect(parse_address(address)?, client))
}
