#![deny(unused_crate_dependencies)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]
#![warn(unused_imports)]

//! Typed bindings for the `IRelayer` contract.
//!
//! Two ways to use them:
//!
//! * [`create_interface`] for encoding call data and decoding return data
//!   locally, without any network access.
//! * [`connect`] for binding the ABI to a deployed contract through a
//!   [`Middleware`](ethers::providers::Middleware). Static calls and gas
//!   estimation work with any provider, submitting transactions needs a
//!   signing middleware.

mod error;
mod interface;

pub mod relayer;

pub use error::{Error, Result};
pub use interface::{create_interface, IRelayerInterface};
pub use relayer::{
    abi, connect, connect_str, parse_address, IRelayer, IRelayerCalls, ReplaceMessageCall,
    SendMessageCall, SendMessageWithCallerCall, FUNCTION_NAMES,
};
