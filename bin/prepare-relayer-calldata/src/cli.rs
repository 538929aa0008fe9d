use clap::{Parser, Subcommand, ValueEnum};
use ethers::types::Bytes;
use relayer_client::{IRelayerCalls, ReplaceMessageCall, SendMessageCall, SendMessageWithCallerCall};

use crate::error::ArgError;

#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// What to do with the prepared call
    #[arg(long, value_enum, default_value_t = Mode::Encode)]
    pub(crate) mode: Mode,

    /// Gas limit of the submitted transaction, estimated by the node if not set
    #[arg(long)]
    pub(crate) gas_limit: Option<u64>,

    /// Gas price in wei of the submitted transaction, estimated if not set
    #[arg(long)]
    pub(crate) gas_price: Option<u64>,

    #[command(subcommand)]
    pub(crate) call: Call,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    /// Print the hex call data
    Encode,
    /// Perform a static call against the deployed contract
    Call,
    /// Submit a transaction to the deployed contract
    Send,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Call {
    /// `sendMessage(uint32,bytes32,bytes)`
    SendMessage {
        #[arg(long)]
        destination_domain: u32,

        #[arg(long, value_parser = parse_bytes32)]
        recipient: [u8; 32],

        #[arg(long, value_parser = parse_bytes)]
        message_body: Bytes,
    },

    /// `sendMessageWithCaller(uint32,bytes32,bytes32,bytes)`
    SendMessageWithCaller {
        #[arg(long)]
        destination_domain: u32,

        #[arg(long, value_parser = parse_bytes32)]
        recipient: [u8; 32],

        #[arg(long, value_parser = parse_bytes32)]
        destination_caller: [u8; 32],

        #[arg(long, value_parser = parse_bytes)]
        message_body: Bytes,
    },

    /// `replaceMessage(bytes,bytes,bytes,bytes32)`
    ReplaceMessage {
        #[arg(long, value_parser = parse_bytes)]
        original_message: Bytes,

        #[arg(long, value_parser = parse_bytes)]
        original_attestation: Bytes,

        #[arg(long, value_parser = parse_bytes)]
        new_message_body: Bytes,

        #[arg(long, value_parser = parse_bytes32)]
        new_destination_caller: [u8; 32],
    },
}

impl From<Call> for IRelayerCalls {
    fn from(value: Call) -> Self {
        match value {
            Call::SendMessage {
                destination_domain,
                recipient,
                message_body,
            } => IRelayerCalls::SendMessage(SendMessageCall {
                destination_domain,
                recipient,
                message_body,
            }),
            Call::SendMessageWithCaller {
                destination_domain,
                recipient,
                destination_caller,
                message_body,
            } => IRelayerCalls::SendMessageWithCaller(SendMessageWithCallerCall {
                destination_domain,
                recipient,
                destination_caller,
                message_body,
            }),
            Call::ReplaceMessage {
                original_message,
                original_attestation,
                new_message_body,
                new_destination_caller,
            } => IRelayerCalls::ReplaceMessage(ReplaceMessageCall {
                original_message,
                original_attestation,
                new_message_body,
                new_destination_caller,
            }),
        }
    }
}

fn decode_hex(s: &str) -> Result<Vec<u8>, ArgError> {
    Ok(hex::decode(s.strip_prefix("0x").unwrap_or(s))?)
}

pub(crate) fn parse_bytes(s: &str) -> Result<Bytes, ArgError> {
    decode_hex(s).map(Into::into)
}

pub(crate) fn parse_bytes32(s: &str) -> Result<[u8; 32], ArgError> {
    let bytes = decode_hex(s)?;

    bytes
        .as_slice()
        .try_into()
        .map_err(|_| ArgError::WrongLength {
            expected: 32,
            actual: bytes.len(),
        })
}
