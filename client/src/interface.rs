//! Local encoding and decoding against the `IRelayer` ABI.

use std::ops::Deref;

use ethers::{
    abi::{AbiDecode, AbiEncode, Function},
    contract::BaseContract,
    types::{Bytes, Selector},
};

use crate::{
    relayer::{
        abi, IRelayerCalls, ReplaceMessageCall, SendMessageCall, SendMessageReturn,
        SendMessageWithCallerCall, SendMessageWithCallerReturn,
    },
    Error, Result,
};

/// Encoder and decoder for `IRelayer` calls that does not talk to the network.
///
/// Dereferences to [`BaseContract`] for everything not covered by the
/// typed helpers.
#[derive(Debug, Clone)]
pub struct IRelayerInterface {
    base: BaseContract,
}

/// Create an [`IRelayerInterface`].
pub fn create_interface() -> IRelayerInterface {
    IRelayerInterface {
        base: BaseContract::from(abi().clone()),
    }
}

impl IRelayerInterface {
    /// Look up a function descriptor by name.
    pub fn function(&self, name: &str) -> Result<&Function> {
        self.base
            .abi()
            .function(name)
            .map_err(|_| Error::UnknownFunction(name.to_string()))
    }

    /// Four byte selector of the function `name`.
    pub fn selector(&self, name: &str) -> Result<Selector> {
        Ok(self.function(name)?.short_signature())
    }

    /// Encode any typed `IRelayer` call into call data.
    pub fn encode_call(&self, call: impl Into<IRelayerCalls>) -> Bytes {
        call.into().encode().into()
    }

    /// Encode a `replaceMessage` call.
    pub fn encode_replace_message(
        &self,
        original_message: Bytes,
        original_attestation: Bytes,
        new_message_body: Bytes,
        new_destination_caller: [u8; 32],
    ) -> Bytes {
        self.encode_call(ReplaceMessageCall {
            original_message,
            original_attestation,
            new_message_body,
            new_destination_caller,
        })
    }

    /// Encode a `sendMessage` call.
    pub fn encode_send_message(
        &self,
        destination_domain: u32,
        recipient: [u8; 32],
        message_body: Bytes,
    ) -> Bytes {
        self.encode_call(SendMessageCall {
            destination_domain,
            recipient,
            message_body,
        })
    }

    /// Encode a `sendMessageWithCaller` call.
    pub fn encode_send_message_with_caller(
        &self,
        destination_domain: u32,
        recipient: [u8; 32],
        destination_caller: [u8; 32],
        message_body: Bytes,
    ) -> Bytes {
        self.encode_call(SendMessageWithCallerCall {
            destination_domain,
            recipient,
            destination_caller,
            message_body,
        })
    }

    /// Decode call data into the typed call it encodes.
    pub fn decode_call(&self, data: impl AsRef<[u8]>) -> Result<IRelayerCalls> {
        Ok(IRelayerCalls::decode(data)?)
    }

    /// Decode the sequence number returned by `sendMessage`.
    pub fn decode_send_message_output(&self, data: impl AsRef<[u8]>) -> Result<u64> {
        Ok(SendMessageReturn::decode(data)?.0)
    }

    /// Decode the sequence number returned by `sendMessageWithCaller`.
    pub fn decode_send_message_with_caller_output(&self, data: impl AsRef<[u8]>) -> Result<u64> {
        Ok(SendMessageWithCallerReturn::decode(data)?.0)
    }
}

impl Deref for IRelayerInterface {
    type Target = BaseContract;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
