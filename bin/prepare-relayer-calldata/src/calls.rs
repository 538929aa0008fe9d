use ethers::{
    abi::Detokenize, contract::ContractCall, providers::Middleware, types::TransactionReceipt,
};
use relayer_client::{IRelayer, IRelayerCalls, Result};

/// Transaction fields set by the caller instead of being filled by the node.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TxOverrides {
    pub gas_limit: Option<u64>,
    pub gas_price: Option<u64>,
}

impl TxOverrides {
    fn apply<M: Middleware, D: Detokenize>(
        &self,
        mut call: ContractCall<M, D>,
    ) -> ContractCall<M, D> {
        if let Some(gas_limit) = self.gas_limit {
            call = call.gas(gas_limit);
        }
        if let Some(gas_price) = self.gas_price {
            call = call.gas_price(gas_price);
        }
        call
    }
}

/// Statically call `call` on the contract.
///
/// Returns the sequence number the contract would assign, `None` for
/// `replaceMessage` which returns nothing.
pub(crate) async fn static_call<M: Middleware>(
    relayer: &IRelayer<M>,
    call: IRelayerCalls,
) -> Result<Option<u64>> {
    let res = match call {
        IRelayerCalls::ReplaceMessage(c) => {
            relayer
                .replace_message(
                    c.original_message,
                    c.original_attestation,
                    c.new_message_body,
                    c.new_destination_caller,
                )
                .call()
                .await?;
            None
        }
        IRelayerCalls::SendMessage(c) => Some(
            relayer
                .send_message(c.destination_domain, c.recipient, c.message_body)
                .call()
                .await?,
        ),
        IRelayerCalls::SendMessageWithCaller(c) => Some(
            relayer
                .send_message_with_caller(
                    c.destination_domain,
                    c.recipient,
                    c.destination_caller,
                    c.message_body,
                )
                .call()
                .await?,
        ),
    };

    Ok(res)
}

/// Submit `call` as a transaction and wait for it to be mined.
///
/// `None` means the transaction was dropped from the mempool.
pub(crate) async fn submit<M: Middleware>(
    relayer: &IRelayer<M>,
    call: IRelayerCalls,
    overrides: &TxOverrides,
) -> Result<Option<TransactionReceipt>> {
    let receipt = match call {
        IRelayerCalls::ReplaceMessage(c) => {
            overrides
                .apply(relayer.replace_message(
                    c.original_message,
                    c.original_attestation,
                    c.new_message_body,
                    c.new_destination_caller,
                ))
                .send()
                .await?
                .await?
        }
        IRelayerCalls::SendMessage(c) => {
            overrides
                .apply(relayer.send_message(c.destination_domain, c.recipient, c.message_body))
                .send()
                .await?
                .await?
        }
        IRelayerCalls::SendMessageWithCaller(c) => {
            overrides
                .apply(relayer.send_message_with_caller(
                    c.destination_domain,
                    c.recipient,
                    c.destination_caller,
                    c.message_body,
                ))
                .send()
                .await?
                .await?
        }
    };

    Ok(receipt)
}
