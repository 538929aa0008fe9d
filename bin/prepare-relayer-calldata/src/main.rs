#![deny(unused_crate_dependencies)]
#![warn(missing_docs)]
#![warn(unused_extern_crates)]
#![warn(unused_imports)]

//! Prepare, simulate or submit `IRelayer` calls.

use std::sync::Arc;

use clap::Parser;
use envconfig::Envconfig;
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::{LocalWallet, Signer},
};
use eyre::{eyre, Result};
use relayer_client::IRelayerCalls;

use calls::TxOverrides;
use cli::{Args, Mode};
use config::Config;

mod calls;
mod cli;
mod config;
mod error;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let _sentry_guard = vlog::init();

    let args = Args::parse();
    let overrides = TxOverrides {
        gas_limit: args.gas_limit,
        gas_price: args.gas_price,
    };
    let call: IRelayerCalls = args.call.into();

    match args.mode {
        Mode::Encode => {
            let encoded = relayer_client::create_interface().encode_call(call);

            println!("hex payload is\n0x{}", hex::encode(&encoded));
        }
        Mode::Call => {
            let config = Config::init_from_env()?;
            let provider = Provider::new(Http::new(config.eth_client_web3_url));
            let relayer = relayer_client::connect(config.contract_address.0, Arc::new(provider));

            vlog::info!("static call {call} on {:?}", config.contract_address.0);

            match calls::static_call(&relayer, call).await? {
                Some(sequence) => println!("sequence number is {sequence}"),
                None => println!("call succeeded"),
            }
        }
        Mode::Send => {
            let config = Config::init_from_env()?;
            let private_key = config
                .account_private_key
                .ok_or_else(|| eyre!("RELAYER_ACCOUNT_PRIVATE_KEY is required in send mode"))?;

            let provider = Provider::new(Http::new(config.eth_client_web3_url));
            let chain_id = provider.get_chainid().await?;
            let wallet = private_key
                .parse::<LocalWallet>()?
                .with_chain_id(chain_id.as_u64());

            vlog::info!(
                "submitting {call} to {:?} from {:?}",
                config.contract_address.0,
                wallet.address()
            );

            let client = Arc::new(SignerMiddleware::new(provider, wallet));
            let relayer = relayer_client::connect(config.contract_address.0, client);

            match calls::submit(&relayer, call, &overrides).await? {
                Some(receipt) => {
                    vlog::info!("mined in block {:?}", receipt.block_number);
                    println!("transaction hash is {:?}", receipt.transaction_hash);
                }
                None => {
                    vlog::warn!("transaction dropped from the mempool");
                    return Err(eyre!("transaction was not mined"));
                }
            }
        }
    }

    Ok(())
}
