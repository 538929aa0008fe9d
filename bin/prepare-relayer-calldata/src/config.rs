use std::str::FromStr;

use envconfig::Envconfig;
use ethers::types::Address;
use url::Url;

/// Contract address, rejected when mixed case does not match its EIP-55 checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ContractAddress(pub Address);

impl FromStr for ContractAddress {
    type Err = relayer_client::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        relayer_client::parse_address(s).map(Self)
    }
}

/// Configuration needed to reach a deployed `IRelayer` contract.
#[derive(Envconfig, Debug)]
pub(crate) struct Config {
    /// JSON-RPC endpoint of the chain the contract is deployed on.
    #[envconfig(from = "RELAYER_ETH_CLIENT_WEB3_URL")]
    pub eth_client_web3_url: Url,

    /// Address of the deployed contract.
    #[envconfig(from = "RELAYER_CONTRACT_ADDRESS")]
    pub contract_address: ContractAddress,

    /// Key of the account submitting transactions, only needed in `send` mode.
    #[envconfig(from = "RELAYER_ACCOUNT_PRIVATE_KEY")]
    pub account_private_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn read_only_config() {
        let config = Config::init_from_hashmap(&vars(&[
            ("RELAYER_ETH_CLIENT_WEB3_URL", "http://localhost:8545"),
            ("RELAYER_CONTRACT_ADDRESS", "0x0a992d191deec32afe36203ad87d7d289a738f81"),
        ]))
        .unwrap();

        assert_eq!(config.eth_client_web3_url.as_str(), "http://localhost:8545/");
        assert_eq!(
            config.contract_address.0,
            "0a992d191deec32afe36203ad87d7d289a738f81".parse::<Address>().unwrap()
        );
        assert_eq!(config.account_private_key, None);
    }

    #[test]
    fn malformed_address_is_rejected() {
        let res = Config::init_from_hashmap(&vars(&[
            ("RELAYER_ETH_CLIENT_WEB3_URL", "http://localhost:8545"),
            ("RELAYER_CONTRACT_ADDRESS", "0x1234"),
        ]));

        assert!(res.is_err());
    }

    #[test]
    fn contract_address_checksum_is_verified() {
        let checksummed = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

        assert_eq!(
            checksummed.parse::<ContractAddress>().unwrap().0,
            "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse::<Address>().unwrap()
        );

        let res = Config::init_from_hashmap(&vars(&[
            ("RELAYER_ETH_CLIENT_WEB3_URL", "http://localhost:8545"),
            ("RELAYER_CONTRACT_ADDRESS", "0x5AAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"),
        ]));

        assert!(res.is_err());
    }

    #[test]
    fn missing_url_is_rejected() {
        let res = Config::init_from_hashmap(&vars(&[(
            "RELAYER_CONTRACT_ADDRESS",
            "0x0a992d191deec32afe36203ad87d7d289a738f81",
        )]));

        assert!(res.is_err());
    }
}
