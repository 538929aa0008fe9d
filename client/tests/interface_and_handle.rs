use std::sync::Arc;

use ethers::{
    providers::Provider,
    types::{Address, Bytes},
};
use pretty_assertions::assert_eq;
use relayer_client::{IRelayerCalls, SendMessageWithCallerCall};

#[test]
fn handle_and_interface_agree_on_call_data() {
    let (provider, _mock) = Provider::mocked();
    let relayer = relayer_client::connect(Address::repeat_byte(0x44), Arc::new(provider));
    let iface = relayer_client::create_interface();

    let body = Bytes::from_static(b"cross-domain payload");

    let from_handle = relayer
        .send_message_with_caller(3, [0x10; 32], [0x20; 32], body.clone())
        .calldata()
        .unwrap();
    let from_interface = iface.encode_send_message_with_caller(3, [0x10; 32], [0x20; 32], body);

    assert_eq!(from_handle, from_interface);
}

#[test]
fn interface_decodes_what_handle_encodes() {
    let (provider, _mock) = Provider::mocked();
    let relayer = relayer_client::connect(Address::zero(), Arc::new(provider));
    let iface = relayer_client::create_interface();

    let calldata = relayer
        .send_message_with_caller(9, [0x01; 32], [0x02; 32], Bytes::from_static(b"x"))
        .calldata()
        .unwrap();

    assert_eq!(
        iface.decode_call(calldata).unwrap(),
        IRelayerCalls::SendMessageWithCaller(SendMessageWithCallerCall {
            destination_domain: 9,
            recipient: [0x01; 32],
            destination_caller: [0x02; 32],
            message_body: Bytes::from_static(b"x"),
        })
    );
}

#[test]
fn interface_and_handle_share_the_abi() {
    let (provider, _mock) = Provider::mocked();
    let relayer = relayer_client::connect(Address::zero(), Arc::new(provider));
    let iface = relayer_client::create_interface();

    assert_eq!(iface.abi(), relayer_client::abi());
    assert_eq!(relayer.abi(), relayer_client::abi());
    assert!(std::ptr::eq(relayer_client::abi(), relayer_client::abi()));
}
