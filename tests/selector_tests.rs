// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Selector maps agree with the `sol!`-generated bindings.

use alloy_sol_types::{SolCall, SolEvent};
use sticker_bindings::contracts::{
    IERC165, IERC20Token, IERC721Full, IStickerMarket, IStickerPack, IStickerType,
};
use sticker_bindings::ContractKind;

#[test]
fn every_abi_function_has_a_selector_entry() -> anyhow::Result<()> {
    for kind in ContractKind::ALL {
        let abi = kind.parse_abi()?;
        let selectors = kind.selectors()?;
        let functions: Vec<_> = abi.functions().collect();

        assert_eq!(selectors.len(), functions.len(), "{kind}");
        for function in functions {
            assert_eq!(
                selectors.get(&function.selector()),
                Some(function.signature().as_str()),
                "{kind}"
            );
        }
    }
    Ok(())
}

#[test]
fn selector_maps_match_generated_calls() -> anyhow::Result<()> {
    let market = ContractKind::StickerMarket.selectors()?;
    for (selector, signature) in [
        (
            IStickerMarket::buyTokenCall::SELECTOR,
            IStickerMarket::buyTokenCall::SIGNATURE,
        ),
        (
            IStickerMarket::registerPackCall::SELECTOR,
            IStickerMarket::registerPackCall::SIGNATURE,
        ),
        (
            IStickerMarket::receiveApprovalCall::SELECTOR,
            IStickerMarket::receiveApprovalCall::SIGNATURE,
        ),
    ] {
        assert_eq!(market.get(&selector.into()), Some(signature));
    }

    let pack = ContractKind::StickerPack.selectors()?;
    assert_eq!(
        pack.get(&IStickerPack::tokenPackIdCall::SELECTOR.into()),
        Some(IStickerPack::tokenPackIdCall::SIGNATURE)
    );

    let registry = ContractKind::StickerType.selectors()?;
    assert_eq!(
        registry.get(&IStickerType::getPackDataCall::SELECTOR.into()),
        Some(IStickerType::getPackDataCall::SIGNATURE)
    );
    Ok(())
}

#[test]
fn well_known_selectors() {
    let erc20 = ContractKind::Erc20Token.selectors().unwrap();
    assert_eq!(
        erc20.get_hex("a9059cbb"),
        Some("transfer(address,uint256)")
    );
    assert_eq!(
        erc20.get_hex("0x095ea7b3"),
        Some("approve(address,uint256)")
    );
    assert_eq!(
        IERC20Token::transferCall::SELECTOR,
        [0xa9, 0x05, 0x9c, 0xbb]
    );

    let erc165 = ContractKind::Erc165.selectors().unwrap();
    assert_eq!(
        erc165.get_hex("01ffc9a7"),
        Some("supportsInterface(bytes4)")
    );
    assert_eq!(
        IERC165::supportsInterfaceCall::SELECTOR,
        [0x01, 0xff, 0xc9, 0xa7]
    );

    let erc721 = ContractKind::Erc721Full.selectors().unwrap();
    assert_eq!(
        erc721.get_hex("42842e0e"),
        Some("safeTransferFrom(address,address,uint256)")
    );
    assert_eq!(
        erc721.get_hex("b88d4fde"),
        Some("safeTransferFrom(address,address,uint256,bytes)")
    );
    assert_eq!(
        erc721.selector_of("ownerOf(uint256)").map(|s| s.to_string()),
        Some("0x6352211e".to_string())
    );
}

#[test]
fn event_signatures_are_canonical() {
    assert_eq!(
        IERC721Full::Transfer::SIGNATURE,
        "Transfer(address,address,uint256)"
    );
    assert_eq!(
        IERC20Token::Transfer::SIGNATURE_HASH,
        IERC721Full::Transfer::SIGNATURE_HASH
    );
    assert_eq!(
        IStickerType::Register::SIGNATURE,
        "Register(uint256,uint256,bytes,bool)"
    );
    assert_eq!(
        IStickerType::Categorized::SIGNATURE,
        "Categorized(bytes4,uint256)"
    );
}
