// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Sticker catalog against a mocked transport and an in-memory fetcher.
//!
//! The catalog runs with a concurrency of one so mocked responses are
//! consumed in a fixed order.

mod helpers;

use std::collections::HashSet;
use std::time::Duration;

use alloy_primitives::{address, bytes, Address, Bytes, FixedBytes, U256};
use alloy_provider::RootProvider;
use alloy_transport::mock::Asserter;
use helpers::{
    init_tracing, mocked_provider, push_return, silent_provider, tracked_provider,
    MemoryFetcher,
};
use sticker_bindings::{
    BindingConfig, BindingError, CatalogConfig, CatalogError, ContentHash, PackStatus,
    StickerCatalog, StickerDeployment,
};

const DEPLOYMENT: StickerDeployment = StickerDeployment {
    sticker_market: address!("0x12824271339304d3a9f7e096e62a2a7e73b4a7e7"),
    sticker_pack: address!("0x110101156e8f0743948b2a61afcf3994a8fb172e"),
    sticker_type: address!("0x0577215622f43a39f4bc9640806dfea9b10d2a36"),
    snt: address!("0x744d70fdbe2ba4cf95131626614a1763df805b9e"),
};
const OWNER: Address = address!("0x2222222222222222222222222222222222222222");
const BUYER: Address = address!("0x1111111111111111111111111111111111111111");

const GHOSTS: &str = r#"{meta {:name "Ghosts" :author "Status"
    :thumbnail "e30101701220a0" :preview "e30101701220a1"
    :stickers [{:hash "e30101701220b0"} {:hash "e30101701220b1"}]}}"#;
const CATS: &str = r#"{meta {:name "Cats" :author "Someone"
    :thumbnail "e30101701220c0" :preview "e30101701220c1"
    :stickers [{:hash "e30101701220d0"}]}}"#;

fn ghosts_hash() -> Bytes {
    bytes!("e30101701220000000000000000000000000000000000000000000000000000000000000000001")
}

fn cats_hash() -> Bytes {
    bytes!("e30101701220000000000000000000000000000000000000000000000000000000000000000002")
}

fn catalog(fetcher: MemoryFetcher) -> (StickerCatalog<RootProvider, MemoryFetcher>, Asserter) {
    let (provider, asserter) = mocked_provider();
    let catalog = StickerCatalog::from_deployment(
        &DEPLOYMENT,
        provider,
        BindingConfig::default(),
        fetcher,
        CatalogConfig::default().with_max_concurrent_requests(1),
    )
    .unwrap();
    (catalog, asserter)
}

fn fetcher() -> MemoryFetcher {
    MemoryFetcher::new()
        .with_document(&ContentHash::new(ghosts_hash()), GHOSTS)
        .with_document(&ContentHash::new(cats_hash()), CATS)
}

fn push_pack_data(asserter: &Asserter, price: u64, contenthash: Bytes) {
    push_return(
        asserter,
        (
            vec![FixedBytes::<4>::from([0, 0, 0, 1])],
            OWNER,
            true,
            U256::from(1_600_000_000u64),
            U256::from(price),
            contenthash,
        ),
    );
}

#[tokio::test]
async fn fetch_pack_translates_hashes() {
    init_tracing();
    let (catalog, asserter) = catalog(fetcher());

    push_pack_data(&asserter, 100, ghosts_hash());
    let pack = catalog.fetch_pack(U256::from(4), true).await.unwrap();

    assert_eq!(pack.id, U256::from(4));
    assert_eq!(pack.name, "Ghosts");
    assert_eq!(pack.author, "Status");
    assert_eq!(pack.owner, OWNER);
    assert_eq!(pack.price, U256::from(100));
    assert_eq!(pack.preview, "https://ipfs.example/e30101701220a1");
    assert_eq!(pack.thumbnail, "https://ipfs.example/e30101701220a0");
    assert_eq!(pack.stickers.len(), 2);
    assert_eq!(pack.stickers[0].pack_id, U256::from(4));
    assert_eq!(pack.stickers[0].hash, "e30101701220b0");
    assert_eq!(pack.stickers[0].url, "https://ipfs.example/e30101701220b0");
    assert_eq!(pack.status, PackStatus::Available);
}

#[tokio::test]
async fn fetch_pack_keeps_raw_hashes() {
    let (catalog, asserter) = catalog(fetcher());

    push_pack_data(&asserter, 100, cats_hash());
    let pack = catalog.fetch_pack(U256::from(1), false).await.unwrap();

    assert_eq!(pack.preview, "e30101701220c1");
    assert_eq!(pack.thumbnail, "e30101701220c0");
    assert_eq!(pack.stickers[0].hash, "e30101701220d0");
    assert!(pack.stickers[0].url.is_empty());
}

#[tokio::test]
async fn fetch_pack_reports_missing_content() {
    let fetcher = MemoryFetcher::new();
    let (catalog, asserter) = catalog(fetcher.clone());

    push_pack_data(&asserter, 100, ghosts_hash());
    let err = catalog.fetch_pack(U256::from(0), true).await.unwrap_err();

    let expected = ContentHash::new(ghosts_hash()).to_hex();
    match err {
        CatalogError::ContentFetch { hash, .. } => assert_eq!(hash, expected),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(fetcher.requests(), vec![expected]);
}

#[tokio::test]
async fn available_packs_skips_known_ids() {
    let (catalog, asserter) = catalog(fetcher());

    push_return(&asserter, (U256::from(3),));
    push_pack_data(&asserter, 100, ghosts_hash());
    push_pack_data(&asserter, 250, cats_hash());

    let skip = HashSet::from([U256::from(1)]);
    let packs = catalog.available_packs(&skip).await.unwrap();

    let ids: Vec<_> = packs.iter().map(|pack| pack.id).collect();
    assert_eq!(ids, vec![U256::from(0), U256::from(2)]);
    assert_eq!(packs[0].name, "Ghosts");
    assert_eq!(packs[1].name, "Cats");
    assert_eq!(packs[1].price, U256::from(250));
}

#[tokio::test]
async fn available_packs_returns_first_failure() {
    let (catalog, asserter) = catalog(fetcher());

    push_return(&asserter, (U256::from(2),));
    asserter.push_failure_msg("execution reverted");

    let err = catalog.available_packs(&HashSet::new()).await.unwrap_err();
    assert!(matches!(err, CatalogError::Binding(_)));
}

#[tokio::test]
async fn empty_registry_lists_nothing() {
    let (catalog, asserter) = catalog(fetcher());

    push_return(&asserter, (U256::ZERO,));
    let packs = catalog.available_packs(&HashSet::new()).await.unwrap();
    assert!(packs.is_empty());
}

#[tokio::test]
async fn purchased_pack_ids_follow_token_ownership() {
    let (catalog, asserter) = catalog(fetcher());

    push_return(&asserter, (U256::from(2),));
    push_return(&asserter, (U256::from(10),));
    push_return(&asserter, (U256::from(11),));
    push_return(&asserter, (U256::from(3),));
    push_return(&asserter, (U256::from(0),));

    let ids = catalog.purchased_pack_ids(BUYER).await.unwrap();
    assert_eq!(ids, vec![U256::from(3), U256::from(0)]);
}

#[tokio::test]
async fn market_marks_purchased_packs() {
    let (catalog, asserter) = catalog(fetcher());

    // available_packs: packCount, then getPackData for 0 and 1
    push_return(&asserter, (U256::from(2),));
    push_pack_data(&asserter, 100, ghosts_hash());
    push_pack_data(&asserter, 250, cats_hash());
    // purchased_pack_ids(BUYER): one token of pack 1
    push_return(&asserter, (U256::from(1),));
    push_return(&asserter, (U256::from(42),));
    push_return(&asserter, (U256::from(1),));

    let packs = catalog.market(&[BUYER], &HashSet::new()).await.unwrap();

    assert_eq!(packs.len(), 2);
    assert_eq!(packs[0].status, PackStatus::Available);
    assert_eq!(packs[1].status, PackStatus::Purchased);
}

#[tokio::test(start_paused = true)]
async fn fetch_pack_gives_up_on_a_silent_node() {
    let fetcher = MemoryFetcher::new();
    let catalog = StickerCatalog::from_deployment(
        &DEPLOYMENT,
        silent_provider(),
        BindingConfig::default(),
        fetcher.clone(),
        CatalogConfig::default(),
    )
    .unwrap();

    let err = catalog.fetch_pack(U256::from(1), true).await.unwrap_err();
    match err {
        CatalogError::Binding(BindingError::Timeout {
            operation,
            timeout_ms,
        }) => {
            assert_eq!(operation, "StickerType.getPackData(uint256)");
            assert_eq!(timeout_ms, 5_000);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(fetcher.requests().is_empty());
}

#[tokio::test(start_paused = true)]
async fn market_keeps_requests_within_the_concurrency_limit() {
    let (provider, asserter, tracker) = tracked_provider(Duration::from_millis(10));
    let catalog = StickerCatalog::from_deployment(
        &DEPLOYMENT,
        provider,
        BindingConfig::default(),
        fetcher(),
        CatalogConfig::default().with_max_concurrent_requests(2),
    )
    .unwrap();

    // packCount + 3 accounts * (balanceOf + 2 tokenOfOwnerByIndex + 2 tokenPackId)
    for _ in 0..16 {
        push_return(&asserter, (U256::from(2),));
    }

    let skip = HashSet::from([U256::from(0), U256::from(1)]);
    let accounts = [BUYER, OWNER, Address::repeat_byte(0x33)];
    let packs = catalog.market(&accounts, &skip).await.unwrap();

    assert!(packs.is_empty());
    assert!(asserter.read_q().is_empty());
    assert_eq!(tracker.peak(), 2);
}
