// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use super::ContentHash;

/// Error type returned by content fetchers.
pub type FetchError = Box<dyn std::error::Error + Send + Sync>;

/// Source of pack metadata documents and sticker image URLs.
///
/// The catalog does not download anything itself; embedders plug in an IPFS
/// gateway client, a local cache or a fixture map in tests.
///
/// # Example
///
/// ```rust,ignore
/// struct Gateway { base: String, http: reqwest::Client }
///
/// #[async_trait]
/// impl PackContentFetcher for Gateway {
///     async fn fetch(&self, hash: &ContentHash) -> Result<Vec<u8>, FetchError> {
///         let url = format!("{}/{}", self.base, hash.to_hex());
///         Ok(self.http.get(url).send().await?.bytes().await?.to_vec())
///     }
///
///     fn sticker_url(&self, hash: &str) -> String {
///         format!("{}/{hash}", self.base)
///     }
/// }
/// ```
#[async_trait]
pub trait PackContentFetcher: Send + Sync {
    /// Download the document a content hash points to.
    async fn fetch(&self, hash: &ContentHash) -> Result<Vec<u8>, FetchError>;

    /// URL under which the image with content hash `hash` can be shown.
    fn sticker_url(&self, hash: &str) -> String;
}

#[async_trait]
impl<T: PackContentFetcher + ?Sized> PackContentFetcher for std::sync::Arc<T> {
    async fn fetch(&self, hash: &ContentHash) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(hash).await
    }

    fn sticker_url(&self, hash: &str) -> String {
        (**self).sticker_url(hash)
    }
}
