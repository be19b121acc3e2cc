// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Pack metadata documents.
//!
//! The document is an EDN map with a single `meta` entry:
//!
//! ```text
//! {meta {:name "Ghosts" :author "Status" :thumbnail "e301..." :preview "e301..."
//!        :stickers [{:hash "e301..."} {:hash "e301..."}]}}
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::MetadataError;

use super::edn::Edn;

/// One sticker in a pack's metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerMetadata {
    /// Content hash of the sticker image
    pub hash: String,
}

/// Descriptive fields of a sticker pack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackMetadata {
    pub name: String,
    pub author: String,
    /// Content hash of the thumbnail image
    pub thumbnail: String,
    /// Content hash of the preview image
    pub preview: String,
    pub stickers: Vec<StickerMetadata>,
}

impl PackMetadata {
    /// Decode a downloaded metadata document.
    ///
    /// Keys may be keywords, symbols or strings and match regardless of case.
    /// Missing fields and `nil` values decode as empty.
    pub fn from_edn(document: &[u8]) -> Result<Self, MetadataError> {
        let text = std::str::from_utf8(document).map_err(|_| MetadataError::InvalidUtf8)?;
        let root = Edn::parse(text)?;
        if !matches!(root, Edn::Map(_)) {
            return Err(MetadataError::UnexpectedType {
                field: "document",
                expected: "map",
            });
        }

        let meta = match root.get("meta") {
            None | Some(Edn::Nil) => return Ok(Self::default()),
            Some(meta @ Edn::Map(_)) => meta,
            Some(_) => {
                return Err(MetadataError::UnexpectedType {
                    field: "meta",
                    expected: "map",
                })
            }
        };

        let stickers = match meta.get("stickers") {
            None | Some(Edn::Nil) => Vec::new(),
            Some(value) => value
                .as_seq()
                .ok_or(MetadataError::UnexpectedType {
                    field: "stickers",
                    expected: "vector",
                })?
                .iter()
                .map(|sticker| {
                    if !matches!(sticker, Edn::Map(_)) {
                        return Err(MetadataError::UnexpectedType {
                            field: "stickers",
                            expected: "vector of maps",
                        });
                    }
                    Ok(StickerMetadata {
                        hash: string_field(sticker, "hash")?,
                    })
                })
                .collect::<Result<_, _>>()?,
        };

        Ok(Self {
            name: string_field(meta, "name")?,
            author: string_field(meta, "author")?,
            thumbnail: string_field(meta, "thumbnail")?,
            preview: string_field(meta, "preview")?,
            stickers,
        })
    }
}

fn string_field(map: &Edn, field: &'static str) -> Result<String, MetadataError> {
    match map.get(field) {
        None | Some(Edn::Nil) => Ok(String::new()),
        Some(value) => value
            .as_str()
            .map(str::to_owned)
            .ok_or(MetadataError::UnexpectedType {
                field,
                expected: "string",
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GHOSTS: &str = r#"
        {meta {:name "Ghosts"
               :author "Status"
               :thumbnail "e30101701220aa"
               :preview "e30101701220bb"
               :stickers [{:hash "e30101701220c1"} {:hash "e30101701220c2"}]}}
    "#;

    #[test]
    fn test_decode_full_document() {
        let meta = PackMetadata::from_edn(GHOSTS.as_bytes()).unwrap();
        assert_eq!(meta.name, "Ghosts");
        assert_eq!(meta.author, "Status");
        assert_eq!(meta.thumbnail, "e30101701220aa");
        assert_eq!(meta.preview, "e30101701220bb");
        assert_eq!(
            meta.stickers,
            vec![
                StickerMetadata {
                    hash: "e30101701220c1".into()
                },
                StickerMetadata {
                    hash: "e30101701220c2".into()
                },
            ]
        );
    }

    #[test]
    fn test_keys_are_case_insensitive_in_any_form() {
        let doc = r#"{"Meta" {Name "Cats", :AUTHOR "Someone"}}"#;
        let meta = PackMetadata::from_edn(doc.as_bytes()).unwrap();
        assert_eq!(meta.name, "Cats");
        assert_eq!(meta.author, "Someone");
        assert!(meta.stickers.is_empty());
    }

    #[test]
    fn test_missing_and_nil_fields_are_empty() {
        let meta = PackMetadata::from_edn(b"{meta {:name nil :stickers nil}}").unwrap();
        assert_eq!(meta, PackMetadata::default());

        let meta = PackMetadata::from_edn(b"{:other 1}").unwrap();
        assert_eq!(meta, PackMetadata::default());
    }

    #[test]
    fn test_wrong_shapes() {
        assert_eq!(
            PackMetadata::from_edn(b"[1 2]"),
            Err(MetadataError::UnexpectedType {
                field: "document",
                expected: "map"
            })
        );
        assert_eq!(
            PackMetadata::from_edn(b"{meta {:name 42}}"),
            Err(MetadataError::UnexpectedType {
                field: "name",
                expected: "string"
            })
        );
        assert!(matches!(
            PackMetadata::from_edn(b"{meta {:stickers \"none\"}}"),
            Err(MetadataError::UnexpectedType {
                field: "stickers",
                ..
            })
        ));
        assert_eq!(
            PackMetadata::from_edn(&[0xff, 0xfe]),
            Err(MetadataError::InvalidUtf8)
        );
    }

    #[test]
    fn test_deeply_nested_document_is_rejected() {
        let doc = format!(r#"{{meta {{:name "x" :stickers {}}}}}"#, "[".repeat(200_000));
        assert!(matches!(
            PackMetadata::from_edn(doc.as_bytes()),
            Err(MetadataError::NestingTooDeep { .. })
        ));
    }
}
