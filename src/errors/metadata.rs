// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for sticker pack metadata decoding.

/// Errors raised while reading an EDN metadata document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    /// The input ended in the middle of a form.
    #[error("Unexpected end of input at byte {offset}")]
    UnexpectedEof {
        /// Byte offset where more input was expected
        offset: usize,
    },

    /// A character that cannot start or continue a form.
    #[error("Unexpected character {found:?} at byte {offset}")]
    UnexpectedChar {
        /// The offending character
        found: char,
        /// Byte offset of the character
        offset: usize,
    },

    /// A map literal with an odd number of forms.
    #[error("Map at byte {offset} has a key without a value")]
    OddMapEntries {
        /// Byte offset of the opening brace
        offset: usize,
    },

    /// Syntax this reader does not handle (tagged literals, characters).
    #[error("Unsupported EDN syntax at byte {offset}: {details}")]
    Unsupported {
        /// Byte offset of the construct
        offset: usize,
        /// What was found
        details: String,
    },

    /// A numeric literal that does not parse.
    #[error("Invalid number {literal:?} at byte {offset}")]
    InvalidNumber {
        /// The literal text
        literal: String,
        /// Byte offset of the literal
        offset: usize,
    },

    /// Collections or discarded forms nested past the reader's limit.
    #[error("Forms nested too deeply at byte {offset}")]
    NestingTooDeep {
        /// Byte offset where the limit was reached
        offset: usize,
    },

    /// The document is not valid UTF-8.
    #[error("Metadata is not valid UTF-8")]
    InvalidUtf8,

    /// Extra forms after the document.
    #[error("Trailing data at byte {offset}")]
    TrailingData {
        /// Byte offset of the first extra form
        offset: usize,
    },

    /// A field has the wrong shape (e.g., `:stickers` is not a vector).
    #[error("Field {field} has unexpected type: expected {expected}")]
    UnexpectedType {
        /// Field name
        field: &'static str,
        /// Expected EDN type
        expected: &'static str,
    },
}
