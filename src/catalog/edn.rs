// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! A small reader for the subset of EDN used by sticker pack metadata.
//!
//! Handles maps, vectors, lists, sets, strings, keywords, symbols, integers,
//! floats, booleans and `nil`, plus `;` comments and the `#_` discard
//! marker. Tagged literals and character literals are rejected.

use crate::errors::MetadataError;

/// Deepest nesting of collections and discarded forms the reader accepts.
pub const MAX_DEPTH: usize = 128;

/// A parsed EDN form.
#[derive(Debug, Clone, PartialEq)]
pub enum Edn {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Keyword without the leading `:`
    Keyword(String),
    Symbol(String),
    List(Vec<Edn>),
    Vector(Vec<Edn>),
    Set(Vec<Edn>),
    /// Entries in document order
    Map(Vec<(Edn, Edn)>),
}

impl Edn {
    /// Parse exactly one form from `input`.
    pub fn parse(input: &str) -> Result<Edn, MetadataError> {
        let mut reader = Reader {
            src: input,
            pos: 0,
            depth: 0,
        };
        let form = reader
            .read_form()?
            .ok_or(MetadataError::UnexpectedEof { offset: reader.pos })?;
        reader.skip_ignored()?;
        if reader.pos < input.len() {
            return Err(MetadataError::TrailingData { offset: reader.pos });
        }
        Ok(form)
    }

    /// Look up a map entry whose key is a keyword, symbol or string equal to
    /// `name`, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&Edn> {
        let Edn::Map(entries) = self else {
            return None;
        };
        entries.iter().find_map(|(key, value)| match key {
            Edn::Keyword(k) | Edn::Symbol(k) | Edn::String(k) if k.eq_ignore_ascii_case(name) => {
                Some(value)
            }
            _ => None,
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Edn::String(s) => Some(s),
            _ => None,
        }
    }

    /// Elements of a vector, list or set.
    pub fn as_seq(&self) -> Option<&[Edn]> {
        match self {
            Edn::Vector(items) | Edn::List(items) | Edn::Set(items) => Some(items),
            _ => None,
        }
    }
}

struct Reader<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl Reader<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        let mut chars = self.src[self.pos..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skip whitespace, commas, comments and discarded forms.
    fn skip_ignored(&mut self) -> Result<(), MetadataError> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() || c == ',' => {
                    self.bump();
                }
                Some(';') => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                Some('#') if self.peek_second() == Some('_') => {
                    let offset = self.pos;
                    self.pos += 2;
                    if self.read_form()?.is_none() {
                        return Err(match self.peek() {
                            Some(found) => MetadataError::UnexpectedChar {
                                found,
                                offset: self.pos,
                            },
                            None => MetadataError::UnexpectedEof { offset },
                        });
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Read the next form, or `None` at end of input or before a closing
    /// delimiter.
    fn read_form(&mut self) -> Result<Option<Edn>, MetadataError> {
        if self.depth >= MAX_DEPTH {
            return Err(MetadataError::NestingTooDeep { offset: self.pos });
        }
        self.depth += 1;
        let form = self.read_nested_form();
        self.depth -= 1;
        form
    }

    fn read_nested_form(&mut self) -> Result<Option<Edn>, MetadataError> {
        self.skip_ignored()?;
        let offset = self.pos;
        let Some(c) = self.peek() else {
            return Ok(None);
        };

        let form = match c {
            ')' | ']' | '}' => return Ok(None),
            '(' => {
                self.bump();
                Edn::List(self.read_seq(')')?)
            }
            '[' => {
                self.bump();
                Edn::Vector(self.read_seq(']')?)
            }
            '{' => {
                self.bump();
                let items = self.read_seq('}')?;
                if items.len() % 2 != 0 {
                    return Err(MetadataError::OddMapEntries { offset });
                }
                let mut entries = Vec::with_capacity(items.len() / 2);
                let mut items = items.into_iter();
                while let (Some(key), Some(value)) = (items.next(), items.next()) {
                    entries.push((key, value));
                }
                Edn::Map(entries)
            }
            '#' => {
                self.bump();
                match self.peek() {
                    Some('{') => {
                        self.bump();
                        Edn::Set(self.read_seq('}')?)
                    }
                    _ => {
                        return Err(MetadataError::Unsupported {
                            offset,
                            details: "tagged literal".to_string(),
                        })
                    }
                }
            }
            '"' => {
                self.bump();
                Edn::String(self.read_string(offset)?)
            }
            '\\' => {
                return Err(MetadataError::Unsupported {
                    offset,
                    details: "character literal".to_string(),
                })
            }
            ':' => {
                self.bump();
                let name = self.read_token();
                if name.is_empty() {
                    return Err(match self.peek() {
                        Some(found) => MetadataError::UnexpectedChar {
                            found,
                            offset: self.pos,
                        },
                        None => MetadataError::UnexpectedEof { offset: self.pos },
                    });
                }
                Edn::Keyword(name.to_string())
            }
            c if c.is_ascii_digit()
                || ((c == '-' || c == '+')
                    && self.peek_second().is_some_and(|n| n.is_ascii_digit())) =>
            {
                let literal = self.read_token();
                parse_number(literal, offset)?
            }
            c if is_symbol_char(c) => match self.read_token() {
                "nil" => Edn::Nil,
                "true" => Edn::Bool(true),
                "false" => Edn::Bool(false),
                symbol => Edn::Symbol(symbol.to_string()),
            },
            found => return Err(MetadataError::UnexpectedChar { found, offset }),
        };

        Ok(Some(form))
    }

    fn read_seq(&mut self, close: char) -> Result<Vec<Edn>, MetadataError> {
        let mut items = Vec::new();
        loop {
            if let Some(form) = self.read_form()? {
                items.push(form);
                continue;
            }
            return match self.bump() {
                Some(c) if c == close => Ok(items),
                Some(found) => Err(MetadataError::UnexpectedChar {
                    found,
                    offset: self.pos - found.len_utf8(),
                }),
                None => Err(MetadataError::UnexpectedEof { offset: self.pos }),
            };
        }
    }

    fn read_string(&mut self, start: usize) -> Result<String, MetadataError> {
        let mut out = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(MetadataError::UnexpectedEof { offset: start });
            };
            match c {
                '"' => return Ok(out),
                '\\' => {
                    let escape_offset = self.pos - 1;
                    let escaped = match self.bump() {
                        Some('n') => '\n',
                        Some('t') => '\t',
                        Some('r') => '\r',
                        Some('"') => '"',
                        Some('\\') => '\\',
                        Some('u') => self.read_unicode_escape(escape_offset)?,
                        Some(found) => {
                            return Err(MetadataError::UnexpectedChar {
                                found,
                                offset: escape_offset + 1,
                            })
                        }
                        None => return Err(MetadataError::UnexpectedEof { offset: self.pos }),
                    };
                    out.push(escaped);
                }
                other => out.push(other),
            }
        }
    }

    fn read_unicode_escape(&mut self, offset: usize) -> Result<char, MetadataError> {
        let digits = self
            .src
            .get(self.pos..self.pos + 4)
            .ok_or(MetadataError::UnexpectedEof { offset })?;
        let code = u32::from_str_radix(digits, 16).map_err(|_| MetadataError::Unsupported {
            offset,
            details: format!("invalid unicode escape \\u{digits}"),
        })?;
        self.pos += 4;
        char::from_u32(code).ok_or_else(|| MetadataError::Unsupported {
            offset,
            details: format!("invalid code point {code:#x}"),
        })
    }

    /// Consume a run of symbol characters.
    fn read_token(&mut self) -> &str {
        let start = self.pos;
        while self.peek().is_some_and(is_symbol_char) {
            self.bump();
        }
        &self.src[start..self.pos]
    }
}

fn is_symbol_char(c: char) -> bool {
    c.is_alphanumeric() || "*+!-_?$%&=<>/.:#'".contains(c)
}

fn parse_number(literal: &str, offset: usize) -> Result<Edn, MetadataError> {
    let invalid = || MetadataError::InvalidNumber {
        literal: literal.to_string(),
        offset,
    };

    if let Some(digits) = literal.strip_suffix('N') {
        return digits.parse().map(Edn::Int).map_err(|_| invalid());
    }
    if let Some(digits) = literal.strip_suffix('M') {
        return digits.parse().map(Edn::Float).map_err(|_| invalid());
    }
    if literal.contains(['.', 'e', 'E']) {
        return literal.parse().map(Edn::Float).map_err(|_| invalid());
    }
    literal.parse().map(Edn::Int).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalars() {
        assert_eq!(Edn::parse("nil").unwrap(), Edn::Nil);
        assert_eq!(Edn::parse("true").unwrap(), Edn::Bool(true));
        assert_eq!(Edn::parse("-42").unwrap(), Edn::Int(-42));
        assert_eq!(Edn::parse("7N").unwrap(), Edn::Int(7));
        assert_eq!(Edn::parse("1.5").unwrap(), Edn::Float(1.5));
        assert_eq!(Edn::parse(":name").unwrap(), Edn::Keyword("name".into()));
        assert_eq!(Edn::parse("meta").unwrap(), Edn::Symbol("meta".into()));
        assert_eq!(Edn::parse("-").unwrap(), Edn::Symbol("-".into()));
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            Edn::parse(r#""a\"b\\c\né""#).unwrap(),
            Edn::String("a\"b\\c\né".into())
        );
    }

    #[test]
    fn test_collections_and_commas() {
        let form = Edn::parse("[1, (2 3) #{4} {:a 5}]").unwrap();
        let items = form.as_seq().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[1], Edn::List(vec![Edn::Int(2), Edn::Int(3)]));
        assert_eq!(items[2], Edn::Set(vec![Edn::Int(4)]));
        assert_eq!(items[3].get("A"), Some(&Edn::Int(5)));
    }

    #[test]
    fn test_comments_and_discard() {
        let form = Edn::parse("; header\n{:a #_ :ignored 1 ; trailing\n}").unwrap();
        assert_eq!(form.get("a"), Some(&Edn::Int(1)));
    }

    #[test]
    fn test_discard_before_delimiter() {
        assert_eq!(
            Edn::parse("{:a #_}"),
            Err(MetadataError::UnexpectedChar {
                found: '}',
                offset: 6
            })
        );
        assert_eq!(
            Edn::parse("[1 #_"),
            Err(MetadataError::UnexpectedEof { offset: 3 })
        );
    }

    #[test]
    fn test_nesting_limit() {
        let deep = "[".repeat(10_000);
        assert_eq!(
            Edn::parse(&deep),
            Err(MetadataError::NestingTooDeep { offset: MAX_DEPTH })
        );

        let discards = "#_ ".repeat(10_000) + "1 2";
        assert!(matches!(
            Edn::parse(&discards),
            Err(MetadataError::NestingTooDeep { .. })
        ));

        // The innermost read that finds `]` counts as one more level.
        let limit = "[".repeat(MAX_DEPTH - 1) + &"]".repeat(MAX_DEPTH - 1);
        assert!(Edn::parse(&limit).is_ok());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Edn::parse("{:a}"),
            Err(MetadataError::OddMapEntries { offset: 0 })
        );
        assert_eq!(
            Edn::parse("[1 2"),
            Err(MetadataError::UnexpectedEof { offset: 4 })
        );
        assert_eq!(
            Edn::parse("[1 }"),
            Err(MetadataError::UnexpectedChar {
                found: '}',
                offset: 3
            })
        );
        assert_eq!(Edn::parse("1 2"), Err(MetadataError::TrailingData { offset: 2 }));
        assert_eq!(Edn::parse("   "), Err(MetadataError::UnexpectedEof { offset: 3 }));
        assert!(matches!(
            Edn::parse("#inst \"2020\""),
            Err(MetadataError::Unsupported { .. })
        ));
        assert!(matches!(
            Edn::parse("\"open"),
            Err(MetadataError::UnexpectedEof { .. })
        ));
        assert!(matches!(
            Edn::parse("12abc"),
            Err(MetadataError::InvalidNumber { .. })
        ));
    }
}
