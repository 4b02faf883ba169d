//! Telling FASTA header lines apart from everything else, and finding their lookup key.

use std::str::FromStr;

use memchr::memchr2;

use crate::mapping::KeyMap;
use crate::parse_utils::strip_line_ending;

/// One line of a FASTA file, line ending included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FastaLine<'a> {
    Header(HeaderLine<'a>),
    Other(&'a [u8]),
}

impl<'a> FastaLine<'a> {
    pub fn parse(line: &'a [u8]) -> Self {
        match line.strip_prefix(b">") {
            Some(body) => FastaLine::Header(HeaderLine { body }),
            None => FastaLine::Other(line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    body: &'a [u8],
}

impl<'a> HeaderLine<'a> {
    /// Everything after the `>`, including the original line ending.
    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    /// The header text without the `>` and line ending. Inner whitespace is kept.
    pub fn key(&self) -> &'a [u8] {
        strip_line_ending(self.body)
    }

    /// The sequence identifier: the key up to the first space or tab.
    pub fn id(&self) -> &'a [u8] {
        let key = self.key();
        match memchr2(b' ', b'\t', key) {
            Some(i) => &key[..i],
            None => key,
        }
    }

    /// Find the replacement value for this header.
    pub fn lookup<'m>(&self, map: &'m KeyMap, key_match: KeyMatch) -> Option<&'m [u8]> {
        match key_match {
            KeyMatch::Exact => map.get(self.key()),
            KeyMatch::Id => map.get(self.id()),
            KeyMatch::Auto => map.get(self.key()).or_else(|| map.get(self.id())),
        }
    }
}

/// Which part of a header is looked up in the mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyMatch {
    /// The whole header text after `>`.
    Exact,
    /// Only the sequence identifier before the first whitespace.
    Id,
    /// The whole header text, falling back to the identifier.
    #[default]
    Auto,
}

impl FromStr for KeyMatch {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(KeyMatch::Exact),
            "id" => Ok(KeyMatch::Id),
            "auto" => Ok(KeyMatch::Auto),
            _ => Err(format!(
                "unknown match mode \"{s}\", expected one of: exact, id, auto"
            )),
        }
    }
}
