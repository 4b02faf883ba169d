//! Rename FASTA headers using a key to value mapping file.
//!
//! # Overview
//! headermap prefixes FASTA header lines with a value looked up from a plain text mapping.
//!
//! This is useful for:
//! * Tagging sequences with the sample they came from
//! * Making headers from several assemblies unique before merging them
//!
//! ## Mapping file
//! One whitespace separated `key value` pair per line:
//! ```text
//! seq1    sampleA
//! seq7    sampleB
//! ```
//! Any line that is not exactly two fields, a blank line included, is an error. If a key
//! appears twice, the later value is used.
//!
//! ## Rewriting
//! Each line of the FASTA file is handled on its own. A line starting with `>` is a header, and
//! its *key* is the text after the `>` without the line ending. When the key is found in the
//! mapping, the header is written as `>` + value + `_` + the original text:
//! ```text
//! >seq1 description      ->   >sampleA_seq1 description
//! ACGT                   ->   ACGT
//! >seq9 other            ->   >seq9 other
//! ```
//! Sequence lines, and headers without a mapping, are copied byte for byte, including their
//! line endings. The output always has the same number of lines as the input.
//!
//! With [`KeyMatch::Exact`], only the full header text is looked up. [`KeyMatch::Id`] looks up
//! just the identifier before the first space or tab, and [`KeyMatch::Auto`] (the default) tries the
//! full text first and then the identifier.
//!
//! ## Example
//! ```no_run
//! use headermap::*;
//!
//! let map = KeyMap::from_file("mapping.txt")?;
//! let stats = HeaderRewriter::new(&map)
//!     .key_match(KeyMatch::Id)
//!     .rewrite_file("in.fasta", "out.fasta.gz")?;
//! println!("{} headers renamed", stats.rewritten);
//! # Ok::<(), headermap::errors::Error>(())
//! ```
//!
//! Files whose names end in `.gz` are read and written gzipped.

pub mod errors;
pub mod files;
mod header;
mod mapping;
mod parse_utils;
mod rewrite;

// commonly used functions and types

pub use crate::header::*;
pub use crate::mapping::*;
pub use crate::parse_utils::*;
pub use crate::rewrite::*;
