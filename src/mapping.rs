use std::io::BufRead;
use std::path::Path;

use log::{debug, trace, warn};
use rustc_hash::FxHashMap;

use crate::errors::*;
use crate::files::open_reader;
use crate::parse_utils::*;

/// Key to value lookup loaded from a two column mapping file.
///
/// Each line holds a key and a value separated by whitespace, e.g.
/// ```text
/// seq1    sampleA
/// seq2    sampleB
/// ```
/// The table is never modified after loading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMap {
    map: FxHashMap<Vec<u8>, Vec<u8>>,
}

impl KeyMap {
    /// Load a mapping file. Files ending in `.gz` are decompressed.
    pub fn from_file(file: impl AsRef<Path>) -> Result<Self> {
        let file = file.as_ref();
        let reader = open_reader(file)?;
        Self::from_reader(reader, &path_str(file))
    }

    /// Load mappings from an arbitrary `BufRead`er. `origin` names the source in errors.
    ///
    /// Any line that does not contain exactly two fields, blank lines included, fails the whole
    /// load. When a key repeats, the later value replaces the earlier one.
    pub fn from_reader(mut reader: impl BufRead, origin: &str) -> Result<Self> {
        let mut map = FxHashMap::default();
        let mut line = Vec::new();
        let mut line_num = 0;

        loop {
            line.clear();
            let n = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| Error::FileIo {
                    file: origin.to_owned(),
                    source: e,
                })?;
            if n == 0 {
                break;
            }
            line_num += 1;

            let mut f = fields(&line);
            let (Some(key), Some(value), None) = (f.next(), f.next(), f.next()) else {
                return Err(Error::Format {
                    file: origin.to_owned(),
                    line: line_num,
                    found: fields(&line).count(),
                });
            };

            if let Some(prev) = map.insert(key.to_owned(), value.to_owned()) {
                warn!(
                    "Key \"{}\" on line {line_num} of \"{origin}\" replaces earlier value \"{}\"",
                    utf8(key),
                    utf8(&prev)
                );
            }
        }

        let res = Self { map };
        debug!("Loaded {} mapping(s) from \"{origin}\"", res.len());
        for (k, v) in res.iter() {
            trace!("{} -> {}", utf8(k), utf8(v));
        }

        Ok(res)
    }

    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.map.get(key).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &[u8])> {
        self.map.iter().map(|(k, v)| (k.as_slice(), v.as_slice()))
    }
}

impl<K: AsRef<[u8]>, V: AsRef<[u8]>> FromIterator<(K, V)> for KeyMap {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            map: iter
                .into_iter()
                .map(|(k, v)| (k.as_ref().to_owned(), v.as_ref().to_owned()))
                .collect(),
        }
    }
}
