use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::path::Path;

use log::{debug, info};
use serde::Serialize;
use tempfile::Builder;

use crate::errors::*;
use crate::files::{open_reader, OutputWriter};
use crate::header::*;
use crate::mapping::KeyMap;

/// Counts gathered while rewriting one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RewriteStats {
    pub lines: usize,
    pub headers: usize,
    pub rewritten: usize,
}

pub struct HeaderRewriter<'m> {
    map: &'m KeyMap,
    key_match: KeyMatch,
}

impl<'m> HeaderRewriter<'m> {
    pub fn new(map: &'m KeyMap) -> Self {
        Self {
            map,
            key_match: KeyMatch::default(),
        }
    }

    pub fn key_match(mut self, key_match: KeyMatch) -> Self {
        self.key_match = key_match;
        self
    }

    /// Rewrite a single line.
    ///
    /// A header whose key is in the mapping becomes `>` + value + `_` + the original text after
    /// `>`, line ending included. Every other line is returned as is.
    pub fn rewrite_line<'a>(&self, line: &'a [u8]) -> Cow<'a, [u8]> {
        let FastaLine::Header(header) = FastaLine::parse(line) else {
            return Cow::Borrowed(line);
        };

        match header.lookup(self.map, self.key_match) {
            Some(value) => {
                debug!("{} -> {}", utf8(header.key()), utf8(value));
                let body = header.body();
                let mut res = Vec::with_capacity(2 + value.len() + body.len());
                res.push(b'>');
                res.extend_from_slice(value);
                res.push(b'_');
                res.extend_from_slice(body);
                Cow::Owned(res)
            }
            None => {
                debug!("{} (no mapping)", utf8(header.key()));
                Cow::Borrowed(line)
            }
        }
    }

    /// Stream lines from `reader` to `writer`, rewriting matched headers.
    ///
    /// Exactly one line is written for each line read, in the same order. `input` and `output` name
    /// the two ends in errors.
    pub fn rewrite(
        &self,
        mut reader: impl BufRead,
        mut writer: impl Write,
        input: &str,
        output: &str,
    ) -> Result<RewriteStats> {
        let mut stats = RewriteStats::default();
        let mut line = Vec::new();

        loop {
            line.clear();
            let n = reader
                .read_until(b'\n', &mut line)
                .map_err(|e| Error::FileIo {
                    file: input.to_owned(),
                    source: e,
                })?;
            if n == 0 {
                break;
            }

            stats.lines += 1;
            if line.first() == Some(&b'>') {
                stats.headers += 1;
            }

            let out = self.rewrite_line(&line);
            if let Cow::Owned(_) = out {
                stats.rewritten += 1;
            }

            writer.write_all(&out).map_err(|e| Error::FileIo {
                file: output.to_owned(),
                source: e,
            })?;
        }

        Ok(stats)
    }

    /// Rewrite the file at `input` into `output`.
    ///
    /// The input is opened before anything is created. Output goes to a temporary file in the same
    /// directory that replaces `output` only once everything is written, so a failed run leaves no
    /// partial file behind. `.gz` paths are decompressed or compressed.
    pub fn rewrite_file(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<RewriteStats> {
        let (input, output) = (input.as_ref(), output.as_ref());
        let (input_name, output_name) = (path_str(input), path_str(output));

        let reader = open_reader(input)?;

        let not_found = |e| Error::NotFound {
            file: output_name.clone(),
            source: e,
        };
        if output.is_dir() {
            return Err(not_found(std::io::Error::new(
                std::io::ErrorKind::Other,
                "output path is a directory",
            )));
        }
        let dir = match output.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut builder = Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // same mode a plain create would request; the umask still applies
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let tmp = builder.tempfile_in(dir).map_err(not_found)?;
        if let Ok(meta) = std::fs::metadata(output) {
            // replacing an existing file keeps its mode
            tmp.as_file()
                .set_permissions(meta.permissions())
                .map_err(not_found)?;
        }

        let mut writer = OutputWriter::new(tmp.as_file(), output);
        let stats = self.rewrite(reader, &mut writer, &input_name, &output_name)?;
        writer.finish().map_err(|e| Error::FileIo {
            file: output_name.clone(),
            source: e,
        })?;

        let tmp_path = tmp.into_temp_path();
        tmp_path.persist(output).map_err(|e| not_found(e.error))?;

        info!(
            "Rewrote {} of {} header(s) across {} line(s) from \"{input_name}\" into \"{output_name}\"",
            stats.rewritten, stats.headers, stats.lines
        );

        Ok(stats)
    }
}
