//! Opening input and output files, with transparent gzip support based on the `.gz` extension.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use flate2::{read::MultiGzDecoder, write::GzEncoder, Compression};

use crate::errors::*;

fn is_gz(path: &Path) -> bool {
    path.extension().map_or(false, |e| e == "gz")
}

/// Open a file for buffered reading.
pub fn open_reader(path: impl AsRef<Path>) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::NotFound {
        file: path_str(path),
        source: e,
    })?;

    let is_dir = file.metadata().map_or(false, |m| m.is_dir());
    if is_dir {
        return Err(Error::NotFound {
            file: path_str(path),
            source: std::io::Error::new(std::io::ErrorKind::Other, "path is a directory"),
        });
    }

    let reader: Box<dyn BufRead> = if is_gz(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(reader)
}

/// Buffered writer that gzips its output when the destination path ends with `.gz`.
pub enum OutputWriter<W: Write> {
    Plain(BufWriter<W>),
    Gz(GzEncoder<BufWriter<W>>),
}

impl<W: Write> OutputWriter<W> {
    pub fn new(inner: W, path: impl AsRef<Path>) -> Self {
        if is_gz(path.as_ref()) {
            OutputWriter::Gz(GzEncoder::new(BufWriter::new(inner), Compression::default()))
        } else {
            OutputWriter::Plain(BufWriter::new(inner))
        }
    }

    /// Write any trailer and flush everything down to the inner writer.
    pub fn finish(self) -> std::io::Result<()> {
        match self {
            OutputWriter::Plain(mut w) => w.flush(),
            OutputWriter::Gz(gz) => gz.finish()?.flush(),
        }
    }
}

impl<W: Write> Write for OutputWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            OutputWriter::Plain(w) => w.write(buf),
            OutputWriter::Gz(w) => w.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        match self {
            OutputWriter::Plain(w) => w.write_all(buf),
            OutputWriter::Gz(w) => w.write_all(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            OutputWriter::Plain(w) => w.flush(),
            OutputWriter::Gz(w) => w.flush(),
        }
    }
}
