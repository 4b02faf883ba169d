pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Cannot open file \"{file}\": {source}")]
    NotFound {
        file: String,
        source: std::io::Error,
    },
    #[error("Malformed mapping in file \"{file}\" on line {line}: expected a key and a value, found {found} field(s)")]
    Format {
        file: String,
        line: usize,
        found: usize,
    },
    #[error("Error reading or writing file \"{file}\": {source}")]
    FileIo {
        file: String,
        source: std::io::Error,
    },
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }
}

pub fn utf8(b: &[u8]) -> String {
    std::str::from_utf8(b).unwrap_or("<not UTF-8>").to_owned()
}

pub(crate) fn path_str(path: &std::path::Path) -> String {
    path.display().to_string()
}
