use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while loading a document. All variants abort
/// the load; there is no partial document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required field is absent or the JSON tree is structurally invalid.
    #[error("malformed document: {reason}")]
    MalformedDocument { reason: String },

    /// An enumerated value outside the closed set the loader understands.
    #[error("{context}: unsupported value `{value}`, expected {expected}")]
    UnsupportedFormat {
        context: String,
        value: String,
        expected: &'static str,
    },

    /// A buffer view declares a strided (non-contiguous) layout.
    #[error("buffer view {view}: strided layouts are not supported")]
    UnsupportedLayout { view: usize },

    /// The declared element count does not consume the byte range exactly.
    #[error(
        "{context}: {byte_length} bytes cannot hold {count} elements of {element_size} bytes each"
    )]
    LengthMismatch {
        context: String,
        byte_length: usize,
        count: usize,
        element_size: usize,
    },

    /// An integer index points outside its target array.
    #[error("{entity}: index {index} is out of bounds for {target} (length {len})")]
    DanglingReference {
        entity: String,
        target: &'static str,
        index: usize,
        len: usize,
    },

    /// An external byte source could not be read.
    #[error("failed to read `{}`", path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedDocument {
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(
        context: impl Into<String>,
        value: impl ToString,
        expected: &'static str,
    ) -> Self {
        Error::UnsupportedFormat {
            context: context.into(),
            value: value.to_string(),
            expected,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::malformed(err.to_string())
    }
}

/// Bounds check shared by every index-resolving site. Returns the index back
/// so call sites can chain into an arena lookup.
pub(crate) fn check_index(
    entity: &str,
    target: &'static str,
    index: usize,
    len: usize,
) -> Result<usize> {
    if index < len {
        Ok(index)
    } else {
        Err(Error::DanglingReference {
            entity: entity.to_owned(),
            target,
            index,
            len,
        })
    }
}
