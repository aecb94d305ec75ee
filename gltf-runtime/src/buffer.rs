//! Raw byte payloads and the validated windows into them.

use std::path::Path;

use crate::error::{check_index, Error, Result};
use crate::json;

/// One external binary payload, immutable once loaded.
#[derive(Debug)]
pub struct Buffer {
    pub byte_length: usize,
    pub uri: Option<String>,
    data: Vec<u8>,
}

impl Buffer {
    fn load(index: usize, raw: &json::Buffer, bin_directory: &Path) -> Result<Self> {
        let uri = raw.uri.as_deref().ok_or_else(|| {
            Error::unsupported(
                format!("buffer {index}"),
                "embedded payload (no uri)",
                "an external binary payload uri",
            )
        })?;

        let path = bin_directory.join(uri);
        let data = std::fs::read(&path).map_err(|source| Error::IoFailure {
            path: path.clone(),
            source,
        })?;

        Ok(Buffer {
            byte_length: data.len(),
            uri: Some(uri.to_owned()),
            data,
        })
    }

    pub(crate) fn from_data(data: Vec<u8>) -> Self {
        Buffer {
            byte_length: data.len(),
            uri: None,
            data,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Owns every buffer of the document, in declaration order.
#[derive(Debug, Default)]
pub struct BufferStore {
    buffers: Vec<Buffer>,
}

impl BufferStore {
    pub(crate) fn load(raws: &[json::Buffer], bin_directory: &Path) -> Result<Self> {
        let buffers = raws
            .iter()
            .enumerate()
            .map(|(index, raw)| Buffer::load(index, raw, bin_directory))
            .collect::<Result<Vec<_>>>()?;

        Ok(BufferStore { buffers })
    }

    #[cfg(test)]
    pub(crate) fn from_buffers(buffers: Vec<Buffer>) -> Self {
        BufferStore { buffers }
    }

    pub fn get(&self, index: usize) -> Option<&Buffer> {
        self.buffers.get(index)
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }
}

/// Intended GPU usage for a byte range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageHint {
    VertexData,
    IndexData,
}

impl UsageHint {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            34962 => Some(UsageHint::VertexData),
            34963 => Some(UsageHint::IndexData),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            UsageHint::VertexData => 34962,
            UsageHint::IndexData => 34963,
        }
    }
}

/// A read-only window into one buffer. Bounds and layout are validated once,
/// at construction; after that every read is contiguous and in range.
#[derive(Debug)]
pub struct ByteRangeView {
    pub index: usize,
    pub buffer: usize,
    pub byte_offset: usize,
    pub byte_length: usize,
    pub usage: Option<UsageHint>,
    pub name: Option<String>,
}

impl ByteRangeView {
    pub(crate) fn new(index: usize, raw: &json::BufferView, store: &BufferStore) -> Result<Self> {
        if raw.byte_stride.is_some() {
            return Err(Error::UnsupportedLayout { view: index });
        }

        let entity = format!("buffer view {index}");
        let buffer = check_index(&entity, "buffers", raw.buffer, store.len())?;

        let end = raw
            .byte_offset
            .checked_add(raw.byte_length)
            .ok_or_else(|| Error::malformed(format!("{entity}: byte range overflows")))?;
        let available = store.buffers[buffer].byte_length;
        if end > available {
            return Err(Error::malformed(format!(
                "{entity}: range {}..{end} exceeds buffer {buffer} ({available} bytes)",
                raw.byte_offset,
            )));
        }

        let usage = match raw.target {
            None => None,
            Some(code) => Some(UsageHint::from_code(code).ok_or_else(|| {
                Error::unsupported(format!("{entity} target"), code, "34962 or 34963")
            })?),
        };

        Ok(ByteRangeView {
            index,
            buffer: raw.buffer,
            byte_offset: raw.byte_offset,
            byte_length: raw.byte_length,
            usage,
            name: raw.name.clone(),
        })
    }

    /// The window's bytes. In range by construction.
    pub fn bytes<'a>(&self, store: &'a BufferStore) -> &'a [u8] {
        let start = self.byte_offset;
        let end = start + self.byte_length;

        &store.buffers[self.buffer].data()[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(bytes: usize) -> BufferStore {
        BufferStore::from_buffers(vec![Buffer::from_data(vec![0u8; bytes])])
    }

    fn raw_view(buffer: usize, offset: usize, length: usize) -> json::BufferView {
        serde_json::from_str(&format!(
            r#"{{ "buffer": {buffer}, "byteOffset": {offset}, "byteLength": {length} }}"#
        ))
        .unwrap()
    }

    #[test]
    fn range_must_fit_the_buffer() {
        let store = store(16);

        assert!(ByteRangeView::new(0, &raw_view(0, 0, 16), &store).is_ok());
        assert!(ByteRangeView::new(0, &raw_view(0, 8, 8), &store).is_ok());

        let err = ByteRangeView::new(0, &raw_view(0, 8, 9), &store).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument { .. }));
    }

    #[test]
    fn unknown_buffer_is_dangling() {
        let err = ByteRangeView::new(0, &raw_view(1, 0, 4), &store(16)).unwrap_err();
        assert!(matches!(
            err,
            Error::DanglingReference {
                target: "buffers",
                index: 1,
                len: 1,
                ..
            }
        ));
    }

    #[test]
    fn stride_is_rejected_at_construction() {
        let raw: json::BufferView = serde_json::from_str(
            r#"{ "buffer": 0, "byteOffset": 0, "byteLength": 8, "byteStride": 12 }"#,
        )
        .unwrap();

        let err = ByteRangeView::new(3, &raw, &store(16)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedLayout { view: 3 }));
    }

    #[test]
    fn usage_hint_codes() {
        let raw: json::BufferView = serde_json::from_str(
            r#"{ "buffer": 0, "byteOffset": 0, "byteLength": 8, "target": 34963 }"#,
        )
        .unwrap();

        let view = ByteRangeView::new(0, &raw, &store(16)).unwrap();
        assert_eq!(view.usage, Some(UsageHint::IndexData));

        let raw: json::BufferView = serde_json::from_str(
            r#"{ "buffer": 0, "byteOffset": 0, "byteLength": 8, "target": 1234 }"#,
        )
        .unwrap();
        assert!(matches!(
            ByteRangeView::new(0, &raw, &store(16)),
            Err(Error::UnsupportedFormat { .. })
        ));
    }
}
