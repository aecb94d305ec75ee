use std::path::Path;

use crate::buffer::{BufferStore, ByteRangeView};
use crate::error::{check_index, Error, Result};
use crate::json;

/// Image payload for a texture, sourced from a file next to the document or
/// from a buffer view. No pixel decoding happens here.
#[derive(Debug)]
pub struct Image {
    pub index: usize,
    pub name: Option<String>,

    pub uri: Option<String>,
    pub mime_type: Option<String>,

    data: Vec<u8>,
}

impl Image {
    pub(crate) fn new(
        index: usize,
        raw: &json::Image,
        views: &[ByteRangeView],
        store: &BufferStore,
        bin_directory: &Path,
    ) -> Result<Self> {
        let entity = format!("image {index}");

        let (data, mime_type) = match (&raw.uri, raw.buffer_view) {
            (Some(_), Some(_)) | (None, None) => {
                return Err(Error::malformed(format!(
                    "{entity}: exactly one of uri or bufferView must be defined"
                )))
            }
            (Some(uri), None) => {
                let direct = Path::new(uri);
                let path = if direct.exists() {
                    direct.to_path_buf()
                } else {
                    bin_directory.join(uri)
                };
                let data = std::fs::read(&path)
                    .map_err(|source| Error::IoFailure { path, source })?;
                (data, raw.mime_type.clone())
            }
            (None, Some(view)) => {
                let view = &views[check_index(&entity, "bufferViews", view, views.len())?];
                let mime_type = raw.mime_type.clone().ok_or_else(|| {
                    Error::malformed(format!("{entity}: bufferView images require a mimeType"))
                })?;
                (view.bytes(store).to_vec(), Some(mime_type))
            }
        };

        Ok(Image {
            index,
            name: raw.name.clone(),
            uri: raw.uri.clone(),
            mime_type,
            data,
        })
    }

    /// Encoded image bytes, exactly as stored.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
