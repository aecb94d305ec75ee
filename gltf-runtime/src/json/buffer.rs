use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
    pub byte_length: usize,

    /// Relative path of the external binary payload. Buffers without a uri
    /// (embedded payloads) are not supported.
    pub uri: Option<String>,
}
