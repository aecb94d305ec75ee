use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    pub buffer: usize,
    pub byte_offset: usize,
    pub byte_length: usize,

    /// Declaring a stride means a loosely packed layout, which the decoder
    /// rejects up front.
    pub byte_stride: Option<usize>,

    /// Intended GPU buffer type (34962 vertex data, 34963 index data).
    pub target: Option<u32>,

    pub name: Option<String>,
}
