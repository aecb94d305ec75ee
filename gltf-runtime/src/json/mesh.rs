use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mesh {
    pub name: Option<String>,
    pub primitives: Vec<Primitive>,

    /// Morph target weights. Copied through as plain values; morph targets
    /// themselves are not loaded.
    pub weights: Option<Vec<f32>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Primitive {
    /// Semantic key ("POSITION", "TEXCOORD_1", ...) to accessor index.
    pub attributes: HashMap<String, usize>,

    pub indices: Option<usize>,
    pub material: Option<usize>,

    /// Topology code, defaulting to triangles when absent.
    pub mode: Option<u32>,
}
