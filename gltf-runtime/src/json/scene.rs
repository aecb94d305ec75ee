use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub name: Option<String>,

    /// Root node indices.
    pub nodes: Vec<usize>,
}
