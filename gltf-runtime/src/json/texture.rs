use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Texture {
    pub name: Option<String>,

    /// Index into `samplers`.
    pub sampler: Option<usize>,

    /// Index into `images`.
    pub source: Option<usize>,
}
