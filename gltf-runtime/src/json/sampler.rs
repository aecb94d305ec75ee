use serde::Deserialize;

/// Texture sampler declaration. Filter and wrap fields carry the raw GL
/// codes; [`crate::model`] converts them to enums.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureSampler {
    pub name: Option<String>,

    pub mag_filter: Option<u32>,
    pub min_filter: Option<u32>,
    pub wrap_s: Option<u32>,
    pub wrap_t: Option<u32>,
}
