use serde::Deserialize;

/// Metadata about the asset. The only entity the format makes mandatory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Target format version, `<major>.<minor>`.
    pub version: String,

    pub copyright: Option<String>,
    pub generator: Option<String>,
    pub min_version: Option<String>,
}
