use serde::Deserialize;

/// Image declaration: exactly one of `uri` or `buffer_view` must be set.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub name: Option<String>,

    pub uri: Option<String>,

    pub mime_type: Option<String>,

    pub buffer_view: Option<usize>,
}
