use serde::Deserialize;

/// Raw accessor declaration. `component_type` and `ty` stay as the wire
/// values here; [`crate::accessor`] owns the closed-set conversion so the
/// registry lives in exactly one place.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    pub buffer_view: usize,
    pub component_type: u32,
    #[serde(rename = "type")]
    pub ty: String,
    pub count: usize,

    #[serde(default)]
    pub normalized: bool,

    pub min: Option<Vec<f64>>,
    pub max: Option<Vec<f64>>,
}
