use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skin {
    pub name: Option<String>,

    /// Accessor index holding one MAT4 per joint.
    pub inverse_bind_matrices: Option<usize>,

    pub skeleton: Option<usize>,

    pub joints: Vec<usize>,
}
