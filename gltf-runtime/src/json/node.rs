use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub name: String,

    pub rotation: Option<[f32; 4]>,
    pub translation: Option<[f32; 3]>,
    pub scale: Option<[f32; 3]>,

    /// Indices into the same `nodes` array. May point forward, past this
    /// node's own position.
    #[serde(default)]
    pub children: Vec<usize>,

    pub mesh: Option<usize>,
    pub skin: Option<usize>,
    pub camera: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::Node;

    #[test]
    fn transform_fields_are_optional() -> serde_json::Result<()> {
        let node: Node = serde_json::from_str(r#"{ "name": "root", "children": [2, 1] }"#)?;

        assert_eq!(node.name, "root");
        assert_eq!(node.children, vec![2, 1]);
        assert!(node.rotation.is_none());
        assert!(node.translation.is_none());
        assert!(node.scale.is_none());

        Ok(())
    }
}
