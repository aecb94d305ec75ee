use serde::Deserialize;

use super::*;

/// The top of the document tree. Optional arrays default to empty so
/// downstream code never branches on presence.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Root {
    pub asset: Asset,

    pub scene: Option<usize>,

    #[serde(default)]
    pub accessors: Vec<Accessor>,

    #[serde(default)]
    pub animations: Vec<Animation>,

    #[serde(default)]
    pub buffers: Vec<Buffer>,

    #[serde(default)]
    pub buffer_views: Vec<BufferView>,

    #[serde(default)]
    pub cameras: Vec<Camera>,

    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default)]
    pub materials: Vec<Material>,

    #[serde(default)]
    pub meshes: Vec<Mesh>,

    #[serde(default)]
    pub nodes: Vec<Node>,

    #[serde(default)]
    pub samplers: Vec<TextureSampler>,

    #[serde(default)]
    pub scenes: Vec<Scene>,

    #[serde(default)]
    pub skins: Vec<Skin>,

    #[serde(default)]
    pub textures: Vec<Texture>,
}

#[cfg(test)]
mod tests {
    use super::Root;

    #[test]
    fn missing_collections_default_to_empty() -> serde_json::Result<()> {
        let root: Root = serde_json::from_str(r#"{ "asset": { "version": "2.0" } }"#)?;

        assert_eq!(root.asset.version, "2.0");
        assert!(root.scene.is_none());
        assert!(root.nodes.is_empty());
        assert!(root.meshes.is_empty());
        assert!(root.buffers.is_empty());

        Ok(())
    }

    #[test]
    fn asset_is_required() {
        assert!(serde_json::from_str::<Root>(r#"{ "scenes": [] }"#).is_err());
    }
}
