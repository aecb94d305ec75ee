//! The graph assembly layer: building each top-level collection in
//! dependency order and resolving integer indices into references.

use std::path::Path;

use tracing::{debug, info};

use crate::accessor::Accessor;
use crate::buffer::{BufferStore, ByteRangeView};
use crate::error::{check_index, Error, Result};
use crate::json;

mod animation;
mod camera;
mod image;
mod material;
mod mesh;
mod node;
mod scene;
mod skin;
mod texture;

pub use animation::*;
pub use camera::*;
pub use image::*;
pub use material::*;
pub use mesh::*;
pub use node::*;
pub use scene::*;
pub use skin::*;
pub use texture::*;

pub use crate::json::Asset;

/// The fully linked, read-only object model of one document.
///
/// Every cross-reference was bounds-checked during assembly; accessor data,
/// skin matrices, animation keyframes and image bytes are already decoded.
#[derive(Debug)]
pub struct Document {
    pub asset: Asset,

    pub buffers: BufferStore,
    pub views: Vec<ByteRangeView>,
    pub accessors: Vec<Accessor>,

    pub animations: Vec<Animation>,
    pub cameras: Vec<Camera>,
    pub images: Vec<Image>,
    pub materials: Vec<Material>,
    pub meshes: Vec<Mesh>,
    pub nodes: Vec<Node>,
    pub samplers: Vec<TextureSampler>,
    pub scenes: Vec<Scene>,
    pub skins: Vec<Skin>,
    pub textures: Vec<Texture>,

    scene: Option<usize>,
}

impl Document {
    /// Loads `file_name` from `bin_directory`; buffer and image uris resolve
    /// against the same directory. All-or-nothing: any validation failure
    /// aborts the whole load.
    pub fn load(bin_directory: impl AsRef<Path>, file_name: &str) -> Result<Self> {
        let bin_directory = bin_directory.as_ref();
        let path = bin_directory.join(file_name);

        let text = std::fs::read_to_string(&path).map_err(|source| Error::IoFailure {
            path: path.clone(),
            source,
        })?;
        let root: json::Root = serde_json::from_str(&text)?;

        Self::from_root(root, bin_directory)
    }

    /// Assembles an already-parsed document tree. Stages run in dependency
    /// order; within the `nodes` array, children may forward-reference, so
    /// nodes get two passes.
    pub fn from_root(root: json::Root, bin_directory: &Path) -> Result<Self> {
        let cameras = root
            .cameras
            .iter()
            .enumerate()
            .map(|(i, raw)| Camera::new(i, raw))
            .collect::<Result<Vec<_>>>()?;

        let buffers = BufferStore::load(&root.buffers, bin_directory)?;
        debug!(buffers = buffers.len(), "loaded binary payloads");

        let views = root
            .buffer_views
            .iter()
            .enumerate()
            .map(|(i, raw)| ByteRangeView::new(i, raw, &buffers))
            .collect::<Result<Vec<_>>>()?;

        let accessors = root
            .accessors
            .iter()
            .enumerate()
            .map(|(i, raw)| Accessor::new(i, raw, &views, &buffers))
            .collect::<Result<Vec<_>>>()?;
        debug!(accessors = accessors.len(), "decoded accessors");

        // Pass 1: every node exists, scalar fields only. Mesh/skin/camera
        // links check against the raw array lengths since those collections
        // build later.
        let mut nodes = root
            .nodes
            .iter()
            .enumerate()
            .map(|(i, raw)| {
                Node::new(i, raw, root.meshes.len(), root.skins.len(), root.cameras.len())
            })
            .collect::<Result<Vec<_>>>()?;

        // Pass 2: attach children. Only now are forward indices resolvable.
        let nodes_len = nodes.len();
        for (i, raw) in root.nodes.iter().enumerate() {
            let entity = format!("node {i}");
            let children = raw
                .children
                .iter()
                .map(|&child| check_index(&entity, "nodes", child, nodes_len))
                .collect::<Result<Vec<_>>>()?;
            nodes[i].children = children;
        }

        let scenes = root
            .scenes
            .iter()
            .enumerate()
            .map(|(i, raw)| Scene::new(i, raw, nodes_len))
            .collect::<Result<Vec<_>>>()?;

        let scene = root
            .scene
            .map(|scene| check_index("document", "scenes", scene, scenes.len()))
            .transpose()?;

        let images = root
            .images
            .iter()
            .enumerate()
            .map(|(i, raw)| Image::new(i, raw, &views, &buffers, bin_directory))
            .collect::<Result<Vec<_>>>()?;

        let samplers = root
            .samplers
            .iter()
            .enumerate()
            .map(|(i, raw)| TextureSampler::new(i, raw))
            .collect::<Result<Vec<_>>>()?;

        let textures = root
            .textures
            .iter()
            .enumerate()
            .map(|(i, raw)| Texture::new(i, raw, samplers.len(), images.len()))
            .collect::<Result<Vec<_>>>()?;

        let materials = root
            .materials
            .iter()
            .enumerate()
            .map(|(i, raw)| Material::new(i, raw, textures.len()))
            .collect::<Result<Vec<_>>>()?;

        let meshes = root
            .meshes
            .iter()
            .enumerate()
            .map(|(i, raw)| Mesh::new(i, raw, &accessors, materials.len()))
            .collect::<Result<Vec<_>>>()?;

        let skins = root
            .skins
            .iter()
            .enumerate()
            .map(|(i, raw)| Skin::new(i, raw, nodes_len, &accessors))
            .collect::<Result<Vec<_>>>()?;

        let animations = root
            .animations
            .iter()
            .enumerate()
            .map(|(i, raw)| Animation::new(i, raw, nodes_len, &accessors))
            .collect::<Result<Vec<_>>>()?;

        info!(
            nodes = nodes.len(),
            meshes = meshes.len(),
            materials = materials.len(),
            animations = animations.len(),
            "document assembled"
        );

        Ok(Document {
            asset: root.asset,
            buffers,
            views,
            accessors,
            animations,
            cameras,
            images,
            materials,
            meshes,
            nodes,
            samplers,
            scenes,
            skins,
            textures,
            scene,
        })
    }

    /// The default scene, when the document declares one.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.map(|index| &self.scenes[index])
    }

    pub fn scene_index(&self) -> Option<usize> {
        self.scene
    }
}
