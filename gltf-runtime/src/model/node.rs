use super::{Camera, Document, Mesh, Skin};
use crate::error::{check_index, Result};
use crate::json;

/// A hierarchy node. The document owns every node in one flat arena; child
/// links are indices into that arena, so a node can be a scene root and a
/// skin joint at the same time without ownership cycles.
#[derive(Debug)]
pub struct Node {
    /// Position in the document's `nodes` array.
    pub index: usize,

    pub name: String,

    pub translation: Option<glam::Vec3>,
    pub rotation: Option<glam::Quat>,
    pub scale: Option<glam::Vec3>,

    pub mesh: Option<usize>,
    pub skin: Option<usize>,
    pub camera: Option<usize>,

    /// Set by the assembler's second pass, after every node exists.
    pub(crate) children: Vec<usize>,
}

impl Node {
    /// Pass 1: scalar fields only. Children are attached later because a
    /// child index may point past this node's own position.
    pub(crate) fn new(
        index: usize,
        raw: &json::Node,
        meshes_len: usize,
        skins_len: usize,
        cameras_len: usize,
    ) -> Result<Self> {
        let entity = format!("node {index}");

        Ok(Node {
            index,
            name: raw.name.clone(),
            translation: raw.translation.map(glam::Vec3::from),
            rotation: raw.rotation.map(|[x, y, z, w]| glam::Quat::from_xyzw(x, y, z, w)),
            scale: raw.scale.map(glam::Vec3::from),
            mesh: raw
                .mesh
                .map(|mesh| check_index(&entity, "meshes", mesh, meshes_len))
                .transpose()?,
            skin: raw
                .skin
                .map(|skin| check_index(&entity, "skins", skin, skins_len))
                .transpose()?,
            camera: raw
                .camera
                .map(|camera| check_index(&entity, "cameras", camera, cameras_len))
                .transpose()?,
            children: Vec::new(),
        })
    }

    pub fn children<'a>(&'a self, doc: &'a Document) -> NodeIterator<'a> {
        NodeIterator {
            nodes: &doc.nodes,
            iter: self.children.iter(),
        }
    }

    pub fn child_indices(&self) -> &[usize] {
        &self.children
    }

    pub fn mesh<'a>(&self, doc: &'a Document) -> Option<&'a Mesh> {
        self.mesh.map(|index| &doc.meshes[index])
    }

    pub fn skin<'a>(&self, doc: &'a Document) -> Option<&'a Skin> {
        self.skin.map(|index| &doc.skins[index])
    }

    pub fn camera<'a>(&self, doc: &'a Document) -> Option<&'a Camera> {
        self.camera.map(|index| &doc.cameras[index])
    }

    /// Local transform composed from TRS, identity where unset.
    pub fn transform(&self) -> glam::Mat4 {
        glam::Mat4::from_scale_rotation_translation(
            self.scale.unwrap_or(glam::Vec3::ONE),
            self.rotation.unwrap_or(glam::Quat::IDENTITY),
            self.translation.unwrap_or(glam::Vec3::ZERO),
        )
    }
}

/// Resolves a list of node indices against the document's node arena.
/// Indices were bounds-checked at assembly, so lookups cannot dangle.
pub struct NodeIterator<'a> {
    pub(crate) nodes: &'a [Node],
    pub(crate) iter: std::slice::Iter<'a, usize>,
}

impl<'a> Iterator for NodeIterator<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|&index| &self.nodes[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a> ExactSizeIterator for NodeIterator<'a> {}
