use super::{Document, Node, NodeIterator};
use crate::accessor::Accessor;
use crate::error::{check_index, Error, Result};
use crate::json;

/// Joints and matrices defining a skin. Inverse bind matrices are decoded
/// eagerly, one per joint.
#[derive(Debug)]
pub struct Skin {
    pub index: usize,
    pub name: Option<String>,

    pub inverse_bind_matrices: Option<Vec<glam::Mat4>>,

    pub(crate) joints: Vec<usize>,
    pub skeleton: Option<usize>,
}

impl Skin {
    pub(crate) fn new(
        index: usize,
        raw: &json::Skin,
        nodes_len: usize,
        accessors: &[Accessor],
    ) -> Result<Self> {
        let entity = format!("skin {index}");

        let inverse_bind_matrices = match raw.inverse_bind_matrices {
            None => None,
            Some(accessor) => {
                let accessor = &accessors[check_index(
                    &format!("{entity} inverseBindMatrices"),
                    "accessors",
                    accessor,
                    accessors.len(),
                )?];
                let matrices = accessor.mat4s().ok_or_else(|| {
                    Error::unsupported(
                        format!("{entity} inverseBindMatrices (accessor {})", accessor.index),
                        accessor.type_name(),
                        "MAT4 FLOAT",
                    )
                })?;
                Some(matrices)
            }
        };

        let joints = raw
            .joints
            .iter()
            .map(|&joint| check_index(&format!("{entity} joints"), "nodes", joint, nodes_len))
            .collect::<Result<Vec<_>>>()?;

        let skeleton = raw
            .skeleton
            .map(|node| check_index(&format!("{entity} skeleton"), "nodes", node, nodes_len))
            .transpose()?;

        Ok(Skin {
            index,
            name: raw.name.clone(),
            inverse_bind_matrices,
            joints,
            skeleton,
        })
    }

    /// Joint nodes, in declaration order. The matrix at position `i` of
    /// `inverse_bind_matrices` belongs to the joint at position `i`.
    pub fn joints<'a>(&'a self, doc: &'a Document) -> NodeIterator<'a> {
        NodeIterator {
            nodes: &doc.nodes,
            iter: self.joints.iter(),
        }
    }

    pub fn joint_indices(&self) -> &[usize] {
        &self.joints
    }

    pub fn skeleton<'a>(&self, doc: &'a Document) -> Option<&'a Node> {
        self.skeleton.map(|index| &doc.nodes[index])
    }
}
