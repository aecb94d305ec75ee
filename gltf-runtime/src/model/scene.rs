use super::{Document, NodeIterator};
use crate::error::{check_index, Result};
use crate::json;

#[derive(Debug)]
pub struct Scene {
    pub index: usize,
    pub name: Option<String>,
    pub(crate) nodes: Vec<usize>,
}

impl Scene {
    pub(crate) fn new(index: usize, raw: &json::Scene, nodes_len: usize) -> Result<Self> {
        let entity = format!("scene {index}");
        let nodes = raw
            .nodes
            .iter()
            .map(|&node| check_index(&entity, "nodes", node, nodes_len))
            .collect::<Result<Vec<_>>>()?;

        Ok(Scene {
            index,
            name: raw.name.clone(),
            nodes,
        })
    }

    /// Root nodes, in declaration order.
    pub fn nodes<'a>(&'a self, doc: &'a Document) -> NodeIterator<'a> {
        NodeIterator {
            nodes: &doc.nodes,
            iter: self.nodes.iter(),
        }
    }

    pub fn node_indices(&self) -> &[usize] {
        &self.nodes
    }
}
