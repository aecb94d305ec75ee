use std::collections::HashMap;

use super::{Document, Material};
use crate::accessor::{Accessor, AccessorValues, ElementShape};
use crate::attribute::{AttributeValues, VertexAttribute};
use crate::error::{check_index, Error, Result};
use crate::json;

/// Topology of the elements a primitive describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyMode {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl TopologyMode {
    pub const EXPECTED: &'static str = "a topology code in 0..=6";

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(TopologyMode::Points),
            1 => Some(TopologyMode::Lines),
            2 => Some(TopologyMode::LineLoop),
            3 => Some(TopologyMode::LineStrip),
            4 => Some(TopologyMode::Triangles),
            5 => Some(TopologyMode::TriangleStrip),
            6 => Some(TopologyMode::TriangleFan),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            TopologyMode::Points => 0,
            TopologyMode::Lines => 1,
            TopologyMode::LineLoop => 2,
            TopologyMode::LineStrip => 3,
            TopologyMode::Triangles => 4,
            TopologyMode::TriangleStrip => 5,
            TopologyMode::TriangleFan => 6,
        }
    }
}

/// Geometry to be rendered with one material: typed attribute arrays plus
/// optional u16 indices.
#[derive(Debug)]
pub struct Primitive {
    pub attributes: HashMap<VertexAttribute, AttributeValues>,

    /// Vertex indices; `None` means non-indexed geometry.
    pub indices: Option<Vec<u16>>,

    pub material: Option<usize>,

    pub mode: TopologyMode,
}

impl Primitive {
    fn new(
        mesh: usize,
        index: usize,
        raw: &json::Primitive,
        accessors: &[Accessor],
        materials_len: usize,
    ) -> Result<Self> {
        let entity = format!("mesh {mesh} primitive {index}");

        let mut attributes = HashMap::with_capacity(raw.attributes.len());
        for (key, &accessor) in &raw.attributes {
            let attribute = VertexAttribute::parse(key)?;
            let accessor = &accessors[check_index(
                &format!("{entity} {key}"),
                "accessors",
                accessor,
                accessors.len(),
            )?];
            attributes.insert(attribute, AttributeValues::cast(attribute.semantic, accessor)?);
        }

        let indices = match raw.indices {
            None => None,
            Some(accessor) => {
                let accessor = &accessors[check_index(
                    &format!("{entity} indices"),
                    "accessors",
                    accessor,
                    accessors.len(),
                )?];
                match (&accessor.data, accessor.shape) {
                    (AccessorValues::U16(values), ElementShape::Scalar) => Some(values.clone()),
                    _ => {
                        return Err(Error::unsupported(
                            format!("{entity} indices (accessor {})", accessor.index),
                            accessor.type_name(),
                            "SCALAR UNSIGNED_SHORT",
                        ))
                    }
                }
            }
        };

        let material = raw
            .material
            .map(|material| check_index(&entity, "materials", material, materials_len))
            .transpose()?;

        let mode = match raw.mode {
            None => TopologyMode::Triangles,
            Some(code) => TopologyMode::from_code(code).ok_or_else(|| {
                Error::unsupported(format!("{entity} mode"), code, TopologyMode::EXPECTED)
            })?,
        };

        Ok(Primitive {
            attributes,
            indices,
            material,
            mode,
        })
    }

    pub fn attribute(&self, attribute: &VertexAttribute) -> Option<&AttributeValues> {
        self.attributes.get(attribute)
    }

    pub fn material<'a>(&self, doc: &'a Document) -> Option<&'a Material> {
        self.material.map(|index| &doc.materials[index])
    }

    /// Vertex count, taken from any attribute array (all share one count).
    pub fn vertex_count(&self) -> usize {
        self.attributes
            .values()
            .next()
            .map_or(0, AttributeValues::len)
    }

    /// Human-friendly one-liner: `24 of (NORMAL, POSITION) as steel`.
    pub fn summary(&self, doc: &Document) -> String {
        let mut keys: Vec<_> = self.attributes.keys().collect();
        keys.sort();
        let keys = keys
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");

        match self.material(doc) {
            Some(material) => format!("{} of ({keys}) as {}", self.vertex_count(), material.name),
            None => format!("{} of ({keys})", self.vertex_count()),
        }
    }
}

#[derive(Debug)]
pub struct Mesh {
    pub index: usize,
    pub name: Option<String>,

    pub primitives: Vec<Primitive>,

    /// Morph target weights, value-copied from the document.
    pub weights: Option<Vec<f32>>,
}

impl Mesh {
    pub(crate) fn new(
        index: usize,
        raw: &json::Mesh,
        accessors: &[Accessor],
        materials_len: usize,
    ) -> Result<Self> {
        let primitives = raw
            .primitives
            .iter()
            .enumerate()
            .map(|(i, primitive)| Primitive::new(index, i, primitive, accessors, materials_len))
            .collect::<Result<Vec<_>>>()?;

        Ok(Mesh {
            index,
            name: raw.name.clone(),
            primitives,
            weights: raw.weights.clone(),
        })
    }
}
