//! Typed vertex attribute casting: generic decoded tuples reinterpreted as
//! semantically typed geometry arrays.

use std::fmt;

use crate::accessor::{Accessor, AccessorValues, ElementShape};
use crate::error::{Error, Result};

/// The closed set of vertex attribute semantics the caster understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Semantic {
    Position,
    Normal,
    TexCoord,
    Joints,
    Weights,
}

impl Semantic {
    pub const EXPECTED: &'static str =
        r#"one of ["POSITION", "NORMAL", "TEXCOORD", "JOINTS", "WEIGHTS"]"#;

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "POSITION" => Some(Semantic::Position),
            "NORMAL" => Some(Semantic::Normal),
            "TEXCOORD" => Some(Semantic::TexCoord),
            "JOINTS" => Some(Semantic::Joints),
            "WEIGHTS" => Some(Semantic::Weights),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Semantic::Position => "POSITION",
            Semantic::Normal => "NORMAL",
            Semantic::TexCoord => "TEXCOORD",
            Semantic::Joints => "JOINTS",
            Semantic::Weights => "WEIGHTS",
        }
    }
}

/// Attribute identity: semantic plus the optional usage index carried by
/// keys like "TEXCOORD_1".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexAttribute {
    pub semantic: Semantic,
    pub usage_index: Option<u32>,
}

impl VertexAttribute {
    pub fn new(semantic: Semantic, usage_index: Option<u32>) -> Self {
        VertexAttribute {
            semantic,
            usage_index,
        }
    }

    /// Parses a primitive attribute key. A trailing `_<digits>` suffix is the
    /// usage index; the rest must name a known semantic.
    pub fn parse(key: &str) -> Result<Self> {
        let (name, usage_index) = match key.rsplit_once('_') {
            Some((head, tail))
                if !head.is_empty()
                    && !tail.is_empty()
                    && tail.bytes().all(|b| b.is_ascii_digit()) =>
            {
                match tail.parse::<u32>() {
                    Ok(index) => (head, Some(index)),
                    Err(_) => (key, None),
                }
            }
            _ => (key, None),
        };

        let semantic = Semantic::from_name(name).ok_or_else(|| {
            Error::unsupported("primitive attribute", key, Semantic::EXPECTED)
        })?;

        Ok(VertexAttribute {
            semantic,
            usage_index,
        })
    }
}

impl fmt::Display for VertexAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.usage_index {
            Some(index) => write!(f, "{}_{}", self.semantic.name(), index),
            None => f.write_str(self.semantic.name()),
        }
    }
}

/// A typed attribute array. Variant and layout follow the semantic:
/// positions/normals are 3 floats, texture coordinates 2 floats, joint
/// indices 4 bytes, joint weights 4 floats.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValues {
    Positions(Vec<glam::Vec3>),
    Normals(Vec<glam::Vec3>),
    TexCoords(Vec<glam::Vec2>),
    Joints(Vec<[u8; 4]>),
    Weights(Vec<glam::Vec4>),
}

impl AttributeValues {
    /// Casts decoded tuples into the array type `semantic` demands. Pure
    /// projection: element order and count are preserved exactly.
    pub fn cast(semantic: Semantic, accessor: &Accessor) -> Result<Self> {
        let cast = match (semantic, &accessor.data, accessor.shape) {
            (Semantic::Position, AccessorValues::F32(v), ElementShape::Vec3) => {
                AttributeValues::Positions(v.chunks_exact(3).map(glam::Vec3::from_slice).collect())
            }
            (Semantic::Normal, AccessorValues::F32(v), ElementShape::Vec3) => {
                AttributeValues::Normals(v.chunks_exact(3).map(glam::Vec3::from_slice).collect())
            }
            (Semantic::TexCoord, AccessorValues::F32(v), ElementShape::Vec2) => {
                AttributeValues::TexCoords(v.chunks_exact(2).map(glam::Vec2::from_slice).collect())
            }
            (Semantic::Joints, AccessorValues::U8(v), ElementShape::Vec4) => AttributeValues::Joints(
                v.chunks_exact(4).map(|c| [c[0], c[1], c[2], c[3]]).collect(),
            ),
            (Semantic::Weights, AccessorValues::F32(v), ElementShape::Vec4) => {
                AttributeValues::Weights(v.chunks_exact(4).map(glam::Vec4::from_slice).collect())
            }
            _ => {
                return Err(Error::unsupported(
                    format!("accessor {} as {}", accessor.index, semantic.name()),
                    accessor.type_name(),
                    expected_layout(semantic),
                ))
            }
        };

        Ok(cast)
    }

    pub fn len(&self) -> usize {
        match self {
            AttributeValues::Positions(v) => v.len(),
            AttributeValues::Normals(v) => v.len(),
            AttributeValues::TexCoords(v) => v.len(),
            AttributeValues::Joints(v) => v.len(),
            AttributeValues::Weights(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn expected_layout(semantic: Semantic) -> &'static str {
    match semantic {
        Semantic::Position | Semantic::Normal => "VEC3 FLOAT",
        Semantic::TexCoord => "VEC2 FLOAT",
        Semantic::Joints => "VEC4 UNSIGNED_BYTE",
        Semantic::Weights => "VEC4 FLOAT",
    }
}
