use byteorder::{ByteOrder, LE};

use super::ComponentKind;

/// Decoded accessor contents: one flat, little-endian-decoded component
/// vector whose native type was decided once, at decode time. Elements are
/// consecutive runs of `component_count` entries.
#[derive(Debug, Clone, PartialEq)]
pub enum AccessorValues {
    I8(Vec<i8>),
    U8(Vec<u8>),
    I16(Vec<i16>),
    U16(Vec<u16>),
    I32(Vec<i32>),
    U32(Vec<u32>),
    F32(Vec<f32>),
}

impl AccessorValues {
    pub fn component_kind(&self) -> ComponentKind {
        match self {
            AccessorValues::I8(_) => ComponentKind::I8,
            AccessorValues::U8(_) => ComponentKind::U8,
            AccessorValues::I16(_) => ComponentKind::I16,
            AccessorValues::U16(_) => ComponentKind::U16,
            AccessorValues::I32(_) => ComponentKind::I32,
            AccessorValues::U32(_) => ComponentKind::U32,
            AccessorValues::F32(_) => ComponentKind::F32,
        }
    }

    /// Total number of scalar components across all elements.
    pub fn component_len(&self) -> usize {
        match self {
            AccessorValues::I8(v) => v.len(),
            AccessorValues::U8(v) => v.len(),
            AccessorValues::I16(v) => v.len(),
            AccessorValues::U16(v) => v.len(),
            AccessorValues::I32(v) => v.len(),
            AccessorValues::U32(v) => v.len(),
            AccessorValues::F32(v) => v.len(),
        }
    }

    pub fn as_u8(&self) -> Option<&[u8]> {
        match self {
            AccessorValues::U8(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<&[u16]> {
        match self {
            AccessorValues::U16(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            AccessorValues::F32(v) => Some(v),
            _ => None,
        }
    }

    /// Re-serializes the components with the layout they were decoded from.
    /// The exact inverse of [`super::decode`] for a contiguous view.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        match self {
            AccessorValues::I8(v) => v.iter().map(|&x| x as u8).collect(),
            AccessorValues::U8(v) => v.clone(),
            AccessorValues::I16(v) => {
                let mut out = vec![0u8; v.len() * 2];
                LE::write_i16_into(v, &mut out);
                out
            }
            AccessorValues::U16(v) => {
                let mut out = vec![0u8; v.len() * 2];
                LE::write_u16_into(v, &mut out);
                out
            }
            AccessorValues::I32(v) => {
                let mut out = vec![0u8; v.len() * 4];
                LE::write_i32_into(v, &mut out);
                out
            }
            AccessorValues::U32(v) => {
                let mut out = vec![0u8; v.len() * 4];
                LE::write_u32_into(v, &mut out);
                out
            }
            AccessorValues::F32(v) => {
                let mut out = vec![0u8; v.len() * 4];
                LE::write_f32_into(v, &mut out);
                out
            }
        }
    }
}
