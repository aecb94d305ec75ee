//! The binary accessor layer: reinterpreting a byte range as an ordered
//! sequence of fixed-shape numeric tuples.

use byteorder::{ByteOrder, LE};

use crate::buffer::{BufferStore, ByteRangeView};
use crate::error::{check_index, Error, Result};
use crate::json;

mod component_kind;
mod element_shape;
mod values;

pub use component_kind::*;
pub use element_shape::*;
pub use values::*;

/// A fully decoded accessor: the typed view description plus its data.
#[derive(Debug, Clone)]
pub struct Accessor {
    pub index: usize,

    /// Buffer view index this accessor was decoded from.
    pub view: usize,

    pub component_kind: ComponentKind,
    pub shape: ElementShape,

    /// Declared element count; `data.component_len()` is exactly
    /// `count * shape.component_count()`.
    pub count: usize,

    /// When set, integer components represent fixed-point fractions. The
    /// decoder still yields raw native values; the int-to-float mapping is
    /// the consumer's responsibility.
    pub normalized: bool,

    pub min: Option<Vec<f64>>,
    pub max: Option<Vec<f64>>,

    pub data: AccessorValues,
}

impl Accessor {
    pub(crate) fn new(
        index: usize,
        raw: &json::Accessor,
        views: &[ByteRangeView],
        store: &BufferStore,
    ) -> Result<Self> {
        let entity = format!("accessor {index}");

        let component_kind = ComponentKind::from_code(raw.component_type).ok_or_else(|| {
            Error::unsupported(
                format!("{entity} componentType"),
                raw.component_type,
                ComponentKind::EXPECTED,
            )
        })?;
        let shape = ElementShape::from_name(&raw.ty).ok_or_else(|| {
            Error::unsupported(format!("{entity} type"), &raw.ty, ElementShape::EXPECTED)
        })?;

        let view = check_index(&entity, "bufferViews", raw.buffer_view, views.len())?;
        let data = decode(
            views[view].bytes(store),
            component_kind,
            shape,
            raw.count,
            index,
        )?;

        Ok(Accessor {
            index,
            view: raw.buffer_view,
            component_kind,
            shape,
            count: raw.count,
            normalized: raw.normalized,
            min: raw.min.clone(),
            max: raw.max.clone(),
            data,
        })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// "SHAPE KIND" label for error messages, e.g. "VEC3 FLOAT".
    pub fn type_name(&self) -> String {
        format!("{} {}", self.shape.name(), self.component_kind.name())
    }

    /// Scalar float elements (keyframe timestamps, morph weights).
    pub fn scalars_f32(&self) -> Option<&[f32]> {
        match (&self.data, self.shape) {
            (AccessorValues::F32(v), ElementShape::Scalar) => Some(v),
            _ => None,
        }
    }

    pub fn vec3s(&self) -> Option<Vec<glam::Vec3>> {
        match (&self.data, self.shape) {
            (AccessorValues::F32(v), ElementShape::Vec3) => {
                Some(v.chunks_exact(3).map(glam::Vec3::from_slice).collect())
            }
            _ => None,
        }
    }

    pub fn quats(&self) -> Option<Vec<glam::Quat>> {
        match (&self.data, self.shape) {
            (AccessorValues::F32(v), ElementShape::Vec4) => {
                Some(v.chunks_exact(4).map(glam::Quat::from_slice).collect())
            }
            _ => None,
        }
    }

    pub fn mat4s(&self) -> Option<Vec<glam::Mat4>> {
        match (&self.data, self.shape) {
            (AccessorValues::F32(v), ElementShape::Mat4) => {
                Some(v.chunks_exact(16).map(glam::Mat4::from_cols_slice).collect())
            }
            _ => None,
        }
    }
}

/// Decodes `count` elements of `shape`-grouped `kind` components from a
/// contiguous little-endian byte range. Component `j` of element `i` starts
/// at byte `i * width * components + j * width`; for a contiguous view that
/// is one flat read. The range must be consumed exactly.
pub fn decode(
    bytes: &[u8],
    kind: ComponentKind,
    shape: ElementShape,
    count: usize,
    accessor: usize,
) -> Result<AccessorValues> {
    let width = kind.byte_width();
    let components = shape.component_count();
    let element_size = width * components;

    // An overflowing product can never match a real byte range.
    if count.checked_mul(element_size) != Some(bytes.len()) {
        return Err(Error::LengthMismatch {
            context: format!("accessor {accessor}"),
            byte_length: bytes.len(),
            count,
            element_size,
        });
    }

    // Cannot overflow: `count * element_size` fits and `width >= 1`.
    let total = count * components;
    let values = match kind {
        ComponentKind::I8 => AccessorValues::I8(bytes.iter().map(|&b| b as i8).collect()),
        ComponentKind::U8 => AccessorValues::U8(bytes.to_vec()),
        ComponentKind::I16 => {
            let mut out = vec![0i16; total];
            LE::read_i16_into(bytes, &mut out);
            AccessorValues::I16(out)
        }
        ComponentKind::U16 => {
            let mut out = vec![0u16; total];
            LE::read_u16_into(bytes, &mut out);
            AccessorValues::U16(out)
        }
        ComponentKind::I32 => {
            let mut out = vec![0i32; total];
            LE::read_i32_into(bytes, &mut out);
            AccessorValues::I32(out)
        }
        ComponentKind::U32 => {
            let mut out = vec![0u32; total];
            LE::read_u32_into(bytes, &mut out);
            AccessorValues::U32(out)
        }
        ComponentKind::F32 => {
            let mut out = vec![0f32; total];
            LE::read_f32_into(bytes, &mut out);
            AccessorValues::F32(out)
        }
    };

    debug_assert_eq!(values.component_len(), total);
    Ok(values)
}
