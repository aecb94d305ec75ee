use crate::error::{Error, Result};
use crate::json;

pub use crate::json::{Orthographic, Perspective};

/// The two projection variants a camera may declare, discriminated by the
/// document's `type` string.
#[derive(Debug, Clone, Copy)]
pub enum Projection {
    Perspective(Perspective),
    Orthographic(Orthographic),
}

#[derive(Debug)]
pub struct Camera {
    pub index: usize,
    pub name: Option<String>,
    pub projection: Projection,
}

impl Camera {
    pub(crate) fn new(index: usize, raw: &json::Camera) -> Result<Self> {
        let entity = format!("camera {index}");

        let projection = match raw.ty.as_str() {
            "perspective" => {
                let perspective = raw.perspective.ok_or_else(|| {
                    Error::malformed(format!("{entity}: missing perspective properties"))
                })?;
                Projection::Perspective(perspective)
            }
            "orthographic" => {
                let orthographic = raw.orthographic.ok_or_else(|| {
                    Error::malformed(format!("{entity}: missing orthographic properties"))
                })?;
                Projection::Orthographic(orthographic)
            }
            other => {
                return Err(Error::unsupported(
                    format!("{entity} type"),
                    other,
                    r#""perspective" or "orthographic""#,
                ))
            }
        };

        Ok(Camera {
            index,
            name: raw.name.clone(),
            projection,
        })
    }
}
