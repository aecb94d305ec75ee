use super::{Document, Texture};
use crate::error::{check_index, Error, Result};
use crate::json;

/// Alpha rendering mode, OPAQUE when undeclared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaMode {
    Opaque,
    Mask,
    Blend,
}

impl AlphaMode {
    pub const EXPECTED: &'static str = r#"one of ["OPAQUE", "MASK", "BLEND"]"#;

    fn parse(value: Option<&str>, entity: &str) -> Result<Self> {
        match value {
            None | Some("OPAQUE") => Ok(AlphaMode::Opaque),
            Some("MASK") => Ok(AlphaMode::Mask),
            Some("BLEND") => Ok(AlphaMode::Blend),
            Some(other) => Err(Error::unsupported(
                format!("{entity} alphaMode"),
                other,
                Self::EXPECTED,
            )),
        }
    }
}

/// A resolved reference to a texture plus the TEXCOORD set it samples with.
#[derive(Debug, Clone, Copy)]
pub struct TextureRef {
    pub texture: usize,
    pub tex_coord: u32,
}

impl TextureRef {
    fn new(index: usize, tex_coord: u32, entity: &str, textures_len: usize) -> Result<Self> {
        Ok(TextureRef {
            texture: check_index(entity, "textures", index, textures_len)?,
            tex_coord,
        })
    }

    fn from_info(info: &json::TextureInfo, entity: &str, textures_len: usize) -> Result<Self> {
        TextureRef::new(info.index, info.tex_coord, entity, textures_len)
    }

    pub fn texture<'a>(&self, doc: &'a Document) -> &'a Texture {
        &doc.textures[self.texture]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NormalTexture {
    pub texture: TextureRef,

    /// Multiplier applied to each sampled normal.
    pub scale: f32,
}

#[derive(Debug, Clone, Copy)]
pub struct OcclusionTexture {
    pub texture: TextureRef,

    /// How much of the sampled occlusion applies.
    pub strength: f32,
}

#[derive(Debug)]
pub struct PbrMetallicRoughness {
    pub base_color_factor: glam::Vec4,
    pub base_color_texture: Option<TextureRef>,
    pub metallic_factor: f32,
    pub roughness_factor: f32,
    pub metallic_roughness_texture: Option<TextureRef>,
}

impl PbrMetallicRoughness {
    fn new(raw: &json::PbrMetallicRoughness, entity: &str, textures_len: usize) -> Result<Self> {
        Ok(PbrMetallicRoughness {
            base_color_factor: glam::Vec4::from(raw.base_color_factor),
            base_color_texture: raw
                .base_color_texture
                .as_ref()
                .map(|info| TextureRef::from_info(info, entity, textures_len))
                .transpose()?,
            metallic_factor: raw.metallic_factor,
            roughness_factor: raw.roughness_factor,
            metallic_roughness_texture: raw
                .metallic_roughness_texture
                .as_ref()
                .map(|info| TextureRef::from_info(info, entity, textures_len))
                .transpose()?,
        })
    }
}

impl Default for PbrMetallicRoughness {
    fn default() -> Self {
        PbrMetallicRoughness {
            base_color_factor: glam::Vec4::ONE,
            base_color_texture: None,
            metallic_factor: 1.0,
            roughness_factor: 1.0,
            metallic_roughness_texture: None,
        }
    }
}

#[derive(Debug)]
pub struct Material {
    pub index: usize,
    pub name: String,

    /// Defaults apply in full when the block is absent.
    pub pbr_metallic_roughness: PbrMetallicRoughness,

    pub normal_texture: Option<NormalTexture>,
    pub occlusion_texture: Option<OcclusionTexture>,
    pub emissive_texture: Option<TextureRef>,

    pub emissive_factor: glam::Vec3,
    pub alpha_mode: AlphaMode,
    pub alpha_cutoff: f32,
    pub double_sided: bool,
}

impl Material {
    pub(crate) fn new(index: usize, raw: &json::Material, textures_len: usize) -> Result<Self> {
        let entity = format!("material {index}");

        let pbr_metallic_roughness = match &raw.pbr_metallic_roughness {
            None => PbrMetallicRoughness::default(),
            Some(pbr) => PbrMetallicRoughness::new(pbr, &entity, textures_len)?,
        };

        let normal_texture = raw
            .normal_texture
            .as_ref()
            .map(|info| -> Result<NormalTexture> {
                Ok(NormalTexture {
                    texture: TextureRef::new(info.index, info.tex_coord, &entity, textures_len)?,
                    scale: info.scale,
                })
            })
            .transpose()?;

        let occlusion_texture = raw
            .occlusion_texture
            .as_ref()
            .map(|info| -> Result<OcclusionTexture> {
                Ok(OcclusionTexture {
                    texture: TextureRef::new(info.index, info.tex_coord, &entity, textures_len)?,
                    strength: info.strength,
                })
            })
            .transpose()?;

        let emissive_texture = raw
            .emissive_texture
            .as_ref()
            .map(|info| TextureRef::from_info(info, &entity, textures_len))
            .transpose()?;

        Ok(Material {
            index,
            name: raw.name.clone(),
            pbr_metallic_roughness,
            normal_texture,
            occlusion_texture,
            emissive_texture,
            emissive_factor: glam::Vec3::from(raw.emissive_factor),
            alpha_mode: AlphaMode::parse(raw.alpha_mode.as_deref(), &entity)?,
            alpha_cutoff: raw.alpha_cutoff,
            double_sided: raw.double_sided,
        })
    }
}
