use super::{Document, Image};
use crate::error::{check_index, Error, Result};
use crate::json;

/// Magnification filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagFilter {
    Nearest,
    Linear,
}

impl MagFilter {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            9728 => Some(MagFilter::Nearest),
            9729 => Some(MagFilter::Linear),
            _ => None,
        }
    }
}

/// Minification filter, including the mipmap variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinFilter {
    Nearest,
    Linear,
    NearestMipmapNearest,
    LinearMipmapNearest,
    NearestMipmapLinear,
    LinearMipmapLinear,
}

impl MinFilter {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            9728 => Some(MinFilter::Nearest),
            9729 => Some(MinFilter::Linear),
            9984 => Some(MinFilter::NearestMipmapNearest),
            9985 => Some(MinFilter::LinearMipmapNearest),
            9986 => Some(MinFilter::NearestMipmapLinear),
            9987 => Some(MinFilter::LinearMipmapLinear),
            _ => None,
        }
    }
}

/// Texture coordinate wrapping, REPEAT when undeclared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapMode {
    ClampToEdge,
    MirroredRepeat,
    Repeat,
}

impl WrapMode {
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            33071 => Some(WrapMode::ClampToEdge),
            33648 => Some(WrapMode::MirroredRepeat),
            10497 => Some(WrapMode::Repeat),
            _ => None,
        }
    }
}

/// Filtering and wrapping properties for sampling a texture.
#[derive(Debug)]
pub struct TextureSampler {
    pub index: usize,
    pub name: Option<String>,

    pub mag_filter: Option<MagFilter>,
    pub min_filter: Option<MinFilter>,
    pub wrap_s: WrapMode,
    pub wrap_t: WrapMode,
}

impl TextureSampler {
    pub(crate) fn new(index: usize, raw: &json::TextureSampler) -> Result<Self> {
        let entity = format!("sampler {index}");

        let mag_filter = raw
            .mag_filter
            .map(|code| {
                MagFilter::from_code(code).ok_or_else(|| {
                    Error::unsupported(format!("{entity} magFilter"), code, "9728 or 9729")
                })
            })
            .transpose()?;
        let min_filter = raw
            .min_filter
            .map(|code| {
                MinFilter::from_code(code).ok_or_else(|| {
                    Error::unsupported(
                        format!("{entity} minFilter"),
                        code,
                        "one of [9728, 9729, 9984, 9985, 9986, 9987]",
                    )
                })
            })
            .transpose()?;

        let wrap = |code: Option<u32>, field: &str| match code {
            None => Ok(WrapMode::Repeat),
            Some(code) => WrapMode::from_code(code).ok_or_else(|| {
                Error::unsupported(
                    format!("{entity} {field}"),
                    code,
                    "one of [33071, 33648, 10497]",
                )
            }),
        };

        Ok(TextureSampler {
            index,
            name: raw.name.clone(),
            mag_filter,
            min_filter,
            wrap_s: wrap(raw.wrap_s, "wrapS")?,
            wrap_t: wrap(raw.wrap_t, "wrapT")?,
        })
    }
}

/// A texture: an image source paired with an optional sampler. When the
/// sampler is absent, repeat wrapping with auto filtering applies.
#[derive(Debug)]
pub struct Texture {
    pub index: usize,
    pub name: Option<String>,

    pub sampler: Option<usize>,
    pub source: Option<usize>,
}

impl Texture {
    pub(crate) fn new(
        index: usize,
        raw: &json::Texture,
        samplers_len: usize,
        images_len: usize,
    ) -> Result<Self> {
        let entity = format!("texture {index}");

        Ok(Texture {
            index,
            name: raw.name.clone(),
            sampler: raw
                .sampler
                .map(|sampler| check_index(&entity, "samplers", sampler, samplers_len))
                .transpose()?,
            source: raw
                .source
                .map(|source| check_index(&entity, "images", source, images_len))
                .transpose()?,
        })
    }

    pub fn sampler<'a>(&self, doc: &'a Document) -> Option<&'a TextureSampler> {
        self.sampler.map(|index| &doc.samplers[index])
    }

    pub fn source<'a>(&self, doc: &'a Document) -> Option<&'a Image> {
        self.source.map(|index| &doc.images[index])
    }
}
