//! The raw document tree: plain serde mappings of the glTF JSON, one file per
//! top-level entity. No index is resolved and no byte is interpreted here;
//! that is the assembler's job ([`crate::model`]).

mod accessor;
mod animation;
mod asset;
mod buffer;
mod buffer_view;
mod camera;
mod document;
mod image;
mod material;
mod mesh;
mod node;
mod sampler;
mod scene;
mod skin;
mod texture;

pub use accessor::*;
pub use animation::*;
pub use asset::*;
pub use buffer::*;
pub use buffer_view::*;
pub use camera::*;
pub use document::*;
pub use image::*;
pub use material::*;
pub use mesh::*;
pub use node::*;
pub use sampler::*;
pub use scene::*;
pub use skin::*;
pub use texture::*;
