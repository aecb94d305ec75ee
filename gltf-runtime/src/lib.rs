//! Runtime loader for glTF 2.0 documents.
//!
//! Reads a `.gltf` JSON document plus its external `.bin` payloads into a
//! strongly typed, cross-linked object model. Two layers do the real work:
//! the binary accessor layer ([`accessor`]) reinterprets validated byte
//! ranges as sequences of fixed-shape numeric tuples, and the graph assembly
//! layer ([`model`]) resolves the document's integer indices into references,
//! building each top-level collection in dependency order (nodes take two
//! passes because children may forward-reference).
//!
//! Not supported: GLB containers, embedded/base64 buffers, strided buffer
//! views, sparse accessors, morph targets and extensions.
//!
//! ```no_run
//! let doc = gltf_runtime::load("assets", "monkey.gltf")?;
//!
//! for mesh in &doc.meshes {
//!     for primitive in &mesh.primitives {
//!         println!("{}", primitive.summary(&doc));
//!     }
//! }
//! # Ok::<(), gltf_runtime::Error>(())
//! ```

pub mod accessor;
pub mod attribute;
pub mod buffer;
pub mod error;
pub mod json;
pub mod model;

pub use accessor::{Accessor, AccessorValues, ComponentKind, ElementShape};
pub use attribute::{AttributeValues, Semantic, VertexAttribute};
pub use buffer::{Buffer, BufferStore, ByteRangeView, UsageHint};
pub use error::{Error, Result};
pub use model::{
    AlphaMode, Animation, AnimationSampler, Asset, Camera, Channel, ChannelTarget, Document,
    Image, Interpolation, Material, Mesh, Node, NodeIterator, Primitive, Projection, Scene, Skin,
    TargetPath, Texture, TextureRef, TextureSampler, TopologyMode,
};

use std::path::Path;

/// Loads the document `file_name` from `bin_directory`. Buffer and image
/// uris are resolved relative to the same directory.
pub fn load(bin_directory: impl AsRef<Path>, file_name: &str) -> Result<Document> {
    Document::load(bin_directory, file_name)
}
