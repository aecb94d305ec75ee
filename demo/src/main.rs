#![warn(clippy::all)]

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().context("usage: gltf-runtime-demo <file.gltf>")?;
    let path = std::path::Path::new(&path);

    let directory = path.parent().context("document path has no parent")?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .context("document path has no file name")?;

    let doc = gltf_runtime::load(directory, file_name)?;

    println!(
        "{} (glTF {})",
        file_name,
        doc.asset.version,
    );

    if let Some(scene) = doc.scene() {
        println!("default scene: {}", scene.name.as_deref().unwrap_or("?"));
        for node in scene.nodes(&doc) {
            print_node(&doc, node, 1);
        }
    }

    for mesh in &doc.meshes {
        println!("mesh {}: {}", mesh.index, mesh.name.as_deref().unwrap_or("?"));
        for primitive in &mesh.primitives {
            println!("  {}", primitive.summary(&doc));
        }
    }

    for material in &doc.materials {
        let base_color = material
            .pbr_metallic_roughness
            .base_color_texture
            .map(|texture| texture.texture(&doc).index);
        match base_color {
            Some(texture) => println!("material {}: texture {texture}", material.name),
            None => println!(
                "material {}: factor {:?}",
                material.name, material.pbr_metallic_roughness.base_color_factor
            ),
        }
    }

    for animation in &doc.animations {
        println!(
            "animation {}: {} channels",
            animation.name.as_deref().unwrap_or("?"),
            animation.channels.len()
        );
    }

    Ok(())
}

fn print_node(doc: &gltf_runtime::Document, node: &gltf_runtime::Node, depth: usize) {
    println!("{}{}", "  ".repeat(depth), node.name);
    for child in node.children(doc) {
        print_node(doc, child, depth + 1);
    }
}
