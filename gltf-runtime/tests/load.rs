use std::fs;

use gltf_runtime::{
    AccessorValues, AttributeValues, Document, Error, Interpolation, Semantic, TargetPath,
    VertexAttribute,
};

fn f32_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn u16_bytes(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// Writes the document and its `data.bin` payload into a fresh directory and
/// loads it back.
fn load_doc(json: &str, bin: &[u8]) -> gltf_runtime::Result<Document> {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("data.bin"), bin).unwrap();
    fs::write(dir.path().join("scene.gltf"), json).unwrap();

    gltf_runtime::load(dir.path(), "scene.gltf")
}

#[test]
fn decodes_vec3_float_accessor() {
    let values: Vec<f32> = (0..12).map(|i| i as f32).collect();
    let json = r#"{
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 48, "uri": "data.bin" }],
        "bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": 48 }],
        "accessors": [{ "bufferView": 0, "componentType": 5126, "type": "VEC3", "count": 4 }]
    }"#;

    let doc = load_doc(json, &f32_bytes(&values)).unwrap();

    let accessor = &doc.accessors[0];
    assert_eq!(accessor.len(), 4);
    assert_eq!(accessor.type_name(), "VEC3 FLOAT");
    assert_eq!(accessor.data, AccessorValues::F32(values));

    let vec3s = accessor.vec3s().unwrap();
    assert_eq!(vec3s[1], glam::vec3(3.0, 4.0, 5.0));
}

#[test]
fn decodes_u16_scalars() {
    let json = r#"{
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 6, "uri": "data.bin" }],
        "bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": 6 }],
        "accessors": [{ "bufferView": 0, "componentType": 5123, "type": "SCALAR", "count": 3 }]
    }"#;

    let doc = load_doc(json, &u16_bytes(&[1, 255, 0x1234])).unwrap();

    assert_eq!(
        doc.accessors[0].data,
        AccessorValues::U16(vec![1, 255, 0x1234])
    );
}

#[test]
fn rejects_byte_length_mismatch() {
    // 6 bytes cannot hold 5 u16 scalars.
    let json = r#"{
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 6, "uri": "data.bin" }],
        "bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": 6 }],
        "accessors": [{ "bufferView": 0, "componentType": 5123, "type": "SCALAR", "count": 5 }]
    }"#;

    let err = load_doc(json, &u16_bytes(&[1, 2, 3])).unwrap_err();

    assert!(matches!(err, Error::LengthMismatch { byte_length: 6, count: 5, .. }));
}

#[test]
fn rejects_absurd_element_counts() {
    // Large enough that count * element_size overflows a usize.
    let json = r#"{
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 8, "uri": "data.bin" }],
        "bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": 8 }],
        "accessors": [{
            "bufferView": 0,
            "componentType": 5123,
            "type": "SCALAR",
            "count": 9223372036854775807
        }]
    }"#;

    let err = load_doc(json, &[0; 8]).unwrap_err();

    assert!(matches!(err, Error::LengthMismatch { byte_length: 8, .. }));
}

#[test]
fn rejects_strided_views() {
    let json = r#"{
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 32, "uri": "data.bin" }],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": 32, "byteStride": 16 }
        ]
    }"#;

    let err = load_doc(json, &[0; 32]).unwrap_err();

    assert!(matches!(err, Error::UnsupportedLayout { view: 0 }));
}

#[test]
fn missing_payload_is_io_failure() {
    let dir = tempfile::tempdir().unwrap();
    let json = r#"{
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 4, "uri": "missing.bin" }]
    }"#;
    fs::write(dir.path().join("scene.gltf"), json).unwrap();

    let err = gltf_runtime::load(dir.path(), "scene.gltf").unwrap_err();

    assert!(matches!(err, Error::IoFailure { .. }));
}

#[test]
fn missing_asset_is_malformed() {
    let err = load_doc(r#"{ "scenes": [] }"#, &[]).unwrap_err();

    assert!(matches!(err, Error::MalformedDocument { .. }));
}

#[test]
fn forward_child_references_resolve() {
    // Parent at index 0 names a child that only exists later in the array.
    let json = r#"{
        "asset": { "version": "2.0" },
        "scene": 0,
        "scenes": [{ "name": "root", "nodes": [0] }],
        "nodes": [
            { "name": "parent", "children": [1] },
            { "name": "child" }
        ]
    }"#;

    let doc = load_doc(json, &[]).unwrap();

    let scene = doc.scene().unwrap();
    let parent = scene.nodes(&doc).next().unwrap();
    assert!(std::ptr::eq(parent, &doc.nodes[0]));

    let child = parent.children(&doc).next().unwrap();
    assert!(std::ptr::eq(child, &doc.nodes[1]));
    assert_eq!(child.name, "child");
}

#[test]
fn dangling_scene_root_is_rejected() {
    let json = r#"{
        "asset": { "version": "2.0" },
        "scenes": [{ "nodes": [5] }],
        "nodes": [{ "name": "only" }]
    }"#;

    let err = load_doc(json, &[]).unwrap_err();

    assert!(matches!(
        err,
        Error::DanglingReference { target: "nodes", index: 5, len: 1, .. }
    ));
}

#[test]
fn dangling_node_child_is_rejected() {
    let json = r#"{
        "asset": { "version": "2.0" },
        "nodes": [{ "name": "parent", "children": [3] }]
    }"#;

    let err = load_doc(json, &[]).unwrap_err();

    assert!(matches!(
        err,
        Error::DanglingReference { target: "nodes", index: 3, len: 1, .. }
    ));
}

#[test]
fn dangling_default_scene_is_rejected() {
    let json = r#"{
        "asset": { "version": "2.0" },
        "scene": 2,
        "scenes": [{ "nodes": [] }]
    }"#;

    let err = load_doc(json, &[]).unwrap_err();

    assert!(matches!(
        err,
        Error::DanglingReference { target: "scenes", index: 2, len: 1, .. }
    ));
}

#[test]
fn decodes_skin_inverse_bind_matrices() {
    let identity = glam::Mat4::IDENTITY.to_cols_array();
    let json = r#"{
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 64, "uri": "data.bin" }],
        "bufferViews": [{ "buffer": 0, "byteOffset": 0, "byteLength": 64 }],
        "accessors": [{ "bufferView": 0, "componentType": 5126, "type": "MAT4", "count": 1 }],
        "nodes": [{ "name": "joint" }],
        "skins": [{ "inverseBindMatrices": 0, "skeleton": 0, "joints": [0] }]
    }"#;

    let doc = load_doc(json, &f32_bytes(&identity)).unwrap();

    let skin = &doc.skins[0];
    assert_eq!(skin.inverse_bind_matrices, Some(vec![glam::Mat4::IDENTITY]));
    assert!(std::ptr::eq(skin.skeleton(&doc).unwrap(), &doc.nodes[0]));
    assert_eq!(skin.joints(&doc).len(), 1);
}

#[test]
fn builds_mesh_primitive_end_to_end() {
    let positions: Vec<f32> = vec![
        0.0, 0.0, 0.0, //
        1.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, //
    ];
    let mut bin = f32_bytes(&positions);
    bin.extend_from_slice(&u16_bytes(&[0, 1, 2]));

    let json = r#"{
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 42, "uri": "data.bin" }],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": 36, "target": 34962 },
            { "buffer": 0, "byteOffset": 36, "byteLength": 6, "target": 34963 }
        ],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "type": "VEC3", "count": 3 },
            { "bufferView": 1, "componentType": 5123, "type": "SCALAR", "count": 3 }
        ],
        "materials": [{ "name": "steel" }],
        "nodes": [{ "name": "geometry", "mesh": 0 }],
        "meshes": [{
            "name": "triangle",
            "primitives": [{
                "attributes": { "POSITION": 0 },
                "indices": 1,
                "material": 0
            }]
        }]
    }"#;

    let doc = load_doc(json, &bin).unwrap();

    let primitive = &doc.meshes[0].primitives[0];
    assert_eq!(primitive.indices, Some(vec![0, 1, 2]));
    assert_eq!(primitive.vertex_count(), 3);
    assert_eq!(primitive.material(&doc).unwrap().name, "steel");

    let position = VertexAttribute::new(Semantic::Position, None);
    match primitive.attribute(&position) {
        Some(AttributeValues::Positions(positions)) => {
            assert_eq!(positions[1], glam::vec3(1.0, 0.0, 0.0));
        }
        other => panic!("unexpected POSITION values: {other:?}"),
    }

    assert_eq!(primitive.summary(&doc), "3 of (POSITION) as steel");

    let node = &doc.nodes[0];
    assert!(std::ptr::eq(node.mesh(&doc).unwrap(), &doc.meshes[0]));
}

#[test]
fn builds_animation_channels() {
    let mut bin = f32_bytes(&[0.0, 1.0]); // timestamps
    bin.extend_from_slice(&f32_bytes(&[0.0; 6])); // two VEC3 outputs

    let json = r#"{
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 32, "uri": "data.bin" }],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": 8 },
            { "buffer": 0, "byteOffset": 8, "byteLength": 24 }
        ],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "type": "SCALAR", "count": 2 },
            { "bufferView": 1, "componentType": 5126, "type": "VEC3", "count": 2 }
        ],
        "nodes": [{ "name": "animated" }],
        "animations": [{
            "name": "slide",
            "samplers": [{ "input": 0, "output": 1 }],
            "channels": [{ "sampler": 0, "target": { "node": 0, "path": "translation" } }]
        }]
    }"#;

    let doc = load_doc(json, &bin).unwrap();

    let animation = &doc.animations[0];
    let channel = &animation.channels[0];
    assert_eq!(channel.target.path, TargetPath::Translation);
    assert!(std::ptr::eq(
        channel.target.node(&doc).unwrap(),
        &doc.nodes[0]
    ));

    let sampler = channel.sampler(animation);
    assert_eq!(sampler.interpolation, Interpolation::Linear);
    assert_eq!(sampler.keyframes(), 2);
    assert_eq!(sampler.input, vec![0.0, 1.0]);
}

#[test]
fn rejects_unknown_interpolation() {
    let mut bin = f32_bytes(&[0.0]);
    bin.extend_from_slice(&f32_bytes(&[0.0, 0.0, 0.0]));

    let json = r#"{
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 16, "uri": "data.bin" }],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": 4 },
            { "buffer": 0, "byteOffset": 4, "byteLength": 12 }
        ],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "type": "SCALAR", "count": 1 },
            { "bufferView": 1, "componentType": 5126, "type": "VEC3", "count": 1 }
        ],
        "animations": [{
            "samplers": [{ "input": 0, "output": 1, "interpolation": "SMOOTHSTEP" }],
            "channels": []
        }]
    }"#;

    let err = load_doc(json, &bin).unwrap_err();

    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}

#[test]
fn material_defaults_apply() {
    let json = r#"{
        "asset": { "version": "2.0" },
        "materials": [{ "name": "plain" }]
    }"#;

    let doc = load_doc(json, &[]).unwrap();

    let material = &doc.materials[0];
    assert_eq!(
        material.pbr_metallic_roughness.base_color_factor,
        glam::Vec4::ONE
    );
    assert_eq!(material.alpha_mode, gltf_runtime::AlphaMode::Opaque);
    assert_eq!(material.alpha_cutoff, 0.5);
    assert!(!material.double_sided);
}

#[test]
fn resolves_material_texture_references() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("checker.png"), [0u8; 4]).unwrap();
    let json = r#"{
        "asset": { "version": "2.0" },
        "images": [{ "uri": "checker.png" }],
        "textures": [{ "name": "checker", "source": 0 }],
        "materials": [{
            "name": "bumpy",
            "pbrMetallicRoughness": { "baseColorTexture": { "index": 0 } },
            "normalTexture": { "index": 0, "scale": 2.0 },
            "occlusionTexture": { "index": 0, "strength": 0.5, "texCoord": 1 }
        }]
    }"#;
    fs::write(dir.path().join("scene.gltf"), json).unwrap();

    let doc = gltf_runtime::load(dir.path(), "scene.gltf").unwrap();

    let material = &doc.materials[0];
    let normal = material.normal_texture.unwrap();
    assert_eq!(normal.scale, 2.0);
    assert!(std::ptr::eq(
        normal.texture.texture(&doc),
        &doc.textures[0]
    ));

    let occlusion = material.occlusion_texture.unwrap();
    assert_eq!(occlusion.strength, 0.5);
    assert_eq!(occlusion.texture.tex_coord, 1);

    let base = material.pbr_metallic_roughness.base_color_texture.unwrap();
    assert_eq!(base.texture(&doc).name.as_deref(), Some("checker"));
}

#[test]
fn skin_joint_out_of_range_is_rejected() {
    let json = r#"{
        "asset": { "version": "2.0" },
        "nodes": [{ "name": "only" }],
        "skins": [{ "joints": [0, 7] }]
    }"#;

    let err = load_doc(json, &[]).unwrap_err();

    assert!(matches!(
        err,
        Error::DanglingReference { target: "nodes", index: 7, .. }
    ));
}
