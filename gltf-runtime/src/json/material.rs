use serde::Deserialize;

fn default_base_color_factor() -> [f32; 4] {
    [1.0, 1.0, 1.0, 1.0]
}

fn default_metallic_factor() -> f32 {
    1.0
}

fn default_roughness_factor() -> f32 {
    1.0
}

fn default_emissive_factor() -> [f32; 3] {
    [0.0, 0.0, 0.0]
}

fn default_alpha_cutoff() -> f32 {
    0.5
}

fn default_normal_scale() -> f32 {
    1.0
}

fn default_occlusion_strength() -> f32 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub name: String,

    pub pbr_metallic_roughness: Option<PbrMetallicRoughness>,

    pub normal_texture: Option<NormalTextureInfo>,
    pub occlusion_texture: Option<OcclusionTextureInfo>,
    pub emissive_texture: Option<TextureInfo>,

    #[serde(default = "default_emissive_factor")]
    pub emissive_factor: [f32; 3],

    /// Alpha mode string, "OPAQUE" when absent.
    pub alpha_mode: Option<String>,

    #[serde(default = "default_alpha_cutoff")]
    pub alpha_cutoff: f32,

    #[serde(default)]
    pub double_sided: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PbrMetallicRoughness {
    #[serde(default = "default_base_color_factor")]
    pub base_color_factor: [f32; 4],

    pub base_color_texture: Option<TextureInfo>,

    #[serde(default = "default_metallic_factor")]
    pub metallic_factor: f32,

    #[serde(default = "default_roughness_factor")]
    pub roughness_factor: f32,

    pub metallic_roughness_texture: Option<TextureInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextureInfo {
    pub index: usize,

    #[serde(default)]
    pub tex_coord: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalTextureInfo {
    pub index: usize,

    #[serde(default)]
    pub tex_coord: u32,

    #[serde(default = "default_normal_scale")]
    pub scale: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcclusionTextureInfo {
    pub index: usize,

    #[serde(default)]
    pub tex_coord: u32,

    #[serde(default = "default_occlusion_strength")]
    pub strength: f32,
}
