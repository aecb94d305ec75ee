use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub name: Option<String>,
    pub channels: Vec<Channel>,
    pub samplers: Vec<AnimationSampler>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSampler {
    /// Accessor index for keyframe timestamps (scalar floats).
    pub input: usize,

    /// Accessor index for keyframe values.
    pub output: usize,

    /// Interpolation algorithm name, LINEAR when absent.
    pub interpolation: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    /// Index into this animation's own `samplers` array.
    pub sampler: usize,

    pub target: ChannelTarget,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelTarget {
    pub node: Option<usize>,

    /// Animated property: "translation", "rotation", "scale" or "weights".
    pub path: String,
}
