use super::{Document, Node};
use crate::accessor::{Accessor, AccessorValues, ElementShape};
use crate::error::{check_index, Error, Result};
use crate::json;

/// Keyframe interpolation algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interpolation {
    Linear,
    Step,
    CubicSpline,
}

impl Interpolation {
    pub const EXPECTED: &'static str = r#"one of ["LINEAR", "STEP", "CUBICSPLINE"]"#;

    fn parse(value: Option<&str>, entity: &str) -> Result<Self> {
        match value {
            None | Some("LINEAR") => Ok(Interpolation::Linear),
            Some("STEP") => Ok(Interpolation::Step),
            Some("CUBICSPLINE") => Ok(Interpolation::CubicSpline),
            Some(other) => Err(Error::unsupported(
                format!("{entity} interpolation"),
                other,
                Self::EXPECTED,
            )),
        }
    }
}

/// The node property an animation channel drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetPath {
    Translation,
    Rotation,
    Scale,
    Weights,
}

impl TargetPath {
    pub const EXPECTED: &'static str =
        r#"one of ["translation", "rotation", "scale", "weights"]"#;

    fn parse(value: &str, entity: &str) -> Result<Self> {
        match value {
            "translation" => Ok(TargetPath::Translation),
            "rotation" => Ok(TargetPath::Rotation),
            "scale" => Ok(TargetPath::Scale),
            "weights" => Ok(TargetPath::Weights),
            other => Err(Error::unsupported(
                format!("{entity} path"),
                other,
                Self::EXPECTED,
            )),
        }
    }
}

/// Decoded keyframes: timestamps plus output values whose shape depends on
/// the animated property and interpolation mode.
#[derive(Debug)]
pub struct AnimationSampler {
    /// Keyframe timestamps, seconds, flattened scalars.
    pub input: Vec<f32>,

    pub interpolation: Interpolation,

    pub output: AccessorValues,
    pub output_shape: ElementShape,
}

impl AnimationSampler {
    fn new(
        animation: usize,
        index: usize,
        raw: &json::AnimationSampler,
        accessors: &[Accessor],
    ) -> Result<Self> {
        let entity = format!("animation {animation} sampler {index}");

        let input = &accessors[check_index(&entity, "accessors", raw.input, accessors.len())?];
        let input = input
            .scalars_f32()
            .ok_or_else(|| {
                Error::unsupported(
                    format!("{entity} input (accessor {})", input.index),
                    input.type_name(),
                    "SCALAR FLOAT",
                )
            })?
            .to_vec();

        let output = &accessors[check_index(&entity, "accessors", raw.output, accessors.len())?];

        Ok(AnimationSampler {
            input,
            interpolation: Interpolation::parse(raw.interpolation.as_deref(), &entity)?,
            output: output.data.clone(),
            output_shape: output.shape,
        })
    }

    /// Keyframe count. With cubic spline interpolation the output holds
    /// three elements per keyframe, otherwise one.
    pub fn keyframes(&self) -> usize {
        self.input.len()
    }
}

/// Pairs a sampler with the property it animates.
#[derive(Debug)]
pub struct Channel {
    /// Index into the owning animation's `samplers`.
    pub sampler: usize,

    pub target: ChannelTarget,
}

impl Channel {
    pub fn sampler<'a>(&self, animation: &'a Animation) -> &'a AnimationSampler {
        &animation.samplers[self.sampler]
    }
}

#[derive(Debug)]
pub struct ChannelTarget {
    pub node: Option<usize>,
    pub path: TargetPath,
}

impl ChannelTarget {
    pub fn node<'a>(&self, doc: &'a Document) -> Option<&'a Node> {
        self.node.map(|index| &doc.nodes[index])
    }
}

#[derive(Debug)]
pub struct Animation {
    pub index: usize,
    pub name: Option<String>,

    pub samplers: Vec<AnimationSampler>,
    pub channels: Vec<Channel>,
}

impl Animation {
    pub(crate) fn new(
        index: usize,
        raw: &json::Animation,
        nodes_len: usize,
        accessors: &[Accessor],
    ) -> Result<Self> {
        let samplers = raw
            .samplers
            .iter()
            .enumerate()
            .map(|(i, sampler)| AnimationSampler::new(index, i, sampler, accessors))
            .collect::<Result<Vec<_>>>()?;

        let channels = raw
            .channels
            .iter()
            .enumerate()
            .map(|(i, channel)| {
                let entity = format!("animation {index} channel {i}");
                let sampler =
                    check_index(&entity, "samplers", channel.sampler, samplers.len())?;
                let node = channel
                    .target
                    .node
                    .map(|node| check_index(&format!("{entity} target"), "nodes", node, nodes_len))
                    .transpose()?;

                Ok(Channel {
                    sampler,
                    target: ChannelTarget {
                        node,
                        path: TargetPath::parse(&channel.target.path, &entity)?,
                    },
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Animation {
            index,
            name: raw.name.clone(),
            samplers,
            channels,
        })
    }
}
