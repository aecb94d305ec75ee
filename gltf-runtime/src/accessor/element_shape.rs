/// Logical grouping of components forming one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementShape {
    Scalar,
    Vec2,
    Vec3,
    Vec4,
    Mat2,
    Mat3,
    Mat4,
}

impl ElementShape {
    pub const EXPECTED: &'static str =
        r#"one of ["SCALAR", "VEC2", "VEC3", "VEC4", "MAT2", "MAT3", "MAT4"]"#;

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SCALAR" => Some(ElementShape::Scalar),
            "VEC2" => Some(ElementShape::Vec2),
            "VEC3" => Some(ElementShape::Vec3),
            "VEC4" => Some(ElementShape::Vec4),
            "MAT2" => Some(ElementShape::Mat2),
            "MAT3" => Some(ElementShape::Mat3),
            "MAT4" => Some(ElementShape::Mat4),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ElementShape::Scalar => "SCALAR",
            ElementShape::Vec2 => "VEC2",
            ElementShape::Vec3 => "VEC3",
            ElementShape::Vec4 => "VEC4",
            ElementShape::Mat2 => "MAT2",
            ElementShape::Mat3 => "MAT3",
            ElementShape::Mat4 => "MAT4",
        }
    }

    /// Components per element of this shape.
    pub fn component_count(self) -> usize {
        match self {
            ElementShape::Scalar => 1,
            ElementShape::Vec2 => 2,
            ElementShape::Vec3 => 3,
            ElementShape::Vec4 | ElementShape::Mat2 => 4,
            ElementShape::Mat3 => 9,
            ElementShape::Mat4 => 16,
        }
    }
}
