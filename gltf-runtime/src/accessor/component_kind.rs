/// Numeric storage type of a single component, as coded in accessor JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    F32,
}

impl ComponentKind {
    pub const EXPECTED: &'static str = "one of [5120, 5121, 5122, 5123, 5124, 5125, 5126]";

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            5120 => Some(ComponentKind::I8),
            5121 => Some(ComponentKind::U8),
            5122 => Some(ComponentKind::I16),
            5123 => Some(ComponentKind::U16),
            5124 => Some(ComponentKind::I32),
            5125 => Some(ComponentKind::U32),
            5126 => Some(ComponentKind::F32),
            _ => None,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            ComponentKind::I8 => 5120,
            ComponentKind::U8 => 5121,
            ComponentKind::I16 => 5122,
            ComponentKind::U16 => 5123,
            ComponentKind::I32 => 5124,
            ComponentKind::U32 => 5125,
            ComponentKind::F32 => 5126,
        }
    }

    /// Width in bytes of one component of this kind.
    pub fn byte_width(self) -> usize {
        match self {
            ComponentKind::I8 | ComponentKind::U8 => 1,
            ComponentKind::I16 | ComponentKind::U16 => 2,
            ComponentKind::I32 | ComponentKind::U32 | ComponentKind::F32 => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::I8 => "BYTE",
            ComponentKind::U8 => "UNSIGNED_BYTE",
            ComponentKind::I16 => "SHORT",
            ComponentKind::U16 => "UNSIGNED_SHORT",
            ComponentKind::I32 => "INT",
            ComponentKind::U32 => "UNSIGNED_INT",
            ComponentKind::F32 => "FLOAT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ComponentKind;

    #[test]
    fn codes_round_trip() {
        for code in [5120, 5121, 5122, 5123, 5124, 5125, 5126] {
            assert_eq!(ComponentKind::from_code(code).unwrap().code(), code);
        }
        assert!(ComponentKind::from_code(5127).is_none());
        assert!(ComponentKind::from_code(0).is_none());
    }

    #[test]
    fn byte_widths() {
        assert_eq!(ComponentKind::U8.byte_width(), 1);
        assert_eq!(ComponentKind::I16.byte_width(), 2);
        assert_eq!(ComponentKind::U16.byte_width(), 2);
        assert_eq!(ComponentKind::F32.byte_width(), 4);
    }
}
