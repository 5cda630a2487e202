//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (1 to 8).
    Spaces(u8),
    /// Tab character.
    Tab,
}

const SPACES: &str = "        ";

impl Indent {
    /// 4-space indentation used for generated C++.
    pub const CPP: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(width @ 1..=8) => &SPACES[..usize::from(*width)],
            // Fallback to 4 whitespaces
            Self::Spaces(_) => &SPACES[..4],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::CPP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(8).as_str(), "        ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_out_of_range_width_falls_back() {
        assert_eq!(Indent::Spaces(0).as_str(), "    ");
        assert_eq!(Indent::Spaces(12).as_str(), "    ");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::CPP);
        assert_eq!(Indent::CPP, Indent::Spaces(4));
    }
}
