use crate::shared::error::TodeError;
use crate::shared::Result;
use std::fmt;

/// How many levels of transitive dependencies the API expands
///
/// The cap keeps the rendered tree small enough for the quadratic overlap
/// check to stay cheap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SearchDepth(u8);

impl SearchDepth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const DEFAULT: u8 = 3;

    pub fn new(depth: u8) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&depth) {
            return Err(TodeError::InvalidSearchDepth {
                depth,
                min: Self::MIN,
                max: Self::MAX,
            }
            .into());
        }
        Ok(Self(depth))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for SearchDepth {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_depth_is_three() {
        assert_eq!(SearchDepth::default().value(), 3);
    }

    #[test]
    fn test_accepts_bounds() {
        assert_eq!(SearchDepth::new(1).unwrap().value(), 1);
        assert_eq!(SearchDepth::new(5).unwrap().value(), 5);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(SearchDepth::new(0).is_err());
        let err = SearchDepth::new(6).unwrap_err();
        assert!(err.to_string().contains("Invalid search depth: 6"));
    }

    #[test]
    fn test_display() {
        assert_eq!(SearchDepth::new(4).unwrap().to_string(), "4");
    }
}
