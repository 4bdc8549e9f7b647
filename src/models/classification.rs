//! Classification outcome.

use serde::Serialize;
use std::fmt;

/// Returned when a point lies outside every known boundary
pub const DEFAULT_SENTINEL: &str = "Point outside Los Angeles County";

/// Outcome of classifying one point. `Outside` is a normal result, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationResult {
    Boundary(String),
    Outside,
}

impl ClassificationResult {
    pub fn boundary_name(&self) -> Option<&str> {
        match self {
            ClassificationResult::Boundary(name) => Some(name),
            ClassificationResult::Outside => None,
        }
    }

    pub fn is_outside(&self) -> bool {
        matches!(self, ClassificationResult::Outside)
    }

    /// Boundary name, or `sentinel` when outside
    pub fn label<'a>(&'a self, sentinel: &'a str) -> &'a str {
        self.boundary_name().unwrap_or(sentinel)
    }
}

impl fmt::Display for ClassificationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(DEFAULT_SENTINEL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_outside_is_sentinel() {
        assert_eq!(
            ClassificationResult::Outside.to_string(),
            "Point outside Los Angeles County"
        );
    }

    #[test]
    fn test_label_with_custom_sentinel() {
        let outside = ClassificationResult::Outside;
        assert_eq!(outside.label("none"), "none");

        let inside = ClassificationResult::Boundary("Central".to_string());
        assert_eq!(inside.label("none"), "Central");
        assert_eq!(inside.to_string(), "Central");
    }
}
