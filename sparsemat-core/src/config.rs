//! Engine configuration

/// What the parser does when a coordinate appears twice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DuplicatePolicy {
    /// The later line overwrites the earlier one
    #[default]
    LastWins,
    /// A repeated coordinate is a format error
    Reject,
}

/// Algorithm used for matrix multiplication
///
/// Both strategies produce identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MultiplyStrategy {
    /// Walk only non-zero entries, joining on a row index of the right operand.
    /// Cost grows with `nnz(lhs) * avg_row_nnz(rhs)`.
    #[default]
    Indexed,
    /// Triple loop over every output cell and the full inner dimension.
    /// Cost grows with `rows * cols * inner`.
    Dense,
}

impl MultiplyStrategy {
    /// Parse a strategy name (`indexed` or `dense`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim() {
            s if s.eq_ignore_ascii_case("indexed") => Some(MultiplyStrategy::Indexed),
            s if s.eq_ignore_ascii_case("dense") => Some(MultiplyStrategy::Dense),
            _ => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MultiplyStrategy::Indexed => "indexed",
            MultiplyStrategy::Dense => "dense",
        }
    }
}

impl core::fmt::Display for MultiplyStrategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for parsing matrix text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseConfig {
    /// Handling of repeated coordinates
    pub duplicates: DuplicatePolicy,
}

impl ParseConfig {
    /// Set the duplicate coordinate policy
    pub fn with_duplicate_policy(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Reject repeated coordinates instead of overwriting
    pub fn strict() -> Self {
        Self::default().with_duplicate_policy(DuplicatePolicy::Reject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ParseConfig::default().duplicates, DuplicatePolicy::LastWins);
        assert_eq!(ParseConfig::strict().duplicates, DuplicatePolicy::Reject);
        assert_eq!(MultiplyStrategy::default(), MultiplyStrategy::Indexed);
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(
            MultiplyStrategy::from_name("Dense"),
            Some(MultiplyStrategy::Dense)
        );
        assert_eq!(
            MultiplyStrategy::from_name(" indexed "),
            Some(MultiplyStrategy::Indexed)
        );
        assert_eq!(MultiplyStrategy::from_name("csr"), None);
        assert_eq!(
            MultiplyStrategy::from_name(MultiplyStrategy::Dense.name()),
            Some(MultiplyStrategy::Dense)
        );
    }
}
