//! The region selection shared by the selector control, the filter and the CLI.

use crate::error::SalesDataError;
use sales_utils::text::capitalize;
use std::fmt;
use std::str::FromStr;

/// One option of the region selector.
///
/// `All` is the sentinel that disables filtering and is the initial selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    North,
    East,
    South,
    West,
    #[default]
    All,
}

impl Region {
    /// Selector options in display order.
    pub const OPTIONS: [Region; 5] = [
        Region::North,
        Region::East,
        Region::South,
        Region::West,
        Region::All,
    ];

    /// The value stored in the CSV `region` column (and emitted by the control).
    pub fn value(self) -> &'static str {
        match self {
            Region::North => "north",
            Region::East => "east",
            Region::South => "south",
            Region::West => "west",
            Region::All => "all",
        }
    }

    /// Human-readable label, e.g. "North".
    pub fn label(self) -> String {
        capitalize(self.value())
    }

    pub fn is_all(self) -> bool {
        self == Region::All
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for Region {
    type Err = SalesDataError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Region::OPTIONS
            .into_iter()
            .find(|region| region.value() == wanted)
            .ok_or_else(|| SalesDataError::UnknownRegion(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection_is_all() {
        assert_eq!(Region::default(), Region::All);
        assert!(Region::default().is_all());
    }

    #[test]
    fn options_are_in_control_order() {
        let values: Vec<&str> = Region::OPTIONS.iter().map(|r| r.value()).collect();
        assert_eq!(values, vec!["north", "east", "south", "west", "all"]);
    }

    #[test]
    fn labels_are_capitalized() {
        let labels: Vec<String> = Region::OPTIONS.iter().map(|r| r.label()).collect();
        assert_eq!(labels, vec!["North", "East", "South", "West", "All"]);
    }

    #[test]
    fn parses_values_case_insensitively() {
        assert_eq!("north".parse::<Region>().unwrap(), Region::North);
        assert_eq!(" West ".parse::<Region>().unwrap(), Region::West);
        assert_eq!("ALL".parse::<Region>().unwrap(), Region::All);
    }

    #[test]
    fn rejects_unknown_region() {
        let err = "central".parse::<Region>().unwrap_err();
        assert!(
            matches!(err, SalesDataError::UnknownRegion(ref v) if v == "central"),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn display_matches_value() {
        assert_eq!(Region::South.to_string(), "south");
    }
}
