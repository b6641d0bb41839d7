use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// Display label for the filter tabs
    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Pending => "Pending",
        }
    }

    /// Whether a task with the given completion flag passes this filter
    pub fn matches(&self, completed: bool) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => completed,
            Filter::Pending => !completed,
        }
    }

    /// Next filter in tab order (wraps around)
    pub fn next(&self) -> Self {
        match self {
            Filter::All => Filter::Completed,
            Filter::Completed => Filter::Pending,
            Filter::Pending => Filter::All,
        }
    }

    /// Position in the tab bar
    pub fn index(&self) -> usize {
        match self {
            Filter::All => 0,
            Filter::Completed => 1,
            Filter::Pending => 2,
        }
    }

    pub fn all() -> &'static [Filter] {
        &[Filter::All, Filter::Completed, Filter::Pending]
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Pending => "pending",
        })
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "completed" | "done" => Ok(Filter::Completed),
            "pending" | "open" => Ok(Filter::Pending),
            other => Err(format!(
                "unknown filter '{}' (expected all, completed or pending)",
                other
            )),
        }
    }
}

/// Which input currently has focus in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    Drafting, // Typing into the new-task input
    Editing,  // Typing into an inline edit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matches() {
        assert!(Filter::All.matches(true));
        assert!(Filter::All.matches(false));
        assert!(Filter::Completed.matches(true));
        assert!(!Filter::Completed.matches(false));
        assert!(Filter::Pending.matches(false));
        assert!(!Filter::Pending.matches(true));
    }

    #[test]
    fn test_filter_cycle() {
        assert_eq!(Filter::All.next(), Filter::Completed);
        assert_eq!(Filter::Completed.next(), Filter::Pending);
        assert_eq!(Filter::Pending.next(), Filter::All);
    }

    #[test]
    fn test_filter_from_str() {
        assert_eq!("all".parse::<Filter>(), Ok(Filter::All));
        assert_eq!("Completed".parse::<Filter>(), Ok(Filter::Completed));
        assert_eq!("pending".parse::<Filter>(), Ok(Filter::Pending));
        assert!("bogus".parse::<Filter>().is_err());
    }

    #[test]
    fn test_filter_index_matches_order() {
        for (i, filter) in Filter::all().iter().enumerate() {
            assert_eq!(filter.index(), i);
        }
    }
}
