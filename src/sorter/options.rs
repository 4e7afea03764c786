//! Configuration directives for [`VersionSorter`].

use super::VersionSorter;
use crate::error::{Result, VsortError};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Ascending: smaller versions first.
    #[default]
    Asc,
    /// Descending: larger versions first.
    Desc,
}

impl FromStr for Order {
    type Err = VsortError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(Order::Asc),
            "desc" => Ok(Order::Desc),
            other => Err(VsortError::InvalidOrder(other.to_string())),
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Asc => write!(f, "asc"),
            Order::Desc => write!(f, "desc"),
        }
    }
}

/// A single configuration directive for [`VersionSorter::new`].
///
/// Directives are applied in order over the defaults; each one may fail,
/// and the first failure aborts construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOption {
    /// Sort direction.
    Order(Order),
    /// Pattern expected at the start of every version string, stripped
    /// before numeric comparison. Compiled anchored to the start.
    Prefix(String),
    /// Pattern expected at the end of every version string, stripped
    /// before numeric comparison. Compiled anchored to the end.
    Suffix(String),
    /// Expected number of dot-separated components. Zero is rejected;
    /// negative means unconstrained.
    Level(i32),
}

impl SortOption {
    pub(super) fn apply(&self, sorter: &mut VersionSorter) -> Result<()> {
        match self {
            SortOption::Order(order) => {
                sorter.order = *order;
                Ok(())
            }
            SortOption::Prefix(pattern) => {
                sorter.prefix = Some(compile_anchored(pattern, Anchor::Start)?);
                Ok(())
            }
            SortOption::Suffix(pattern) => {
                sorter.suffix = Some(compile_anchored(pattern, Anchor::End)?);
                Ok(())
            }
            SortOption::Level(level) => {
                if *level == 0 {
                    return Err(VsortError::InvalidLevel);
                }
                sorter.level = *level;
                Ok(())
            }
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOption::Order(order) => write!(f, "order={}", order),
            SortOption::Prefix(pattern) => write!(f, "prefix={}", pattern),
            SortOption::Suffix(pattern) => write!(f, "suffix={}", pattern),
            SortOption::Level(level) => write!(f, "level={}", level),
        }
    }
}

enum Anchor {
    Start,
    End,
}

fn compile_anchored(pattern: &str, anchor: Anchor) -> Result<Regex> {
    let anchored = match anchor {
        Anchor::Start => format!("^{}", pattern),
        Anchor::End => format!("{}$", pattern),
    };
    Regex::new(&anchored).map_err(|e| VsortError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}
