//! Version comparison and sorting.
//!
//! This module is the core of vsort: a comparator over version-like strings
//! (dot-separated numeric components, optionally wrapped in a prefix and
//! suffix pattern), an in-place sort driver built on it, and a validity
//! predicate used to gate entries before sorting.
//!
//! A [`VersionSorter`] is configured once from a list of [`SortOption`]
//! directives and is immutable afterwards. `compare` and `is_valid` are pure
//! functions of the configuration and their inputs, so a sorter can be
//! shared freely across threads.

use crate::error::{Result, VsortError};
use regex::Regex;
use std::cmp::Ordering;

mod options;

pub use options::{Order, SortOption};

/// Component count sentinel meaning "any number of components".
const UNCONSTRAINED_LEVEL: i32 = -1;

/// A configured version comparator and sorter.
///
/// Built via [`VersionSorter::new`]; all fields are fixed for the lifetime
/// of the instance.
#[derive(Debug)]
pub struct VersionSorter {
    order: Order,
    prefix: Option<Regex>,
    suffix: Option<Regex>,
    level: i32,
}

impl VersionSorter {
    /// Build a sorter by applying option directives over the defaults.
    ///
    /// Defaults are ascending order, no prefix, no suffix, and an
    /// unconstrained component count. Directives apply in the order given;
    /// the first failing directive aborts construction.
    pub fn new(options: &[SortOption]) -> Result<Self> {
        let mut sorter = VersionSorter {
            order: Order::Asc,
            prefix: None,
            suffix: None,
            level: UNCONSTRAINED_LEVEL,
        };
        for option in options {
            option.apply(&mut sorter)?;
        }
        Ok(sorter)
    }

    /// Compare two version strings under this configuration.
    ///
    /// Configured prefix/suffix patterns are matched and stripped from both
    /// inputs first; a side that fails to match fails the comparison. The
    /// remainders are split on `.` (bounded to `level` fields when a level
    /// is configured) and compared pairwise as base-10 integers.
    ///
    /// Comparison walks only the component pairs present in both splits:
    /// extra trailing components on the longer side are never examined, so
    /// `compare("1.2", "1.2.3")` is `Equal`. Callers that need exact shape
    /// agreement should gate inputs with [`is_valid`](Self::is_valid),
    /// which does enforce the configured level.
    pub fn compare(&self, v1: &str, v2: &str) -> Result<Ordering> {
        let mut a = v1;
        let mut b = v2;

        if let Some(prefix) = &self.prefix {
            match (prefix.find(a), prefix.find(b)) {
                (Some(m1), Some(m2)) => {
                    a = &a[m1.end()..];
                    b = &b[m2.end()..];
                }
                _ => {
                    return Err(VsortError::PrefixMismatch {
                        v1: v1.to_string(),
                        v2: v2.to_string(),
                        pattern: prefix.to_string(),
                    });
                }
            }
        }

        if let Some(suffix) = &self.suffix {
            match (suffix.find(a), suffix.find(b)) {
                (Some(m1), Some(m2)) => {
                    a = &a[..m1.start()];
                    b = &b[..m2.start()];
                }
                _ => {
                    return Err(VsortError::SuffixMismatch {
                        v1: v1.to_string(),
                        v2: v2.to_string(),
                        pattern: suffix.to_string(),
                    });
                }
            }
        }

        let nums1 = split_components(a, self.level);
        let nums2 = split_components(b, self.level);

        for (c1, c2) in nums1.iter().copied().zip(nums2.iter().copied()) {
            let n1 = parse_component(c1, v1, v2)?;
            let n2 = parse_component(c2, v1, v2)?;
            match n1.cmp(&n2) {
                Ordering::Equal => {}
                other => return Ok(other),
            }
        }

        Ok(Ordering::Equal)
    }

    /// Sort versions in place, honoring the configured order.
    ///
    /// Uses an unstable comparison sort; entries that compare equal may be
    /// reordered relative to each other. Comparator errors degrade to
    /// `Equal` so one malformed entry cannot abort a batch sort; callers
    /// are expected to have filtered entries with
    /// [`is_valid`](Self::is_valid) beforehand.
    pub fn sort(&self, versions: &mut [String]) {
        versions.sort_unstable_by(|a, b| {
            let ordering = self.compare(a, b).unwrap_or(Ordering::Equal);
            match self.order {
                Order::Asc => ordering,
                Order::Desc => ordering.reverse(),
            }
        });
    }

    /// Report whether `v` parses end-to-end under this configuration.
    ///
    /// Stricter than [`compare`](Self::compare) in two ways: the configured
    /// level must match the full component count exactly, and components
    /// with a leading `+` or `-` sign are rejected.
    pub fn is_valid(&self, v: &str) -> bool {
        let mut rest = v;

        if let Some(prefix) = &self.prefix {
            match prefix.find(rest) {
                Some(m) => rest = &rest[m.end()..],
                None => return false,
            }
        }

        if let Some(suffix) = &self.suffix {
            match suffix.find(rest) {
                Some(m) => rest = &rest[..m.start()],
                None => return false,
            }
        }

        let components: Vec<&str> = rest.split('.').collect();
        if self.level > 0 && components.len() != self.level as usize {
            return false;
        }

        components
            .iter()
            .all(|c| !c.starts_with(['+', '-']) && c.parse::<i64>().is_ok())
    }
}

/// Split a stripped version string into components.
///
/// When a positive level is configured the split is bounded to that many
/// fields, so the last field may itself still contain dots.
fn split_components(v: &str, level: i32) -> Vec<&str> {
    if level > 0 {
        v.splitn(level as usize, '.').collect()
    } else {
        v.split('.').collect()
    }
}

/// Parse one component as a base-10 integer.
///
/// Plain integer parsing: leading `+`/`-` signs are accepted here, unlike
/// in `is_valid`.
fn parse_component(component: &str, v1: &str, v2: &str) -> Result<i64> {
    component
        .parse::<i64>()
        .map_err(|_| VsortError::NotNumeric {
            component: component.to_string(),
            v1: v1.to_string(),
            v2: v2.to_string(),
        })
}
