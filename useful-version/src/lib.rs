//! Numeric comparison of dotted version strings such as `"11.2"` or `"2.10.3"`.
//!
//! Components are compared as integers, never as text, so `"2.10"` ranks above
//! `"2.9"`. Missing components count as `0`, which makes `"1.2"` and `"1.2.0"`
//! the same version.

use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

pub const SEPARATOR: char = '.';

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("version string is empty")]
    Empty,
    #[error("invalid version segment '{segment}' at position {position}")]
    InvalidSegment { segment: String, position: usize },
}

/// A parsed dotted-numeric version.
///
/// Equality, ordering and hashing all treat absent trailing components as zero.
#[derive(Debug, Clone, Default)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    pub fn new(components: Vec<u64>) -> Self {
        Self { components }
    }

    /// Parses without ever failing: a segment that is not an integer becomes `0`.
    ///
    /// # Examples
    /// ```
    /// use useful_version::Version;
    /// assert_eq!(Version::parse_lenient("1.a").components(), &[1, 0]);
    /// assert_eq!(Version::parse_lenient("2.10"), Version::from([2, 10]));
    /// ```
    pub fn parse_lenient(text: &str) -> Self {
        let components = text
            .split(SEPARATOR)
            .enumerate()
            .map(|(position, segment)| {
                parse_segment(segment).unwrap_or_else(|| {
                    debug!(
                        "version '{text}': segment '{segment}' at position {position} is not numeric, using 0"
                    );
                    0
                })
            })
            .collect();
        Self { components }
    }

    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Components with trailing zeros removed.
    fn significant(&self) -> &[u64] {
        let end = self
            .components
            .iter()
            .rposition(|&component| component != 0)
            .map_or(0, |index| index + 1);
        &self.components[..end]
    }
}

/// A segment is a non-empty run of ASCII digits that fits in `u64`.
fn parse_segment(segment: &str) -> Option<u64> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

impl<const N: usize> From<[u64; N]> for Version {
    fn from(components: [u64; N]) -> Self {
        Self::new(components.to_vec())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Strict parse: every segment must be a non-empty run of ASCII digits.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Err(VersionError::Empty);
        }
        let components = text
            .split(SEPARATOR)
            .enumerate()
            .map(|(position, segment)| {
                parse_segment(segment).ok_or_else(|| VersionError::InvalidSegment {
                    segment: segment.to_string(),
                    position,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { components })
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        (0..len)
            .map(|index| {
                let left = self.components.get(index).copied().unwrap_or(0);
                let right = other.components.get(index).copied().unwrap_or(0);
                left.cmp(&right)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant().hash(state);
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.components.is_empty() {
            return write!(f, "0");
        }
        for (index, component) in self.components.iter().enumerate() {
            if index > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// Three-way numeric comparison of two version strings. Malformed segments count as `0`.
pub fn compare(a: &str, b: &str) -> Ordering {
    Version::parse_lenient(a).cmp(&Version::parse_lenient(b))
}

pub fn equal(current: &str, target: &str) -> bool {
    compare(current, target) == Ordering::Equal
}

pub fn greater(current: &str, target: &str) -> bool {
    compare(current, target) == Ordering::Greater
}

pub fn greater_or_equal(current: &str, target: &str) -> bool {
    compare(current, target) != Ordering::Less
}

pub fn less(current: &str, target: &str) -> bool {
    compare(current, target) == Ordering::Less
}

pub fn less_or_equal(current: &str, target: &str) -> bool {
    compare(current, target) != Ordering::Greater
}
