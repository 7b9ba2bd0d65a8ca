//! Character classes: named sets of codepoint intervals

use std::fmt;

/// Inclusive codepoint interval `[start, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodepointRange {
    /// First codepoint in the range
    pub start: u32,
    /// Last codepoint in the range (inclusive)
    pub end: u32,
}

impl CodepointRange {
    /// Create a range; `start` and `end` are swapped if given out of order
    pub fn new(start: u32, end: u32) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Range covering a single codepoint
    pub fn single(cp: u32) -> Self {
        Self { start: cp, end: cp }
    }

    /// Whether the codepoint lies inside the range
    #[inline]
    pub fn contains(&self, cp: u32) -> bool {
        self.start <= cp && cp <= self.end
    }
}

impl From<(char, char)> for CodepointRange {
    fn from((start, end): (char, char)) -> Self {
        Self::new(start as u32, end as u32)
    }
}

impl fmt::Display for CodepointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{:04X}", self.start)
        } else {
            write!(f, "{:04X}..{:04X}", self.start, self.end)
        }
    }
}

/// Dense identifier of a class inside one [`ClassIndex`](super::ClassIndex)
///
/// The first four ids are the sentinel classes that exist in every index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub(crate) u16);

impl ClassId {
    /// Start of text
    pub const SOT: ClassId = ClassId(0);
    /// End of text
    pub const EOT: ClassId = ClassId(1);
    /// Wildcard, matches any class in rule patterns
    pub const ANY: ClassId = ClassId(2);
    /// Codepoints not covered by any loaded class
    pub const OTHER: ClassId = ClassId(3);

    pub(crate) const SENTINEL_COUNT: usize = 4;

    /// Position in the owning index
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is one of the four built-in classes
    #[inline]
    pub fn is_sentinel(self) -> bool {
        self.index() < Self::SENTINEL_COUNT
    }
}

/// Names of the sentinel classes, in [`ClassId`] order
pub const SENTINEL_NAMES: [&str; 4] = ["SOT", "EOT", "ANY", "OTHER"];

/// Normalize a class name the way every lookup does
#[inline]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Whether `name` (in any case) is one of the sentinel names
pub fn is_reserved_name(name: &str) -> bool {
    let name = normalize_name(name);
    SENTINEL_NAMES.contains(&name.as_str())
}

/// A named character class and the codepoints it covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharClass {
    name: String,
    ranges: Vec<CodepointRange>,
}

impl CharClass {
    /// Create an empty class; the name is upper-cased
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: normalize_name(name.as_ref()),
            ranges: Vec::new(),
        }
    }

    /// Create a class covering a single inclusive range
    pub fn with_range(name: impl AsRef<str>, start: u32, end: u32) -> Self {
        let mut class = Self::new(name);
        class.ranges.push(CodepointRange::new(start, end));
        class
    }

    /// Create a class covering the characters `start..=end`
    pub fn with_chars(name: impl AsRef<str>, start: char, end: char) -> Self {
        Self::with_range(name, start as u32, end as u32)
    }

    /// Builder-style: add another range
    pub fn and_range(mut self, start: u32, end: u32) -> Self {
        self.ranges.push(CodepointRange::new(start, end));
        self
    }

    /// Class name (upper case)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Covered intervals in definition order
    pub fn ranges(&self) -> &[CodepointRange] {
        &self.ranges
    }

    /// Whether any range contains the codepoint
    pub fn contains(&self, cp: u32) -> bool {
        self.ranges.iter().any(|r| r.contains(cp))
    }

    /// Append ranges from another record with the same name.
    ///
    /// Only used while definitions are being collected, before an index is
    /// built from them.
    pub(crate) fn absorb(&mut self, other: CharClass) {
        debug_assert_eq!(self.name, other.name);
        self.ranges.extend(other.ranges);
    }

    pub(crate) fn sentinel(id: ClassId) -> Self {
        Self::new(SENTINEL_NAMES[id.index()])
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.ranges.is_empty() {
            f.write_str("(")?;
            for (i, range) in self.ranges.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{range}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}
