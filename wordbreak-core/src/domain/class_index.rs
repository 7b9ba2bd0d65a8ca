//! Codepoint → class resolution
//!
//! All class intervals are flattened into one table sorted by start
//! codepoint. Resolution is a binary search for the greatest start that is
//! not above the codepoint, followed by an end check. Codepoints outside
//! every interval resolve to [`ClassId::OTHER`], so resolution is total.

use std::collections::HashMap;

use super::class::{is_reserved_name, normalize_name, CharClass, ClassId, SENTINEL_NAMES};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
struct IndexedRange {
    start: u32,
    end: u32,
    class: ClassId,
}

/// Name and interval index over a fixed set of classes
#[derive(Debug, Clone)]
pub struct ClassIndex {
    classes: Vec<CharClass>,
    by_name: HashMap<String, ClassId>,
    ranges: Vec<IndexedRange>,
}

impl ClassIndex {
    /// Build the index.
    ///
    /// The four sentinel classes are added automatically. Classes sharing a
    /// name are merged. A class using a sentinel name is rejected.
    pub fn new(classes: impl IntoIterator<Item = CharClass>) -> Result<Self> {
        let mut all: Vec<CharClass> = [ClassId::SOT, ClassId::EOT, ClassId::ANY, ClassId::OTHER]
            .into_iter()
            .map(CharClass::sentinel)
            .collect();
        let mut by_name: HashMap<String, ClassId> = SENTINEL_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), ClassId(i as u16)))
            .collect();

        for class in classes {
            if is_reserved_name(class.name()) {
                return Err(Error::ReservedClassName(class.name().to_string()));
            }
            match by_name.get(class.name()) {
                Some(id) => all[id.index()].absorb(class),
                None => {
                    let id = u16::try_from(all.len()).map_err(|_| {
                        Error::Configuration(format!("too many classes ({})", all.len()))
                    })?;
                    by_name.insert(class.name().to_string(), ClassId(id));
                    all.push(class);
                }
            }
        }

        let mut ranges: Vec<IndexedRange> = all
            .iter()
            .enumerate()
            .flat_map(|(i, class)| {
                class.ranges().iter().map(move |r| IndexedRange {
                    start: r.start,
                    end: r.end,
                    class: ClassId(i as u16),
                })
            })
            .collect();
        // Stable: among equal starts the later definition sorts last and wins.
        ranges.sort_by_key(|r| r.start);

        let index = Self {
            classes: all,
            by_name,
            ranges,
        };
        index.report_overlaps();
        log::debug!(
            "class index built: {} classes, {} intervals",
            index.classes.len(),
            index.ranges.len()
        );
        Ok(index)
    }

    fn report_overlaps(&self) {
        for pair in self.ranges.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.start <= prev.end && next.class != prev.class {
                log::warn!(
                    "classes {} and {} overlap at {:04X}",
                    self.name(prev.class),
                    self.name(next.class),
                    next.start
                );
            }
        }
    }

    /// Class of a codepoint, [`ClassId::OTHER`] when unmapped
    #[inline]
    pub fn resolve(&self, cp: u32) -> ClassId {
        let idx = self.ranges.partition_point(|r| r.start <= cp);
        if idx == 0 {
            return ClassId::OTHER;
        }
        let range = &self.ranges[idx - 1];
        if cp <= range.end {
            range.class
        } else {
            ClassId::OTHER
        }
    }

    /// Class of a character
    #[inline]
    pub fn resolve_char(&self, ch: char) -> ClassId {
        self.resolve(ch as u32)
    }

    /// Look a class up by name (case-insensitive)
    pub fn by_name(&self, name: &str) -> Option<ClassId> {
        match self.by_name.get(name) {
            Some(id) => Some(*id),
            None => self.by_name.get(&normalize_name(name)).copied(),
        }
    }

    /// The class behind an id
    ///
    /// # Panics
    ///
    /// Panics if the id was produced by a different index.
    pub fn class(&self, id: ClassId) -> &CharClass {
        &self.classes[id.index()]
    }

    /// Name of the class behind an id
    pub fn name(&self, id: ClassId) -> &str {
        self.class(id).name()
    }

    /// All classes, sentinels first
    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &CharClass)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, class)| (ClassId(i as u16), class))
    }

    /// Number of classes including the sentinels
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether only the sentinel classes are present
    pub fn is_empty(&self) -> bool {
        self.classes.len() == ClassId::SENTINEL_COUNT
    }

    /// Number of indexed intervals
    pub fn interval_count(&self) -> usize {
        self.ranges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters_and_digits() -> ClassIndex {
        ClassIndex::new([
            CharClass::with_chars("low", 'a', 'z'),
            CharClass::with_chars("upper", 'A', 'Z'),
            CharClass::with_chars("number", '0', '9'),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_interval_edges() {
        let index = letters_and_digits();
        let low = index.by_name("low").unwrap();
        let upper = index.by_name("upper").unwrap();
        let number = index.by_name("number").unwrap();

        assert_eq!(index.name(low), "LOW");

        for (ch, expected) in [
            ('`', ClassId::OTHER),
            ('a', low),
            ('b', low),
            ('z', low),
            ('{', ClassId::OTHER),
            ('@', ClassId::OTHER),
            ('A', upper),
            ('B', upper),
            ('Z', upper),
            ('[', ClassId::OTHER),
            ('/', ClassId::OTHER),
            ('0', number),
            ('1', number),
            ('9', number),
            (':', ClassId::OTHER),
        ] {
            assert_eq!(index.resolve_char(ch), expected, "char {ch:?}");
        }
    }

    #[test]
    fn test_sentinels_always_present() {
        let index = ClassIndex::new(Vec::new()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.by_name("sot"), Some(ClassId::SOT));
        assert_eq!(index.by_name("EOT"), Some(ClassId::EOT));
        assert_eq!(index.by_name("Any"), Some(ClassId::ANY));
        assert_eq!(index.by_name("OTHER"), Some(ClassId::OTHER));
        assert_eq!(index.resolve(0x41), ClassId::OTHER);
        assert_eq!(index.resolve(0x10FFFF), ClassId::OTHER);
    }

    #[test]
    fn test_reserved_name_rejected() {
        let err = ClassIndex::new([CharClass::with_chars("any", 'a', 'z')]).unwrap_err();
        assert!(matches!(err, Error::ReservedClassName(name) if name == "ANY"));
    }

    #[test]
    fn test_duplicate_names_merge() {
        let index = ClassIndex::new([
            CharClass::with_chars("digit", '0', '4'),
            CharClass::with_chars("DIGIT", '5', '9'),
        ])
        .unwrap();
        assert_eq!(index.len(), 5);
        let digit = index.by_name("digit").unwrap();
        assert_eq!(index.class(digit).ranges().len(), 2);
        assert_eq!(index.resolve_char('7'), digit);
    }

    #[test]
    fn test_multiple_ranges_per_class() {
        let index = ClassIndex::new([
            CharClass::with_range("gap", 0x10, 0x1F).and_range(0x30, 0x3F),
        ])
        .unwrap();
        let gap = index.by_name("gap").unwrap();
        assert_eq!(index.resolve(0x15), gap);
        assert_eq!(index.resolve(0x25), ClassId::OTHER);
        assert_eq!(index.resolve(0x3F), gap);
        assert_eq!(index.resolve(0x40), ClassId::OTHER);
        assert_eq!(index.interval_count(), 2);
    }

    #[test]
    fn test_same_start_last_definition_wins() {
        let index = ClassIndex::new([
            CharClass::with_chars("first", 'a', 'c'),
            CharClass::with_chars("second", 'a', 'c'),
        ])
        .unwrap();
        assert_eq!(index.resolve_char('b'), index.by_name("second").unwrap());
    }
}
