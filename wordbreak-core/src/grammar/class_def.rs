//! Parser for character class records
//!
//! Records follow the Unicode property file layout:
//!
//! ```text
//! 0041..005A    ; ALetter # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
//! 000D          ; CR # Cc       <control-000D>
//! ```

use regex::Regex;
use std::collections::HashMap;

use crate::domain::CharClass;
use crate::error::{ClassDefinitionError, Error, Result};

const MAX_CODEPOINT: u32 = 0x10FFFF;

const RECORD_PATTERN: &str =
    r"^\s*([0-9A-Fa-f]+)(?:\.\.([0-9A-Fa-f]+))?\s*;\s*([^\s;#]+)\s*(?:#.*)?$";

/// Parses `HEX[..HEX] ; NAME # comment` records into classes
#[derive(Debug, Clone)]
pub struct ClassDefinitionParser {
    record: Regex,
}

impl ClassDefinitionParser {
    pub fn new() -> Result<Self> {
        let record = Regex::new(RECORD_PATTERN)
            .map_err(|e| Error::Configuration(format!("class record pattern: {e}")))?;
        Ok(Self { record })
    }

    /// Parse one record into a single-range class
    pub fn parse_line(&self, line: &str) -> std::result::Result<CharClass, ClassDefinitionError> {
        let caps = self.record.captures(line).ok_or_else(|| {
            ClassDefinitionError::new(line, "expected `HEX[..HEX] ; NAME [# comment]`")
        })?;

        let codepoint = |hex: &str| {
            u32::from_str_radix(hex, 16)
                .ok()
                .filter(|&cp| cp <= MAX_CODEPOINT)
                .ok_or_else(|| {
                    ClassDefinitionError::new(line, format!("codepoint {hex} is out of range"))
                })
        };

        let start = codepoint(&caps[1])?;
        let end = match caps.get(2) {
            Some(end) => codepoint(end.as_str())?,
            None => start,
        };
        if start > end {
            return Err(ClassDefinitionError::new(
                line,
                format!("range start {start:04X} is above its end {end:04X}"),
            ));
        }

        Ok(CharClass::with_range(&caps[3], start, end))
    }

    /// Parse every record line independently, skipping blanks and comments.
    ///
    /// Errors carry their 1-based line number.
    pub fn parse_lines<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (usize, std::result::Result<CharClass, ClassDefinitionError>)> + 'a
    {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !super::is_blank_or_comment(line))
            .map(move |(i, line)| {
                let number = i + 1;
                (number, self.parse_line(line).map_err(|e| e.at_line(number)))
            })
    }

    /// Parse a whole file, merging records that share a class name.
    ///
    /// Classes come back in first-seen order. Stops at the first malformed
    /// record.
    pub fn parse(&self, text: &str) -> Result<Vec<CharClass>> {
        let records = self
            .parse_lines(text)
            .map(|(_, record)| record)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(merge_by_name(records))
    }
}

/// Merge classes that share a name, keeping first-seen order
pub fn merge_by_name(classes: impl IntoIterator<Item = CharClass>) -> Vec<CharClass> {
    let mut merged: Vec<CharClass> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    for class in classes {
        match slots.get(class.name()) {
            Some(&slot) => merged[slot].absorb(class),
            None => {
                slots.insert(class.name().to_string(), merged.len());
                merged.push(class);
            }
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CodepointRange;

    fn parser() -> ClassDefinitionParser {
        ClassDefinitionParser::new().unwrap()
    }

    #[test]
    fn test_parse_line() {
        let class = parser().parse_line("0000  ; ABC # ....").unwrap();
        assert_eq!(class.name(), "ABC");
        assert_eq!(class.ranges(), [CodepointRange::new(0, 0)]);

        let class = parser().parse_line("0000..000A  ; ABC # ....").unwrap();
        assert_eq!(class.ranges(), [CodepointRange::new(0, 10)]);
    }

    #[test]
    fn test_ucd_layout() {
        let class = parser()
            .parse_line("1F1E6..1F1FF  ; Regional_Indicator # So  [26] REGIONAL INDICATOR SYMBOL LETTER A..")
            .unwrap();
        assert_eq!(class.name(), "REGIONAL_INDICATOR");
        assert_eq!(class.ranges(), [CodepointRange::new(0x1F1E6, 0x1F1FF)]);

        // Comment is optional and hex is case-insensitive
        let class = parser().parse_line("00ad;format").unwrap();
        assert_eq!(class.name(), "FORMAT");
        assert_eq!(class.ranges(), [CodepointRange::single(0xAD)]);
    }

    #[test]
    fn test_parse_merges_duplicates() {
        let text = "#COMMENT...\n\n0000  ; ABC # ....\n002..003 ; ABC #...\n0041 ; DEF\n";
        let classes = parser().parse(text).unwrap();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].name(), "ABC");
        assert_eq!(
            classes[0].ranges(),
            [CodepointRange::new(0, 0), CodepointRange::new(2, 3)]
        );
        assert_eq!(classes[1].name(), "DEF");
    }

    #[test]
    fn test_malformed_records() {
        let parser = parser();
        for (line, reason) in [
            ("0041 ALetter", "expected"),
            ("0041 ; ", "expected"),
            ("XYZ ; ALetter", "expected"),
            ("0041...0042 ; ALetter", "expected"),
            ("110000 ; ALetter", "out of range"),
            ("FFFFFFFFFF ; ALetter", "out of range"),
            ("0042..0041 ; ALetter", "above its end"),
        ] {
            let err = parser.parse_line(line).unwrap_err();
            assert!(err.reason.contains(reason), "{line}: {}", err.reason);
        }
    }

    #[test]
    fn test_indented_hash_is_not_a_comment() {
        let err = parser().parse("# header\n0041 ; A\n  # indented\n").unwrap_err();
        match err {
            Error::ClassDefinition(e) => assert_eq!(e.line_number, Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_error_line_number() {
        let err = parser().parse("0041 ; A\n# c\nbad\n").unwrap_err();
        match err {
            Error::ClassDefinition(e) => assert_eq!(e.line_number, Some(3)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
