//! Rule grammar parser
//!
//! One rule per line:
//!
//! ```text
//! NAME  [LEFT-PATTERN]  OPERATOR  [RIGHT-PATTERN]
//! ```
//!
//! A pattern is a sequence of class names and alternation groups such as
//! `(MidNum | MidNumLetQ)`. A missing pattern stands for `ANY`. A name found
//! in the macro table behaves like an alternation group of its classes.
//! Every combination of alternatives produces one concrete [`Rule`], all
//! sharing the line's rule name.
//!
//! Transform lines read `NAME STATE PATTERN... → TARGET`: the first left
//! element is the state the rule applies in, the remaining left elements are
//! the pattern it absorbs, and the right side names the class to re-enter
//! with.

use std::collections::HashMap;
use std::iter::Peekable;

use super::combinations::Combinations;
use super::token::{Token, Tokenizer};
use crate::domain::class::normalize_name;
use crate::domain::{Rule, RuleAction};
use crate::error::{Result, RuleSyntaxError};

/// Alias name → class names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroTable {
    entries: HashMap<String, Vec<String>>,
}

impl MacroTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define or replace an alias; names are upper-cased
    pub fn insert<I, S>(&mut self, alias: &str, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes = classes
            .into_iter()
            .map(|c| normalize_name(c.as_ref()))
            .collect();
        self.entries.insert(normalize_name(alias), classes);
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with<I, S>(mut self, alias: &str, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.insert(alias, classes);
        self
    }

    /// Expansion of an alias, if defined
    pub fn get(&self, alias: &str) -> Option<&[String]> {
        self.entries
            .get(&normalize_name(alias))
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aliases and their expansions, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(alias, classes)| (alias.as_str(), classes.as_slice()))
    }
}

impl<S: AsRef<str>> FromIterator<(S, Vec<S>)> for MacroTable {
    fn from_iter<T: IntoIterator<Item = (S, Vec<S>)>>(iter: T) -> Self {
        let mut table = MacroTable::new();
        for (alias, classes) in iter {
            table.insert(alias.as_ref(), classes);
        }
        table
    }
}

/// Alternation groups of one side of a rule line
type Template = Vec<Vec<String>>;

/// Line-oriented rule parser
///
/// The parser holds no state besides its macro table, so a failed line never
/// affects the lines after it.
#[derive(Debug, Clone, Default)]
pub struct RuleParser {
    macros: MacroTable,
}

impl RuleParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_macros(macros: MacroTable) -> Self {
        Self { macros }
    }

    pub fn macros(&self) -> &MacroTable {
        &self.macros
    }

    /// Whether a line carries no rule (blank, or `#` in the first column)
    pub fn is_ignorable(line: &str) -> bool {
        super::is_blank_or_comment(line)
    }

    /// Parse a whole grammar, stopping at the first malformed line
    pub fn parse(&self, text: &str) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();
        for (_, parsed) in self.parse_lines(text) {
            rules.extend(parsed?);
        }
        Ok(rules)
    }

    /// Parse every rule line independently.
    ///
    /// Yields the 1-based line number and the outcome for each non-blank,
    /// non-comment line. Errors carry their line number.
    pub fn parse_lines<'a>(
        &'a self,
        text: &'a str,
    ) -> impl Iterator<Item = (usize, std::result::Result<Vec<Rule>, RuleSyntaxError>)> + 'a {
        text.lines()
            .enumerate()
            .filter(|(_, line)| !Self::is_ignorable(line))
            .map(move |(i, line)| {
                let number = i + 1;
                (number, self.parse_line(line).map_err(|e| e.at_line(number)))
            })
    }

    /// Parse a single rule line into its concrete rules
    pub fn parse_line(&self, line: &str) -> std::result::Result<Vec<Rule>, RuleSyntaxError> {
        let error = |reason: String| RuleSyntaxError::new(line, reason);
        let mut tokens = Tokenizer::new(line).peekable();

        let name = match tokens.next() {
            Some(Token::Name(name)) => name,
            Some(token) => return Err(error(format!("expected rule name, found `{token}`"))),
            None => return Err(error("missing rule name".into())),
        };

        let left = self.read_pattern(&mut tokens).map_err(&error)?;

        let action = match tokens.next() {
            Some(Token::Break) => RuleAction::Break,
            Some(Token::NoBreak) => RuleAction::NoBreak,
            Some(Token::Transform) => RuleAction::Transform,
            Some(token) => return Err(error(format!("expected operator, found `{token}`"))),
            None => return Err(error("missing operator".into())),
        };

        let right = self.read_pattern(&mut tokens).map_err(&error)?;

        if let Some(token) = tokens.next() {
            return Err(error(format!("unexpected token `{token}` at end of line")));
        }

        if action == RuleAction::Transform && (left.len() < 2 || right.len() != 1) {
            return Err(error(
                "transform needs a state and a pattern before `→` and one target after it".into(),
            ));
        }

        let mut rules = Vec::with_capacity(
            Combinations::total(&left).max(1) * Combinations::total(&right).max(1),
        );
        for source in Combinations::new(&left) {
            for next in Combinations::new(&right) {
                let rule = build_rule(name, &source, &next, action)
                    .map_err(|e| error(e.to_string()))?;
                rules.push(rule);
            }
        }
        Ok(rules)
    }

    fn read_pattern<'a, I>(&self, tokens: &mut Peekable<I>) -> std::result::Result<Template, String>
    where
        I: Iterator<Item = Token<'a>>,
    {
        let mut groups = Template::new();
        loop {
            match tokens.peek() {
                Some(Token::Name(name)) => {
                    let classes = self.expand(name);
                    if classes.is_empty() {
                        return Err(format!("macro `{name}` expands to no classes"));
                    }
                    groups.push(classes);
                    tokens.next();
                }
                Some(Token::LeftParen) => {
                    tokens.next();
                    groups.push(self.read_group(tokens)?);
                }
                _ => return Ok(groups),
            }
        }
    }

    /// Read an alternation group after its opening parenthesis
    fn read_group<'a, I>(&self, tokens: &mut Peekable<I>) -> std::result::Result<Vec<String>, String>
    where
        I: Iterator<Item = Token<'a>>,
    {
        let mut choices = Vec::new();
        loop {
            match tokens.next() {
                Some(Token::Name(name)) => choices.extend(self.expand(name)),
                Some(Token::RightParen) if choices.is_empty() => {
                    return Err("empty alternation group".into())
                }
                Some(token) => return Err(format!("expected class name, found `{token}`")),
                None => return Err("unterminated alternation group".into()),
            }
            match tokens.next() {
                Some(Token::Or) => continue,
                Some(Token::RightParen) => return Ok(choices),
                Some(token) => return Err(format!("expected `|` or `)`, found `{token}`")),
                None => return Err("unterminated alternation group".into()),
            }
        }
    }

    fn expand(&self, name: &str) -> Vec<String> {
        match self.macros.get(name) {
            Some(classes) => classes.to_vec(),
            None => vec![normalize_name(name)],
        }
    }
}

fn build_rule(name: &str, source: &[&String], next: &[&String], action: RuleAction) -> Result<Rule> {
    const ANY: &str = "ANY";

    if action == RuleAction::Transform {
        return Rule::new(name, &source[..1], &source[1..], next[0], action);
    }

    let target = next.first().map_or(ANY, |s| s.as_str());
    match (source.is_empty(), next.is_empty()) {
        (false, false) => Rule::new(name, source, next, target, action),
        (true, false) => Rule::new(name, [ANY], next.iter().map(|s| s.as_str()), target, action),
        (false, true) => Rule::new(name, source.iter().map(|s| s.as_str()), [ANY], target, action),
        (true, true) => Rule::new(name, [ANY], [ANY], target, action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(parser: &RuleParser, line: &str) -> Rule {
        let mut rules = parser.parse_line(line).unwrap();
        assert_eq!(rules.len(), 1, "{line}");
        rules.remove(0)
    }

    #[test]
    fn test_comment_only_in_first_column() {
        assert!(RuleParser::is_ignorable("# WB1"));
        assert!(RuleParser::is_ignorable("   \t"));
        assert!(!RuleParser::is_ignorable("  # indented"));

        let parser = RuleParser::new();
        let lines: Vec<_> = parser
            .parse_lines("# header\n  # indented\nWB3\tCR\t×\tLF\n")
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].0, 2);
        assert_eq!(lines[0].1.as_ref().unwrap_err().line_number, Some(2));
        assert!(lines[1].1.is_ok());
    }

    #[test]
    fn test_missing_right_side_is_any() {
        let rule = single(&RuleParser::new(), "WB1\tsot\t÷\t");
        assert_eq!(rule.name(), "WB1");
        assert_eq!(rule.left(), ["SOT"]);
        assert_eq!(rule.right(), ["ANY"]);
        assert_eq!(rule.target(), "ANY");
        assert_eq!(rule.action(), RuleAction::Break);
    }

    #[test]
    fn test_missing_left_side_is_any() {
        let rule = single(&RuleParser::new(), "WB2\t \t÷\teot");
        assert_eq!(rule.left(), ["ANY"]);
        assert_eq!(rule.right(), ["EOT"]);
        assert_eq!(rule.target(), "EOT");
        assert_eq!(rule.action(), RuleAction::Break);
    }

    #[test]
    fn test_transform_expansion() {
        let rules = RuleParser::new()
            .parse_line("WB4\tX (Extend | Format)\t→\tX")
            .unwrap();
        assert_eq!(rules.len(), 2);
        for (rule, absorbed) in rules.iter().zip(["EXTEND", "FORMAT"]) {
            assert_eq!(rule.name(), "WB4");
            assert_eq!(rule.left(), ["X"]);
            assert_eq!(rule.right(), [absorbed]);
            assert_eq!(rule.target(), "X");
            assert_eq!(rule.action(), RuleAction::Transform);
        }
    }

    #[test]
    fn test_multi_class_contexts() {
        let rule = single(&RuleParser::new(), "XXX\tALetter ALetter\t×\tALetter ALetter");
        assert_eq!(rule.left(), ["ALETTER", "ALETTER"]);
        assert_eq!(rule.right(), ["ALETTER", "ALETTER"]);
        assert_eq!(rule.target(), "ALETTER");
        assert_eq!(rule.action(), RuleAction::NoBreak);
    }

    #[test]
    fn test_cartesian_expansion_count() {
        let rules = RuleParser::new()
            .parse_line("R (A | B) C × (D | E | F) (G | H)")
            .unwrap();
        assert_eq!(rules.len(), 2 * 3 * 2);
        assert_eq!(rules[0].to_string(), "R:(A,C)+(D,G)=>D ×");
        assert_eq!(rules[1].to_string(), "R:(A,C)+(D,H)=>D ×");
        assert_eq!(rules[11].to_string(), "R:(B,C)+(F,H)=>F ×");
        assert!(rules.iter().all(|r| r.name() == "R"));
    }

    #[test]
    fn test_macros_expand_as_alternation() {
        let macros = MacroTable::new()
            .with("AHLetter", ["ALetter", "Hebrew_Letter"])
            .with("X", ["Any"]);
        let parser = RuleParser::with_macros(macros);

        let rules = parser.parse_line("WB5 AHLetter × AHLetter").unwrap();
        let rendered: Vec<_> = rules.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            rendered,
            [
                "WB5:(ALETTER)+(ALETTER)=>ALETTER ×",
                "WB5:(ALETTER)+(HEBREW_LETTER)=>HEBREW_LETTER ×",
                "WB5:(HEBREW_LETTER)+(ALETTER)=>ALETTER ×",
                "WB5:(HEBREW_LETTER)+(HEBREW_LETTER)=>HEBREW_LETTER ×",
            ]
        );

        // Inside a group a macro contributes all of its classes
        let rules = parser
            .parse_line("WB13a (AHLetter | Numeric) × ExtendNumLet")
            .unwrap();
        let left: Vec<_> = rules.iter().map(|r| r.last_of_left().to_string()).collect();
        assert_eq!(left, ["ALETTER", "HEBREW_LETTER", "NUMERIC"]);

        let rule = single(&parser, "WB4 X Extend → X");
        assert_eq!(rule.to_string(), "WB4:(ANY)+(EXTEND)=>ANY →");
    }

    #[test]
    fn test_syntax_errors() {
        let parser = RuleParser::new();
        for (line, reason) in [
            ("÷ A", "expected rule name"),
            ("WB1 A B", "missing operator"),
            ("WB1 A | B", "expected operator"),
            ("WB1 (A | B × C", "expected `|` or `)`"),
            ("WB1 (A | B", "unterminated alternation group"),
            ("WB1 () × A", "empty alternation group"),
            ("WB1 A × B ×", "unexpected token `×` at end of line"),
            ("WB1 A × B )", "unexpected token `)`"),
            ("WB1 A * × B", "expected operator, found `*`"),
            ("WB4 X → X", "transform needs"),
            ("WB4 X Extend → X Y", "transform needs"),
        ] {
            let err = parser.parse_line(line).unwrap_err();
            assert!(err.reason.contains(reason), "{line}: {}", err.reason);
            assert_eq!(err.line, line);
        }
    }

    #[test]
    fn test_parse_skips_comments_and_reports_line_numbers() {
        let parser = RuleParser::new();
        let text = "# comment\n\nWB3 CR × LF\n  \nWB14 Any ÷ Any\n";
        let rules = parser.parse(text).unwrap();
        assert_eq!(rules.len(), 2);

        let text = "WB3 CR × LF\n# comment\nWB3a (CR | LF ÷\n";
        let results: Vec<_> = parser.parse_lines(text).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].1.is_ok());
        let err = results[1].1.as_ref().unwrap_err();
        assert_eq!(err.line_number, Some(3));

        assert!(matches!(
            parser.parse(text),
            Err(crate::Error::RuleSyntax(RuleSyntaxError {
                line_number: Some(3),
                ..
            }))
        ));
    }

    #[test]
    fn test_failed_line_does_not_affect_next() {
        let parser = RuleParser::new();
        let results: Vec<_> = parser
            .parse_lines("BAD (A ×\nGOOD A × B")
            .map(|(_, r)| r.is_ok())
            .collect();
        assert_eq!(results, [false, true]);
    }
}
