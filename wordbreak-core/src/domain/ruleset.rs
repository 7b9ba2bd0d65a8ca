//! Compiled ruleset: class index plus priority-ordered rule buckets
//!
//! Every rule is filed under `(last_of_left, first_of_right)`. Within a
//! bucket, longer patterns come first; among equally long patterns a rule
//! whose target is `ANY` comes after one that is not, and remaining ties keep
//! definition order. Buckets are sorted once here and never touched again.

use smallvec::SmallVec;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use super::class::{CharClass, ClassId};
use super::class_index::ClassIndex;
use super::rule::{Rule, RuleAction};
use crate::error::{Error, Result};

/// Class-id sequence of a compiled rule context
pub type ClassPattern = SmallVec<[ClassId; 4]>;

/// A rule with all class names resolved against the ruleset's index
#[derive(Debug, Clone)]
pub struct IndexedRule {
    rule: Arc<Rule>,
    left: ClassPattern,
    right: ClassPattern,
    target: ClassId,
}

impl IndexedRule {
    fn compile(rule: Arc<Rule>, classes: &ClassIndex) -> Result<Self> {
        let lookup = |name: &str| {
            classes.by_name(name).ok_or_else(|| Error::UnknownClass {
                rule: rule.name().to_string(),
                class: name.to_string(),
            })
        };
        let left = rule
            .left()
            .iter()
            .map(|n| lookup(n.as_str()))
            .collect::<Result<ClassPattern>>()?;
        let right = rule
            .right()
            .iter()
            .map(|n| lookup(n.as_str()))
            .collect::<Result<ClassPattern>>()?;
        let target = lookup(rule.target())?;
        Ok(Self {
            rule,
            left,
            right,
            target,
        })
    }

    /// Source rule
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Left context, most recent last
    pub fn left(&self) -> &[ClassId] {
        &self.left
    }

    /// Right context, nearest first
    pub fn right(&self) -> &[ClassId] {
        &self.right
    }

    /// Resolved target class
    pub fn target(&self) -> ClassId {
        self.target
    }

    /// Rule action
    pub fn action(&self) -> RuleAction {
        self.rule.action()
    }

    fn from_class(&self) -> ClassId {
        self.left[self.left.len() - 1]
    }

    fn to_class(&self) -> ClassId {
        self.right[0]
    }

    fn priority_key(&self) -> (Reverse<usize>, bool) {
        (
            Reverse(self.left.len() + self.right.len()),
            self.target == ClassId::ANY,
        )
    }
}

/// Immutable segmentation grammar shared by any number of scanners
#[derive(Debug, Clone)]
pub struct Ruleset {
    classes: ClassIndex,
    rules: Vec<Arc<Rule>>,
    buckets: HashMap<(ClassId, ClassId), Vec<IndexedRule>>,
}

impl Ruleset {
    /// Compile rules against a class index.
    ///
    /// Fails with [`Error::UnknownClass`] if a rule names a class the index
    /// does not contain.
    pub fn new(classes: ClassIndex, rules: impl IntoIterator<Item = Rule>) -> Result<Self> {
        let rules: Vec<Arc<Rule>> = rules.into_iter().map(Arc::new).collect();
        let mut buckets: HashMap<(ClassId, ClassId), Vec<IndexedRule>> = HashMap::new();

        for rule in &rules {
            let indexed = IndexedRule::compile(Arc::clone(rule), &classes)?;
            buckets
                .entry((indexed.from_class(), indexed.to_class()))
                .or_default()
                .push(indexed);
        }
        for bucket in buckets.values_mut() {
            bucket.sort_by_key(IndexedRule::priority_key);
        }

        log::debug!(
            "ruleset compiled: {} rules in {} buckets over {} classes",
            rules.len(),
            buckets.len(),
            classes.len()
        );

        Ok(Self {
            classes,
            rules,
            buckets,
        })
    }

    /// Build the class index and compile the rules in one step
    pub fn from_parts(
        classes: impl IntoIterator<Item = CharClass>,
        rules: impl IntoIterator<Item = Rule>,
    ) -> Result<Self> {
        Self::new(ClassIndex::new(classes)?, rules)
    }

    /// The class index
    pub fn classes(&self) -> &ClassIndex {
        &self.classes
    }

    /// Rules in definition order
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Number of rules
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Number of distinct `(from, to)` buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Rules filed under `(from, to)`, highest priority first
    pub fn bucket(&self, from: ClassId, to: ClassId) -> &[IndexedRule] {
        self.buckets
            .get(&(from, to))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
