// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Ordered collection of rules.

use crate::commit::ParsedMessage;
use crate::config::Config;

use super::builtin::{
    BlankLineSeparation, BodyLineWrap, BodyPresence, Rule, SubjectLength, SubjectPresence,
};
use super::validator::RuleViolation;

/// The rules a message is checked against, in invocation order.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// A rule set with no rules.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// The built-in rules: presence, then length, then blank lines.
    pub fn standard() -> Self {
        Self::empty()
            .with_rule(SubjectPresence)
            .with_rule(BodyPresence)
            .with_rule(SubjectLength)
            .with_rule(BodyLineWrap)
            .with_rule(BlankLineSeparation)
    }

    /// Append a rule.
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.add_rule(Box::new(rule));
        self
    }

    /// Append a boxed rule.
    pub fn add_rule(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Names of the rules, in order.
    pub fn names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the set has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run every rule and collect all violations. Never stops early.
    pub fn check(&self, message: &ParsedMessage, config: &Config) -> Vec<RuleViolation> {
        self.rules
            .iter()
            .flat_map(|rule| rule.check(message, config))
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}
