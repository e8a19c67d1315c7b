//! Forward-chaining matcher over a [`RuleBase`].
//!
//! Facts are matched against rule conditions in stored order; the first exact
//! match fires. Because condition pairs are unique, order only affects how
//! many rules are compared, never which one fires.

use serde::{Deserialize, Serialize};

use super::rules::{Facts, Rule, RuleBase};

/// Conclusion of a fired rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub diagnosis: String,
    pub recommendation: Vec<String>,
    pub rule_id: u32,
}

impl From<&Rule> for DiagnosisResult {
    fn from(rule: &Rule) -> Self {
        Self {
            diagnosis: rule.diagnosis.clone(),
            recommendation: rule.recommendation.clone(),
            rule_id: rule.id,
        }
    }
}

/// Outcome of evaluating one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceEntry {
    pub rule_id: u32,
    pub matched: bool,
}

/// Per-rule evaluation record, in rule-base order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    entries: Vec<TraceEntry>,
}

impl Trace {
    #[must_use]
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id of the first matching rule, if any.
    #[must_use]
    pub fn matched_rule(&self) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.matched)
            .map(|entry| entry.rule_id)
    }
}

/// One line per rule: `Rule #<id> → MATCH` or `Rule #<id> → skip`.
impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let outcome = if entry.matched { "MATCH" } else { "skip" };
            write!(f, "Rule #{} → {}", entry.rule_id, outcome)?;
        }
        Ok(())
    }
}

/// Matcher bound to a rule base.
#[derive(Debug, Clone, Copy)]
pub struct ForwardChainer<'a> {
    rules: &'a RuleBase,
}

impl<'a> ForwardChainer<'a> {
    #[must_use]
    pub fn new(rules: &'a RuleBase) -> Self {
        Self { rules }
    }

    /// First rule whose conditions equal `facts`, as a diagnosis.
    ///
    /// `None` means no rule covers the facts; it is an expected outcome, not
    /// an error.
    #[must_use]
    pub fn match_facts(&self, facts: &Facts) -> Option<DiagnosisResult> {
        self.rules
            .rules()
            .iter()
            .find(|rule| rule.matches(facts))
            .map(DiagnosisResult::from)
    }

    /// Evaluate every rule against `facts` and record the outcome.
    #[must_use]
    pub fn explain_trace(&self, facts: &Facts) -> Trace {
        Trace {
            entries: self
                .rules
                .rules()
                .iter()
                .map(|rule| TraceEntry {
                    rule_id: rule.id,
                    matched: rule.matches(facts),
                })
                .collect(),
        }
    }
}

impl ForwardChainer<'static> {
    /// Matcher over the built-in knowledge base.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(RuleBase::standard())
    }
}
