//! Rule base mapping (HAZ, WHZ) band pairs to a diagnosis.
//!
//! Rules are plain data: each is an exact pair of bands plus the diagnosis
//! label and ordered recommendations. Condition pairs are unique within a
//! rule base, so every pair addresses at most one rule.

mod knowledge_base;

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use super::category::{HazCategory, WhzCategory};
use knowledge_base::KNOWLEDGE_BASE;

static STANDARD_RULES: OnceLock<Arc<RuleBase>> = OnceLock::new();

/// Band facts for one child, the only input to rule matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Facts {
    #[serde(rename = "HAZ")]
    pub haz: HazCategory,

    #[serde(rename = "WHZ")]
    pub whz: WhzCategory,
}

impl Facts {
    #[must_use]
    pub const fn new(haz: HazCategory, whz: WhzCategory) -> Self {
        Self { haz, whz }
    }
}

impl std::fmt::Display for Facts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HAZ={}, WHZ={}", self.haz, self.whz)
    }
}

/// One knowledge-base entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: u32,
    pub conditions: Facts,
    pub diagnosis: String,
    pub recommendation: Vec<String>,
}

impl Rule {
    /// Both bands must be equal; there is no partial match.
    #[must_use]
    pub fn matches(&self, facts: &Facts) -> bool {
        self.conditions == *facts
    }
}

/// Errors raised while building a rule base.
#[derive(Debug, thiserror::Error)]
pub enum RuleBaseError {
    #[error("Rules #{first} and #{second} share conditions {conditions}")]
    DuplicateConditions {
        first: u32,
        second: u32,
        conditions: Facts,
    },

    #[error("Rule id #{0} is used more than once")]
    DuplicateId(u32),

    #[error("Rule table is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered, immutable set of rules.
#[derive(Debug, Clone)]
pub struct RuleBase {
    rules: Vec<Rule>,
    by_conditions: HashMap<Facts, usize>,
}

impl RuleBase {
    /// Build a rule base, keeping the given order.
    ///
    /// # Errors
    /// Returns error if two rules share an id or a condition pair.
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleBaseError> {
        let mut ids = HashSet::with_capacity(rules.len());
        let mut by_conditions = HashMap::with_capacity(rules.len());

        for (index, rule) in rules.iter().enumerate() {
            if !ids.insert(rule.id) {
                return Err(RuleBaseError::DuplicateId(rule.id));
            }
            if let Some(&first) = by_conditions.get(&rule.conditions) {
                let first: &Rule = &rules[first];
                return Err(RuleBaseError::DuplicateConditions {
                    first: first.id,
                    second: rule.id,
                    conditions: rule.conditions,
                });
            }
            by_conditions.insert(rule.conditions, index);
        }

        Ok(Self {
            rules,
            by_conditions,
        })
    }

    /// Load a rule table serialized as a JSON array of rules.
    ///
    /// # Errors
    /// Returns error on malformed JSON or duplicate ids / condition pairs.
    pub fn from_json(json: &str) -> Result<Self, RuleBaseError> {
        let rules: Vec<Rule> = serde_json::from_str(json)?;
        Self::new(rules)
    }

    /// The built-in 28-rule knowledge base, built once per process.
    #[must_use]
    pub fn standard() -> &'static RuleBase {
        Self::standard_arc()
    }

    /// Handle on the same process-wide knowledge base as [`RuleBase::standard`].
    #[must_use]
    pub fn shared_standard() -> Arc<RuleBase> {
        Arc::clone(Self::standard_arc())
    }

    fn standard_arc() -> &'static Arc<RuleBase> {
        STANDARD_RULES.get_or_init(|| {
            let rules = KNOWLEDGE_BASE
                .iter()
                .map(|record| Rule {
                    id: record.id,
                    conditions: Facts::new(record.haz, record.whz),
                    diagnosis: record.diagnosis.to_string(),
                    recommendation: record
                        .recommendation
                        .iter()
                        .map(|r| (*r).to_string())
                        .collect(),
                })
                .collect();
            Arc::new(
                RuleBase::new(rules)
                    .expect("Built-in knowledge base has unique ids and conditions"),
            )
        })
    }

    /// Rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule with the given id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Rule addressed by its condition pair.
    #[must_use]
    pub fn find(&self, conditions: &Facts) -> Option<&Rule> {
        self.by_conditions
            .get(conditions)
            .map(|&index| &self.rules[index])
    }

    /// Every (HAZ, WHZ) pair that no rule covers, in band order.
    #[must_use]
    pub fn uncovered_combinations(&self) -> Vec<Facts> {
        HazCategory::ALL
            .iter()
            .flat_map(|&haz| WhzCategory::ALL.iter().map(move |&whz| Facts::new(haz, whz)))
            .filter(|facts| !self.by_conditions.contains_key(facts))
            .collect()
    }
}
