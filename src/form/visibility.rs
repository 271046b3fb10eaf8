use serde::{Deserialize, Serialize};

use crate::form::domain::FieldValue;
use crate::form::path::{paths, FieldPath};

/// Condition evaluated against the governing field's current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisibilityPredicate {
    FlagIsTrue,
    FlagIsFalse,
}

impl VisibilityPredicate {
    /// Non-flag values never satisfy a flag predicate.
    pub fn evaluate(self, value: &FieldValue) -> bool {
        match (self, value) {
            (VisibilityPredicate::FlagIsTrue, FieldValue::Flag(flag)) => *flag,
            (VisibilityPredicate::FlagIsFalse, FieldValue::Flag(flag)) => !*flag,
            _ => false,
        }
    }
}

/// Declarative rule gating one field's visibility on another field's
/// value. Rules are recomputed only when their governing path is written;
/// fields with no rule are always visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibilityRule {
    pub governing: FieldPath,
    pub dependent: FieldPath,
    pub predicate: VisibilityPredicate,
}

impl VisibilityRule {
    pub fn new(
        governing: impl Into<FieldPath>,
        dependent: impl Into<FieldPath>,
        predicate: VisibilityPredicate,
    ) -> Self {
        Self {
            governing: governing.into(),
            dependent: dependent.into(),
            predicate,
        }
    }
}

/// The rule set the form ships with: the language-detail field is shown
/// only while the fluency-in-languages flag is checked.
pub fn default_rules() -> Vec<VisibilityRule> {
    vec![VisibilityRule::new(
        paths::FLUENCY_IN_LANGUAGES,
        paths::LANGUAGE_DETAILS,
        VisibilityPredicate::FlagIsTrue,
    )]
}
