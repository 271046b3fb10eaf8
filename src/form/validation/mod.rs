mod config;
mod report;
mod rules;

pub use config::{ValidationConfig, DEFAULT_MAX_UPLOAD_BYTES, GRADUATION_YEAR_MIN};
pub use report::{ErrorKind, ErrorReport, ValidationError};

use serde::Serialize;

use crate::form::domain::{ApplicationRecord, Section};

/// Outcome of validating a record snapshot: the accepted record unchanged,
/// or the complete, ordered set of violated constraints.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationResult {
    Accepted(ApplicationRecord),
    Rejected(ErrorReport),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationResult::Accepted(_))
    }

    pub fn report(&self) -> Option<&ErrorReport> {
        match self {
            ValidationResult::Accepted(_) => None,
            ValidationResult::Rejected(report) => Some(report),
        }
    }
}

/// Stateless validator applying the configured bounds to a record
/// snapshot. Constraints are evaluated independently and every violation
/// is collected; nothing short-circuits on the first failure.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    config: ValidationConfig,
}

impl SchemaValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate the whole record, section by section in declaration order.
    pub fn validate(&self, record: &ApplicationRecord) -> ValidationResult {
        let mut report = ErrorReport::default();
        for section in Section::ALL {
            rules::check_section(section, record, &self.config, &mut report);
        }
        Self::finish(record, report)
    }

    /// Validate a single section, ignoring the rest of the record. Backs
    /// wizard-style flows that gate each step on its own fields.
    pub fn validate_section(&self, record: &ApplicationRecord, section: Section) -> ValidationResult {
        let mut report = ErrorReport::default();
        rules::check_section(section, record, &self.config, &mut report);
        Self::finish(record, report)
    }

    fn finish(record: &ApplicationRecord, report: ErrorReport) -> ValidationResult {
        if report.is_empty() {
            ValidationResult::Accepted(record.clone())
        } else {
            ValidationResult::Rejected(report)
        }
    }
}
