use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::form::domain::{ApplicationRecord, FieldValue, JobPreference};
use crate::form::path::{paths, FieldPath};
use crate::form::submit::{SubmitError, SubmitHandler};
use crate::form::validation::{ErrorReport, SchemaValidator, ValidationConfig, ValidationResult};
use crate::form::visibility::{default_rules, VisibilityRule};

/// Lifecycle of one form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormPhase {
    Editing,
    Submitted,
}

impl FormPhase {
    pub const fn label(self) -> &'static str {
        match self {
            FormPhase::Editing => "editing",
            FormPhase::Submitted => "submitted",
        }
    }
}

/// Errors raised by field writes. Validation failures are never reported
/// here; they only surface through `submit`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("no field at path '{0}'")]
    UnknownField(FieldPath),
    #[error("value shape not accepted at '{path}' (expected {expected})")]
    WrongValueType { path: FieldPath, expected: &'static str },
    #[error("'{value}' is not a number for field '{path}'")]
    NotANumber { path: FieldPath, value: String },
    #[error("session already submitted; reset to start a new application")]
    SessionClosed,
}

/// Owns the live application record, the per-field error state surfaced to
/// the UI, and the derived visibility of conditional fields. Mediates
/// between raw input events and the schema validator: errors are cleared
/// when their exact field is touched and re-derived only on submit.
pub struct FormController<H: SubmitHandler> {
    record: ApplicationRecord,
    errors: ErrorReport,
    validator: SchemaValidator,
    handler: Arc<H>,
    rules: Vec<VisibilityRule>,
    visibility: BTreeMap<String, bool>,
    phase: FormPhase,
}

impl<H: SubmitHandler> FormController<H> {
    pub fn new(handler: Arc<H>, config: ValidationConfig) -> Self {
        Self::with_rules(handler, config, default_rules())
    }

    pub fn with_rules(
        handler: Arc<H>,
        config: ValidationConfig,
        rules: Vec<VisibilityRule>,
    ) -> Self {
        let mut controller = Self {
            record: ApplicationRecord::default(),
            errors: ErrorReport::default(),
            validator: SchemaValidator::new(config),
            handler,
            rules,
            visibility: BTreeMap::new(),
            phase: FormPhase::Editing,
        };
        controller.refresh_all_visibility();
        controller
    }

    pub fn record(&self) -> &ApplicationRecord {
        &self.record
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn errors(&self) -> &ErrorReport {
        &self.errors
    }

    pub fn error_message(&self, path: &str) -> Option<&str> {
        self.errors.message_for(path)
    }

    /// Surfaced error paths, in schema declaration order.
    pub fn error_paths(&self) -> Vec<&str> {
        self.errors.paths()
    }

    /// Derived visibility for a conditional field. Fields with no
    /// governing rule are always visible.
    pub fn is_visible(&self, path: &str) -> bool {
        self.visibility.get(path).copied().unwrap_or(true)
    }

    /// Write a value at a path, clear any surfaced error for that exact
    /// path, and recompute visibility rules governed by it. The rest of
    /// the error state is left untouched until the next submit.
    pub fn set_field(
        &mut self,
        path: impl Into<FieldPath>,
        value: FieldValue,
    ) -> Result<(), FormError> {
        if self.phase == FormPhase::Submitted {
            return Err(FormError::SessionClosed);
        }

        let path = path.into();
        write_field(&mut self.record, &path, value)?;
        self.errors.clear(path.as_str());
        self.refresh_visibility_for(&path);
        Ok(())
    }

    /// Validate the current record. On success the record is forwarded to
    /// the submit handler and the session closes; on failure the error
    /// mapping replaces the surfaced error state and nothing is forwarded.
    pub fn submit(&mut self) -> Result<ValidationResult, SubmitError> {
        if self.phase == FormPhase::Submitted {
            // Already forwarded; never deliver the same session twice.
            return Ok(ValidationResult::Accepted(self.record.clone()));
        }

        match self.validator.validate(&self.record) {
            ValidationResult::Accepted(record) => {
                self.handler.deliver(&record)?;
                self.errors = ErrorReport::default();
                self.phase = FormPhase::Submitted;
                info!(phase = self.phase.label(), "application forwarded to submit handler");
                Ok(ValidationResult::Accepted(record))
            }
            ValidationResult::Rejected(report) => {
                self.errors = report.clone();
                debug!(error_count = report.len(), "submission rejected by validator");
                Ok(ValidationResult::Rejected(report))
            }
        }
    }

    /// Start a new session: fresh default record, no errors, visibility
    /// recomputed from defaults.
    pub fn reset(&mut self) {
        self.record = ApplicationRecord::default();
        self.errors = ErrorReport::default();
        self.phase = FormPhase::Editing;
        self.refresh_all_visibility();
    }

    fn refresh_all_visibility(&mut self) {
        self.visibility.clear();
        for index in 0..self.rules.len() {
            self.apply_rule(index);
        }
    }

    fn refresh_visibility_for(&mut self, path: &FieldPath) {
        for index in 0..self.rules.len() {
            if self.rules[index].governing == *path {
                self.apply_rule(index);
            }
        }
    }

    fn apply_rule(&mut self, index: usize) {
        let rule = &self.rules[index];
        let visible = flag_at(&self.record, &rule.governing)
            .map(|flag| rule.predicate.evaluate(&FieldValue::Flag(flag)))
            .unwrap_or(false);
        self.visibility
            .insert(rule.dependent.as_str().to_string(), visible);
    }
}

fn expect_text(path: &FieldPath, value: FieldValue) -> Result<String, FormError> {
    match value {
        FieldValue::Text(text) => Ok(text),
        _ => Err(FormError::WrongValueType {
            path: path.clone(),
            expected: "text",
        }),
    }
}

fn expect_flag(path: &FieldPath, value: FieldValue) -> Result<bool, FormError> {
    match value {
        FieldValue::Flag(flag) => Ok(flag),
        _ => Err(FormError::WrongValueType {
            path: path.clone(),
            expected: "flag",
        }),
    }
}

/// Year inputs arrive either typed or as raw text from the number control.
/// Non-numeric text is rejected here, before any range check runs.
fn expect_year(path: &FieldPath, value: FieldValue) -> Result<Option<i32>, FormError> {
    match value {
        FieldValue::Year(year) => Ok(year),
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i32>()
                .map(Some)
                .map_err(|_| FormError::NotANumber {
                    path: path.clone(),
                    value: text,
                })
        }
        _ => Err(FormError::WrongValueType {
            path: path.clone(),
            expected: "year",
        }),
    }
}

fn expect_choice(path: &FieldPath, value: FieldValue) -> Result<Option<JobPreference>, FormError> {
    match value {
        FieldValue::Choice(choice) => Ok(choice),
        FieldValue::Text(text) => {
            if text.trim().is_empty() {
                return Ok(None);
            }
            JobPreference::from_label(text.trim())
                .map(Some)
                .ok_or(FormError::WrongValueType {
                    path: path.clone(),
                    expected: "one of schools, events, homeTutor",
                })
        }
        _ => Err(FormError::WrongValueType {
            path: path.clone(),
            expected: "job preference",
        }),
    }
}

fn expect_file(
    path: &FieldPath,
    value: FieldValue,
) -> Result<Option<crate::form::domain::FileUpload>, FormError> {
    match value {
        FieldValue::File(upload) => Ok(upload),
        _ => Err(FormError::WrongValueType {
            path: path.clone(),
            expected: "file",
        }),
    }
}

fn write_field(
    record: &mut ApplicationRecord,
    path: &FieldPath,
    value: FieldValue,
) -> Result<(), FormError> {
    let raw = path.as_str();

    if let Some(rest) = raw.strip_prefix("references.") {
        return write_reference_field(record, path, rest, value);
    }

    match raw {
        paths::FULL_NAME => record.full_name = expect_text(path, value)?,
        paths::EMAIL => record.email = expect_text(path, value)?,
        paths::ADDRESS => record.address = expect_text(path, value)?,
        paths::PHONE => record.phone = expect_text(path, value)?,
        paths::JOB_PREFERENCE => record.job_preference = expect_choice(path, value)?,
        paths::EDUCATION_DEGREE => record.education.degree = expect_text(path, value)?,
        paths::EDUCATION_INSTITUTION => record.education.institution = expect_text(path, value)?,
        paths::EDUCATION_YEAR => record.education.year_of_graduation = expect_year(path, value)?,
        paths::CERTIFICATION_NAME => {
            record.certifications.certification_name = expect_text(path, value)?
        }
        paths::CERTIFYING_ORGANIZATION => {
            record.certifications.certifying_organization = expect_text(path, value)?
        }
        paths::CERTIFICATION_YEAR => {
            record.certifications.certification_year = expect_text(path, value)?
        }
        paths::STATEMENT_OF_PURPOSE => record.statement_of_purpose = expect_text(path, value)?,
        paths::PROFILE_PHOTO => record.profile_photo = expect_file(path, value)?,
        paths::IDENTITY_PHOTO => record.identity_photo = expect_file(path, value)?,
        paths::ACHIEVEMENTS => record.achievements = expect_text(path, value)?,
        paths::CULTURAL_EXPERIENCES => record.cultural_experiences = expect_text(path, value)?,
        "teachingSkills.classroomManagement" => {
            record.teaching_skills.classroom_management = expect_flag(path, value)?
        }
        "teachingSkills.curriculumDevelopment" => {
            record.teaching_skills.curriculum_development = expect_flag(path, value)?
        }
        "teachingSkills.lessonPlanning" => {
            record.teaching_skills.lesson_planning = expect_flag(path, value)?
        }
        "teachingSkills.assessmentTechniques" => {
            record.teaching_skills.assessment_techniques = expect_flag(path, value)?
        }
        paths::OTHER_TEACHING_SKILLS => record.other_teaching_skills = expect_text(path, value)?,
        "culturalKnowledge.specificCultures" => {
            record.cultural_knowledge.specific_cultures = expect_flag(path, value)?
        }
        "culturalKnowledge.culturalValues" => {
            record.cultural_knowledge.cultural_values = expect_flag(path, value)?
        }
        paths::FLUENCY_IN_LANGUAGES => {
            record.cultural_knowledge.fluency_in_languages = expect_flag(path, value)?
        }
        paths::LANGUAGE_DETAILS => {
            record.cultural_knowledge.language_details = expect_text(path, value)?
        }
        paths::OTHER_CULTURAL_SKILLS => record.other_cultural_skills = expect_text(path, value)?,
        "interpersonalSkills.communicationSkills" => {
            record.interpersonal_skills.communication_skills = expect_flag(path, value)?
        }
        "interpersonalSkills.empathy" => {
            record.interpersonal_skills.empathy = expect_flag(path, value)?
        }
        "interpersonalSkills.patience" => {
            record.interpersonal_skills.patience = expect_flag(path, value)?
        }
        "interpersonalSkills.culturalSensitivity" => {
            record.interpersonal_skills.cultural_sensitivity = expect_flag(path, value)?
        }
        paths::OTHER_INTERPERSONAL_SKILLS => {
            record.other_interpersonal_skills = expect_text(path, value)?
        }
        _ => return Err(FormError::UnknownField(path.clone())),
    }

    Ok(())
}

fn write_reference_field(
    record: &mut ApplicationRecord,
    path: &FieldPath,
    rest: &str,
    value: FieldValue,
) -> Result<(), FormError> {
    let unknown = || FormError::UnknownField(path.clone());

    let (index, field) = rest.split_once('.').ok_or_else(unknown)?;
    let index: usize = index.parse().map_err(|_| unknown())?;
    let entry = record.references.get_mut(index).ok_or_else(unknown)?;

    match field {
        "name" => entry.name = expect_text(path, value)?,
        "title" => entry.title = expect_text(path, value)?,
        "organization" => entry.organization = expect_text(path, value)?,
        "contactInfo" => entry.contact_info = expect_text(path, value)?,
        _ => return Err(unknown()),
    }

    Ok(())
}

/// Current value of a boolean field, for visibility rule evaluation.
/// Unknown or non-flag paths yield `None`.
fn flag_at(record: &ApplicationRecord, path: &FieldPath) -> Option<bool> {
    let flag = match path.as_str() {
        "teachingSkills.classroomManagement" => record.teaching_skills.classroom_management,
        "teachingSkills.curriculumDevelopment" => record.teaching_skills.curriculum_development,
        "teachingSkills.lessonPlanning" => record.teaching_skills.lesson_planning,
        "teachingSkills.assessmentTechniques" => record.teaching_skills.assessment_techniques,
        "culturalKnowledge.specificCultures" => record.cultural_knowledge.specific_cultures,
        "culturalKnowledge.culturalValues" => record.cultural_knowledge.cultural_values,
        paths::FLUENCY_IN_LANGUAGES => record.cultural_knowledge.fluency_in_languages,
        "interpersonalSkills.communicationSkills" => {
            record.interpersonal_skills.communication_skills
        }
        "interpersonalSkills.empathy" => record.interpersonal_skills.empathy,
        "interpersonalSkills.patience" => record.interpersonal_skills.patience,
        "interpersonalSkills.culturalSensitivity" => {
            record.interpersonal_skills.cultural_sensitivity
        }
        _ => return None,
    };
    Some(flag)
}
