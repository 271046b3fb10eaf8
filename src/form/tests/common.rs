use std::sync::{Arc, Mutex};

use crate::form::controller::FormController;
use crate::form::domain::{
    ApplicationRecord, CulturalKnowledge, Education, FieldValue, FileUpload, InterpersonalSkills,
    JobPreference, TeachingSkills,
};
use crate::form::path::paths;
use crate::form::submit::{SubmitError, SubmitHandler};
use crate::form::validation::{SchemaValidator, ValidationConfig};

pub(super) fn photo(file_name: &str, byte_len: u64) -> FileUpload {
    FileUpload::new(file_name, byte_len)
}

pub(super) fn validation_config() -> ValidationConfig {
    ValidationConfig::default()
}

pub(super) fn validator() -> SchemaValidator {
    SchemaValidator::new(validation_config())
}

/// A record that satisfies every constraint.
pub(super) fn valid_record() -> ApplicationRecord {
    ApplicationRecord {
        full_name: "Amara Diallo".to_string(),
        email: "amara.diallo@example.com".to_string(),
        address: "12 Harbor Lane, Des Moines, IA".to_string(),
        phone: "+1 555-123-4567".to_string(),
        job_preference: Some(JobPreference::HomeTutor),
        education: Education {
            degree: "BA Linguistics".to_string(),
            institution: "Drake University".to_string(),
            year_of_graduation: Some(2019),
        },
        statement_of_purpose: "I have tutored students one on one for five years and want to \
                               keep helping learners find their footing in new cultures."
            .to_string(),
        profile_photo: Some(photo("portrait.jpg", 180 * 1024)),
        identity_photo: Some(photo("id-card.png", 220 * 1024)),
        teaching_skills: TeachingSkills {
            lesson_planning: true,
            ..TeachingSkills::default()
        },
        cultural_knowledge: CulturalKnowledge {
            fluency_in_languages: true,
            language_details: "French (native), English (fluent)".to_string(),
            ..CulturalKnowledge::default()
        },
        interpersonal_skills: InterpersonalSkills {
            patience: true,
            ..InterpersonalSkills::default()
        },
        ..ApplicationRecord::default()
    }
}

#[derive(Default)]
pub(super) struct MemoryHandler {
    deliveries: Mutex<Vec<ApplicationRecord>>,
}

impl MemoryHandler {
    pub(super) fn deliveries(&self) -> Vec<ApplicationRecord> {
        self.deliveries.lock().expect("handler mutex poisoned").clone()
    }
}

impl SubmitHandler for MemoryHandler {
    fn deliver(&self, record: &ApplicationRecord) -> Result<(), SubmitError> {
        self.deliveries
            .lock()
            .expect("handler mutex poisoned")
            .push(record.clone());
        Ok(())
    }
}

pub(super) struct FailingHandler;

impl SubmitHandler for FailingHandler {
    fn deliver(&self, _record: &ApplicationRecord) -> Result<(), SubmitError> {
        Err(SubmitError::Delivery("transport offline".to_string()))
    }
}

pub(super) fn controller() -> (FormController<MemoryHandler>, Arc<MemoryHandler>) {
    let handler = Arc::new(MemoryHandler::default());
    let form = FormController::new(handler.clone(), validation_config());
    (form, handler)
}

/// Drive the controller to a fully valid record through field writes.
pub(super) fn fill_valid_fields<H: SubmitHandler>(form: &mut FormController<H>) {
    let record = valid_record();
    form.set_field(paths::FULL_NAME, FieldValue::text(record.full_name))
        .expect("write full name");
    form.set_field(paths::EMAIL, FieldValue::text(record.email))
        .expect("write email");
    form.set_field(paths::ADDRESS, FieldValue::text(record.address))
        .expect("write address");
    form.set_field(paths::PHONE, FieldValue::text(record.phone))
        .expect("write phone");
    form.set_field(paths::JOB_PREFERENCE, FieldValue::Choice(record.job_preference))
        .expect("write job preference");
    form.set_field(
        paths::EDUCATION_YEAR,
        FieldValue::Year(record.education.year_of_graduation),
    )
    .expect("write graduation year");
    form.set_field(
        paths::STATEMENT_OF_PURPOSE,
        FieldValue::text(record.statement_of_purpose),
    )
    .expect("write statement");
    form.set_field(paths::PROFILE_PHOTO, FieldValue::File(record.profile_photo))
        .expect("write profile photo");
    form.set_field(paths::IDENTITY_PHOTO, FieldValue::File(record.identity_photo))
        .expect("write identity photo");
    form.set_field("teachingSkills.lessonPlanning", FieldValue::Flag(true))
        .expect("write teaching skill");
    form.set_field(paths::FLUENCY_IN_LANGUAGES, FieldValue::Flag(true))
        .expect("write fluency flag");
    form.set_field(
        paths::LANGUAGE_DETAILS,
        FieldValue::text(record.cultural_knowledge.language_details),
    )
    .expect("write language details");
    form.set_field("interpersonalSkills.patience", FieldValue::Flag(true))
        .expect("write interpersonal skill");
}
