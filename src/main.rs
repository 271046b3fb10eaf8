use std::sync::Arc;

use tracing::{info, warn};

use tutor_intake::config::AppConfig;
use tutor_intake::error::AppError;
use tutor_intake::form::{
    paths, FieldValue, FileUpload, FormController, JobPreference, LoggingSubmitHandler,
};
use tutor_intake::telemetry;

fn main() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    info!(environment = config.environment.label(), "intake demo starting");
    run_demo(&config)
}

/// Scripted intake session: submit an empty form to show the surfaced
/// error mapping, then fill every section and submit again.
fn run_demo(config: &AppConfig) -> Result<(), AppError> {
    let handler = Arc::new(LoggingSubmitHandler);
    let mut form = FormController::new(handler, config.intake.validation_config());

    let first_attempt = form.submit()?;
    if let Some(report) = first_attempt.report() {
        warn!(error_count = report.len(), "empty form rejected");
        for error in report {
            info!(path = %error.path, message = %error.message, "field error");
        }
    }

    form.set_field(paths::FULL_NAME, FieldValue::text("Amara Diallo"))?;
    form.set_field(paths::EMAIL, FieldValue::text("amara.diallo@example.com"))?;
    form.set_field(paths::ADDRESS, FieldValue::text("12 Harbor Lane, Des Moines, IA"))?;
    form.set_field(paths::PHONE, FieldValue::text("+1 555-123-4567"))?;
    form.set_field(
        paths::JOB_PREFERENCE,
        FieldValue::Choice(Some(JobPreference::HomeTutor)),
    )?;
    form.set_field(paths::EDUCATION_DEGREE, FieldValue::text("BA Linguistics"))?;
    form.set_field(
        paths::EDUCATION_INSTITUTION,
        FieldValue::text("Drake University"),
    )?;
    form.set_field(paths::EDUCATION_YEAR, FieldValue::Year(Some(2019)))?;
    form.set_field(
        paths::STATEMENT_OF_PURPOSE,
        FieldValue::text(
            "I have spent the last five years tutoring students one on one and \
             want to keep helping learners find their footing in new cultures.",
        ),
    )?;
    form.set_field(
        paths::PROFILE_PHOTO,
        FieldValue::File(Some(
            FileUpload::new("portrait.jpg", 180 * 1024).with_content_type(mime::IMAGE_JPEG),
        )),
    )?;
    form.set_field(
        paths::IDENTITY_PHOTO,
        FieldValue::File(Some(
            FileUpload::new("id-card.png", 220 * 1024).with_content_type(mime::IMAGE_PNG),
        )),
    )?;
    form.set_field("teachingSkills.lessonPlanning", FieldValue::Flag(true))?;

    info!(
        language_details_visible = form.is_visible(paths::LANGUAGE_DETAILS),
        "before checking the fluency flag"
    );
    form.set_field(paths::FLUENCY_IN_LANGUAGES, FieldValue::Flag(true))?;
    info!(
        language_details_visible = form.is_visible(paths::LANGUAGE_DETAILS),
        "after checking the fluency flag"
    );
    form.set_field(
        paths::LANGUAGE_DETAILS,
        FieldValue::text("French (native), English (fluent)"),
    )?;

    form.set_field("interpersonalSkills.patience", FieldValue::Flag(true))?;
    form.set_field("references.0.name", FieldValue::text("N. Okafor"))?;
    form.set_field("references.0.contactInfo", FieldValue::text("okafor@example.com"))?;
    form.set_field("references.1.name", FieldValue::text("J. Meyer"))?;
    form.set_field("references.1.contactInfo", FieldValue::text("meyer@example.com"))?;

    let outcome = form.submit()?;
    info!(
        accepted = outcome.is_accepted(),
        phase = form.phase().label(),
        "final submission"
    );

    Ok(())
}
