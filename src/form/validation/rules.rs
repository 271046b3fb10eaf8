use once_cell::sync::Lazy;
use regex::Regex;

use super::config::ValidationConfig;
use super::report::{ErrorKind, ErrorReport, ValidationError};
use crate::form::domain::{ApplicationRecord, FileUpload, Section};
use crate::form::path::paths;

// Optional country code, optional parenthesized area code, then 5-15
// digits/separators.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?\d{1,4}[\s-]?)?(\(?\d{1,4}\)?[\s-]?)?[\d\s-]{5,15}$").unwrap()
});

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Run one section's rules, appending failures in declaration order.
pub(crate) fn check_section(
    section: Section,
    record: &ApplicationRecord,
    config: &ValidationConfig,
    report: &mut ErrorReport,
) {
    match section {
        Section::Personal => check_personal(record, config, report),
        Section::JobPreference => check_job_preference(record, report),
        Section::Education => check_education(record, config, report),
        Section::Statement => check_statement(record, config, report),
        Section::Uploads => check_uploads(record, config, report),
        Section::Skills => check_skill_groups(record, report),
        Section::References => check_references(record, config, report),
    }
}

fn check_personal(record: &ApplicationRecord, config: &ValidationConfig, report: &mut ErrorReport) {
    let full_name = record.full_name.trim();
    if full_name.is_empty() {
        report.push(ValidationError::new(
            paths::FULL_NAME,
            ErrorKind::Required,
            "Full Name is required",
        ));
    } else if full_name.chars().count() < config.full_name_min_chars {
        report.push(ValidationError::new(
            paths::FULL_NAME,
            ErrorKind::TooShort {
                min: config.full_name_min_chars,
            },
            format!(
                "Full Name must be at least {} characters",
                config.full_name_min_chars
            ),
        ));
    }

    let email = record.email.trim();
    if email.is_empty() {
        report.push(ValidationError::new(
            paths::EMAIL,
            ErrorKind::Required,
            "Email is required",
        ));
    } else if !EMAIL_REGEX.is_match(email) {
        report.push(ValidationError::new(
            paths::EMAIL,
            ErrorKind::InvalidFormat,
            "Invalid email address",
        ));
    }

    if record.address.trim().is_empty() {
        report.push(ValidationError::new(
            paths::ADDRESS,
            ErrorKind::Required,
            "Address is required",
        ));
    }

    let phone = record.phone.trim();
    if phone.is_empty() {
        report.push(ValidationError::new(
            paths::PHONE,
            ErrorKind::Required,
            "Phone Number is required",
        ));
    } else if !PHONE_REGEX.is_match(phone) {
        report.push(ValidationError::new(
            paths::PHONE,
            ErrorKind::InvalidFormat,
            "Invalid Number!",
        ));
    }
}

fn check_job_preference(record: &ApplicationRecord, report: &mut ErrorReport) {
    if record.job_preference.is_none() {
        report.push(ValidationError::new(
            paths::JOB_PREFERENCE,
            ErrorKind::Required,
            "Job Preference is required",
        ));
    }
}

fn check_education(record: &ApplicationRecord, config: &ValidationConfig, report: &mut ErrorReport) {
    if let Some(year) = record.education.year_of_graduation {
        if year < config.graduation_year_min || year > config.graduation_year_max {
            report.push(ValidationError::new(
                paths::EDUCATION_YEAR,
                ErrorKind::OutOfRange {
                    min: config.graduation_year_min,
                    max: config.graduation_year_max,
                },
                format!(
                    "Year of Graduation must be between {} and {}",
                    config.graduation_year_min, config.graduation_year_max
                ),
            ));
        }
    }
}

fn check_statement(record: &ApplicationRecord, config: &ValidationConfig, report: &mut ErrorReport) {
    let statement = record.statement_of_purpose.trim();
    if statement.is_empty() {
        report.push(ValidationError::new(
            paths::STATEMENT_OF_PURPOSE,
            ErrorKind::Required,
            "Statement of Purpose is required",
        ));
    } else if statement.chars().count() < config.statement_min_chars {
        report.push(ValidationError::new(
            paths::STATEMENT_OF_PURPOSE,
            ErrorKind::TooShort {
                min: config.statement_min_chars,
            },
            "Please provide a brief statement",
        ));
    }
}

fn check_uploads(record: &ApplicationRecord, config: &ValidationConfig, report: &mut ErrorReport) {
    check_photo(
        record.profile_photo.as_ref(),
        paths::PROFILE_PHOTO,
        "Profile photo",
        config,
        report,
    );
    check_photo(
        record.identity_photo.as_ref(),
        paths::IDENTITY_PHOTO,
        "Identity photo",
        config,
        report,
    );
}

fn check_photo(
    upload: Option<&FileUpload>,
    path: &str,
    label: &str,
    config: &ValidationConfig,
    report: &mut ErrorReport,
) {
    let Some(upload) = upload else {
        report.push(ValidationError::new(
            path,
            ErrorKind::Missing,
            format!("{label} is required"),
        ));
        return;
    };

    if upload.byte_len > config.max_upload_bytes {
        report.push(ValidationError::new(
            path,
            ErrorKind::TooLarge {
                max_bytes: config.max_upload_bytes,
            },
            "Max file size is 2MB",
        ));
    }

    let accepted = upload
        .extension()
        .is_some_and(|ext| config.accepts_extension(&ext));
    if !accepted {
        report.push(ValidationError::new(
            path,
            ErrorKind::InvalidFormat,
            format!(
                "{label} must be one of: {}",
                config.accepted_photo_extensions.join(", ")
            ),
        ));
    }
}

fn check_skill_groups(record: &ApplicationRecord, report: &mut ErrorReport) {
    if !record.teaching_skills.any_selected() {
        report.push(ValidationError::new(
            paths::TEACHING_SKILLS,
            ErrorKind::GroupEmpty,
            "At least one teaching skill must be selected.",
        ));
    }
    if !record.cultural_knowledge.any_selected() {
        report.push(ValidationError::new(
            paths::CULTURAL_KNOWLEDGE,
            ErrorKind::GroupEmpty,
            "At least one cultural knowledge must be selected.",
        ));
    }
    if !record.interpersonal_skills.any_selected() {
        report.push(ValidationError::new(
            paths::INTERPERSONAL_SKILLS,
            ErrorKind::GroupEmpty,
            "At least one interpersonal skill must be selected.",
        ));
    }
}

fn check_references(
    record: &ApplicationRecord,
    config: &ValidationConfig,
    report: &mut ErrorReport,
) {
    if record.references.len() != config.required_reference_count {
        report.push(ValidationError::new(
            paths::REFERENCES,
            ErrorKind::WrongLength {
                expected: config.required_reference_count,
            },
            format!(
                "Exactly {} references are required",
                config.required_reference_count
            ),
        ));
    }
}
