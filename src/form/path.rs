use std::fmt;

use serde::{Deserialize, Serialize};

/// Dotted/indexed address of a field inside the application record,
/// e.g. `references.0.name` or `culturalKnowledge.fluencyInLanguages`.
///
/// Segment names match the wire spelling of the record fields so error
/// reports can be surfaced next to the matching form control.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FieldPath(pub String);

impl FieldPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Address a field inside the fixed-length references sequence.
    pub fn reference(index: usize, field: &str) -> Self {
        Self(format!("{}.{index}.{field}", paths::REFERENCES))
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldPath {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FieldPath {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Well-known paths for the top-level record fields and group roots.
pub mod paths {
    pub const FULL_NAME: &str = "fullName";
    pub const EMAIL: &str = "email";
    pub const ADDRESS: &str = "address";
    pub const PHONE: &str = "phone";
    pub const JOB_PREFERENCE: &str = "jobPreference";
    pub const EDUCATION_DEGREE: &str = "education.degree";
    pub const EDUCATION_INSTITUTION: &str = "education.institution";
    pub const EDUCATION_YEAR: &str = "education.yearOfGraduation";
    pub const CERTIFICATION_NAME: &str = "certifications.certificationName";
    pub const CERTIFYING_ORGANIZATION: &str = "certifications.certifyingOrganization";
    pub const CERTIFICATION_YEAR: &str = "certifications.certificationYear";
    pub const STATEMENT_OF_PURPOSE: &str = "statementOfPurpose";
    pub const PROFILE_PHOTO: &str = "ppPhoto";
    pub const IDENTITY_PHOTO: &str = "identityPhoto";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const CULTURAL_EXPERIENCES: &str = "culturalExperiences";
    pub const TEACHING_SKILLS: &str = "teachingSkills";
    pub const OTHER_TEACHING_SKILLS: &str = "otherTeachingSkills";
    pub const CULTURAL_KNOWLEDGE: &str = "culturalKnowledge";
    pub const LANGUAGE_DETAILS: &str = "culturalKnowledge.languageDetails";
    pub const FLUENCY_IN_LANGUAGES: &str = "culturalKnowledge.fluencyInLanguages";
    pub const OTHER_CULTURAL_SKILLS: &str = "otherCulturalSkills";
    pub const INTERPERSONAL_SKILLS: &str = "interpersonalSkills";
    pub const OTHER_INTERPERSONAL_SKILLS: &str = "otherInterpersonalSkills";
    pub const REFERENCES: &str = "references";
}
