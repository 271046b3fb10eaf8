use serde::{Deserialize, Serialize};

/// Desired placement for the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JobPreference {
    Schools,
    Events,
    HomeTutor,
}

impl JobPreference {
    pub const fn label(self) -> &'static str {
        match self {
            JobPreference::Schools => "schools",
            JobPreference::Events => "events",
            JobPreference::HomeTutor => "homeTutor",
        }
    }

    /// Parse the wire spelling used by the select control.
    pub fn from_label(value: &str) -> Option<Self> {
        match value {
            "schools" => Some(JobPreference::Schools),
            "events" => Some(JobPreference::Events),
            "homeTutor" => Some(JobPreference::HomeTutor),
            _ => None,
        }
    }
}

/// Education history. Every field is optional; only a declared graduation
/// year is range-checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub year_of_graduation: Option<i32>,
}

/// Optional professional certification details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certifications {
    pub certification_name: String,
    pub certifying_organization: String,
    pub certification_year: String,
}

/// Teaching-skill checklist. At least one flag must be set at validation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeachingSkills {
    pub classroom_management: bool,
    pub curriculum_development: bool,
    pub lesson_planning: bool,
    pub assessment_techniques: bool,
}

impl TeachingSkills {
    pub fn any_selected(&self) -> bool {
        self.classroom_management
            || self.curriculum_development
            || self.lesson_planning
            || self.assessment_techniques
    }
}

/// Cultural-knowledge checklist. `language_details` is only shown when the
/// fluency flag is set; it never participates in the group refinement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalKnowledge {
    pub specific_cultures: bool,
    pub cultural_values: bool,
    pub fluency_in_languages: bool,
    pub language_details: String,
}

impl CulturalKnowledge {
    pub fn any_selected(&self) -> bool {
        self.specific_cultures || self.cultural_values || self.fluency_in_languages
    }
}

/// Interpersonal-skill checklist. At least one flag must be set at validation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterpersonalSkills {
    pub communication_skills: bool,
    pub empathy: bool,
    pub patience: bool,
    pub cultural_sensitivity: bool,
}

impl InterpersonalSkills {
    pub fn any_selected(&self) -> bool {
        self.communication_skills || self.empathy || self.patience || self.cultural_sensitivity
    }
}

/// One entry of the fixed-length references sequence. Entries may be left
/// blank; only the sequence length is enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceEntry {
    pub name: String,
    pub title: String,
    pub organization: String,
    pub contact_info: String,
}

/// Opaque handle produced by the file picker. The validator only inspects
/// the byte length and the extension, never file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpload {
    pub file_name: String,
    pub byte_len: u64,
    content_type: Option<String>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, byte_len: u64) -> Self {
        Self {
            file_name: file_name.into(),
            byte_len,
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: mime::Mime) -> Self {
        self.content_type = Some(content_type.essence_str().to_string());
        self
    }

    pub fn content_type(&self) -> Option<mime::Mime> {
        self.content_type.as_deref().and_then(|raw| raw.parse().ok())
    }

    /// Lowercased extension of the file name, without the dot.
    pub fn extension(&self) -> Option<String> {
        let (_, ext) = self.file_name.rsplit_once('.')?;
        if ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

/// The live application record. Created with all-default values when the
/// form mounts, mutated field-by-field through the controller, and handed
/// to the submit handler read-only once validation passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub job_preference: Option<JobPreference>,
    pub education: Education,
    pub certifications: Certifications,
    pub statement_of_purpose: String,
    #[serde(rename = "ppPhoto")]
    pub profile_photo: Option<FileUpload>,
    pub identity_photo: Option<FileUpload>,
    pub achievements: String,
    pub cultural_experiences: String,
    pub teaching_skills: TeachingSkills,
    pub other_teaching_skills: String,
    pub cultural_knowledge: CulturalKnowledge,
    pub other_cultural_skills: String,
    pub interpersonal_skills: InterpersonalSkills,
    pub other_interpersonal_skills: String,
    pub references: Vec<ReferenceEntry>,
}

/// Number of reference entries the form always carries.
pub const REFERENCE_COUNT: usize = 2;

impl Default for ApplicationRecord {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            address: String::new(),
            phone: String::new(),
            job_preference: None,
            education: Education::default(),
            certifications: Certifications::default(),
            statement_of_purpose: String::new(),
            profile_photo: None,
            identity_photo: None,
            achievements: String::new(),
            cultural_experiences: String::new(),
            teaching_skills: TeachingSkills::default(),
            other_teaching_skills: String::new(),
            cultural_knowledge: CulturalKnowledge::default(),
            other_cultural_skills: String::new(),
            interpersonal_skills: InterpersonalSkills::default(),
            other_interpersonal_skills: String::new(),
            references: vec![ReferenceEntry::default(); REFERENCE_COUNT],
        }
    }
}

/// Tagged value accepted by `FormController::set_field`. The controller
/// checks the shape against the addressed field before writing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Year(Option<i32>),
    Choice(Option<JobPreference>),
    File(Option<FileUpload>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }
}

/// Top-level form sections, in declaration order. Section-wise validation
/// backs wizard-style flows that check one step at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Personal,
    JobPreference,
    Education,
    Statement,
    Uploads,
    Skills,
    References,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Personal,
        Section::JobPreference,
        Section::Education,
        Section::Statement,
        Section::Uploads,
        Section::Skills,
        Section::References,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Section::Personal => "personal",
            Section::JobPreference => "job_preference",
            Section::Education => "education",
            Section::Statement => "statement",
            Section::Uploads => "uploads",
            Section::Skills => "skills",
            Section::References => "references",
        }
    }
}
