use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::form::domain::REFERENCE_COUNT;

/// Upload ceiling applied to both photo fields.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 2 * 1024 * 1024;

/// Earliest graduation year the form accepts.
pub const GRADUATION_YEAR_MIN: i32 = 1990;

/// Bounds applied by the schema validator. A plain data struct so callers
/// can dial individual limits without touching the rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationConfig {
    pub full_name_min_chars: usize,
    pub statement_min_chars: usize,
    pub graduation_year_min: i32,
    pub graduation_year_max: i32,
    pub max_upload_bytes: u64,
    pub accepted_photo_extensions: Vec<String>,
    pub required_reference_count: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            full_name_min_chars: 2,
            statement_min_chars: 50,
            graduation_year_min: GRADUATION_YEAR_MIN,
            graduation_year_max: Local::now().date_naive().year(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            accepted_photo_extensions: vec![
                "jpg".to_string(),
                "jpeg".to_string(),
                "png".to_string(),
            ],
            required_reference_count: REFERENCE_COUNT,
        }
    }
}

impl ValidationConfig {
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.accepted_photo_extensions
            .iter()
            .any(|accepted| accepted.eq_ignore_ascii_case(extension))
    }
}
