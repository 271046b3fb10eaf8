//! Application-form intake: typed record, schema validation, and the
//! controller gluing input events to error and visibility state.
//!
//! Everything here is synchronous and client-side. The controller owns the
//! only mutable copy of the record; the validator reads snapshots and the
//! submit handler receives the accepted record exactly once.

pub mod controller;
pub mod domain;
pub mod path;
pub mod submit;
pub mod validation;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use controller::{FormController, FormError, FormPhase};
pub use domain::{
    ApplicationRecord, Certifications, CulturalKnowledge, Education, FieldValue, FileUpload,
    InterpersonalSkills, JobPreference, ReferenceEntry, Section, TeachingSkills, REFERENCE_COUNT,
};
pub use path::{paths, FieldPath};
pub use submit::{LoggingSubmitHandler, SubmitError, SubmitHandler};
pub use validation::{
    ErrorKind, ErrorReport, SchemaValidator, ValidationConfig, ValidationError, ValidationResult,
};
pub use visibility::{default_rules, VisibilityPredicate, VisibilityRule};
