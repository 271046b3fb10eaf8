//! Client-side intake engine for the tutoring-placement application form.
//!
//! The crate exposes three cooperating pieces: the typed
//! [`form::ApplicationRecord`], the declarative [`form::SchemaValidator`]
//! producing field-path-keyed error reports, and the
//! [`form::FormController`] owning the live record, surfaced errors, and
//! conditional field visibility.

pub mod config;
pub mod error;
pub mod form;
pub mod telemetry;
