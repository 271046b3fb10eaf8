use super::common::*;
use crate::form::controller::{FormError, FormPhase};
use crate::form::domain::{ApplicationRecord, FieldValue};
use crate::form::path::{paths, FieldPath};
use crate::form::validation::ErrorKind;

#[test]
fn submit_with_one_invalid_field_flags_only_that_path() {
    let (mut form, _) = controller();
    fill_valid_fields(&mut form);
    form.set_field(paths::PHONE, FieldValue::text("abc"))
        .expect("write phone");

    let result = form.submit().expect("handler not involved on rejection");

    let report = result.report().expect("invalid phone must reject");
    assert_eq!(report.paths(), vec![paths::PHONE]);
    assert_eq!(form.error_paths(), vec![paths::PHONE]);
    assert_eq!(form.phase(), FormPhase::Editing);
}

#[test]
fn touching_a_field_clears_only_its_own_error() {
    let (mut form, _) = controller();

    form.submit().expect("first submit");
    assert!(form.error_message(paths::FULL_NAME).is_some());
    assert!(form.error_message(paths::EMAIL).is_some());

    form.set_field(paths::FULL_NAME, FieldValue::text("Amara Diallo"))
        .expect("write full name");

    // Cleared on touch, not re-validated; the sibling error stays until
    // the next submit.
    assert!(form.error_message(paths::FULL_NAME).is_none());
    assert!(form.error_message(paths::EMAIL).is_some());
}

#[test]
fn touching_a_field_does_not_revalidate_it() {
    let (mut form, _) = controller();

    form.submit().expect("first submit");
    form.set_field(paths::PHONE, FieldValue::text("abc"))
        .expect("write phone");

    // Still invalid, but the error is gone until the next full validate.
    assert!(form.error_message(paths::PHONE).is_none());
}

#[test]
fn successful_submit_forwards_the_record_and_closes_the_session() {
    let (mut form, handler) = controller();
    fill_valid_fields(&mut form);

    let result = form.submit().expect("delivery succeeds");

    assert!(result.is_accepted());
    assert_eq!(form.phase(), FormPhase::Submitted);
    let deliveries = handler.deliveries();
    assert_eq!(deliveries.len(), 1);
    assert_eq!(deliveries[0], *form.record());
}

#[test]
fn rejected_submit_forwards_nothing() {
    let (mut form, handler) = controller();

    let result = form.submit().expect("validation failure is not a submit error");

    assert!(!result.is_accepted());
    assert!(handler.deliveries().is_empty());
}

#[test]
fn mutation_after_acceptance_is_refused() {
    let (mut form, _) = controller();
    fill_valid_fields(&mut form);
    form.submit().expect("delivery succeeds");

    let result = form.set_field(paths::FULL_NAME, FieldValue::text("Changed"));

    assert_eq!(result, Err(FormError::SessionClosed));
}

#[test]
fn resubmitting_a_closed_session_does_not_deliver_twice() {
    let (mut form, handler) = controller();
    fill_valid_fields(&mut form);

    form.submit().expect("delivery succeeds");
    let again = form.submit().expect("closed session resubmit");

    assert!(again.is_accepted());
    assert_eq!(handler.deliveries().len(), 1);
}

#[test]
fn reset_returns_to_a_fresh_editing_session() {
    let (mut form, _) = controller();
    fill_valid_fields(&mut form);
    form.submit().expect("delivery succeeds");

    form.reset();

    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(*form.record(), ApplicationRecord::default());
    assert!(form.errors().is_empty());
    assert!(!form.is_visible(paths::LANGUAGE_DETAILS));
}

#[test]
fn failed_delivery_keeps_the_session_editable() {
    let handler = std::sync::Arc::new(FailingHandler);
    let mut form =
        crate::form::controller::FormController::new(handler, validation_config());
    fill_valid_fields(&mut form);

    let result = form.submit();

    assert!(result.is_err());
    assert_eq!(form.phase(), FormPhase::Editing);
}

#[test]
fn unknown_path_is_rejected() {
    let (mut form, _) = controller();

    let result = form.set_field("noSuchField", FieldValue::text("x"));

    assert_eq!(
        result,
        Err(FormError::UnknownField(FieldPath::from("noSuchField")))
    );
}

#[test]
fn reference_index_out_of_bounds_is_unknown() {
    let (mut form, _) = controller();

    let result = form.set_field("references.2.name", FieldValue::text("x"));

    assert!(matches!(result, Err(FormError::UnknownField(_))));
}

#[test]
fn reference_fields_are_addressable_by_index() {
    let (mut form, _) = controller();

    form.set_field(FieldPath::reference(1, "contactInfo"), FieldValue::text("okafor@example.com"))
        .expect("write reference contact");

    assert_eq!(form.record().references[1].contact_info, "okafor@example.com");
}

#[test]
fn flag_value_on_a_text_field_is_a_shape_error() {
    let (mut form, _) = controller();

    let result = form.set_field(paths::FULL_NAME, FieldValue::Flag(true));

    assert!(matches!(
        result,
        Err(FormError::WrongValueType { expected: "text", .. })
    ));
}

#[test]
fn non_numeric_year_text_is_rejected_before_any_range_check() {
    let (mut form, _) = controller();

    let result = form.set_field(paths::EDUCATION_YEAR, FieldValue::text("abc"));

    assert!(matches!(result, Err(FormError::NotANumber { .. })));
    assert_eq!(form.record().education.year_of_graduation, None);
}

#[test]
fn year_text_is_parsed_and_blank_clears_the_field() {
    let (mut form, _) = controller();

    form.set_field(paths::EDUCATION_YEAR, FieldValue::text(" 2005 "))
        .expect("numeric text parses");
    assert_eq!(form.record().education.year_of_graduation, Some(2005));

    form.set_field(paths::EDUCATION_YEAR, FieldValue::text(""))
        .expect("blank clears");
    assert_eq!(form.record().education.year_of_graduation, None);
}

#[test]
fn out_of_range_year_is_stored_and_rejected_at_submit() {
    let (mut form, _) = controller();
    fill_valid_fields(&mut form);
    form.set_field(paths::EDUCATION_YEAR, FieldValue::Year(Some(1989)))
        .expect("write year");

    let result = form.submit().expect("rejection is not a submit error");

    let report = result.report().expect("1989 must reject");
    assert!(matches!(
        report.kind_for(paths::EDUCATION_YEAR),
        Some(ErrorKind::OutOfRange { min: 1990, .. })
    ));
}

#[test]
fn job_preference_accepts_the_wire_spelling() {
    let (mut form, _) = controller();

    form.set_field(paths::JOB_PREFERENCE, FieldValue::text("homeTutor"))
        .expect("known label parses");
    assert_eq!(
        form.record().job_preference,
        Some(crate::form::domain::JobPreference::HomeTutor)
    );

    let result = form.set_field(paths::JOB_PREFERENCE, FieldValue::text("astronaut"));
    assert!(matches!(result, Err(FormError::WrongValueType { .. })));
}
