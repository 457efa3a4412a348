use profile_form_core::domain::SequentialIdGenerator;
use profile_form_core::editor::{reduce, AddressEditor, FormAction, FormState, SaveOutcome};
use profile_form_core::error::ProfileError;
use profile_form_core::models::{AddressDraft, AddressType, Country};
use std::sync::Arc;

fn editor() -> AddressEditor {
    AddressEditor::new(Arc::new(SequentialIdGenerator::default()))
}

fn add(editor: &mut AddressEditor, street: &str, city: &str) -> Result<SaveOutcome, ProfileError> {
    editor.open_for_add();
    editor.update_draft(|d| {
        d.street_address = street.to_string();
        d.city = city.to_string();
        d.state = "NY".to_string();
        d.zip_code = "10001".to_string();
    });
    editor.save_draft()
}

#[test]
fn test_addresses_keep_insertion_order() {
    let mut editor = editor();
    add(&mut editor, "1 First St", "New York").unwrap();
    add(&mut editor, "2 Second St", "New York").unwrap();
    add(&mut editor, "3 Third St", "New York").unwrap();

    let streets: Vec<_> = editor
        .addresses()
        .iter()
        .map(|a| a.street_address.as_str())
        .collect();
    assert_eq!(streets, vec!["1 First St", "2 Second St", "3 Third St"]);

    editor.remove_at(1);
    let ids: Vec<_> = editor
        .addresses()
        .iter()
        .map(|a| a.id.as_ref().unwrap().as_str().to_string())
        .collect();
    assert_eq!(ids, vec!["addr-1", "addr-3"]);
}

#[test]
fn test_duplicate_detection_ignores_type_and_region() {
    let mut editor = editor();
    add(&mut editor, "1 First St", "New York").unwrap();

    editor.open_for_add();
    editor.update_draft(|d| {
        d.address_type = AddressType::Billing;
        d.street_address = "1 First St".to_string();
        d.city = "New York".to_string();
        d.state = "CA".to_string();
        d.zip_code = "90210".to_string();
    });
    let err = editor.save_draft().unwrap_err();
    assert!(matches!(err, ProfileError::DuplicateAddress));
    assert_eq!(editor.addresses().len(), 1);
    assert!(editor.state().is_modal_open());

    editor.set_draft_country(Country::Other);
    assert_eq!(editor.save_draft().unwrap(), SaveOutcome::Inserted(1));
    assert_eq!(editor.state().address_error, None);
}

#[test]
fn test_edit_that_collides_with_sibling_is_rejected() {
    let mut editor = editor();
    add(&mut editor, "1 First St", "New York").unwrap();
    add(&mut editor, "2 Second St", "New York").unwrap();

    editor.open_for_edit_at(1);
    editor.update_draft(|d| d.street_address = "1 First St".to_string());
    assert!(matches!(editor.save_draft(), Err(ProfileError::DuplicateAddress)));
    assert_eq!(editor.addresses()[1].street_address, "2 Second St");

    // Reopening clears the inline error
    editor.close();
    editor.open_for_edit_at(0);
    assert_eq!(editor.state().address_error, None);
    assert_eq!(editor.state().editing_address(), Some(&editor.addresses()[0]));
}

#[test]
fn test_edit_draft_starts_from_existing_entry() {
    let mut editor = editor();
    add(&mut editor, "1 First St", "New York").unwrap();

    editor.open_for_edit_at(0);
    let expected = AddressDraft::from(&editor.addresses()[0]);
    assert_eq!(editor.draft(), Some(&expected));
    assert_eq!(editor.draft().unwrap().input("zipCode"), Some("10001"));
}

#[test]
fn test_update_draft_is_ignored_when_closed() {
    let mut editor = editor();
    editor.update_draft(|d| d.city = "Nowhere".to_string());
    assert!(editor.draft().is_none());
}

#[test]
fn test_reduce_is_pure() {
    let initial = FormState::default();
    let opened = reduce(&initial, FormAction::OpenForAdd);
    let closed = reduce(&opened, FormAction::CloseDialog);

    assert_eq!(initial, FormState::default());
    assert!(opened.is_modal_open());
    assert_eq!(closed, initial);
}
