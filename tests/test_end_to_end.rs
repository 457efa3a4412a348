//! A complete session against the simulated repository: fill in contact
//! details, manage several addresses across countries, submit, and wait
//! for the form to reset.

use profile_form_core::domain::SequentialIdGenerator;
use profile_form_core::models::{Country, Region};
use profile_form_core::{
    Config, ProfileForm, ProfileRepository, SimulatedProfileRepository, SubmissionPhase,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_profile_session() {
    let config = Config::default();
    let repository = Arc::new(SimulatedProfileRepository::from_config(&config));
    let form = ProfileForm::new(
        repository.clone() as Arc<dyn ProfileRepository>,
        Arc::new(SequentialIdGenerator::default()),
        &config,
    );
    assert!(!form.can_submit());
    assert!(matches!(
        form.submit().await,
        Err(profile_form_core::ProfileError::Validation(_))
    ));

    form.update_values(|v| {
        v.first_name = "Ada".to_string();
        v.last_name = "Lovelace".to_string();
        v.email = "ada@example.org".to_string();
        v.phone = "+44 2071234567".to_string();
        v.delivery_instructions = "Ring twice".to_string();
    });

    // Canadian address, entered through the generic input setter
    form.with_editor(|editor| {
        editor.open_for_add();
        assert_eq!(editor.state().dialog_title(), Some("Add New Address"));
        editor.set_draft_country(Country::Canada);
        let names: Vec<_> = Country::Canada.fields().iter().map(|f| f.name).collect();
        let values = ["1 Wellington St", "Ottawa", "ON", "K1A 0A9"];
        editor.update_draft(|d| {
            for (name, value) in names.iter().zip(values) {
                assert!(d.set_input(name, value));
            }
        });
        editor.save_draft().unwrap();
    });

    // UK address, then edited to a different postcode
    form.with_editor(|editor| {
        editor.open_for_add();
        editor.set_draft_country(Country::Uk);
        editor.update_draft(|d| {
            d.street_address = "12 Fleet St".to_string();
            d.city = "London".to_string();
            d.postcode = "EC4Y 1AA".to_string();
        });
        editor.save_draft().unwrap();

        assert!(editor.open_for_edit_at(1));
        assert_eq!(editor.state().dialog_title(), Some("Edit Address"));
        editor.update_draft(|d| d.postcode = "EC4A 2BB".to_string());
        editor.save_draft().unwrap();
    });

    let addresses = form.addresses();
    assert_eq!(addresses.len(), 2);
    assert_eq!(addresses[0].summary(), "1 Wellington St, Ottawa, Canada");
    assert_eq!(addresses[1].heading(), "Home Address");
    assert_eq!(
        addresses[1].region,
        Region::Uk {
            postcode: "EC4A 2BB".to_string()
        }
    );
    assert!(form.can_submit());

    let receipt = form.submit().await.unwrap();
    assert_eq!(receipt.address_count, 2);
    assert_eq!(form.phase(), SubmissionPhase::Submitted);

    let saved = repository.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].delivery_instructions.as_deref(), Some("Ring twice"));
    assert!(!saved[0].newsletter);
    assert_eq!(form.metrics().persist_calls_total(), 1);
    assert_eq!(form.metrics().addresses_saved_total(), 3);

    tokio::time::sleep(config.success_display + Duration::from_millis(1)).await;
    assert_eq!(form.phase(), SubmissionPhase::Idle);
    assert!(form.addresses().is_empty());
    assert!(!form.can_submit());
}
