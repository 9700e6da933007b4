//! Form session tests: lookups run in the background and land only while the
//! field they were issued for still holds the same value.

mod mocks;

use customer_form::error::FormError;
use customer_form::form::{AddressField, Autofill, CustomerField, FormPhase, FormSession};
use customer_form::{CustomerForm, Metrics};
use mocks::MockLookupClient;
use std::sync::Arc;
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};

const SLOW: Duration = Duration::from_millis(100);

fn session(mock: &MockLookupClient, metrics: &Metrics) -> FormSession {
    FormSession::new(CustomerForm::new(), Arc::new(mock.clone()), metrics.clone())
}

async fn fill_contact_fields(session: &FormSession) {
    assert_ok!(session.set_field(CustomerField::FullName, "Asha Rao").await);
    assert_ok!(session.set_field(CustomerField::Email, "asha@example.com").await);
    assert_ok!(session.set_field(CustomerField::Mobile, "9876543210").await);
    assert_ok!(
        session
            .set_address_field(0, AddressField::Line1, "12 MG Road")
            .await
    );
}

#[tokio::test]
async fn test_pan_autofills_full_name() {
    let mock = MockLookupClient::new();
    mock.pan_name("ABCDE1234F", "Asha Rao", Duration::ZERO);
    let metrics = Metrics::new();
    let session = session(&mock, &metrics);

    let started = assert_ok!(session.set_field(CustomerField::Pan, "abcde1234f").await);
    assert!(started);

    assert_eq!(session.settle().await, vec![Autofill::Applied]);

    let form = session.snapshot().await;
    assert_eq!(form.pan(), "ABCDE1234F");
    assert_eq!(form.full_name(), "Asha Rao");
    assert!(!form.is_loading());
    assert_eq!(mock.calls(), vec!["pan:ABCDE1234F"]);
    assert_eq!(metrics.autofills_applied_total(), 1);
}

#[tokio::test]
async fn test_malformed_pan_is_not_looked_up() {
    let mock = MockLookupClient::new();
    let metrics = Metrics::new();
    let session = session(&mock, &metrics);

    let started = assert_ok!(session.set_field(CustomerField::Pan, "ABCDE12").await);
    assert!(!started);
    assert!(!session.is_loading().await);
    assert!(session.settle().await.is_empty());
    assert!(mock.calls().is_empty());
}

#[tokio::test]
async fn test_unregistered_pan_leaves_name() {
    let mock = MockLookupClient::new();
    mock.pan_unregistered("ABCDE1234F");
    let metrics = Metrics::new();
    let session = session(&mock, &metrics);

    assert_ok!(session.set_field(CustomerField::FullName, "Typed Name").await);
    assert_ok!(session.set_field(CustomerField::Pan, "ABCDE1234F").await);

    assert_eq!(session.settle().await, vec![Autofill::NoMatch]);
    assert_eq!(session.snapshot().await.full_name(), "Typed Name");
}

#[tokio::test]
async fn test_slow_earlier_pan_result_is_discarded() {
    let mock = MockLookupClient::new();
    mock.pan_name("AAAAA1111A", "Old Holder", SLOW)
        .pan_name("BBBBB2222B", "New Holder", Duration::ZERO);
    let metrics = Metrics::new();
    let session = session(&mock, &metrics);

    assert_ok!(session.set_field(CustomerField::Pan, "AAAAA1111A").await);
    assert_ok!(session.set_field(CustomerField::Pan, "BBBBB2222B").await);

    assert_eq!(
        session.settle().await,
        vec![Autofill::Stale, Autofill::Applied]
    );

    let form = session.snapshot().await;
    assert_eq!(form.pan(), "BBBBB2222B");
    assert_eq!(form.full_name(), "New Holder");
    assert_eq!(metrics.stale_results_total(), 1);
    assert_eq!(metrics.autofills_applied_total(), 1);
}

#[tokio::test]
async fn test_loading_flag_tracks_outstanding_lookups() {
    let mock = MockLookupClient::new();
    mock.postcode("560001", "Bengaluru", "Karnataka", SLOW);
    let metrics = Metrics::new();
    let session = session(&mock, &metrics);

    let started = assert_ok!(
        session
            .set_address_field(0, AddressField::Postcode, "560001")
            .await
    );
    assert!(started);
    assert!(session.is_loading().await);

    assert_eq!(session.settle().await, vec![Autofill::Applied]);
    assert!(!session.is_loading().await);

    let form = session.snapshot().await;
    let address = form.address(0).unwrap();
    assert_eq!(address.city, "Bengaluru");
    assert_eq!(address.state, "Karnataka");
}

#[tokio::test]
async fn test_failed_lookup_is_silent() {
    let mock = MockLookupClient::new();
    mock.postcode_failure("560001", Duration::ZERO);
    let metrics = Metrics::new();
    let session = session(&mock, &metrics);

    assert_ok!(session.set_address_field(0, AddressField::City, "Typed City").await);
    assert_ok!(
        session
            .set_address_field(0, AddressField::Postcode, "560001")
            .await
    );

    assert_eq!(session.settle().await, vec![Autofill::Failed]);

    let form = session.snapshot().await;
    assert!(!form.is_loading());
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(form.address(0).unwrap().city, "Typed City");
    assert_eq!(form.address(0).unwrap().state, "");
}

#[tokio::test]
async fn test_postcode_result_follows_its_row() {
    let mock = MockLookupClient::new();
    mock.postcode("110001", "New Delhi", "Delhi", SLOW);
    let metrics = Metrics::new();
    let session = session(&mock, &metrics);

    assert_eq!(assert_ok!(session.add_address_row().await), 1);
    assert_ok!(
        session
            .set_address_field(1, AddressField::Postcode, "110001")
            .await
    );
    assert_ok!(session.remove_address_row(0).await);

    assert_eq!(session.settle().await, vec![Autofill::Applied]);

    let form = session.snapshot().await;
    assert_eq!(form.address_count(), 1);
    assert_eq!(form.address(0).unwrap().postcode, "110001");
    assert_eq!(form.address(0).unwrap().city, "New Delhi");
}

#[tokio::test]
async fn test_result_for_removed_row_is_discarded() {
    let mock = MockLookupClient::new();
    mock.postcode("560001", "Bengaluru", "Karnataka", SLOW);
    let metrics = Metrics::new();
    let session = session(&mock, &metrics);

    assert_ok!(session.add_address_row().await);
    assert_ok!(
        session
            .set_address_field(0, AddressField::Postcode, "560001")
            .await
    );
    assert_ok!(session.remove_address_row(0).await);

    assert_eq!(session.settle().await, vec![Autofill::Stale]);

    let form = session.snapshot().await;
    assert_eq!(form.address(0).unwrap().city, "");
    assert!(!form.is_loading());
}

#[tokio::test]
async fn test_changed_postcode_discards_earlier_result() {
    let mock = MockLookupClient::new();
    mock.postcode("560001", "Bengaluru", "Karnataka", SLOW)
        .postcode("110001", "New Delhi", "Delhi", Duration::ZERO);
    let metrics = Metrics::new();
    let session = session(&mock, &metrics);

    assert_ok!(
        session
            .set_address_field(0, AddressField::Postcode, "560001")
            .await
    );
    assert_ok!(
        session
            .set_address_field(0, AddressField::Postcode, "110001")
            .await
    );

    assert_eq!(
        session.settle().await,
        vec![Autofill::Stale, Autofill::Applied]
    );
    let form = session.snapshot().await;
    assert_eq!(form.address(0).unwrap().city, "New Delhi");
    assert_eq!(form.address(0).unwrap().state, "Delhi");
}

#[tokio::test]
async fn test_save_does_not_wait_for_lookups() {
    let mock = MockLookupClient::new();
    mock.pan_name("ABCDE1234F", "Registered Name", SLOW)
        .postcode("560001", "Bengaluru", "Karnataka", SLOW);
    let metrics = Metrics::new();
    let session = session(&mock, &metrics);

    fill_contact_fields(&session).await;
    assert_ok!(session.set_field(CustomerField::Pan, "ABCDE1234F").await);
    assert_ok!(
        session
            .set_address_field(0, AddressField::Postcode, "560001")
            .await
    );

    let customer = assert_ok!(session.save().await);
    assert_eq!(customer.full_name, "Asha Rao");
    assert_eq!(customer.addresses[0].city, "");

    assert_eq!(
        session.settle().await,
        vec![Autofill::Stale, Autofill::Stale]
    );
    assert_eq!(session.snapshot().await.full_name(), "Asha Rao");

    let err = assert_err!(session.set_field(CustomerField::FullName, "x").await);
    assert_eq!(err, FormError::Closed);
}

#[tokio::test]
async fn test_rejected_save_keeps_form_editable() {
    let mock = MockLookupClient::new();
    let metrics = Metrics::new();
    let session = session(&mock, &metrics);

    fill_contact_fields(&session).await;
    assert_ok!(session.set_field(CustomerField::Pan, "NOTAPAN").await);

    assert_eq!(session.save().await, Err(FormError::InvalidPan));
    assert_eq!(session.snapshot().await.phase(), FormPhase::Editing);
    assert_ok!(session.set_field(CustomerField::FullName, "Asha R").await);
}
