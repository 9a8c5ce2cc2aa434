#![allow(clippy::unwrap_used, reason = "test code")]

use std::sync::Arc;

use pms_suggest_core::{Customer, RefreshPayload, SuggestConfig};
use pms_suggest_storage::{SharedStore, Storage};
use tempfile::TempDir;

use super::{ParcelSubmission, SuggestionField, SuggestionPolicy, SuggestionService};
use crate::{LatestOnly, ServiceError};

fn create_test_service() -> (SuggestionService, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    let config = SuggestConfig::default().with_db_path(db_path);
    (SuggestionService::new(Arc::new(storage), &config), temp_dir)
}

fn submission(description: &str, remark: &str) -> ParcelSubmission {
    ParcelSubmission {
        sender: Customer::new("Ram Patel", "9998887771"),
        receiver: Customer::new("Shyam Ram", "8887776661"),
        description: description.to_owned(),
        remark: remark.to_owned(),
    }
}

#[tokio::test]
async fn submission_records_both_parties_and_vocabulary() {
    let (service, _dir) = create_test_service();
    service.record_submission(&submission("Books", "Fragile")).await.unwrap();

    assert_eq!(service.customers().await.unwrap().len(), 2);
    assert_eq!(service.descriptions().await.unwrap(), vec!["Books"]);
    assert_eq!(service.remarks().await.unwrap(), vec!["Fragile"]);
}

#[tokio::test]
async fn repeated_submission_does_not_duplicate() {
    let (service, _dir) = create_test_service();
    service.record_submission(&submission("Books", "Fragile")).await.unwrap();
    service.record_submission(&submission("Books", "Fragile")).await.unwrap();

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.counts.customers, 2);
    assert_eq!(stats.counts.descriptions, 1);
    assert_eq!(stats.counts.remarks, 1);
    assert_eq!(stats.schema_version, 2);
}

#[tokio::test]
async fn blank_fields_are_not_recorded() {
    let (service, _dir) = create_test_service();
    let mut parcel = submission("   ", "");
    parcel.receiver.mobile_no = String::new();
    service.record_submission(&parcel).await.unwrap();

    let customers = service.customers().await.unwrap();
    assert_eq!(customers, vec![Customer::new("Ram Patel", "9998887771")]);
    assert!(service.descriptions().await.unwrap().is_empty());
    assert!(service.remarks().await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_write_keeps_earlier_writes() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = Storage::new(&db_path).unwrap();
    let service = SuggestionService::new(Arc::new(storage), &SuggestConfig::default());

    rusqlite::Connection::open(&db_path).unwrap().execute_batch("DROP TABLE remarks;").unwrap();

    let err = service.record_submission(&submission("Books", "Fragile")).await.unwrap_err();
    assert!(matches!(err, ServiceError::Storage(_)));

    assert_eq!(service.customers().await.unwrap().len(), 2);
    assert_eq!(service.descriptions().await.unwrap(), vec!["Books"]);
}

#[tokio::test]
async fn refresh_applies_every_element() {
    let (service, _dir) = create_test_service();
    service.add_customer("Old Name", "9876543210").await.unwrap();

    let payload = RefreshPayload {
        customers: vec![
            Customer::new("Asha K", "9876543210"),
            Customer::new("Ravi", "9123456780"),
        ],
        descriptions: vec!["Books".to_owned(), "Books".to_owned()],
        remarks: vec!["Fragile".to_owned()],
    };
    let report = service.refresh(&payload).await.unwrap();

    assert_eq!(report.customers, 2);
    assert_eq!(report.descriptions, 2);
    assert_eq!(service.lookup_name("9876543210").await.unwrap().as_deref(), Some("Asha K"));
    assert_eq!(service.descriptions().await.unwrap(), vec!["Books"]);
}

#[tokio::test]
async fn refresh_from_file_reads_json_payload() {
    let (service, dir) = create_test_service();
    let path = dir.path().join("refresh.json");
    std::fs::write(
        &path,
        r#"{"customers": [{"customer_name": "Asha", "mobile_no": "9876543210"}], "remarks": ["Urgent"]}"#,
    )
    .unwrap();

    let report = service.refresh_from_file(&path).await.unwrap();
    assert_eq!(report.customers, 1);
    assert_eq!(report.descriptions, 0);
    assert_eq!(report.remarks, 1);
}

#[tokio::test]
async fn refresh_from_malformed_file_is_a_payload_error() {
    let (service, dir) = create_test_service();
    let path = dir.path().join("refresh.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = service.refresh_from_file(&path).await.unwrap_err();
    assert!(matches!(err, ServiceError::Core(_)));
}

#[tokio::test]
async fn mobile_suggestions_wait_for_three_characters() {
    let (service, _dir) = create_test_service();
    service.add_customer("Asha", "9876543210").await.unwrap();

    assert!(service.suggest_mobile_nos("98").await.unwrap().is_empty());
    assert_eq!(service.suggest_mobile_nos("987").await.unwrap(), vec!["9876543210"]);
}

#[tokio::test]
async fn text_suggestions_keep_their_match_rules() {
    let (service, _dir) = create_test_service();
    service.add_customer("Ram Patel", "9998887771").await.unwrap();
    service.add_customer("Shyam Ram", "8887776661").await.unwrap();
    service.add_description("Books").await.unwrap();
    service.add_description("Old books").await.unwrap();
    service.add_remark("Fragile").await.unwrap();

    assert_eq!(service.suggest_customer_names("ram").await.unwrap().len(), 2);
    assert_eq!(service.suggest_descriptions("bo").await.unwrap(), vec!["Books"]);
    assert_eq!(service.suggest_remarks("FRA").await.unwrap(), vec!["Fragile"]);
    assert!(service.suggest_remarks("").await.unwrap().is_empty());
}

#[tokio::test]
async fn whitespace_only_text_does_not_suggest() {
    let (service, _dir) = create_test_service();
    service.add_description("   Loose items").await.unwrap();
    service.add_remark(" ").await.unwrap();

    assert!(service.suggest_descriptions("   ").await.unwrap().is_empty());
    assert!(service.suggest_remarks(" ").await.unwrap().is_empty());
    assert_eq!(service.suggest_descriptions("   lo").await.unwrap(), vec!["   Loose items"]);
}

#[test]
fn mobile_gate_counts_untrimmed_input() {
    let policy = SuggestionPolicy { min_mobile_query_len: 3, min_text_query_len: 1 };
    assert!(policy.allows(SuggestionField::Mobile, "98 "));
    assert!(!policy.allows(SuggestionField::Name, "  "));
    assert!(policy.allows(SuggestionField::Name, " a "));
}

#[tokio::test]
async fn zero_threshold_policy_lists_everything_for_empty_input() {
    let (service, _dir) = create_test_service();
    let service =
        service.with_policy(SuggestionPolicy { min_mobile_query_len: 0, min_text_query_len: 0 });
    service.add_customer("Asha", "9876543210").await.unwrap();

    assert_eq!(service.suggest(SuggestionField::Mobile, "").await.unwrap().len(), 1);
}

#[tokio::test]
async fn lookup_name_of_unknown_or_empty_mobile_is_none() {
    let (service, _dir) = create_test_service();
    assert!(service.lookup_name("0000000000").await.unwrap().is_none());
    assert!(service.lookup_name("").await.unwrap().is_none());
}

#[tokio::test]
async fn filter_matches_name_or_mobile() {
    let (service, _dir) = create_test_service();
    service.add_customer("Asha", "9876543210").await.unwrap();
    service.add_customer("Ravi", "9123456780").await.unwrap();

    let by_name = service.filter_customers("ASH").await.unwrap();
    assert_eq!(by_name, vec![Customer::new("Asha", "9876543210")]);

    let by_inner_digits = service.filter_customers("3456").await.unwrap();
    assert_eq!(by_inner_digits, vec![Customer::new("Ravi", "9123456780")]);

    assert_eq!(service.filter_customers("").await.unwrap().len(), 2);
}

#[tokio::test]
async fn superseded_suggestions_are_discarded() {
    let (service, _dir) = create_test_service();
    service.add_description("Books").await.unwrap();
    let gate = LatestOnly::new();

    let stale = gate.issue();
    let fresh = service.suggest_latest(&gate, SuggestionField::Description, "bo").await.unwrap();
    assert_eq!(fresh, Some(vec!["Books".to_owned()]));
    assert!(!gate.accept(stale));
}

#[tokio::test]
async fn export_writes_named_artifact() {
    let (service, dir) = create_test_service();
    service.record_submission(&submission("Books", "Fragile")).await.unwrap();

    let out_dir = dir.path().join("exports");
    let report = service.export_to_dir(&out_dir).await.unwrap();
    assert!(report.path.ends_with("pms-idb-data.json"));
    assert_eq!(report.counts.customers, 2);
    assert_eq!(report.counts.descriptions, 1);
    assert_eq!(report.counts.remarks, 1);

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report.path).unwrap()).unwrap();
    assert_eq!(written["customers"].as_array().unwrap().len(), 2);
    assert_eq!(written["descriptions"][0], "Books");
    assert_eq!(written["remarks"][0], "Fragile");
}

#[tokio::test]
async fn unavailable_store_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("broken.db");
    // an index already owns the name the v2 step needs
    rusqlite::Connection::open(&db_path)
        .unwrap()
        .execute_batch(
            "CREATE TABLE customers (mobile_no TEXT PRIMARY KEY, customer_name TEXT NOT NULL);
             CREATE INDEX descriptions ON customers(customer_name);
             PRAGMA user_version = 1;",
        )
        .unwrap();
    let shared = SharedStore::new(&db_path, 1);
    let service = SuggestionService::new(Arc::new(shared), &SuggestConfig::default());

    let err = service.add_description("Books").await.unwrap_err();
    assert!(err.is_store_unavailable());
}
