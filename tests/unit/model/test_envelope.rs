use crate::fixtures::{ACCOUNT_ID, ORGANISATION_ID, sample_account};
use assert_json_diff::assert_json_eq;
use fake_api_client::prelude::*;
use serde_json::json;

#[test]
fn test_body_wraps_account_under_data() {
    let account = sample_account(ACCOUNT_ID);
    let value = serde_json::to_value(Body::new(&account)).unwrap();

    assert_json_eq!(
        value,
        json!({
            "data": {
                "id": ACCOUNT_ID,
                "organisation_id": ORGANISATION_ID,
                "type": "accounts",
                "version": 0,
                "attributes": {
                    "account_number": "41426819",
                    "account_classification": "Personal",
                    "account_matching_opt_out": false,
                    "alternative_bank_account_names": ["Sam Holder"],
                    "bank_id": "400300",
                    "bank_id_code": "GBDSC",
                    "base_currency": "GBP",
                    "bic": "NWBKGB22",
                    "country": "GB",
                    "joint_account": false,
                    "iban": "GB11NWBK40030041426819"
                }
            }
        })
    );
}

#[test]
fn test_body_decodes_list_payload() {
    let body: Body<Vec<Account>> = serde_json::from_value(json!({
        "data": [
            { "id": "a", "type": "accounts", "attributes": { "country": "GB" } },
            { "id": "b", "type": "accounts", "attributes": { "country": "FR" } }
        ]
    }))
    .unwrap();

    let accounts = body.into_inner();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[1].attributes.country, "FR");
}

#[test]
fn test_body_without_data_fails() {
    let result = serde_json::from_value::<Body<Account>>(json!({ "links": {} }));
    assert!(result.is_err());
}

#[test]
fn test_error_response_decodes_message() {
    let error: ErrorResponse =
        serde_json::from_str(r#"{"error_message": "id is not a valid uuid"}"#).unwrap();
    assert_eq!(error.message, "id is not a valid uuid");
}

#[test]
fn test_error_response_without_message_is_empty() {
    let error: ErrorResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(error, ErrorResponse::default());
}

#[test]
fn test_error_response_from_empty_body_fails() {
    assert!(serde_json::from_str::<ErrorResponse>("").is_err());
}
