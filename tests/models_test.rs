//! Deserialization tests for every FinAegis entity type, plus request-body
//! serialization checks.

use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use finaegis::models::account::{Account, CreateAccountRequest};
use finaegis::models::asset::{Asset, AssetType, UpdateAssetRequest};
use finaegis::models::basket::Basket;
use finaegis::models::exchange_rate::ExchangeRate;
use finaegis::models::gcu::GcuInfo;
use finaegis::models::transaction::{MoneyRequest, Transaction, TransactionKind, TransactionStatus};
use finaegis::models::transfer::{CreateTransferRequest, Transfer};
use finaegis::models::webhook::Webhook;
use finaegis::models::{Page, PageMeta};

const ACCOUNT_JSON: &str = include_str!("fixtures/account.json");
const ACCOUNTS_PAGE_JSON: &str = include_str!("fixtures/accounts_page.json");
const TRANSACTION_COMPLETED_JSON: &str = include_str!("fixtures/transaction_completed.json");
const TRANSACTION_PENDING_JSON: &str = include_str!("fixtures/transaction_pending.json");
const TRANSFER_JSON: &str = include_str!("fixtures/transfer.json");
const ASSET_JSON: &str = include_str!("fixtures/asset.json");
const BASKET_JSON: &str = include_str!("fixtures/basket.json");
const EXCHANGE_RATE_JSON: &str = include_str!("fixtures/exchange_rate.json");
const WEBHOOK_JSON: &str = include_str!("fixtures/webhook.json");
const GCU_JSON: &str = include_str!("fixtures/gcu.json");

#[test]
fn account_deserializes_with_string_balance() {
    let account: Account =
        serde_json::from_str(ACCOUNT_JSON).expect("Failed to deserialize account");

    assert_eq!(account.uuid, "acct-9f8b7c6d");
    assert_eq!(account.user_uuid, "user-1a2b3c4d");
    assert_eq!(account.name, "Main Checking");
    assert_eq!(account.balance, dec!(1250.75));
    assert!(!account.frozen);
    assert_eq!(
        account.created_at,
        Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap()
    );
    assert_eq!(
        account.updated_at,
        Utc.with_ymd_and_hms(2024, 3, 2, 8, 15, 30).unwrap()
    );
}

#[test]
fn accounts_page_deserializes_envelope() {
    let page: Page<Account> =
        serde_json::from_str(ACCOUNTS_PAGE_JSON).expect("Failed to deserialize page");

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.meta.current_page, 2);
    assert_eq!(page.meta.per_page, 5);
    assert_eq!(page.meta.total, 12);
    assert_eq!(page.meta.last_page, 3);

    // First account's balance arrives as a number, second as a string.
    assert_eq!(page.data[0].balance, dec!(1250.75));
    assert_eq!(page.data[1].balance, dec!(9800.00));
    assert!(page.data[1].frozen);
}

#[test]
fn page_without_meta_uses_defaults() {
    let page: Page<Account> = serde_json::from_str(
        &format!(r#"{{"data": [{ACCOUNT_JSON}]}}"#),
    )
    .expect("Failed to deserialize page without meta");

    assert_eq!(page.data.len(), 1);
    assert_eq!(page.meta, PageMeta::default());
    assert_eq!(page.meta.current_page, 1);
    assert_eq!(page.meta.per_page, 20);
    assert_eq!(page.meta.total, 0);
    assert_eq!(page.meta.last_page, 1);
}

#[test]
fn completed_transaction_has_terminal_timestamp() {
    let txn: Transaction =
        serde_json::from_str(TRANSACTION_COMPLETED_JSON).expect("Failed to deserialize");

    assert_eq!(txn.uuid, "txn-5566");
    assert_eq!(txn.kind, TransactionKind::Deposit);
    assert_eq!(txn.amount, dec!(100.00));
    assert_eq!(txn.asset_code, "USD");
    assert_eq!(txn.status, TransactionStatus::Completed);
    assert!(txn.status.is_terminal());
    assert_eq!(txn.reference.as_deref(), Some("invoice-42"));
    assert!(txn.completed_at.is_some());
}

#[test]
fn pending_transaction_has_no_terminal_timestamp() {
    let txn: Transaction =
        serde_json::from_str(TRANSACTION_PENDING_JSON).expect("Failed to deserialize");

    assert_eq!(txn.kind, TransactionKind::Withdrawal);
    assert_eq!(txn.amount, dec!(25.5));
    assert_eq!(txn.status, TransactionStatus::Pending);
    assert!(!txn.status.is_terminal());
    assert!(txn.reference.is_none());
    assert!(txn.completed_at.is_none());
}

#[test]
fn transfer_deserializes() {
    let transfer: Transfer = serde_json::from_str(TRANSFER_JSON).expect("Failed to deserialize");

    assert_eq!(transfer.from_account_uuid, "acct-9f8b7c6d");
    assert_eq!(transfer.to_account_uuid, "acct-0e1f2a3b");
    assert_eq!(transfer.amount, dec!(75.25));
    assert_eq!(transfer.status, TransactionStatus::Failed);
    assert!(transfer.status.is_terminal());
    assert!(transfer.completed_at.is_some());
}

#[test]
fn asset_deserializes() {
    let asset: Asset = serde_json::from_str(ASSET_JSON).expect("Failed to deserialize");

    assert_eq!(asset.code, "XAU");
    assert_eq!(asset.asset_type, AssetType::Commodity);
    assert_eq!(asset.precision, 6);
    assert!(asset.is_active);
}

#[test]
fn basket_composition_accepts_mixed_number_forms() {
    let basket: Basket = serde_json::from_str(BASKET_JSON).expect("Failed to deserialize");

    assert_eq!(basket.code, "STABLE");
    assert_eq!(basket.description.as_deref(), Some("Low-volatility fiat mix"));
    assert_eq!(basket.composition.len(), 3);
    assert_eq!(basket.composition["USD"], dec!(0.40));
    assert_eq!(basket.composition["EUR"], dec!(0.35));
    assert_eq!(basket.value, dec!(1.0234));
}

#[test]
fn exchange_rate_deserializes() {
    let rate: ExchangeRate =
        serde_json::from_str(EXCHANGE_RATE_JSON).expect("Failed to deserialize");

    assert_eq!(rate.from_asset, "USD");
    assert_eq!(rate.to_asset, "EUR");
    assert_eq!(rate.rate, dec!(0.9203));
}

#[test]
fn webhook_deserializes_with_headers() {
    let webhook: Webhook = serde_json::from_str(WEBHOOK_JSON).expect("Failed to deserialize");

    assert_eq!(webhook.name, "settlement feed");
    assert_eq!(
        webhook.events,
        vec!["transfer.completed".to_string(), "account.frozen".to_string()]
    );
    let headers = webhook.headers.expect("Expected headers");
    assert_eq!(headers["X-Team"], "treasury");
    assert!(webhook.is_active);
}

#[test]
fn gcu_info_deserializes_with_composition_list() {
    let info: GcuInfo = serde_json::from_str(GCU_JSON).expect("Failed to deserialize");

    assert_eq!(info.code, "GCU");
    assert_eq!(info.total_value, dec!(1.0912));
    assert_eq!(info.composition.len(), 2);

    let usd = &info.composition[0];
    assert_eq!(usd.asset_code, "USD");
    assert_eq!(usd.asset_type, AssetType::Fiat);
    assert_eq!(usd.weight, dec!(0.35));
    assert_eq!(usd.change_24h, Some(dec!(0.01)));
    assert_eq!(usd.change_7d, Some(dec!(-0.02)));

    let gold = &info.composition[1];
    assert_eq!(gold.asset_type, AssetType::Commodity);
    assert_eq!(gold.current_price, dec!(2034.2));
    assert_eq!(gold.change_24h, None);
    assert_eq!(gold.change_7d, None);
}

#[test]
fn missing_required_field_is_rejected() {
    // No `balance` key: decoding must fail rather than default to zero.
    let result = serde_json::from_str::<Account>(
        r#"{"uuid":"a","user_uuid":"u","name":"n","frozen":false,
            "created_at":"2024-01-01T00:00:00Z","updated_at":"2024-01-01T00:00:00Z"}"#,
    );
    assert!(result.is_err());
}

#[test]
fn money_request_omits_absent_reference() {
    let body = serde_json::to_value(MoneyRequest::new(10_000, "USD")).unwrap();
    assert_eq!(body, serde_json::json!({"amount": 10000, "asset_code": "USD"}));

    let body =
        serde_json::to_value(MoneyRequest::new(5_000, "EUR").with_reference("payroll")).unwrap();
    assert_eq!(body["reference"], "payroll");
}

#[test]
fn create_account_request_omits_absent_initial_balance() {
    let body = serde_json::to_value(CreateAccountRequest {
        user_uuid: "user-1".to_string(),
        name: "Main".to_string(),
        initial_balance: None,
    })
    .unwrap();
    assert_eq!(
        body,
        serde_json::json!({"user_uuid": "user-1", "name": "Main"})
    );
}

#[test]
fn update_asset_request_with_no_fields_is_empty_object() {
    let body = serde_json::to_value(UpdateAssetRequest::default()).unwrap();
    assert_eq!(body, serde_json::json!({}));
}

#[test]
fn transfer_request_serializes_minor_units() {
    let body = serde_json::to_value(CreateTransferRequest {
        from_account_uuid: "a".to_string(),
        to_account_uuid: "b".to_string(),
        amount: 7_525,
        asset_code: "USD".to_string(),
        reference: None,
    })
    .unwrap();

    assert_eq!(body["amount"], 7525);
    assert!(body.get("reference").is_none());
}
