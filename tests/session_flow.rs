use rust_decimal::Decimal;

use smartcart::checkout::VerifierConfig;
use smartcart::models::OrderStatus;
use smartcart::scan::{ScanError, StoreQrScanner};
use smartcart::seed;
use smartcart::session::{SessionError, ShoppingSession};
use smartcart::storage::{MemStorage, SharedStorage, Storage};

fn seeded_storage() -> SharedStorage {
    let storage = MemStorage::shared();
    seed::demo_data(storage.as_ref()).expect("seed demo data");
    storage
}

#[tokio::test(start_paused = true)]
async fn full_trip_scan_shop_verify_and_pay() {
    let storage = seeded_storage();
    let mut session = ShoppingSession::new(storage.clone());

    // enter the store through the mock QR scanner
    let mut job = StoreQrScanner::default().start();
    let payload = job.recv().await.expect("store scan completes");
    let store = session.enter_store(&payload).expect("seeded store resolves");
    assert_eq!(store.name, "GreenMart");

    // broccoli x1, bread x2
    let broccoli = session
        .scan_product("7896080900021")
        .expect("known barcode")
        .clone();
    session.add_to_cart(broccoli, 1);
    let bread = session
        .scan_product("7891234567890")
        .expect("known barcode")
        .clone();
    session.add_to_cart(bread, 2);

    let totals = session.totals();
    assert_eq!(totals.subtotal, Decimal::new(1047, 2));
    assert_eq!(totals.weight, Decimal::new(26, 1));

    // payment is rejected before checkout even starts
    assert!(matches!(
        session.complete_payment(),
        Err(SessionError::NotCheckedOut)
    ));

    session
        .begin_checkout(VerifierConfig::default())
        .expect("checkout starts");

    // and rejected while the scale is still converging
    assert!(matches!(
        session.complete_payment(),
        Err(SessionError::NotVerified)
    ));

    let verified = session
        .verification_mut()
        .expect("verification running")
        .wait_verified()
        .await;
    assert!(verified);

    let receipt = session.complete_payment().expect("payment completes");
    assert_eq!(receipt.order.status, OrderStatus::Completed);
    assert_eq!(receipt.order.store_id, 1);
    assert_eq!(receipt.order.total_weight, Decimal::new(26, 1));
    assert_eq!(receipt.items.len(), 2);

    // line snapshots carry price-at-purchase
    let broccoli_item = receipt
        .items
        .iter()
        .find(|item| item.product_id == 1)
        .expect("broccoli line");
    assert_eq!(broccoli_item.price, Decimal::new(249, 2));
    assert_eq!(broccoli_item.quantity, 1);

    // the session resets for the next trip
    assert!(session.cart().is_empty());
    assert!(session.verification().is_none());

    // and the order landed in storage
    let stored = storage.order(receipt.order.id).expect("order persisted");
    assert_eq!(stored.order_number, receipt.order.order_number);
    assert_eq!(storage.order_items(stored.id).len(), 2);
}

#[tokio::test]
async fn malformed_store_payloads_are_silently_ignored() {
    let mut session = ShoppingSession::new(seeded_storage());

    assert!(session.enter_store("garbage").is_none());
    assert!(session.enter_store("store:1:GreenMart").is_none());
    assert!(session.store().is_none());
}

#[tokio::test]
async fn unknown_barcode_aborts_the_scan() {
    let mut session = ShoppingSession::new(seeded_storage());

    let result = session.scan_product("0000000000000");
    assert!(matches!(result, Err(ScanError::NoCodeFound)));
    assert!(session.current_product().is_none());
}

#[tokio::test]
async fn checkout_requires_a_store_and_a_non_empty_cart() {
    let storage = seeded_storage();
    let mut session = ShoppingSession::new(storage.clone());

    assert!(matches!(
        session.begin_checkout(VerifierConfig::default()),
        Err(SessionError::NoStore)
    ));

    session.enter_store(seed::DEMO_STORE_QR).expect("store");
    assert!(matches!(
        session.begin_checkout(VerifierConfig::default()),
        Err(SessionError::EmptyCart)
    ));
}

#[tokio::test(start_paused = true)]
async fn cancelling_checkout_keeps_the_cart() {
    let storage = seeded_storage();
    let mut session = ShoppingSession::new(storage.clone());
    session.enter_store(seed::DEMO_STORE_QR).expect("store");

    let yogurt = storage.product_by_barcode("7895432109876").expect("yogurt");
    session.add_to_cart(yogurt, 1);

    session
        .begin_checkout(VerifierConfig::default())
        .expect("checkout starts");
    session.cancel_checkout();

    assert!(session.verification().is_none());
    assert_eq!(session.cart().len(), 1);
    assert!(matches!(
        session.complete_payment(),
        Err(SessionError::NotCheckedOut)
    ));
}
