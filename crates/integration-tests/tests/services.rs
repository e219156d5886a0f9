//! Simulated services acting on a session store.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use secrecy::SecretString;
use tokio::time::Instant;

use producthub_storefront::forms::{ProductField, ProductForm};
use producthub_storefront::services::{AuthError, AuthService, CatalogService};
use producthub_storefront::{AppError, Store, StorefrontConfig};

fn form(name: &str) -> ProductForm {
    ProductForm {
        image: "/images/lamp.png".to_string(),
        name: name.to_string(),
        category: "Other".to_string(),
        description: "Warm light".to_string(),
        specification: "LED, 9W".to_string(),
        rating: "4.5".to_string(),
        price: "25".to_string(),
        quantity: "40".to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn test_sign_up_then_sign_out() {
    let config = StorefrontConfig::default();
    let auth = AuthService::from_config(&config);
    let mut store = Store::new();

    let start = Instant::now();
    let user = auth
        .sign_up("", "lea.reyes@example.com", &SecretString::from("pw".to_string()))
        .await
        .unwrap();
    assert!(start.elapsed() >= Duration::from_millis(800));
    assert_eq!(user.name, "lea.reyes");

    store.set_user(Some(user));
    assert_eq!(store.user().unwrap().initial(), "L");

    store.set_user(None);
    assert!(store.user().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_auth_errors_convert_to_app_error() {
    let auth = AuthService::new(Duration::ZERO);
    let result: Result<_, AppError> = auth
        .sign_in("missing-at.example.com", &SecretString::from("pw".to_string()))
        .await
        .map_err(AppError::from);

    let err = result.unwrap_err();
    assert!(matches!(err, AppError::Auth(AuthError::InvalidEmail(_))));
    assert!(err.is_user_error());
}

#[tokio::test(start_paused = true)]
async fn test_submitted_products_append_in_order() {
    let config = StorefrontConfig::default();
    let catalog = CatalogService::from_config(&config);
    let mut store = Store::new();

    let lamp = catalog.submit(&mut store, &form("Desk Lamp")).await.unwrap();
    let fan = catalog.submit(&mut store, &form("Desk Fan")).await.unwrap();

    let names: Vec<&str> = store.products().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["Pro Laptop 15\"", "Wireless Headphones Pro", "SmartWatch Ultra", "Desk Lamp", "Desk Fan"]
    );
    assert_ne!(lamp, fan);
    assert_eq!(store.product(&fan).unwrap().quantity, 40);
}

#[tokio::test(start_paused = true)]
async fn test_rejected_form_is_immediate() {
    let catalog = CatalogService::new(Duration::from_secs(30));
    let mut store = Store::new();
    let bad = ProductForm {
        rating: "7".to_string(),
        quantity: "-3".to_string(),
        ..form("Lamp")
    };

    let start = Instant::now();
    let errors = catalog.submit(&mut store, &bad).await.unwrap_err();

    assert!(start.elapsed() < Duration::from_secs(30));
    let fields: Vec<ProductField> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, [ProductField::Rating, ProductField::Quantity]);
    assert_eq!(store.products().len(), 3);
}
