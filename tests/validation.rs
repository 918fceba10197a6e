use axum_orders_api::{
    dto::orders::{CreateOrderRequest, UpdateOrderRequest},
    error::AppError,
};

#[test]
fn create_requires_non_empty_product() {
    let err = CreateOrderRequest {
        product: "   ".into(),
        price: 10.0,
    }
    .validate()
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[test]
fn create_rejects_non_positive_price() {
    for price in [0.0, -1.5, f64::NAN, f64::INFINITY] {
        let err = CreateOrderRequest {
            product: "Laptop".into(),
            price,
        }
        .validate()
        .unwrap_err();
        assert!(
            matches!(err, AppError::BadRequest(_)),
            "price {price} should be rejected"
        );
    }
}

#[test]
fn create_accepts_valid_input() {
    let result = CreateOrderRequest {
        product: "Laptop".into(),
        price: 1299.99,
    }
    .validate();
    assert!(result.is_ok());
}

#[test]
fn update_checks_only_supplied_fields() {
    // An empty patch is valid; it only refreshes updated_at downstream.
    assert!(
        UpdateOrderRequest {
            product: None,
            price: None,
        }
        .validate()
        .is_ok()
    );
    assert!(
        UpdateOrderRequest {
            product: Some("Mouse".into()),
            price: None,
        }
        .validate()
        .is_ok()
    );

    let err = UpdateOrderRequest {
        product: Some("".into()),
        price: None,
    }
    .validate()
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = UpdateOrderRequest {
        product: None,
        price: Some(-2.0),
    }
    .validate()
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
}

#[test]
fn not_found_message_names_the_identifier() {
    let err = AppError::NotFound("order 42".into());
    assert_eq!(err.to_string(), "Not Found: order 42");
}
