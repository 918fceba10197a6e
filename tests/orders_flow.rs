use axum_orders_api::{
    db::{create_orm_conn, run_migrations},
    dto::orders::{CreateOrderRequest, UpdateOrderRequest},
    error::AppError,
    state::AppState,
};
use sea_orm::{ConnectionTrait, Statement};
use tokio::sync::Mutex;

// Tests share one database; serialize schema setup so concurrent
// CREATE TABLE IF NOT EXISTS statements cannot collide.
static DB_SETUP: Mutex<()> = Mutex::const_new(());

// Integration flow: create -> read -> partial update -> delete, plus list
// ordering and the not-found paths.
#[tokio::test]
async fn order_crud_flow() -> anyhow::Result<()> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match test_database_url() {
        Some(url) => url,
        None => return Ok(()),
    };

    let state = setup_state(&database_url, "orders").await?;

    let created = state
        .orders
        .create(CreateOrderRequest {
            product: "Laptop".into(),
            price: 1299.99,
        })
        .await?;
    assert_eq!(created.product, "Laptop");
    assert_eq!(created.price, 1299.99);
    assert_eq!(created.created_at, created.updated_at);

    // Reading back yields the identical record.
    let fetched = state.orders.get(created.id).await?;
    assert_eq!(fetched, created);

    // A partial update touches only price and updated_at.
    let updated = state
        .orders
        .update(
            created.id,
            UpdateOrderRequest {
                product: None,
                price: Some(999.0),
            },
        )
        .await?;
    assert_eq!(updated.product, "Laptop");
    assert_eq!(updated.price, 999.0);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    let second = state
        .orders
        .create(CreateOrderRequest {
            product: "Mouse".into(),
            price: 19.99,
        })
        .await?;
    let third = state
        .orders
        .create(CreateOrderRequest {
            product: "Keyboard".into(),
            price: 49.99,
        })
        .await?;
    assert!(second.id != created.id && third.id != second.id);

    // Newest first.
    let listed = state.orders.list_all().await?;
    let products: Vec<&str> = listed.iter().map(|o| o.product.as_str()).collect();
    assert_eq!(products, ["Keyboard", "Mouse", "Laptop"]);

    // Delete returns the record; a second delete reports not found.
    let deleted = state.orders.remove(created.id).await?;
    assert_eq!(deleted.id, created.id);

    let err = state.orders.remove(created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    let err = state.orders.get(created.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    let err = state
        .orders
        .update(
            created.id,
            UpdateOrderRequest {
                product: None,
                price: Some(1.0),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    // The misses mutated nothing.
    let remaining = state.orders.list_all().await?;
    assert_eq!(remaining.len(), 2);
    assert_eq!(remaining[0], third);
    assert_eq!(remaining[1], second);

    Ok(())
}

#[tokio::test]
async fn access_log_record_and_stats() -> anyhow::Result<()> {
    let database_url = match test_database_url() {
        Some(url) => url,
        None => return Ok(()),
    };

    let state = setup_state(&database_url, "access_logs").await?;

    state
        .access_logs
        .record("10.0.0.1".into(), Some("curl/8.5".into()))
        .await?;
    state
        .access_logs
        .record("10.0.0.1".into(), Some("curl/8.5".into()))
        .await?;
    let last = state.access_logs.record("10.0.0.2".into(), None).await?;
    assert_eq!(last.ip, "10.0.0.2");
    assert!(last.user_agent.is_none());

    let (items, total) = state.access_logs.list_recent().await?;
    assert_eq!(total, 3);
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].id, last.id);

    // Grouped count per ip, most-hit first.
    let stats = state.access_logs.stats().await?;
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].ip, "10.0.0.1");
    assert_eq!(stats[0].hits, 2);
    assert_eq!(stats[1].ip, "10.0.0.2");
    assert_eq!(stats[1].hits, 1);

    Ok(())
}

fn test_database_url() -> Option<String> {
    match std::env::var("TEST_DATABASE_URL").or_else(|_| std::env::var("DATABASE_URL")) {
        Ok(url) => Some(url),
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run integration flow tests."
            );
            None
        }
    }
}

async fn setup_state(database_url: &str, table: &str) -> anyhow::Result<AppState> {
    let _guard = DB_SETUP.lock().await;

    let conn = create_orm_conn(database_url).await?;
    run_migrations(&conn).await?;

    // Clean the table under test between runs.
    let backend = conn.get_database_backend();
    conn.execute(Statement::from_string(
        backend,
        format!("TRUNCATE TABLE {table} RESTART IDENTITY"),
    ))
    .await?;

    Ok(AppState::new(conn))
}
