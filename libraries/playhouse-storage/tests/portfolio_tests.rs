//! Integration tests for the portfolio vertical slice


use playhouse_core::types::*;
use playhouse_core::PlayhouseError;
use test_helpers::*;

#[tokio::test]
async fn test_add_and_get_item() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = create_test_artist(pool, "Mila", "mila").await;

    let item = playhouse_storage::portfolio::add(
        pool,
        CreatePortfolioItem {
            artist_id: artist.id,
            image_url: "/uploads/rose.jpg".to_string(),
            title: Some("Rose".to_string()),
            description: Some("Fine line rose on forearm".to_string()),
        },
    )
    .await
    .expect("Failed to add portfolio item");

    assert_eq!(item.artist_id, artist.id);
    assert_eq!(item.title.as_deref(), Some("Rose"));

    let fetched = playhouse_storage::portfolio::get_by_id(pool, item.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.image_url, "/uploads/rose.jpg");
}

#[tokio::test]
async fn test_add_for_missing_artist_fails() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let err = playhouse_storage::portfolio::add(
        pool,
        CreatePortfolioItem {
            artist_id: 42,
            image_url: "/uploads/ghost.jpg".to_string(),
            title: None,
            description: None,
        },
    )
    .await
    .expect_err("Item for a missing artist should be rejected");

    assert!(matches!(err, PlayhouseError::NotFound { .. }));
}

#[tokio::test]
async fn test_items_come_back_in_insertion_order() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = create_test_artist(pool, "Yi", "yi").await;

    create_test_item(pool, artist.id, "/uploads/first.jpg").await;
    create_test_item(pool, artist.id, "/uploads/second.jpg").await;
    create_test_item(pool, artist.id, "/uploads/third.jpg").await;

    let items = playhouse_storage::portfolio::get_by_artist(pool, artist.id)
        .await
        .expect("Failed to fetch items");

    let urls: Vec<_> = items.iter().map(|item| item.image_url.as_str()).collect();
    assert_eq!(
        urls,
        vec!["/uploads/first.jpg", "/uploads/second.jpg", "/uploads/third.jpg"]
    );
}

#[tokio::test]
async fn test_delete_item_reflected_in_artist_fetch() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = create_test_artist(pool, "Mila", "mila").await;
    let keep = create_test_item(pool, artist.id, "/uploads/keep.jpg").await;
    let gone = create_test_item(pool, artist.id, "/uploads/gone.jpg").await;

    playhouse_storage::portfolio::delete(pool, gone.id)
        .await
        .expect("Failed to delete item");

    let fetched = playhouse_storage::artists::get_by_slug(pool, "mila")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(fetched.portfolio_items.len(), 1);
    assert_eq!(fetched.portfolio_items[0].id, keep.id);

    assert!(playhouse_storage::portfolio::get_by_id(pool, gone.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_delete_unknown_item_fails() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let err = playhouse_storage::portfolio::delete(pool, 777)
        .await
        .expect_err("Deleting a missing item should fail");

    assert!(matches!(err, PlayhouseError::NotFound { .. }));
}
