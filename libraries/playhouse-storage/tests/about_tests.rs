//! Integration tests for the about-content singleton


use playhouse_core::types::*;
use test_helpers::*;

#[tokio::test]
async fn test_migration_seeds_content() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let about = playhouse_storage::about::get(pool)
        .await
        .expect("Failed to fetch about content");

    assert!(about.story.contains("Playhouse"));
    assert!(about.space.contains("heart of the city"));
    assert_eq!(about.value_cards.len(), 3);
    assert_eq!(about.value_cards[0].title, "QUALITY");
    assert_eq!(about.value_cards[2].title, "ARTISTRY");
}

#[tokio::test]
async fn test_partial_update_merges() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let before = playhouse_storage::about::get(pool).await.unwrap();

    let after = playhouse_storage::about::update(
        pool,
        UpdateAboutContent {
            story: Some("A new chapter".to_string()),
            ..Default::default()
        },
    )
    .await
    .expect("Failed to update about content");

    assert_eq!(after.story, "A new chapter");
    assert_eq!(after.space, before.space);
    assert_eq!(after.philosophy, before.philosophy);
    assert_eq!(after.value_cards, before.value_cards);
    assert_ne!(after.updated_at, before.updated_at);

    // A second read sees the merged row, still exactly one logical record
    let reread = playhouse_storage::about::get(pool).await.unwrap();
    assert_eq!(reread.story, "A new chapter");
    assert_eq!(reread.space, before.space);
}

#[tokio::test]
async fn test_value_cards_round_trip_in_order() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let cards = vec![
        ValueCard {
            title: "CARE".to_string(),
            description: "Every client leaves happy".to_string(),
        },
        ValueCard {
            title: "CRAFT".to_string(),
            description: "Technique honed daily".to_string(),
        },
    ];

    playhouse_storage::about::update(
        pool,
        UpdateAboutContent {
            value_cards: Some(cards.clone()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let about = playhouse_storage::about::get(pool).await.unwrap();
    assert_eq!(about.value_cards, cards);
}
