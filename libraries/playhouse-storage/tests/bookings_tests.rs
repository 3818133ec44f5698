//! Integration tests for the bookings vertical slice


use test_helpers::*;

#[tokio::test]
async fn test_create_booking_returns_stored_row() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = create_test_artist(pool, "Mila", "mila").await;

    let booking = playhouse_storage::bookings::create(pool, sample_booking(artist.id))
        .await
        .expect("Failed to create booking");

    assert_eq!(booking.name, "Ada");
    assert_eq!(booking.email, "ada@example.com");
    assert_eq!(booking.artist_id, artist.id);
    assert_eq!(booking.date, "2026-09-01T14:00:00Z");
    assert!(!booking.created_at.is_empty());

    let fetched = playhouse_storage::bookings::get_by_id(pool, booking.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(fetched.message, booking.message);
}

#[tokio::test]
async fn test_list_bookings_oldest_first() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let artist = create_test_artist(pool, "Yi", "yi").await;

    let first = playhouse_storage::bookings::create(pool, sample_booking(artist.id))
        .await
        .unwrap();
    let second = playhouse_storage::bookings::create(pool, sample_booking(artist.id))
        .await
        .unwrap();

    let bookings = playhouse_storage::bookings::get_all(pool)
        .await
        .expect("Failed to list bookings");

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, first.id);
    assert_eq!(bookings[1].id, second.id);
}
