//! Integration tests for the room repository.

mod common;

use rust_decimal_macros::dec;

use common::{code, date, fresh_room, new_reservation, remove_room, setup, stay};
use hotelres_db::repositories::{ReservationRepository, RoomRepository};

#[tokio::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_list_rooms_includes_inserted_room() {
    let db = setup().await;
    fresh_room(&db, "IT11", 3, dec!(125.50)).await;
    let repo = RoomRepository::new(db.clone());

    let rooms = repo.list_rooms().await.expect("query should succeed");
    let room = rooms
        .iter()
        .find(|r| r.code == code("IT11"))
        .expect("room should be listed");
    assert_eq!(room.max_occupancy, 3);
    assert_eq!(room.base_price, dec!(125.50));

    let codes: Vec<_> = rooms.iter().map(|r| r.code.clone()).collect();
    let mut sorted = codes.clone();
    sorted.sort();
    assert_eq!(codes, sorted);

    let refs = repo.list_room_refs().await.expect("query should succeed");
    assert!(refs.iter().any(|r| r.code == code("IT11") && r.name == "Test Room IT11"));

    remove_room(&db, "IT11").await;
}

#[tokio::test]
#[ignore = "requires PostgreSQL (set DATABASE_URL)"]
async fn test_rooms_and_rates_reports_statistics() {
    let db = setup().await;
    fresh_room(&db, "IT13", 2, dec!(100)).await;
    let reservations = ReservationRepository::new(db.clone());
    for (from, to) in [
        (date(2090, 5, 20), date(2090, 5, 25)),
        (date(2090, 6, 1), date(2090, 6, 4)),
        (date(2090, 6, 4), date(2090, 6, 6)),
    ] {
        reservations
            .book(&new_reservation("IT13", stay(from, to), "Stats"))
            .await
            .expect("booking should succeed");
    }

    let rows = RoomRepository::new(db.clone())
        .rooms_and_rates(date(2090, 6, 2), 180)
        .await
        .expect("query should succeed");
    let row = rows
        .iter()
        .find(|r| r.room.code == code("IT13"))
        .expect("room should be reported");

    assert_eq!(row.next_available, Some(date(2090, 6, 6)));
    assert_eq!(row.recent_stay_nights, 5);
    assert_eq!(row.last_checkout, Some(date(2090, 5, 25)));
    assert!(row.popularity > dec!(0));

    remove_room(&db, "IT13").await;
}
