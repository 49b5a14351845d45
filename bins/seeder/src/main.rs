//! Database seeder for hotelres development and testing.
//!
//! Seeds the room inventory and a spread of past, current and future
//! reservations around today's date.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{Days, Local, NaiveDate};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hotelres_core::booking::PricingPolicy;
use hotelres_core::stay::{NewReservation, Stay};
use hotelres_db::entities::{reservations, rooms};
use hotelres_db::repositories::{ReservationError, ReservationRepository, RoomRepository};
use hotelres_shared::AppConfig;

/// (code, name, beds, bed type, max occupancy, base price in cents, decor)
const ROOMS: [(&str, &str, i32, &str, i32, i64, &str); 10] = [
    ("AOB", "Abscond or bolster", 2, "Queen", 4, 17_500, "traditional"),
    ("CAS", "Convoke and sanguine", 2, "King", 4, 17_500, "traditional"),
    ("FNA", "Frugal not apropos", 2, "King", 4, 25_000, "traditional"),
    ("HBB", "Harbinger but bequest", 1, "Queen", 2, 10_000, "modern"),
    ("IBD", "Immutable before decorum", 2, "Queen", 4, 15_000, "rustic"),
    ("IBS", "Interim but salutary", 1, "King", 2, 15_000, "traditional"),
    ("MWC", "Mendicant with cryptic", 2, "Double", 4, 12_500, "modern"),
    ("RND", "Recluse and defiance", 1, "King", 2, 15_000, "modern"),
    ("RTE", "Riddle to exculpate", 2, "Queen", 4, 17_500, "rustic"),
    ("TAA", "Thrift and accolade", 1, "Double", 2, 7_500, "modern"),
];

const GUESTS: [(&str, &str); 8] = [
    ("Kathe", "Bonebrake"),
    ("Arnold", "Melencamp"),
    ("Thurman", "Ellenberger"),
    ("Glen", "Trachsel"),
    ("Dennis", "Kemmerer"),
    ("Anneliese", "Voglund"),
    ("Marcel", "Granberry"),
    ("Terrance", "Pietrzak"),
];

/// Stays per room as (days from today to check-in, nights).
const STAY_PATTERN: [(i64, u64); 6] = [(-150, 3), (-90, 4), (-40, 2), (-12, 5), (-1, 3), (20, 4)];

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotelres=info,seeder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load().context("Failed to load configuration")?;

    info!("Connecting to database...");
    let db = hotelres_db::connect_with(&config.database)
        .await
        .context("Failed to connect to database")?;

    info!("Seeding rooms...");
    seed_rooms(&db).await?;

    info!("Seeding reservations...");
    let pricing = PricingPolicy::from_config(&config.booking);
    seed_reservations(&db, &pricing, Local::now().date_naive()).await?;

    info!("Seeding complete!");
    Ok(())
}

async fn seed_rooms(db: &DatabaseConnection) -> anyhow::Result<()> {
    for (code, name, beds, bed_type, max_occupancy, price_cents, decor) in ROOMS {
        if rooms::Entity::find_by_id(code.to_string())
            .one(db)
            .await?
            .is_some()
        {
            info!(room = code, "Room already exists, skipping");
            continue;
        }

        rooms::ActiveModel {
            room_code: Set(code.to_string()),
            room_name: Set(name.to_string()),
            beds: Set(beds),
            bed_type: Set(bed_type.to_string()),
            max_occupancy: Set(max_occupancy),
            base_price: Set(Decimal::new(price_cents, 2)),
            decor: Set(decor.to_string()),
        }
        .insert(db)
        .await
        .with_context(|| format!("Failed to insert room {code}"))?;
    }
    Ok(())
}

async fn seed_reservations(
    db: &DatabaseConnection,
    pricing: &PricingPolicy,
    today: NaiveDate,
) -> anyhow::Result<()> {
    if reservations::Entity::find().count(db).await? > 0 {
        info!("Reservations already exist, skipping");
        return Ok(());
    }

    let rooms = RoomRepository::new(db.clone()).list_rooms().await?;
    let repo = ReservationRepository::new(db.clone());
    let mut booked = 0_usize;

    for (room_index, room) in rooms.iter().enumerate() {
        // Stagger rooms by up to two days.
        let skew = i64::try_from(room_index % 3).unwrap_or(0);
        for (pattern_index, (offset, nights)) in STAY_PATTERN.into_iter().enumerate() {
            if offset == -1 && room_index % 3 == 0 {
                continue;
            }
            let check_in = shift(today, offset + skew)?;
            let check_out = check_in
                .checked_add_days(Days::new(nights))
                .context("date out of range")?;
            let stay = Stay::new(check_in, check_out)?;
            let quote = pricing.quote(room, stay);
            let (first_name, last_name) = GUESTS[(room_index + pattern_index) % GUESTS.len()];

            let new = NewReservation {
                room_code: room.code.clone(),
                stay,
                rate: quote.nightly_rate.amount,
                last_name: last_name.to_string(),
                first_name: first_name.to_string(),
                adults: 1 + i32::from(pattern_index % 2 == 0),
                kids: 0,
            };
            match repo.book(&new).await {
                Ok(_) => booked += 1,
                Err(e @ ReservationError::Conflict { .. }) => warn!(error = %e, "Skipping"),
                Err(e) => return Err(e.into()),
            }
        }
    }

    info!(count = booked, "Reservations seeded");
    Ok(())
}

fn shift(date: NaiveDate, days: i64) -> anyhow::Result<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.context("date out of range")
}
