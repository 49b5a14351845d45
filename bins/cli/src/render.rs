//! Plain-text tables for the terminal.
//!
//! Every function returns the finished text so output can be checked
//! without a terminal.

use hotelres_core::booking::{BookingRequest, Quote};
use hotelres_core::revenue::{MONTH_LABELS, RevenueReport};
use hotelres_core::rooms::RoomStatistics;
use hotelres_core::stay::{Reservation, ReservationDetails};

const AVAILABLE_NOW: &str = "Available Now";
const NEVER_OCCUPIED: &str = "Never Occupied";

/// Rooms with their occupancy statistics.
pub fn rooms_table(rows: &[RoomStatistics]) -> String {
    let mut lines = vec![
        format!(
            "{:<6} {:<26} {:<7} {:<4} {:>9} {:>10} {:<14} {:>10} {:<14}",
            "Code",
            "Name",
            "Bed",
            "Max",
            "Price",
            "Popularity",
            "Next Check-in",
            "Last Stay",
            "Last Checkout"
        ),
        "-".repeat(109),
    ];
    lines.extend(rows.iter().map(|row| {
        let next = row
            .next_available
            .map_or_else(|| AVAILABLE_NOW.to_string(), |d| d.to_string());
        let last = row
            .last_checkout
            .map_or_else(|| NEVER_OCCUPIED.to_string(), |d| d.to_string());
        format!(
            "{:<6} {:<26} {:<7} {:<4} {:>9.2} {:>10.2} {:<14} {:>10} {:<14}",
            row.room.code.as_str(),
            row.room.name,
            row.room.bed_type,
            row.room.max_occupancy,
            row.room.base_price,
            row.popularity,
            next,
            format!("{} nights", row.recent_stay_nights),
            last
        )
    }));
    lines.join("\n")
}

/// Numbered booking options.
pub fn quote_list(quotes: &[Quote]) -> String {
    quotes
        .iter()
        .enumerate()
        .map(|(i, quote)| {
            format!(
                "{:>2}. {:<6} {:<26} {:<7} {}  {} ({} nights)",
                i + 1,
                quote.room.code.as_str(),
                quote.room.name,
                quote.room.bed_type,
                quote.stay,
                quote.total,
                quote.stay.nights()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Summary shown before a booking is confirmed.
pub fn booking_confirmation(request: &BookingRequest, quote: &Quote) -> String {
    [
        "Booking Confirmation:".to_string(),
        format!("  Name:     {} {}", request.first_name, request.last_name),
        format!(
            "  Room:     {} ({}), {} bed",
            quote.room.code, quote.room.name, quote.room.bed_type
        ),
        format!("  Dates:    {}", quote.stay),
        format!("  Guests:   {} adults, {} children", request.adults, request.kids),
        format!(
            "  Nights:   {} weekday, {} weekend",
            quote.weekday_nights, quote.weekend_nights
        ),
        format!("  Rate:     {} per night (average)", quote.nightly_rate),
        format!("  Total:    {}", quote.total),
    ]
    .join("\n")
}

/// A single reservation with its room name.
pub fn reservation_details(details: &ReservationDetails) -> String {
    let r = &details.reservation;
    [
        format!("Reservation {}", r.code),
        format!("  Guest:    {} {}", r.first_name, r.last_name),
        format!("  Room:     {} ({})", r.room_code, details.room_name),
        format!("  Dates:    {}", r.stay),
        format!("  Guests:   {} adults, {} children", r.adults, r.kids),
        format!("  Charge:   {:.2} at {:.2} per night", r.total_charge(), r.rate),
    ]
    .join("\n")
}

/// Search results, one line per reservation.
pub fn search_table(results: &[ReservationDetails]) -> String {
    let mut lines = vec![
        format!(
            "{:>6} {:<6} {:<26} {:<10} {:<10} {:>8} {:<15} {:<15} {:>3} {:>3}",
            "Code",
            "Room",
            "Name",
            "Check-in",
            "Checkout",
            "Rate",
            "Last Name",
            "First Name",
            "Ad",
            "Ki"
        ),
        "-".repeat(110),
    ];
    lines.extend(results.iter().map(|details| {
        let r: &Reservation = &details.reservation;
        format!(
            "{:>6} {:<6} {:<26} {:<10} {:<10} {:>8.2} {:<15} {:<15} {:>3} {:>3}",
            r.code.into_inner(),
            r.room_code.as_str(),
            details.room_name,
            r.stay.check_in(),
            r.stay.check_out(),
            r.rate,
            r.last_name,
            r.first_name,
            r.adults,
            r.kids
        )
    }));
    lines.push(format!("{} reservation(s)", results.len()));
    lines.join("\n")
}

/// Month-by-month revenue with a trailing totals row.
pub fn revenue_table(report: &RevenueReport) -> String {
    let amount_headers = MONTH_LABELS.iter().copied().chain(std::iter::once("Total"));
    let header = amount_headers
        .map(|h| format!(" {h:>8}"))
        .collect::<Vec<_>>()
        .concat();

    let mut lines = vec![
        format!("Revenue for {}", report.year),
        format!("{:<8} {:<26}{header}", "RoomCode", "RoomName"),
        "-".repeat(35 + header.len()),
    ];
    lines.extend(report.rows().map(|row| {
        let code = row.room_code().map_or("", |c| c.as_str());
        let name = row.room_name().unwrap_or("Total");
        let cells = row
            .months
            .iter()
            .chain(std::iter::once(&row.total))
            .map(|cell| format!(" {:>8}", cell.normalize()))
            .collect::<Vec<_>>()
            .concat();
        format!("{code:<8} {name:<26}{cells}")
    }));

    if report.is_empty() {
        lines.push("(no rooms)".to_string());
    }
    lines.join("\n")
}
