//! Menu actions.
//!
//! Each action gathers input through a [`Prompt`], calls the repositories
//! and prints the result. User mistakes are reported and the menu continues.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use sea_orm::{DatabaseConnection, DbErr};
use tracing::{error, info, warn};

use hotelres_core::booking::{
    BedPreference, BookingError, BookingOptions, BookingRequest, BookingService, RoomPreference,
};
use hotelres_core::revenue::MonthBoundary;
use hotelres_core::search::{ReservationQuery, SearchError};
use hotelres_core::stay::{Stay, StayError};
use hotelres_db::{
    ReservationError, ReservationRepository, RevenueReportError, RevenueRepository, RoomRepository,
};
use hotelres_shared::AppConfig;
use hotelres_shared::error::AppError;
use hotelres_shared::types::ReservationCode;

use crate::menu::{MENU, MenuChoice};
use crate::prompt::{Prompt, PromptError};
use crate::render;

/// Why a menu action stopped.
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    /// The terminal failed or closed.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// The action was rejected or the store failed.
    #[error(transparent)]
    App(#[from] AppError),
}

impl From<DbErr> for ActionError {
    fn from(err: DbErr) -> Self {
        Self::App(AppError::Database(err.to_string()))
    }
}

impl From<ReservationError> for ActionError {
    fn from(err: ReservationError) -> Self {
        Self::App(err.into())
    }
}

impl From<RevenueReportError> for ActionError {
    fn from(err: RevenueReportError) -> Self {
        Self::App(err.into())
    }
}

impl From<BookingError> for ActionError {
    fn from(err: BookingError) -> Self {
        ReservationError::Booking(err).into()
    }
}

impl From<SearchError> for ActionError {
    fn from(err: SearchError) -> Self {
        Self::App(AppError::Validation(err.to_string()))
    }
}

impl From<StayError> for ActionError {
    fn from(err: StayError) -> Self {
        Self::App(AppError::Validation(err.to_string()))
    }
}

/// Reads a 1-based option number out of `count`, or `None` for "cancel".
fn pick_option(raw: &str, count: usize) -> Result<Option<usize>, String> {
    if raw.eq_ignore_ascii_case("cancel") {
        return Ok(None);
    }
    match raw.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(Some(n - 1)),
        _ => Err(format!("Enter a number from 1 to {count}, or 'Cancel'.")),
    }
}

/// The reservation desk: repositories plus the policies read from config.
pub struct App {
    rooms: RoomRepository,
    reservations: ReservationRepository,
    revenue: RevenueRepository,
    booking: BookingService,
    popularity_window_days: i64,
    month_boundary: MonthBoundary,
}

impl App {
    /// Creates the desk over an open connection.
    pub fn new(db: DatabaseConnection, config: &AppConfig) -> Self {
        Self {
            rooms: RoomRepository::new(db.clone()),
            reservations: ReservationRepository::new(db.clone()),
            revenue: RevenueRepository::new(db),
            booking: BookingService::from_config(&config.booking),
            popularity_window_days: config.booking.popularity_window_days,
            month_boundary: config.report.month_boundary,
        }
    }

    /// Runs the menu until the user quits or input ends.
    pub async fn run<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompt<R, W>,
    ) -> Result<(), PromptError> {
        loop {
            prompt.say("")?;
            prompt.say(MENU)?;
            let answer = match prompt.ask("Enter command: ") {
                Ok(answer) => answer,
                Err(PromptError::Closed) => break,
                Err(e) => return Err(e),
            };
            let choice = match answer.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    prompt.say(e)?;
                    continue;
                }
            };

            let today = Local::now().date_naive();
            let result = match choice {
                MenuChoice::RoomsAndRates => self.rooms_and_rates(prompt, today).await,
                MenuChoice::Reserve => self.reserve(prompt, today).await,
                MenuChoice::Cancel => self.cancel(prompt).await,
                MenuChoice::Search => self.search(prompt).await,
                MenuChoice::Revenue => self.revenue_report(prompt, today).await,
                MenuChoice::Quit => break,
            };

            match result {
                Ok(()) => {}
                Err(ActionError::Prompt(PromptError::Closed)) => break,
                Err(ActionError::Prompt(e)) => return Err(e),
                Err(ActionError::App(e)) => {
                    if e.is_user_error() {
                        warn!(code = e.error_code(), error = %e, "Action rejected");
                    } else {
                        error!(code = e.error_code(), error = %e, "Action failed");
                    }
                    prompt.say(format!("Error: {e}"))?;
                }
            }
        }
        prompt.say("Goodbye.")
    }

    async fn rooms_and_rates<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompt<R, W>,
        today: NaiveDate,
    ) -> Result<(), ActionError> {
        let rows = self
            .rooms
            .rooms_and_rates(today, self.popularity_window_days)
            .await?;
        prompt.say(render::rooms_table(&rows))?;
        Ok(())
    }

    async fn reserve<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompt<R, W>,
        today: NaiveDate,
    ) -> Result<(), ActionError> {
        prompt.say("Enter your reservation details.")?;
        let first_name = prompt.ask("First name: ")?;
        let last_name = prompt.ask("Last name: ")?;
        let room = prompt.ask_with("Room code (or 'Any'): ", |raw| {
            RoomPreference::parse(raw).map_err(|e| e.to_string())
        })?;
        let bed_type = BedPreference::parse(&prompt.ask("Bed type (or 'Any'): ")?);
        let check_in = prompt.ask_date("Check-in date (YYYY-MM-DD): ")?;
        let check_out = prompt.ask_date("Checkout date (YYYY-MM-DD): ")?;
        let adults = prompt.ask_count("Number of adults: ", 1)?;
        let kids = prompt.ask_count("Number of children: ", 0)?;

        let stay = Stay::new(check_in, check_out)?;
        let request = BookingRequest::new(
            &first_name,
            &last_name,
            room,
            bed_type,
            stay,
            adults,
            kids,
        )?;

        let quotes = match self
            .reservations
            .plan_booking(&self.booking, today, &request)
            .await?
        {
            BookingOptions::Exact(quotes) => {
                prompt.say("\nAvailable rooms:")?;
                quotes
            }
            BookingOptions::Alternatives(quotes) => {
                prompt.say(
                    "\nNo exact match. These rooms are free for stays of the same length \
                     near the dates you requested:",
                )?;
                quotes
            }
            BookingOptions::Unavailable => {
                prompt.say("Unfortunately, no rooms are available.")?;
                return Ok(());
            }
        };
        prompt.say(render::quote_list(&quotes))?;

        let picked = prompt.ask_with("Enter option number to book, or 'Cancel' to exit: ", |raw| {
            pick_option(raw, quotes.len())
        })?;
        let Some(index) = picked else {
            prompt.say("Reservation cancelled.")?;
            return Ok(());
        };
        let quote = &quotes[index];

        prompt.say("")?;
        prompt.say(render::booking_confirmation(&request, quote))?;
        if !prompt.confirm("\nConfirm booking? (yes/no): ")? {
            prompt.say("Booking not made.")?;
            return Ok(());
        }

        let reservation = self
            .reservations
            .book(&BookingService::confirm(&request, quote))
            .await?;
        info!(
            code = reservation.code.into_inner(),
            room = %reservation.room_code,
            stay = %reservation.stay,
            "Reservation booked"
        );
        prompt.say(format!(
            "Reservation {} successfully booked.",
            reservation.code
        ))?;
        Ok(())
    }

    async fn cancel<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompt<R, W>,
    ) -> Result<(), ActionError> {
        let code = prompt.ask_with("Reservation code: ", |raw| {
            raw.parse::<ReservationCode>().map_err(|e| e.to_string())
        })?;

        let details = self
            .reservations
            .find_by_code(code)
            .await?
            .ok_or(ReservationError::NotFound(code))?;
        prompt.say(render::reservation_details(&details))?;

        if !prompt.confirm("\nCancel this reservation? (yes/no): ")? {
            prompt.say("Reservation kept.")?;
            return Ok(());
        }

        self.reservations.cancel(code).await?;
        info!(code = code.into_inner(), "Reservation cancelled");
        prompt.say(format!("Reservation {code} cancelled."))?;
        Ok(())
    }

    async fn search<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompt<R, W>,
    ) -> Result<(), ActionError> {
        prompt.say("Leave a field blank to match anything.")?;
        let first_name = prompt.ask("First name contains: ")?;
        let last_name = prompt.ask("Last name contains: ")?;
        let room = prompt.ask("Room code: ")?;
        let code = prompt.ask("Reservation code: ")?;
        let from = prompt.ask_optional_date("From date (YYYY-MM-DD): ")?;
        let to = prompt.ask_optional_date("To date (YYYY-MM-DD): ")?;

        let query = ReservationQuery::parse(&first_name, &last_name, &room, &code, from, to)?;
        let results = self.reservations.search(&query).await?;
        if results.is_empty() {
            prompt.say("No reservations match.")?;
        } else {
            prompt.say(render::search_table(&results))?;
        }
        Ok(())
    }

    async fn revenue_report<R: BufRead, W: Write>(
        &self,
        prompt: &mut Prompt<R, W>,
        today: NaiveDate,
    ) -> Result<(), ActionError> {
        let report = self
            .revenue
            .compute_monthly_revenue(today, self.month_boundary)
            .await?;
        prompt.say(render::revenue_table(&report))?;
        Ok(())
    }
}
