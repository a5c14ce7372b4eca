// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod booking_view;
mod catalog;
mod listing_view;
mod visibility;
mod workflow;

use bike_rent::{BookingEdit, ListingEdit, SelectionHandoff};
use bike_rent_api::{ApiError, translate_domain_error};
use bike_rent_domain::{BikeCategory, BikeSize, RentalQuote, WindowField, parse_date};
use bike_rent_intake::{IntakeClient, IntakeConfig};
use booking_view::BookingView;
use clap::{Parser, Subcommand};
use listing_view::{ListingOutcome, ListingView};
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tracing::info;
use visibility::{Section, VisibilityEvent, VisibilityObserver};
use workflow::{BOOKING_DELIVERED_DETAIL, BookingOutcome, SubmissionWorkflow};

/// Mountain bike rentals and listings for Cape Town
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The flow to run.
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price a bike rental and optionally submit the booking
    Book(BookArgs),
    /// List a bike for rent and optionally submit the listing
    List(ListArgs),
}

/// Inputs for the booking flow.
#[derive(clap::Args, Debug)]
struct BookArgs {
    /// Customer name
    #[arg(long, default_value = "")]
    name: String,

    /// Customer email address
    #[arg(long, default_value = "")]
    email: String,

    /// Delivery address for the bike
    #[arg(long, default_value = "")]
    delivery_location: String,

    /// Rental start date (YYYY-MM-DD)
    #[arg(long)]
    start_date: Option<String>,

    /// Rental end date (YYYY-MM-DD)
    #[arg(long)]
    end_date: Option<String>,

    /// Frame size: S, M, L or XL
    #[arg(long)]
    bike_size: Option<String>,

    /// Bike category, e.g. "hardtail" or "ebike"
    #[arg(long)]
    bike_type: Option<String>,

    /// Include a helmet and gloves with the rental
    #[arg(long)]
    helmet_and_gloves: bool,

    /// Accept the rental terms and conditions
    #[arg(long)]
    accept_terms: bool,

    /// Submit the booking instead of only quoting it
    #[arg(long)]
    submit: bool,

    /// Override the booking intake endpoint
    #[arg(long)]
    booking_endpoint: Option<String>,
}

/// Inputs for the listing flow.
#[derive(clap::Args, Debug)]
struct ListArgs {
    /// Owner name
    #[arg(long, default_value = "")]
    name: String,

    /// Owner email address
    #[arg(long, default_value = "")]
    email: String,

    /// Where the bike is located
    #[arg(long, default_value = "")]
    bike_location: String,

    /// Bike category, e.g. "hardtail" or "ebike"
    #[arg(long)]
    bike_type: Option<String>,

    /// Frame size: S, M, L or XL
    #[arg(long)]
    bike_size: Option<String>,

    /// Model year of the bike
    #[arg(long)]
    bike_year: Option<u16>,

    /// Asking fee per rental day in euros
    #[arg(long)]
    rental_fee: Option<f64>,

    /// Availability window as START:END dates (repeatable)
    #[arg(long = "window", value_name = "START:END")]
    windows: Vec<String>,

    /// Accept the listing terms and conditions
    #[arg(long)]
    accept_terms: bool,

    /// Submit the listing instead of only assembling it
    #[arg(long)]
    submit: bool,

    /// Override the listing intake endpoint
    #[arg(long)]
    listing_endpoint: Option<String>,
}

/// Runs the booking flow: browse the catalog, carry the chosen category
/// into the booking form, apply the edits, and quote or submit.
async fn run_booking(args: BookArgs) -> Result<(), Box<dyn std::error::Error>> {
    let today: Date = OffsetDateTime::now_utc().date();
    let handoff: Arc<SelectionHandoff> = Arc::new(SelectionHandoff::new());
    let observer: VisibilityObserver = VisibilityObserver::new();

    info!("Starting a booking session");
    for entry in catalog::entries() {
        println!("{} - {}", entry.label, entry.price_label);
    }

    if let Some(raw) = &args.bike_type {
        let category: BikeCategory = raw.parse().map_err(translate_domain_error)?;
        catalog::choose(category, &handoff);
    }

    let mut view: BookingView = BookingView::mount(today, Arc::clone(&handoff), &observer);
    observer.announce(VisibilityEvent {
        section: Section::Booking,
        visible: true,
    });
    view.poll_visibility();

    view.edit(BookingEdit::SetName { name: args.name });
    view.edit(BookingEdit::SetEmail { email: args.email });
    view.edit(BookingEdit::SetDeliveryLocation {
        location: args.delivery_location,
    });
    if let Some(raw) = &args.start_date {
        let date: Date = parse_date(raw).map_err(translate_domain_error)?;
        view.edit(BookingEdit::SetStartDate { date: Some(date) });
    }
    if let Some(raw) = &args.end_date {
        let date: Date = parse_date(raw).map_err(translate_domain_error)?;
        view.edit(BookingEdit::SetEndDate { date: Some(date) });
    }
    if let Some(raw) = &args.bike_size {
        let size: BikeSize = raw.parse().map_err(translate_domain_error)?;
        view.edit(BookingEdit::SetBikeSize { size: Some(size) });
    }
    view.edit(BookingEdit::SetHelmetAndGloves {
        enabled: args.helmet_and_gloves,
    });
    view.edit(BookingEdit::SetTermsAccepted {
        accepted: args.accept_terms,
    });

    let quote: &RentalQuote = view.quote();
    if quote.is_zero() {
        println!("No quote yet: pick a bike type and rental dates first.");
    } else {
        println!(
            "Quote: {} day(s) at the {} tier, total {}",
            quote.days,
            quote.discount_tier,
            quote.formatted_total()
        );
    }

    if args.submit {
        let mut config: IntakeConfig = IntakeConfig::default();
        if let Some(endpoint) = args.booking_endpoint {
            config.booking_endpoint = endpoint;
        }
        let client: IntakeClient = IntakeClient::new(config)?;
        let mut workflow: SubmissionWorkflow = SubmissionWorkflow::new(client);

        let outcome: BookingOutcome = view.submit(&mut workflow, today).await?;
        println!("{}", outcome.notice());
        if outcome == BookingOutcome::Delivered {
            println!("{BOOKING_DELIVERED_DETAIL}");
        }
    }

    Ok(())
}

/// Runs the listing flow: assemble the listing from the arguments and
/// quote its readiness or submit it.
async fn run_listing(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let today: Date = OffsetDateTime::now_utc().date();

    let mut config: IntakeConfig = IntakeConfig::default();
    if let Some(endpoint) = args.listing_endpoint {
        config.listing_endpoint = endpoint;
    }
    let client: IntakeClient = IntakeClient::new(config)?;

    info!("Starting a listing session");
    let mut view: ListingView = ListingView::mount(today, client);

    view.edit(ListingEdit::SetName { name: args.name });
    view.edit(ListingEdit::SetEmail { email: args.email });
    view.edit(ListingEdit::SetBikeLocation {
        location: args.bike_location,
    });
    if let Some(raw) = &args.bike_type {
        let category: BikeCategory = raw.parse().map_err(translate_domain_error)?;
        view.edit(ListingEdit::SetBikeCategory {
            category: Some(category),
        });
    }
    if let Some(raw) = &args.bike_size {
        let size: BikeSize = raw.parse().map_err(translate_domain_error)?;
        view.edit(ListingEdit::SetBikeSize { size: Some(size) });
    }
    if let Some(year) = args.bike_year {
        view.edit(ListingEdit::SetBikeYear { year: Some(year) });
    }
    if let Some(fee) = args.rental_fee {
        view.edit(ListingEdit::SetRentalFee { fee: Some(fee) });
    }
    for (index, raw) in args.windows.iter().enumerate() {
        let (start, end) = parse_window(raw)?;
        if index > 0 {
            view.edit(ListingEdit::AddWindow { today });
        }
        view.edit(ListingEdit::SetWindowField {
            index,
            field: WindowField::Start,
            date: start,
        });
        view.edit(ListingEdit::SetWindowField {
            index,
            field: WindowField::End,
            date: end,
        });
    }
    view.edit(ListingEdit::SetTermsAccepted {
        accepted: args.accept_terms,
    });

    println!(
        "Listing has {} availability window(s); ready to submit: {}",
        view.state().windows.len(),
        view.is_submittable()
    );

    if args.submit {
        let outcome: ListingOutcome = view.submit(today).await?;
        println!("{}", outcome.notice());
    }

    Ok(())
}

/// Parses one `START:END` availability window argument.
fn parse_window(raw: &str) -> Result<(Date, Date), ApiError> {
    let Some((start_raw, end_raw)) = raw.split_once(':') else {
        return Err(ApiError::InvalidInput {
            field: String::from("window"),
            message: String::from("expected START:END dates separated by a colon"),
        });
    };
    let start: Date = parse_date(start_raw).map_err(translate_domain_error)?;
    let end: Date = parse_date(end_raw).map_err(translate_domain_error)?;
    Ok((start, end))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing BikeRent");

    match args.command {
        Command::Book(book_args) => run_booking(book_args).await,
        Command::List(list_args) => run_listing(list_args).await,
    }
}
