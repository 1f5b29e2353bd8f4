//! Property Ledger Console
//!
//! Seeds the in-memory store, replays a scenario of user actions against
//! it, and prints the dashboard and detail views with computed health
//! scores. All state lives in this process; a restart starts over from
//! the seed data.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use listing_core::{seed_store, MatchRequest, PropertyStore, StoreError};
use listing_events::PropertyMode;

mod config;
mod report;

use config::{Scenario, ScenarioStep};

/// Command line arguments for the console
#[derive(Parser, Debug)]
#[command(name = "listing_console")]
#[command(about = "Property ledger console: seed data, scenario playback, health report")]
struct Args {
    /// Scenario TOML file to play back (a built-in session runs when omitted)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Only list properties of this mode (LIVING, BUSINESS, PRODUCTION, TRAVEL)
    #[arg(long)]
    mode: Option<PropertyMode>,

    /// Show the full detail view for one property id (e.g. prop-3)
    #[arg(long)]
    property: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run(Args::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = match &args.scenario {
        Some(path) => Scenario::from_file(path)?,
        None => Scenario::default_run(),
    };

    println!("Property Ledger Console");
    println!("=======================");
    println!("Scenario steps: {}", scenario.steps.len());
    println!();

    let mut store = seed_store();
    for step in &scenario.steps {
        apply_step(&mut store, step);
    }

    print!("{}", report::dashboard(&store, args.mode));

    if let Some(property_id) = &args.property {
        println!();
        print!("{}", report::detail(&store, property_id)?);
    }

    Ok(())
}

/// Applies one scenario step. A missing property id is reported and
/// skipped so the rest of the session still plays.
fn apply_step(store: &mut PropertyStore, step: &ScenarioStep) {
    let result: Result<(), StoreError> = match step {
        ScenarioStep::Append {
            property,
            category,
            title,
            description,
        } => store
            .append(property, *category, title.clone(), description.clone(), None)
            .map(|_| ()),
        ScenarioStep::QuickAction { property, action } => {
            store.apply_quick_action(property, *action).map(|_| ())
        }
        ScenarioStep::Message {
            property,
            channel,
            text,
        } => store.send_message(property, *channel, text).map(|_| ()),
        ScenarioStep::MatchRequest {
            mode,
            description,
            budget,
            custom_area,
        } => {
            let mut request = MatchRequest::new(*mode, description.clone(), budget.clone());
            if *custom_area {
                request = request.with_custom_area();
            }
            store.post_match_request(&request);
            Ok(())
        }
    };

    if let Err(e) = result {
        tracing::warn!("skipping scenario step: {}", e);
    }
}
