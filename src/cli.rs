//! Command-line surface for the GCWC client.

use clap::{Parser, Subcommand};

use gcwc_api::CompassDirection;

/// Golf Club Weather Calculator client.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create an account.
    Register {
        username: String,
        email: String,
        password: String,
    },
    /// Log in and persist the session token.
    Login { username: String, password: String },
    /// Clear the persisted session token.
    Logout,
    /// Show the profile and club bag.
    Profile,
    /// Add a club to the bag.
    AddClub {
        name: String,
        /// Carry distance in yards.
        distance: u32,
    },
    /// Edit a club by id.
    EditClub {
        id: i64,
        name: String,
        distance: u32,
    },
    /// Remove a club by id.
    RemoveClub { id: i64 },
    /// Fetch weather for your location and show adjusted distances.
    Calc {
        /// Latitude override; falls back to config, then GCWC_LATITUDE.
        #[arg(long)]
        lat: Option<f64>,
        /// Longitude override; falls back to config, then GCWC_LONGITUDE.
        #[arg(long)]
        lon: Option<f64>,
        /// Compass direction you are facing.
        #[arg(long, default_value = "N")]
        facing: CompassDirection,
    },
}
