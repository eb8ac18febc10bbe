use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;

mod cli;

use cli::{Cli, Command};
use gcwc_api::{ApiClient, UserProfile};
use gcwc_app::{CalculationsPage, LoginPage, ProfilePage, RegisterPage};
use gcwc_core::{Config, PageState};
use gcwc_session::{Session, SessionStore};
use gcwc_weather::{Coordinates, WeatherProvider};

#[tokio::main]
async fn main() -> Result<()> {
    gcwc_core::init()?;

    let cli = Cli::parse();
    let (config, _validation) =
        Config::load_validated().context("Failed to load configuration")?;
    tracing::debug!("Configuration loaded from {}", config.config_dir.display());

    let store = SessionStore::new(&config.config_dir);
    let api = ApiClient::new(
        &config.api.base_url,
        Duration::from_secs(config.api.timeout_secs),
    )?;

    match cli.command {
        Command::Register {
            username,
            email,
            password,
        } => {
            let mut page = RegisterPage::new(api);
            page.submit(&username, &email, &password).await;
            if let Some(message) = page.state().error() {
                anyhow::bail!("{message}");
            }
            println!("Account created. You can now log in.");
        }
        Command::Login { username, password } => {
            let mut page = LoginPage::new(api, store);
            page.submit(&username, &password).await;
            if let Some(message) = page.state().error() {
                anyhow::bail!("{message}");
            }
            println!("Logged in as {username}.");
        }
        Command::Logout => {
            store
                .clear()
                .map_err(|e| anyhow::anyhow!("{}", e.user_message()))?;
            println!("Logged out.");
        }
        Command::Profile => {
            let session = load_session(&store)?;
            let mut page = ProfilePage::new(api, session);
            page.load().await;
            match page.state() {
                PageState::Ready(profile) => print_profile(profile),
                PageState::Error(message) => anyhow::bail!("{message}"),
                _ => {}
            }
        }
        Command::AddClub { name, distance } => {
            let session = load_session(&store)?;
            let mut page = ProfilePage::new(api, session);
            page.load().await;
            if let Some(message) = page.state().error() {
                anyhow::bail!("{message}");
            }
            page.add_club(&name, distance).await;
            report_mutation(&page, &format!("Added {name}."))?;
        }
        Command::EditClub { id, name, distance } => {
            let session = load_session(&store)?;
            let mut page = ProfilePage::new(api, session);
            page.load().await;
            if let Some(message) = page.state().error() {
                anyhow::bail!("{message}");
            }
            page.edit_club(id, &name, distance).await;
            report_mutation(&page, &format!("Updated club {id}."))?;
        }
        Command::RemoveClub { id } => {
            let session = load_session(&store)?;
            let mut page = ProfilePage::new(api, session);
            page.load().await;
            if let Some(message) = page.state().error() {
                anyhow::bail!("{message}");
            }
            page.remove_club(id).await;
            report_mutation(&page, &format!("Removed club {id}."))?;
        }
        Command::Calc { lat, lon, facing } => {
            let provider = WeatherProvider::with_base_url(
                &config.weather.base_url,
                &config.weather.user_agent,
                Duration::from_secs(config.weather.timeout_secs),
            )?;
            let session = load_session(&store)?;
            let mut page = CalculationsPage::new(api, provider, session);
            page.select_direction(facing);
            let override_coords = resolve_override(lat, lon, &config)?;
            page.run(override_coords).await;
            render_calculations(&page)?;
        }
    }

    Ok(())
}

fn load_session(store: &SessionStore) -> Result<Session> {
    store
        .load()
        .map_err(|e| anyhow::anyhow!("{}", e.user_message()))
}

/// Merge CLI flags with the configured fixed position. Both halves of a
/// coordinate are required; a lone latitude or longitude is an error.
fn resolve_override(
    lat: Option<f64>,
    lon: Option<f64>,
    config: &Config,
) -> Result<Option<Coordinates>> {
    let lat = lat.or(config.location.latitude);
    let lon = lon.or(config.location.longitude);

    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            let coords =
                Coordinates::new(lat, lon).map_err(|e| anyhow::anyhow!("{}", e.user_message()))?;
            Ok(Some(coords))
        }
        (None, None) => Ok(None),
        _ => anyhow::bail!("Provide both --lat and --lon, or neither."),
    }
}

fn print_profile(profile: &UserProfile) {
    println!("Username: {}", profile.username);
    println!("Email:    {}", profile.email);

    if profile.golf_clubs.is_empty() {
        println!("No golf clubs in your bag.");
        return;
    }

    println!("Golf clubs:");
    for club in &profile.golf_clubs {
        println!(
            "  [{}] {} - {} yards",
            club.id, club.club_name, club.distance
        );
    }
}

fn report_mutation(page: &ProfilePage, success: &str) -> Result<()> {
    if let Some(message) = page.action_error() {
        anyhow::bail!("{message}");
    }
    println!("{success}");
    Ok(())
}

fn render_calculations(page: &CalculationsPage) -> Result<()> {
    match page.weather() {
        PageState::Ready(snapshot) => {
            println!("Current weather:");
            println!(
                "  Temperature:    {} {}",
                snapshot.temperature, snapshot.temperature_unit
            );
            println!("  Wind speed:     {}", snapshot.wind_speed);
            println!("  Wind direction: {}", snapshot.wind_direction);
            println!("  Humidity:       {}", snapshot.humidity_field());
        }
        PageState::Error(message) => anyhow::bail!("{message}"),
        _ => anyhow::bail!("Weather data is unavailable."),
    }

    if let Some(message) = page.bag().error() {
        anyhow::bail!("{message}");
    }

    match page.distances() {
        PageState::Ready(clubs) => {
            println!("Adjusted distances facing {}:", page.selected_direction());
            for club in clubs {
                match page.display_distance(club) {
                    Some(adjusted) => println!(
                        "  {} - {} yards (baseline {})",
                        club.club_name, adjusted, club.original_distance
                    ),
                    None => println!("  {} - no data for this direction", club.club_name),
                }
            }
        }
        PageState::EmptyBag => println!("No golf clubs in your bag."),
        PageState::Error(message) => anyhow::bail!("{message}"),
        _ => {}
    }

    Ok(())
}
