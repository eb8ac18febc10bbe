//! Calculations page: the dependent fetch pipeline.
//!
//! Stage one loads the club bag and resolves the user position into a
//! weather snapshot; stage two submits that snapshot for adjusted
//! distances. The stage-two request is built from the ready snapshot
//! payload, so distance computation cannot run ahead of (or without)
//! weather resolution, and it never starts unless the bag loaded too.

use gcwc_api::{AdjustedClub, ApiClient, CalculationRequest, CompassDirection, GolfClub};
use gcwc_core::PageState;
use gcwc_session::Session;
use gcwc_weather::{location, Coordinates, WeatherProvider, WeatherSnapshot};

pub struct CalculationsPage {
    api: ApiClient,
    provider: WeatherProvider,
    session: Session,
    bag: PageState<Vec<GolfClub>>,
    weather: PageState<WeatherSnapshot>,
    distances: PageState<Vec<AdjustedClub>>,
    selected_direction: CompassDirection,
}

impl CalculationsPage {
    pub fn new(api: ApiClient, provider: WeatherProvider, session: Session) -> Self {
        Self {
            api,
            provider,
            session,
            bag: PageState::Uninitialized,
            weather: PageState::Uninitialized,
            distances: PageState::Uninitialized,
            selected_direction: CompassDirection::N,
        }
    }

    pub fn bag(&self) -> &PageState<Vec<GolfClub>> {
        &self.bag
    }

    pub fn weather(&self) -> &PageState<WeatherSnapshot> {
        &self.weather
    }

    pub fn distances(&self) -> &PageState<Vec<AdjustedClub>> {
        &self.distances
    }

    pub fn selected_direction(&self) -> CompassDirection {
        self.selected_direction
    }

    /// Choose which compass column to display.
    pub fn select_direction(&mut self, direction: CompassDirection) {
        self.selected_direction = direction;
    }

    /// Run the full pipeline: bag, then location → weather, then adjusted
    /// distances.
    ///
    /// Geolocation denial or absence is terminal for the weather stage;
    /// the distance stage never starts unless both the bag and the
    /// snapshot are ready.
    pub async fn run(&mut self, override_coords: Option<Coordinates>) {
        self.distances = PageState::Uninitialized;

        self.load_bag().await;
        self.load_weather(override_coords).await;
        self.compute_distances().await;
    }

    async fn load_bag(&mut self) {
        self.bag = PageState::Loading;

        match self.api.get_profile(&self.session).await {
            Ok(profile) => self.bag = PageState::Ready(profile.golf_clubs),
            Err(e) => {
                tracing::warn!("Club bag load failed: {}", e);
                self.bag = PageState::Error(e.user_message());
            }
        }
    }

    async fn load_weather(&mut self, override_coords: Option<Coordinates>) {
        self.weather = PageState::Loading;

        let coords = match location::resolve(override_coords) {
            Ok(coords) => coords,
            Err(e) => {
                tracing::warn!("Geolocation failed: {}", e);
                self.weather = PageState::Error(e.user_message().to_string());
                return;
            }
        };

        match self.provider.fetch(coords).await {
            Ok(snapshot) => self.weather = PageState::Ready(snapshot),
            Err(e) => {
                tracing::warn!("Weather resolution failed: {}", e);
                self.weather = PageState::Error(e.user_message());
            }
        }
    }

    /// Stage two; only reachable with a loaded bag and a ready snapshot.
    async fn compute_distances(&mut self) {
        if !self.bag.is_ready() {
            return;
        }
        let request = match self.weather.ready() {
            Some(snapshot) => request_from_snapshot(snapshot),
            None => return,
        };

        self.distances = PageState::Loading;

        match self.api.calculate(&self.session, &request).await {
            Ok(clubs) => self.distances = PageState::Ready(clubs),
            Err(e) if e.is_empty_bag() => self.distances = PageState::EmptyBag,
            Err(e) => {
                tracing::warn!("Distance calculation failed: {}", e);
                self.distances = PageState::Error(e.user_message());
            }
        }
    }

    /// Adjusted distance of one club for the selected direction.
    pub fn display_distance(&self, club: &AdjustedClub) -> Option<f64> {
        club.distance_for(self.selected_direction)
    }
}

/// Weather fields in the backend's wire shape.
fn request_from_snapshot(snapshot: &WeatherSnapshot) -> CalculationRequest {
    CalculationRequest {
        temperature: snapshot.temperature,
        wind_speed: snapshot.wind_speed.clone(),
        wind_direction: snapshot.wind_direction.clone(),
        humidity: snapshot.humidity_field(),
    }
}
