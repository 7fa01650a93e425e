use crate::error::{SatelliteError, TransientError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

pub const DATA_PER_COLLECTION: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    #[default]
    North,
    South,
    East,
    West,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::South,
        Orientation::East,
        Orientation::West,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::North => "North",
            Orientation::South => "South",
            Orientation::East => "East",
            Orientation::West => "West",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction tokens are case-sensitive: only the exact names parse.
impl FromStr for Orientation {
    type Err = SatelliteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| SatelliteError::InvalidDirection { given: s.to_string() })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanelState {
    Active,
    #[default]
    Inactive,
}

impl PanelState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PanelState::Active => "Active",
            PanelState::Inactive => "Inactive",
        }
    }

    #[must_use]
    pub fn as_lowercase(self) -> &'static str {
        match self {
            PanelState::Active => "active",
            PanelState::Inactive => "inactive",
        }
    }

    #[must_use]
    pub fn transition_verb(self) -> &'static str {
        match self {
            PanelState::Active => "activated",
            PanelState::Inactive => "deactivated",
        }
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SatelliteState {
    pub orientation: Orientation,
    pub solar_panels: PanelState,
    pub data_collected: u64,
}

/// Result of a panel toggle once transient failures have been absorbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelToggle {
    Switched(PanelState),
    Unchanged(TransientError),
}

/// Runs a fallible operation and absorbs transient failures.
///
/// A transient error is logged at WARN and handed back as `Ok(Err(..))` so
/// the caller can report it. Every other error is returned untouched.
///
/// # Errors
///
/// Returns any non-transient error from `result` unchanged.
pub fn absorb_transient<T>(
    result: Result<T, SatelliteError>,
) -> Result<Result<T, TransientError>, SatelliteError> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(SatelliteError::Transient(notice)) => {
            warn!("Transient Error: {notice}");
            Ok(Err(notice))
        }
        Err(e) => Err(e),
    }
}

#[derive(Debug, Default)]
pub struct Satellite {
    state: SatelliteState,
}

impl Satellite {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// # Errors
    ///
    /// Returns [`SatelliteError::InvalidDirection`] unless `direction` is exactly
    /// `North`, `South`, `East` or `West`; the orientation is left unchanged.
    pub fn rotate(&mut self, direction: &str) -> Result<Orientation, SatelliteError> {
        let orientation = direction.parse::<Orientation>()?;
        self.state.orientation = orientation;
        info!("Rotated to {orientation}.");
        Ok(orientation)
    }

    /// # Errors
    ///
    /// Returns a transient error when the panels are already in `status`.
    pub fn set_solar_panels(&mut self, status: PanelState) -> Result<(), SatelliteError> {
        if self.state.solar_panels == status {
            return Err(TransientError::PanelsAlready(status).into());
        }

        self.state.solar_panels = status;
        info!("Solar panels {}.", status.transition_verb());
        Ok(())
    }

    /// # Errors
    ///
    /// Transient failures are absorbed into [`PanelToggle::Unchanged`]; only
    /// other errors are returned.
    pub fn activate_panels(&mut self) -> Result<PanelToggle, SatelliteError> {
        self.toggle_panels(PanelState::Active)
    }

    /// # Errors
    ///
    /// Same contract as [`Satellite::activate_panels`].
    pub fn deactivate_panels(&mut self) -> Result<PanelToggle, SatelliteError> {
        self.toggle_panels(PanelState::Inactive)
    }

    fn toggle_panels(&mut self, target: PanelState) -> Result<PanelToggle, SatelliteError> {
        let toggle = match absorb_transient(self.set_solar_panels(target))? {
            Ok(()) => PanelToggle::Switched(target),
            Err(notice) => PanelToggle::Unchanged(notice),
        };
        Ok(toggle)
    }

    /// Returns the running total after a successful collection.
    ///
    /// # Errors
    ///
    /// Returns [`SatelliteError::InactiveSolarPanels`] while the panels are off.
    pub fn collect_data(&mut self) -> Result<u64, SatelliteError> {
        if self.state.solar_panels != PanelState::Active {
            return Err(SatelliteError::InactiveSolarPanels);
        }

        self.state.data_collected = self.state.data_collected.saturating_add(DATA_PER_COLLECTION);
        info!("Data collected.");
        Ok(self.state.data_collected)
    }

    #[must_use]
    pub fn status(&self) -> SatelliteState {
        self.state
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.state.orientation
    }

    #[must_use]
    pub fn solar_panels(&self) -> PanelState {
        self.state.solar_panels
    }

    #[must_use]
    pub fn data_collected(&self) -> u64 {
        self.state.data_collected
    }
}
