use crate::satellite::PanelState;
use thiserror::Error;

/// How the command loop should treat a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad operator input, e.g. an unknown direction token.
    Input,
    /// Redundant request; logged and absorbed where it happens.
    Transient,
    /// Request that is valid input but not allowed in the current state.
    Logic,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransientError {
    #[error("Solar panels are already {}.", .0.as_lowercase())]
    PanelsAlready(PanelState),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SatelliteError {
    #[error("Invalid direction '{given}'. Use 'North', 'South', 'East', or 'West'.")]
    InvalidDirection { given: String },
    #[error(transparent)]
    Transient(#[from] TransientError),
    #[error("Cannot collect data with inactive solar panels.")]
    InactiveSolarPanels,
}

impl SatelliteError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SatelliteError::InvalidDirection { .. } => ErrorKind::Input,
            SatelliteError::Transient(_) => ErrorKind::Transient,
            SatelliteError::InactiveSolarPanels => ErrorKind::Logic,
        }
    }

    #[must_use]
    pub fn is_transient(&self) -> bool {
        self.kind() == ErrorKind::Transient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SatelliteError::from(TransientError::PanelsAlready(PanelState::Active));
        assert_eq!(err.to_string(), "Solar panels are already active.");
        assert!(err.is_transient());

        let err = SatelliteError::InvalidDirection { given: "Up".to_string() };
        assert!(err.to_string().contains("'North', 'South', 'East', or 'West'"));
        assert_eq!(err.kind(), ErrorKind::Input);

        assert_eq!(SatelliteError::InactiveSolarPanels.kind(), ErrorKind::Logic);
    }
}
