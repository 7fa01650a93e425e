//! # Satellite Command Simulator
//!
//! A small interactive simulator of one satellite's orientation, solar panel
//! state and cumulative data collection.
//!
//! ## Features
//!
//! - **Finite-state satellite model**: four-way orientation, two-way panel state
//!   and a data counter gated on active panels
//! - **Typed error taxonomy**: input, transient and logic errors with explicit
//!   propagation rules
//! - **Command dispatcher**: textual commands mapped to satellite operations
//!   with structured responses
//! - **Append-only logging**: every state change and error lands in a log file
//!
//! ## Quick Start
//!
//! ```rust
//! use satcmd::{Satellite, PanelToggle};
//!
//! let mut satellite = Satellite::new();
//! satellite.rotate("East").unwrap();
//! assert!(matches!(satellite.activate_panels(), Ok(PanelToggle::Switched(_))));
//! assert_eq!(satellite.collect_data().unwrap(), 10);
//!
//! // A second activation is reported, not raised
//! assert!(matches!(satellite.activate_panels(), Ok(PanelToggle::Unchanged(_))));
//! ```
//!
//! ## Architecture
//!
//! - [`satellite`] - Satellite state machine
//! - [`error`] - Domain error taxonomy
//! - [`protocol`] - Command tokens, commands and responses
//! - [`dispatcher`] - Command execution and error accounting
//! - [`session`] - Interactive read-eval loop
//! - [`console`] - Terminal output formats
//! - [`config`] / [`logging`] - Startup configuration and the log sink

#![deny(warnings)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod console;
pub mod dispatcher;
pub mod error;
pub mod logging;
pub mod protocol;
pub mod satellite;
pub mod session;

// Re-export main public types for convenience
pub use dispatcher::CommandDispatcher;
pub use error::{ErrorKind, SatelliteError, TransientError};
pub use satellite::{Orientation, PanelState, PanelToggle, Satellite, SatelliteState};
pub use session::{Session, SessionSummary};
