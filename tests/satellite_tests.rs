use satcmd::satellite::DATA_PER_COLLECTION;
use satcmd::*;

#[test]
fn test_satellite_initialization() {
    let satellite = Satellite::new();
    let state = satellite.status();

    assert_eq!(state.orientation, Orientation::North);
    assert_eq!(state.solar_panels, PanelState::Inactive);
    assert_eq!(state.data_collected, 0);
}

#[test]
fn test_rotate_to_every_valid_direction() {
    let mut satellite = Satellite::new();

    for direction in ["North", "South", "East", "West", "West", "North"] {
        let result = satellite.rotate(direction);
        assert!(result.is_ok(), "rotate({}) failed: {:?}", direction, result);
        assert_eq!(satellite.orientation().as_str(), direction);
    }
}

#[test]
fn test_rotate_rejects_invalid_direction() {
    let mut satellite = Satellite::new();
    satellite.rotate("South").unwrap();

    for bad in ["north", "Up", "", "NorthEast", "EAST", "West "] {
        let err = satellite.rotate(bad).unwrap_err();
        assert_eq!(err, SatelliteError::InvalidDirection { given: bad.to_string() });
        assert_eq!(err.kind(), ErrorKind::Input);
        assert!(err.to_string().contains("'North', 'South', 'East', or 'West'"));

        // Orientation unchanged
        assert_eq!(satellite.orientation(), Orientation::South);
    }
}

#[test]
fn test_set_solar_panels_same_state_is_transient() {
    let mut satellite = Satellite::new();

    let err = satellite.set_solar_panels(PanelState::Inactive).unwrap_err();
    assert!(err.is_transient());
    assert_eq!(err.to_string(), "Solar panels are already inactive.");
    assert_eq!(satellite.solar_panels(), PanelState::Inactive);

    assert!(satellite.set_solar_panels(PanelState::Active).is_ok());
    assert_eq!(satellite.solar_panels(), PanelState::Active);
}

#[test]
fn test_activate_panels_twice() {
    let mut satellite = Satellite::new();

    let first = satellite.activate_panels();
    assert_eq!(first, Ok(PanelToggle::Switched(PanelState::Active)));
    assert_eq!(satellite.solar_panels(), PanelState::Active);

    // Second activation is absorbed and reported as a notice
    let second = satellite.activate_panels();
    assert_eq!(
        second,
        Ok(PanelToggle::Unchanged(TransientError::PanelsAlready(PanelState::Active)))
    );
    assert_eq!(satellite.solar_panels(), PanelState::Active);
}

#[test]
fn test_deactivate_inactive_panels_is_absorbed() {
    let mut satellite = Satellite::new();

    let result = satellite.deactivate_panels();
    assert!(matches!(result, Ok(PanelToggle::Unchanged(_))));
    assert_eq!(satellite.solar_panels(), PanelState::Inactive);
}

#[test]
fn test_collect_data_with_inactive_panels() {
    let mut satellite = Satellite::new();

    for _ in 0..3 {
        let err = satellite.collect_data().unwrap_err();
        assert_eq!(err, SatelliteError::InactiveSolarPanels);
        assert_eq!(err.kind(), ErrorKind::Logic);
        assert!(!err.is_transient());
        assert_eq!(satellite.data_collected(), 0);
    }
}

#[test]
fn test_collect_data_accumulates() {
    let mut satellite = Satellite::new();
    satellite.activate_panels().unwrap();

    for n in 1..=25u64 {
        assert_eq!(satellite.collect_data().unwrap(), DATA_PER_COLLECTION * n);
    }
    assert_eq!(satellite.data_collected(), 250);
}

#[test]
fn test_collect_data_stops_after_deactivation() {
    let mut satellite = Satellite::new();
    satellite.activate_panels().unwrap();
    satellite.collect_data().unwrap();
    satellite.deactivate_panels().unwrap();

    assert_eq!(satellite.collect_data(), Err(SatelliteError::InactiveSolarPanels));
    assert_eq!(satellite.data_collected(), 10);
}

#[test]
fn test_activate_then_deactivate_round_trip() {
    let mut satellite = Satellite::new();

    satellite.activate_panels().unwrap();
    let result = satellite.deactivate_panels();

    assert_eq!(result, Ok(PanelToggle::Switched(PanelState::Inactive)));
    assert_eq!(satellite.solar_panels(), PanelState::Inactive);
    assert_eq!(satellite.data_collected(), 0);
}

#[test]
fn test_end_to_end_scenario() {
    let mut satellite = Satellite::new();

    satellite.rotate("East").unwrap();
    satellite.activate_panels().unwrap();
    satellite.collect_data().unwrap();
    satellite.collect_data().unwrap();

    let state = satellite.status();
    assert_eq!(
        state,
        SatelliteState {
            orientation: Orientation::East,
            solar_panels: PanelState::Active,
            data_collected: 20,
        }
    );
}

#[test]
fn test_status_has_no_side_effects() {
    let mut satellite = Satellite::new();
    satellite.rotate("West").unwrap();

    let first = satellite.status();
    let second = satellite.status();
    assert_eq!(first, second);
}

#[test]
fn test_state_serializes_with_exact_names() {
    let state = SatelliteState {
        orientation: Orientation::West,
        solar_panels: PanelState::Active,
        data_collected: 40,
    };

    let json = serde_json::to_value(state).unwrap();
    assert_eq!(json["orientation"], "West");
    assert_eq!(json["solar_panels"], "Active");
    assert_eq!(json["data_collected"], 40);
}
