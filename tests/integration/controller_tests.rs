//! Integration tests for the GarageController → ports pipeline.

use parkgate::app::state::{DoorState, LightState};
use parkgate::config::GarageConfig;
use parkgate::error::Error;
use parkgate::fee::FeeSchedule;
use parkgate::pins;
use parkgate::sensors::SensorId;

use super::mock_hw::{HwCall, at, rig, rig_with};

// ── Construction ──────────────────────────────────────────────

#[test]
fn startup_moves_gate_to_closed_reference() {
    let r = rig();
    assert_eq!(
        r.log.calls(),
        [HwCall::SetPosition(2.0), HwCall::Wait, HwCall::SetPosition(0.0)]
    );
    assert_eq!(r.garage.door_state(), DoorState::Closed);
    assert_eq!(r.garage.light_state(), LightState::Off);
}

// ── Occupancy ─────────────────────────────────────────────────

#[test]
fn check_occupancy_returns_live_reading() {
    let mut r = rig();
    r.sensors.set([false, true, false]);
    assert_eq!(r.garage.check_occupancy(pins::INFRARED_PIN1), Ok(false));
    assert_eq!(r.garage.check_occupancy(pins::INFRARED_PIN2), Ok(true));
    assert_eq!(r.garage.check_occupancy(pins::INFRARED_PIN3), Ok(false));

    // Not cached: the next call sees the new value.
    r.sensors.set([true, true, false]);
    assert_eq!(r.garage.check_occupancy(pins::INFRARED_PIN1), Ok(true));
}

#[test]
fn check_occupancy_rejects_led_pin_without_reading() {
    let mut r = rig();
    let before = r.sensors.reads.get();
    assert_eq!(
        r.garage.check_occupancy(pins::LED_PIN),
        Err(Error::InvalidSensor(pins::LED_PIN))
    );
    assert_eq!(r.sensors.reads.get(), before);
}

#[test]
fn count_reads_each_sensor_once() {
    let mut r = rig();
    r.sensors.set([true, false, true]);
    let before = r.sensors.reads.get();
    assert_eq!(r.garage.count_occupied_spots(), 2);
    assert_eq!(r.sensors.reads.get() - before, 3);
}

#[test]
fn count_covers_every_combination() {
    let mut r = rig();
    for mask in 0u8..8 {
        let bays = [mask & 1 != 0, mask & 2 != 0, mask & 4 != 0];
        r.sensors.set(bays);
        assert_eq!(
            r.garage.count_occupied_spots(),
            mask.count_ones() as u8,
            "bays={bays:?}"
        );
    }
}

// ── Fees ──────────────────────────────────────────────────────

#[test]
fn fee_weekday_three_hours() {
    let mut r = rig();
    r.clock.set(at(2025, 11, 20, 15, 24));
    let fee = r.garage.calculate_parking_fee(at(2025, 11, 20, 12, 30));
    assert_eq!(fee.amount(), 7.50);
}

#[test]
fn fee_partial_fourth_hour() {
    let mut r = rig();
    r.clock.set(at(2025, 11, 20, 15, 40));
    let fee = r.garage.calculate_parking_fee(at(2025, 11, 20, 12, 30));
    assert_eq!(fee.amount(), 10.0);
}

#[test]
fn fee_weekend_surcharge() {
    let mut r = rig();
    r.clock.set(at(2025, 11, 22, 15, 24));
    let fee = r.garage.calculate_parking_fee(at(2025, 11, 22, 12, 30));
    assert_eq!(fee.amount(), 9.375);
}

#[test]
fn fee_follows_configured_tariff() {
    let config = GarageConfig {
        hourly_rate: 3.0,
        weekend_multiplier: 2.0,
        ..GarageConfig::default()
    };
    let mut r = rig_with(&config);
    r.clock.set(at(2025, 11, 23, 10, 30));
    let fee = r.garage.calculate_parking_fee(at(2025, 11, 23, 10, 0));
    assert_eq!(fee.amount(), 6.0);

    assert_eq!(r.garage.fee_schedule(), FeeSchedule::new(3.0, 2.0));
}

#[test]
fn read_sensor_by_id_matches_pin_lookup() {
    let mut r = rig();
    r.sensors.set([false, false, true]);
    assert!(!r.garage.read_sensor(SensorId::Bay1));
    assert!(r.garage.read_sensor(SensorId::Bay3));
    assert_eq!(r.garage.check_occupancy(SensorId::Bay3.pin()), Ok(true));
}

// ── Gate ──────────────────────────────────────────────────────

#[test]
fn open_door_commands_open_then_neutral() {
    let mut r = rig();
    r.log.clear();
    r.garage.open_door();
    assert_eq!(r.garage.door_state(), DoorState::Open);
    assert!(r.garage.door_state().is_open());
    assert_eq!(
        r.log.calls(),
        [HwCall::SetPosition(12.0), HwCall::Wait, HwCall::SetPosition(0.0)]
    );
}

#[test]
fn close_door_commands_closed_then_neutral() {
    let mut r = rig();
    r.garage.open_door();
    r.log.clear();
    r.garage.close_door();
    assert_eq!(r.garage.door_state(), DoorState::Closed);
    assert!(!r.garage.door_state().is_open());
    assert_eq!(r.log.count(&HwCall::SetPosition(2.0)), 1);
    assert_eq!(r.log.count(&HwCall::SetPosition(12.0)), 0);
    assert_eq!(r.log.positions().last(), Some(&0.0));
}

#[test]
fn open_twice_is_not_deduplicated() {
    let mut r = rig();
    r.log.clear();
    r.garage.open_door();
    assert_eq!(r.garage.door_state(), DoorState::Open);
    r.garage.open_door();
    assert_eq!(r.garage.door_state(), DoorState::Open);
    assert_eq!(r.log.count(&HwCall::SetPosition(12.0)), 2);
    assert_eq!(r.log.count(&HwCall::Wait), 2);
}

#[test]
fn close_while_closed_still_drives_servo() {
    let mut r = rig();
    r.log.clear();
    r.garage.close_door();
    assert_eq!(r.garage.door_state(), DoorState::Closed);
    assert_eq!(r.log.count(&HwCall::SetPosition(2.0)), 1);
}

// ── Indicator ─────────────────────────────────────────────────

#[test]
fn turn_on_and_off_light() {
    let mut r = rig();
    r.garage.turn_on_light();
    assert_eq!(r.garage.light_state(), LightState::On);
    assert_eq!(r.log.last_light(), Some(true));

    r.garage.turn_off_light();
    assert_eq!(r.garage.light_state(), LightState::Off);
    assert_eq!(r.log.last_light(), Some(false));
}

#[test]
fn light_on_when_garage_full() {
    let mut r = rig();
    r.sensors.set([true; 3]);
    r.garage.update_light_policy();
    assert_eq!(r.garage.light_state(), LightState::On);
    assert_eq!(r.log.last_light(), Some(true));
}

#[test]
fn light_off_when_not_full() {
    for bays in [[false; 3], [true, false, false], [true, true, false], [false, true, true]] {
        let mut r = rig();
        r.garage.turn_on_light();
        r.sensors.set(bays);
        r.garage.update_light_policy();
        assert_eq!(r.garage.light_state(), LightState::Off, "bays={bays:?}");
        assert_eq!(r.log.last_light(), Some(false));
    }
}

#[test]
fn light_policy_reissues_command_each_call() {
    let mut r = rig();
    r.sensors.set([true; 3]);
    r.garage.update_light_policy();
    r.garage.update_light_policy();
    assert_eq!(r.log.count(&HwCall::SetLight(true)), 2);
}

#[test]
fn light_policy_does_not_move_gate() {
    let mut r = rig();
    r.log.clear();
    r.sensors.set([true; 3]);
    r.garage.update_light_policy();
    assert!(r.log.positions().is_empty());
    assert_eq!(r.garage.door_state(), DoorState::Closed);
}
