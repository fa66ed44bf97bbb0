//! Integration tests for polling, configuration and simulation

#![cfg(all(feature = "full-step", feature = "half-step", feature = "tristate"))]

use rotenc::hal::{MockPinError, MockPins};
use rotenc::sim::{Key, Simulator};
use rotenc::traits::EncoderInput;
use rotenc::{Config, EncoderConfig, EncoderVariant, PinSample, PolledEncoder, Rotation};

fn polled(config: &EncoderConfig, bits: &[u8]) -> PolledEncoder<MockPins> {
    let mut pins = MockPins::new();
    pins.queue_bits(bits).unwrap();
    PolledEncoder::from_config(pins, config)
}

fn poll_all(knob: &mut PolledEncoder<MockPins>) -> Vec<Rotation> {
    let mut out = Vec::new();
    while !knob.pins().is_empty() {
        out.push(knob.poll().unwrap());
    }
    out
}

// ============================================================================
// Polling
// ============================================================================

#[test]
fn idle_polling_after_script_adds_nothing() {
    let mut knob = polled(&EncoderConfig::default(), &[1, 0, 2, 3]);
    poll_all(&mut knob);
    for _ in 0..50 {
        assert_eq!(knob.poll(), Ok(Rotation::None));
    }
    assert_eq!(knob.position(), 1);
}

#[test]
fn delta_accumulates_between_reads() {
    let config = EncoderConfig::default().with_variant(EncoderVariant::Tristate);
    let mut knob = polled(&config, &[0, 2, 3, 0, 2, 3, 2, 0, 3]);
    poll_all(&mut knob);
    assert_eq!(knob.read_delta(), 1);

    knob.pins_mut().queue_bits(&[2, 0, 3, 2, 0, 3]).unwrap();
    poll_all(&mut knob);
    assert_eq!(knob.read_delta(), -2);
    assert_eq!(knob.position(), -1);
}

#[test]
fn read_failure_is_recoverable() {
    let mut knob = polled(&EncoderConfig::default(), &[1, 0, 2, 3]);
    knob.poll().unwrap();
    knob.pins_mut().fail_next();
    assert_eq!(knob.poll(), Err(MockPinError));

    let rest = poll_all(&mut knob);
    assert_eq!(rest.last(), Some(&Rotation::Clockwise));
    assert_eq!(knob.position(), 1);
}

#[test]
fn crossed_wiring_fixed_by_config() {
    // Encoder wired with A and B swapped, turned clockwise.
    let crossed: Vec<u8> = [1u8, 0, 2, 3]
        .iter()
        .map(|&b| PinSample::new(b).swapped().bits())
        .collect();

    let mut raw = polled(&EncoderConfig::default(), &crossed);
    poll_all(&mut raw);
    assert_eq!(raw.position(), -1);

    let mut fixed = polled(&EncoderConfig::default().with_swap_pins(true), &crossed);
    poll_all(&mut fixed);
    assert_eq!(fixed.position(), 1);
}

#[test]
fn release_returns_pin_source() {
    let knob = polled(&EncoderConfig::default(), &[1, 0]);
    let pins = knob.release();
    assert_eq!(pins.pending(), 2);
}

// ============================================================================
// Simulation
// ============================================================================

#[test]
fn keystrokes_drive_the_simulation() {
    let mut sim = Simulator::new(EncoderVariant::FullStep);
    let mut last = None;
    for c in "kkkk".chars() {
        last = sim.handle(Key::from_char(c));
    }
    let frame = last.unwrap();
    assert_eq!(frame.rotation, Rotation::Clockwise);
    assert_eq!(frame.value, 1);

    for c in "jjjjjjjj".chars() {
        sim.handle(Key::from_char(c));
    }
    assert_eq!(sim.value(), -1);
}

#[test]
fn switching_mid_turn_starts_fresh() {
    let mut sim = Simulator::new(EncoderVariant::HalfStep);
    sim.handle(Key::Right);
    sim.handle(Key::Right);
    assert_eq!(sim.value(), 1);

    sim.handle(Key::Switch(EncoderVariant::FullStep));
    assert!(sim.encoder().is_at_rest());

    for _ in 0..4 {
        sim.handle(Key::Right);
    }
    assert_eq!(sim.value(), 2);
}

#[test]
fn quit_stops_the_simulation() {
    let mut sim = Simulator::new(EncoderVariant::Tristate);
    assert!(sim.handle(Key::from_char('q')).is_none());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn default_config_builds_full_step() {
    let config = Config::default();
    assert_eq!(config.encoder.build().variant(), EncoderVariant::FullStep);
    assert!(config.simulation.show_state);
}

#[cfg(feature = "json")]
#[test]
fn json_config_drives_polling() {
    let config = Config::from_json(
        r#"{ "encoder": { "name": "jog", "variant": "half_step", "invert_direction": true } }"#,
    )
    .unwrap();
    let mut knob = polled(&config.encoder, &[1, 0, 2, 3]);
    poll_all(&mut knob);
    assert_eq!(knob.position(), -2);
}
