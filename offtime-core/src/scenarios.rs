//! whole power cycle sequences against the simulated supply

use crate::config::{ADC_LOW, DUTY_LOW_VOLTAGE, DUTY_MAX, MONITOR_INTERVAL_MS};
use crate::dispatch;
use crate::drivers::Behavior;
use crate::modes::{RegularMode, Selection, StrobeMode, N_MODES};
use crate::port::NoStore;
use crate::session::SessionRecord;
use crate::test_support::{SimPort, SimStore, SimSupply};

const LONG_OFF: u32 = 1500;
const SHORT_OFF: u32 = 200;
const TAP_ON: u32 = 10;
const HOLD_ON: u32 = 1200;

#[test]
fn cold_start_then_three_taps_latch_strobe() {
    let mut supply = SimSupply::new();
    let p = supply.cycle(LONG_OFF, HOLD_ON);
    assert_eq!(p.selection, Selection::Regular(RegularMode::Moon));
    assert_eq!(supply.record().mode_index, 0);

    for expected in 1..=3u8 {
        supply.cycle(SHORT_OFF, TAP_ON);
        assert_eq!(supply.record().mode_index, expected);
        assert_eq!(supply.record().strobe_latched(), expected == 3);
    }
    let p = supply.power_on(TAP_ON);
    assert_eq!(p.selection, Selection::Strobe(StrobeMode::Rapid));
}

#[test]
fn held_presses_walk_the_mode_list() {
    let mut supply = SimSupply::new();
    supply.cycle(LONG_OFF, HOLD_ON);
    let mut previous = supply.record().mode_index;
    for _ in 0..3 * N_MODES {
        supply.cycle(SHORT_OFF, HOLD_ON);
        let mode = supply.record().mode_index;
        assert_eq!(usize::from(mode), (usize::from(previous) + 1) % N_MODES);
        assert!(!supply.record().strobe_latched());
        previous = mode;
    }
}

#[test]
fn long_off_always_back_to_defaults() {
    for seed in 1..64 {
        let mut supply = SimSupply::new().seed(seed * 7919);
        let p = supply.cycle(LONG_OFF, HOLD_ON);
        assert_eq!(p.selection, Selection::Regular(RegularMode::Moon));
        assert_eq!(supply.record(), SessionRecord::default());
    }
}

#[test]
fn long_off_after_presses_back_to_defaults() {
    for seed in 1..16 {
        let mut supply = SimSupply::new().seed(seed * 104_729);
        supply.cycle(LONG_OFF, HOLD_ON);
        supply.cycle(SHORT_OFF, HOLD_ON);
        supply.cycle(SHORT_OFF, HOLD_ON);
        supply.cycle(SHORT_OFF, TAP_ON);
        assert_ne!(supply.record(), SessionRecord::default());
        let p = supply.cycle(LONG_OFF, HOLD_ON);
        assert_eq!(p.selection, Selection::Regular(RegularMode::Moon));
        assert_eq!(supply.record(), SessionRecord::default());
    }
}

#[test]
fn long_off_with_mode_memory_restores_saved_mode() {
    let mut supply = SimSupply::new().with_store(SimStore::new());
    supply.cycle(LONG_OFF, HOLD_ON);
    supply.cycle(SHORT_OFF, HOLD_ON);
    supply.cycle(SHORT_OFF, HOLD_ON);
    assert_eq!(supply.store().mode(), Some(2));
    let p = supply.cycle(LONG_OFF, HOLD_ON);
    assert_eq!(p.selection, Selection::Regular(RegularMode::Medium));
    assert_eq!(supply.record().short_press_count, 0);
}

#[test]
fn decay_flag_zero_after_every_boot() {
    let mut supply = SimSupply::new();
    let pattern = [
        (LONG_OFF, HOLD_ON),
        (SHORT_OFF, TAP_ON),
        (SHORT_OFF, HOLD_ON),
        (LONG_OFF, TAP_ON),
        (SHORT_OFF, TAP_ON),
        (SHORT_OFF, TAP_ON),
        (SHORT_OFF, TAP_ON),
    ];
    for &(off, on) in pattern.iter() {
        supply.cycle(off, on);
        assert_eq!(supply.record().decay_flag, 0);
    }
}

#[test]
fn strobe_latch_survives_until_long_off() {
    let mut supply = SimSupply::new();
    supply.cycle(LONG_OFF, HOLD_ON);
    for _ in 0..3 {
        supply.cycle(SHORT_OFF, TAP_ON);
    }
    assert!(supply.record().strobe_latched());
    for _ in 0..5 {
        let p = supply.cycle(SHORT_OFF, HOLD_ON);
        assert_eq!(p.selection, Selection::Strobe(StrobeMode::Rapid));
    }
    let p = supply.cycle(LONG_OFF, HOLD_ON);
    assert_eq!(p.selection, Selection::Regular(RegularMode::Moon));
    assert!(!supply.record().strobe_latched());
}

#[test]
fn taps_held_past_window_never_latch() {
    let mut supply = SimSupply::new();
    supply.cycle(LONG_OFF, HOLD_ON);
    for _ in 0..10 {
        supply.cycle(SHORT_OFF, 30);
        assert!(!supply.record().strobe_latched());
        assert_eq!(supply.record().short_press_count, 0);
    }
}

#[test]
fn held_boot_resets_the_run() {
    let mut supply = SimSupply::new();
    supply.cycle(LONG_OFF, HOLD_ON);
    supply.cycle(SHORT_OFF, TAP_ON);
    assert_eq!(supply.record().short_press_count, 1);
    supply.cycle(SHORT_OFF, HOLD_ON);
    assert_eq!(supply.record().short_press_count, 0);
    supply.cycle(SHORT_OFF, TAP_ON);
    supply.cycle(SHORT_OFF, TAP_ON);
    assert_eq!(supply.record().short_press_count, 2);
    assert!(!supply.record().strobe_latched());
}

#[test]
fn decay_window_is_a_parameter() {
    let mut supply = SimSupply::with_window(2000);
    supply.cycle(5000, HOLD_ON);
    supply.cycle(1000, HOLD_ON);
    assert_eq!(supply.record().mode_index, 1);

    let mut supply = SimSupply::with_window(100);
    supply.cycle(5000, HOLD_ON);
    supply.cycle(200, HOLD_ON);
    assert_eq!(supply.record().mode_index, 0);
}

#[test]
fn off_time_at_the_window_counts_as_long() {
    let mut supply = SimSupply::with_window(500);
    supply.cycle(LONG_OFF, HOLD_ON);
    supply.cycle(SHORT_OFF, HOLD_ON);
    assert_eq!(supply.record().mode_index, 1);
    supply.cycle(500, HOLD_ON);
    assert_eq!(supply.record().mode_index, 0);
}

#[test]
fn low_battery_steps_down_then_halts() {
    let mut port = SimPort::new();
    let mut record = SessionRecord {
        mode_index: 2,
        ..SessionRecord::default()
    };
    port.queue_samples(&[ADC_LOW - 1; 8]);
    let mut behavior = dispatch::boot(&mut port, &mut record, &mut NoStore);
    assert_eq!(port.duty(), DUTY_MAX);

    let start = port.now_ms();
    for _ in 0..4 {
        behavior.step(&mut port, &mut record);
    }
    assert_eq!(port.duty(), DUTY_LOW_VOLTAGE);
    assert_eq!(port.now_ms() - start, 4 * u32::from(MONITOR_INTERVAL_MS));

    for _ in 0..4 {
        behavior.step(&mut port, &mut record);
    }
    assert_eq!(port.duty(), 0);
    assert!(port.halted());
    assert!(matches!(behavior, Behavior::Halted));
}

#[test]
fn recovered_cell_keeps_light_on() {
    let mut port = SimPort::new();
    let mut record = SessionRecord {
        mode_index: 2,
        ..SessionRecord::default()
    };
    let low = ADC_LOW - 1;
    port.queue_samples(&[low, low, low, low, low, low, low, ADC_LOW]);
    port.queue_samples(&[low; 7]);
    let mut behavior = dispatch::boot(&mut port, &mut record, &mut NoStore);
    for _ in 0..15 {
        behavior.step(&mut port, &mut record);
    }
    assert!(!port.halted());
    assert_eq!(port.duty(), DUTY_LOW_VOLTAGE);
    behavior.step(&mut port, &mut record);
    behavior.step(&mut port, &mut record);
    assert!(!port.halted());
}

#[test]
fn ramp_level_carried_into_mode_memory() {
    let mut supply = SimSupply::new().with_store(SimStore::new());
    supply.cycle(LONG_OFF, HOLD_ON);
    for _ in 0..5 {
        supply.cycle(SHORT_OFF, HOLD_ON);
    }
    let p = supply.cycle(SHORT_OFF, 600);
    assert_eq!(p.selection, Selection::Regular(RegularMode::Ramp));
    let level = supply.record().ramp_level;
    assert!(level > 0);

    // wraps to moon, which saves the ramp level
    supply.cycle(SHORT_OFF, HOLD_ON);
    assert_eq!(supply.record().mode_index, 0);
    assert_eq!(supply.store().level(), level);
    assert_eq!(supply.store().mode(), Some(0));

    // full power loss, mode and level come back from the store
    let p = supply.cycle(LONG_OFF, HOLD_ON);
    assert_eq!(p.selection, Selection::Regular(RegularMode::Moon));
    assert_eq!(supply.record().ramp_level, level);
}

#[test]
fn mode_memory_resumes_ramp() {
    let mut supply = SimSupply::new().with_store(SimStore::with_saved(6, 120));
    let p = supply.cycle(LONG_OFF, 25);
    match p.behavior {
        Some(Behavior::Ramp(ref r)) => assert!(r.level() >= 120),
        _ => panic!("expected a ramp"),
    }
}

#[test]
fn battery_check_keeps_reading_out() {
    let mut port = SimPort::new();
    port.set_idle_sample(186);
    let mut record = SessionRecord {
        mode_index: 3,
        ..SessionRecord::default()
    };
    let mut behavior = dispatch::boot(&mut port, &mut record, &mut NoStore);
    for _ in 0..3 {
        behavior.step(&mut port, &mut record);
        match behavior {
            Behavior::BatteryCheck(ref check) => assert_eq!(check.last_blinks(), 5),
            _ => panic!("expected a battery check"),
        }
    }
    assert!(!port.halted());
}
