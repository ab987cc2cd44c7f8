use std::f64::consts::PI;

use wave_text_wasm::wave::{cycle, offset, phase, raw_offset};
use wave_text_wasm::{Range, Side, WaveConfig};

fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() < eps
}

fn configs() -> Vec<WaveConfig> {
    [(12.0, 1.0), (0.0, 0.0), (3.5, -2.0), (-7.25, 0.3), (1e6, 40.0)]
        .into_iter()
        .map(|(n, s)| WaveConfig::new(n, s).unwrap())
        .collect()
}

#[test]
fn cycle_stays_normalised() {
    for config in configs() {
        for index in 0..64 {
            for step in 0..=200 {
                let progress = step as f64 / 200.0;
                let c = cycle(phase(&config, index, progress));
                assert!((0.0..=1.0).contains(&c), "cycle={} config={:?}", c, config);
            }
        }
    }
    for raw in [-1e12, -PI, 0.0, 1e-300, PI / 2.0, 7.7e9] {
        assert!((0.0..=1.0).contains(&cycle(raw)));
    }
}

#[test]
fn offsets_never_leave_the_column() {
    let columns = [(1200.0, 300.0), (640.0, 639.0), (500.0, 500.0), (980.0, 12.5)];
    for (width, widest) in columns {
        let range = Range::for_column(width, widest);
        assert_eq!(range.min_x, 0.0);
        assert!(approx_eq(range.max_x, width - widest, 1e-9));
        for config in configs() {
            for index in 0..32 {
                for step in 0..=50 {
                    let progress = step as f64 / 50.0;
                    let x = offset(&config, &range, Side::Left, index, progress);
                    assert!(x >= range.min_x - 1e-9 && x <= range.max_x + 1e-9, "x={} {:?}", x, range);
                }
            }
        }
    }
}

#[test]
fn right_column_mirrors_left() {
    let range = Range::for_column(900.0, 260.0);
    for config in configs() {
        for index in 0..16 {
            for progress in [0.0, 0.1, 0.25, 0.5, 0.77, 1.0] {
                let left = offset(&config, &range, Side::Left, index, progress);
                let right = offset(&config, &range, Side::Right, index, progress);
                assert_eq!(left, -right);
            }
        }
    }
}

#[test]
fn scenario_start_and_quarter() {
    let config = WaveConfig::default();
    let range = Range::for_column(1000.0, 200.0);

    // progress 0: sin(-pi/2) = -1, element 0 sits at the range minimum
    assert!(approx_eq(phase(&config, 0, 0.0), -PI / 2.0, 1e-12));
    assert!(approx_eq(offset(&config, &range, Side::Left, 0, 0.0), 0.0, 1e-9));

    // progress 0.25: phase 0, cycle 0.5, midpoint
    assert!(approx_eq(phase(&config, 0, 0.25), 0.0, 1e-12));
    assert!(approx_eq(raw_offset(&range, cycle(0.0)), 400.0, 1e-9));
    assert!(approx_eq(offset(&config, &range, Side::Left, 0, 0.25), 400.0, 1e-9));
    assert!(approx_eq(offset(&config, &range, Side::Right, 0, 0.25), -400.0, 1e-9));
}
