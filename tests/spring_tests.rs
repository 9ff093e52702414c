// Damped spring behavior across the three damping regimes.

use garden_core::constants::DELTA_TIME;
use garden_core::Spring;

fn simulate(spring: &Spring, start: f64, target: f64, steps: usize) -> Vec<f64> {
    let (mut pos, mut vel) = (start, 0.0);
    let mut out = Vec::with_capacity(steps);
    for _ in 0..steps {
        (pos, vel) = spring.update(pos, vel, target);
        out.push(pos);
    }
    out
}

#[test]
fn converges_for_every_positive_damping() {
    for damping in [0.02, 0.1, 0.22, 0.5, 0.99, 1.0, 1.01, 2.0, 3.2] {
        for freq in [1.0, 7.2, 14.0] {
            let spring = Spring::new(DELTA_TIME, freq, damping);
            // Light damping at low frequency needs a long tail
            let trace = simulate(&spring, 0.0, 10.0, 60 * 600);
            let last = *trace.last().expect("non-empty");
            assert!(
                (last - 10.0).abs() < 1e-3,
                "freq {freq} damping {damping} ended at {last}"
            );
        }
    }
}

#[test]
fn critical_and_over_damped_approach_monotonically() {
    for damping in [1.0, 1.5, 3.2] {
        let spring = Spring::new(DELTA_TIME, 7.2, damping);
        let trace = simulate(&spring, 0.0, 10.0, 600);
        let mut prev = 0.0;
        for (i, &p) in trace.iter().enumerate() {
            assert!(p >= prev - 1e-12, "damping {damping} went backwards at step {i}");
            assert!(p <= 10.0 + 1e-9, "damping {damping} overshot at step {i}: {p}");
            prev = p;
        }
    }
}

#[test]
fn under_damped_overshoot_is_bounded() {
    let spring = Spring::new(DELTA_TIME, 7.2, 0.22);
    let trace = simulate(&spring, 0.0, 10.0, 600);
    let peak = trace.iter().cloned().fold(f64::MIN, f64::max);
    assert!(peak > 10.0, "light damping should overshoot");
    // Overshoot never exceeds the initial displacement
    assert!(peak < 20.0, "peak {peak}");
}

#[test]
fn zero_frequency_is_identity() {
    let spring = Spring::new(DELTA_TIME, 0.0, 0.5);
    assert_eq!(spring.update(3.0, 1.5, 10.0), (3.0, 1.5));
    let negative = Spring::new(DELTA_TIME, -4.0, 0.5);
    assert_eq!(negative.update(-2.0, 0.0, 10.0), (-2.0, 0.0));
}

#[test]
fn resting_at_equilibrium_stays_put() {
    for damping in [0.22, 1.0, 2.5] {
        let spring = Spring::new(DELTA_TIME, 7.2, damping);
        let (p, v) = spring.update(4.0, 0.0, 4.0);
        assert!((p - 4.0).abs() < 1e-12);
        assert!(v.abs() < 1e-12);
    }
}
