//! Algebraic properties of detector composition

use std::sync::Arc;

use proptest::prelude::*;
use rustsim_events::prelude::*;

/// g(s) = slope * y[0] + offset
fn linear(slope: f64, offset: f64) -> AtomicDetector<TrajectoryState> {
    AtomicDetector::from_fn("linear", move |s: &TrajectoryState| {
        Ok(slope * s.y()[0] + offset)
    })
}

fn state_at(y0: f64) -> TrajectoryState {
    TrajectoryState::from_slice(Epoch::REFERENCE, &[y0])
}

fn coeff() -> impl Strategy<Value = f64> {
    -100.0..100.0f64
}

proptest! {
    #[test]
    fn and_is_min(a in coeff(), b in coeff(), c in coeff(), d in coeff(), y0 in coeff()) {
        let s = state_at(y0);
        let expected = linear(a, b).g(&s).unwrap().min(linear(c, d).g(&s).unwrap());
        let and = and![linear(a, b), linear(c, d)].unwrap();
        prop_assert_eq!(and.g(&s).unwrap(), expected);
    }

    #[test]
    fn or_is_max(a in coeff(), b in coeff(), c in coeff(), d in coeff(), y0 in coeff()) {
        let s = state_at(y0);
        let expected = linear(a, b).g(&s).unwrap().max(linear(c, d).g(&s).unwrap());
        let or = or![linear(a, b), linear(c, d)].unwrap();
        prop_assert_eq!(or.g(&s).unwrap(), expected);
    }

    #[test]
    fn not_negates(a in coeff(), b in coeff(), y0 in coeff()) {
        let s = state_at(y0);
        let not = BooleanDetector::not(linear(a, b));
        prop_assert_eq!(not.g(&s).unwrap(), -linear(a, b).g(&s).unwrap());

        let not_not = BooleanDetector::not(BooleanDetector::not(linear(a, b)));
        prop_assert_eq!(not_not.g(&s).unwrap(), linear(a, b).g(&s).unwrap());
    }

    #[test]
    fn nesting_is_associative(
        a in coeff(), b in coeff(), c in coeff(), y0 in coeff()
    ) {
        let s = state_at(y0);

        let nested = and![and![linear(a, 1.0), linear(b, -1.0)].unwrap(), linear(c, 0.5)].unwrap();
        let flat = and![linear(a, 1.0), linear(b, -1.0), linear(c, 0.5)].unwrap();
        prop_assert_eq!(nested.g(&s).unwrap(), flat.g(&s).unwrap());

        let nested = or![linear(a, 1.0), or![linear(b, -1.0), linear(c, 0.5)].unwrap()].unwrap();
        let flat = or![linear(a, 1.0), linear(b, -1.0), linear(c, 0.5)].unwrap();
        prop_assert_eq!(nested.g(&s).unwrap(), flat.g(&s).unwrap());
    }

    #[test]
    fn operand_order_does_not_change_value(a in coeff(), b in coeff(), y0 in coeff()) {
        let s = state_at(y0);
        let ab = and![linear(a, 0.0), linear(b, 1.0)].unwrap();
        let ba = and![linear(b, 1.0), linear(a, 0.0)].unwrap();
        prop_assert_eq!(ab.g(&s).unwrap(), ba.g(&s).unwrap());
    }

    #[test]
    fn settings_are_elementwise_min(
        m1 in 1e-3..1e3f64, t1 in 1e-9..1.0f64, i1 in 1usize..500,
        m2 in 1e-3..1e3f64, t2 in 1e-9..1.0f64, i2 in 1usize..500
    ) {
        let s1 = DetectorSettings::new(m1, t1, i1).unwrap();
        let s2 = DetectorSettings::new(m2, t2, i2).unwrap();
        let d1 = linear(1.0, 0.0).with_settings(s1, Arc::new(StopOnEvent));
        let d2 = linear(1.0, 0.0).with_settings(s2, Arc::new(StopOnEvent));

        let and = and![d1, d2].unwrap();
        prop_assert_eq!(and.max_check_interval(), m1.min(m2));
        prop_assert_eq!(and.threshold(), t1.min(t2));
        prop_assert_eq!(and.max_iteration_count(), i1.min(i2));
    }
}
