//! Clock regression handling

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::ManualTicks;
    use crate::*;
    use std::sync::Arc;

    #[test]
    fn test_clock_backwards_fails() {
        let ticks = Arc::new(ManualTicks::new(1_000));
        let g = IdGenerator::with_ticks(1, Arc::clone(&ticks)).unwrap();
        g.next_id().unwrap();

        ticks.set(999);
        let err = g.next_id().unwrap_err();

        assert_eq!(err, EzIdError::ClockMovedBackwards { now: 999, last: 1_000 });
        assert!(err.is_clock_regression());
        assert!(!err.is_out_of_range());
    }

    #[test]
    fn test_clock_backwards_keeps_failing_until_caught_up() {
        let ticks = Arc::new(ManualTicks::new(1_000));
        let g = IdGenerator::with_ticks(1, Arc::clone(&ticks)).unwrap();
        let before = g.next_id().unwrap();

        ticks.set(500);
        assert!(g.next_id().is_err());
        assert!(g.next_id().is_err());
        assert_eq!(g.last_tick(), 1_000, "Generator must not reset its state");

        // Same tick as before the regression: the counter continues
        ticks.set(1_000);
        let after = g.next_id().unwrap();
        assert!(after > before);
        assert_eq!(g.extract.sequence(after), 2);
    }

    #[test]
    fn test_same_tick_is_not_a_regression() {
        let ticks = Arc::new(ManualTicks::new(42));
        let g = IdGenerator::with_ticks(1, Arc::clone(&ticks)).unwrap();
        let a = g.next_id().unwrap();
        let b = g.next_id().unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_large_jump_forward() {
        let ticks = Arc::new(ManualTicks::new(1_000));
        let g = IdGenerator::with_ticks(3, Arc::clone(&ticks)).unwrap();
        let a = g.next_id().unwrap();

        ticks.advance(86_400_000);
        let b = g.next_id().unwrap();

        assert!(b > a);
        assert_eq!(g.extract.decompose(b), (86_401_000, 3, 1));
    }

    #[test]
    fn test_system_clock_generator() {
        let g = IdGenerator::with_ticks(2, SystemClock).unwrap();
        let a = g.next_id().unwrap();
        let b = g.next_id().unwrap();
        assert!(b > a);
    }
}
