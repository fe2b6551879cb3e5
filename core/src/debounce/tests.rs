use super::*;

const DELAY: Duration = Duration::from_millis(300);

fn debouncer() -> Debouncer<String, ManualTimer> {
    Debouncer::new(ManualTimer::new(), DELAY)
}

/// Advances the clock and fires if due, like a host event loop would.
fn advance(d: &mut Debouncer<String, ManualTimer>, ms: u64) -> Option<String> {
    if d.timer_mut().advance(Duration::from_millis(ms)) {
        d.fire()
    } else {
        None
    }
}

mod schedule {
    use super::*;

    #[test]
    fn test_fires_after_quiet_period() {
        let mut d = debouncer();
        d.schedule("a".to_string());

        assert_eq!(advance(&mut d, 299), None);
        assert_eq!(advance(&mut d, 1), Some("a".to_string()));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_burst_collapses_to_last_payload() {
        let mut d = debouncer();

        for (i, query) in ["b", "ba", "ban", "bana"].iter().enumerate() {
            d.schedule(query.to_string());
            if i < 3 {
                assert_eq!(advance(&mut d, 100), None);
            }
        }

        assert_eq!(advance(&mut d, 300), Some("bana".to_string()));
        assert_eq!(advance(&mut d, 1000), None);
    }

    #[test]
    fn test_reschedule_cancels_previous_timer() {
        let mut d = debouncer();
        d.schedule("a".to_string());
        d.schedule("b".to_string());
        d.schedule("c".to_string());

        assert_eq!(d.timer().arm_count(), 3);
        assert_eq!(d.timer().cancel_count(), 2);
        assert_eq!(d.timer().armed_count(), 1);
    }

    #[test]
    fn test_each_pause_fires_once() {
        let mut d = debouncer();

        d.schedule("a".to_string());
        assert_eq!(advance(&mut d, 300), Some("a".to_string()));

        d.schedule("ab".to_string());
        assert_eq!(advance(&mut d, 300), Some("ab".to_string()));
    }
}

mod fire {
    use super::*;

    #[test]
    fn test_stale_fire_returns_none() {
        let mut d = debouncer();
        assert_eq!(d.fire(), None);

        d.schedule("a".to_string());
        assert_eq!(d.fire(), Some("a".to_string()));
        assert_eq!(d.fire(), None);
    }
}

mod cancel {
    use super::*;

    #[test]
    fn test_cancel_drops_pending_payload() {
        let mut d = debouncer();
        d.schedule("a".to_string());
        d.cancel();

        assert!(!d.is_pending());
        assert_eq!(d.timer().armed_count(), 0);
        assert_eq!(advance(&mut d, 1000), None);
    }

    #[test]
    fn test_cancel_without_pending_is_noop() {
        let mut d = debouncer();
        d.cancel();
        assert_eq!(d.timer().cancel_count(), 0);
    }
}
