//! Tests for CorruptionGauge.

#[cfg(test)]
mod tests {
    use super::super::gauge::*;
    use crate::error::ConfigError;

    fn drained_gauge(rate: f32) -> CorruptionGauge {
        let mut gauge = CorruptionGauge::new(GaugeConfig {
            rate,
            ..Default::default()
        });
        gauge.set_being_drained(true);
        gauge
    }

    /// Довести до очищения (drained, dt = 1)
    fn purify(gauge: &mut CorruptionGauge) {
        for _ in 0..1000 {
            if gauge.tick(1.0).purified {
                return;
            }
        }
        panic!("gauge never purified");
    }

    #[test]
    fn test_gauge_config_default() {
        let config = GaugeConfig::default();
        assert_eq!(config.rate, 0.03);
        assert_eq!(config.dissolve_from, 0.0);
        assert_eq!(config.dissolve_to, 1.0);
        assert!(config.validate().is_ok());

        let broken = GaugeConfig {
            rate: 0.0,
            ..Default::default()
        };
        assert!(broken.validate().is_err());
    }

    #[test]
    fn test_gauge_config_grace_may_be_zero_but_not_negative() {
        let instant = GaugeConfig {
            destroy_grace_secs: 0.0,
            ..Default::default()
        };
        assert!(instant.validate().is_ok());

        let negative = GaugeConfig {
            destroy_grace_secs: -1.0,
            ..Default::default()
        };
        assert_eq!(
            negative.validate(),
            Err(ConfigError::Negative {
                field: "destroy_grace_secs",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_new_gauge_is_corrupted_at_full_level() {
        let gauge = CorruptionGauge::new(GaugeConfig::default());
        assert!(gauge.is_corrupted());
        assert_eq!(gauge.level(), 1.0);
        assert_eq!(gauge.dissolve_alpha(), 0.0);
        assert!(!gauge.is_being_drained());
    }

    #[test]
    fn test_drain_purifies_after_34_ticks() {
        let mut gauge = drained_gauge(0.03);

        for _ in 0..33 {
            let tick = gauge.tick(1.0);
            assert!(!tick.purified);
        }
        assert!(gauge.is_corrupted());
        assert!(gauge.level() > 0.0);

        let tick = gauge.tick(1.0);
        assert!(tick.purified);
        assert!(gauge.level() < 0.0);
        assert!(!gauge.is_corrupted());
    }

    #[test]
    fn test_exact_zero_keeps_draining_and_purifies_next_tick() {
        // 0.25 * 4 == 1.0 ровно: level попадает в 0, очищение только при < 0
        let mut gauge = drained_gauge(0.25);
        for _ in 0..4 {
            assert!(!gauge.tick(1.0).purified);
        }
        assert_eq!(gauge.level(), 0.0);
        assert!(gauge.is_corrupted());

        assert!(gauge.tick(1.0).purified);
        assert_eq!(gauge.level_clamped(), 0.0);
    }

    #[test]
    fn test_recovery_clamps_at_one() {
        let mut gauge = drained_gauge(0.3);
        gauge.tick(1.0);
        gauge.tick(1.0);
        assert!((gauge.level() - 0.4).abs() < 1e-5);

        gauge.set_being_drained(false);
        for _ in 0..10 {
            gauge.tick(1.0);
            assert!(gauge.level() <= 1.0);
        }
        assert_eq!(gauge.level(), 1.0);
        assert!(gauge.is_corrupted());
    }

    #[test]
    fn test_symmetric_toggling_never_purifies() {
        // Drain и recovery с одной скоростью: level колеблется и порог не пересекается
        let mut gauge = drained_gauge(0.1);
        for tick in 0..1000 {
            gauge.set_being_drained(tick % 2 == 0);
            gauge.tick(1.0);
        }
        assert!(gauge.is_corrupted());
        assert!(gauge.level() > 0.0 && gauge.level() <= 1.0);
    }

    #[test]
    fn test_purified_never_returns_to_corrupted_branch() {
        let mut gauge = drained_gauge(0.5);
        purify(&mut gauge);
        let level = gauge.level();

        gauge.set_being_drained(false);
        for _ in 0..50 {
            let tick = gauge.tick(1.0);
            assert!(!tick.purified);
        }
        assert!(!gauge.is_corrupted());
        assert_eq!(gauge.level(), level);
    }

    #[test]
    fn test_dissolve_is_monotonic_and_destroys_exactly_once() {
        let mut gauge = drained_gauge(0.5);
        purify(&mut gauge);

        let mut previous_alpha = gauge.dissolve_alpha();
        let mut destroy_requests = Vec::new();

        for tick_index in 0..300 {
            let alpha_before = gauge.dissolve_alpha();
            let tick = gauge.tick(1.0);
            assert!(gauge.dissolve_alpha() >= previous_alpha);
            previous_alpha = gauge.dissolve_alpha();

            if let Some(grace) = tick.destroy_after {
                assert_eq!(grace, 0.5);
                assert!(alpha_before <= 1.0);
                assert!(gauge.dissolve_alpha() > 1.0);
                destroy_requests.push(tick_index);
            }
        }

        assert_eq!(destroy_requests.len(), 1);
        assert!(gauge.destruction_requested());
    }

    #[test]
    fn test_dissolve_destroys_on_first_tick_above_one() {
        let mut gauge = CorruptionGauge::new(GaugeConfig {
            rate: 0.5,
            dissolve_rate: 0.25,
            ..Default::default()
        });
        gauge.set_being_drained(true);
        purify(&mut gauge);

        // 0.25, 0.5, 0.75, 1.0 — ещё не > 1
        for _ in 0..4 {
            assert_eq!(gauge.tick(1.0).destroy_after, None);
        }
        assert_eq!(gauge.dissolve_alpha(), 1.0);

        let tick = gauge.tick(1.0);
        assert_eq!(tick.destroy_after, Some(0.5));
        assert_eq!(tick.dissolve_amount, Some(1.0));

        // После запроса гауге больше ничего не выдаёт
        assert_eq!(gauge.tick(1.0), GaugeTick::default());
    }

    #[test]
    fn test_dissolve_lerps_between_bounds() {
        let mut gauge = CorruptionGauge::new(GaugeConfig {
            rate: 0.5,
            dissolve_rate: 0.25,
            dissolve_from: -1.0,
            dissolve_to: 1.0,
            ..Default::default()
        });
        gauge.set_being_drained(true);
        purify(&mut gauge);

        let amounts: Vec<f32> = (0..4)
            .filter_map(|_| gauge.tick(1.0).dissolve_amount)
            .collect();
        assert_eq!(amounts, vec![-0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_no_dissolve_while_corrupted() {
        let mut gauge = CorruptionGauge::new(GaugeConfig::default());
        for _ in 0..100 {
            let tick = gauge.tick(1.0);
            assert_eq!(tick.dissolve_amount, None);
            assert_eq!(tick.destroy_after, None);
        }
        assert_eq!(gauge.dissolve_alpha(), 0.0);
    }
}
