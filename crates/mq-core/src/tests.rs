//! Unit tests for mq-core primitives.

#[cfg(test)]
mod time {
    use crate::time::{DT_HOURS, TimeGrid};

    #[test]
    fn grid_is_inclusive_of_endpoint() {
        // 168 h at 0.5 h per step: 0, 0.5, …, 168 → 337 samples.
        let grid = TimeGrid::new(168.0);
        assert_eq!(grid.step_count(), 337);
        assert_eq!(TimeGrid::hours(336), 168.0);
    }

    #[test]
    fn off_grid_duration_truncates() {
        // 1.3 h → steps at 0, 0.5, 1.0.
        let grid = TimeGrid::new(1.3);
        assert_eq!(grid.step_count(), 3);
        assert_eq!(TimeGrid::hours(2), 1.0);
    }

    #[test]
    fn zero_duration_has_one_step() {
        assert_eq!(TimeGrid::new(0.0).step_count(), 1);
    }

    #[test]
    fn negative_duration_is_empty() {
        assert_eq!(TimeGrid::new(-5.0).step_count(), 0);
        assert_eq!(TimeGrid::new(-5.0).iter().count(), 0);
    }

    #[test]
    fn iter_spacing_is_exact() {
        let times: Vec<f64> = TimeGrid::new(3.0).iter().map(|(_, h)| h).collect();
        assert_eq!(times[0], 0.0);
        for w in times.windows(2) {
            assert_eq!(w[1] - w[0], DT_HOURS);
        }
    }
}

#[cfg(test)]
mod rng {
    use crate::rng::{NoiseRng, NoiseSource, ZeroNoise, child_seed};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = NoiseRng::new(12345);
        let mut r2 = NoiseRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.sample(5.0), r2.sample(5.0));
        }
    }

    #[test]
    fn samples_within_amplitude() {
        let mut rng = NoiseRng::new(7);
        for _ in 0..1000 {
            let v = rng.sample(0.5);
            assert!((-0.5..=0.5).contains(&v), "got {v}");
        }
    }

    #[test]
    fn zero_amplitude_samples_zero() {
        let mut rng = NoiseRng::new(7);
        assert_eq!(rng.sample(0.0), 0.0);
        assert_eq!(rng.sample(-1.0), 0.0);
    }

    #[test]
    fn zero_noise_always_zero() {
        let mut z = ZeroNoise;
        assert_eq!(z.sample(100.0), 0.0);
    }

    #[test]
    fn child_seeds_diverge() {
        assert_ne!(child_seed(1, 0), child_seed(1, 1));
        let mut a = NoiseRng::child(1, 0);
        let mut b = NoiseRng::child(1, 1);
        assert_ne!(a.sample(5.0), b.sample(5.0));
    }
}

#[cfg(test)]
mod config {
    use crate::{ScenarioKind, SimulationConfig};

    #[test]
    fn parse_display_round_trip() {
        for kind in ScenarioKind::ALL {
            let parsed: ScenarioKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_scenario_errors() {
        assert!("deep_freeze".parse::<ScenarioKind>().is_err());
    }

    #[test]
    fn only_fluctuation_is_cyclic() {
        for kind in ScenarioKind::ALL {
            assert_eq!(kind.is_cyclic(), kind == ScenarioKind::Fluctuation);
        }
    }

    #[test]
    fn presets_validate() {
        for kind in ScenarioKind::ALL {
            let preset = kind.preset();
            assert_eq!(preset.scenario, kind);
            preset.validate().unwrap();
        }
    }

    #[test]
    fn spike_window_is_inclusive() {
        let config = ScenarioKind::TempAbuse.preset();
        assert_eq!(config.spike_override(11.5), None);
        assert_eq!(config.spike_override(12.0), Some(15.0));
        assert_eq!(config.spike_override(16.0), Some(15.0));
        assert_eq!(config.spike_override(16.5), None);
    }

    #[test]
    fn no_spike_fields_means_no_override() {
        let config = ScenarioKind::ColdStorage.preset();
        assert_eq!(config.spike_override(12.0), None);
    }

    fn base_config() -> SimulationConfig {
        ScenarioKind::ColdStorage.preset()
    }

    #[test]
    fn validate_rejects_negative_duration() {
        let mut config = base_config();
        config.duration_hours = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_packaging() {
        let mut config = base_config();
        config.packaging_factor = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unpaired_spike() {
        let mut config = base_config();
        config.temp_spike_hour = Some(12.0);
        config.temp_spike_value = None;
        assert!(config.validate().is_err());
    }
}

#[cfg(test)]
mod step {
    use crate::step::{round1, round2};

    #[test]
    fn rounding_helpers() {
        assert_eq!(round1(84.97), 85.0);
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(99.999), 100.0);
    }
}
