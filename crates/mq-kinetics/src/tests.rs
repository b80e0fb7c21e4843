//! Unit tests for the rate laws.

#[cfg(test)]
mod thermal {
    use crate::thermal::cooling_rate;

    #[test]
    fn warmer_product_cools() {
        assert!(cooling_rate(10.0, 4.0) < 0.0);
    }

    #[test]
    fn colder_product_warms() {
        assert!(cooling_rate(2.0, 4.0) > 0.0);
    }

    #[test]
    fn equilibrium_rate_is_zero() {
        assert_eq!(cooling_rate(4.0, 4.0), 0.0);
    }

    #[test]
    fn rate_is_proportional_to_gap() {
        assert_eq!(cooling_rate(10.0, 4.0), -0.3 * 6.0);
    }
}

#[cfg(test)]
mod microbial {
    use crate::microbial::{INITIAL_MICROBES, MAX_MICROBES, grow_microbes, growth_rate};

    #[test]
    fn no_growth_below_cutoff() {
        assert_eq!(growth_rate(-2.1), 0.0);
        assert_eq!(growth_rate(-20.0), 0.0);
    }

    #[test]
    fn growth_rate_at_zero_celsius() {
        assert_eq!(growth_rate(0.0), 0.05);
    }

    #[test]
    fn growth_rate_increases_with_temperature() {
        assert!(growth_rate(20.0) > growth_rate(10.0));
        assert!(growth_rate(10.0) > growth_rate(0.0));
    }

    #[test]
    fn population_is_non_decreasing_below_capacity() {
        let n = grow_microbes(INITIAL_MICROBES, 4.0, 0.5);
        assert!(n >= INITIAL_MICROBES);
        let n2 = grow_microbes(n, 4.0, 0.5);
        assert!(n2 >= n);
    }

    #[test]
    fn floor_holds_in_the_cold() {
        // Below the cutoff the delta is zero; the floor keeps N at the seed.
        let n = grow_microbes(INITIAL_MICROBES, -10.0, 0.5);
        assert_eq!(n, INITIAL_MICROBES);
    }

    #[test]
    fn logistic_term_slows_growth_near_capacity() {
        let low = grow_microbes(1.0e6, 20.0, 0.5) - 1.0e6;
        let relative_low = low / 1.0e6;
        let near_cap = grow_microbes(9.9e7, 20.0, 0.5) - 9.9e7;
        let relative_near = near_cap / 9.9e7;
        assert!(relative_near < relative_low);
    }

    #[test]
    fn at_capacity_growth_stops() {
        assert_eq!(grow_microbes(MAX_MICROBES, 20.0, 0.5), MAX_MICROBES);
    }
}

#[cfg(test)]
mod moisture {
    use crate::moisture::moisture_loss_rate;

    #[test]
    fn zero_driving_force_gives_exactly_zero() {
        // moisture == humidity / 2 → F = 0 → rate must be 0, not negative.
        assert_eq!(moisture_loss_rate(40.0, 80.0, 1.0), 0.0);
    }

    #[test]
    fn negative_driving_force_gives_zero() {
        assert_eq!(moisture_loss_rate(30.0, 80.0, 1.0), 0.0);
    }

    #[test]
    fn positive_driving_force_dries() {
        let rate = moisture_loss_rate(74.0, 85.0, 0.8);
        assert!(rate < 0.0);
        assert_eq!(rate, -(0.005 * 0.8) * (74.0 - 42.5));
    }

    #[test]
    fn hermetic_packaging_stops_drying() {
        assert_eq!(moisture_loss_rate(74.0, 85.0, 0.0), 0.0);
    }

    #[test]
    fn open_packaging_dries_faster() {
        let open = moisture_loss_rate(74.0, 85.0, 1.0);
        let sealed = moisture_loss_rate(74.0, 85.0, 0.2);
        assert!(open < sealed);
    }
}

#[cfg(test)]
mod chemical {
    use crate::chemical::{DecayTarget, decay_coefficient, decay_integrity};

    #[test]
    fn fat_oxygen_factor_boundaries() {
        // packaging 0 → factor 0.2; packaging 1 → factor 1.0.  The base
        // Arrhenius term cancels in the ratio against protein's factor of 1.
        let t = 4.0;
        let protein = decay_coefficient(t, DecayTarget::Protein, 0.0);
        let fat_sealed = decay_coefficient(t, DecayTarget::Fat, 0.0);
        let fat_open = decay_coefficient(t, DecayTarget::Fat, 1.0);
        // Divide out the per-target scales (0.01 protein, 0.05 fat).
        assert!((fat_sealed / 0.05 / (protein / 0.01) - 0.2).abs() < 1e-12);
        assert!((fat_open / 0.05 / (protein / 0.01) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn protein_ignores_packaging() {
        let a = decay_coefficient(4.0, DecayTarget::Protein, 0.0);
        let b = decay_coefficient(4.0, DecayTarget::Protein, 1.0);
        assert_eq!(a, b);
    }

    #[test]
    fn decay_accelerates_with_temperature() {
        let cold = decay_coefficient(0.0, DecayTarget::Fat, 0.8);
        let warm = decay_coefficient(20.0, DecayTarget::Fat, 0.8);
        assert!(warm > cold);
    }

    #[test]
    fn integrity_decreases() {
        let p = decay_integrity(100.0, 4.0, DecayTarget::Protein, 0.8, 0.5);
        assert!(p < 100.0 && p > 0.0);
    }

    #[test]
    fn no_lower_clamp_on_integrity() {
        // At an absurd temperature the single-step Euler update can drive
        // integrity negative; the model deliberately lets it.
        let mut fat = 100.0;
        for _ in 0..10_000 {
            fat = decay_integrity(fat, 500.0, DecayTarget::Fat, 1.0, 0.5);
            if fat < 0.0 {
                return;
            }
        }
        // Even if it never crosses zero, the value must keep shrinking and
        // no clamp may pin it at a floor such as 0.
        assert!(fat < 1.0);
    }
}

#[cfg(test)]
mod quality {
    use crate::microbial::INITIAL_MICROBES;
    use crate::quality::{SPOILAGE_THRESHOLD, chemical_index, microbe_index, quality_index};

    #[test]
    fn pristine_state_scores_one() {
        assert_eq!(quality_index(INITIAL_MICROBES, 100.0, 100.0), 1.0);
    }

    #[test]
    fn microbe_index_zero_at_threshold() {
        assert!(microbe_index(SPOILAGE_THRESHOLD).abs() < 1e-12);
        assert_eq!(microbe_index(SPOILAGE_THRESHOLD * 10.0), 0.0);
    }

    #[test]
    fn microbe_index_log_linear_midpoint() {
        // Halfway in log space between 1e3 and 1e7 is 1e5 → index 0.5.
        assert!((microbe_index(1.0e5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn quality_never_negative() {
        assert_eq!(quality_index(1.0e8, -50.0, -50.0), 0.0);
    }

    #[test]
    fn quality_decreases_with_density() {
        let fresh = quality_index(INITIAL_MICROBES, 100.0, 100.0);
        let mid = quality_index(1.0e5, 100.0, 100.0);
        let spoiled = quality_index(SPOILAGE_THRESHOLD, 100.0, 100.0);
        assert!(fresh > mid && mid > spoiled);
    }

    #[test]
    fn chemical_index_maps_full_integrity_to_one() {
        assert_eq!(chemical_index(100.0, 100.0), 1.0);
        assert_eq!(chemical_index(50.0, 50.0), 0.5);
    }
}
