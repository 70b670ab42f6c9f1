mod tests {
    use myrtio_ganged_light::gamma::{GAMMA_2_2, Gamma, gamma_correct};
    use myrtio_ganged_light::ladder::LEVEL_MAX;

    #[test]
    fn test_gamma_table_endpoints() {
        assert_eq!(gamma_correct(0), 0);
        assert_eq!(gamma_correct(LEVEL_MAX), LEVEL_MAX);
        assert_eq!(gamma_correct(43), 0);
        assert_eq!(gamma_correct(44), 1);
        assert_eq!(gamma_correct(512), 223);
        assert_eq!(gamma_correct(1000), 973);
    }

    #[test]
    fn test_gamma_table_is_monotonic() {
        for pair in GAMMA_2_2.windows(2) {
            assert!(pair[0] <= pair[1], "{} > {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_gamma_clamps_input() {
        assert_eq!(gamma_correct(1024), LEVEL_MAX);
        assert_eq!(gamma_correct(u16::MAX), LEVEL_MAX);
        assert_eq!(Gamma::Gamma2_2.correct(5000), LEVEL_MAX);
        assert_eq!(Gamma::Exponent(2.2).correct(5000), LEVEL_MAX);
    }

    #[test]
    fn test_gamma_curve_matches_table() {
        for value in 0..=LEVEL_MAX {
            assert_eq!(Gamma::Gamma2_2.correct(value), gamma_correct(value));
        }
    }

    #[test]
    fn test_gamma_exponent_tracks_table() {
        let curve = Gamma::Exponent(2.2);
        assert_eq!(curve.correct(0), 0);
        assert_eq!(curve.correct(LEVEL_MAX), LEVEL_MAX);
        for value in 0..=LEVEL_MAX {
            let computed = i32::from(curve.correct(value));
            let table = i32::from(gamma_correct(value));
            assert!((computed - table).abs() <= 1, "value {value}: {computed} vs {table}");
        }
    }

    #[test]
    fn test_gamma_invalid_exponent_uses_table() {
        for exponent in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let curve = Gamma::Exponent(exponent);
            assert_eq!(curve.correct(0), 0);
            assert_eq!(curve.correct(500), gamma_correct(500));
            assert_eq!(curve.correct(LEVEL_MAX), LEVEL_MAX);
        }
    }

    #[test]
    fn test_gamma_exponent_is_monotonic() {
        let curve = Gamma::Exponent(1.8);
        let mut previous = 0;
        for value in 0..=LEVEL_MAX {
            let corrected = curve.correct(value);
            assert!(corrected >= previous);
            assert!(corrected <= LEVEL_MAX);
            previous = corrected;
        }
    }
}
