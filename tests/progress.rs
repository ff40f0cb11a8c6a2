mod tests {
    use myrtio_stairs_composer::progress::{
        advance_substeps, compute_step_ms, should_unlock_off, should_unlock_on,
    };

    #[test]
    fn test_compute_step_ms() {
        assert_eq!(compute_step_ms(24, 1), 24);
        assert_eq!(compute_step_ms(24, 4), 6);
        assert_eq!(compute_step_ms(24, 0), 24);
        assert_eq!(compute_step_ms(3, 4), 2);
        assert_eq!(compute_step_ms(0, 1), 2);
    }

    #[test]
    fn test_unlock_fill() {
        assert!(!should_unlock_on(10, 1, 0.2));
        assert!(should_unlock_on(10, 2, 0.2));
        assert!(should_unlock_on(10, 0, 0.0));
        assert!(!should_unlock_on(0, 0, 0.0));
    }

    #[test]
    fn test_unlock_clear() {
        assert!(!should_unlock_off(10, 9, 0.2));
        assert!(should_unlock_off(10, 8, 0.2));
        assert!(should_unlock_off(10, 10, 0.0));
    }

    #[test]
    fn test_unlock_gate_is_asymmetric_for_short_rows() {
        // gate = ceil(0.5 * 3) = 2 in both directions
        assert!(should_unlock_on(3, 2, 0.5));
        assert!(!should_unlock_off(3, 2, 0.5));
        assert!(should_unlock_off(3, 1, 0.5));
    }

    #[test]
    fn test_advance_substeps_keeps_carry() {
        let mut acc = 0.0;
        assert_eq!(advance_substeps(&mut acc, 10, 15), 1);
        assert!((acc - 5.0).abs() < 1e-6);
        assert_eq!(advance_substeps(&mut acc, 10, 7), 1);
        assert!((acc - 2.0).abs() < 1e-6);
        assert_eq!(advance_substeps(&mut acc, 10, 3), 0);
    }

    #[test]
    fn test_advance_substeps_caps_elapsed() {
        let mut acc = 0.0;
        assert_eq!(advance_substeps(&mut acc, 10, 10_000), 2);
        assert!(acc.abs() < 1e-6);
        assert_eq!(advance_substeps(&mut acc, 0, 50), 0);
    }
}
