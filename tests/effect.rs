mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_stairs_composer::{
        ApplyOutcome, EffectFlavor, EffectPlan, FlowMode, LedMap, Rgb, RowOrder, RuntimeConfig,
        StairsEffect,
    };

    const TWO_ROWS: &[&[u16]] = &[
        &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
        &[10, 11, 12, 13, 14, 15, 16, 17, 18, 19],
    ];
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn at(ms: u64) -> Instant {
        Instant::from_millis(ms)
    }

    fn map() -> Option<LedMap<'static>> {
        Some(LedMap::new(TWO_ROWS))
    }

    #[test]
    fn test_effect_flavor_ids() {
        assert_eq!(EffectFlavor::from_raw(0), Some(EffectFlavor::FillBottomToTop));
        assert_eq!(EffectFlavor::from_raw(3), Some(EffectFlavor::OffTopToBottom));
        assert_eq!(EffectFlavor::from_raw(4), None);
        assert_eq!(
            EffectFlavor::parse_from_str("off_bottom_to_top"),
            Some(EffectFlavor::OffBottomToTop)
        );
        assert_eq!(EffectFlavor::parse_from_str("sparkle"), None);
        assert_eq!(EffectFlavor::FillTopToBottom.as_str(), "fill_top_to_bottom");
    }

    #[test]
    fn test_effect_flavor_plans() {
        assert_eq!(
            EffectFlavor::FillTopToBottom.plan(),
            EffectPlan::new(FlowMode::Fill, RowOrder::TopToBottom)
        );
        assert_eq!(
            EffectFlavor::OffBottomToTop.plan(),
            EffectPlan::new(FlowMode::Off, RowOrder::BottomToTop)
        );
        let effect = EffectFlavor::OffTopToBottom.to_effect::<4>();
        assert_eq!(effect.plan(), EffectFlavor::OffTopToBottom.plan());
    }

    #[test]
    fn test_missing_map_blanks_strip() {
        let mut effect = EffectFlavor::FillBottomToTop.to_effect::<4>();
        let mut leds = [WHITE; 20];
        let outcome = effect.apply(None, &mut leds, &RuntimeConfig::default(), WHITE, at(0));
        assert_eq!(outcome, ApplyOutcome::Blanked);
        assert_eq!(leds, [BLACK; 20]);

        let mut leds = [WHITE; 20];
        let outcome = effect.apply(
            Some(LedMap::new(&[])),
            &mut leds,
            &RuntimeConfig::default(),
            WHITE,
            at(0),
        );
        assert_eq!(outcome, ApplyOutcome::Blanked);
        assert_eq!(leds, [BLACK; 20]);
    }

    #[test]
    fn test_fill_never_powers_off() {
        let mut effect = EffectFlavor::FillBottomToTop.to_effect::<4>();
        let mut leds = [BLACK; 20];
        let config = RuntimeConfig::default();
        for step in 0..60 {
            let outcome = effect.apply(map(), &mut leds, &config, WHITE, at(24 * step));
            assert_eq!(outcome, ApplyOutcome::Rendered);
        }
        assert!(effect.tracker().finished());
        assert_eq!(leds, [WHITE; 20]);
    }

    #[test]
    fn test_clear_resumes_from_strip_and_powers_off() {
        let mut effect = EffectFlavor::OffBottomToTop
            .to_effect::<4>()
            .with_shutdown_delay(Duration::from_millis(50));
        let mut leds = [WHITE; 20];
        let config = RuntimeConfig::default();

        effect.apply(map(), &mut leds, &config, WHITE, at(0));
        assert_eq!(effect.tracker().rows()[0].lit_count(), 10.0);
        assert_eq!(effect.tracker().rows()[1].lit_count(), 10.0);

        let mut now = 0;
        while !effect.tracker().finished() {
            now += 24;
            assert!(now < 10_000, "clear sweep never finished");
            let outcome = effect.apply(map(), &mut leds, &config, WHITE, at(now));
            assert_eq!(outcome, ApplyOutcome::Rendered);
        }
        assert_eq!(leds, [BLACK; 20]);

        let outcome = effect.apply(map(), &mut leds, &config, WHITE, at(now + 24));
        assert_eq!(outcome, ApplyOutcome::Rendered);
        let outcome = effect.apply(map(), &mut leds, &config, WHITE, at(now + 50));
        assert_eq!(outcome, ApplyOutcome::PowerOff);
    }

    #[test]
    fn test_snake_toggle_rescans_strip() {
        let mut effect = EffectFlavor::FillBottomToTop.to_effect::<4>();
        let mut leds = [BLACK; 20];
        let config = RuntimeConfig::default();
        for step in 0..=5 {
            effect.apply(map(), &mut leds, &config, WHITE, at(24 * step));
        }
        assert_eq!(effect.tracker().rows()[0].lit_count(), 5.0);
        assert_eq!(effect.tracker().rows()[1].lit_count(), 4.0);

        let snake = RuntimeConfig {
            snake: true,
            ..config
        };
        effect.apply(map(), &mut leds, &snake, WHITE, at(24 * 6));
        assert_eq!(effect.tracker().rows()[0].lit_count(), 5.0);
        assert_eq!(effect.tracker().rows()[1].lit_count(), 0.0);
        assert_eq!(leds[10], BLACK);
    }

    #[test]
    fn test_start_rearms_effect() {
        let mut effect = EffectFlavor::FillBottomToTop.to_effect::<4>();
        let mut leds = [BLACK; 20];
        let config = RuntimeConfig::default();
        for step in 0..60 {
            effect.apply(map(), &mut leds, &config, WHITE, at(24 * step));
        }
        assert!(effect.tracker().finished());

        leds = [BLACK; 20];
        effect.start();
        effect.apply(map(), &mut leds, &config, WHITE, at(24 * 61));
        assert!(!effect.tracker().finished());
        assert_eq!(effect.tracker().rows()[0].lit_count(), 0.0);
    }

    #[test]
    fn test_variants_own_their_trackers() {
        let mut fill = StairsEffect::<4>::new(EffectFlavor::FillBottomToTop.plan());
        let mut clear = StairsEffect::<4>::new(EffectFlavor::OffTopToBottom.plan());
        let mut fill_leds = [BLACK; 20];
        let mut clear_leds = [WHITE; 20];
        let config = RuntimeConfig::default();

        fill.apply(map(), &mut fill_leds, &config, WHITE, at(0));
        clear.apply(map(), &mut clear_leds, &config, WHITE, at(0));
        assert!(fill.tracker().rows()[0].is_active());
        assert!(clear.tracker().rows()[1].is_active());
        assert!(!clear.tracker().rows()[0].is_active());
    }
}
