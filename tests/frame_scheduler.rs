mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_stairs_composer::{
        ApplyOutcome, EffectFlavor, FrameScheduler, LedMap, OutputDriver, Rgb, RuntimeConfig,
    };

    const ROWS: &[&[u16]] = &[&[0, 1, 2], &[3, 4, 5]];
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[derive(Default)]
    struct RecordingDriver {
        writes: usize,
        last: [Rgb; 6],
    }

    impl OutputDriver for &mut RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.writes += 1;
            self.last.copy_from_slice(colors);
        }
    }

    #[test]
    fn test_tick_renders_and_paces() {
        let mut driver = RecordingDriver::default();
        let config = RuntimeConfig::default();
        let map = Some(LedMap::new(ROWS));
        {
            let mut scheduler = FrameScheduler::<_, 6, 2>::new(
                EffectFlavor::FillBottomToTop.to_effect(),
                &mut driver,
            );

            let result = scheduler.tick(map, &config, WHITE, Instant::from_millis(0));
            assert_eq!(result.outcome, ApplyOutcome::Rendered);
            assert_eq!(result.next_deadline, Instant::from_millis(16));
            assert_eq!(result.sleep_duration, Duration::from_millis(16));

            // A long stall resets the deadline instead of bursting
            let result = scheduler.tick(map, &config, WHITE, Instant::from_millis(10_000));
            assert_eq!(result.next_deadline, Instant::from_millis(10_016));
            assert_eq!(result.sleep_duration, Duration::from_millis(16));
            assert_eq!(scheduler.effect().tracker().rows()[0].lit_count(), 2.0);
        }
        assert_eq!(driver.writes, 2);
        assert_eq!(driver.last[0], WHITE);
        assert_eq!(driver.last[5], BLACK);
    }

    #[test]
    fn test_tick_without_map_blanks_output() {
        let mut driver = RecordingDriver {
            writes: 0,
            last: [WHITE; 6],
        };
        let config = RuntimeConfig::default();
        {
            let mut scheduler = FrameScheduler::<_, 6, 2>::new(
                EffectFlavor::OffBottomToTop.to_effect(),
                &mut driver,
            );
            scheduler.frame_mut().fill(WHITE);
            let result = scheduler.tick(None, &config, WHITE, Instant::from_millis(0));
            assert_eq!(result.outcome, ApplyOutcome::Blanked);
            assert_eq!(scheduler.frame(), &[BLACK; 6]);
        }
        assert_eq!(driver.writes, 1);
        assert_eq!(driver.last, [BLACK; 6]);
    }

    #[test]
    fn test_set_effect_resumes_from_buffer() {
        let mut driver = RecordingDriver::default();
        let config = RuntimeConfig::default();
        let map = Some(LedMap::new(ROWS));
        let mut scheduler = FrameScheduler::<_, 6, 2>::new(
            EffectFlavor::FillBottomToTop.to_effect(),
            &mut driver,
        );
        for step in 0..30 {
            scheduler.tick(map, &config, WHITE, Instant::from_millis(24 * step));
        }
        assert!(scheduler.effect().tracker().finished());

        scheduler.set_effect(EffectFlavor::OffTopToBottom.to_effect());
        scheduler.tick(map, &config, WHITE, Instant::from_millis(24 * 30));
        let tracker = scheduler.effect().tracker();
        assert_eq!(tracker.rows()[0].lit_count(), 3.0);
        assert_eq!(tracker.rows()[1].lit_count(), 3.0);
        assert!(tracker.rows()[1].is_active());
    }
}
