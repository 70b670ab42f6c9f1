mod tests {
    use std::cell::Cell;

    use myrtio_ganged_light::command::TrySendError;
    use myrtio_ganged_light::{
        Clock, CommandChannel, Delay, Duration, Fixture, FixtureCommand, FixtureConfig,
        OutputDriver, Rgb, Rgb10, SweepAxis, SweepConfig, hue_value_to_rgb,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
    }

    impl OutputDriver for RecordingDriver {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }
    }

    #[derive(Default)]
    struct MockClock {
        now: Cell<u32>,
    }

    impl Clock for MockClock {
        fn now_ms(&self) -> u32 {
            self.now.get()
        }
    }

    /// Delay that advances the mock clock instead of sleeping
    struct MockDelay<'a> {
        clock: &'a MockClock,
        calls: usize,
    }

    impl Delay for MockDelay<'_> {
        fn delay_ms(&mut self, ms: u32) {
            self.calls += 1;
            self.clock.now.set(self.clock.now.get().wrapping_add(ms));
        }
    }

    fn fixture(clock: &MockClock) -> Fixture<RecordingDriver, &MockClock, 4> {
        let config = FixtureConfig {
            gamma: false,
            ..FixtureConfig::default()
        };
        Fixture::new(RecordingDriver::default(), clock, &config)
    }

    fn written<'a>(fixture: &'a Fixture<RecordingDriver, &MockClock, 4>) -> &'a [Vec<Rgb>] {
        &fixture.engine().output().frames
    }

    #[test]
    fn test_new_fixture_does_not_write() {
        let clock = MockClock::default();
        let fixture = fixture(&clock);
        assert!(written(&fixture).is_empty());
        assert_eq!(fixture.frame(), &[OFF; 4]);
        assert!(!fixture.engine().gamma_enabled());
    }

    #[test]
    fn test_set_rgb_then_all_off() {
        let clock = MockClock::default();
        let mut fixture = fixture(&clock);
        fixture.set_rgb(1023, 1023, 1023);
        fixture.all_off();
        assert_eq!(fixture.frame(), &[OFF; 4]);
        assert_eq!(written(&fixture).len(), 2);
    }

    #[test]
    fn test_set_gamma() {
        let clock = MockClock::default();
        let mut fixture = fixture(&clock);
        fixture.set_gamma(true);
        fixture.set_rgb(512, 0, 0);
        assert_eq!(fixture.frame()[0], Rgb { r: 223, g: 0, b: 0 });
    }

    #[test]
    fn test_wheel_color_through_ladder() {
        let clock = MockClock::default();
        let mut fixture = fixture(&clock);
        let color = hue_value_to_rgb(1023, 1023);
        assert_eq!(color, Rgb10::new(0, 1023, 0));

        fixture.set_rgb10(color);
        assert_eq!(fixture.frame(), &[Rgb { r: 0, g: 255, b: 0 }; 4]);
    }

    #[test]
    fn test_process_commands() {
        let clock = MockClock::default();
        let mut fixture = fixture(&clock);
        let channel: CommandChannel<8> = CommandChannel::new();
        let sender = channel.sender();

        sender.try_send(FixtureCommand::SetIntensity(512)).unwrap();
        sender.try_send(FixtureCommand::SetHue(0)).unwrap();
        sender
            .try_send(FixtureCommand::SetRgb(Rgb10::new(300, 0, 0)))
            .unwrap();
        assert_eq!(channel.len(), 3);

        let applied = fixture.process_commands(&channel.receiver());
        assert_eq!(applied, 3);
        assert!(channel.is_empty());
        assert_eq!(fixture.engine().intensity(), 512);
        assert_eq!(written(&fixture).len(), 3);
        assert_eq!(written(&fixture)[1], vec![RED, RED, OFF, OFF]);
        assert_eq!(
            fixture.frame(),
            &[RED, Rgb { r: 44, g: 0, b: 0 }, OFF, OFF]
        );

        assert_eq!(fixture.process_commands(&channel.receiver()), 0);
    }

    #[test]
    fn test_sweep_commands() {
        let clock = MockClock::default();
        let mut fixture = fixture(&clock);
        let channel: CommandChannel<4> = CommandChannel::new();
        let sender = channel.sender();

        let config = SweepConfig {
            hue_start: 10,
            hue_stop: 20,
            step: 5,
            interval: Duration::from_millis(100),
            axis: SweepAxis::Hue,
        };
        sender.try_send(FixtureCommand::ConfigureSweep(config)).unwrap();
        sender.try_send(FixtureCommand::EnableSweep(true)).unwrap();
        fixture.process_commands(&channel.receiver());
        assert!(fixture.sweep().is_enabled());
        assert_eq!(fixture.sweep().config(), &config);

        clock.now.set(101);
        fixture.poll_sweep(0);
        assert_eq!(fixture.sweep().current(), 15);

        sender.try_send(FixtureCommand::ResetSweep).unwrap();
        sender.try_send(FixtureCommand::EnableSweep(false)).unwrap();
        fixture.process_commands(&channel.receiver());
        assert!(!fixture.sweep().is_enabled());
        assert_eq!(fixture.sweep().current(), 10);
    }

    #[test]
    fn test_full_channel_rejects_command() {
        let channel: CommandChannel<2> = CommandChannel::new();
        let sender = channel.sender();
        sender.try_send(FixtureCommand::AllOff).unwrap();
        sender.try_send(FixtureCommand::AllOff).unwrap();
        assert_eq!(
            sender.try_send(FixtureCommand::SetGamma(true)),
            Err(TrySendError(FixtureCommand::SetGamma(true)))
        );
        assert!(channel.receiver().try_receive().is_ok());
        assert!(channel.receiver().try_receive().is_ok());
        assert!(channel.receiver().try_receive().is_err());
    }

    #[test]
    fn test_sweep_with_delay_ascending() {
        let clock = MockClock::default();
        let mut fixture = fixture(&clock);
        fixture.set_intensity(1023);
        let mut delay = MockDelay { clock: &clock, calls: 0 };

        fixture.sweep_with_delay(0, 4, 10, &mut delay);
        assert_eq!(delay.calls, 4);
        assert_eq!(clock.now_ms(), 40);
        assert_eq!(written(&fixture).len(), 4);
        assert_eq!(written(&fixture)[0], vec![RED; 4]);
    }

    #[test]
    fn test_sweep_with_delay_descending() {
        let clock = MockClock::default();
        let mut fixture = fixture(&clock);
        fixture.set_intensity(1023);
        let mut delay = MockDelay { clock: &clock, calls: 0 };

        fixture.sweep_with_delay(255, 250, 1, &mut delay);
        assert_eq!(delay.calls, 5);

        fixture.sweep_with_delay(7, 7, 1, &mut delay);
        assert_eq!(delay.calls, 5);
    }

    #[test]
    fn test_sweep_intensity_with_delay() {
        let clock = MockClock::default();
        let mut fixture = fixture(&clock);
        let mut delay = MockDelay { clock: &clock, calls: 0 };

        fixture.sweep_intensity_with_delay(0, 1023, 256, 5, &mut delay);
        assert_eq!(delay.calls, 4);
        assert_eq!(fixture.frame(), &[RED, RED, RED, OFF]);

        fixture.sweep_intensity_with_delay(1023, 0, 300, 5, &mut delay);
        assert_eq!(delay.calls, 8);
        // 1023, 723, 423, 123
        assert_eq!(fixture.frame(), &[Rgb { r: 123, g: 0, b: 0 }, OFF, OFF, OFF]);
    }

    #[test]
    fn test_sweep_intensity_zero_step() {
        let clock = MockClock::default();
        let mut fixture = fixture(&clock);
        let mut delay = MockDelay { clock: &clock, calls: 0 };

        fixture.sweep_intensity_with_delay(0, 3, 0, 1, &mut delay);
        assert_eq!(delay.calls, 3);
    }

    #[test]
    fn test_run_sweep_to_completion() {
        let clock = MockClock::default();
        let mut fixture = fixture(&clock);
        fixture.set_intensity(1023);
        fixture.configure_sweep(SweepConfig {
            hue_start: 0,
            hue_stop: 10,
            step: 2,
            interval: Duration::from_millis(100),
            axis: SweepAxis::Hue,
        });
        let mut delay = MockDelay { clock: &clock, calls: 0 };

        let steps = fixture.run_sweep(0, 10, &mut delay);
        assert_eq!(steps, 5);
        assert!(!fixture.sweep().is_enabled());
        assert_eq!(fixture.sweep().current(), 10);
        assert_eq!(fixture.engine().hue(), 10);
        assert_eq!(written(&fixture).len(), 5);
    }
}
