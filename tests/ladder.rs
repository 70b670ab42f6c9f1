mod tests {
    use myrtio_ganged_light::ladder::{LEVEL_MAX, LadderSplit, encode, encode_into, split};

    #[test]
    fn test_split() {
        assert_eq!(split(0), LadderSplit { full: 0, remainder: 0 });
        assert_eq!(split(700), LadderSplit { full: 2, remainder: 188 });
        assert_eq!(split(1023), LadderSplit { full: 3, remainder: 255 });
        assert_eq!(split(4000), LadderSplit { full: 3, remainder: 255 });
    }

    #[test]
    fn test_encode_every_level_on_four_units() {
        for value in 0..=LEVEL_MAX {
            let units: [u8; 4] = encode(value);
            let full = usize::from(value / 256);
            let remainder = (value % 256) as u8;

            assert!(units[..full].iter().all(|unit| *unit == 255));
            assert_eq!(units[full], remainder);
            assert!(units[full + 1..].iter().all(|unit| *unit == 0));
        }
    }

    #[test]
    fn test_encode_output_is_monotonic() {
        let mut previous = 0u32;
        for value in 0..=LEVEL_MAX {
            let units: [u8; 4] = encode(value);
            let total: u32 = units.iter().map(|unit| u32::from(*unit)).sum();
            assert!(total >= previous);
            previous = total;
        }
    }

    #[test]
    fn test_encode_full_scale() {
        assert_eq!(encode::<4>(1023), [255, 255, 255, 255]);
        assert_eq!(encode::<4>(768), [255, 255, 255, 0]);
        assert_eq!(encode::<4>(255), [255, 0, 0, 0]);
        assert_eq!(encode::<4>(256), [255, 0, 0, 0]);
        assert_eq!(encode::<4>(257), [255, 1, 0, 0]);
    }

    #[test]
    fn test_encode_clamps_level() {
        assert_eq!(encode::<4>(1024), [255, 255, 255, 255]);
        assert_eq!(encode::<6>(u16::MAX), [255, 255, 255, 255, 0, 0]);
    }

    #[test]
    fn test_encode_saturates_short_ladders() {
        assert_eq!(encode::<2>(300), [255, 44]);
        assert_eq!(encode::<2>(511), [255, 255]);
        assert_eq!(encode::<2>(512), [255, 255]);
        assert_eq!(encode::<2>(1023), [255, 255]);
        assert_eq!(encode::<1>(100), [100]);
        assert_eq!(encode::<1>(600), [255]);
        assert_eq!(encode::<0>(600), [0u8; 0]);
    }

    #[test]
    fn test_encode_into_clears_stale_units() {
        let mut units = [9u8; 4];
        encode_into(300, &mut units);
        assert_eq!(units, [255, 44, 0, 0]);
    }
}
