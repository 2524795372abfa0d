//! Proportional text bar for percentage notifications.

pub const FILLED_GLYPH: char = '█';
pub const EMPTY_GLYPH: char = '░';

/// Number of filled segments for `value` percent over `width` segments.
///
/// Values above 100 saturate.
pub fn filled_segments(value: u32, width: usize) -> usize {
    let value = value.min(100) as usize;
    // round(value / 100 * width) in integer arithmetic, halves round up
    (value * width * 2 + 100) / 200
}

pub fn render_bar(value: u32, width: usize) -> String {
    let filled = filled_segments(value, width);
    let mut bar = String::with_capacity(width * FILLED_GLYPH.len_utf8());
    bar.extend(std::iter::repeat(FILLED_GLYPH).take(filled));
    bar.extend(std::iter::repeat(EMPTY_GLYPH).take(width - filled));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_bar_ends() {
        assert_eq!(filled_segments(0, 20), 0);
        assert_eq!(filled_segments(100, 20), 20);
        assert_eq!(render_bar(0, 4), "░░░░");
        assert_eq!(render_bar(100, 4), "████");
    }

    #[test]
    fn test_bar_rounding() {
        assert_eq!(filled_segments(50, 20), 10);
        // 2.5% of 20 = 0.5 -> 1
        assert_eq!(filled_segments(2, 25), 1);
        assert_eq!(filled_segments(1, 20), 0);
        assert_eq!(filled_segments(3, 20), 1);
        assert_eq!(render_bar(50, 4), "██░░");
    }

    #[test]
    fn test_bar_saturates_above_100() {
        assert_eq!(filled_segments(150, 20), 20);
        assert_eq!(render_bar(250, 3).chars().count(), 3);
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(render_bar(70, 0), "");
    }

    proptest! {
        #[test]
        fn filled_within_bounds(value in 0u32..=100, width in 0usize..200) {
            let filled = filled_segments(value, width);
            prop_assert!(filled <= width);
            prop_assert_eq!(render_bar(value, width).chars().count(), width);
        }

        #[test]
        fn filled_is_monotonic(a in 0u32..=100, b in 0u32..=100, width in 1usize..200) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(filled_segments(lo, width) <= filled_segments(hi, width));
        }

        #[test]
        fn filled_saturates(width in 0usize..200) {
            prop_assert_eq!(filled_segments(0, width), 0);
            prop_assert_eq!(filled_segments(100, width), width);
        }
    }
}
