//! Display a fraction as a horizontal bar chart, with half-block resolution by using Unicode block
//! characters.

use crate::options::ProperFraction;

// Only full and half blocks, since the other partial blocks may look slightly different depending
// on the font.
const FULL_BLOCK: char = '█';
const HALF_BLOCK: char = '▌';
const EMPTY: char = ' ';

/// Returns a bar of exactly `width` characters, filled proportionally to `fraction` (rounded down
/// to half blocks).
pub fn unicode_bar(fraction: ProperFraction, width: usize) -> String {
    let half_blocks = (fraction.0 * (2 * width) as f64).floor() as usize;

    let mut bar: String = std::iter::repeat(FULL_BLOCK).take(half_blocks / 2).collect();
    if half_blocks % 2 == 1 {
        bar.push(HALF_BLOCK);
    }
    let drawn = bar.chars().count();
    bar.extend(std::iter::repeat(EMPTY).take(width.saturating_sub(drawn)));

    debug_assert_eq!(bar.chars().count(), width);
    bar
}

#[test]
fn test_bar() {
    assert_eq!(unicode_bar(ProperFraction(0.0), 4), "    ");
    assert_eq!(unicode_bar(ProperFraction(1.0), 4), "████");
    assert_eq!(unicode_bar(ProperFraction(0.5), 4), "██  ");
    assert_eq!(unicode_bar(ProperFraction(0.25), 2), "▌ ");
    assert_eq!(unicode_bar(ProperFraction(0.0), 0), "");

    for i in 0..=100 {
        let fraction = ProperFraction::new(i, 100).unwrap();
        assert_eq!(unicode_bar(fraction, 10).chars().count(), 10, "{i}");
    }
}
