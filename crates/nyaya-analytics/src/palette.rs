//! Categorical color palettes.

/// Slice colors of the IPC crime dashboard.
pub const IPC_PALETTE: &[&str] = &[
    "#ff9933", "#1a2847", "#ff6b6b", "#6a5acd", "#2ecc71", "#e84393", "#00cec9", "#fdcb6e",
];

/// Slice colors of the crimes-against-women dashboard.
pub const WOMEN_PALETTE: &[&str] = &[
    "#ff6b6b", "#ff9f43", "#1dd1a1", "#54a0ff", "#5f27cd", "#00d2d3", "#e84393",
];

/// Palette slot for category `i`. Colors cycle; a zero-sized palette maps
/// everything to slot 0.
#[must_use]
pub const fn assign_palette_index(i: usize, palette_size: usize) -> usize {
    match i.checked_rem(palette_size) {
        Some(slot) => slot,
        None => 0,
    }
}

/// Color for category `i`, or `None` for an empty palette.
#[must_use]
pub fn color_for<'a>(palette: &[&'a str], i: usize) -> Option<&'a str> {
    palette.get(assign_palette_index(i, palette.len())).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_cycle_over_the_palette() {
        let slots: Vec<usize> = (0..16).map(|i| assign_palette_index(i, 8)).collect();
        assert_eq!(slots, [0, 1, 2, 3, 4, 5, 6, 7, 0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn empty_palette_does_not_panic() {
        assert_eq!(assign_palette_index(5, 0), 0);
        assert_eq!(color_for(&[], 5), None);
    }

    #[test]
    fn palettes_match_dashboard_sizes() {
        assert_eq!(IPC_PALETTE.len(), 8);
        assert_eq!(WOMEN_PALETTE.len(), 7);
        assert_eq!(color_for(WOMEN_PALETTE, 7), Some("#ff6b6b"));
    }
}
