//! Color utilities for plots

use egui::Color32;

/// Number of entries in the series palette
pub const PALETTE_LEN: usize = 6;

const PALETTE: [Color32; PALETTE_LEN] = [
    Color32::from_rgb(0x88, 0x84, 0xd8), // Lavender
    Color32::from_rgb(0x82, 0xca, 0x9d), // Green
    Color32::from_rgb(0xff, 0xc6, 0x58), // Yellow
    Color32::from_rgb(0xff, 0x73, 0x00), // Orange
    Color32::from_rgb(0x8d, 0xd1, 0xe1), // Cyan
    Color32::from_rgb(0xd0, 0x84, 0xd0), // Pink
];

/// Palette color for a series or slice, cycling every six entries
pub fn palette_color(index: usize) -> Color32 {
    PALETTE[index % PALETTE_LEN]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), palette_color(6));
        assert_eq!(palette_color(5), palette_color(11));
        assert_ne!(palette_color(0), palette_color(1));
    }
}
