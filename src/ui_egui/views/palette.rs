//! Event badge colors.
//!
//! Ten fixed colors keyed by the id-derived palette index, so an event keeps
//! the same color everywhere it is rendered and across restarts.

use egui::Color32;

use crate::services::calendar::placement::{color_index, PALETTE_SIZE};

pub const EVENT_COLORS: [Color32; PALETTE_SIZE] = [
    Color32::from_rgb(59, 130, 246),  // blue
    Color32::from_rgb(168, 85, 247),  // purple
    Color32::from_rgb(236, 72, 153),  // pink
    Color32::from_rgb(249, 115, 22),  // orange
    Color32::from_rgb(20, 184, 166),  // teal
    Color32::from_rgb(99, 102, 241),  // indigo
    Color32::from_rgb(244, 63, 94),   // rose
    Color32::from_rgb(16, 185, 129),  // emerald
    Color32::from_rgb(6, 182, 212),   // cyan
    Color32::from_rgb(139, 92, 246),  // violet
];

pub fn event_color(event_id: &str) -> Color32 {
    EVENT_COLORS[color_index(event_id)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_color_is_stable() {
        let first = event_color("evt-12345");
        let second = event_color("evt-12345");
        assert_eq!(first, second);
    }

    #[test]
    fn test_known_index() {
        // 'a' + 'b' = 195, 195 % 10 = 5 -> indigo
        assert_eq!(event_color("ab"), EVENT_COLORS[5]);
    }
}
