//! Event badge rendering shared by the calendar views.

use egui::{Color32, RichText, Rounding, Stroke};

use super::palette::event_color;
use crate::models::event::Event;
use crate::services::calendar::placement::{place_events, CalendarCell};

/// Render the badges for every event occupying `cell`, stacked vertically.
/// Returns the id of a clicked event, if any.
pub fn render_cell_events(
    ui: &mut egui::Ui,
    events: &[Event],
    cell: &CalendarCell,
    badge_width: f32,
) -> Option<String> {
    let mut clicked = None;

    for event in place_events(events, cell) {
        let fill = event_color(&event.id);
        let text = RichText::new(&event.title)
            .size(11.0)
            .color(Color32::WHITE);
        let badge = egui::Button::new(text)
            .fill(fill)
            .stroke(Stroke::NONE)
            .rounding(Rounding::same(4.0))
            .min_size(egui::Vec2::new(badge_width, 18.0));

        let response = ui.add(badge).on_hover_text(&event.title);
        if response.clicked() {
            clicked = Some(event.id.clone());
        }
    }

    clicked
}

/// Count badge ("3 acara") for the year view's compact day cells.
pub fn day_event_count(events: &[Event], cell: &CalendarCell) -> usize {
    place_events(events, cell).len()
}
