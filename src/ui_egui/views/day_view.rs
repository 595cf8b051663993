//! Day view: a single-day 24-hour time grid.

use chrono::{NaiveDate, Timelike};
use egui::{Color32, RichText, Vec2};

use super::week_view::render_hour_cell;
use super::ViewAction;
use crate::models::event::Event;
use crate::services::calendar::grid::day_hours;
use crate::utils::date;

const HOUR_COL_WIDTH: f32 = 52.0;
const SPACING: f32 = 2.0;
const HOUR_TEXT: Color32 = Color32::from_rgb(120, 125, 135);

pub struct DayView;

impl DayView {
    pub fn show(
        ui: &mut egui::Ui,
        cursor: NaiveDate,
        events: &[Event],
        can_write: bool,
    ) -> ViewAction {
        let mut action = ViewAction::None;

        ui.label(
            RichText::new(date::format_long(cursor))
                .size(15.0)
                .strong(),
        );
        ui.add_space(6.0);

        let col_width = ui.available_width() - HOUR_COL_WIDTH - SPACING;

        egui::ScrollArea::vertical()
            .id_source("day_time_grid")
            .show(ui, |ui| {
                egui::Grid::new("day_grid")
                    .spacing([SPACING, SPACING])
                    .show(ui, |ui| {
                        for hour in day_hours() {
                            ui.allocate_ui_with_layout(
                                Vec2::new(HOUR_COL_WIDTH, 44.0),
                                egui::Layout::top_down(egui::Align::Max),
                                |ui| {
                                    ui.label(
                                        RichText::new(format!("{:02}:00", hour.hour()))
                                            .size(11.0)
                                            .color(HOUR_TEXT),
                                    );
                                },
                            );

                            let cell_action = render_hour_cell(
                                ui,
                                cursor,
                                hour.hour(),
                                events,
                                can_write,
                                col_width,
                            );
                            if !cell_action.is_none() {
                                action = cell_action;
                            }
                            ui.end_row();
                        }
                    });
            });

        action
    }
}
