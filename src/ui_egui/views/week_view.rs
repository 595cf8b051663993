//! Week view: a seven-day strip over a 24-hour time grid.

use chrono::{Datelike, NaiveDate, Timelike};
use egui::{Color32, Margin, RichText, Rounding, Sense, Stroke, Vec2};

use super::event_rendering::render_cell_events;
use super::ViewAction;
use crate::models::event::Event;
use crate::services::calendar::grid::{day_hours, week_days};
use crate::services::calendar::placement::CalendarCell;
use crate::utils::date::short_day_name;

const HOUR_COL_WIDTH: f32 = 52.0;
const ROW_HEIGHT: f32 = 44.0;
const SPACING: f32 = 2.0;

const STRIP_BG: Color32 = Color32::from_rgb(40, 44, 52);
const STRIP_TEXT: Color32 = Color32::from_rgb(200, 205, 215);
const TODAY_BG: Color32 = Color32::from_rgb(55, 58, 95);
const TODAY_TEXT: Color32 = Color32::from_rgb(140, 143, 255);
const SLOT_BG: Color32 = Color32::from_rgb(30, 33, 40);
const SLOT_BORDER: Color32 = Color32::from_rgb(50, 54, 63);
const HOUR_TEXT: Color32 = Color32::from_rgb(120, 125, 135);

pub struct WeekView;

impl WeekView {
    pub fn show(
        ui: &mut egui::Ui,
        cursor: NaiveDate,
        events: &[Event],
        can_write: bool,
    ) -> ViewAction {
        let mut action = ViewAction::None;
        let days = week_days(cursor);

        let total_spacing = SPACING * 7.0;
        let col_width = (ui.available_width() - HOUR_COL_WIDTH - total_spacing) / 7.0;

        // Day strip.
        egui::Grid::new("week_strip")
            .spacing([SPACING, SPACING])
            .show(ui, |ui| {
                ui.allocate_exact_size(Vec2::new(HOUR_COL_WIDTH, 40.0), Sense::hover());
                for day in &days {
                    let (bg, fg) = if day.is_today {
                        (TODAY_BG, TODAY_TEXT)
                    } else {
                        (STRIP_BG, STRIP_TEXT)
                    };
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, 40.0),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(bg)
                                .rounding(Rounding::same(6.0))
                                .inner_margin(Margin::symmetric(6.0, 4.0))
                                .show(ui, |ui| {
                                    ui.vertical_centered(|ui| {
                                        ui.label(
                                            RichText::new(short_day_name(day.date))
                                                .size(11.0)
                                                .color(fg),
                                        );
                                        ui.label(
                                            RichText::new(day.date.day().to_string())
                                                .size(15.0)
                                                .color(fg)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
                ui.end_row();
            });

        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .id_source("week_time_grid")
            .show(ui, |ui| {
                egui::Grid::new("week_grid")
                    .spacing([SPACING, SPACING])
                    .show(ui, |ui| {
                        for hour in day_hours() {
                            ui.allocate_ui_with_layout(
                                Vec2::new(HOUR_COL_WIDTH, ROW_HEIGHT),
                                egui::Layout::top_down(egui::Align::Max),
                                |ui| {
                                    ui.label(
                                        RichText::new(format!("{:02}:00", hour.hour()))
                                            .size(11.0)
                                            .color(HOUR_TEXT),
                                    );
                                },
                            );

                            for day in &days {
                                let cell_action = render_hour_cell(
                                    ui,
                                    day.date,
                                    hour.hour(),
                                    events,
                                    can_write,
                                    col_width,
                                );
                                if !cell_action.is_none() {
                                    action = cell_action;
                                }
                            }
                            ui.end_row();
                        }
                    });
            });

        action
    }
}

pub(super) fn render_hour_cell(
    ui: &mut egui::Ui,
    date: NaiveDate,
    hour: u32,
    events: &[Event],
    can_write: bool,
    col_width: f32,
) -> ViewAction {
    let mut action = ViewAction::None;

    ui.allocate_ui_with_layout(
        Vec2::new(col_width, ROW_HEIGHT),
        egui::Layout::top_down(egui::Align::Min),
        |ui| {
            let frame_response = egui::Frame::none()
                .fill(SLOT_BG)
                .rounding(Rounding::same(4.0))
                .stroke(Stroke::new(1.0, SLOT_BORDER))
                .inner_margin(Margin::same(2.0))
                .show(ui, |ui| {
                    ui.set_min_size(Vec2::new(col_width - 4.0, ROW_HEIGHT - 4.0));
                    if let Some(event_id) = render_cell_events(
                        ui,
                        events,
                        &CalendarCell::at_hour(date, hour),
                        col_width - 8.0,
                    ) {
                        action = ViewAction::OpenEvent(event_id);
                    }
                });

            let response = ui.interact(
                frame_response.response.rect,
                ui.id().with(("hour_cell", date, hour)),
                Sense::click(),
            );
            if response.clicked() && can_write && action.is_none() {
                action = ViewAction::CreateEvent {
                    date,
                    hour: Some(hour),
                };
            }
        },
    );

    action
}
