//! Month view: the fixed 5x7 grid with day-granularity event badges.

use chrono::{Datelike, Local, NaiveDate};
use egui::{Color32, Margin, RichText, Rounding, Sense, Stroke, Vec2};

use super::event_rendering::render_cell_events;
use super::ViewAction;
use crate::models::event::Event;
use crate::services::calendar::grid::{GRID_COLS, GRID_ROWS};
use crate::services::calendar::placement::CalendarCell;
use crate::utils::date::SHORT_DAY_NAMES;

const HEADER_HEIGHT: f32 = 30.0;
const CELL_HEIGHT: f32 = 96.0;
const SPACING: f32 = 2.0;

const HEADER_BG: Color32 = Color32::from_rgb(40, 44, 52);
const HEADER_TEXT: Color32 = Color32::from_rgb(200, 205, 215);
const CELL_BG: Color32 = Color32::from_rgb(30, 33, 40);
const OUT_OF_MONTH_BG: Color32 = Color32::from_rgb(24, 26, 31);
const CELL_BORDER: Color32 = Color32::from_rgb(55, 60, 70);
const TODAY_BORDER: Color32 = Color32::from_rgb(99, 102, 241);
const DAY_TEXT: Color32 = Color32::from_rgb(220, 222, 228);
const MUTED_TEXT: Color32 = Color32::from_rgb(120, 125, 135);

pub struct MonthView;

impl MonthView {
    pub fn show(
        ui: &mut egui::Ui,
        month_grid: &[[NaiveDate; GRID_COLS]; GRID_ROWS],
        month_index: i32,
        events: &[Event],
        can_write: bool,
    ) -> ViewAction {
        let today = Local::now().date_naive();
        let mut action = ViewAction::None;

        let total_spacing = SPACING * (GRID_COLS as f32 - 1.0);
        let col_width = (ui.available_width() - total_spacing) / GRID_COLS as f32;

        egui::Grid::new("month_header_grid")
            .spacing([SPACING, SPACING])
            .show(ui, |ui| {
                for name in SHORT_DAY_NAMES {
                    ui.allocate_ui_with_layout(
                        Vec2::new(col_width, HEADER_HEIGHT),
                        egui::Layout::centered_and_justified(egui::Direction::TopDown),
                        |ui| {
                            egui::Frame::none()
                                .fill(HEADER_BG)
                                .rounding(Rounding::same(6.0))
                                .inner_margin(Margin::symmetric(8.0, 6.0))
                                .show(ui, |ui| {
                                    ui.centered_and_justified(|ui| {
                                        ui.label(
                                            RichText::new(name)
                                                .size(13.0)
                                                .color(HEADER_TEXT)
                                                .strong(),
                                        );
                                    });
                                });
                        },
                    );
                }
            });

        ui.add_space(4.0);

        egui::Grid::new("month_grid")
            .spacing([SPACING, SPACING])
            .show(ui, |ui| {
                for row in month_grid {
                    for date in row {
                        let cell_action = Self::render_day_cell(
                            ui,
                            *date,
                            month_index,
                            today,
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

        action
    }

    fn render_day_cell(
        ui: &mut egui::Ui,
        date: NaiveDate,
        month_index: i32,
        today: NaiveDate,
        events: &[Event],
        can_write: bool,
        col_width: f32,
    ) -> ViewAction {
        let is_today = date == today;
        let in_month = date.month0() as i32 == month_index;
        let mut action = ViewAction::None;

        let fill = if in_month { CELL_BG } else { OUT_OF_MONTH_BG };
        let border = if is_today { TODAY_BORDER } else { CELL_BORDER };

        ui.allocate_ui_with_layout(
            Vec2::new(col_width, CELL_HEIGHT),
            egui::Layout::top_down(egui::Align::Min),
            |ui| {
                let frame_response = egui::Frame::none()
                    .fill(fill)
                    .rounding(Rounding::same(6.0))
                    .stroke(Stroke::new(if is_today { 2.0 } else { 1.0 }, border))
                    .inner_margin(Margin::same(4.0))
                    .show(ui, |ui| {
                        ui.set_min_size(Vec2::new(col_width - 8.0, CELL_HEIGHT - 8.0));

                        let day_text = if is_today {
                            RichText::new(date.day().to_string())
                                .size(13.0)
                                .color(TODAY_BORDER)
                                .strong()
                        } else if in_month {
                            RichText::new(date.day().to_string()).size(13.0).color(DAY_TEXT)
                        } else {
                            RichText::new(date.day().to_string()).size(13.0).color(MUTED_TEXT)
                        };
                        ui.label(day_text);

                        if let Some(event_id) =
                            render_cell_events(ui, events, &CalendarCell::day(date), col_width - 12.0)
                        {
                            action = ViewAction::OpenEvent(event_id);
                        }
                    });

                // A click on the cell background (not a badge) opens the
                // create dialog prefilled with the date.
                let response = ui.interact(
                    frame_response.response.rect,
                    ui.id().with(("month_cell", date)),
                    Sense::click(),
                );
                if response.clicked() && can_write && action.is_none() {
                    action = ViewAction::CreateEvent { date, hour: None };
                }
            },
        );

        action
    }
}
