//! Year view: twelve compact month grids, three per row.
//!
//! Day cells show an event-count dot instead of badges; clicking a day jumps
//! to it in the day view.

use chrono::{Datelike, Local, NaiveDate};
use egui::{Color32, Margin, RichText, Rounding, Stroke, Vec2};

use super::event_rendering::day_event_count;
use super::ViewAction;
use crate::models::event::Event;
use crate::services::calendar::grid::{year_grid, MonthCells};
use crate::services::calendar::placement::CalendarCell;
use crate::utils::date::{month_name, SHORT_DAY_NAMES};

const MONTHS_PER_ROW: usize = 3;
const DAY_SIZE: f32 = 24.0;

const CARD_BG: Color32 = Color32::from_rgb(30, 33, 40);
const CARD_BORDER: Color32 = Color32::from_rgb(55, 60, 70);
const TITLE_TEXT: Color32 = Color32::from_rgb(200, 205, 215);
const DAY_TEXT: Color32 = Color32::from_rgb(210, 212, 218);
const MUTED_TEXT: Color32 = Color32::from_rgb(95, 100, 110);
const TODAY_BG: Color32 = Color32::from_rgb(99, 102, 241);
const EVENT_DOT: Color32 = Color32::from_rgb(20, 184, 166);

pub struct YearView;

impl YearView {
    pub fn show(ui: &mut egui::Ui, year: i32, events: &[Event]) -> ViewAction {
        let today = Local::now().date_naive();
        let mut action = ViewAction::None;
        let months = year_grid(year);

        egui::ScrollArea::vertical()
            .id_source("year_view")
            .show(ui, |ui| {
                for (row_idx, row) in months.chunks(MONTHS_PER_ROW).enumerate() {
                    ui.horizontal_top(|ui| {
                        for (col_idx, month) in row.iter().enumerate() {
                            let month_index = row_idx * MONTHS_PER_ROW + col_idx;
                            let card_action =
                                Self::render_month_card(ui, month_index, month, events, today);
                            if !card_action.is_none() {
                                action = card_action;
                            }
                        }
                    });
                    ui.add_space(8.0);
                }
            });

        action
    }

    fn render_month_card(
        ui: &mut egui::Ui,
        month_index: usize,
        month: &MonthCells,
        events: &[Event],
        today: NaiveDate,
    ) -> ViewAction {
        let mut action = ViewAction::None;

        egui::Frame::none()
            .fill(CARD_BG)
            .rounding(Rounding::same(8.0))
            .stroke(Stroke::new(1.0, CARD_BORDER))
            .inner_margin(Margin::same(8.0))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(month_name(month_index))
                        .size(13.0)
                        .color(TITLE_TEXT)
                        .strong(),
                );
                ui.add_space(4.0);

                egui::Grid::new(("year_month", month_index))
                    .spacing([2.0, 2.0])
                    .show(ui, |ui| {
                        for name in SHORT_DAY_NAMES {
                            ui.label(
                                RichText::new(&name[..1]).size(10.0).color(MUTED_TEXT),
                            );
                        }
                        ui.end_row();

                        for week in &month.weeks {
                            for cell in week {
                                let day_action =
                                    Self::render_day(ui, cell.date, cell.is_current_month, events, today);
                                if !day_action.is_none() {
                                    action = day_action;
                                }
                            }
                            ui.end_row();
                        }
                    });
            });

        action
    }

    fn render_day(
        ui: &mut egui::Ui,
        date: NaiveDate,
        is_current_month: bool,
        events: &[Event],
        today: NaiveDate,
    ) -> ViewAction {
        let is_today = date == today;
        let has_events =
            is_current_month && day_event_count(events, &CalendarCell::day(date)) > 0;

        let text_color = if is_today {
            Color32::WHITE
        } else if is_current_month {
            DAY_TEXT
        } else {
            MUTED_TEXT
        };
        let fill = if is_today { TODAY_BG } else { Color32::TRANSPARENT };

        let label = RichText::new(date.day().to_string()).size(11.0).color(text_color);
        let button = egui::Button::new(label)
            .fill(fill)
            .stroke(if has_events {
                Stroke::new(1.0, EVENT_DOT)
            } else {
                Stroke::NONE
            })
            .rounding(Rounding::same(4.0))
            .min_size(Vec2::splat(DAY_SIZE));

        if ui.add(button).clicked() && is_current_month {
            return ViewAction::SwitchToDay(date);
        }

        ViewAction::None
    }
}
