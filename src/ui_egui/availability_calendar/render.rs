//! egui rendering for the availability calendar.
//!
//! Rendering only collects a [`CalendarInteraction`]; state changes are
//! applied after the frame's widgets are laid out.

use chrono::Local;
use egui::{Color32, CursorIcon, Margin, RichText, Rounding, Sense, Stroke, Vec2};

use super::{AvailabilityCalendar, CalendarInteraction, CellStatus, GridCell, PartialBooking, PeriodPanel};
use crate::models::booking::Selection;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::month_title;

const CELL_SIZE: f32 = 44.0;
const DAY_NAMES: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

impl AvailabilityCalendar {
    /// Draw the calendar and return the selection confirmed this frame, if any.
    pub fn show(&mut self, ui: &mut egui::Ui, theme: &CalendarTheme) -> Option<Selection> {
        if self.follows_local_clock() {
            self.refresh_today(Local::now().date_naive());
        }
        let mut interaction = None;

        self.render_header(ui, theme, &mut interaction);
        ui.add_space(6.0);
        self.render_grid(ui, theme, &mut interaction);

        if let Some(panel) = self.state.period_panel() {
            ui.add_space(6.0);
            ui.separator();
            render_period_panel(ui, theme, &panel, &mut interaction);
        }

        interaction.and_then(|interaction| self.apply(interaction))
    }

    /// Month/Year header with month navigation arrows.
    fn render_header(
        &self,
        ui: &mut egui::Ui,
        theme: &CalendarTheme,
        interaction: &mut Option<CalendarInteraction>,
    ) {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(self.state.can_go_to_previous_month(), egui::Button::new("◀"))
                .on_hover_text("Previous month")
                .clicked()
            {
                *interaction = Some(CalendarInteraction::PreviousMonth);
            }

            let title = month_title(self.state.viewing_year(), self.state.viewing_month());
            ui.label(
                RichText::new(title)
                    .size(16.0)
                    .strong()
                    .color(theme.text_primary),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button("▶")
                    .on_hover_text("Next month")
                    .clicked()
                {
                    *interaction = Some(CalendarInteraction::NextMonth);
                }
            });
        });
    }

    /// Day-of-week headers followed by the month's day cells.
    fn render_grid(
        &self,
        ui: &mut egui::Ui,
        theme: &CalendarTheme,
        interaction: &mut Option<CalendarInteraction>,
    ) {
        let cells = self.state.month_grid();

        egui::Grid::new("availability_calendar_grid")
            .num_columns(7)
            .spacing([4.0, 4.0])
            .min_col_width(CELL_SIZE)
            .show(ui, |ui| {
                for name in &DAY_NAMES {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(*name)
                                .small()
                                .strong()
                                .color(theme.text_secondary),
                        );
                    });
                }
                ui.end_row();

                for (idx, cell) in cells.iter().enumerate() {
                    match *cell {
                        GridCell::Blank => {
                            ui.allocate_space(Vec2::splat(CELL_SIZE));
                        }
                        GridCell::Day { day, status } => {
                            if render_day_cell(ui, theme, day, status) {
                                *interaction = Some(CalendarInteraction::Day(day));
                            }
                        }
                    }
                    if idx % 7 == 6 {
                        ui.end_row();
                    }
                }
            });
    }
}

/// Returns true when an interactive cell was clicked.
fn render_day_cell(ui: &mut egui::Ui, theme: &CalendarTheme, day: u32, status: CellStatus) -> bool {
    let (fill, stroke, text_color) = match status {
        CellStatus::Booked => (
            theme.booked_background,
            Stroke::new(1.0, theme.day_border),
            theme.text_secondary,
        ),
        CellStatus::Pending => (
            theme.pending_background,
            Stroke::new(2.0, theme.pending_border),
            theme.text_primary,
        ),
        CellStatus::Selected => (
            theme.selected_background,
            Stroke::new(1.0, theme.selected_background),
            theme.selected_text,
        ),
        CellStatus::Open(_) => (
            theme.day_background,
            Stroke::new(1.0, theme.day_border),
            theme.text_primary,
        ),
    };

    let response = egui::Frame::none()
        .fill(fill)
        .stroke(stroke)
        .rounding(Rounding::same(6.0))
        .inner_margin(Margin::same(2.0))
        .show(ui, |ui| {
            ui.set_min_size(Vec2::splat(CELL_SIZE - 4.0));
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(day.to_string()).strong().color(text_color));
                match status {
                    CellStatus::Booked => {
                        ui.label(RichText::new("Booked").small().color(theme.text_secondary));
                    }
                    CellStatus::Open(PartialBooking::MorningBooked) => {
                        period_badge(ui, "AM", theme.morning_badge);
                    }
                    CellStatus::Open(PartialBooking::AfternoonBooked) => {
                        period_badge(ui, "PM", theme.afternoon_badge);
                    }
                    _ => {}
                }
            });
        })
        .response;

    if !status.is_interactive() {
        return false;
    }

    response
        .interact(Sense::click())
        .on_hover_cursor(CursorIcon::PointingHand)
        .clicked()
}

/// Small marker for a day whose morning or afternoon is already taken.
fn period_badge(ui: &mut egui::Ui, text: &str, color: Color32) {
    egui::Frame::none()
        .fill(color)
        .rounding(Rounding::same(4.0))
        .inner_margin(Margin::symmetric(3.0, 0.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(Color32::WHITE));
        });
}

fn render_period_panel(
    ui: &mut egui::Ui,
    theme: &CalendarTheme,
    panel: &PeriodPanel,
    interaction: &mut Option<CalendarInteraction>,
) {
    let heading = panel
        .date()
        .map(|date| date.format("%A, %B %-d").to_string())
        .unwrap_or_default();
    ui.label(RichText::new(format!("Choose a time for {}", heading)).strong());
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        for option in panel.options {
            let status = if option.booked {
                "Booked"
            } else if option.selected {
                "Selected"
            } else {
                "Available"
            };
            let text = format!(
                "{}\n{}\n{}",
                option.period.display_name(),
                option.period.window_label(),
                status
            );

            let mut button = egui::Button::new(RichText::new(text).color(if option.selected {
                theme.selected_text
            } else {
                theme.text_primary
            }))
            .min_size(Vec2::new(150.0, 56.0))
            .selected(option.selected);
            if option.selected {
                button = button.fill(theme.selected_background);
            }

            if ui.add_enabled(!option.booked, button).clicked() {
                *interaction = Some(CalendarInteraction::Period {
                    day: panel.day,
                    month: panel.month,
                    year: panel.year,
                    period: option.period,
                });
            }
        }
    });
}
