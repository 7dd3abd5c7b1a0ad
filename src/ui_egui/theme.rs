//! Theme module for the tour calendar
//!
//! Colors for the month grid, the booking badges and the period panel.

use egui::Color32;

/// A calendar theme defining all colors used by the widget and app
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Regular open day background color
    pub day_background: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Fully booked or past day background
    pub booked_background: Color32,

    /// Day open in the period picker
    pub pending_background: Color32,
    pub pending_border: Color32,

    /// Day holding the confirmed tour slot
    pub selected_background: Color32,
    pub selected_text: Color32,

    /// Badge shown when only the morning is taken
    pub morning_badge: Color32,

    /// Badge shown when only the afternoon is taken
    pub afternoon_badge: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (weekday labels, booked days)
    pub text_secondary: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            day_background: Color32::from_rgb(255, 255, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            booked_background: Color32::from_rgb(238, 238, 238),
            pending_background: Color32::from_rgb(230, 240, 255),
            pending_border: Color32::from_rgb(100, 150, 255),
            selected_background: Color32::from_rgb(37, 99, 235),
            selected_text: Color32::WHITE,
            morning_badge: Color32::from_rgb(245, 158, 11),
            afternoon_badge: Color32::from_rgb(139, 92, 246),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            day_background: Color32::from_rgb(40, 40, 40),
            day_border: Color32::from_rgb(60, 60, 60),
            booked_background: Color32::from_rgb(30, 30, 30),
            pending_background: Color32::from_rgb(50, 60, 80),
            pending_border: Color32::from_rgb(100, 150, 255),
            selected_background: Color32::from_rgb(59, 130, 246),
            selected_text: Color32::WHITE,
            morning_badge: Color32::from_rgb(217, 119, 6),
            afternoon_badge: Color32::from_rgb(124, 58, 237),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
        }
    }

    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);
    }
}

impl Default for CalendarTheme {
    fn default() -> Self {
        Self::light()
    }
}
