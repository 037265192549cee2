use egui::Color32;

use crate::ui_egui::theme::AppTheme;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Colors for the availability grid, derived from the active theme
#[derive(Clone, Copy)]
pub(crate) struct GridPalette {
    pub grid_bg: Color32,
    pub hour_line: Color32,
    pub column_line: Color32,
    pub hover_overlay: Color32,
    pub availability_fill: Color32,
    pub availability_border: Color32,
    pub availability_text: Color32,
    pub preview_fill: Color32,
    pub preview_border: Color32,
    pub booking_fill: Color32,
    pub booking_border: Color32,
    pub booking_text: Color32,
    pub time_cursor: Color32,
    pub label_text: Color32,
}

impl GridPalette {
    pub fn from_theme(theme: &AppTheme) -> Self {
        Self {
            grid_bg: theme.card_background,
            hour_line: theme.border,
            column_line: theme.border,
            hover_overlay: with_alpha(theme.accent, 14),
            availability_fill: with_alpha(theme.accent, 50),
            availability_border: theme.accent,
            availability_text: if theme.is_dark {
                theme.text_primary
            } else {
                theme.accent
            },
            preview_fill: with_alpha(theme.accent, 35),
            preview_border: with_alpha(theme.accent, 160),
            booking_fill: with_alpha(theme.success, 50),
            booking_border: theme.success,
            booking_text: if theme.is_dark {
                theme.text_primary
            } else {
                Color32::from_rgb(20, 83, 45)
            },
            time_cursor: Color32::from_rgb(239, 68, 68),
            label_text: theme.text_secondary,
        }
    }
}
