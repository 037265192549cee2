//! Theme module for the egui application.
//!
//! Defines the AppTheme structure holding every color the dashboards use,
//! with light and dark presets, and applies the base egui visuals.

use egui::{Color32, Context};

use crate::services::config::ThemePreference;

/// A theme defining all colors used in the application
#[derive(Debug, Clone)]
pub struct AppTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Card / panel surface color
    pub card_background: Color32,

    /// Subtle background for nested sections inside cards
    pub inset_background: Color32,

    /// Card and divider border color
    pub border: Color32,

    /// Primary brand color (buttons, active tab, selection)
    pub accent: Color32,

    /// Washed-out accent for fills and badges
    pub accent_soft: Color32,

    /// Confirmed/positive color
    pub success: Color32,

    /// Washed-out success for badge backgrounds
    pub success_soft: Color32,

    /// Pending/attention color
    pub warning: Color32,

    /// Washed-out warning for badge backgrounds
    pub warning_soft: Color32,

    /// Destructive action color
    pub danger: Color32,

    /// Star rating color
    pub star: Color32,

    /// Primary text color
    pub text_primary: Color32,

    /// Secondary text color
    pub text_secondary: Color32,
}

impl AppTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(249, 250, 251),
            card_background: Color32::from_rgb(255, 255, 255),
            inset_background: Color32::from_rgb(243, 244, 246),
            border: Color32::from_rgb(229, 231, 235),
            accent: Color32::from_rgb(79, 70, 229),
            accent_soft: Color32::from_rgb(224, 231, 255),
            success: Color32::from_rgb(22, 163, 74),
            success_soft: Color32::from_rgb(220, 252, 231),
            warning: Color32::from_rgb(217, 119, 6),
            warning_soft: Color32::from_rgb(254, 243, 199),
            danger: Color32::from_rgb(220, 38, 38),
            star: Color32::from_rgb(251, 191, 36),
            text_primary: Color32::from_rgb(17, 24, 39),
            text_secondary: Color32::from_rgb(107, 114, 128),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(24, 26, 32),
            card_background: Color32::from_rgb(34, 37, 46),
            inset_background: Color32::from_rgb(44, 48, 58),
            border: Color32::from_rgb(58, 62, 74),
            accent: Color32::from_rgb(129, 140, 248),
            accent_soft: Color32::from_rgb(49, 46, 129),
            success: Color32::from_rgb(74, 222, 128),
            success_soft: Color32::from_rgb(20, 60, 35),
            warning: Color32::from_rgb(251, 191, 36),
            warning_soft: Color32::from_rgb(70, 55, 15),
            danger: Color32::from_rgb(248, 113, 113),
            star: Color32::from_rgb(251, 191, 36),
            text_primary: Color32::from_rgb(240, 240, 245),
            text_secondary: Color32::from_rgb(156, 163, 175),
        }
    }

    /// Resolve the configured preference into a concrete theme
    pub fn from_preference(preference: ThemePreference) -> Self {
        if preference.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply the theme's base visuals to the egui context
    pub fn apply(&self, ctx: &Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        visuals.panel_fill = self.app_background;
        visuals.window_fill = self.card_background;
        visuals.window_stroke = egui::Stroke::new(1.0, self.border);
        visuals.override_text_color = Some(self.text_primary);
        visuals.selection.bg_fill = self.accent;
        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_resolution() {
        assert!(!AppTheme::from_preference(ThemePreference::Light).is_dark);
        assert!(AppTheme::from_preference(ThemePreference::Dark).is_dark);
    }
}
