//! Sign-in screen.
//!
//! Demo authentication only: an email containing "mentor" opens the mentor
//! portal, anything else the student portal, and any password is accepted.
//! The social sign-in buttons skip the form entirely.

use egui::{RichText, TextEdit, Ui, Vec2};

use crate::models::user::UserRole;
use crate::ui_egui::theme::AppTheme;
use crate::ui_egui::views::widgets::card_frame;

/// Form state for the sign-in screen
#[derive(Default)]
pub struct AuthState {
    pub email: String,
    pub password: String,
    error: Option<String>,
}

impl AuthState {
    /// Validate the form and resolve the demo role.
    /// Mirrors the sign-in rule: "mentor" anywhere in the email selects
    /// the mentor portal.
    pub fn submit(&mut self) -> Option<UserRole> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.error = Some("Please enter both email and password".to_string());
            return None;
        }
        self.error = None;
        if self.email.to_lowercase().contains("mentor") {
            Some(UserRole::Mentor)
        } else {
            Some(UserRole::Student)
        }
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Render the auth screen. Returns the chosen role once the user signs in.
pub fn render_auth_screen(ui: &mut Ui, state: &mut AuthState, theme: &AppTheme) -> Option<UserRole> {
    let mut signed_in = None;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new("📖").size(40.0));
        ui.label(
            RichText::new("MentorConnect")
                .size(28.0)
                .strong()
                .color(theme.text_primary),
        );
        ui.label(RichText::new("Sign in to your account").color(theme.text_secondary));
        ui.add_space(20.0);

        card_frame(theme).show(ui, |ui| {
            ui.set_width(360.0);

            ui.label(RichText::new("Email Address").size(12.0).color(theme.text_primary));
            let email = ui.add(
                TextEdit::singleline(&mut state.email)
                    .hint_text("you@example.com")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(8.0);

            ui.label(RichText::new("Password").size(12.0).color(theme.text_primary));
            let password = ui.add(
                TextEdit::singleline(&mut state.password)
                    .password(true)
                    .hint_text("••••••••")
                    .desired_width(f32::INFINITY),
            );
            if email.changed() || password.changed() {
                state.clear_error();
            }

            if let Some(error) = &state.error {
                ui.add_space(6.0);
                ui.colored_label(theme.danger, error);
            }

            ui.add_space(12.0);
            let sign_in = egui::Button::new(
                RichText::new("Sign In").color(egui::Color32::WHITE),
            )
            .fill(theme.accent)
            .min_size(Vec2::new(ui.available_width(), 32.0));
            let submitted = ui.add(sign_in).clicked()
                || (password.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)));
            if submitted {
                signed_in = state.submit();
            }

            ui.add_space(12.0);
            ui.separator();
            ui.label(
                RichText::new("Or continue with")
                    .size(11.0)
                    .color(theme.text_secondary),
            );
            ui.add_space(6.0);

            if ui
                .add(egui::Button::new("🌐 Sign in with Google").min_size(Vec2::new(
                    ui.available_width(),
                    28.0,
                )))
                .clicked()
            {
                signed_in = Some(UserRole::Student);
            }
            if ui
                .add(egui::Button::new("📱 Sign in with Mobile OTP").min_size(Vec2::new(
                    ui.available_width(),
                    28.0,
                )))
                .clicked()
            {
                signed_in = Some(UserRole::Student);
            }

            ui.add_space(12.0);
            egui::Frame::none()
                .fill(theme.accent_soft)
                .rounding(6.0)
                .inner_margin(egui::Margin::same(8.0))
                .show(ui, |ui| {
                    ui.label(
                        RichText::new(
                            "Demo: use \"student@email.com\" for the Student view or \
                             \"mentor@email.com\" for the Mentor view. Any password works.",
                        )
                        .size(11.0)
                        .color(theme.text_primary),
                    );
                });
        });

        ui.add_space(12.0);
        ui.label(
            RichText::new("Don't have an account? Sign up")
                .size(12.0)
                .color(theme.text_secondary),
        );
    });

    signed_in
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_requires_both_fields() {
        let mut state = AuthState::default();
        assert!(state.submit().is_none());

        state.email = "student@email.com".to_string();
        assert!(state.submit().is_none());

        state.password = "hunter2".to_string();
        assert_eq!(state.submit(), Some(UserRole::Student));
    }

    #[test]
    fn test_mentor_email_routes_to_mentor_portal() {
        let mut state = AuthState {
            email: "mentor@email.com".to_string(),
            password: "x".to_string(),
            ..Default::default()
        };
        assert_eq!(state.submit(), Some(UserRole::Mentor));

        state.email = "THE.MENTOR@corp.io".to_string();
        assert_eq!(state.submit(), Some(UserRole::Mentor));
    }
}
