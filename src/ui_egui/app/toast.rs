//! Toast notification system for brief feedback messages.
//!
//! Toasts are non-blocking notifications that appear briefly and fade away.
//! They're used for action confirmations like "Availability saved",
//! "Booking accepted", etc.

use egui::{Color32, Context, Pos2, RichText};
use std::time::{Duration, Instant};

/// Types of toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Success message (green)
    Success,
    /// Informational message (blue)
    Info,
    /// Error message (red)
    Error,
}

impl ToastLevel {
    fn icon(&self) -> &'static str {
        match self {
            ToastLevel::Success => "✓",
            ToastLevel::Info => "ℹ",
            ToastLevel::Error => "✗",
        }
    }

    fn background_color(&self, is_dark_theme: bool) -> Color32 {
        if is_dark_theme {
            match self {
                ToastLevel::Success => Color32::from_rgb(30, 70, 40),
                ToastLevel::Info => Color32::from_rgb(30, 50, 80),
                ToastLevel::Error => Color32::from_rgb(80, 30, 30),
            }
        } else {
            match self {
                ToastLevel::Success => Color32::from_rgb(220, 255, 220),
                ToastLevel::Info => Color32::from_rgb(220, 235, 255),
                ToastLevel::Error => Color32::from_rgb(255, 220, 220),
            }
        }
    }

    fn text_color(&self, is_dark_theme: bool) -> Color32 {
        if is_dark_theme {
            match self {
                ToastLevel::Success => Color32::from_rgb(100, 220, 120),
                ToastLevel::Info => Color32::from_rgb(100, 180, 255),
                ToastLevel::Error => Color32::from_rgb(255, 120, 120),
            }
        } else {
            match self {
                ToastLevel::Success => Color32::from_rgb(30, 120, 50),
                ToastLevel::Info => Color32::from_rgb(30, 80, 150),
                ToastLevel::Error => Color32::from_rgb(180, 40, 40),
            }
        }
    }
}

/// A single toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
            duration: Duration::from_secs(3),
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Opacity based on remaining time (for fade out)
    fn opacity(&self) -> f32 {
        let elapsed = self.created_at.elapsed();
        let fade_start = self.duration.saturating_sub(Duration::from_millis(500));

        if elapsed >= self.duration {
            0.0
        } else if elapsed >= fade_start {
            let fade_progress = (self.duration - elapsed).as_secs_f32() / 0.5;
            fade_progress.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

/// Manager for toast notifications
#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Success));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Info));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(message, ToastLevel::Error));
    }

    /// Render all active toasts in the top-right corner
    pub fn render(&mut self, ctx: &Context, is_dark_theme: bool) {
        self.toasts.retain(|t| !t.is_expired());
        if self.toasts.is_empty() {
            return;
        }

        // Request repaint for fade animation
        ctx.request_repaint();

        let screen_rect = ctx.screen_rect();
        let toast_width = 300.0;
        let toast_height = 40.0;
        let margin = 12.0;
        let spacing = 6.0;

        for (i, toast) in self.toasts.iter().enumerate() {
            let opacity = toast.opacity();
            if opacity <= 0.0 {
                continue;
            }

            let y_offset = (i as f32) * (toast_height + spacing);
            let pos = Pos2::new(
                screen_rect.right() - toast_width - margin,
                screen_rect.top() + margin + y_offset,
            );

            egui::Area::new(egui::Id::new(format!("toast_{}", i)))
                .fixed_pos(pos)
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    let bg = toast.level.background_color(is_dark_theme);
                    let text = toast.level.text_color(is_dark_theme);

                    let bg = Color32::from_rgba_unmultiplied(
                        bg.r(),
                        bg.g(),
                        bg.b(),
                        (230.0 * opacity) as u8,
                    );
                    let text = Color32::from_rgba_unmultiplied(
                        text.r(),
                        text.g(),
                        text.b(),
                        (255.0 * opacity) as u8,
                    );

                    egui::Frame::none()
                        .fill(bg)
                        .rounding(6.0)
                        .inner_margin(egui::Margin::symmetric(12.0, 8.0))
                        .stroke(egui::Stroke::new(1.0, text.gamma_multiply(0.3)))
                        .show(ui, |ui| {
                            ui.set_min_width(toast_width - 24.0);
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(toast.level.icon()).color(text).strong());
                                ui.label(RichText::new(&toast.message).color(text));
                            });
                        });
                });
        }
    }
}
