//! Availability tab of the mentor dashboard.
//!
//! Renders the drag-to-select weekly grid next to a sidebar with a month
//! overview, the active bookings and the Save action. Availability blocks,
//! the live drag preview and confirmed bookings are drawn as independent
//! overlays per day column; bookings sit non-interactively above
//! availability, and the current-time cursor is painted last.

use chrono::{Datelike, Local};
use egui::{pos2, vec2, Align2, CursorIcon, FontId, Rect, RichText, Sense, Stroke, Ui};

use crate::models::booking::Booking;
use crate::services::store::DataStore;
use crate::ui_egui::ToastManager;
use crate::ui_egui::grid::{
    cell_at, hour_range_rect, hour_rows, row_count, AvailabilityGrid, GRID_END_HOUR,
    GRID_START_HOUR, HOUR_HEIGHT, TIME_LABEL_WIDTH,
};
use crate::ui_egui::theme::AppTheme;
use crate::ui_egui::views::palette::GridPalette;
use crate::ui_egui::views::widgets::{badge, card_frame, section_heading};
use crate::utils::date;

const SIDEBAR_WIDTH: f32 = 230.0;

/// Render the whole availability tab
pub fn render_availability_tab(
    ui: &mut Ui,
    store: &mut DataStore,
    grid: &mut AvailabilityGrid,
    toasts: &mut ToastManager,
    theme: &AppTheme,
) {
    let mentor_id = grid.mentor_id().to_string();
    let confirmed: Vec<Booking> = store
        .confirmed_bookings_for_mentor(&mentor_id)
        .into_iter()
        .cloned()
        .collect();

    render_instructions(ui, theme);
    ui.add_space(12.0);

    let mut save_requested = false;
    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(SIDEBAR_WIDTH);
            render_month_overview(ui, theme);
            ui.add_space(12.0);
            render_active_bookings(ui, &confirmed, theme);
            ui.add_space(12.0);

            let save_label = if grid.is_dirty() {
                "💾 Save Availability •"
            } else {
                "💾 Save Availability"
            };
            let save = egui::Button::new(RichText::new(save_label).color(egui::Color32::WHITE))
                .fill(theme.accent)
                .min_size(vec2(SIDEBAR_WIDTH, 32.0));
            if ui.add(save).clicked() {
                save_requested = true;
            }
        });

        ui.add_space(12.0);

        ui.vertical(|ui| {
            card_frame(theme).show(ui, |ui| {
                egui::ScrollArea::both()
                    .id_source("availability_grid_scroll")
                    .max_height(520.0)
                    .show(ui, |ui| {
                        render_week_grid(ui, grid, &confirmed, theme);
                    });
            });
        });
    });

    if save_requested {
        store.replace_availability(&mentor_id, grid.blocks().to_vec());
        grid.mark_saved();
        toasts.success("Availability saved successfully!");
    }

    ui.add_space(12.0);
    render_legend(ui, theme);
}

fn render_instructions(ui: &mut Ui, theme: &AppTheme) {
    card_frame(theme).show(ui, |ui| {
        ui.label(
            RichText::new("How to Set Your Availability")
                .strong()
                .color(theme.text_primary),
        );
        ui.add_space(4.0);
        let hint = |ui: &mut Ui, text: &str| {
            ui.label(RichText::new(text).size(12.0).color(theme.text_secondary));
        };
        hint(ui, "• Click and drag on the calendar to create availability blocks");
        hint(ui, "• Hover over blocks to see the delete option");
        hint(ui, "• Blue blocks indicate your available hours");
        hint(ui, "• Green blocks show confirmed bookings");
        hint(ui, "• Don't forget to click Save Availability when done!");
    });
}

fn render_month_overview(ui: &mut Ui, theme: &AppTheme) {
    let today = Local::now().date_naive();
    card_frame(theme).show(ui, |ui| {
        ui.set_width(SIDEBAR_WIDTH - 32.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(today.format("%B %Y").to_string())
                    .strong()
                    .color(theme.text_primary),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new("📅").color(theme.text_secondary));
            });
        });
        ui.add_space(6.0);

        let cell = (SIDEBAR_WIDTH - 32.0) / 7.0 - 2.0;
        egui::Grid::new("month_overview")
            .min_col_width(cell)
            .spacing(vec2(2.0, 2.0))
            .show(ui, |ui| {
                for label in ["S", "M", "T", "W", "T", "F", "S"] {
                    ui.label(RichText::new(label).size(10.0).color(theme.text_secondary));
                }
                ui.end_row();

                let first = today.with_day(1).unwrap_or(today);
                let lead = date::weekday_index(first) as u32;
                let days = date::days_in_month(today);
                let mut column = 0;
                for _ in 0..lead {
                    ui.label("");
                    column += 1;
                }
                for day in 1..=days {
                    let is_today = day == today.day();
                    if is_today {
                        let (rect, _) =
                            ui.allocate_exact_size(vec2(cell, 16.0), Sense::hover());
                        ui.painter()
                            .rect_filled(rect, 4.0, theme.accent);
                        ui.painter().text(
                            rect.center(),
                            Align2::CENTER_CENTER,
                            day.to_string(),
                            FontId::proportional(11.0),
                            egui::Color32::WHITE,
                        );
                    } else {
                        ui.label(
                            RichText::new(day.to_string())
                                .size(11.0)
                                .color(theme.text_primary),
                        );
                    }
                    column += 1;
                    if column == 7 {
                        ui.end_row();
                        column = 0;
                    }
                }
            });
    });
}

fn render_active_bookings(ui: &mut Ui, confirmed: &[Booking], theme: &AppTheme) {
    card_frame(theme).show(ui, |ui| {
        ui.set_width(SIDEBAR_WIDTH - 32.0);
        section_heading(ui, "Active Bookings", theme);
        if confirmed.is_empty() {
            ui.label(RichText::new("No bookings yet").color(theme.text_secondary));
            return;
        }
        for booking in confirmed.iter().take(3) {
            ui.label(
                RichText::new(&booking.student_name)
                    .strong()
                    .color(theme.text_primary),
            );
            ui.label(
                RichText::new(format!(
                    "{} • {}",
                    date::short_date(booking.date),
                    booking.start_time
                ))
                .size(11.0)
                .color(theme.text_secondary),
            );
            badge(ui, "Confirmed", theme.success, theme.success_soft);
            ui.add_space(6.0);
        }
    });
}

/// Paint the week grid and run the drag/delete interactions against it
fn render_week_grid(
    ui: &mut Ui,
    grid: &mut AvailabilityGrid,
    confirmed: &[Booking],
    theme: &AppTheme,
) {
    let palette = GridPalette::from_theme(theme);
    let week = date::week_starting_sunday(Local::now().date_naive());

    let available = ui.available_width().max(TIME_LABEL_WIDTH + 7.0 * 80.0);
    let col_width = ((available - TIME_LABEL_WIDTH) / 7.0).floor();

    render_day_headers(ui, &week, col_width, theme);

    let body_size = vec2(
        TIME_LABEL_WIDTH + col_width * 7.0,
        row_count() as f32 * HOUR_HEIGHT,
    );
    let (body_rect, response) = ui.allocate_exact_size(body_size, Sense::click_and_drag());
    // Origin of the day-columns area, right of the time gutter
    let origin = pos2(body_rect.left() + TIME_LABEL_WIDTH, body_rect.top());
    let painter = ui.painter_at(body_rect);

    painter.rect_filled(body_rect, 0.0, palette.grid_bg);

    // Hour rows: label in the gutter plus a horizontal rule
    for (row, hour) in hour_rows().enumerate() {
        let y = body_rect.top() + row as f32 * HOUR_HEIGHT;
        painter.text(
            pos2(body_rect.left() + TIME_LABEL_WIDTH - 8.0, y + 2.0),
            Align2::RIGHT_TOP,
            date::hour_label(hour),
            FontId::proportional(11.0),
            palette.label_text,
        );
        painter.line_segment(
            [pos2(origin.x, y), pos2(body_rect.right(), y)],
            Stroke::new(1.0, palette.hour_line),
        );
    }

    // Day column separators
    for day in 0..=7 {
        let x = origin.x + day as f32 * col_width;
        painter.line_segment(
            [pos2(x, body_rect.top()), pos2(x, body_rect.bottom())],
            Stroke::new(1.0, palette.column_line),
        );
    }

    // Pointer-to-cell mapping for hover and drag
    let pointer_cell = response
        .hover_pos()
        .or_else(|| response.interact_pointer_pos())
        .and_then(|pos| cell_at(pos - origin, col_width));

    if let Some(cell) = pointer_cell {
        let cell_rect = hour_range_rect(origin, col_width, cell.day, cell.hour, cell.hour + 1);
        painter.rect_filled(cell_rect, 0.0, palette.hover_overlay);
        ui.ctx().set_cursor_icon(CursorIcon::Crosshair);
    }

    if response.drag_started() {
        if let Some(cell) = pointer_cell {
            grid.begin_drag(cell.day, cell.hour);
        }
    }
    if response.dragged() {
        match pointer_cell {
            Some(cell) => grid.update_drag(cell.day, cell.hour),
            // Pointer wandered off the grid: the session is discarded
            None => grid.cancel_drag(),
        }
    }
    if response.drag_stopped() {
        grid.end_drag();
    }

    // Availability blocks with their hover delete button
    let mut delete_request: Option<String> = None;
    for block in grid.blocks() {
        let rect = hour_range_rect(origin, col_width, block.day, block.start_hour, block.end_hour)
            .shrink2(vec2(3.0, 1.0));
        painter.rect(
            rect,
            6.0,
            palette.availability_fill,
            Stroke::new(2.0, palette.availability_border),
        );
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "Available",
            FontId::proportional(11.0),
            palette.availability_text,
        );

        let hovered = response
            .hover_pos()
            .is_some_and(|pos| rect.contains(pos));
        if hovered {
            let button_rect = Rect::from_min_size(
                pos2(rect.right() - 20.0, rect.top() + 4.0),
                vec2(16.0, 16.0),
            );
            let button = ui.interact(
                button_rect,
                ui.id().with(("delete_block", &block.id)),
                Sense::click(),
            );
            painter.rect_filled(button_rect, 3.0, theme.danger);
            painter.text(
                button_rect.center(),
                Align2::CENTER_CENTER,
                "🗑",
                FontId::proportional(10.0),
                egui::Color32::WHITE,
            );
            if button.clicked() {
                delete_request = Some(block.id.clone());
            }
        }
    }
    if let Some(id) = delete_request {
        grid.delete_block(&id);
    }

    // Live drag preview, dashed
    if let Some(preview) = grid.drag_preview() {
        let rect = hour_range_rect(
            origin,
            col_width,
            preview.day,
            preview.start_hour,
            preview.end_hour,
        )
        .shrink2(vec2(3.0, 1.0));
        painter.rect_filled(rect, 6.0, palette.preview_fill);
        dashed_rect(&painter, rect, Stroke::new(2.0, palette.preview_border));
    }

    // Confirmed bookings, drawn non-interactively above availability
    for booking in confirmed {
        let (Some(start), Some(end)) = (booking.start_hour(), booking.end_hour()) else {
            continue;
        };
        if end <= GRID_START_HOUR || start >= GRID_END_HOUR {
            continue;
        }
        let start = start.max(GRID_START_HOUR);
        let end = end.min(GRID_END_HOUR);
        let rect = hour_range_rect(
            origin,
            col_width,
            booking.weekday_index(),
            start,
            end,
        )
        .shrink2(vec2(3.0, 1.0));
        painter.rect(
            rect,
            6.0,
            palette.booking_fill,
            Stroke::new(2.0, palette.booking_border),
        );
        painter.text(
            pos2(rect.left() + 6.0, rect.top() + 4.0),
            Align2::LEFT_TOP,
            &booking.student_name,
            FontId::proportional(11.0),
            palette.booking_text,
        );
        painter.text(
            pos2(rect.left() + 6.0, rect.top() + 18.0),
            Align2::LEFT_TOP,
            &booking.start_time,
            FontId::proportional(10.0),
            palette.booking_text,
        );
    }

    // Current time cursor, recomputed once a minute while the grid is shown
    if let Some(offset) = AvailabilityGrid::current_time_offset(Local::now().time()) {
        let y = body_rect.top() + offset;
        painter.circle_filled(pos2(origin.x - 4.0, y), 4.0, palette.time_cursor);
        painter.line_segment(
            [pos2(origin.x, y), pos2(body_rect.right(), y)],
            Stroke::new(2.0, palette.time_cursor),
        );
    }
    ui.ctx()
        .request_repaint_after(std::time::Duration::from_secs(60));
}

fn render_day_headers(ui: &mut Ui, week: &[chrono::NaiveDate], col_width: f32, theme: &AppTheme) {
    let today = Local::now().date_naive();
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.allocate_exact_size(vec2(TIME_LABEL_WIDTH, 30.0), Sense::hover());
        for (index, day) in week.iter().enumerate() {
            let (rect, _) = ui.allocate_exact_size(vec2(col_width, 30.0), Sense::hover());
            let name_color = if *day == today {
                theme.accent
            } else {
                theme.text_primary
            };
            ui.painter().text(
                pos2(rect.center().x, rect.top() + 2.0),
                Align2::CENTER_TOP,
                date::DAY_NAMES_SHORT[index],
                FontId::proportional(12.0),
                name_color,
            );
            ui.painter().text(
                pos2(rect.center().x, rect.top() + 16.0),
                Align2::CENTER_TOP,
                day.day().to_string(),
                FontId::proportional(10.0),
                theme.text_secondary,
            );
        }
    });
}

fn render_legend(ui: &mut Ui, theme: &AppTheme) {
    let palette = GridPalette::from_theme(theme);
    card_frame(theme).show(ui, |ui| {
        ui.horizontal(|ui| {
            let swatch = |ui: &mut Ui, fill: egui::Color32, border: egui::Color32| {
                let (rect, _) = ui.allocate_exact_size(vec2(14.0, 14.0), Sense::hover());
                ui.painter().rect(rect, 3.0, fill, Stroke::new(2.0, border));
            };
            swatch(ui, palette.availability_fill, palette.availability_border);
            ui.label(RichText::new("Your Availability").color(theme.text_secondary));
            ui.add_space(16.0);
            swatch(ui, palette.booking_fill, palette.booking_border);
            ui.label(RichText::new("Confirmed Booking").color(theme.text_secondary));
            ui.add_space(16.0);
            let (rect, _) = ui.allocate_exact_size(vec2(14.0, 14.0), Sense::hover());
            ui.painter().line_segment(
                [
                    pos2(rect.left(), rect.center().y),
                    pos2(rect.right(), rect.center().y),
                ],
                Stroke::new(2.0, palette.time_cursor),
            );
            ui.label(RichText::new("Current Time").color(theme.text_secondary));
        });
    });
}

fn dashed_rect(painter: &egui::Painter, rect: Rect, stroke: Stroke) {
    let corners = [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
        rect.left_top(),
    ];
    for pair in corners.windows(2) {
        painter.extend(egui::Shape::dashed_line(pair, stroke, 6.0, 4.0));
    }
}
