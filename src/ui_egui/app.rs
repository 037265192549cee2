pub mod toast;

use self::toast::ToastManager;
use crate::models::user::UserRole;
use crate::services::config::AppConfig;
use crate::services::store::DataStore;
use crate::ui_egui::theme::AppTheme;
use crate::ui_egui::views::auth_view::{render_auth_screen, AuthState};
use crate::ui_egui::views::mentor_dashboard::{render_mentor_dashboard, MentorState};
use crate::ui_egui::views::student_dashboard::{
    render_modals, render_student_dashboard, StudentScreen, StudentState,
};
use crate::ui_egui::views::student_history::render_student_history;
use egui::RichText;

/// Demo-mode role change requested from the switcher panel
enum RoleChange {
    SignOut,
    SwitchTo(UserRole),
}

pub struct MentorConnectApp {
    store: DataStore,
    theme: AppTheme,
    /// `None` while the auth screen is showing
    role: Option<UserRole>,
    auth: AuthState,
    student: StudentState,
    /// Built fresh each time the mentor portal is entered
    mentor: Option<MentorState>,
    toasts: ToastManager,
}

impl MentorConnectApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> anyhow::Result<Self> {
        let theme = AppTheme::from_preference(config.theme);
        theme.apply(&cc.egui_ctx);

        let store = DataStore::seeded()?;

        Ok(Self {
            store,
            theme,
            role: None,
            auth: AuthState::default(),
            student: StudentState::default(),
            mentor: None,
            toasts: ToastManager::new(),
        })
    }

    fn sign_in(&mut self, role: UserRole) {
        log::info!("Signed in as {}", role.label());
        if role == UserRole::Mentor {
            self.mentor = Some(MentorState::new(&self.store));
        }
        self.role = Some(role);
    }

    fn apply_role_change(&mut self, change: RoleChange) {
        match change {
            RoleChange::SignOut => {
                log::info!("Signed out");
                self.role = None;
                self.mentor = None;
                self.student = StudentState::default();
                self.auth = AuthState::default();
            }
            RoleChange::SwitchTo(role) => {
                if self.role != Some(role) {
                    self.sign_in(role);
                }
            }
        }
    }

    /// Demo role switcher pinned to the bottom-right corner
    fn render_role_switcher(&self, ctx: &egui::Context) -> Option<RoleChange> {
        let mut change = None;
        egui::Area::new(egui::Id::new("role_switcher"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-16.0, -16.0))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(self.theme.card_background)
                    .stroke(egui::Stroke::new(1.0, self.theme.border))
                    .rounding(egui::Rounding::same(10.0))
                    .inner_margin(egui::Margin::same(10.0))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new("Demo Mode")
                                .size(11.0)
                                .color(self.theme.text_secondary),
                        );
                        ui.horizontal(|ui| {
                            let student = ui.selectable_label(
                                self.role == Some(UserRole::Student),
                                "🎓 Student",
                            );
                            if student.clicked() {
                                change = Some(RoleChange::SwitchTo(UserRole::Student));
                            }
                            let mentor = ui.selectable_label(
                                self.role == Some(UserRole::Mentor),
                                "👥 Mentor",
                            );
                            if mentor.clicked() {
                                change = Some(RoleChange::SwitchTo(UserRole::Mentor));
                            }
                        });
                        if ui
                            .add(
                                egui::Button::new(RichText::new("Sign Out").size(11.0))
                                    .frame(false),
                            )
                            .clicked()
                        {
                            change = Some(RoleChange::SignOut);
                        }
                    });
            });
        change
    }
}

impl eframe::App for MentorConnectApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let panel_frame = egui::Frame::none()
            .fill(self.theme.app_background)
            .inner_margin(egui::Margin::same(16.0));

        let mut signed_in: Option<UserRole> = None;
        egui::CentralPanel::default()
            .frame(panel_frame)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| match self.role {
                        None => {
                            signed_in = render_auth_screen(ui, &mut self.auth, &self.theme);
                        }
                        Some(UserRole::Student) => match self.student.screen {
                            StudentScreen::Dashboard => render_student_dashboard(
                                ctx,
                                ui,
                                &mut self.student,
                                &mut self.store,
                                &mut self.toasts,
                                &self.theme,
                            ),
                            StudentScreen::History => {
                                render_student_history(
                                    ui,
                                    &mut self.student,
                                    &self.store,
                                    &self.theme,
                                );
                                render_modals(
                                    ctx,
                                    &mut self.student,
                                    &mut self.store,
                                    &mut self.toasts,
                                    &self.theme,
                                );
                            }
                        },
                        Some(UserRole::Mentor) => {
                            if let Some(mentor) = self.mentor.as_mut() {
                                render_mentor_dashboard(
                                    ui,
                                    mentor,
                                    &mut self.store,
                                    &mut self.toasts,
                                    &self.theme,
                                );
                            }
                        }
                    });
            });

        if let Some(role) = signed_in {
            self.sign_in(role);
        }

        if self.role.is_some() {
            if let Some(change) = self.render_role_switcher(ctx) {
                self.apply_role_change(change);
            }
        }

        self.toasts.render(ctx, self.theme.is_dark);
    }
}
