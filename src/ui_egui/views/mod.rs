// View modules for the two dashboards and the auth screen

pub mod auth_view;
pub mod availability_grid;
pub mod booking_management;
pub mod feedback_cards;
pub mod mentor_dashboard;
pub mod palette;
pub mod session_history;
pub mod student_dashboard;
pub mod student_history;
pub mod widgets;
