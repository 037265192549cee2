// Modal dialogs layered over the student dashboard

pub mod booking_flow;
pub mod feedback_form;
pub mod mentor_profile;
