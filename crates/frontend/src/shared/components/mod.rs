pub mod confirm_dialog;
pub mod toast;
