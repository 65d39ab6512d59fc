pub mod base_commands;
pub mod defaults_cmd;
pub mod form_cmd;
pub mod predict_cmd;
pub mod view_format;
