pub mod attendance;
pub mod entry_type;
pub mod retention;
pub mod settings;
pub mod shift_template;
