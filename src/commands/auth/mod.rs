pub mod login;
pub mod status;

pub use login::login_command;
pub use status::status_command;
