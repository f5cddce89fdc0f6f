//! HTML page handlers.

mod admin;
mod login;
mod logout;
mod not_found;
mod privacy;

pub use admin::admin_handler;
pub use login::{login_page_handler, login_submit_handler};
pub use logout::logout_handler;
pub use not_found::not_found_handler;
pub use privacy::privacy_handler;
