//! Page controllers
//!
//! Each page owns its local view state, calls the API client, and reports
//! outcomes as toasts. Errors never escape a page; they become toasts or,
//! for a missing document, a redirect.

mod dashboard;
mod login;
mod review;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use review::{ReviewLoad, ReviewPage};
