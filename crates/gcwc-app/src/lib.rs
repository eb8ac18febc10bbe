//! Page orchestrators for the GCWC client.
//!
//! Each page owns one tagged [`gcwc_core::PageState`] per fetch stage and
//! converts every failure into a single user-facing message; nothing
//! propagates past the page boundary.

pub mod pages;

pub use pages::calculations::CalculationsPage;
pub use pages::login::LoginPage;
pub use pages::profile::ProfilePage;
pub use pages::register::RegisterPage;
