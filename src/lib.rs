//! # gasopay-client
//!
//! Session and route-authorization layer for the GasoPay admin frontend.
//!
//! The crate owns who the current actor is, what role they hold, and which
//! destinations they may enter: a persistent credential store, the in-memory
//! auth session, the `/me` profile refresh, and the navigation guard that
//! consults them. State and decision logic are plain Rust and test natively;
//! browser integration (localStorage, HTTP, document title, redirects) is
//! gated behind the `hydrate` feature.

pub mod net;
pub mod router;
pub mod state;
pub mod storage;
pub mod util;

/// Wire up panic reporting and the `log` facade to the browser console.
/// Call once from the hydrate entry point.
#[cfg(feature = "hydrate")]
pub fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
