//! Document title side effect.
//!
//! Browser-only; native builds compile the call to a no-op so the guard stays
//! exercisable in tests.

/// Application name used as the title prefix and fallback.
pub const APP_NAME: &str = "GasoPay";

/// Set the page title. Requires a browser document; no-op elsewhere.
pub fn set_document_title(title: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title(title);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = title;
    }
}
