//! Blocking browser dialogs (`confirm`, `alert`).
//!
//! Outside the browser `confirm` answers `false` so no destructive action can
//! be triggered during SSR, and `alert` only logs.

/// Ask the user a yes/no question. Returns `false` if the dialog is unavailable.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

/// Show a blocking alert.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(w) = web_sys::window() {
            let _ = w.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::warn!("alert: {message}");
    }
}
