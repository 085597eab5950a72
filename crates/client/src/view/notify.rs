//! Transient toast notifications.

use std::time::Duration;

use tracing::warn;

use super::ViewError;
use super::page::{Element, ElementHandle, Page};

/// How long a toast stays on the page.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

pub const ERROR_CLASS: &str =
    "fixed top-4 right-4 bg-red-500 text-white px-6 py-3 rounded-lg shadow-lg z-50";
pub const SUCCESS_CLASS: &str =
    "fixed top-4 right-4 bg-green-500 text-white px-6 py-3 rounded-lg shadow-lg z-50";

/// Show `message` as a red toast for [`TOAST_DURATION`].
///
/// Must be called inside a tokio runtime; removal runs on a spawned task.
///
/// # Errors
///
/// Returns [`ViewError::LockPoisoned`] if the page lock is poisoned.
pub fn show_error(page: &Page, message: &str) -> Result<ElementHandle, ViewError> {
    show_toast(page, ERROR_CLASS, message)
}

/// Show `message` as a green toast for [`TOAST_DURATION`].
///
/// # Errors
///
/// Returns [`ViewError::LockPoisoned`] if the page lock is poisoned.
pub fn show_success(page: &Page, message: &str) -> Result<ElementHandle, ViewError> {
    show_toast(page, SUCCESS_CLASS, message)
}

fn show_toast(page: &Page, class: &str, message: &str) -> Result<ElementHandle, ViewError> {
    let handle = page.append(Element::text(class, message))?;

    let page = page.clone();
    tokio::spawn(async move {
        tokio::time::sleep(TOAST_DURATION).await;
        if let Err(e) = page.remove(handle) {
            warn!(error = %e, "Failed to remove toast");
        }
    });

    Ok(handle)
}
