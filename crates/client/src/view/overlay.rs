//! Full-screen loading overlay.

use super::ViewError;
use super::page::{Element, Page};

pub const OVERLAY_ID: &str = "loading-overlay";
pub const OVERLAY_CLASS: &str =
    "fixed inset-0 bg-black bg-opacity-50 flex items-center justify-center z-50";
const SPINNER_HTML: &str = concat!(
    r#"<div class="bg-white rounded-lg p-6">"#,
    r#"<div class="animate-spin rounded-full h-12 w-12 border-b-2 border-blue-500"></div>"#,
    "</div>",
);

/// Show the overlay. At most one exists at a time.
///
/// # Errors
///
/// Returns [`ViewError::LockPoisoned`] if the page lock is poisoned.
pub fn show_loading(page: &Page) -> Result<(), ViewError> {
    if page.element_by_id(OVERLAY_ID)?.is_none() {
        page.append(Element::html(OVERLAY_CLASS, SPINNER_HTML).with_id(OVERLAY_ID))?;
    }
    Ok(())
}

/// Remove the overlay if present.
///
/// # Errors
///
/// Returns [`ViewError::LockPoisoned`] if the page lock is poisoned.
pub fn hide_loading(page: &Page) -> Result<(), ViewError> {
    page.remove_by_id(OVERLAY_ID)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_twice_single_overlay() {
        let page = Page::new();
        show_loading(&page).unwrap();
        show_loading(&page).unwrap();

        let body = page.body().unwrap();
        assert_eq!(body.len(), 1);
        assert_eq!(body[0].id.as_deref(), Some(OVERLAY_ID));
        assert_eq!(body[0].class, OVERLAY_CLASS);
    }

    #[test]
    fn test_hide() {
        let page = Page::new();
        hide_loading(&page).unwrap();

        show_loading(&page).unwrap();
        hide_loading(&page).unwrap();
        assert!(page.element_by_id(OVERLAY_ID).unwrap().is_none());
        hide_loading(&page).unwrap();
    }
}
