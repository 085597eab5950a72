//! Presentation helpers over an in-memory [`Page`].
//!
//! Nothing here performs I/O; the only shared state is the page itself and
//! the session the navbar reads the cached user from.

mod format;
mod navbar;
mod notify;
mod overlay;
mod page;

use debate_platform_core::Status;
use thiserror::Error;

use crate::session::SessionError;

pub use format::{
    PLACEHOLDER, format_date, format_date_in, format_relative_time, format_relative_time_at,
    parse_timestamp,
};
pub use navbar::{NAVBAR_ID, init_page, navbar_html, render_navbar};
pub use notify::{ERROR_CLASS, SUCCESS_CLASS, TOAST_DURATION, show_error, show_success};
pub use overlay::{OVERLAY_CLASS, OVERLAY_ID, hide_loading, show_loading};
pub use page::{Content, Element, ElementHandle, Page};

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("page lock poisoned: {0}")]
    LockPoisoned(String),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Display label for any wire status string; unknown values echo back.
#[must_use]
pub fn status_text(raw: &str) -> String {
    Status::parse(raw).label().to_string()
}

/// Badge classes for any wire status string.
#[must_use]
pub fn status_color(raw: &str) -> &'static str {
    Status::parse(raw).color_class()
}
