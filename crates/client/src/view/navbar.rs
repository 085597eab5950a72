//! Site navigation bar.

use askama::Template;
use debate_platform_core::UserProfile;
use tracing::debug;

use super::ViewError;
use super::page::Page;
use crate::http::ApiClient;

/// Container the navbar is rendered into.
pub const NAVBAR_ID: &str = "navbar";

#[derive(Template)]
#[template(path = "navbar.html")]
struct NavbarTemplate<'a> {
    user: Option<&'a UserProfile>,
    login_page: &'a str,
}

/// Navbar markup for `user`, or the anonymous variant linking to
/// `login_page` for `None`.
///
/// # Errors
///
/// Returns [`ViewError::Template`] if rendering fails.
pub fn navbar_html(user: Option<&UserProfile>, login_page: &str) -> Result<String, ViewError> {
    Ok(NavbarTemplate { user, login_page }.render()?)
}

/// Render the navbar for the cached user into the `navbar` container.
///
/// The login link points at the same configured page that logout
/// navigates to. Returns `false` without rendering when the page has no
/// such container.
///
/// # Errors
///
/// Returns an error if the cached user cannot be read or rendering fails.
pub fn render_navbar(page: &Page, client: &ApiClient) -> Result<bool, ViewError> {
    if page.inner_html(NAVBAR_ID)?.is_none() {
        debug!("No navbar container on page");
        return Ok(false);
    }

    let user = client.session().current_user()?;
    let html = navbar_html(user.as_ref(), &client.config().login_page)?;
    page.set_inner_html(NAVBAR_ID, html)
}

/// Common page setup.
///
/// # Errors
///
/// See [`render_navbar`].
pub fn init_page(page: &Page, client: &ApiClient) -> Result<(), ViewError> {
    render_navbar(page, client)?;
    Ok(())
}
