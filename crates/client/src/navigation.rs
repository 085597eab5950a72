//! Client-side navigation.

/// Moves the user to another page.
///
/// In a browser this would assign `window.location`; terminal front-ends
/// print the target, tests record it.
pub trait Navigator: Send + Sync {
    fn navigate(&self, location: &str);
}
