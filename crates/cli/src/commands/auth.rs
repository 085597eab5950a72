//! Login, identity and logout.

use debate_platform_client::ApiClient;
use tracing::info;

use super::{CliError, TerminalNavigator, print_json};

/// Print the identity provider URL to open in a browser.
pub async fn login_url(client: &ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    let login = client.auth().login_url().await?;
    print_json(&login)?;
    Ok(())
}

/// Store the session carried by the provider's redirect.
pub async fn login(
    client: &ApiClient,
    callback_url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let user = client.auth().complete_login(callback_url).await?;
    info!(user_id = %user.user_id, nickname = %user.nickname, "Logged in");
    print_json(&user)?;
    Ok(())
}

/// Verify the stored token and print the profile it belongs to.
pub async fn whoami(client: &ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    let auth = client.auth();
    if !auth.require_auth(&TerminalNavigator)? {
        return Err(CliError::NotLoggedIn.into());
    }

    let verification = auth.verify().await?;
    if !verification.valid {
        return Err(CliError::InvalidToken.into());
    }
    print_json(&verification.user)?;
    Ok(())
}

pub fn logout(client: &ApiClient) -> Result<(), Box<dyn std::error::Error>> {
    client.auth().logout(&TerminalNavigator)?;
    info!("Session cleared");
    Ok(())
}
