// Invite link service
// Renders and parses the shareable join-a-group URLs

use log::info;
use thiserror::Error;
use uuid::Uuid;

use crate::models::group::InviteLink;

/// Canonical web prefix for invite links.
const INVITE_WEB_PREFIX: &str = "https://squadplay.app/invite/";
/// Deep-link prefix handled by the installed app.
const INVITE_APP_PREFIX: &str = "squadplay://invite/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InviteError {
    #[error("not a SquadPlay invite link: {0}")]
    UnrecognizedLink(String),
    #[error("malformed invite token: {0}")]
    MalformedToken(String),
}

/// Shareable web URL for an invite.
pub fn invite_url(invite: &InviteLink) -> String {
    format!("{}{}", INVITE_WEB_PREFIX, invite.token)
}

/// App deep link for an invite, opened directly by installed clients.
pub fn invite_deep_link(invite: &InviteLink) -> String {
    format!("{}{}", INVITE_APP_PREFIX, invite.token)
}

/// Extract the invite token from a shared link.
///
/// Accepts both the web URL and the app deep link. Resolving the token to
/// a group happens on the backend, so only the token comes back here.
pub fn parse_invite_url(url: &str) -> Result<Uuid, InviteError> {
    let url = url.trim();
    let token = url
        .strip_prefix(INVITE_WEB_PREFIX)
        .or_else(|| url.strip_prefix(INVITE_APP_PREFIX))
        .ok_or_else(|| InviteError::UnrecognizedLink(url.to_string()))?;

    let token = Uuid::parse_str(token.trim_end_matches('/'))
        .map_err(|_| InviteError::MalformedToken(token.to_string()))?;

    info!("parsed invite token {token}");
    Ok(token)
}
