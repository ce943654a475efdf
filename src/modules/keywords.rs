//! Ad-hoc keyword extraction for arbitrary text messages.

use anyhow::Result;

use crate::common::{format_list, BotEnv, Outbox};
use crate::prefs::Preferences;
use crate::services::Extraction;

/// Render an extraction result as a reply. Service-side errors are relayed
/// verbatim.
pub fn render(extraction: Extraction) -> String {
    match extraction {
        Extraction::Keywords(keywords) => format_list(keywords),
        Extraction::Error(error) => error,
    }
}

/// Extract keywords from `text` using the session's preferences and render
/// the result.
pub async fn extract(
    env: &BotEnv,
    prefs: &Preferences,
    text: &str,
) -> Result<String> {
    let extraction = env
        .keywords
        .extract(text, prefs.algorithm(), prefs.n_keywords())
        .await?;
    Ok(render(extraction))
}

pub async fn get_keywords(
    env: &BotEnv,
    prefs: &Preferences,
    text: &str,
    out: &mut dyn Outbox,
) -> Result<()> {
    let reply = extract(env, prefs, text).await?;
    out.send(reply).await
}
