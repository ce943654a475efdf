//! Keyword summary of a social network group.

use anyhow::Result;
use itertools::Itertools;

use crate::common::{BotEnv, Outbox};
use crate::modules::keywords::extract;
use crate::prefs::Preferences;

const MISSING_GROUP: &str = "Вы забыли передать название группы. \
                             Команда выглядит /summarize_group group_name";

/// Refresh the group, then reply with keywords of all its posts combined,
/// followed by one message per post with the post's own keywords and link.
pub async fn summarize_group(
    env: &BotEnv,
    prefs: &Preferences,
    group_name: Option<&str>,
    out: &mut dyn Outbox,
) -> Result<()> {
    let Some(group_name) = group_name else {
        return out.send(MISSING_GROUP.to_string()).await;
    };

    // Only ordering is guaranteed: posts are fetched after the refresh
    // request returns.
    env.groups.refresh(group_name).await?;
    let posts = env.groups.fetch_posts(group_name).await?;
    log::info!("Summarizing {} posts of group {group_name:?}", posts.len());

    let all_text = posts.iter().map(|p| p.text.as_str()).join("\n");
    out.send(extract(env, prefs, &all_text).await?).await?;

    for post in &posts {
        let keywords = extract(env, prefs, &post.text).await?;
        out.send(format!("{keywords}\n{}", post.link())).await?;
    }

    Ok(())
}
