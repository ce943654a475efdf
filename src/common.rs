//! Common helpers to be used by various bot modules.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use itertools::Itertools;

use crate::prefs::PreferenceStore;
use crate::services::{GroupService, KeywordService};

/// Wrapper around [`teloxide::dispatching::UpdateHandler`] to be used in this
/// crate.
pub type UpdateHandler = teloxide::dispatching::UpdateHandler<anyhow::Error>;

/// Bot environment: global state shared between all handlers.
pub struct BotEnv {
    pub keywords: Arc<dyn KeywordService>,
    pub groups: Arc<dyn GroupService>,
    pub prefs: PreferenceStore,
}

impl BotEnv {
    pub fn new(
        keywords: Arc<dyn KeywordService>,
        groups: Arc<dyn GroupService>,
    ) -> Self {
        Self { keywords, groups, prefs: PreferenceStore::new() }
    }
}

/// Destination for the replies produced while handling a single event.
/// Replies must be delivered in the order they are sent.
#[async_trait]
pub trait Outbox: Send {
    async fn send(&mut self, text: String) -> Result<()>;
}

#[async_trait]
impl Outbox for Vec<String> {
    async fn send(&mut self, text: String) -> Result<()> {
        self.push(text);
        Ok(())
    }
}

/// Format a list of strings as `['a', 'b']`.
pub fn format_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    format!("[{}]", items.into_iter().map(|i| format!("'{i}'")).join(", "))
}
