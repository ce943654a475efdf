//! In-memory service fakes for handler tests.

use std::sync::{Arc, Mutex};

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::common::BotEnv;
use crate::prefs::{Algorithm, SessionId};
use crate::services::{Extraction, GroupPost, GroupService, KeywordService};

pub const ALICE: SessionId = SessionId::User(teloxide::types::UserId(1));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractCall {
    pub text: String,
    pub algorithm: Algorithm,
    pub n_keywords: u64,
}

/// Answers every request with the words of the text, or with a canned
/// response if one is set.
#[derive(Default)]
pub struct FakeKeywords {
    pub calls: Mutex<Vec<ExtractCall>>,
    pub response: Option<Extraction>,
    pub fail: bool,
}

#[async_trait]
impl KeywordService for FakeKeywords {
    async fn extract(
        &self,
        text: &str,
        algorithm: Algorithm,
        n_keywords: u64,
    ) -> Result<Extraction> {
        self.calls.lock().unwrap().push(ExtractCall {
            text: text.to_string(),
            algorithm,
            n_keywords,
        });
        if self.fail {
            bail!("connection refused");
        }
        Ok(self.response.clone().unwrap_or_else(|| {
            Extraction::Keywords(
                text.split_whitespace().map(str::to_string).collect(),
            )
        }))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupCall {
    Refresh(String),
    FetchPosts(String),
}

#[derive(Default)]
pub struct FakeGroups {
    pub calls: Mutex<Vec<GroupCall>>,
    pub posts: Vec<GroupPost>,
    pub fail: bool,
}

#[async_trait]
impl GroupService for FakeGroups {
    async fn refresh(&self, group_name: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push(GroupCall::Refresh(group_name.to_string()));
        if self.fail {
            bail!("connection refused");
        }
        Ok(())
    }

    async fn fetch_posts(&self, group_name: &str) -> Result<Vec<GroupPost>> {
        self.calls
            .lock()
            .unwrap()
            .push(GroupCall::FetchPosts(group_name.to_string()));
        Ok(self.posts.clone())
    }
}

pub struct Harness {
    pub env: BotEnv,
    pub keywords: Arc<FakeKeywords>,
    pub groups: Arc<FakeGroups>,
}

impl Harness {
    pub fn new(keywords: FakeKeywords, groups: FakeGroups) -> Self {
        let keywords = Arc::new(keywords);
        let groups = Arc::new(groups);
        let env = BotEnv::new(
            Arc::clone(&keywords) as Arc<dyn KeywordService>,
            Arc::clone(&groups) as Arc<dyn GroupService>,
        );
        Self { env, keywords, groups }
    }

    pub fn extract_calls(&self) -> Vec<ExtractCall> {
        self.keywords.calls.lock().unwrap().clone()
    }

    pub fn group_calls(&self) -> Vec<GroupCall> {
        self.groups.calls.lock().unwrap().clone()
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(FakeKeywords::default(), FakeGroups::default())
    }
}

pub fn post(id: i64, from_id: i64, text: &str) -> GroupPost {
    GroupPost { id, from_id, text: text.to_string() }
}
