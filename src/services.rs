//! Clients for the keyword extraction and group post services.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::prefs::Algorithm;

/// Outcome of a keyword extraction request. The service reports bad input in
/// the payload rather than via HTTP status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Extraction {
    Keywords(Vec<String>),
    Error(String),
}

#[derive(Serialize, Debug)]
struct KeywordsRequest<'a> {
    text: &'a str,
    algorithm: Algorithm,
    n_keywords: u64,
}

#[derive(Deserialize, Debug)]
struct KeywordsResponse {
    #[serde(default)]
    keywords: Option<Vec<String>>,
    #[serde(default)]
    error: Option<String>,
}

impl KeywordsResponse {
    fn into_extraction(self) -> Result<Extraction> {
        match self {
            Self { keywords: Some(keywords), .. } => {
                Ok(Extraction::Keywords(keywords))
            }
            Self { error: Some(error), .. } => Ok(Extraction::Error(error)),
            _ => Err(anyhow!(
                "keyword service returned neither keywords nor error"
            )),
        }
    }
}

#[derive(Serialize, Debug)]
struct GroupRequest<'a> {
    group_name: &'a str,
}

/// A post of a social network group, as served by the group service.
#[derive(Clone, Deserialize, Debug, PartialEq, Eq)]
pub struct GroupPost {
    pub id: i64,
    /// Negative for posts made on behalf of a group.
    pub from_id: i64,
    pub text: String,
}

impl GroupPost {
    pub fn link(&self) -> String {
        post_link(self.from_id.unsigned_abs(), self.id)
    }
}

pub fn post_link(group_id: u64, post_id: i64) -> String {
    format!("https://vk.com/wall-{group_id}_{post_id}")
}

#[async_trait]
pub trait KeywordService: Send + Sync {
    async fn extract(
        &self,
        text: &str,
        algorithm: Algorithm,
        n_keywords: u64,
    ) -> Result<Extraction>;
}

#[async_trait]
pub trait GroupService: Send + Sync {
    /// Ask the service to ingest fresh posts of the group.
    async fn refresh(&self, group_name: &str) -> Result<()>;

    async fn fetch_posts(&self, group_name: &str) -> Result<Vec<GroupPost>>;
}

pub struct HttpKeywordService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpKeywordService {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self { client, base_url: base_url.trim_end_matches('/').to_string() }
    }

    async fn extract_impl(
        &self,
        text: &str,
        algorithm: Algorithm,
        n_keywords: u64,
    ) -> Result<Extraction> {
        let resp = self
            .client
            .post(format!("{}/v0/keywords", self.base_url))
            .json(&KeywordsRequest { text, algorithm, n_keywords })
            .send()
            .await?
            .json::<KeywordsResponse>()
            .await?;
        resp.into_extraction()
    }
}

#[async_trait]
impl KeywordService for HttpKeywordService {
    async fn extract(
        &self,
        text: &str,
        algorithm: Algorithm,
        n_keywords: u64,
    ) -> Result<Extraction> {
        let res = self.extract_impl(text, algorithm, n_keywords).await;
        crate::metrics::update_service("keywords", res.is_ok());
        res
    }
}

pub struct HttpGroupService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGroupService {
    pub fn new(client: reqwest::Client, base_url: &str) -> Self {
        Self { client, base_url: base_url.trim_end_matches('/').to_string() }
    }
}

#[async_trait]
impl GroupService for HttpGroupService {
    async fn refresh(&self, group_name: &str) -> Result<()> {
        let res = self
            .client
            .post(format!("{}/v0/update_group", self.base_url))
            .json(&GroupRequest { group_name })
            .send()
            .await;
        crate::metrics::update_service("groups", res.is_ok());
        res?;
        Ok(())
    }

    async fn fetch_posts(&self, group_name: &str) -> Result<Vec<GroupPost>> {
        // The service expects a JSON body even though this is a GET.
        let res: reqwest::Result<Vec<GroupPost>> = async {
            self.client
                .get(format!("{}/v0/get_posts", self.base_url))
                .json(&GroupRequest { group_name })
                .send()
                .await?
                .json::<Vec<GroupPost>>()
                .await
        }
        .await;
        crate::metrics::update_service("groups", res.is_ok());
        Ok(res?)
    }
}
