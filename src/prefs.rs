//! Per-session keyword extraction preferences.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use teloxide::types::{ChatId, UserId};

pub const DEFAULT_N_KEYWORDS: u64 = 10;

/// Keyword extraction algorithm supported by the keyword service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Tfidf,
    Textrank,
    Topicrank,
    #[default]
    Yake,
}

impl Algorithm {
    pub const ALL: [Self; 4] =
        [Self::Tfidf, Self::Textrank, Self::Topicrank, Self::Yake];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tfidf => "tfidf",
            Self::Textrank => "textrank",
            Self::Topicrank => "topicrank",
            Self::Yake => "yake",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownAlgorithm;

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or(UnknownAlgorithm)
    }
}

/// Parse a keyword count argument. Negative numbers are taken by absolute
/// value, anything unparsable yields [`DEFAULT_N_KEYWORDS`].
pub fn parse_n_keywords(arg: Option<&str>) -> u64 {
    arg.and_then(|s| s.trim().parse::<i64>().ok())
        .map_or(DEFAULT_N_KEYWORDS, i64::unsigned_abs)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub algorithm: Option<Algorithm>,
    pub n_keywords: Option<u64>,
}

impl Preferences {
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm.unwrap_or_default()
    }

    pub fn n_keywords(&self) -> u64 {
        self.n_keywords.unwrap_or(DEFAULT_N_KEYWORDS)
    }
}

/// Identifies whose preferences are being read or written.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionId {
    User(UserId),
    /// Used for messages without a sender, e.g. anonymous group admins.
    Chat(ChatId),
}

/// In-memory preference storage. Records are created on first write and live
/// until the process exits.
#[derive(Default)]
pub struct PreferenceStore {
    inner: Mutex<HashMap<SessionId, Preferences>>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, Preferences>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self, session: SessionId) -> Preferences {
        self.lock().get(&session).cloned().unwrap_or_default()
    }

    pub fn update(&self, session: SessionId, f: impl FnOnce(&mut Preferences)) {
        f(self.lock().entry(session).or_default());
    }
}
