use std::net::SocketAddr;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Config {
    pub telegram: Telegram,
    pub services: Services,
    /// Address to serve Prometheus metrics on. Metrics are not exported if
    /// unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics_addr: Option<SocketAddr>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Telegram {
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Services {
    pub keywords: KeywordService,
    pub groups: GroupService,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct KeywordService {
    pub url: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GroupService {
    pub url: String,
}
