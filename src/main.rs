#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Restriction lints
#![warn(
    clippy::clone_on_ref_ptr,
    clippy::deref_by_slicing,
    clippy::if_then_some_else_none,
    clippy::undocumented_unsafe_blocks,
    clippy::unnecessary_cast,
    clippy::unnecessary_safety_comment
)]
// False positives
#![allow(clippy::needless_pass_by_value)] // for dptree handlers
// Style
#![allow(clippy::items_after_statements)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::redundant_closure_for_method_calls)]
// Style in tests
#![cfg_attr(
    test,
    allow(clippy::iter_on_empty_collections, clippy::iter_on_single_items)
)]

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::sync::{Arc, OnceLock};

use anyhow::{anyhow, Context as _, Result};
use argh::FromArgs;
use metrics_exporter_prometheus::PrometheusBuilder;
use teloxide::dispatching::Dispatcher;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::requests::Requester;
use teloxide::utils::command::BotCommands;
use teloxide::Bot;
use utils::ResultExt as _;

use crate::common::BotEnv;
use crate::prefs::{Algorithm, DEFAULT_N_KEYWORDS};
use crate::services::{HttpGroupService, HttpKeywordService, KeywordService};

mod common;
mod config;
mod metrics;
mod modules;
mod prefs;
mod router;
mod services;
#[cfg(test)]
mod testing;
mod utils;

static VERSION: OnceLock<String> = OnceLock::new();

fn version() -> &'static str {
    VERSION.get().map_or("unknown", String::as_str)
}

/// kwbot
#[derive(FromArgs, PartialEq, Debug)]
struct Args {
    #[argh(option, hidden_help = true, long = "-set-revision")]
    set_revision: Option<String>,

    #[argh(subcommand)]
    subcommand: SubCommand,
}

#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand)]
enum SubCommand {
    Bot(SubCommandBot),
    Extract(SubCommandExtract),
}

/// run the bot
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "bot")]
struct SubCommandBot {
    /// config file
    #[argh(positional)]
    config_file: OsString,
}

/// extract keywords from a text once and print them
#[derive(FromArgs, PartialEq, Debug)]
#[argh(subcommand, name = "extract")]
struct SubCommandExtract {
    /// config file
    #[argh(positional)]
    config_file: OsString,

    /// extraction algorithm (tfidf, textrank, topicrank, yake)
    #[argh(option)]
    algorithm: Option<String>,

    /// number of keywords
    #[argh(option)]
    n_keywords: Option<u64>,

    /// text to extract keywords from
    #[argh(positional)]
    text: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();
    let args: Args = argh::from_env();
    VERSION
        .set(args.set_revision.unwrap_or_else(|| {
            git_version::git_version!(fallback = "unknown").to_string()
        }))
        .ok();
    log::info!("Version {}", version());
    match args.subcommand {
        SubCommand::Bot(c) => run_bot(&c.config_file).await?,
        SubCommand::Extract(c) => run_extract(c).await?,
    }
    Ok(())
}

fn load_config(config_fpath: &OsStr) -> Result<config::Config> {
    let file = File::open(config_fpath).with_context(|| {
        format!("Failed to open config {}", config_fpath.to_string_lossy())
    })?;
    serde_yaml::from_reader(file).context("Failed to parse config")
}

fn http_client() -> Result<reqwest::Client> {
    Ok(reqwest::ClientBuilder::new()
        .user_agent(concat!("kwbot/", env!("CARGO_PKG_VERSION")))
        .build()?)
}

async fn run_bot(config_fpath: &OsStr) -> Result<()> {
    let config = load_config(config_fpath)?;

    if let Some(addr) = config.metrics_addr {
        PrometheusBuilder::new().with_http_listener(addr).install()?;
        log::info!("Serving metrics on {addr}");
    }
    metrics::register_metrics();

    let client = http_client()?;
    let bot_env = Arc::new(BotEnv::new(
        Arc::new(HttpKeywordService::new(
            client.clone(),
            &config.services.keywords.url,
        )),
        Arc::new(HttpGroupService::new(client, &config.services.groups.url)),
    ));

    let bot = Bot::new(&config.telegram.token);
    bot.set_my_commands(router::Command::bot_commands())
        .await
        .log_error("Failed to set bot commands");

    let mut dispatcher = Dispatcher::builder(
        bot,
        dptree::entry()
            .branch(router::message_handler())
            .endpoint(drop_endpoint),
    )
    .dependencies(dptree::deps![bot_env])
    .error_handler(LoggingErrorHandler::with_custom_text(
        "Error handling an event",
    ))
    .build();

    run_signal_handler(dispatcher.shutdown_token().clone());
    dispatcher.dispatch().await;

    Ok(())
}

async fn run_extract(c: SubCommandExtract) -> Result<()> {
    let config = load_config(&c.config_file)?;
    let algorithm = c
        .algorithm
        .as_deref()
        .map(str::parse::<Algorithm>)
        .transpose()
        .map_err(|_| {
            anyhow!(
                "Unknown algorithm, expected one of {}",
                modules::basic::algorithm_list()
            )
        })?
        .unwrap_or_default();

    let service =
        HttpKeywordService::new(http_client()?, &config.services.keywords.url);
    let extraction = service
        .extract(
            &c.text.join(" "),
            algorithm,
            c.n_keywords.unwrap_or(DEFAULT_N_KEYWORDS),
        )
        .await?;
    println!("{}", modules::keywords::render(extraction));
    Ok(())
}

async fn drop_endpoint() -> Result<()> {
    Ok(())
}

fn run_signal_handler(
    bot_shutdown_token: teloxide::dispatching::ShutdownToken,
) {
    tokio::spawn(async move {
        loop {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("Failed to listen for SIGINT: {e}");
                return;
            }
            match bot_shutdown_token.shutdown() {
                #[allow(
                    clippy::redundant_pub_crate,
                    // reason = "https://github.com/rust-lang/rust-clippy/issues/10636"
                )]
                Ok(f) => {
                    log::info!(
                        "^C received, trying to shutdown the dispatcher..."
                    );
                    tokio::select! {
                        () = f => {
                            log::info!("dispatcher is shutdown...");
                        }
                        _ = tokio::signal::ctrl_c() => {
                            log::info!("Got another ^C, exiting immediately");
                            std::process::exit(0);
                        }
                    }
                }
                Err(_) => {
                    log::info!("^C received, the dispatcher isn't running, ignoring the signal");
                }
            }
        }
    });
}
