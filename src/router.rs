//! Command table: maps every incoming event to its handler.

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::Me;
use teloxide::utils::command::BotCommands;

use crate::common::{BotEnv, Outbox, UpdateHandler};
use crate::modules::{basic, groups, keywords, preferences};
use crate::prefs::SessionId;
use crate::utils::ChatOutbox;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "snake_case")]
pub enum Command {
    #[command(description = "how to use the bot.")]
    Start,

    #[command(description = "choose keyword extraction algorithm.")]
    KeywordsAlgorithm(String),

    #[command(rename = "n_keywords", description = "set number of keywords.")]
    NKeywords(String),

    #[command(description = "list available algorithms.")]
    ListAlgorithms,

    #[command(description = "summarize a vk.com group.")]
    SummarizeGroup(String),
}

/// A single unit of work for the router.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Command(Command),
    /// Any text that is not a known command.
    Text(String),
}

impl Event {
    pub fn parse(text: &str, bot_username: &str) -> Self {
        Command::parse(text, bot_username)
            .map_or_else(|_| Self::Text(text.to_string()), Self::Command)
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::Command(Command::Start) => "start",
            Self::Command(Command::KeywordsAlgorithm(_)) => "keywords_algorithm",
            Self::Command(Command::NKeywords(_)) => "n_keywords",
            Self::Command(Command::ListAlgorithms) => "list_algorithms",
            Self::Command(Command::SummarizeGroup(_)) => "summarize_group",
            Self::Text(_) => "text",
        }
    }
}

/// Only the first word of the command arguments is used.
fn first_arg(args: &str) -> Option<&str> {
    args.split_whitespace().next()
}

pub async fn dispatch(
    env: &BotEnv,
    session: SessionId,
    event: Event,
    out: &mut dyn Outbox,
) -> Result<()> {
    log::debug!("{session:?}: {event:?}");
    metrics::increment_counter!("kwbot_events_total", "event" => event.name());

    let prefs = env.prefs.get(session);
    match event {
        Event::Command(Command::Start) => basic::start(out).await,
        Event::Command(Command::KeywordsAlgorithm(args)) => {
            preferences::set_algorithm(env, session, first_arg(&args), out)
                .await
        }
        Event::Command(Command::NKeywords(args)) => {
            preferences::set_n_keywords(env, session, first_arg(&args), out)
                .await
        }
        Event::Command(Command::ListAlgorithms) => {
            basic::list_algorithms(out).await
        }
        Event::Command(Command::SummarizeGroup(args)) => {
            groups::summarize_group(env, &prefs, first_arg(&args), out).await
        }
        Event::Text(text) => {
            keywords::get_keywords(env, &prefs, &text, out).await
        }
    }
}

pub fn message_handler() -> UpdateHandler {
    Update::filter_message()
        .filter_map(|msg: Message, me: Me| {
            msg.text().map(|text| Event::parse(text, me.username()))
        })
        .endpoint(handle_event)
}

async fn handle_event(
    bot: Bot,
    env: Arc<BotEnv>,
    msg: Message,
    event: Event,
) -> Result<()> {
    let session = msg
        .from
        .as_ref()
        .map_or(SessionId::Chat(msg.chat.id), |u| SessionId::User(u.id));
    let mut out = ChatOutbox::new(bot, &msg);
    dispatch(&env, session, event, &mut out).await
}
