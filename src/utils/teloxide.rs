use anyhow::Result;
use async_trait::async_trait;
use teloxide::payloads;
use teloxide::prelude::*;
use teloxide::requests::JsonRequest;
use teloxide::types::ThreadId;

use crate::common::Outbox;

pub trait BotExt {
    /// Send a message to a chat, inside a forum topic if `thread_id` is set.
    fn send_to_thread<T: Into<String>>(
        &self,
        chat_id: ChatId,
        thread_id: Option<ThreadId>,
        text: T,
    ) -> JsonRequest<payloads::SendMessage>;
}

impl BotExt for Bot {
    fn send_to_thread<T: Into<String>>(
        &self,
        chat_id: ChatId,
        thread_id: Option<ThreadId>,
        text: T,
    ) -> JsonRequest<payloads::SendMessage> {
        let mut request = self.send_message(chat_id, text);
        request.message_thread_id = thread_id;
        request
    }
}

/// [`Outbox`] that delivers replies to the chat of the incoming message.
pub struct ChatOutbox {
    bot: Bot,
    chat_id: ChatId,
    thread_id: Option<ThreadId>,
}

impl ChatOutbox {
    pub fn new(bot: Bot, msg: &Message) -> Self {
        Self { bot, chat_id: msg.chat.id, thread_id: msg.thread_id }
    }
}

#[async_trait]
impl Outbox for ChatOutbox {
    async fn send(&mut self, text: String) -> Result<()> {
        self.bot.send_to_thread(self.chat_id, self.thread_id, text).await?;
        Ok(())
    }
}
