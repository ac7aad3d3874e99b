//! Routes DM messages and reactions to running registration dialogues.
//!
//! Each dialogue runs in its own task and reads from a bounded feed. The router keeps one
//! feed per member; starting a new dialogue replaces the member's feed, which closes the
//! old one and makes the old dialogue end silently.

use serenity::all::UserId;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};
use tokio::sync::{mpsc, RwLock};

use crate::service::{
    context::BotContext,
    registration::{run_dialogue, DialogueEvent, RegistrationDialogue},
};

const FEED_CAPACITY: usize = 16;

struct Feed {
    generation: u64,
    sender: mpsc::Sender<DialogueEvent>,
}

/// Per-member dialogue feeds.
#[derive(Clone, Default)]
pub struct DialogueRouter {
    feeds: Arc<RwLock<HashMap<UserId, Feed>>>,
    generation: Arc<AtomicU64>,
}

impl DialogueRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `dialogue` on its own task, replacing any dialogue the member already has.
    pub async fn spawn(&self, ctx: BotContext, dialogue: RegistrationDialogue) {
        let author = dialogue.author();
        let (generation, events) = self.open(author).await;

        let router = self.clone();
        tokio::spawn(async move {
            match run_dialogue(&ctx, dialogue, events).await {
                Ok(state) => {
                    tracing::debug!("Registration dialogue for {} ended: {:?}", author, state)
                }
                Err(e) => {
                    tracing::error!("Registration dialogue for {} failed: {}", author, e)
                }
            }
            router.close(author, generation).await;
        });
    }

    /// Forwards an event to `user`'s dialogue.
    ///
    /// # Returns
    /// - `true` - The event was queued
    /// - `false` - The member has no running dialogue
    pub async fn dispatch(&self, user: UserId, event: DialogueEvent) -> bool {
        let sender = {
            let feeds = self.feeds.read().await;
            match feeds.get(&user) {
                Some(feed) => feed.sender.clone(),
                None => return false,
            }
        };

        sender.send(event).await.is_ok()
    }

    /// Creates a feed for `user`, dropping the previous one.
    async fn open(&self, user: UserId) -> (u64, mpsc::Receiver<DialogueEvent>) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst);
        let (sender, events) = mpsc::channel(FEED_CAPACITY);

        let replaced = self
            .feeds
            .write()
            .await
            .insert(user, Feed { generation, sender });
        if replaced.is_some() {
            tracing::debug!("Replaced running registration dialogue for {}", user);
        }

        (generation, events)
    }

    /// Removes `user`'s feed if it still belongs to `generation`.
    async fn close(&self, user: UserId, generation: u64) {
        let mut feeds = self.feeds.write().await;
        if feeds
            .get(&user)
            .is_some_and(|feed| feed.generation == generation)
        {
            feeds.remove(&user);
        }
    }
}
