//! Recurring daily alarm scheduling
//!
//! One tokio task per scheduled job: sleep until the next occurrence of the
//! requested local time-of-day, deliver the alarm, repeat. Cancellation
//! aborts the task, which prevents future fires but never interrupts an
//! in-flight delivery.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime, NaiveTime};
use log::{debug, warn};
use serenity::http::Http;
use serenity::model::id::ChannelId;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::core::messages::ALARM_TEXT;

/// The addressable chat session a user interacts through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConversationId(pub u64);

impl From<ChannelId> for ConversationId {
    fn from(id: ChannelId) -> Self {
        ConversationId(id.0)
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque token representing one active recurring schedule entry
///
/// Dropping a handle does not stop the schedule; only
/// [`DailyScheduler::cancel`] does.
pub struct JobHandle {
    id: u64,
    task: JoinHandle<()>,
}

impl JobHandle {
    pub(crate) fn new(id: u64, task: JoinHandle<()>) -> Self {
        JobHandle { id, task }
    }

    /// Numeric id, for logging only
    pub fn id(&self) -> u64 {
        self.id
    }

    fn abort(&self) {
        self.task.abort();
    }
}

/// Delivers the alarm text to a conversation when a job fires
#[async_trait]
pub trait AlarmSink: Send + Sync {
    async fn deliver(&self, conversation: ConversationId) -> Result<()>;
}

/// Sends alarms as Discord channel messages
pub struct DiscordAlarmSink {
    http: Arc<Http>,
}

impl DiscordAlarmSink {
    pub fn new(http: Arc<Http>) -> Self {
        DiscordAlarmSink { http }
    }
}

#[async_trait]
impl AlarmSink for DiscordAlarmSink {
    async fn deliver(&self, conversation: ConversationId) -> Result<()> {
        ChannelId(conversation.0).say(&self.http, ALARM_TEXT).await?;
        Ok(())
    }
}

/// Recurring-daily scheduling interface
///
/// The narrow seam between command handling and the runtime: register a
/// recurring daily job, or request cancellation of one.
pub trait DailyScheduler: Send + Sync {
    /// Register a job firing every day at `time` on the local clock,
    /// delivering to `conversation`
    fn schedule_daily(&self, time: NaiveTime, conversation: ConversationId) -> JobHandle;

    /// Request cancellation of a job
    ///
    /// Cooperative: prevents future fires only.
    fn cancel(&self, job: &JobHandle);
}

/// Tokio-backed [`DailyScheduler`]
pub struct TokioDailyScheduler {
    sink: Arc<dyn AlarmSink>,
    next_id: AtomicU64,
}

impl TokioDailyScheduler {
    pub fn new(sink: Arc<dyn AlarmSink>) -> Self {
        TokioDailyScheduler {
            sink,
            next_id: AtomicU64::new(1),
        }
    }
}

impl DailyScheduler for TokioDailyScheduler {
    fn schedule_daily(&self, time: NaiveTime, conversation: ConversationId) -> JobHandle {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let sink = Arc::clone(&self.sink);

        let task = tokio::spawn(async move {
            loop {
                let wait = until_next_occurrence(time, Local::now().naive_local());
                debug!(
                    "⏰ Job {id}: next fire for conversation {conversation} in {}s",
                    wait.num_seconds()
                );
                sleep(wait.to_std().unwrap_or_default()).await;

                if let Err(e) = sink.deliver(conversation).await {
                    warn!("⚠️ Job {id}: failed to deliver alarm to {conversation}: {e}");
                }
            }
        });

        JobHandle::new(id, task)
    }

    fn cancel(&self, job: &JobHandle) {
        debug!("🗑️ Cancelling job {}", job.id());
        job.abort();
    }
}

/// Duration until the next occurrence of `target` from `now`
///
/// Takes "today at target"; if that instant is not strictly after `now`, the
/// occurrence is tomorrow. The result is always positive. Display and the
/// scheduler loop both use this.
pub fn until_next_occurrence(target: NaiveTime, now: NaiveDateTime) -> chrono::Duration {
    let candidate = now.date().and_time(target);
    let next = if candidate > now {
        candidate
    } else {
        candidate + chrono::Duration::days(1)
    };
    next - now
}
