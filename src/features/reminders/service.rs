//! Per-conversation reminder tracking
//!
//! Owns the mapping from conversation to its list of scheduled jobs. Lists
//! are absent until the first successful set and removed wholesale on unset.
//! DashMap keeps the read-append-write on set atomic per conversation, so no
//! serialization assumption about the dispatcher is needed.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use chrono::{Local, NaiveTime};
use dashmap::DashMap;
use log::info;
use std::sync::Arc;

use super::scheduler::{until_next_occurrence, ConversationId, DailyScheduler, JobHandle};

/// Outcome of a successful set, for the confirmation reply
pub struct SetConfirmation {
    /// Time until the new reminder first fires
    pub until_first: chrono::Duration,
    /// Active reminder count for the conversation, including the new one
    pub active: usize,
}

/// Tracks every conversation's scheduled reminder jobs
pub struct ReminderService {
    scheduler: Arc<dyn DailyScheduler>,
    jobs: DashMap<ConversationId, Vec<JobHandle>>,
}

impl ReminderService {
    pub fn new(scheduler: Arc<dyn DailyScheduler>) -> Self {
        ReminderService {
            scheduler,
            jobs: DashMap::new(),
        }
    }

    /// Schedule one more daily reminder for the conversation
    ///
    /// Appends to the conversation's job list (creating it if absent);
    /// earlier reminders stay active.
    pub fn set_daily(&self, conversation: ConversationId, time: NaiveTime) -> SetConfirmation {
        let job = self.scheduler.schedule_daily(time, conversation);
        info!(
            "⏰ Scheduled daily job {} for conversation {} at {}",
            job.id(),
            conversation,
            time.format("%H:%M")
        );

        let mut list = self.jobs.entry(conversation).or_default();
        list.push(job);
        let active = list.len();
        drop(list);

        let until_first = until_next_occurrence(time, Local::now().naive_local());
        SetConfirmation { until_first, active }
    }

    /// Cancel every reminder for the conversation
    ///
    /// Returns the number removed, or `None` if the conversation has none
    /// tracked. Each cancellation is requested independently.
    pub fn unset_all(&self, conversation: ConversationId) -> Option<usize> {
        let (_, list) = self.jobs.remove(&conversation)?;
        for job in &list {
            self.scheduler.cancel(job);
        }
        info!(
            "🗑️ Removed {} reminder(s) for conversation {conversation}",
            list.len()
        );
        Some(list.len())
    }

    /// Number of active reminders for the conversation
    pub fn active_count(&self, conversation: ConversationId) -> usize {
        self.jobs
            .get(&conversation)
            .map(|list| list.len())
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockScheduler {
        scheduled: Mutex<Vec<(NaiveTime, ConversationId)>>,
        cancelled: Mutex<Vec<u64>>,
        next_id: AtomicU64,
    }

    impl DailyScheduler for MockScheduler {
        fn schedule_daily(&self, time: NaiveTime, conversation: ConversationId) -> JobHandle {
            self.scheduled.lock().unwrap().push((time, conversation));
            let id = self.next_id.fetch_add(1, Ordering::Relaxed);
            JobHandle::new(id, tokio::spawn(async {}))
        }

        fn cancel(&self, job: &JobHandle) {
            self.cancelled.lock().unwrap().push(job.id());
        }
    }

    fn service() -> (Arc<MockScheduler>, ReminderService) {
        let scheduler = Arc::new(MockScheduler::default());
        let service = ReminderService::new(scheduler.clone());
        (scheduler, service)
    }

    fn tod(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    const CONVO: ConversationId = ConversationId(7);

    #[tokio::test]
    async fn test_set_daily_increments_count() {
        let (_, service) = service();

        for expected in 1..=3 {
            let confirmation = service.set_daily(CONVO, tod(9, 30));
            assert_eq!(confirmation.active, expected);
            assert!(confirmation.until_first.num_seconds() > 0);
        }
        assert_eq!(service.active_count(CONVO), 3);
    }

    #[tokio::test]
    async fn test_set_daily_passes_time_to_scheduler() {
        let (scheduler, service) = service();
        service.set_daily(CONVO, tod(23, 59));

        let scheduled = scheduler.scheduled.lock().unwrap();
        assert_eq!(*scheduled, vec![(tod(23, 59), CONVO)]);
    }

    #[tokio::test]
    async fn test_unset_without_prior_set() {
        let (scheduler, service) = service();

        assert_eq!(service.unset_all(CONVO), None);
        assert_eq!(service.active_count(CONVO), 0);
        assert!(scheduler.cancelled.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unset_cancels_every_job() {
        let (scheduler, service) = service();
        service.set_daily(CONVO, tod(8, 0));
        service.set_daily(CONVO, tod(12, 0));
        service.set_daily(CONVO, tod(20, 0));

        assert_eq!(service.unset_all(CONVO), Some(3));
        assert_eq!(service.active_count(CONVO), 0);
        assert_eq!(scheduler.cancelled.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_unset_twice_reports_nothing_the_second_time() {
        let (_, service) = service();
        service.set_daily(CONVO, tod(8, 0));

        assert_eq!(service.unset_all(CONVO), Some(1));
        assert_eq!(service.unset_all(CONVO), None);
    }

    #[tokio::test]
    async fn test_conversations_are_independent() {
        let (_, service) = service();
        let other = ConversationId(8);

        service.set_daily(CONVO, tod(8, 0));
        service.set_daily(other, tod(8, 0));
        service.set_daily(other, tod(9, 0));

        assert_eq!(service.active_count(CONVO), 1);
        assert_eq!(service.active_count(other), 2);

        assert_eq!(service.unset_all(other), Some(2));
        assert_eq!(service.active_count(CONVO), 1);
    }
}
