//! Bounded notification queue with a single visible slot.
//!
//! Producers call [`NotificationCenter::notify`] and never wait. Messages are
//! shown one at a time in admission order; each one is expired by a one-shot
//! timer armed through an [`ExpiryScheduler`] when it becomes visible. When the
//! backlog is full the oldest *queued* message is dropped, never the one on
//! screen.

mod scheduler;

use std::{
    collections::VecDeque,
    fmt,
    time::{Duration, Instant},
};

use crate::config::NotificationSettings;

pub use scheduler::{ChannelScheduler, ExpiryScheduler};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

/// Identifier of an admitted notification. Never reused by the same center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageState {
    Queued,
    Displaying,
    Expired,
}

#[derive(Debug, Clone)]
pub struct QueuedMessage {
    pub id: NotificationId,
    pub text: String,
    pub level: Level,
    pub duration: Duration,
    pub enqueued_at: Instant,
    pub state: MessageState,
}

/// What the toast component draws for the visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNotification {
    pub text: String,
    pub level: Level,
    /// Messages still waiting behind this one.
    pub backlog: usize,
}

impl RenderedNotification {
    pub fn label(&self) -> String {
        if self.backlog > 0 {
            format!("{} ({} more)", self.text, self.backlog)
        } else {
            self.text.clone()
        }
    }
}

pub struct NotificationCenter {
    pending: VecDeque<QueuedMessage>,
    current: Option<QueuedMessage>,
    capacity: usize,
    next_id: u64,
    settings: NotificationSettings,
    scheduler: Box<dyn ExpiryScheduler>,
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("current", &self.current.as_ref().map(|msg| msg.id))
            .field("pending", &self.pending.len())
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl NotificationCenter {
    pub fn new(settings: NotificationSettings, scheduler: Box<dyn ExpiryScheduler>) -> Self {
        Self {
            pending: VecDeque::new(),
            current: None,
            capacity: settings.effective_capacity(),
            next_id: 0,
            settings,
            scheduler,
        }
    }

    /// Admits a notification. `duration` overrides the level default.
    pub fn notify(&mut self, text: impl Into<String>, level: Level, duration: Option<Duration>) {
        let message = QueuedMessage {
            id: self.allocate_id(),
            text: text.into(),
            level,
            duration: duration.unwrap_or_else(|| self.settings.duration_for(level)),
            enqueued_at: Instant::now(),
            state: MessageState::Queued,
        };

        while self.len() >= self.capacity {
            match self.pending.pop_front() {
                Some(evicted) => {
                    tracing::debug!(id = %evicted.id, "notification backlog full, dropping oldest");
                }
                None => {
                    // Capacity 1 with a message on screen: nothing queued to evict.
                    tracing::debug!(id = %message.id, "notification backlog full, dropping incoming");
                    return;
                }
            }
        }

        tracing::trace!(id = %message.id, level = level.tag(), "notification queued");
        self.pending.push_back(message);

        if self.current.is_none() {
            self.present_next();
        }
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.notify(text, Level::Info, None);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.notify(text, Level::Warning, None);
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.notify(text, Level::Error, None);
    }

    /// Handles a fired timer. Ids that no longer match the visible message
    /// belong to superseded timers and are ignored.
    pub fn expire(&mut self, id: NotificationId) {
        let is_current = self.current.as_ref().is_some_and(|msg| msg.id == id);
        if !is_current {
            tracing::trace!(%id, "ignoring stale expiry");
            return;
        }

        if let Some(mut expired) = self.current.take() {
            expired.state = MessageState::Expired;
            tracing::trace!(id = %expired.id, "notification expired");
        }
        self.present_next();
    }

    /// Expires the visible message right away. Its armed timer becomes stale.
    pub fn dismiss(&mut self) {
        if let Some(id) = self.current.as_ref().map(|msg| msg.id) {
            self.expire(id);
        }
    }

    pub fn render(&self) -> Option<RenderedNotification> {
        self.current.as_ref().map(|msg| RenderedNotification {
            text: msg.text.clone(),
            level: msg.level,
            backlog: self.pending.len(),
        })
    }

    pub fn current(&self) -> Option<&QueuedMessage> {
        self.current.as_ref()
    }

    pub fn pending(&self) -> impl Iterator<Item = &QueuedMessage> {
        self.pending.iter()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Pending plus the visible message.
    pub fn len(&self) -> usize {
        self.pending.len() + usize::from(self.current.is_some())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    fn present_next(&mut self) {
        let Some(mut next) = self.pending.pop_front() else {
            self.current = None;
            return;
        };

        next.state = MessageState::Displaying;
        self.scheduler.schedule(next.id, next.duration);
        self.current = Some(next);
    }

    fn allocate_id(&mut self) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use std::{
        cell::RefCell,
        rc::Rc,
    };

    use super::*;

    /// Records scheduled timers instead of running them.
    #[derive(Debug, Clone, Default)]
    struct RecordingScheduler {
        armed: Rc<RefCell<Vec<(NotificationId, Duration)>>>,
    }

    impl ExpiryScheduler for RecordingScheduler {
        fn schedule(&self, id: NotificationId, after: Duration) {
            self.armed.borrow_mut().push((id, after));
        }
    }

    fn center_with(capacity: usize) -> (NotificationCenter, RecordingScheduler) {
        let scheduler = RecordingScheduler::default();
        let settings = NotificationSettings {
            capacity,
            ..NotificationSettings::default()
        };
        let center = NotificationCenter::new(settings, Box::new(scheduler.clone()));
        (center, scheduler)
    }

    fn current_text(center: &NotificationCenter) -> Option<String> {
        center.current().map(|msg| msg.text.clone())
    }

    fn expire_current(center: &mut NotificationCenter) {
        let id = center.current().map(|msg| msg.id).unwrap();
        center.expire(id);
    }

    #[test]
    fn starts_idle() {
        let (center, _) = center_with(20);
        assert!(center.is_idle());
        assert_eq!(center.len(), 0);
        assert!(center.render().is_none());
    }

    #[test]
    fn notify_when_idle_displays_immediately() {
        let (mut center, scheduler) = center_with(20);
        center.notify("x", Level::Warning, None);

        let current = center.current().unwrap();
        assert_eq!(current.text, "x");
        assert_eq!(current.state, MessageState::Displaying);
        assert_eq!(center.pending_len(), 0);
        assert_eq!(center.render().unwrap().text, "x");
        assert_eq!(
            scheduler.armed.borrow().as_slice(),
            &[(current.id, Duration::from_secs(7))]
        );
    }

    #[test]
    fn presents_in_admission_order() {
        let (mut center, _) = center_with(20);
        for text in ["a", "b", "c", "d"] {
            center.info(text);
        }

        let mut shown = Vec::new();
        while let Some(text) = current_text(&center) {
            shown.push(text);
            expire_current(&mut center);
        }
        assert_eq!(shown, ["a", "b", "c", "d"]);
        assert!(center.is_idle());
    }

    #[test]
    fn queued_messages_stay_queued() {
        let (mut center, _) = center_with(20);
        center.info("a");
        center.info("b");
        center.info("c");
        assert!(center.pending().all(|msg| msg.state == MessageState::Queued));
        assert_eq!(center.pending_len(), 2);
    }

    #[test]
    fn backlog_never_exceeds_capacity() {
        let (mut center, _) = center_with(3);
        for i in 0..50 {
            center.warning(format!("msg {i}"));
            assert!(center.len() <= center.capacity());
            if i % 7 == 0 {
                expire_current(&mut center);
            }
        }
    }

    #[test]
    fn overflow_drops_oldest_pending_not_current() {
        let (mut center, _) = center_with(2);
        center.info("first");
        center.info("second");
        center.info("third");

        assert_eq!(current_text(&center).as_deref(), Some("first"));
        let pending: Vec<_> = center.pending().map(|msg| msg.text.as_str()).collect();
        assert_eq!(pending, ["third"]);

        expire_current(&mut center);
        assert_eq!(current_text(&center).as_deref(), Some("third"));
    }

    #[test]
    fn capacity_one_drops_incoming_while_displaying() {
        let (mut center, _) = center_with(1);
        center.info("shown");
        center.info("dropped");

        assert_eq!(current_text(&center).as_deref(), Some("shown"));
        assert_eq!(center.pending_len(), 0);
    }

    #[test]
    fn stale_expiry_is_ignored() {
        let (mut center, _) = center_with(20);
        center.info("a");
        let stale = center.current().unwrap().id;
        center.info("b");
        center.info("c");
        expire_current(&mut center);

        let before = center.current().unwrap().id;
        center.expire(stale);

        assert_eq!(center.current().unwrap().id, before);
        assert_eq!(current_text(&center).as_deref(), Some("b"));
        assert_eq!(center.pending_len(), 1);
    }

    #[test]
    fn expiry_when_idle_is_ignored() {
        let (mut center, _) = center_with(20);
        center.info("a");
        let id = center.current().unwrap().id;
        center.expire(id);
        center.expire(id);
        assert!(center.is_idle());
    }

    #[test]
    fn expiry_advances_without_idle_gap() {
        let (mut center, scheduler) = center_with(20);
        center.info("a");
        center.error("b");
        center.warning("c");

        expire_current(&mut center);
        let rendered = center.render().unwrap();
        assert_eq!(rendered.text, "b");
        assert_eq!(rendered.level, Level::Error);
        assert_eq!(center.current().unwrap().state, MessageState::Displaying);

        let armed = scheduler.armed.borrow();
        assert_eq!(armed.len(), 2);
        assert_eq!(armed[1], (center.current().unwrap().id, Duration::from_secs(10)));
    }

    #[test]
    fn last_expiry_returns_to_idle() {
        let (mut center, _) = center_with(20);
        center.info("only");
        expire_current(&mut center);
        assert!(center.is_idle());
        assert!(center.render().is_none());
    }

    #[test]
    fn explicit_duration_overrides_level_default() {
        let (mut center, scheduler) = center_with(20);
        center.notify("slow", Level::Info, Some(Duration::from_secs(30)));
        assert_eq!(center.current().unwrap().duration, Duration::from_secs(30));
        assert_eq!(scheduler.armed.borrow()[0].1, Duration::from_secs(30));
    }

    #[test]
    fn dismiss_shows_next_and_old_timer_goes_stale() {
        let (mut center, scheduler) = center_with(20);
        center.info("a");
        center.info("b");
        let first = center.current().unwrap().id;

        center.dismiss();
        assert_eq!(current_text(&center).as_deref(), Some("b"));

        center.expire(first);
        assert_eq!(current_text(&center).as_deref(), Some("b"));
        assert_eq!(scheduler.armed.borrow().len(), 2);
    }

    #[test]
    fn ids_are_unique_across_evictions() {
        let (mut center, _) = center_with(2);
        let mut seen = Vec::new();
        for i in 0..10 {
            center.info(format!("{i}"));
            seen.extend(center.current().map(|msg| msg.id));
            seen.extend(center.pending().map(|msg| msg.id));
            expire_current(&mut center);
        }
        let mut deduped = seen.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 10);
    }

    #[test]
    fn render_counts_backlog() {
        let (mut center, _) = center_with(20);
        center.info("saved");
        assert_eq!(center.render().unwrap().label(), "saved");
        center.info("again");
        center.info("and again");
        assert_eq!(center.render().unwrap().label(), "saved (2 more)");
    }

    #[test]
    fn burst_over_default_capacity_keeps_first_and_newest() {
        let (mut center, _) = center_with(NotificationSettings::default().capacity);
        for i in 1..=25 {
            center.warning(format!("w{i}"));
        }

        assert_eq!(center.len(), 20);
        assert_eq!(current_text(&center).as_deref(), Some("w1"));
        let pending: Vec<_> = center.pending().map(|msg| msg.text.clone()).collect();
        let expected: Vec<_> = (7..=25).map(|i| format!("w{i}")).collect();
        assert_eq!(pending, expected);
    }
}
