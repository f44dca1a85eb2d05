//! Notice Board
//!
//! Holds the transient copy notice. Showing a notice (re)starts a hide
//! timer; a newer notice cancels the pending hide of an older one.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use metaprompt::Notice;

#[derive(Default)]
struct NoticeSlot {
    notice: Notice,
    /// Bumped on every `show`; a hide timer only fires for its own generation
    generation: u64,
    hide_task: Option<JoinHandle<()>>,
}

/// Transient notice with a cancellable hide timer
#[derive(Clone)]
pub struct NoticeBoard {
    slot: Arc<Mutex<NoticeSlot>>,
    delay: Duration,
}

impl NoticeBoard {
    pub fn new(delay: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(NoticeSlot::default())),
            delay,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Current notice
    pub async fn current(&self) -> Notice {
        self.slot.lock().await.notice.clone()
    }

    /// Show `notice` now and hide it once the delay has elapsed
    pub async fn show(&self, notice: Notice) {
        let mut slot = self.slot.lock().await;

        if let Some(pending) = slot.hide_task.take() {
            pending.abort();
        }

        slot.generation = slot.generation.wrapping_add(1);
        slot.notice = notice;

        let generation = slot.generation;
        let delay = self.delay;
        let shared = Arc::clone(&self.slot);
        slot.hide_task = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut slot = shared.lock().await;
            if slot.generation == generation {
                slot.notice = std::mem::take(&mut slot.notice).hidden();
                slot.hide_task = None;
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metaprompt::COPIED_NOTICE;

    const DELAY: Duration = Duration::from_secs(2);

    /// Let spawned timer tasks observe the advanced clock
    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_notice_hides_after_delay() {
        let board = NoticeBoard::new(DELAY);
        assert!(!board.current().await.visible);

        board.show(Notice::copied()).await;
        let shown = board.current().await;
        assert!(shown.visible);
        assert_eq!(shown.message, COPIED_NOTICE);

        tokio::time::advance(Duration::from_millis(1999)).await;
        settle().await;
        assert!(board.current().await.visible);

        tokio::time::advance(Duration::from_millis(2)).await;
        settle().await;
        let hidden = board.current().await;
        assert!(!hidden.visible);
        assert_eq!(hidden.message, COPIED_NOTICE);
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_show_resets_timer() {
        let board = NoticeBoard::new(DELAY);

        board.show(Notice::copied()).await;
        tokio::time::advance(Duration::from_millis(1500)).await;
        settle().await;

        board.show(Notice::copied()).await;
        tokio::time::advance(Duration::from_millis(1000)).await;
        settle().await;
        // 2.5s after the first show, 1s after the second
        assert!(board.current().await.visible);

        tokio::time::advance(Duration::from_millis(1001)).await;
        settle().await;
        assert!(!board.current().await.visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_notice_replaces_confirmation() {
        let board = NoticeBoard::new(DELAY);

        board.show(Notice::copied()).await;
        board.show(Notice::error("clipboard unavailable")).await;

        let current = board.current().await;
        assert!(current.visible);
        assert!(current.is_error);
        assert_eq!(current.message, "clipboard unavailable");

        tokio::time::advance(DELAY + Duration::from_millis(1)).await;
        settle().await;
        assert!(!board.current().await.visible);
    }
}
