//! Page Application Service (Use Case)
//!
//! Runs the generate and copy actions against the shared page state.

use std::sync::Arc;

use metaprompt::{ClipboardService, CompletionProvider, DomainError, Notice};

use super::{NoticeBoard, PageState, PromptGenerator};
use crate::models::PageSnapshot;

/// Prefix of the notice shown when copying fails
pub const COPY_FAILED_PREFIX: &str = "✘ 复制失败：";

/// Application service behind the page
#[derive(Clone)]
pub struct PageService {
    generator: Arc<PromptGenerator<dyn CompletionProvider>>,
    clipboard: Arc<dyn ClipboardService>,
    page: Arc<PageState>,
    notice: NoticeBoard,
}

impl PageService {
    pub fn new(
        generator: Arc<PromptGenerator<dyn CompletionProvider>>,
        clipboard: Arc<dyn ClipboardService>,
        notice: NoticeBoard,
    ) -> Self {
        Self {
            generator,
            clipboard,
            page: Arc::new(PageState::new()),
            notice,
        }
    }

    pub fn model_id(&self) -> &str {
        self.generator.model_id()
    }

    /// Current page snapshot
    pub async fn snapshot(&self) -> PageSnapshot {
        PageSnapshot::new(
            self.page.view().await,
            self.notice.current().await,
            self.notice.delay(),
        )
    }

    /// Generate a system prompt for `task` and show it.
    ///
    /// The completion runs on its own task so the page state is settled
    /// even if the caller goes away mid-request.
    pub async fn generate(&self, task: String) -> Result<PageSnapshot, DomainError> {
        self.page.begin_generation(&task).await?;

        let generator = Arc::clone(&self.generator);
        let page = Arc::clone(&self.page);
        let handle = tokio::spawn(async move {
            let result = generator.generate(&task).await;
            page.finish_generation(&result).await;
            result
        });

        match handle.await {
            Ok(Ok(_)) => Ok(self.snapshot().await),
            Ok(Err(err)) => {
                tracing::warn!("Prompt generation failed: {}", err);
                Err(err.into())
            }
            Err(join_err) => {
                tracing::error!("Prompt generation task aborted: {}", join_err);
                self.page.fail_generation(join_err.to_string()).await;
                Err(DomainError::Internal(join_err.to_string()))
            }
        }
    }

    /// Copy `text`, or the current output when `None`, to the clipboard
    pub async fn copy(&self, text: Option<String>) -> Result<PageSnapshot, DomainError> {
        let text = match text {
            Some(text) => text,
            None => self.page.output().await,
        };

        match self.clipboard.copy(&text).await {
            Ok(()) => {
                tracing::info!("Copied {} chars to clipboard", text.chars().count());
                self.notice.show(Notice::copied()).await;
                Ok(self.snapshot().await)
            }
            Err(err) => {
                tracing::warn!("Clipboard copy failed: {}", err);
                self.notice
                    .show(Notice::error(format!("{}{}", COPY_FAILED_PREFIX, err)))
                    .await;
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{reply, StubClipboard, StubProvider};
    use metaprompt::{ClipboardError, CompletionError, COPIED_NOTICE};
    use std::time::Duration;
    use tokio::sync::Notify;

    fn service(provider: StubProvider, clipboard: Arc<StubClipboard>) -> PageService {
        let provider: Arc<dyn CompletionProvider> = Arc::new(provider);
        PageService::new(
            Arc::new(PromptGenerator::new(provider)),
            clipboard,
            NoticeBoard::new(Duration::from_secs(2)),
        )
    }

    #[tokio::test]
    async fn test_generate_then_copy() {
        let clipboard = Arc::new(StubClipboard::default());
        let service = service(
            StubProvider::answering(vec![reply("You write two-sentence summaries.")]),
            clipboard.clone(),
        );

        let snapshot = service
            .generate("Summarize articles in two sentences.".to_string())
            .await
            .unwrap();
        assert_eq!(snapshot.output, "✨ 生成结果：You write two-sentence summaries.");
        assert_eq!(snapshot.status.state, "ready");
        assert_eq!(snapshot.last_generation.unwrap().model, "stub-model");

        let snapshot = service.copy(None).await.unwrap();
        assert_eq!(
            clipboard.last().as_deref(),
            Some("✨ 生成结果：You write two-sentence summaries.")
        );
        assert!(snapshot.notice.visible);
        assert_eq!(snapshot.notice.message, COPIED_NOTICE);
    }

    #[tokio::test]
    async fn test_connectivity_fault_keeps_output() {
        let service = service(
            StubProvider::answering(vec![Err(CompletionError::Network(
                "connection refused".to_string(),
            ))]),
            Arc::new(StubClipboard::default()),
        );

        let err = service.generate("anything".to_string()).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Completion(CompletionError::Network(_))
        ));

        let snapshot = service.snapshot().await;
        assert_eq!(snapshot.output, "");
        assert_eq!(snapshot.status.state, "failed");
        assert!(snapshot
            .status
            .message
            .unwrap()
            .contains("connection refused"));
    }

    #[tokio::test]
    async fn test_generation_is_exclusive() {
        let gate = Arc::new(Notify::new());
        let service = service(
            StubProvider::answering(vec![reply("first")]).gated(gate.clone()),
            Arc::new(StubClipboard::default()),
        );

        let running = {
            let service = service.clone();
            tokio::spawn(async move { service.generate("one".to_string()).await })
        };

        // Wait until the first generation is in flight
        while service.snapshot().await.status.state != "loading" {
            tokio::task::yield_now().await;
        }

        let err = service.generate("two".to_string()).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        gate.notify_one();
        let snapshot = running.await.unwrap().unwrap();
        assert_eq!(snapshot.output, "✨ 生成结果：first");
        assert_eq!(snapshot.input, "one");
    }

    #[tokio::test]
    async fn test_copy_explicit_text() {
        let clipboard = Arc::new(StubClipboard::default());
        let service = service(StubProvider::default(), clipboard.clone());

        service.copy(Some("shown text".to_string())).await.unwrap();
        assert_eq!(clipboard.last().as_deref(), Some("shown text"));
    }

    #[tokio::test]
    async fn test_copy_failure_is_surfaced() {
        let clipboard = Arc::new(StubClipboard::failing(ClipboardError::Unavailable));
        let service = service(StubProvider::default(), clipboard);

        let err = service.copy(Some("text".to_string())).await.unwrap_err();
        assert_eq!(err, DomainError::Clipboard(ClipboardError::Unavailable));

        let notice = service.snapshot().await.notice;
        assert!(notice.visible);
        assert!(notice.is_error);
        assert!(notice.message.starts_with(COPY_FAILED_PREFIX));
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_notice_hides_after_delay() {
        let service = service(StubProvider::default(), Arc::new(StubClipboard::default()));

        service.copy(Some("O".to_string())).await.unwrap();
        assert!(service.snapshot().await.notice.visible);

        tokio::time::advance(Duration::from_millis(2001)).await;
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
        assert!(!service.snapshot().await.notice.visible);
    }
}
