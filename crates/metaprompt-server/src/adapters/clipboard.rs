//! Host clipboard adapter
//!
//! Pipes text into a platform clipboard program (`pbcopy`, `clip`,
//! `wl-copy`, `xclip`, `xsel`) or a configured command.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use metaprompt::{ClipboardError, ClipboardService};

/// Clipboard backed by an external command that reads the text on stdin
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    argv: Option<Vec<String>>,
}

impl CommandClipboard {
    /// Use `argv` if given, otherwise detect a platform command per copy
    pub fn new(argv: Option<Vec<String>>) -> Self {
        Self {
            argv: argv.filter(|a| !a.is_empty()),
        }
    }

    fn resolve(&self) -> Option<Vec<String>> {
        if let Some(argv) = &self.argv {
            return Some(argv.clone());
        }

        platform_candidates()
            .into_iter()
            .find(|argv| argv.first().is_some_and(|program| on_path(program)))
            .map(|argv| argv.into_iter().map(str::to_string).collect())
    }
}

#[async_trait]
impl ClipboardService for CommandClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let argv = self.resolve().ok_or(ClipboardError::Unavailable)?;
        let (program, args) = argv.split_first().ok_or(ClipboardError::Unavailable)?;
        let failed = |reason: String| ClipboardError::Command {
            command: program.clone(),
            reason,
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| failed(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| failed(e.to_string()))?;
            // Closing stdin signals end of input
            drop(stdin);
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| failed(e.to_string()))?;

        if output.status.success() {
            tracing::debug!("Copied {} bytes with {}", text.len(), program);
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, stderr)
            };
            Err(failed(reason))
        }
    }
}

fn platform_candidates() -> Vec<Vec<&'static str>> {
    if cfg!(target_os = "macos") {
        vec![vec!["pbcopy"]]
    } else if cfg!(windows) {
        vec![vec!["clip"]]
    } else {
        let mut candidates = Vec::new();
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            candidates.push(vec!["wl-copy"]);
        }
        candidates.push(vec!["xclip", "-selection", "clipboard"]);
        candidates.push(vec!["xsel", "--clipboard", "--input"]);
        candidates
    }
}

fn on_path(program: &str) -> bool {
    let Some(paths) = std::env::var_os("PATH") else {
        return false;
    };
    std::env::split_paths(&paths).any(|dir| {
        let candidate = dir.join(program);
        candidate.is_file() || (cfg!(windows) && candidate.with_extension("exe").is_file())
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Option<Vec<String>> {
        Some(vec!["sh".to_string(), "-c".to_string(), script.to_string()])
    }

    #[tokio::test]
    async fn test_copy_pipes_text_to_command() {
        let dir = std::env::temp_dir().join(format!("metaprompt-clip-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let target = dir.join("clipboard.txt");

        let clipboard = CommandClipboard::new(sh(&format!("cat > '{}'", target.display())));
        clipboard.copy("✨ 生成结果：You are a helpful summarizer.").await.unwrap();

        let written = std::fs::read_to_string(&target).unwrap();
        assert_eq!(written, "✨ 生成结果：You are a helpful summarizer.");
        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_failing_command_is_reported() {
        let clipboard = CommandClipboard::new(sh("cat > /dev/null; echo 'no display' >&2; exit 3"));
        let err = clipboard.copy("text").await.unwrap_err();

        match err {
            ClipboardError::Command { command, reason } => {
                assert_eq!(command, "sh");
                assert!(reason.contains("no display"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_program_is_reported() {
        let clipboard =
            CommandClipboard::new(Some(vec!["metaprompt-no-such-clipboard-tool".to_string()]));
        let err = clipboard.copy("text").await.unwrap_err();
        assert!(matches!(err, ClipboardError::Command { .. }));
    }

    #[test]
    fn test_empty_argv_falls_back_to_detection() {
        let clipboard = CommandClipboard::new(Some(vec![]));
        assert!(clipboard.argv.is_none());
    }
}
