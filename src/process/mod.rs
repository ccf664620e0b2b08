//! Scraper process launching (spawn, inherit stdio, await exit).

use std::future::Future;
use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, warn};

/// How a single scraper process ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Non-zero exit. `-1` when the child was terminated without a code.
    Failed(i32),
    /// The process could not be started at all.
    LaunchError(String),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }

    pub fn from_exit_code(code: Option<i32>) -> Self {
        match code.unwrap_or(-1) {
            0 => Outcome::Success,
            c => Outcome::Failed(c),
        }
    }
}

/// Starts a resolved target and waits for it to finish.
pub trait Launch {
    fn launch(&self, target: &Path) -> impl Future<Output = Outcome> + Send;
}

/// Runs `<interpreter> <target>` with the runner's own stdin/stdout/stderr.
#[derive(Debug, Clone)]
pub struct ProcessLauncher {
    interpreter: String,
}

impl ProcessLauncher {
    pub fn new(interpreter: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }
}

impl Launch for ProcessLauncher {
    async fn launch(&self, target: &Path) -> Outcome {
        let mut cmd = Command::new(&self.interpreter);
        cmd.arg(target)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!(interpreter = %self.interpreter, error = %e, "spawn failed");
                return Outcome::LaunchError(format!(
                    "failed to start {} {}: {}",
                    self.interpreter,
                    target.display(),
                    e
                ));
            }
        };
        let pid = child.id();
        debug!(?pid, interpreter = %self.interpreter, target = %target.display(), "spawned scraper");

        match child.wait().await {
            Ok(status) => {
                debug!(?pid, code = ?status.code(), "scraper exited");
                Outcome::from_exit_code(status.code())
            }
            Err(e) => Outcome::LaunchError(format!("failed waiting for {}: {}", target.display(), e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_map_to_outcomes() {
        assert_eq!(Outcome::from_exit_code(Some(0)), Outcome::Success);
        assert_eq!(Outcome::from_exit_code(Some(2)), Outcome::Failed(2));
        assert_eq!(Outcome::from_exit_code(None), Outcome::Failed(-1));
        assert!(!Outcome::LaunchError("missing".into()).is_success());
    }

    #[tokio::test]
    async fn missing_interpreter_is_a_launch_error() {
        let launcher = ProcessLauncher::new("definitely-not-an-interpreter-4f1c");
        let outcome = launcher.launch(Path::new("whatever.js")).await;
        assert!(matches!(outcome, Outcome::LaunchError(_)), "got {outcome:?}");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn nonzero_exit_is_failed() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("fail.sh");
        std::fs::write(&script, "exit 7\n").unwrap();
        let outcome = ProcessLauncher::new("sh").launch(&script).await;
        assert_eq!(outcome, Outcome::Failed(7));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn zero_exit_is_success() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("ok.sh");
        std::fs::write(&script, "true\n").unwrap();
        let outcome = ProcessLauncher::new("sh").launch(&script).await;
        assert_eq!(outcome, Outcome::Success);
    }
}
