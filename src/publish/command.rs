//! Publisher backed by an external command.
//!
//! The command line is a template: `{chars}` expands to the character count
//! of the message. The message itself is written to the command's stdin and
//! the first non-empty line of stdout is taken as the post id. Any non-zero
//! exit, timeout, or empty stdout is a publish failure.

use super::{PostId, Publisher};
use crate::error::{DocketPostError, Result};
use crate::template::{TemplateError, render_template, values};
use std::io::{self, Read, Write};
use std::process::{Child, ChildStdin, Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Default seconds to wait for the publish command.
pub const DEFAULT_PUBLISH_TIMEOUT_SECONDS: u64 = 60;

/// Runs a command per post.
#[derive(Debug, Clone)]
pub struct CommandPublisher {
    command: String,
    timeout: Duration,
}

impl CommandPublisher {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            timeout: Duration::from_secs(DEFAULT_PUBLISH_TIMEOUT_SECONDS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn command_line(&self, message: &str) -> Result<Vec<String>> {
        let vars = values([("chars", message.chars().count())]);
        let command_str = render_template(&self.command, &vars).map_err(|e| match e {
            TemplateError::MissingField { name, .. } => DocketPostError::UserError(format!(
                "publisher command references unknown variable '{}'\n\
                 Command: {}\n\
                 Available variables: chars",
                name, self.command
            )),
            other => DocketPostError::UserError(format!(
                "publisher command is not a valid template: {}",
                other
            )),
        })?;

        let args = shell_words::split(&command_str).map_err(|e| {
            DocketPostError::UserError(format!(
                "failed to parse publisher command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                command_str, e
            ))
        })?;

        if args.is_empty() {
            return Err(DocketPostError::UserError(
                "publisher command is empty".to_string(),
            ));
        }

        Ok(args)
    }
}

impl Publisher for CommandPublisher {
    fn publish(&mut self, message: &str, image: Option<&[u8]>) -> Result<PostId> {
        if image.is_some() {
            return Err(DocketPostError::PublishError(
                "the command publisher does not support images".to_string(),
            ));
        }

        let args = self.command_line(message)?;
        let mut child = Command::new(&args[0])
            .args(&args[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                DocketPostError::PublishError(format!(
                    "failed to run publisher command '{}': {}\n\
                     Fix: ensure the command is installed and in PATH.",
                    args[0], e
                ))
            })?;

        // Pipes are drained on threads; a full pipe must not stall the child.
        let writer = spawn_writer(child.stdin.take(), message.as_bytes().to_vec());
        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        let status = wait_with_timeout(&mut child, self.timeout)?;
        if status.is_none() {
            return Err(DocketPostError::PublishError(format!(
                "publisher command timed out after {}s",
                self.timeout.as_secs()
            )));
        }

        let stdin_result = writer.join().unwrap_or(Ok(()));
        let stdout = join_reader(stdout_reader);

        match status {
            Some(0) => stdout
                .lines()
                .map(str::trim)
                .find(|line| !line.is_empty())
                .map(|id| PostId(id.to_string()))
                .ok_or_else(|| match stdin_result {
                    Err(e) => DocketPostError::PublishError(format!(
                        "failed to send message to publisher command: {}",
                        e
                    )),
                    Ok(()) => DocketPostError::PublishError(
                        "publisher command printed no post id".to_string(),
                    ),
                }),
            code => {
                let stderr = join_reader(stderr_reader);
                Err(DocketPostError::PublishError(format!(
                    "publisher command exited with status {}: {}",
                    code.unwrap_or(-1),
                    stderr.trim()
                )))
            }
        }
    }
}

/// Wait for the child, killing it after `timeout`.
///
/// Returns the exit code, `Some(-1)` for a signal, or `None` on timeout.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<Option<i32>> {
    let start = Instant::now();
    let poll_interval = Duration::from_millis(50);

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(Some(status.code().unwrap_or(-1))),
            Ok(None) => {
                if start.elapsed() >= timeout {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Ok(None);
                }
                thread::sleep(poll_interval);
            }
            Err(e) => {
                return Err(DocketPostError::PublishError(format!(
                    "failed to check publisher command status: {}",
                    e
                )));
            }
        }
    }
}

/// Feed `message` to the command's stdin. A command that exits without
/// reading it is not an error.
fn spawn_writer(stdin: Option<ChildStdin>, message: Vec<u8>) -> JoinHandle<io::Result<()>> {
    thread::spawn(move || match stdin {
        Some(mut stdin) => match stdin.write_all(&message) {
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
            other => other,
        },
        None => Ok(()),
    })
}

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<String> {
    thread::spawn(move || {
        let mut output = Vec::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_end(&mut output);
        }
        String::from_utf8_lossy(&output).into_owned()
    })
}

fn join_reader(reader: JoinHandle<String>) -> String {
    reader.join().unwrap_or_default()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn returns_first_stdout_line_as_post_id() {
        let mut publisher = CommandPublisher::new("sh -c 'cat > /dev/null; echo 1234567890'");
        let id = publisher.publish("New filing", None).unwrap();
        assert_eq!(id, PostId("1234567890".to_string()));
    }

    #[test]
    fn message_arrives_on_stdin() {
        let mut publisher = CommandPublisher::new("cat");
        let id = publisher.publish("\nNew filing in Doe v. Roe", None).unwrap();
        assert_eq!(id.to_string(), "New filing in Doe v. Roe");
    }

    #[test]
    fn chars_variable_is_expanded() {
        let mut publisher = CommandPublisher::new("sh -c 'cat > /dev/null; echo {chars}'");
        let id = publisher.publish("§§§", None).unwrap();
        assert_eq!(id.to_string(), "3");
    }

    #[test]
    fn non_zero_exit_is_publish_error() {
        let mut publisher =
            CommandPublisher::new("sh -c 'cat > /dev/null; echo rate limited >&2; exit 3'");
        let err = publisher.publish("post", None).unwrap_err();
        assert!(matches!(err, DocketPostError::PublishError(_)));
        assert!(err.to_string().contains("status 3"));
        assert!(err.to_string().contains("rate limited"));
    }

    #[test]
    fn empty_stdout_is_publish_error() {
        let mut publisher = CommandPublisher::new("sh -c 'cat > /dev/null'");
        let err = publisher.publish("post", None).unwrap_err();
        assert!(err.to_string().contains("no post id"));
    }

    #[test]
    fn timeout_kills_command() {
        let mut publisher =
            CommandPublisher::new("sleep 5").with_timeout(Duration::from_millis(100));
        let err = publisher.publish("post", None).unwrap_err();
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn unknown_variable_is_user_error() {
        let mut publisher = CommandPublisher::new("toot post --visibility {visibility}");
        let err = publisher.publish("post", None).unwrap_err();
        assert!(matches!(err, DocketPostError::UserError(_)));
        assert!(err.to_string().contains("visibility"));
    }

    #[test]
    fn images_are_rejected() {
        let mut publisher = CommandPublisher::new("cat");
        let err = publisher.publish("post", Some(b"\x89PNG")).unwrap_err();
        assert!(err.to_string().contains("images"));
    }

    #[test]
    fn large_stdout_does_not_stall_the_command() {
        let mut publisher =
            CommandPublisher::new("sh -c 'cat > /dev/null; echo id-1; yes a | head -n 50000'")
                .with_timeout(Duration::from_secs(10));
        let id = publisher.publish("post", None).unwrap();
        assert_eq!(id.to_string(), "id-1");
    }

    #[test]
    fn large_stderr_is_reported_on_failure() {
        let mut publisher = CommandPublisher::new(
            "sh -c 'cat > /dev/null; yes oops | head -n 50000 >&2; exit 4'",
        )
        .with_timeout(Duration::from_secs(10));
        let err = publisher.publish("post", None).unwrap_err();
        assert!(err.to_string().contains("status 4"));
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn command_ignoring_a_large_message_still_completes() {
        let mut publisher =
            CommandPublisher::new("echo id-2").with_timeout(Duration::from_secs(10));
        let message = "x".repeat(200_000);
        let id = publisher.publish(&message, None).unwrap();
        assert_eq!(id.to_string(), "id-2");
    }

    #[test]
    fn missing_program_is_publish_error() {
        let mut publisher = CommandPublisher::new("docketpost-no-such-program-xyz");
        let err = publisher.publish("post", None).unwrap_err();
        assert!(matches!(err, DocketPostError::PublishError(_)));
    }
}
