//! Fire-and-forget execution of resolved system actions.
//!
//! Targets the Windows process model: `start` for launches, `taskkill` for
//! terminations. Spawned processes are never awaited and exit status is never
//! inspected, so the only observable failure is the spawn itself. Closing an
//! executable with no running instances therefore reports success.

use std::process::{Command, Stdio};

use crate::action::{Direction, SystemAction};
use crate::error::{CoreError, CoreResult};

/// Submit a resolved action to the operating system.
pub fn execute(action: &SystemAction) -> CoreResult<()> {
    match action {
        SystemAction::App {
            action: Direction::Open,
            exe,
            ..
        } => spawn_detached(start_command(exe), "start"),
        SystemAction::App {
            action: Direction::Close,
            exe,
            ..
        } => spawn_detached(taskkill_command(exe), "taskkill"),
        SystemAction::Web { url, .. } => spawn_detached(start_command(url), "start"),
    }
}

/// `cmd /C start "" <target>` hands the target to the shell, which resolves
/// executables the way a Run dialog would and routes URLs to the default
/// browser. The empty string is the window title `start` otherwise steals
/// the first quoted argument for.
fn start_command(target: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", target]);
    detach_stdio(&mut command);
    command
}

/// `taskkill /F /IM <exe>` terminates every running instance by image name.
/// Its output is suppressed; a missing process only shows in the exit
/// status, which is deliberately never read.
fn taskkill_command(exe: &str) -> Command {
    let mut command = Command::new("taskkill");
    command.args(["/F", "/IM", exe]);
    detach_stdio(&mut command);
    command
}

fn detach_stdio(command: &mut Command) {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
}

/// Spawn without waiting. The child handle is dropped immediately; the
/// process keeps running on its own.
fn spawn_detached(mut command: Command, label: &str) -> CoreResult<()> {
    match command.spawn() {
        Ok(child) => {
            tracing::debug!("submitted {label} as pid {}", child.id());
            Ok(())
        }
        Err(error) => Err(CoreError::Launch(format!("failed to run {label}: {error}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(command: &Command) -> Vec<String> {
        command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn start_command_shape() {
        let command = start_command("chrome.exe");
        assert_eq!(command.get_program(), "cmd");
        assert_eq!(args_of(&command), ["/C", "start", "", "chrome.exe"]);
    }

    #[test]
    fn start_command_accepts_urls() {
        let command = start_command("https://www.youtube.com");
        assert_eq!(args_of(&command), ["/C", "start", "", "https://www.youtube.com"]);
    }

    #[test]
    fn taskkill_command_shape() {
        let command = taskkill_command("Spotify.exe");
        assert_eq!(command.get_program(), "taskkill");
        assert_eq!(args_of(&command), ["/F", "/IM", "Spotify.exe"]);
    }

    #[cfg(windows)]
    #[test]
    fn closing_a_non_running_executable_reports_success() {
        let action = SystemAction::App {
            action: Direction::Close,
            exe: "aura-test-not-running.exe".to_string(),
            name: "aura-test-not-running".to_string(),
        };
        assert!(execute(&action).is_ok());
    }
}
