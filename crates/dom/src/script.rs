//! Scripted sessions: a platform, an input configuration and a list of
//! user/program actions, replayed against a simulated element.

use crate::element::Keystroke;
use crate::simulate::{self, SimulatedInput};
use bus::{InputNotification, NotificationBus};
use input_core::{EventOutcome, HostElement, InputConfig, InputId};
use platform::{ConfigError, PlatformConfig};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Session {
    pub platform: PlatformConfig,
    pub input: InputConfig,
    pub steps: Vec<Step>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum KeyName {
    Backspace,
    Delete,
    Enter,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    Focus,
    Blur,
    Type { text: String },
    Press { key: KeyName },
    /// Next turn of the event loop.
    Turn,
    SetValue { value: String },
    Clear,
    SetDisabled { disabled: bool },
    Drag,
    Detach,
    Attach,
}

impl From<KeyName> for Keystroke {
    fn from(key: KeyName) -> Self {
        match key {
            KeyName::Backspace => Keystroke::Backspace,
            KeyName::Delete => Keystroke::Delete,
            KeyName::Enter => Keystroke::Enter,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Focus => f.write_str("focus"),
            Step::Blur => f.write_str("blur"),
            Step::Type { text } => write!(f, "type {text:?}"),
            Step::Press { key } => write!(f, "press {key:?}"),
            Step::Turn => f.write_str("turn"),
            Step::SetValue { value } => write!(f, "set-value {value:?}"),
            Step::Clear => f.write_str("clear"),
            Step::SetDisabled { disabled } => write!(f, "set-disabled {disabled}"),
            Step::Drag => f.write_str("drag"),
            Step::Detach => f.write_str("detach"),
            Step::Attach => f.write_str("attach"),
        }
    }
}

#[derive(Debug)]
pub enum SessionError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(toml::de::Error),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io { path, source } => {
                write!(f, "failed to read session {}: {source}", path.display())
            }
            SessionError::Parse(err) => write!(f, "invalid session: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Io { source, .. } => Some(source),
            SessionError::Parse(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io { path, source } => SessionError::Io { path, source },
            ConfigError::Parse(err) => SessionError::Parse(err),
        }
    }
}

/// Everything observable from one replay.
#[derive(Clone, Debug, Default)]
pub struct Replay {
    /// One line per step, mutation and notification.
    pub transcript: Vec<String>,
    pub notifications: Vec<InputNotification>,
    pub final_value: String,
}

impl Session {
    pub fn from_toml_str(content: &str) -> Result<Self, SessionError> {
        toml::from_str(content).map_err(SessionError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, SessionError> {
        let content = fs::read_to_string(path).map_err(|source| SessionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn replay(&self) -> Replay {
        let desc = self.platform.descriptor();
        log::info!(target: "dom", "replaying {} steps on {desc:?}", self.steps.len());

        let bus = NotificationBus::new();
        let mut input = simulate::build(
            InputId::from_raw(1),
            &desc,
            self.input.clone(),
            bus.sender(),
        );
        let mut replay = Replay::default();

        replay.transcript.push("> mount".to_string());
        simulate::mount_and_attach(&mut input);
        record(&mut replay, &mut input, &bus);

        for step in &self.steps {
            replay.transcript.push(format!("> {step}"));
            if let Some(outcome) = run_step(&mut input, step) {
                replay.transcript.push(format!("  outcome {outcome:?}"));
            }
            record(&mut replay, &mut input, &bus);
        }

        replay.final_value = input.value().to_string();
        replay
    }
}

fn run_step(input: &mut SimulatedInput, step: &Step) -> Option<EventOutcome> {
    match step {
        Step::Focus => simulate::focus(input),
        Step::Blur => simulate::blur(input),
        Step::Type { text } => simulate::type_text(input, text),
        Step::Press { key } => simulate::press(input, (*key).into()),
        Step::Turn => {
            simulate::next_turn(input);
        }
        Step::SetValue { value } => {
            input.set_value(value.as_str());
            simulate::pump(input);
        }
        Step::Clear => {
            input.clear();
            simulate::pump(input);
        }
        Step::SetDisabled { disabled } => {
            input.set_disabled(*disabled);
            simulate::pump(input);
        }
        Step::Drag => return Some(simulate::drag(input)),
        Step::Detach => input.host_mut().detach(),
        Step::Attach => {
            input.host_mut().attach();
            input.attached();
            simulate::pump(input);
        }
    }
    None
}

fn record(replay: &mut Replay, input: &mut SimulatedInput, bus: &NotificationBus) {
    for mutation in input.host_mut().take_mutations() {
        replay.transcript.push(format!("  dom {mutation}"));
    }
    for notification in bus.drain() {
        replay.transcript.push(format!("  notify {notification}"));
        replay.notifications.push(notification);
    }
    debug_assert!(
        !input.host().is_attached() || input.host().live_value() == Some(input.value()),
        "stored value diverged from element"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_steps() {
        let session = Session::from_toml_str(
            r#"
            [platform]
            ie = 9

            [input]
            value = "abc"

            [[steps]]
            action = "focus"

            [[steps]]
            action = "press"
            key = "backspace"

            [[steps]]
            action = "type"
            text = "x"
            "#,
        )
        .unwrap();
        assert_eq!(session.platform.ie, Some(9));
        assert_eq!(session.input.value, "abc");
        assert_eq!(
            session.steps,
            vec![
                Step::Focus,
                Step::Press {
                    key: KeyName::Backspace
                },
                Step::Type { text: "x".into() },
            ]
        );
    }

    #[test]
    fn rejects_unknown_action() {
        let err = Session::from_toml_str(
            r#"
            [[steps]]
            action = "shake"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SessionError::Parse(_)));
    }

    #[test]
    fn replay_records_transcript() {
        let session = Session::from_toml_str(
            r#"
            [platform]
            ie = 9

            [input]
            value = "abc"

            [[steps]]
            action = "focus"

            [[steps]]
            action = "press"
            key = "backspace"
            "#,
        )
        .unwrap();
        let replay = session.replay();
        assert_eq!(replay.final_value, "ab");
        assert_eq!(
            replay.transcript,
            vec![
                "> mount",
                "  dom set-attribute placeholder=\"\"",
                "  dom set-attribute value=\"abc\"",
                "  dom bubble-focus-events",
                "  dom remove-attribute disabled",
                "  notify disabled-changed #1 false",
                "> focus",
                "> press Backspace",
                "  dom set-attribute value=\"ab\"",
                "  notify live-change #1 \"ab\"",
            ]
        );
    }

    #[test]
    fn platform_file_errors_convert_to_session_errors() {
        let missing = Path::new("/nonexistent/platform.toml");
        let err = SessionError::from(PlatformConfig::load(missing).unwrap_err());
        assert!(matches!(err, SessionError::Io { ref path, .. } if path == missing));

        let err = SessionError::from(PlatformConfig::from_toml_str("ie = \"nine\"").unwrap_err());
        assert!(err.to_string().starts_with("invalid session"));
    }
}
