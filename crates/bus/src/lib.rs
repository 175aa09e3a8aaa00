use core_types::WidgetId;
use serde::Serialize;
use std::fmt;
use std::sync::mpsc::{self, Receiver, Sender, TryIter};

/// Notifications a text input raises towards its ancestors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum InputNotification {
    /// Every edit, native `input` or synthesized from a keyup.
    LiveChange {
        widget: WidgetId,
        value: String,
    },
    /// Native `change`, passed through.
    CommitChange {
        widget: WidgetId,
        value: String,
    },
    DisabledChanged {
        widget: WidgetId,
        disabled: bool,
    },
}

impl InputNotification {
    pub fn widget(&self) -> WidgetId {
        match self {
            InputNotification::LiveChange { widget, .. }
            | InputNotification::CommitChange { widget, .. }
            | InputNotification::DisabledChanged { widget, .. } => *widget,
        }
    }
}

impl fmt::Display for InputNotification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputNotification::LiveChange { widget, value } => {
                write!(f, "live-change #{widget} {value:?}")
            }
            InputNotification::CommitChange { widget, value } => {
                write!(f, "commit-change #{widget} {value:?}")
            }
            InputNotification::DisabledChanged { widget, disabled } => {
                write!(f, "disabled-changed #{widget} {disabled}")
            }
        }
    }
}

pub struct NotificationBus {
    pub tx: Sender<InputNotification>, // handed to each widget
    pub rx: Receiver<InputNotification>,
}

impl NotificationBus {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    pub fn sender(&self) -> Sender<InputNotification> {
        self.tx.clone()
    }

    /// Notifications raised since the last drain, in emission order.
    pub fn drain(&self) -> TryIter<'_, InputNotification> {
        self.rx.try_iter()
    }
}

impl Default for NotificationBus {
    fn default() -> Self {
        Self::new()
    }
}
