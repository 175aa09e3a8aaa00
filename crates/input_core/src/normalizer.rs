//! The text-input widget: raw element events in, one consistent
//! notification contract out.

use crate::config::InputConfig;
use crate::id::InputId;
use crate::intercept::{keydown_forces_blur, keyup_synthesizes_input};
use crate::selection::SelectionRange;
use crate::sync::FieldState;
use crate::tasks::{DeferredQueue, DeferredTask};
use crate::traits::HostElement;
use bus::InputNotification;
use core_types::{ControlKind, KeyCode};
use platform::QuirkTable;
use std::sync::mpsc::Sender;

/// Native events the host forwards from the element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    Input,
    Change,
    Focus,
    Blur,
    DragStart,
    /// Request from an ancestor to empty the field.
    Clear,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventOutcome {
    #[default]
    Continue,
    PreventDefault,
}

/// Single-line text input wrapping one native element.
///
/// Raises [`InputNotification::LiveChange`] on every edit,
/// [`InputNotification::CommitChange`] when the engine commits, and
/// [`InputNotification::DisabledChanged`] when the disabled flag flips.
/// Engine defects listed in the [`QuirkTable`] are compensated so listeners
/// see the same sequence everywhere.
///
/// # Example
///
/// ```ignore
/// let bus = NotificationBus::new();
/// let quirks = QuirkTable::resolve(&PlatformDescriptor::ie(9));
/// let mut input = InputNormalizer::new(InputId::from_raw(1), element, InputConfig::default(), quirks, bus.sender());
/// input.mount();
/// input.attached();
/// input.handle_event(DomEvent::KeyUp(KeyCode::BACKSPACE));
/// ```
pub struct InputNormalizer<H> {
    id: InputId,
    host: H,
    quirks: QuirkTable,
    placeholder: String,
    input_type: String,
    select_on_focus: bool,
    default_focus: bool,
    control: ControlKind,
    field: FieldState,
    deferred: DeferredQueue,
    /// Set between gaining focus and the deferred select-all running.
    pending_select: bool,
    notify: Sender<InputNotification>,
}

impl<H: HostElement> InputNormalizer<H> {
    pub fn new(
        id: InputId,
        host: H,
        config: InputConfig,
        quirks: QuirkTable,
        notify: Sender<InputNotification>,
    ) -> Self {
        let InputConfig {
            value,
            placeholder,
            input_type,
            disabled,
            select_on_focus,
            default_focus,
            control,
        } = config;

        Self {
            id,
            host,
            quirks,
            placeholder,
            input_type,
            select_on_focus,
            default_focus,
            control,
            field: FieldState::new(value, disabled),
            deferred: DeferredQueue::default(),
            pending_select: false,
            notify,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Apply the initial attributes and value to the element.
    pub fn mount(&mut self) {
        self.host
            .set_attribute("placeholder", Some(&self.placeholder));
        // An empty type leaves a type the host already set untouched.
        if !self.input_type.is_empty() {
            self.host.set_attribute("type", Some(&self.input_type));
        }
        self.field.render_value(&mut self.host);
    }

    /// Finish setup once the element is in the live document.
    pub fn attached(&mut self) {
        self.host.bubble_focus_events();
        if self.quirks.inline_change_bubbler {
            log::debug!(target: "input.quirks", "{:?}: routing change through inline handler", self.id);
            self.host.install_change_bubbler();
        }
        self.field.render_disabled(&mut self.host);
        self.emit_disabled();
        if self.default_focus {
            self.host.focus();
        }
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn handle_event(&mut self, event: DomEvent) -> EventOutcome {
        match event {
            DomEvent::KeyUp(key) => {
                if keyup_synthesizes_input(&self.quirks, key) {
                    log::debug!(target: "input.quirks", "{:?}: synthesizing input for keyup {key:?}", self.id);
                    self.live_change();
                }
            }
            DomEvent::KeyDown(key) => {
                let attached = self.host.is_attached();
                if keydown_forces_blur(&self.quirks, key, self.control, attached) {
                    log::debug!(target: "input.quirks", "{:?}: forcing blur on enter", self.id);
                    self.host.blur();
                }
            }
            DomEvent::Input => self.live_change(),
            DomEvent::Change => {
                self.field.pull(&mut self.host);
                let value = self.field.value.clone();
                self.emit(InputNotification::CommitChange {
                    widget: self.id.widget(),
                    value,
                });
            }
            DomEvent::Focus => {
                if self.select_on_focus {
                    self.pending_select = true;
                    self.deferred.post(DeferredTask::SelectContents);
                }
            }
            DomEvent::Blur => {
                log::trace!(target: "input.focus", "{:?}: blur", self.id);
            }
            DomEvent::DragStart => {
                // Dragging a focused field would steal the gesture from text selection.
                if self.host.has_focus() {
                    return EventOutcome::PreventDefault;
                }
            }
            DomEvent::Clear => {
                self.clear();
            }
        }
        EventOutcome::Continue
    }

    /// Run the tasks posted during the previous turn.
    ///
    /// Returns the number of tasks run.
    pub fn run_deferred(&mut self) -> usize {
        let tasks = self.deferred.take();
        let count = tasks.len();
        for task in tasks {
            match task {
                DeferredTask::SelectContents => self.select_contents(),
            }
        }
        count
    }

    // =========================================================================
    // Operations
    // =========================================================================

    pub fn value(&self) -> &str {
        &self.field.value
    }

    /// Returns `true` if the value changed.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        self.field.set_value(&mut self.host, value.into())
    }

    pub fn clear(&mut self) -> bool {
        self.set_value(String::new())
    }

    pub fn is_disabled(&self) -> bool {
        self.field.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        if self.field.set_disabled(&mut self.host, disabled) {
            self.emit_disabled();
        }
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        let placeholder = placeholder.into();
        if self.placeholder != placeholder {
            self.placeholder = placeholder;
            self.host
                .set_attribute("placeholder", Some(&self.placeholder));
        }
    }

    pub fn input_type(&self) -> &str {
        if self.input_type.is_empty() {
            "text"
        } else {
            &self.input_type
        }
    }

    pub fn set_type(&mut self, input_type: impl Into<String>) {
        let input_type = input_type.into();
        if self.input_type != input_type {
            self.input_type = input_type;
            let rendered = self.input_type().to_string();
            self.host.set_attribute("type", Some(&rendered));
        }
    }

    pub fn select_on_focus(&self) -> bool {
        self.select_on_focus
    }

    pub fn set_select_on_focus(&mut self, select_on_focus: bool) {
        self.select_on_focus = select_on_focus;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> InputId {
        self.id
    }

    pub fn pending_select(&self) -> bool {
        self.pending_select
    }

    pub fn has_deferred(&self) -> bool {
        !self.deferred.is_empty()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn live_change(&mut self) {
        self.field.pull(&mut self.host);
        let value = self.field.value.clone();
        self.emit(InputNotification::LiveChange {
            widget: self.id.widget(),
            value,
        });
    }

    fn select_contents(&mut self) {
        self.pending_select = false;
        let Some(live) = self.host.node_value() else {
            log::trace!(target: "input.focus", "{:?}: select skipped, no live node", self.id);
            return;
        };
        let range = SelectionRange::all(&live);
        if self.host.set_selection_range(range) || self.host.select_text_range() {
            return;
        }
        log::trace!(target: "input.focus", "{:?}: no selection api", self.id);
    }

    fn emit_disabled(&self) {
        self.emit(InputNotification::DisabledChanged {
            widget: self.id.widget(),
            disabled: self.field.disabled,
        });
    }

    fn emit(&self, notification: InputNotification) {
        let _ = self.notify.send(notification);
    }
}
