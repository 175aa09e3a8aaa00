use crate::behavior::NativeBehavior;
use crate::mutation::Mutation;
use core_types::{ControlKind, KeyCode};
use input_core::{DomEvent, HostElement, SelectionRange};
use std::collections::VecDeque;
use std::sync::Arc;

/// A key the simulated user presses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Keystroke {
    Char(char),
    Backspace,
    Delete,
    Enter,
}

impl Keystroke {
    pub fn code(self) -> KeyCode {
        match self {
            Keystroke::Char(ch) => KeyCode::from_char(ch).unwrap_or(KeyCode(0)),
            Keystroke::Backspace => KeyCode::BACKSPACE,
            Keystroke::Delete => KeyCode::DELETE,
            Keystroke::Enter => KeyCode::ENTER,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct LiveNode {
    value: String,
    /// Byte index, always on a char boundary.
    caret: usize,
    selection: Option<SelectionRange>,
    /// Value when focus was gained or the last commit happened.
    committed: String,
}

/// In-memory `<input>`/`<textarea>`.
///
/// Attributes are kept as written; the live node only exists after
/// [`render`](Element::render). Native events the engine would fire are
/// queued and drained with [`next_native_event`](Element::next_native_event).
#[derive(Clone, Debug)]
pub struct Element {
    kind: ControlKind,
    behavior: NativeBehavior,
    attributes: Vec<(Arc<str>, Option<String>)>,
    node: Option<LiveNode>,
    attached: bool,
    focused: bool,
    bubbles_focus: bool,
    change_bubbler: bool,
    native_events: VecDeque<DomEvent>,
    mutations: Vec<Mutation>,
}

impl Element {
    pub fn new(kind: ControlKind, behavior: NativeBehavior) -> Self {
        Self {
            kind,
            behavior,
            attributes: Vec::new(),
            node: None,
            attached: false,
            focused: false,
            bubbles_focus: false,
            change_bubbler: false,
            native_events: VecDeque::new(),
            mutations: Vec::new(),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self.kind {
            ControlKind::SingleLine => "input",
            ControlKind::MultiLine => "textarea",
        }
    }

    pub fn behavior(&self) -> &NativeBehavior {
        &self.behavior
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Create the live node; its value starts from the `value` attribute.
    pub fn render(&mut self) {
        if self.node.is_some() {
            return;
        }
        let value = self.attr("value").unwrap_or_default().to_string();
        self.node = Some(LiveNode {
            caret: value.len(),
            committed: value.clone(),
            value,
            selection: None,
        });
    }

    pub fn attach(&mut self) {
        self.render();
        self.attached = true;
    }

    pub fn detach(&mut self) {
        self.attached = false;
        self.focused = false;
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .and_then(|(_, v)| v.as_deref())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes
            .iter()
            .any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    pub fn is_disabled(&self) -> bool {
        self.has_attr("disabled")
    }

    pub fn live_value(&self) -> Option<&str> {
        self.node.as_ref().map(|n| n.value.as_str())
    }

    pub fn selection(&self) -> Option<SelectionRange> {
        self.node.as_ref().and_then(|n| n.selection)
    }

    pub fn bubbles_focus(&self) -> bool {
        self.bubbles_focus
    }

    pub fn has_change_bubbler(&self) -> bool {
        self.change_bubbler
    }

    pub fn mutations(&self) -> &[Mutation] {
        &self.mutations
    }

    pub fn take_mutations(&mut self) -> Vec<Mutation> {
        std::mem::take(&mut self.mutations)
    }

    pub fn next_native_event(&mut self) -> Option<DomEvent> {
        self.native_events.pop_front()
    }

    // =========================================================================
    // User interaction
    // =========================================================================

    /// The user clicks or tabs into the field.
    pub fn user_focus(&mut self) {
        self.gain_focus();
    }

    /// The user moves focus elsewhere.
    pub fn user_blur(&mut self) {
        self.lose_focus();
    }

    /// Apply the editing effect of a key to the focused field and queue the
    /// native events the engine fires for it.
    pub fn apply_keystroke(&mut self, key: Keystroke) {
        if !self.focused || self.is_disabled() {
            return;
        }
        let kind = self.kind;
        let behavior = self.behavior;
        let Some(node) = self.node.as_mut() else {
            return;
        };
        let before = node.value.clone();
        let deletion = matches!(key, Keystroke::Backspace | Keystroke::Delete);
        match key {
            Keystroke::Char(ch) => node.replace_selection(ch.encode_utf8(&mut [0; 4])),
            Keystroke::Backspace => node.delete_backward(),
            Keystroke::Delete => node.delete_forward(),
            Keystroke::Enter => {
                if kind == ControlKind::MultiLine {
                    node.replace_selection("\n");
                } else if behavior.change_on_enter && node.value != node.committed {
                    node.committed = node.value.clone();
                    self.native_events.push_back(DomEvent::Change);
                }
            }
        }
        if node.value != before && behavior.fires_input(deletion) {
            self.native_events.push_back(DomEvent::Input);
        }
    }

    fn gain_focus(&mut self) {
        if !self.attached || self.focused || self.is_disabled() {
            return;
        }
        let Some(node) = self.node.as_mut() else {
            return;
        };
        node.committed = node.value.clone();
        self.focused = true;
        self.native_events.push_back(DomEvent::Focus);
    }

    fn lose_focus(&mut self) {
        if !self.focused {
            return;
        }
        self.focused = false;
        if let Some(node) = self.node.as_mut() {
            node.selection = None;
            if node.value != node.committed {
                node.committed = node.value.clone();
                self.native_events.push_back(DomEvent::Change);
            }
        }
        self.native_events.push_back(DomEvent::Blur);
    }
}

impl LiveNode {
    fn take_selection(&mut self) -> Option<SelectionRange> {
        self.selection.take().filter(|s| !s.is_empty())
    }

    fn replace_selection(&mut self, text: &str) {
        let range = self
            .take_selection()
            .unwrap_or(SelectionRange::new(self.caret, self.caret));
        self.value.replace_range(range.start..range.end, text);
        self.caret = range.start + text.len();
    }

    fn delete_backward(&mut self) {
        if let Some(range) = self.take_selection() {
            self.value.replace_range(range.start..range.end, "");
            self.caret = range.start;
            return;
        }
        if let Some((idx, _)) = self.value[..self.caret].char_indices().next_back() {
            self.value.replace_range(idx..self.caret, "");
            self.caret = idx;
        }
    }

    fn delete_forward(&mut self) {
        if let Some(range) = self.take_selection() {
            self.value.replace_range(range.start..range.end, "");
            self.caret = range.start;
            return;
        }
        if let Some(ch) = self.value[self.caret..].chars().next() {
            let end = self.caret + ch.len_utf8();
            self.value.replace_range(self.caret..end, "");
        }
    }
}

impl HostElement for Element {
    fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        let existing = self
            .attributes
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(name));
        match (value, existing) {
            (Some(v), Some(i)) => self.attributes[i].1 = Some(v.to_string()),
            (Some(v), None) => self
                .attributes
                .push((Arc::from(name), Some(v.to_string()))),
            (None, Some(i)) => {
                self.attributes.remove(i);
            }
            (None, None) => {}
        }
        self.mutations.push(match value {
            Some(v) => Mutation::SetAttribute {
                name: name.to_string(),
                value: v.to_string(),
            },
            None => Mutation::RemoveAttribute {
                name: name.to_string(),
            },
        });
        if value.is_some() && name.eq_ignore_ascii_case("disabled") && self.focused {
            self.lose_focus();
        }
    }

    fn node_value(&self) -> Option<String> {
        self.live_value().map(str::to_string)
    }

    fn set_node_value(&mut self, value: &str) {
        let Some(node) = self.node.as_mut() else {
            return;
        };
        node.value = value.to_string();
        node.caret = node.value.len();
        node.selection = None;
        self.mutations.push(Mutation::SetValue(value.to_string()));
    }

    fn is_attached(&self) -> bool {
        self.attached && self.node.is_some()
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.mutations.push(Mutation::Focus);
        self.gain_focus();
    }

    fn blur(&mut self) {
        self.mutations.push(Mutation::Blur);
        self.lose_focus();
    }

    fn bubble_focus_events(&mut self) {
        self.bubbles_focus = true;
        self.mutations.push(Mutation::BubbleFocusEvents);
    }

    fn install_change_bubbler(&mut self) {
        self.change_bubbler = true;
        self.mutations.push(Mutation::InstallChangeBubbler);
    }

    fn set_selection_range(&mut self, range: SelectionRange) -> bool {
        if !self.behavior.range_selection {
            return false;
        }
        let Some(node) = self.node.as_mut() else {
            return false;
        };
        let end = range.end.min(node.value.len());
        let start = range.start.min(end);
        node.selection = Some(SelectionRange::new(start, end));
        node.caret = end;
        self.mutations.push(Mutation::Select(SelectionRange::new(start, end)));
        true
    }

    fn select_text_range(&mut self) -> bool {
        if !self.behavior.text_range_selection {
            return false;
        }
        let Some(node) = self.node.as_mut() else {
            return false;
        };
        node.selection = Some(SelectionRange::all(&node.value));
        node.caret = node.value.len();
        self.mutations.push(Mutation::SelectTextRange);
        true
    }
}
