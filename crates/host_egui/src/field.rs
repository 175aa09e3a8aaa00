use crate::keys::key_event;
use egui::text::{CCursor, CCursorRange};
use egui::text_edit::TextEditState;
use egui::{Id, Response, TextEdit, Ui};
use input_core::{DomEvent, HostElement, SelectionRange};
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FocusRequest {
    Focus,
    Blur,
}

/// A text field drawn with `egui::TextEdit`, acting as the normalizer's host.
///
/// Focus changes and selections requested by the normalizer are applied on
/// the next [`show`](Self::show); the native events observed while drawing
/// are queued and read back with [`next_native_event`](Self::next_native_event).
pub struct EguiField {
    id: Id,
    multiline: bool,
    attributes: Vec<(String, Option<String>)>,
    text: String,
    committed: String,
    shown: bool,
    focused: bool,
    focus_request: Option<FocusRequest>,
    pending_selection: Option<SelectionRange>,
    native_events: VecDeque<DomEvent>,
}

impl EguiField {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            multiline: false,
            attributes: Vec::new(),
            text: String::new(),
            committed: String::new(),
            shown: false,
            focused: false,
            focus_request: None,
            pending_selection: None,
            native_events: VecDeque::new(),
        }
    }

    pub fn multiline(id: Id) -> Self {
        Self {
            multiline: true,
            ..Self::new(id)
        }
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_deref())
    }

    fn is_disabled(&self) -> bool {
        self.attr("disabled").is_some()
    }

    pub fn next_native_event(&mut self) -> Option<DomEvent> {
        self.native_events.pop_front()
    }

    /// Draw the field for this frame and record what the user did to it.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        match self.focus_request.take() {
            Some(FocusRequest::Focus) => ui.memory_mut(|mem| mem.request_focus(self.id)),
            Some(FocusRequest::Blur) => ui.memory_mut(|mem| mem.surrender_focus(self.id)),
            None => {}
        }

        // The edit state only exists once the widget has been drawn; keep the
        // range until then.
        if let Some(range) = self.pending_selection.take() {
            if !self.store_selection(ui, range) {
                self.pending_selection = Some(range);
            }
        }

        let had_focus = ui.memory(|mem| mem.has_focus(self.id));
        if had_focus {
            let keys: Vec<DomEvent> = ui.input(|i| i.events.iter().filter_map(key_event).collect());
            let (downs, ups): (Vec<_>, Vec<_>) = keys
                .into_iter()
                .partition(|e| matches!(e, DomEvent::KeyDown(_)));
            self.native_events.extend(downs);
            self.native_events.extend(ups);
        }

        let placeholder = self.attr("placeholder").unwrap_or_default().to_owned();
        let interactive = !self.is_disabled();
        let edit = if self.multiline {
            TextEdit::multiline(&mut self.text)
        } else {
            TextEdit::singleline(&mut self.text)
        };
        let edit = edit
            .id(self.id)
            .hint_text(placeholder)
            .interactive(interactive);
        let response = ui.add(edit);
        self.shown = true;

        if response.gained_focus() {
            self.focused = true;
            self.native_events.push_back(DomEvent::Focus);
        }
        if response.changed() {
            self.native_events.push_back(DomEvent::Input);
        }
        if response.lost_focus() {
            self.focused = false;
            if self.text != self.committed {
                self.committed = self.text.clone();
                self.native_events.push_back(DomEvent::Change);
            }
            self.native_events.push_back(DomEvent::Blur);
        }

        log::trace!(target: "host.egui", "field {:?}: {} pending events", self.id, self.native_events.len());
        response
    }

    fn store_selection(&self, ui: &Ui, range: SelectionRange) -> bool {
        let Some(mut state) = TextEditState::load(ui.ctx(), self.id) else {
            return false;
        };
        // egui cursors count chars, selection ranges count bytes.
        let to_char = |byte: usize| self.text.get(..byte).map_or(0, |s| s.chars().count());
        state.cursor.set_char_range(Some(CCursorRange::two(
            CCursor::new(to_char(range.start)),
            CCursor::new(to_char(range.end)),
        )));
        state.store(ui.ctx(), self.id);
        true
    }
}

impl HostElement for EguiField {
    fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        let value = value.map(str::to_owned);
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_owned(), value)),
        }
        if name == "disabled" && self.is_disabled() && self.focused {
            self.focus_request = Some(FocusRequest::Blur);
        }
    }

    fn node_value(&self) -> Option<String> {
        Some(self.text.clone())
    }

    fn set_node_value(&mut self, value: &str) {
        self.text.clear();
        self.text.push_str(value);
        if !self.focused {
            self.committed.clone_from(&self.text);
        }
    }

    fn is_attached(&self) -> bool {
        self.shown
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.focus_request = Some(FocusRequest::Focus);
    }

    fn blur(&mut self) {
        self.focus_request = Some(FocusRequest::Blur);
    }

    fn set_selection_range(&mut self, range: SelectionRange) -> bool {
        self.pending_selection = Some(range);
        true
    }
}
