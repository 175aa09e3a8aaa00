use crate::selection::SelectionRange;
use crate::traits::HostElement;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum HostCall {
    SetAttribute(String, Option<String>),
    SetNodeValue(String),
    Focus,
    Blur,
    BubbleFocusEvents,
    InstallChangeBubbler,
    SelectRange(SelectionRange),
    SelectTextRange,
}

#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    pub live: Option<String>,
    pub attached: bool,
    pub focused: bool,
    pub range_api: bool,
    pub text_range_api: bool,
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn attached(value: &str) -> Self {
        Self {
            live: Some(value.to_string()),
            attached: true,
            range_api: true,
            ..Self::default()
        }
    }

    pub fn detached() -> Self {
        Self::default()
    }

    /// Simulate the user editing the live value.
    pub fn type_live(&mut self, value: &str) {
        self.live = Some(value.to_string());
    }
}

impl HostElement for RecordingHost {
    fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        self.calls.push(HostCall::SetAttribute(
            name.to_string(),
            value.map(str::to_string),
        ));
    }

    fn node_value(&self) -> Option<String> {
        self.live.clone()
    }

    fn set_node_value(&mut self, value: &str) {
        if let Some(live) = self.live.as_mut() {
            *live = value.to_string();
            self.calls.push(HostCall::SetNodeValue(value.to_string()));
        }
    }

    fn is_attached(&self) -> bool {
        self.attached
    }

    fn has_focus(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.focused = true;
        self.calls.push(HostCall::Focus);
    }

    fn blur(&mut self) {
        self.focused = false;
        self.calls.push(HostCall::Blur);
    }

    fn bubble_focus_events(&mut self) {
        self.calls.push(HostCall::BubbleFocusEvents);
    }

    fn install_change_bubbler(&mut self) {
        self.calls.push(HostCall::InstallChangeBubbler);
    }

    fn set_selection_range(&mut self, range: SelectionRange) -> bool {
        if !self.range_api {
            return false;
        }
        self.calls.push(HostCall::SelectRange(range));
        true
    }

    fn select_text_range(&mut self) -> bool {
        if !self.text_range_api {
            return false;
        }
        self.calls.push(HostCall::SelectTextRange);
        true
    }
}
