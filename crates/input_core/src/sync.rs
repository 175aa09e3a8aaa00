//! Value synchronizer.
//!
//! Keeps the widget's stored value and disabled flag consistent with the
//! rendered element. Programmatic writes push state to the element; user
//! edits are pulled from the element's live value. Writes that would not
//! change anything are skipped, so re-applying a value has no observable
//! effect.

use crate::traits::HostElement;

/// Authoritative field state owned by the widget.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct FieldState {
    /// The current text value.
    pub value: String,
    pub disabled: bool,
}

impl FieldState {
    pub fn new(value: String, disabled: bool) -> Self {
        Self { value, disabled }
    }

    /// Mirror the stored value onto the element.
    ///
    /// The live property is only written when it differs, so the caret of a
    /// field that already shows this text is left alone.
    pub fn render_value(&self, host: &mut impl HostElement) {
        host.set_attribute("value", Some(&self.value));
        if host.node_value().is_some_and(|live| live != self.value) {
            host.set_node_value(&self.value);
        }
    }

    /// Programmatic write. Touches nothing when both the stored value and the
    /// live value already equal `value`; an element edited ahead of its
    /// notification is still overwritten.
    ///
    /// Returns `true` if the stored value changed.
    pub fn set_value(&mut self, host: &mut impl HostElement, value: String) -> bool {
        let live_matches = host.node_value().is_none_or(|live| live == value);
        if self.value == value && live_matches {
            return false;
        }
        log::trace!(target: "input.sync", "value {:?} -> {:?}", self.value, value);
        let changed = self.value != value;
        self.value = value;
        self.render_value(host);
        changed
    }

    /// Pull the live value after a user edit.
    ///
    /// Returns `true` if the stored value changed. Without a live node the
    /// stored value is kept.
    pub fn pull(&mut self, host: &mut impl HostElement) -> bool {
        let Some(live) = host.node_value() else {
            log::trace!(target: "input.sync", "pull skipped: no live node");
            return false;
        };
        self.set_value(host, live)
    }

    pub fn render_disabled(&self, host: &mut impl HostElement) {
        host.set_attribute("disabled", self.disabled.then_some("disabled"));
    }

    /// Returns `true` if the flag changed.
    pub fn set_disabled(&mut self, host: &mut impl HostElement, disabled: bool) -> bool {
        if self.disabled == disabled {
            return false;
        }
        self.disabled = disabled;
        self.render_disabled(host);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::{HostCall, RecordingHost};

    #[test]
    fn render_skips_live_write_when_equal() {
        let mut host = RecordingHost::attached("abc");
        let field = FieldState::new("abc".into(), false);
        field.render_value(&mut host);
        assert_eq!(
            host.calls,
            vec![HostCall::SetAttribute("value".into(), Some("abc".into()))]
        );
    }

    #[test]
    fn render_writes_live_value_when_different() {
        let mut host = RecordingHost::attached("old");
        let field = FieldState::new("new".into(), false);
        field.render_value(&mut host);
        assert_eq!(host.live.as_deref(), Some("new"));
        assert!(host.calls.contains(&HostCall::SetNodeValue("new".into())));
    }

    #[test]
    fn render_without_node_only_sets_attribute() {
        let mut host = RecordingHost::detached();
        FieldState::new("x".into(), false).render_value(&mut host);
        assert_eq!(
            host.calls,
            vec![HostCall::SetAttribute("value".into(), Some("x".into()))]
        );
    }

    #[test]
    fn set_same_value_is_silent() {
        let mut host = RecordingHost::attached("same");
        let mut field = FieldState::new("same".into(), false);
        assert!(!field.set_value(&mut host, "same".into()));
        assert!(host.calls.is_empty());
    }

    #[test]
    fn set_stored_value_still_overwrites_stale_element() {
        let mut host = RecordingHost::attached("abcd");
        let mut field = FieldState::new("abc".into(), false);
        assert!(!field.set_value(&mut host, "abc".into()));
        assert_eq!(host.live.as_deref(), Some("abc"));
        assert!(host.calls.contains(&HostCall::SetNodeValue("abc".into())));
    }

    #[test]
    fn set_value_round_trips_including_empty() {
        let mut host = RecordingHost::attached("");
        let mut field = FieldState::default();
        for v in ["hello", "", "ünïcödé", " spaced "] {
            field.set_value(&mut host, v.to_string());
            assert_eq!(field.value, v);
            assert_eq!(host.live.as_deref(), Some(v));
        }
    }

    #[test]
    fn pull_takes_live_value() {
        let mut host = RecordingHost::attached("typed");
        let mut field = FieldState::new("type".into(), false);
        assert!(field.pull(&mut host));
        assert_eq!(field.value, "typed");
        assert!(!host.calls.iter().any(|c| matches!(c, HostCall::SetNodeValue(_))));
    }

    #[test]
    fn pull_without_node_keeps_value() {
        let mut host = RecordingHost::detached();
        let mut field = FieldState::new("kept".into(), false);
        assert!(!field.pull(&mut host));
        assert_eq!(field.value, "kept");
    }

    #[test]
    fn disabled_mirrors_attribute() {
        let mut host = RecordingHost::attached("");
        let mut field = FieldState::default();
        assert!(field.set_disabled(&mut host, true));
        assert!(!field.set_disabled(&mut host, true));
        assert!(field.set_disabled(&mut host, false));
        assert_eq!(
            host.calls,
            vec![
                HostCall::SetAttribute("disabled".into(), Some("disabled".into())),
                HostCall::SetAttribute("disabled".into(), None),
            ]
        );
    }
}
