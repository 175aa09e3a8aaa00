use platform::PlatformDescriptor;

/// When the engine fires a native `input` event after an edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputEventSupport {
    Never,
    /// Insertions only; Backspace/Delete edits are silent.
    ExceptDeletion,
    #[default]
    Always,
}

/// Native event and API behavior of a simulated engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NativeBehavior {
    pub input_event: InputEventSupport,
    /// Enter in a single-line field commits (fires `change`).
    pub change_on_enter: bool,
    /// `setSelectionRange` exists.
    pub range_selection: bool,
    /// `createTextRange` exists.
    pub text_range_selection: bool,
}

impl NativeBehavior {
    pub const STANDARD: NativeBehavior = NativeBehavior {
        input_event: InputEventSupport::Always,
        change_on_enter: true,
        range_selection: true,
        text_range_selection: false,
    };

    pub fn for_platform(desc: &PlatformDescriptor) -> Self {
        let mut b = NativeBehavior::STANDARD;
        match desc.ie {
            Some(v) if v <= 8 => {
                b.input_event = InputEventSupport::Never;
                b.range_selection = false;
                b.text_range_selection = true;
            }
            Some(9) => {
                b.input_event = InputEventSupport::ExceptDeletion;
                b.text_range_selection = true;
            }
            Some(10) => b.text_range_selection = true,
            _ => {}
        }
        if desc.windows_phone.is_some_and(|v| v <= 8) {
            b.change_on_enter = false;
        }
        b
    }

    pub(crate) fn fires_input(&self, deletion: bool) -> bool {
        match self.input_event {
            InputEventSupport::Never => false,
            InputEventSupport::ExceptDeletion => !deletion,
            InputEventSupport::Always => true,
        }
    }
}

impl Default for NativeBehavior {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ie8_has_no_input_event_and_legacy_selection() {
        let b = NativeBehavior::for_platform(&PlatformDescriptor::ie(8));
        assert!(!b.fires_input(false));
        assert!(!b.range_selection);
        assert!(b.text_range_selection);
    }

    #[test]
    fn ie9_drops_deletion_input() {
        let b = NativeBehavior::for_platform(&PlatformDescriptor::ie(9));
        assert!(b.fires_input(false));
        assert!(!b.fires_input(true));
    }

    #[test]
    fn old_windows_phone_never_commits_on_enter() {
        let b = NativeBehavior::for_platform(&PlatformDescriptor {
            ie: Some(10),
            windows_phone: Some(8),
        });
        assert!(!b.change_on_enter);
        assert!(b.fires_input(true));
    }

    #[test]
    fn unknown_is_standard() {
        assert_eq!(
            NativeBehavior::for_platform(&PlatformDescriptor::UNKNOWN),
            NativeBehavior::STANDARD
        );
    }
}
