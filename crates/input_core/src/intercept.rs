//! Per-platform decisions on raw key events.
//!
//! Both interceptors are pure: they read the resolved [`QuirkTable`] and the
//! event, and answer whether the normalizer has to step in. Under
//! [`QuirkTable::NONE`] they never fire.

use core_types::{ControlKind, KeyCode};
use platform::{KeyupInput, QuirkTable};

/// Whether a `keyup` must be followed by a synthesized live-change because
/// the engine will not fire `input` for it.
pub fn keyup_synthesizes_input(quirks: &QuirkTable, key: KeyCode) -> bool {
    match quirks.keyup_input {
        KeyupInput::Off => false,
        KeyupInput::AllKeys => true,
        KeyupInput::DeletionKeys => key.is_deletion(),
    }
}

/// Whether a `keydown` must blur the element so that the engine fires its
/// native `change`.
///
/// Only Enter in an attached single-line control qualifies.
pub fn keydown_forces_blur(
    quirks: &QuirkTable,
    key: KeyCode,
    control: ControlKind,
    attached: bool,
) -> bool {
    quirks.blur_on_enter && key == KeyCode::ENTER && control == ControlKind::SingleLine && attached
}
