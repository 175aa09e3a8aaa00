//! Static capability table mapping engines to the compensations they need.
//!
//! The table is resolved once per session into a [`QuirkTable`] which the
//! input interceptors read as plain data.

use crate::descriptor::PlatformDescriptor;

/// Which `keyup` events must be turned into a live-change notification
/// because the engine does not fire `input` for them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeyupInput {
    #[default]
    Off,
    /// Only Backspace and Delete are missing an `input` event.
    DeletionKeys,
    /// The engine has no `input` event at all.
    AllKeys,
}

/// Compensations active for the running platform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QuirkTable {
    pub keyup_input: KeyupInput,
    /// Enter in a single-line input never commits; blur the field to force it.
    pub blur_on_enter: bool,
    /// The native `change` event does not bubble unless routed through an
    /// inline handler attribute.
    pub inline_change_bubbler: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Engine {
    Ie,
    WindowsPhone,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Versions {
    AtMost(u8),
    Exactly(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Quirk {
    KeyupInput(KeyupInput),
    BlurOnEnter,
    InlineChangeBubbler,
}

#[derive(Clone, Copy, Debug)]
struct QuirkRule {
    engine: Engine,
    versions: Versions,
    quirk: Quirk,
}

static QUIRK_RULES: &[QuirkRule] = &[
    QuirkRule {
        engine: Engine::Ie,
        versions: Versions::AtMost(8),
        quirk: Quirk::KeyupInput(KeyupInput::AllKeys),
    },
    QuirkRule {
        engine: Engine::Ie,
        versions: Versions::Exactly(9),
        quirk: Quirk::KeyupInput(KeyupInput::DeletionKeys),
    },
    QuirkRule {
        engine: Engine::Ie,
        versions: Versions::Exactly(8),
        quirk: Quirk::InlineChangeBubbler,
    },
    QuirkRule {
        engine: Engine::WindowsPhone,
        versions: Versions::AtMost(8),
        quirk: Quirk::BlurOnEnter,
    },
];

impl Versions {
    fn contains(self, version: u8) -> bool {
        match self {
            Versions::AtMost(max) => version <= max,
            Versions::Exactly(v) => version == v,
        }
    }
}

impl QuirkRule {
    fn matches(&self, desc: &PlatformDescriptor) -> bool {
        let version = match self.engine {
            Engine::Ie => desc.ie,
            Engine::WindowsPhone => desc.windows_phone,
        };
        version.is_some_and(|v| self.versions.contains(v))
    }
}

impl QuirkTable {
    /// Table for platforms with no known defects.
    pub const NONE: QuirkTable = QuirkTable {
        keyup_input: KeyupInput::Off,
        blur_on_enter: false,
        inline_change_bubbler: false,
    };

    pub fn resolve(desc: &PlatformDescriptor) -> Self {
        let mut table = QuirkTable::NONE;
        for rule in QUIRK_RULES.iter().filter(|r| r.matches(desc)) {
            match rule.quirk {
                Quirk::KeyupInput(mode) => table.keyup_input = mode,
                Quirk::BlurOnEnter => table.blur_on_enter = true,
                Quirk::InlineChangeBubbler => table.inline_change_bubbler = true,
            }
        }
        log::debug!(target: "platform", "resolved quirks for {desc:?}: {table:?}");
        table
    }

    pub fn is_empty(&self) -> bool {
        *self == QuirkTable::NONE
    }
}
