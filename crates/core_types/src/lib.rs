use serde::Deserialize;

pub type WidgetId = u64;

/// Numeric key code as reported by `keydown`/`keyup`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const BACKSPACE: KeyCode = KeyCode(8);
    pub const TAB: KeyCode = KeyCode(9);
    pub const ENTER: KeyCode = KeyCode(13);
    pub const ESCAPE: KeyCode = KeyCode(27);
    pub const DELETE: KeyCode = KeyCode(46);

    #[inline]
    pub const fn as_raw(self) -> u32 {
        self.0
    }

    /// Keys that remove text around the caret.
    #[inline]
    pub const fn is_deletion(self) -> bool {
        self.0 == Self::BACKSPACE.0 || self.0 == Self::DELETE.0
    }

    /// Key code for an ASCII letter or digit, the way legacy engines report them.
    pub fn from_char(ch: char) -> Option<KeyCode> {
        match ch {
            'a'..='z' => Some(KeyCode(ch.to_ascii_uppercase() as u32)),
            'A'..='Z' | '0'..='9' | ' ' => Some(KeyCode(ch as u32)),
            _ => None,
        }
    }
}

impl From<u32> for KeyCode {
    #[inline]
    fn from(raw: u32) -> Self {
        KeyCode(raw)
    }
}

/// Which flavour of text control hosts the widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlKind {
    #[default]
    SingleLine,
    MultiLine,
}
