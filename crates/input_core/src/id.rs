//! Identifier attached to every notification a widget raises.

use core_types::WidgetId;

/// Opaque handle naming one text input on the notification bus.
///
/// Listeners sharing a [`NotificationBus`](bus::NotificationBus) use it to
/// tell widgets apart; it carries no meaning inside this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct InputId(u64);

impl InputId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub(crate) const fn widget(self) -> WidgetId {
        self.0
    }
}

impl From<u64> for InputId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<InputId> for u64 {
    #[inline]
    fn from(id: InputId) -> Self {
        id.as_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_value_is_preserved() {
        let id = InputId::from(42u64);
        assert_eq!(id.as_raw(), 42);
        assert_eq!(u64::from(id), 42);
    }
}
