//! Identification of the running engine.

/// Immutable record of the engines the widget has special knowledge of.
///
/// Both fields can be set at the same time: phone browsers announce the
/// desktop engine they are derived from alongside their own version.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PlatformDescriptor {
    /// Major version of Internet Explorer, if that is the engine.
    pub ie: Option<u8>,
    /// Major version of Windows Phone, if that is the OS.
    pub windows_phone: Option<u8>,
}

impl PlatformDescriptor {
    /// No known engine; every quirk compensation stays off.
    pub const UNKNOWN: PlatformDescriptor = PlatformDescriptor {
        ie: None,
        windows_phone: None,
    };

    pub const fn ie(version: u8) -> Self {
        Self {
            ie: Some(version),
            windows_phone: None,
        }
    }

    pub const fn windows_phone(version: u8) -> Self {
        Self {
            ie: None,
            windows_phone: Some(version),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.ie.is_none() && self.windows_phone.is_none()
    }
}
