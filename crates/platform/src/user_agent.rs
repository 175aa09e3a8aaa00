//! User-agent sniffing for the engines listed in [`PlatformDescriptor`].

use crate::descriptor::PlatformDescriptor;

impl PlatformDescriptor {
    /// Detect the platform from a navigator user-agent string.
    ///
    /// Unrecognised or malformed input yields [`PlatformDescriptor::UNKNOWN`].
    pub fn from_user_agent(ua: &str) -> Self {
        let desc = PlatformDescriptor {
            ie: detect_ie(ua),
            windows_phone: detect_windows_phone(ua),
        };
        log::debug!(target: "platform", "user agent {ua:?} -> {desc:?}");
        desc
    }
}

fn detect_ie(ua: &str) -> Option<u8> {
    if let Some(v) = version_after(ua, "MSIE ") {
        return Some(v);
    }
    // IE11 dropped the MSIE token.
    let (_, trident) = ua.split_once("Trident/")?;
    version_after(trident, "rv:")
}

fn detect_windows_phone(ua: &str) -> Option<u8> {
    let (_, rest) = ua.split_once("Windows Phone ")?;
    let rest = rest.strip_prefix("OS ").unwrap_or(rest);
    leading_version(rest)
}

fn version_after(haystack: &str, marker: &str) -> Option<u8> {
    let (_, rest) = haystack.split_once(marker)?;
    leading_version(rest)
}

fn leading_version(s: &str) -> Option<u8> {
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_ie8() {
        let ua = "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)";
        assert_eq!(
            PlatformDescriptor::from_user_agent(ua),
            PlatformDescriptor::ie(8)
        );
    }

    #[test]
    fn detects_ie11_from_trident_rv() {
        let ua = "Mozilla/5.0 (Windows NT 6.3; Trident/7.0; rv:11.0) like Gecko";
        assert_eq!(PlatformDescriptor::from_user_agent(ua).ie, Some(11));
    }

    #[test]
    fn detects_windows_phone_alongside_ie() {
        let ua = "Mozilla/5.0 (compatible; MSIE 10.0; Windows Phone 8.0; Trident/6.0; \
                  IEMobile/10.0; ARM; Touch; NOKIA; Lumia 920)";
        let desc = PlatformDescriptor::from_user_agent(ua);
        assert_eq!(desc.ie, Some(10));
        assert_eq!(desc.windows_phone, Some(8));
    }

    #[test]
    fn detects_windows_phone_os_prefix() {
        let ua = "Mozilla/4.0 (compatible; MSIE 7.0; Windows Phone OS 7.0; Trident/3.1; IEMobile/7.0)";
        assert_eq!(PlatformDescriptor::from_user_agent(ua).windows_phone, Some(7));
    }

    #[test]
    fn other_browsers_are_unknown() {
        let ua = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
        assert!(PlatformDescriptor::from_user_agent(ua).is_unknown());
        assert!(PlatformDescriptor::from_user_agent("").is_unknown());
    }

    #[test]
    fn malformed_versions_are_ignored() {
        assert!(PlatformDescriptor::from_user_agent("MSIE x.0").is_unknown());
        assert!(PlatformDescriptor::from_user_agent("MSIE 999.0").is_unknown());
    }
}
