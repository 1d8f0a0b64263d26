//! User-agent sniffing for Safari-specific styling.

/// Safari desktop or any iOS device.
///
/// Desktop Safari is recognised by "safari" appearing with no "chrome" or
/// "android" earlier in the string (Chromium browsers also advertise
/// Safari, but after their own token).
pub fn is_safari(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    is_ios(&ua) || is_desktop_safari(&ua)
}

fn is_ios(ua: &str) -> bool {
    ["iphone", "ipad", "ipod"]
        .iter()
        .any(|device| ua.contains(device))
}

fn is_desktop_safari(ua: &str) -> bool {
    let Some(safari_at) = ua.find("safari") else {
        return false;
    };
    let before = &ua[..safari_at];
    !before.contains("chrome") && !before.contains("android")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_agent_is_not_safari() {
        assert!(!is_safari(""));
    }
}
