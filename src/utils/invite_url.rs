//! Discord invite URL allow-list.

use regex::Regex;
use std::sync::LazyLock;

/// Only bare `discord.gg` invites over HTTPS, with no path, query or fragment.
static DISCORD_INVITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://discord\.gg/[a-zA-Z0-9]+$").expect("invite pattern is valid")
});

/// Returns true if `url` is an acceptable redirect target.
pub fn is_discord_invite(url: &str) -> bool {
    DISCORD_INVITE.is_match(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_invites() {
        assert!(is_discord_invite("https://discord.gg/helldivers"));
        assert!(is_discord_invite("https://discord.gg/AbC123"));
    }

    #[test]
    fn test_rejects_wrong_scheme() {
        assert!(!is_discord_invite("http://discord.gg/x"));
    }

    #[test]
    fn test_rejects_empty_invite() {
        assert!(!is_discord_invite("https://discord.gg/"));
    }

    #[test]
    fn test_rejects_unanchored_matches() {
        assert!(!is_discord_invite("https://evil.com/discord.gg/x"));
        assert!(!is_discord_invite("https://discord.gg/x.evil.com"));
        assert!(!is_discord_invite(" https://discord.gg/x"));
        assert!(!is_discord_invite("https://discord.gg/x\n"));
    }

    #[test]
    fn test_rejects_extra_components() {
        assert!(!is_discord_invite("https://discord.gg/abc/def"));
        assert!(!is_discord_invite("https://discord.gg/abc?ref=1"));
        assert!(!is_discord_invite("https://discord.gg/abc#top"));
        assert!(!is_discord_invite("https://discord.gg/abc-def"));
    }
}
