// SPDX-License-Identifier: PMPL-1.0-or-later
//! Streaming quality tiers

/// Apps whose scenarios were measured per quality tier
const STREAMING_APPS: [&str; 5] = ["netflix", "disney", "amazon", "apple", "youtube"];

/// Whether `activity` carries a quality fragment in its scenario keys
///
/// Expects an already-lowercased activity name.
pub fn is_streaming(activity: &str) -> bool {
    STREAMING_APPS.contains(&activity)
}

/// Quality tier measured as the app's out-of-the-box default
pub fn implied_quality(activity: &str) -> &'static str {
    match activity {
        "netflix" => "eco",
        "amazon" => "good",
        "youtube" => "720p",
        _ => "auto",
    }
}

/// Explicit caller choice wins; otherwise the app default applies
///
/// An empty or whitespace-only request counts as unset.
pub fn resolve_quality(activity: &str, requested: Option<&str>) -> String {
    match requested {
        Some(quality) if !quality.trim().is_empty() => quality.trim().to_lowercase(),
        _ => implied_quality(activity).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streaming_membership() {
        for app in ["netflix", "disney", "amazon", "apple", "youtube"] {
            assert!(is_streaming(app));
        }
        assert!(!is_streaming("tiktok"));
        assert!(!is_streaming("visio"));
        assert!(!is_streaming(""));
    }

    #[test]
    fn test_implied_quality_is_fixed() {
        assert_eq!(implied_quality("netflix"), "eco");
        assert_eq!(implied_quality("amazon"), "good");
        assert_eq!(implied_quality("youtube"), "720p");
        assert_eq!(implied_quality("disney"), "auto");
        assert_eq!(implied_quality("apple"), "auto");
    }

    #[test]
    fn test_explicit_quality_wins() {
        assert_eq!(resolve_quality("netflix", Some("MAX")), "max");
        assert_eq!(resolve_quality("netflix", Some(" 1080p ")), "1080p");
    }

    #[test]
    fn test_absent_quality_falls_back_to_default() {
        assert_eq!(resolve_quality("netflix", None), "eco");
        assert_eq!(resolve_quality("youtube", Some("")), "720p");
        assert_eq!(resolve_quality("disney", Some("   ")), "auto");
    }
}
