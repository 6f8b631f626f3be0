//! URL and CSS sanitization for user-supplied values.
//!
//! Findings neutralize the value and log a warning; they never abort a
//! render or export.

/// URL schemes that can carry script or reach local resources.
const DANGEROUS_PROTOCOLS: [&str; 5] = [
    "javascript:",
    "data:text/html",
    "vbscript:",
    "file:",
    "about:",
];

/// CSS constructs that can execute script or pull external content.
const DANGEROUS_CSS_PATTERNS: [&str; 5] = [
    "javascript:",
    "expression(",
    "@import",
    "behavior:",
    "-moz-binding",
];

/// Check a URL against the scheme denylist. Returns the trimmed URL, or
/// an empty string if it matched.
pub fn sanitize_url(url: &str) -> String {
    let trimmed = url.trim();
    let lower = trimmed.to_lowercase();

    for protocol in DANGEROUS_PROTOCOLS {
        if lower.starts_with(protocol) {
            log::warn!("Dangerous URL protocol detected: {}", protocol);
            return String::new();
        }
    }

    trimmed.to_string()
}

/// Strip dangerous constructs out of a user-sourced CSS value.
pub fn sanitize_css(css: &str) -> String {
    let mut sanitized = css.to_string();

    for pattern in DANGEROUS_CSS_PATTERNS {
        loop {
            let lower = sanitized.to_lowercase();
            match lower.find(pattern) {
                Some(index) => {
                    if sanitized.len() != lower.len() {
                        // Case folding changed byte offsets; bail on the
                        // whole value rather than splice at a wrong index.
                        log::warn!("Unsanitizable CSS value dropped");
                        return String::new();
                    }
                    sanitized.replace_range(index..index + pattern.len(), "");
                }
                None => break,
            }
        }
    }

    sanitized
}
