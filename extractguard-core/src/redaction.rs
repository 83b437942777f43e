//! Keeps extracted patient values out of debug logs unless explicitly allowed.

use lazy_static::lazy_static;
use log::debug;

lazy_static! {
    /// A static boolean that is initialized once to determine if PII is allowed in debug logs.
    static ref PII_DEBUG_ALLOWED: bool =
        pii_debug_allowed(std::env::var("EXTRACTGUARD_ALLOW_DEBUG_PII").ok().as_deref());
}

/// Interprets the `EXTRACTGUARD_ALLOW_DEBUG_PII` setting. Only `true` (any case) opts in.
pub fn pii_debug_allowed(setting: Option<&str>) -> bool {
    setting.is_some_and(|s| s.eq_ignore_ascii_case("true"))
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", len)
    }
}

fn get_loggable_content(sensitive_content: &str, pii_allowed: bool) -> String {
    if pii_allowed {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_field_score_debug(field: &str, value: &str, match_kind: &str, score: f64) {
    debug!(
        "Scored field '{}' (value: '{}') via {} match: {:.2}",
        field,
        get_loggable_content(value, *PII_DEBUG_ALLOWED),
        match_kind,
        score
    );
}
