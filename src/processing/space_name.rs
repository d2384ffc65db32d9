//! Canonical names for network spaces.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Name used when nothing survives canonicalization.
const EMPTY_SPACE_NAME: &str = "empty";

static INVALID_CHARS_REGEX: OnceLock<Regex> = OnceLock::new();
static DASH_RUN_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_invalid_chars_regex() -> &'static Regex {
    INVALID_CHARS_REGEX.get_or_init(|| Regex::new(r"[^a-z0-9-]").expect("Invalid Regex"))
}

fn get_dash_run_regex() -> &'static Regex {
    DASH_RUN_REGEX.get_or_init(|| Regex::new(r"-{2,}").expect("Invalid Regex"))
}

/// Convert `name` into a valid space name that is not in `existing`.
///
/// Spaces become dashes and the name is lower-cased. Everything outside
/// `[a-z0-9-]` is then dropped, dash runs are collapsed and leading and
/// trailing dashes trimmed. An empty result becomes `empty`. If the result is taken, the smallest free
/// `-2`, `-3`, ... suffix is appended.
///
/// `existing` is only read. Callers allocating names from several threads
/// must insert the returned name into their set under the same lock as this
/// call, or two callers can receive the same name.
///
/// # Examples
/// ```
/// use std::collections::HashSet;
/// use bridge_address_filter::convert_space_name;
///
/// let existing: HashSet<String> = ["foo".to_string()].into();
/// assert_eq!(convert_space_name("Foo", &existing), "foo-2");
/// ```
pub fn convert_space_name(name: &str, existing: &HashSet<String>) -> String {
    let lower = name.replace(' ', "-").to_lowercase();
    let stripped = get_invalid_chars_regex().replace_all(&lower, "");
    let collapsed = get_dash_run_regex().replace_all(&stripped, "-");
    let base = match collapsed.trim_matches('-') {
        "" => EMPTY_SPACE_NAME,
        trimmed => trimmed,
    };

    if !existing.contains(base) {
        return base.to_string();
    }
    let mut suffix: u64 = 2;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !existing.contains(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
