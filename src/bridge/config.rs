//! Best-effort parser for the LXC network defaults file.
//!
//! The file is hand edited shell-style `KEY = VALUE` text, so lines that do
//! not look right are skipped instead of failing the whole read.

use crate::error::ConfigError;
use regex::Regex;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::OnceLock;

/// `KEY = VALUE`, with whitespace required on both sides of `=`.
static ASSIGNMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_assignment_regex() -> &'static Regex {
    ASSIGNMENT_REGEX.get_or_init(|| {
        Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s+=\s+(.*)$").expect("Invalid Regex")
    })
}

/// Read the bridge name assigned to `key` in the file at `path`.
///
/// # Arguments
/// * `path` - Location of the config file, e.g. `/etc/default/lxc-net`
/// * `key` - Variable holding the bridge name, e.g. `LXC_BRIDGE`
///
/// # Returns
/// * `Ok(Some(name))` - The last well-formed assignment to `key`
/// * `Ok(None)` - The file does not exist or never assigns `key`
/// * `Err` - The file exists but could not be read
pub fn parse_bridge_config(path: &Path, key: &str) -> Result<Option<String>, ConfigError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("Bridge config not found: {}", path.display());
            return Ok(None);
        }
        Err(source) => {
            return Err(ConfigError {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let bridge = parse_bridge_config_str(&contents, key);
    log::debug!("Bridge config {}: {key}={:?}", path.display(), bridge);
    Ok(bridge)
}

/// Same as [`parse_bridge_config`] on already loaded text.
pub fn parse_bridge_config_str(contents: &str, key: &str) -> Option<String> {
    contents
        .lines()
        .filter_map(|line| parse_line(line, key))
        .last()
}

fn parse_line(line: &str, key: &str) -> Option<String> {
    let line = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(caps) = get_assignment_regex().captures(line) else {
        log::trace!("Skipping malformed config line: {line:?}");
        return None;
    };
    if &caps[1] != key {
        return None;
    }

    let value = &caps[2];
    let value = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    Some(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const KEY: &str = "LXC_BRIDGE";

    #[test]
    fn test_parse_sample_config() {
        let contents = r#"  # comments ignored
LXC_BR= ignored
LXC_ADDR = "fooo"
 LXC_BRIDGE = " foobar " # detected, spaces stripped
anything else ignored
LXC_BRIDGE="ignored""#;
        assert_eq!(
            parse_bridge_config_str(contents, KEY),
            Some("foobar".to_string())
        );
    }

    #[test]
    fn test_last_assignment_wins() {
        let contents = "LXC_BRIDGE = first\nLXC_BRIDGE = \"second\"\n";
        assert_eq!(
            parse_bridge_config_str(contents, KEY),
            Some("second".to_string())
        );
    }

    #[test]
    fn test_malformed_lines_do_not_override() {
        let contents = "LXC_BRIDGE = lxcbr0\nLXC_BRIDGE=other\nLXC_BRIDGE =other\nLXC_BRIDGE= other\n";
        assert_eq!(
            parse_bridge_config_str(contents, KEY),
            Some("lxcbr0".to_string())
        );
    }

    #[test]
    fn test_key_missing() {
        assert_eq!(parse_bridge_config_str("", KEY), None);
        assert_eq!(parse_bridge_config_str("# LXC_BRIDGE = x\n\n", KEY), None);
        assert_eq!(parse_bridge_config_str("LXC_BRIDGE_X = y", KEY), None);
    }

    #[test]
    fn test_unbalanced_quote_kept() {
        assert_eq!(
            parse_bridge_config_str("LXC_BRIDGE = \"br0", KEY),
            Some("\"br0".to_string())
        );
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_bridge_config(&dir.path().join("lxc-net"), KEY)
            .expect("Missing file should not be an error");
        assert_eq!(result, None);
    }

    #[test]
    fn test_parse_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "USE_LXC_BRIDGE=\"true\"").unwrap();
        writeln!(file, "LXC_BRIDGE = \"lxcbr0\"").unwrap();
        let result = parse_bridge_config(file.path(), KEY).unwrap();
        assert_eq!(result.as_deref(), Some("lxcbr0"));
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_bridge_config(dir.path(), KEY).unwrap_err();
        assert_eq!(err.path, dir.path());
    }
}
