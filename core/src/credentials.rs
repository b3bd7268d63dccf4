//! Stored credentials for the service host.
//!
//! Credentials live in the user's `.netrc`, keyed by machine name `todo.ly`.
//! The home directory comes from `HOME`, with a `USERPROFILE` fallback on
//! Windows. Absence — of the home directory, the file, or a matching entry —
//! is not an error: the caller proceeds with an unauthenticated request.
//! When no machine matches, the file's `default` entry applies, as netrc
//! semantics dictate.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Host name the service's netrc entry is keyed by.
pub const SERVICE_HOST: &str = "todo.ly";

/// A login/password pair from the credential file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

/// Look up credentials for `host` in `<home>/.netrc`.
pub fn machine(host: &str) -> Option<Credentials> {
    from_file(&home_dir()?.join(".netrc"), host)
}

/// Look up credentials for `host` in the given netrc file.
pub fn from_file(path: &Path, host: &str) -> Option<Credentials> {
    let contents = fs::read_to_string(path).ok()?;
    find_in(&contents, host)
}

fn home_dir() -> Option<PathBuf> {
    let home = env::var("HOME").unwrap_or_default();
    if !home.is_empty() {
        return Some(PathBuf::from(home));
    }
    if cfg!(windows) {
        return env::var("USERPROFILE")
            .ok()
            .filter(|profile| !profile.is_empty())
            .map(PathBuf::from);
    }
    None
}

/// Scan netrc contents for a `machine` entry named `host`, falling back to
/// the `default` entry. netrc is a flat token stream; keys and values are
/// whitespace-separated, and an entry runs until the next `machine` or
/// `default` keyword.
fn find_in(contents: &str, host: &str) -> Option<Credentials> {
    let mut entries: Vec<(Option<String>, Credentials)> = Vec::new();
    let mut tokens = contents.split_whitespace();
    while let Some(token) = tokens.next() {
        match token {
            "machine" => match tokens.next() {
                Some(name) => entries.push((Some(name.to_string()), Credentials::default())),
                None => break,
            },
            "default" => entries.push((None, Credentials::default())),
            "login" => {
                if let (Some(entry), Some(value)) = (entries.last_mut(), tokens.next()) {
                    entry.1.login = value.to_string();
                }
            }
            "password" => {
                if let (Some(entry), Some(value)) = (entries.last_mut(), tokens.next()) {
                    entry.1.password = value.to_string();
                }
            }
            _ => {}
        }
    }

    entries
        .iter()
        .find(|(name, _)| name.as_deref() == Some(host))
        .or_else(|| entries.iter().find(|(name, _)| name.is_none()))
        .map(|(_, credentials)| credentials.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_matching_machine_entry() {
        let netrc = "machine example.com login a password b\nmachine todo.ly login user@example.com password hunter2\n";
        let creds = find_in(netrc, "todo.ly").unwrap();
        assert_eq!(creds.login, "user@example.com");
        assert_eq!(creds.password, "hunter2");
    }

    #[test]
    fn entry_keys_may_span_lines() {
        let netrc = "machine todo.ly\n  login user@example.com\n  password hunter2\n";
        let creds = find_in(netrc, "todo.ly").unwrap();
        assert_eq!(creds.login, "user@example.com");
    }

    #[test]
    fn no_matching_machine_yields_none() {
        let netrc = "machine example.com login a password b\n";
        assert_eq!(find_in(netrc, "todo.ly"), None);
    }

    #[test]
    fn default_entry_applies_when_no_machine_matches() {
        let netrc = "machine example.com login a password b\ndefault login fallback password pw\n";
        let creds = find_in(netrc, "todo.ly").unwrap();
        assert_eq!(creds.login, "fallback");
        assert_eq!(creds.password, "pw");
    }

    #[test]
    fn matching_machine_wins_over_default() {
        let netrc = "default login fallback password pw\nmachine todo.ly login real password secret\n";
        let creds = find_in(netrc, "todo.ly").unwrap();
        assert_eq!(creds.login, "real");
    }

    #[test]
    fn empty_contents_yield_none() {
        assert_eq!(find_in("", "todo.ly"), None);
    }

    #[test]
    fn reads_from_a_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".netrc");
        fs::write(&path, "machine todo.ly login u password p\n").unwrap();
        let creds = from_file(&path, "todo.ly").unwrap();
        assert_eq!(creds.login, "u");
        assert_eq!(creds.password, "p");
    }

    #[test]
    fn missing_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(from_file(&dir.path().join(".netrc"), "todo.ly"), None);
    }
}
