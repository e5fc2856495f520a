//! Static alias tables mapping user vocabulary to executables and URLs.
//!
//! Lookup order is a contract: the classifier scans each table top to bottom
//! and the first alias found in the message wins. Adding an entry is a data
//! change only, never new matching code.

/// Built-in application aliases, in match-priority order.
const APPLICATIONS: &[(&str, &str)] = &[
    ("chrome", "chrome.exe"),
    ("google chrome", "chrome.exe"),
    ("edge", "msedge.exe"),
    ("firefox", "firefox.exe"),
    ("spotify", "Spotify.exe"),
    ("vscode", "Code.exe"),
    ("visual studio code", "Code.exe"),
    ("notepad", "notepad.exe"),
    ("calculator", "calc.exe"),
    ("file explorer", "explorer.exe"),
];

/// Built-in website aliases, in match-priority order.
const WEBSITES: &[(&str, &str)] = &[
    ("youtube", "https://www.youtube.com"),
    ("gmail", "https://mail.google.com"),
    ("google", "https://www.google.com"),
    ("instagram", "https://www.instagram.com"),
    ("facebook", "https://www.facebook.com"),
    ("twitter", "https://twitter.com"),
    ("x", "https://x.com"),
    ("github", "https://github.com"),
    ("linkedin", "https://www.linkedin.com"),
];

/// One alias to target mapping.
#[derive(Debug, Clone)]
pub struct AliasEntry {
    /// Lowercase fragment matched as a substring of the message.
    pub alias: String,
    /// Executable image name or URL the alias resolves to.
    pub target: String,
}

/// Ordered alias tables for applications and websites.
///
/// Aliases are matched case-insensitively as plain substrings, so a short
/// alias like "x" will also match inside unrelated words. That imprecision
/// is part of the contract, as is first-declared-wins ordering.
///
/// Constructed once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Catalog {
    applications: Vec<AliasEntry>,
    websites: Vec<AliasEntry>,
}

impl Catalog {
    /// Build a catalog from explicit tables. Aliases are lowercased here so
    /// the classifier can match them against a lowercased message directly.
    pub fn new(applications: Vec<(String, String)>, websites: Vec<(String, String)>) -> Self {
        let normalize = |entries: Vec<(String, String)>| {
            entries
                .into_iter()
                .map(|(alias, target)| AliasEntry {
                    alias: alias.to_lowercase(),
                    target,
                })
                .collect()
        };
        Self {
            applications: normalize(applications),
            websites: normalize(websites),
        }
    }

    /// The built-in tables.
    pub fn builtin() -> Self {
        let owned = |table: &[(&str, &str)]| {
            table
                .iter()
                .map(|(alias, target)| ((*alias).to_string(), (*target).to_string()))
                .collect()
        };
        Self::new(owned(APPLICATIONS), owned(WEBSITES))
    }

    /// Application aliases in match-priority order.
    pub fn applications(&self) -> impl Iterator<Item = &AliasEntry> {
        self.applications.iter()
    }

    /// Website aliases in match-priority order.
    pub fn websites(&self) -> impl Iterator<Item = &AliasEntry> {
        self.websites.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_are_populated() {
        let catalog = Catalog::builtin();
        assert!(catalog.applications().count() > 0);
        assert!(catalog.websites().count() > 0);
    }

    #[test]
    fn aliases_are_lowercased_at_construction() {
        let catalog = Catalog::new(
            vec![("Spotify".to_string(), "Spotify.exe".to_string())],
            vec![("YouTube".to_string(), "https://www.youtube.com".to_string())],
        );
        assert_eq!(catalog.applications().next().unwrap().alias, "spotify");
        assert_eq!(catalog.websites().next().unwrap().alias, "youtube");
    }

    #[test]
    fn targets_keep_their_case() {
        let catalog = Catalog::builtin();
        let spotify = catalog
            .applications()
            .find(|entry| entry.alias == "spotify")
            .expect("spotify entry");
        assert_eq!(spotify.target, "Spotify.exe");
    }

    #[test]
    fn declaration_order_is_preserved() {
        let catalog = Catalog::new(
            vec![
                ("b".to_string(), "b.exe".to_string()),
                ("a".to_string(), "a.exe".to_string()),
            ],
            Vec::new(),
        );
        let aliases: Vec<&str> = catalog
            .applications()
            .map(|entry| entry.alias.as_str())
            .collect();
        assert_eq!(aliases, ["b", "a"]);
    }
}
