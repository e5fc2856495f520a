//! Intent classification: raw message text in, optional [`SystemAction`] out.

use crate::action::{Direction, SystemAction};
use crate::catalog::Catalog;

/// Trigger words signalling a launch intent.
const OPEN_TRIGGERS: [&str; 3] = ["open", "launch", "start"];
/// Trigger words signalling a terminate intent.
const CLOSE_TRIGGERS: [&str; 2] = ["close", "quit"];

/// Base URL for the browser-search fallback.
const SEARCH_URL: &str = "https://www.google.com/search?q=";

/// Classify a user message into an optional system action.
///
/// Total over all input: a message with no recognizable intent yields `None`,
/// never an error. Matching is case-insensitive substring matching against
/// the catalog tables, first-declared alias wins. When a message carries both
/// open and close triggers the open reading wins.
///
/// Resolution order: applications, then websites (open intents only), then a
/// search-URL fallback for any remaining open intent. Close-only intents that
/// match no application yield `None`; there is no "close a website" action.
pub fn classify(catalog: &Catalog, message: &str) -> Option<SystemAction> {
    let msg = message.to_lowercase();

    let is_open = OPEN_TRIGGERS.iter().any(|word| msg.contains(word));
    let is_close = CLOSE_TRIGGERS.iter().any(|word| msg.contains(word));
    if !is_open && !is_close {
        return None;
    }

    for entry in catalog.applications() {
        if msg.contains(&entry.alias) {
            let action = if is_open {
                Direction::Open
            } else {
                Direction::Close
            };
            return Some(SystemAction::App {
                action,
                exe: entry.target.clone(),
                name: entry.alias.clone(),
            });
        }
    }

    if !is_open {
        return None;
    }

    for entry in catalog.websites() {
        if msg.contains(&entry.alias) {
            return Some(SystemAction::Web {
                action: Direction::Open,
                url: entry.target.clone(),
                name: entry.alias.clone(),
            });
        }
    }

    Some(search_fallback(&msg))
}

/// Build the browser-search fallback for an open intent with no catalog hit.
///
/// Trigger words are stripped as plain substrings, not word-anchored, so
/// "open restart" becomes "re". That matches the documented contract; the
/// residual text is trimmed and query-escaped, and an empty residual still
/// yields a syntactically valid URL.
fn search_fallback(msg: &str) -> SystemAction {
    let mut stripped = msg.to_string();
    for word in OPEN_TRIGGERS {
        stripped = stripped.replace(word, "");
    }
    let query = stripped.trim();
    SystemAction::Web {
        action: Direction::Open,
        url: format!("{SEARCH_URL}{}", urlencoding::encode(query)),
        name: query.to_string(),
    }
}
