// AWS CLI Gateway - Command Classifier
//
// Decides ALLOW or BLOCK for raw command text via case-insensitive
// substring matching against the denylist. Intentionally lexical:
// no CLI grammar parsing, no intent inference. A benign command whose
// argument value happens to contain a banned token is over-blocked,
// and a destructive subcommand with an unlisted name slips through.
// That trade-off is the contract — do not replace with a parser.

use serde::{Deserialize, Serialize};

/// Classification verdict for one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Classification {
    Allow,
    Block {
        /// The denylist token that matched (first match wins)
        matched: String,
    },
}

impl Classification {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Classification::Allow)
    }
}

/// Classify raw command text against the denylist.
///
/// Pure and total: lowercases the input, returns BLOCK with the first
/// denylist token found as a substring, ALLOW otherwise.
pub fn classify(raw_command: &str, denylist: &[String]) -> Classification {
    let lowered = raw_command.to_lowercase();
    for token in denylist {
        if lowered.contains(token.as_str()) {
            return Classification::Block {
                matched: token.clone(),
            };
        }
    }
    Classification::Allow
}

// ============================================================================
// TESTS
// ============================================================================
