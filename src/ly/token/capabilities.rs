//! Capability flags and match tags
//!
//! A token kind carries a small set of independent capabilities. Consumers such as the
//! indentation pass or a highlighter read the flags without knowing the concrete kind.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities(u16);

impl Capabilities {
    pub const NONE: Capabilities = Capabilities(0);
    pub const SPACE: Capabilities = Capabilities(1 << 0);
    pub const COMMENT: Capabilities = Capabilities(1 << 1);
    pub const STRING: Capabilities = Capabilities(1 << 2);
    pub const STRING_START: Capabilities = Capabilities(1 << 3);
    pub const STRING_END: Capabilities = Capabilities(1 << 4);
    pub const NUMERIC: Capabilities = Capabilities(1 << 5);
    pub const ERROR: Capabilities = Capabilities(1 << 6);
    pub const INDENT: Capabilities = Capabilities(1 << 7);
    pub const DEDENT: Capabilities = Capabilities(1 << 8);
    pub const MATCH_START: Capabilities = Capabilities(1 << 9);
    pub const MATCH_END: Capabilities = Capabilities(1 << 10);
    /// The kind pops its context unconditionally after matching.
    pub const LEAVER: Capabilities = Capabilities(1 << 11);

    const NAMES: [(Capabilities, &'static str); 12] = [
        (Capabilities::SPACE, "space"),
        (Capabilities::COMMENT, "comment"),
        (Capabilities::STRING, "string"),
        (Capabilities::STRING_START, "string-start"),
        (Capabilities::STRING_END, "string-end"),
        (Capabilities::NUMERIC, "numeric"),
        (Capabilities::ERROR, "error"),
        (Capabilities::INDENT, "indent"),
        (Capabilities::DEDENT, "dedent"),
        (Capabilities::MATCH_START, "match-start"),
        (Capabilities::MATCH_END, "match-end"),
        (Capabilities::LEAVER, "leaver"),
    ];

    pub const fn union(self, other: Capabilities) -> Capabilities {
        Capabilities(self.0 | other.0)
    }

    pub const fn contains(self, other: Capabilities) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn names(self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }
}

impl BitOr for Capabilities {
    type Output = Capabilities;

    fn bitor(self, rhs: Capabilities) -> Capabilities {
        self.union(rhs)
    }
}

impl BitOrAssign for Capabilities {
    fn bitor_assign(&mut self, rhs: Capabilities) {
        *self = self.union(rhs);
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join("|"))
    }
}

/// Label pairing an opening delimiter with its closing counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchTag {
    Bracket,
    Simultaneous,
    Slur,
    PhrasingSlur,
    Beam,
    Ligature,
}

impl MatchTag {
    pub fn name(self) -> &'static str {
        match self {
            MatchTag::Bracket => "bracket",
            MatchTag::Simultaneous => "simultaneous",
            MatchTag::Slur => "slur",
            MatchTag::PhrasingSlur => "phrasingslur",
            MatchTag::Beam => "beam",
            MatchTag::Ligature => "ligature",
        }
    }
}

impl fmt::Display for MatchTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_contains() {
        let caps = Capabilities::COMMENT | Capabilities::DEDENT | Capabilities::LEAVER;
        assert!(caps.contains(Capabilities::COMMENT));
        assert!(caps.contains(Capabilities::DEDENT | Capabilities::LEAVER));
        assert!(!caps.contains(Capabilities::INDENT));
        assert!(Capabilities::NONE.is_empty());
    }

    #[test]
    fn test_names_follow_flag_order() {
        let caps = Capabilities::LEAVER | Capabilities::COMMENT;
        assert_eq!(caps.names(), vec!["comment", "leaver"]);
        assert_eq!(caps.to_string(), "comment|leaver");
    }

    #[test]
    fn test_match_tag_serializes_lowercase() {
        let json = serde_json::to_string(&MatchTag::PhrasingSlur).unwrap();
        assert_eq!(json, "\"phrasingslur\"");
    }
}
