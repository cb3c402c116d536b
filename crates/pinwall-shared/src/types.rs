use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Ids are opaque strings so snapshots written by older builds (e.g.
// "sample-1" or epoch-millis ids) keep loading. Fresh ids are UUID v4.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct BoardId(pub String);

impl BoardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BoardId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BoardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BoardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Truncate `s` to at most `max` characters (Unicode scalar values).
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte_idx, _)) => s[..byte_idx].to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_distinct() {
        let ids: std::collections::HashSet<BoardId> = (0..1000).map(|_| BoardId::new()).collect();
        assert_eq!(ids.len(), 1000);
        assert_ne!(PostId::new(), PostId::new());
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = PostId::from("post-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"post-1\"");
        let back: BoardId = serde_json::from_str("\"1690000000000\"").unwrap();
        assert_eq!(back.as_str(), "1690000000000");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("abc", 3), "abc");
        assert_eq!(truncate_chars("", 3), "");
        // multi-byte characters count once
        assert_eq!(truncate_chars("éééé", 2), "éé");
    }
}
