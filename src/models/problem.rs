use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A problem from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Problem {
    pub id: String,
    pub contest_id: Option<i64>,
    pub index: String,
    pub name: String,
    pub tags: Vec<String>,
    /// Difficulty rating; unknown ratings are imputed when the catalog loads
    pub rating: Option<i32>,
}

impl Problem {
    /// Whether the problem carries at least one of the given tags
    pub fn has_any_tag(&self, tags: &HashSet<&str>) -> bool {
        self.tags.iter().any(|tag| tags.contains(tag.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(tags: &[&str]) -> Problem {
        Problem {
            id: "1000A".to_string(),
            contest_id: Some(1000),
            index: "A".to_string(),
            name: "Codehorses T-shirts".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            rating: Some(1200),
        }
    }

    #[test]
    fn test_has_any_tag() {
        let p = problem(&["greedy", "implementation"]);
        let set: HashSet<&str> = ["dp", "greedy"].into_iter().collect();
        assert!(p.has_any_tag(&set));

        let set: HashSet<&str> = ["graphs"].into_iter().collect();
        assert!(!p.has_any_tag(&set));
        assert!(!p.has_any_tag(&HashSet::new()));
    }
}
