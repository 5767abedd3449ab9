use std::collections::BTreeMap;

/// Tags solved more often than this are strengths
pub const STRONG_THRESHOLD: f64 = 0.55;

/// Tags solved less often than this are weaknesses
pub const WEAK_THRESHOLD: f64 = 0.40;

/// Strong and weak topics. Tags in [0.40, 0.55] are in neither.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagClassification {
    pub strong: Vec<String>,
    pub weak: Vec<String>,
}

pub fn categorize_strengths(accuracy: &BTreeMap<String, f64>) -> TagClassification {
    let strong = accuracy
        .iter()
        .filter(|(_, &acc)| acc > STRONG_THRESHOLD)
        .map(|(tag, _)| tag.clone())
        .collect();

    let weak = accuracy
        .iter()
        .filter(|(_, &acc)| acc < WEAK_THRESHOLD)
        .map(|(tag, _)| tag.clone())
        .collect();

    TagClassification { strong, weak }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accuracy(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries.iter().map(|(t, a)| (t.to_string(), *a)).collect()
    }

    #[test]
    fn test_thresholds_are_strict() {
        let result = categorize_strengths(&accuracy(&[
            ("at_weak_cutoff", 0.40),
            ("at_strong_cutoff", 0.55),
            ("middle", 0.5),
            ("weak", 0.39),
            ("strong", 0.56),
        ]));

        assert_eq!(result.strong, vec!["strong"]);
        assert_eq!(result.weak, vec!["weak"]);
    }

    #[test]
    fn test_extremes() {
        let result = categorize_strengths(&accuracy(&[("never", 0.0), ("always", 1.0)]));
        assert_eq!(result.strong, vec!["always"]);
        assert_eq!(result.weak, vec!["never"]);
    }

    #[test]
    fn test_sets_are_disjoint() {
        let values: Vec<(String, f64)> = (0..=100)
            .map(|i| (format!("tag{}", i), i as f64 / 100.0))
            .collect();
        let map: BTreeMap<String, f64> = values.into_iter().collect();

        let result = categorize_strengths(&map);
        assert!(result.strong.iter().all(|t| !result.weak.contains(t)));
        assert_eq!(result.weak.len(), 40);
        assert_eq!(result.strong.len(), 45);
    }

    #[test]
    fn test_empty() {
        assert_eq!(
            categorize_strengths(&BTreeMap::new()),
            TagClassification::default()
        );
    }
}
