//! Read-only problem catalog, loaded once at startup.

use serde::Deserialize;
use std::{io::Read, path::Path};

use crate::{
    error::{AppError, AppResult},
    models::{parse_tag_literal, Problem},
};

/// Raw CSV row; columns are matched by header name and extras are ignored
#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(alias = "contestId", default, deserialize_with = "csv::invalid_option")]
    contest_id: Option<i64>,
    index: String,
    name: String,
    #[serde(default)]
    tags: String,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    rating: Option<f64>,
}

impl CatalogRow {
    fn into_problem(self, line: usize) -> Problem {
        let tags = parse_tag_literal(&self.tags).unwrap_or_else(|e| {
            tracing::warn!(line, error = %e, "Unreadable tag list in catalog row");
            Vec::new()
        });

        let id = self.id.filter(|id| !id.trim().is_empty()).unwrap_or_else(|| {
            match self.contest_id {
                Some(contest_id) => format!("{}{}", contest_id, self.index),
                None => self.index.clone(),
            }
        });

        Problem {
            id,
            contest_id: self.contest_id,
            index: self.index,
            name: self.name,
            tags,
            rating: self.rating.filter(|r| r.is_finite()).map(|r| r.round() as i32),
        }
    }
}

/// Immutable table of known problems
#[derive(Debug, Clone, Default)]
pub struct ProblemCatalog {
    problems: Vec<Problem>,
    median_rating: Option<i32>,
}

impl ProblemCatalog {
    /// Builds a catalog, imputing unknown ratings with the median known rating
    pub fn from_problems(mut problems: Vec<Problem>) -> Self {
        let mut known: Vec<i32> = problems.iter().filter_map(|p| p.rating).collect();
        let median_rating = median(&mut known);

        if let Some(median_rating) = median_rating {
            for problem in problems.iter_mut().filter(|p| p.rating.is_none()) {
                problem.rating = Some(median_rating);
            }
        }

        Self {
            problems,
            median_rating,
        }
    }

    /// Loads the catalog from a CSV file
    pub fn from_path<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| {
            AppError::Catalog(format!("Failed to open {}: {}", path.display(), e))
        })?;

        let catalog = Self::from_reader(file)?;

        tracing::info!(
            path = %path.display(),
            problems = catalog.len(),
            median_rating = ?catalog.median_rating,
            "Loaded problem catalog"
        );

        Ok(catalog)
    }

    /// Loads the catalog from CSV text
    ///
    /// Rows that cannot be decoded are skipped with a warning.
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        reader.headers()?;

        let mut problems = Vec::new();
        let mut skipped = 0usize;

        for (row, record) in reader.deserialize::<CatalogRow>().enumerate() {
            // header is line 1
            let line = row + 2;
            match record {
                Ok(record) => problems.push(record.into_problem(line)),
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(line, error = %e, "Skipping undecodable catalog row");
                }
            }
        }

        if skipped > 0 {
            tracing::warn!(skipped, kept = problems.len(), "Catalog rows skipped");
        }

        Ok(Self::from_problems(problems))
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Median of the ratings known at load time
    pub fn median_rating(&self) -> Option<i32> {
        self.median_rating
    }
}

fn median(values: &mut [i32]) -> Option<i32> {
    if values.is_empty() {
        return None;
    }

    values.sort_unstable();
    let mid = values.len() / 2;

    if values.len() % 2 == 1 {
        Some(values[mid])
    } else {
        let mean = (values[mid - 1] as f64 + values[mid] as f64) / 2.0;
        Some(mean.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
contestId,index,name,type,rating,tags
1,A,Theatre Square,PROGRAMMING,1000,['math']
4,A,Watermelon,PROGRAMMING,800,\"['brute force', 'math']\"
71,A,Way Too Long Words,PROGRAMMING,,['strings']
158,A,Next Round,PROGRAMMING,1200.0,\"['*special problem', 'implementation']\"
";

    #[test]
    fn test_load_from_reader() {
        let catalog = ProblemCatalog::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 4);

        let first = &catalog.problems()[0];
        assert_eq!(first.id, "1A");
        assert_eq!(first.contest_id, Some(1));
        assert_eq!(first.name, "Theatre Square");
        assert_eq!(first.tags, vec!["math"]);

        let second = &catalog.problems()[1];
        assert_eq!(second.tags, vec!["brute force", "math"]);
        assert_eq!(catalog.problems()[3].rating, Some(1200));
    }

    #[test]
    fn test_unknown_rating_is_imputed_with_median() {
        let catalog = ProblemCatalog::from_reader(CSV.as_bytes()).unwrap();
        // known ratings: 800, 1000, 1200
        assert_eq!(catalog.median_rating(), Some(1000));
        assert_eq!(catalog.problems()[2].rating, Some(1000));
        assert!(catalog.problems().iter().all(|p| p.rating.is_some()));
    }

    #[test]
    fn test_even_median() {
        let mut values = vec![1700, 1600, 800, 2000];
        assert_eq!(median(&mut values), Some(1650));
        assert_eq!(median(&mut []), None);
    }

    #[test]
    fn test_no_known_ratings() {
        let csv = "contestId,index,name,rating,tags\n1,A,Only,,[]\n";
        let catalog = ProblemCatalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.median_rating(), None);
        assert_eq!(catalog.problems()[0].rating, None);
    }

    #[test]
    fn test_bad_tags_do_not_abort_load() {
        let csv = "contestId,index,name,rating,tags\n1,A,One,800,not a list\n2,B,Two,900,['dp']\n";
        let catalog = ProblemCatalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.problems()[0].tags.is_empty());
        assert_eq!(catalog.problems()[1].tags, vec!["dp"]);
    }

    #[test]
    fn test_explicit_id_column() {
        let csv = "id,contest_id,index,name,rating,tags\nX1,5,C,Named,1500,[]\n";
        let catalog = ProblemCatalog::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(catalog.problems()[0].id, "X1");
        assert_eq!(catalog.problems()[0].contest_id, Some(5));
    }

    #[test]
    fn test_missing_file() {
        let result = ProblemCatalog::from_path("/nonexistent/problems.csv");
        assert!(matches!(result, Err(AppError::Catalog(_))));
    }
}
