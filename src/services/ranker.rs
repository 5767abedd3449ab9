use rand::{seq::SliceRandom, Rng};
use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    catalog::ProblemCatalog,
    models::{Bucket, Recommendation, Submission},
    services::tfidf::{SparseVector, TfIdf},
};

/// Problems taken from each bucket
pub const BUCKET_SIZE: usize = 5;

/// Rating offsets above the mode rating used for the strong bucket
pub const STRETCH_OFFSETS: [i32; 2] = [100, 200];

/// Most frequent rating among solved submissions with a known rating.
///
/// Ties go to the lowest rating; no solved rated submission gives 0.
pub fn mode_rating(submissions: &[Submission]) -> i32 {
    let mut frequency: HashMap<i32, usize> = HashMap::new();
    for rating in submissions
        .iter()
        .filter(|s| s.verdict.is_solved())
        .filter_map(|s| s.rating)
    {
        *frequency.entry(rating).or_insert(0) += 1;
    }

    frequency
        .into_iter()
        .max_by(|(rating_a, count_a), (rating_b, count_b)| {
            count_a.cmp(count_b).then(rating_b.cmp(rating_a))
        })
        .map(|(rating, _)| rating)
        .unwrap_or(0)
}

/// Read-only recommendation context built once from the catalog.
///
/// Holds the catalog together with its fitted tag vector space so each
/// request only has to project the user's own submissions.
pub struct Recommender {
    catalog: Arc<ProblemCatalog>,
    model: TfIdf,
    problem_vectors: Vec<SparseVector>,
}

fn tag_text(tags: &[String]) -> String {
    tags.join(" ")
}

impl Recommender {
    pub fn new(catalog: Arc<ProblemCatalog>) -> Self {
        let documents: Vec<String> = catalog
            .problems()
            .iter()
            .map(|p| tag_text(&p.tags))
            .collect();
        let model = TfIdf::fit(documents.iter().map(String::as_str));
        let problem_vectors = documents.iter().map(|d| model.transform(d)).collect();

        tracing::debug!(
            problems = catalog.len(),
            vocabulary = model.dimension(),
            "Fitted tag vector space"
        );

        Self {
            catalog,
            model,
            problem_vectors,
        }
    }

    /// Mean cosine similarity of every catalog problem to the user's submissions.
    ///
    /// Submissions with unreadable tags are left out of the mean.
    pub fn similarity_scores(&self, submissions: &[Submission]) -> Vec<f64> {
        let mut centroid = vec![0.0; self.model.dimension()];
        let mut rows = 0usize;

        for tags in submissions.iter().filter_map(|s| s.tags.tags().ok()) {
            rows += 1;
            for &(i, w) in self.model.transform(&tag_text(tags)).entries() {
                centroid[i] += w;
            }
        }

        if rows > 0 {
            for value in centroid.iter_mut() {
                *value /= rows as f64;
            }
        }

        self.problem_vectors
            .iter()
            .map(|v| v.dot_dense(&centroid))
            .collect()
    }

    /// Picks up to `2 * BUCKET_SIZE` problems and shuffles them.
    ///
    /// The weak bucket holds problems rated exactly `mode_rating` with a weak
    /// tag; the strong bucket holds problems rated `mode_rating + 100` or
    /// `+ 200` with a strong tag. Within a bucket the most similar problems
    /// win, ties keeping catalog order.
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        submissions: &[Submission],
        weak_tags: &[String],
        strong_tags: &[String],
        mode_rating: i32,
        rng: &mut R,
    ) -> Vec<Recommendation> {
        let scores = self.similarity_scores(submissions);

        let mut order: Vec<usize> = (0..scores.len()).collect();
        order.sort_by(|&a, &b| scores[b].partial_cmp(&scores[a]).unwrap_or(Ordering::Equal));

        let weak: HashSet<&str> = weak_tags.iter().map(String::as_str).collect();
        let strong: HashSet<&str> = strong_tags.iter().map(String::as_str).collect();
        let stretch: Vec<i32> = STRETCH_OFFSETS
            .iter()
            .map(|&o| mode_rating.saturating_add(o))
            .collect();

        let pick = |bucket: Bucket, tags: &HashSet<&str>, ratings: &[i32]| {
            if tags.is_empty() {
                return Vec::new();
            }

            order
                .iter()
                .map(|&i| (&self.catalog.problems()[i], scores[i]))
                .filter(|(p, _)| p.rating.is_some_and(|r| ratings.contains(&r)))
                .filter(|(p, _)| p.has_any_tag(tags))
                .take(BUCKET_SIZE)
                .map(|(p, similarity)| Recommendation {
                    problem: p.clone(),
                    similarity,
                    bucket,
                })
                .collect::<Vec<Recommendation>>()
        };

        let mut recommendations = pick(Bucket::Weak, &weak, &[mode_rating]);
        recommendations.extend(pick(Bucket::Strong, &strong, &stretch));
        recommendations.shuffle(rng);

        recommendations
    }
}
