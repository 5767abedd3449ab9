use std::sync::Arc;

use crate::{
    catalog::ProblemCatalog,
    services::{Recommender, SubmissionSource},
};

/// Shared application state
///
/// Everything here is read-only after startup, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn SubmissionSource>,
    pub recommender: Arc<Recommender>,
}

impl AppState {
    /// Builds the state, fitting the recommendation context on the catalog
    pub fn new(source: Arc<dyn SubmissionSource>, catalog: ProblemCatalog) -> Self {
        Self {
            source,
            recommender: Arc::new(Recommender::new(Arc::new(catalog))),
        }
    }
}
