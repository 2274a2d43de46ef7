// Matching core: keyword scoring and ranking.
// Pure functions over the catalog; no I/O, no rendering.

pub mod matcher;
pub mod normalize;
pub mod ranker;

use serde::Serialize;

use crate::catalog::{CatalogError, RoleCatalog};

pub use matcher::{match_all, score, MatchResult};
pub use ranker::{rank, top_n};

/// Ranked scores of one resume against the whole catalog.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    /// Every role, highest score first, ties in catalog order.
    pub results: Vec<MatchResult>,
    pub best_match: MatchResult,
}

impl AnalysisOutcome {
    pub fn top_n(&self, n: usize) -> &[MatchResult] {
        top_n(&self.results, n)
    }
}

/// Scores and ranks `resume_text` against every role in `catalog`.
///
/// Only fails if the catalog holds no roles, which [`RoleCatalog::new`] already rejects.
pub fn analyze(resume_text: &str, catalog: &RoleCatalog) -> Result<AnalysisOutcome, CatalogError> {
    let results = rank(match_all(resume_text, catalog.profiles()));
    let best_match = results.first().cloned().ok_or(CatalogError::Empty)?;
    Ok(AnalysisOutcome {
        results,
        best_match,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    #[test]
    fn test_analyze_picks_best_role() {
        let catalog = builtin_catalog().unwrap();
        let outcome = analyze(
            "Shipped Docker images to Kubernetes on AWS via Jenkins; Linux admin.",
            &catalog,
        )
        .unwrap();
        assert_eq!(outcome.best_match.role, "DevOps Engineer");
        assert_eq!(outcome.best_match.score, 83.33);
        assert_eq!(outcome.results.len(), 5);
    }

    #[test]
    fn test_analyze_empty_text_keeps_catalog_order() {
        let catalog = builtin_catalog().unwrap();
        let outcome = analyze("", &catalog).unwrap();
        assert!(outcome.results.iter().all(|r| r.score == 0.0));
        assert_eq!(outcome.best_match.role, "Data Analyst");
        let top: Vec<&str> = outcome.top_n(3).iter().map(|r| r.role.as_str()).collect();
        assert_eq!(top, vec!["Data Analyst", "Web Developer", "AI Engineer"]);
    }

    #[test]
    fn test_tied_roles_ranked_in_catalog_order() {
        // Python hits both Data Analyst (1/6) and AI Engineer (1/6).
        let catalog = builtin_catalog().unwrap();
        let outcome = analyze("python", &catalog).unwrap();
        let top: Vec<(&str, f64)> = outcome
            .top_n(2)
            .iter()
            .map(|r| (r.role.as_str(), r.score))
            .collect();
        assert_eq!(top, vec![("Data Analyst", 16.67), ("AI Engineer", 16.67)]);
    }
}
