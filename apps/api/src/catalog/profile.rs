use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;

/// Invariant violations detected while building a [`RoleCatalog`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("role catalog is empty")]
    Empty,

    #[error("role name must not be blank")]
    BlankRoleName,

    #[error("role '{0}' is defined more than once")]
    DuplicateRole(String),

    #[error("role '{0}' has no keywords")]
    NoKeywords(String),

    #[error("role '{0}' has a blank keyword")]
    BlankKeyword(String),
}

/// One job role: its description and the keywords a resume is scored on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleProfile {
    pub name: String,
    /// Only feeds the skill-frequency comparison, never the match score.
    pub description: String,
    pub keywords: Vec<String>,
}

impl RoleProfile {
    pub fn new<I, S>(name: impl Into<String>, description: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            description: description.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// Immutable, validated set of role profiles in catalog order.
///
/// Every profile has at least one non-blank keyword, so a match score
/// can always be computed without dividing by zero.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    profiles: Vec<RoleProfile>,
}

impl RoleCatalog {
    pub fn new(profiles: Vec<RoleProfile>) -> Result<Self, CatalogError> {
        if profiles.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(profiles.len());
        for profile in &profiles {
            if profile.name.trim().is_empty() {
                return Err(CatalogError::BlankRoleName);
            }
            if !seen.insert(profile.name.as_str()) {
                return Err(CatalogError::DuplicateRole(profile.name.clone()));
            }
            if profile.keywords.is_empty() {
                return Err(CatalogError::NoKeywords(profile.name.clone()));
            }
            if profile.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(CatalogError::BlankKeyword(profile.name.clone()));
            }
        }

        Ok(Self { profiles })
    }

    pub fn profiles(&self) -> &[RoleProfile] {
        &self.profiles
    }

    pub fn get(&self, name: &str) -> Option<&RoleProfile> {
        self.profiles.iter().find(|p| p.name == name)
    }

    pub fn role_count(&self) -> usize {
        self.profiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, keywords: &[&str]) -> RoleProfile {
        RoleProfile::new(name, format!("{name} description"), keywords.iter().copied())
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(RoleCatalog::new(vec![]).unwrap_err(), CatalogError::Empty);
    }

    #[test]
    fn test_role_without_keywords_rejected() {
        let err = RoleCatalog::new(vec![profile("Data Analyst", &["SQL"]), profile("Empty", &[])])
            .unwrap_err();
        assert_eq!(err, CatalogError::NoKeywords("Empty".to_string()));
    }

    #[test]
    fn test_blank_keyword_rejected() {
        let err = RoleCatalog::new(vec![profile("Tester", &["Selenium", "  "])]).unwrap_err();
        assert_eq!(err, CatalogError::BlankKeyword("Tester".to_string()));
    }

    #[test]
    fn test_duplicate_role_rejected() {
        let err = RoleCatalog::new(vec![profile("Tester", &["a"]), profile("Tester", &["b"])])
            .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateRole("Tester".to_string()));
    }

    #[test]
    fn test_blank_role_name_rejected() {
        let err = RoleCatalog::new(vec![profile(" ", &["a"])]).unwrap_err();
        assert_eq!(err, CatalogError::BlankRoleName);
    }

    #[test]
    fn test_get_by_name() {
        let catalog = RoleCatalog::new(vec![profile("A", &["x"]), profile("B", &["y"])]).unwrap();
        assert_eq!(catalog.get("B").unwrap().keywords, vec!["y".to_string()]);
        assert!(catalog.get("C").is_none());
    }

    #[test]
    fn test_error_message_names_role() {
        let err = CatalogError::NoKeywords("Data Analyst".to_string());
        assert_eq!(err.to_string(), "role 'Data Analyst' has no keywords");
    }
}
