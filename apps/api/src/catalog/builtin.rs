//! The built-in role table served by the analyzer.

use crate::catalog::profile::{CatalogError, RoleCatalog, RoleProfile};

/// (name, description, keywords). Catalog order is display and tie-break order.
const BUILTIN_ROLES: &[(&str, &str, &[&str])] = &[
    (
        "Data Analyst",
        "Analyze datasets using SQL, Python, Excel, Tableau, and Power BI.",
        &["SQL", "Excel", "Tableau", "Power BI", "Python", "Pandas"],
    ),
    (
        "Web Developer",
        "Build responsive websites and apps using HTML, CSS, JavaScript, React, and Node.js.",
        &["HTML", "CSS", "JavaScript", "React", "Node.js", "Django"],
    ),
    (
        "AI Engineer",
        "Develop machine learning models using Python, TensorFlow, and NLP tools like spaCy.",
        &["Python", "TensorFlow", "PyTorch", "Machine Learning", "NLP", "spaCy"],
    ),
    (
        "DevOps Engineer",
        "Manage CI/CD pipelines using Docker, Kubernetes, AWS, Jenkins, and Linux.",
        &["Docker", "Kubernetes", "Jenkins", "AWS", "CI/CD", "Linux"],
    ),
    (
        "UI/UX Designer",
        "Design user experiences using Figma, Adobe XD, Sketch, and usability testing.",
        &["Figma", "Adobe XD", "Sketch", "Wireframes", "Usability Testing"],
    ),
];

/// Builds and validates the built-in catalog.
pub fn builtin_catalog() -> Result<RoleCatalog, CatalogError> {
    let profiles = BUILTIN_ROLES
        .iter()
        .map(|(name, description, keywords)| {
            RoleProfile::new(*name, *description, keywords.iter().copied())
        })
        .collect();
    RoleCatalog::new(profiles)
}
