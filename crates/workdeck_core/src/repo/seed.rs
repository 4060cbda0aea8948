//! Built-in seed workspace.
//!
//! The seed document is embedded at compile time and deserialized on demand,
//! so every fresh store starts from the same tree.

use crate::model::workspace::Domain;
use std::error::Error;
use std::fmt::{Display, Formatter};

const SEED_DOCUMENT: &str = include_str!("seed.json");

/// Error raised when the embedded seed document cannot be decoded.
#[derive(Debug)]
pub enum SeedError {
    Decode(serde_json::Error),
    /// Two seed entries share one domain name.
    DuplicateDomain(String),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "invalid seed document: {err}"),
            Self::DuplicateDomain(name) => write!(f, "duplicate seed domain `{name}`"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::DuplicateDomain(_) => None,
        }
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Decodes the embedded seed domains in document order.
pub fn seed_domains() -> Result<Vec<Domain>, SeedError> {
    parse_domains(SEED_DOCUMENT)
}

pub(crate) fn parse_domains(document: &str) -> Result<Vec<Domain>, SeedError> {
    let domains: Vec<Domain> = serde_json::from_str(document)?;
    for (index, domain) in domains.iter().enumerate() {
        if domains[..index].iter().any(|seen| seen.name == domain.name) {
            return Err(SeedError::DuplicateDomain(domain.name.clone()));
        }
    }
    Ok(domains)
}

#[cfg(test)]
mod tests {
    use super::{parse_domains, seed_domains, SeedError};
    use crate::model::workspace::FileType;

    #[test]
    fn embedded_seed_decodes_all_domains() {
        let domains = seed_domains().expect("embedded seed should decode");
        let names = domains
            .iter()
            .map(|domain| domain.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["somanath", "design", "demoUser"]);

        let somanath = &domains[0];
        assert_eq!(somanath.password.as_deref(), Some("1234"));
        assert_eq!(somanath.projects.len(), 2);
        let planning = &somanath.projects[0].folders[0];
        assert_eq!(planning.files[0].title, "idea.md");
        assert_eq!(planning.files[1].kind, FileType::Json);
    }

    #[test]
    fn parse_rejects_duplicate_domain_names() {
        let err = parse_domains(r#"[{"name":"a"},{"name":"a"}]"#)
            .expect_err("duplicate names must be rejected");
        assert!(matches!(err, SeedError::DuplicateDomain(name) if name == "a"));
    }

    #[test]
    fn parse_reports_decode_errors() {
        let err = parse_domains("{").expect_err("truncated document must fail");
        assert!(matches!(err, SeedError::Decode(_)));
    }
}
