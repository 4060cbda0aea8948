//! Path scheme for addressing workspace nodes.
//!
//! # Responsibility
//! - Parse and format `/{domain}`, `/{domain}/{project}` and
//!   `/{domain}/{project}/{folder}/{file}` paths.
//!
//! # Invariants
//! - Parsed paths have a leading `/` and only non-empty segments.
//! - Formatting a parsed path yields the original string.

use std::fmt::{Display, Formatter};

/// Address of one dashboard, project or file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WorkspacePath {
    Domain {
        domain: String,
    },
    Project {
        domain: String,
        project: String,
    },
    File {
        domain: String,
        project: String,
        folder: String,
        file: String,
    },
}

impl WorkspacePath {
    /// Builds a file path from its four segments.
    pub fn file(
        domain: impl Into<String>,
        project: impl Into<String>,
        folder: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self::File {
            domain: domain.into(),
            project: project.into(),
            folder: folder.into(),
            file: file.into(),
        }
    }

    /// Parses a path string.
    ///
    /// Returns `None` for a missing leading slash, empty segments, or a
    /// segment count other than one, two or four.
    pub fn parse(raw: &str) -> Option<Self> {
        let rest = raw.strip_prefix('/')?;
        let segments = rest.split('/').collect::<Vec<_>>();
        if segments.iter().any(|segment| segment.is_empty()) {
            return None;
        }

        match segments.as_slice() {
            [domain] => Some(Self::Domain {
                domain: (*domain).to_string(),
            }),
            [domain, project] => Some(Self::Project {
                domain: (*domain).to_string(),
                project: (*project).to_string(),
            }),
            [domain, project, folder, file] => {
                Some(Self::file(*domain, *project, *folder, *file))
            }
            _ => None,
        }
    }

    pub fn domain(&self) -> &str {
        match self {
            Self::Domain { domain } | Self::Project { domain, .. } | Self::File { domain, .. } => {
                domain
            }
        }
    }
}

impl Display for WorkspacePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Domain { domain } => write!(f, "/{domain}"),
            Self::Project { domain, project } => write!(f, "/{domain}/{project}"),
            Self::File {
                domain,
                project,
                folder,
                file,
            } => write!(f, "/{domain}/{project}/{folder}/{file}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WorkspacePath;

    #[test]
    fn parse_recognizes_all_three_shapes() {
        assert_eq!(
            WorkspacePath::parse("/design"),
            Some(WorkspacePath::Domain {
                domain: "design".to_string()
            })
        );
        assert!(matches!(
            WorkspacePath::parse("/design/website-redesign"),
            Some(WorkspacePath::Project { .. })
        ));
        assert_eq!(
            WorkspacePath::parse("/somanath/hackathon/planning/idea.md"),
            Some(WorkspacePath::file("somanath", "hackathon", "planning", "idea.md"))
        );
    }

    #[test]
    fn parse_rejects_malformed_paths() {
        for raw in [
            "",
            "/",
            "somanath/hackathon",
            "/somanath//planning/idea.md",
            "/somanath/hackathon/planning",
            "/somanath/hackathon/planning/idea.md/extra",
            "/somanath/hackathon/planning/idea.md/",
        ] {
            assert_eq!(WorkspacePath::parse(raw), None, "`{raw}` should be rejected");
        }
    }

    #[test]
    fn display_round_trips_parsed_file_path() {
        let raw = "/somanath/marketing-campaign/content/social-posts.md";
        let path = WorkspacePath::parse(raw).expect("path should parse");
        assert_eq!(path.to_string(), raw);
        assert_eq!(path.domain(), "somanath");
    }
}
