//! Workspace tree records.
//!
//! # Responsibility
//! - Define the canonical shapes stored per domain.
//! - Provide slug-based child lookup helpers shared by store and search.
//!
//! # Invariants
//! - Child lookups compare slugs, and the first matching sibling wins.
//! - Credentials are optional: lazily created domains carry none.

use crate::model::slug::{slug_matches, slugify};
use serde::{Deserialize, Serialize};

/// Content format of one workspace file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    Markdown,
    Json,
    Text,
}

impl FileType {
    /// File name suffix expected for this type.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => ".md",
            Self::Json => ".json",
            Self::Text => ".txt",
        }
    }

    /// Body used when a file is created without content.
    pub fn default_content(self) -> &'static str {
        match self {
            Self::Markdown => "# New Document\n\nStart writing here...",
            Self::Json => "{\n  \"key\": \"value\"\n}",
            Self::Text => "This is a new text file.",
        }
    }

    /// Stable lowercase label, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Json => "json",
            Self::Text => "text",
        }
    }

    /// Parses the lowercase label produced by [`FileType::as_str`].
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "markdown" => Some(Self::Markdown),
            "json" => Some(Self::Json),
            "text" => Some(Self::Text),
            _ => None,
        }
    }
}

/// Leaf document inside a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    /// Display title, usually with an extension (`idea.md`).
    pub title: String,
    /// Serialized as `type` to match the seed document.
    #[serde(rename = "type")]
    pub kind: FileType,
    pub content: String,
}

impl File {
    pub fn new(title: impl Into<String>, kind: FileType, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            content: content.into(),
        }
    }

    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    #[serde(default)]
    pub files: Vec<File>,
}

impl Folder {
    /// Creates an empty folder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Finds the first file whose title slug matches `file_key`.
    pub fn file(&self, file_key: &str) -> Option<&File> {
        self.files
            .iter()
            .find(|file| slug_matches(&file.title, file_key))
    }

    pub fn file_mut(&mut self, file_key: &str) -> Option<&mut File> {
        self.files
            .iter_mut()
            .find(|file| slug_matches(&file.title, file_key))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub folders: Vec<Folder>,
}

impl Project {
    /// Creates an empty project.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            folders: Vec::new(),
        }
    }

    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    /// Finds the first folder whose name slug matches `folder_key`.
    pub fn folder(&self, folder_key: &str) -> Option<&Folder> {
        self.folders
            .iter()
            .find(|folder| slug_matches(&folder.name, folder_key))
    }

    pub fn folder_mut(&mut self, folder_key: &str) -> Option<&mut Folder> {
        self.folders
            .iter_mut()
            .find(|folder| slug_matches(&folder.name, folder_key))
    }
}

/// Top-level tenant record keyed by its user-chosen name.
///
/// Credentials are plaintext and compared in memory; this crate models a demo
/// workspace, not an identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Domain {
    /// Creates a domain with no credentials and no projects.
    ///
    /// This is the shape produced by a first visit to an unknown domain.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: None,
            email: None,
            phone: None,
            projects: Vec::new(),
        }
    }

    /// Returns whether this domain went through sign-up.
    pub fn is_registered(&self) -> bool {
        self.password.is_some()
    }

    /// Finds the first project whose name slug matches `project_key`.
    pub fn project(&self, project_key: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|project| slug_matches(&project.name, project_key))
    }

    pub fn project_mut(&mut self, project_key: &str) -> Option<&mut Project> {
        self.projects
            .iter_mut()
            .find(|project| slug_matches(&project.name, project_key))
    }
}

/// Credential fields written by sign-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub password: String,
    pub email: String,
    pub phone: String,
}
