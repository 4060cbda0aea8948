//! Workspace create flows.
//!
//! # Responsibility
//! - Validate domain/project/folder/file inputs above the store.
//! - Complete file titles and default content from the file type.
//!
//! # Invariants
//! - Display names are stored as typed; only blank names are rejected.
//! - Unlike the store, missing targets are reported as typed errors.

use crate::model::path::WorkspacePath;
use crate::model::slug::slugify;
use crate::model::workspace::{File, FileType, Folder, Project};
use crate::repo::workspace_store::WorkspaceStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from workspace create flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceServiceError {
    DomainRequired,
    ProjectNameRequired,
    FolderNameRequired,
    FileNameRequired,
    /// File creation without a target folder.
    FolderRequired,
    ProjectNotFound {
        domain: String,
        project: String,
    },
    FolderNotFound {
        project: String,
        folder: String,
    },
}

impl Display for WorkspaceServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRequired => write!(f, "Domain required"),
            Self::ProjectNameRequired => write!(f, "Project name is required"),
            Self::FolderNameRequired => write!(f, "Folder name is required"),
            Self::FileNameRequired => write!(f, "File name is required"),
            Self::FolderRequired => write!(f, "Please select a folder"),
            Self::ProjectNotFound { domain, project } => {
                write!(f, "project `{project}` not found in `{domain}`")
            }
            Self::FolderNotFound { project, folder } => {
                write!(f, "folder `{folder}` not found in project `{project}`")
            }
        }
    }
}

impl Error for WorkspaceServiceError {}

/// New file form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFileRequest {
    /// Target folder, by slug or display name.
    pub folder: String,
    /// File name; the type's extension is appended when missing.
    pub name: String,
    pub kind: FileType,
    /// Empty content is replaced by the type's default body.
    pub content: String,
}

/// Workspace create-flow facade over a borrowed store.
pub struct WorkspaceService<'store> {
    store: &'store mut WorkspaceStore,
}

impl<'store> WorkspaceService<'store> {
    pub fn new(store: &'store mut WorkspaceStore) -> Self {
        Self { store }
    }

    /// Normalizes a typed domain (trim + lowercase) and makes it current.
    ///
    /// Returns the normalized domain name.
    pub fn open_domain(&mut self, raw: &str) -> Result<String, WorkspaceServiceError> {
        let domain = raw.trim().to_lowercase();
        if domain.is_empty() {
            return Err(WorkspaceServiceError::DomainRequired);
        }
        self.store.set_current_domain(&domain);
        Ok(domain)
    }

    /// Appends a new empty project and returns its path.
    pub fn create_project(
        &mut self,
        domain: &str,
        name: &str,
    ) -> Result<WorkspacePath, WorkspaceServiceError> {
        if name.trim().is_empty() {
            return Err(WorkspaceServiceError::ProjectNameRequired);
        }
        self.store.add_project(domain, Project::new(name));
        info!("event=workspace_create_project module=workspace status=ok");
        Ok(WorkspacePath::Project {
            domain: domain.to_string(),
            project: slugify(name),
        })
    }

    /// Appends a new empty folder to an existing project.
    pub fn create_folder(
        &mut self,
        domain: &str,
        project_slug: &str,
        name: &str,
    ) -> Result<(), WorkspaceServiceError> {
        if name.trim().is_empty() {
            return Err(WorkspaceServiceError::FolderNameRequired);
        }
        if !self.store.add_folder(domain, project_slug, Folder::new(name)) {
            return Err(WorkspaceServiceError::ProjectNotFound {
                domain: domain.to_string(),
                project: project_slug.to_string(),
            });
        }
        info!("event=workspace_create_folder module=workspace status=ok");
        Ok(())
    }

    /// Appends a new file and returns its path.
    pub fn create_file(
        &mut self,
        domain: &str,
        project_slug: &str,
        request: &NewFileRequest,
    ) -> Result<WorkspacePath, WorkspaceServiceError> {
        if request.name.trim().is_empty() {
            return Err(WorkspaceServiceError::FileNameRequired);
        }
        if request.folder.trim().is_empty() {
            return Err(WorkspaceServiceError::FolderRequired);
        }

        let Some(project) = self.store.project(domain, project_slug) else {
            return Err(WorkspaceServiceError::ProjectNotFound {
                domain: domain.to_string(),
                project: project_slug.to_string(),
            });
        };
        let Some(folder) = project.folder(&request.folder) else {
            return Err(WorkspaceServiceError::FolderNotFound {
                project: project_slug.to_string(),
                folder: request.folder.clone(),
            });
        };
        let (project_key, folder_key) = (project.slug(), folder.slug());

        let title = complete_title(&request.name, request.kind);
        let content = if request.content.is_empty() {
            request.kind.default_content().to_string()
        } else {
            request.content.clone()
        };
        let path = WorkspacePath::file(
            domain,
            project_key.as_str(),
            folder_key.as_str(),
            slugify(&title),
        );

        if !self.store.add_file(
            domain,
            &project_key,
            &folder_key,
            File::new(title, request.kind, content),
        ) {
            return Err(WorkspaceServiceError::FolderNotFound {
                project: project_slug.to_string(),
                folder: request.folder.clone(),
            });
        }
        info!(
            "event=workspace_create_file module=workspace status=ok type={}",
            request.kind.as_str()
        );
        Ok(path)
    }
}

/// Appends the type's extension unless `name` already ends with it.
pub fn complete_title(name: &str, kind: FileType) -> String {
    let extension = kind.extension();
    if name.ends_with(extension) {
        name.to_string()
    } else {
        format!("{name}{extension}")
    }
}
