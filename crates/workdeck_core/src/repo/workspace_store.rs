//! In-memory workspace store.
//!
//! # Responsibility
//! - Own the domain -> project -> folder -> file tree for one process.
//! - Provide slug-addressed lookup and mutation over that tree.
//!
//! # Invariants
//! - Domains are keyed by their exact name; everything below is addressed by
//!   slug, and every lookup key is slugified before comparison.
//! - Failed lookups return `None`; mutations that find no target report
//!   `false` and leave the tree unchanged.
//! - Domain iteration order is lexicographic by name.

use crate::model::path::WorkspacePath;
use crate::model::slug::slug_matches;
use crate::model::workspace::{Credentials, Domain, File, Folder, Project};
use crate::repo::seed::{seed_domains, SeedError};
use log::debug;
use std::collections::BTreeMap;

/// File found by a store lookup, with its canonical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedFile<'store> {
    pub file: &'store File,
    pub path: WorkspacePath,
}

/// Process-local workspace tree.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceStore {
    domains: BTreeMap<String, Domain>,
    current_domain: Option<String>,
}

impl WorkspaceStore {
    /// Creates a store with no domains.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the built-in seed domains.
    pub fn with_seed() -> Result<Self, SeedError> {
        let store = Self::from_domains(seed_domains()?);
        debug!(
            "event=store_seed module=store status=ok domains={}",
            store.domains.len()
        );
        Ok(store)
    }

    /// Creates a store from explicit domain records; later duplicates win.
    pub fn from_domains(domains: impl IntoIterator<Item = Domain>) -> Self {
        Self {
            domains: domains
                .into_iter()
                .map(|domain| (domain.name.clone(), domain))
                .collect(),
            current_domain: None,
        }
    }

    pub fn domain(&self, name: &str) -> Option<&Domain> {
        self.domains.get(name)
    }

    /// Iterates all domains in name order.
    pub fn domains(&self) -> impl Iterator<Item = &Domain> {
        self.domains.values()
    }

    pub fn current_domain(&self) -> Option<&str> {
        self.current_domain.as_deref()
    }

    /// Marks `name` as the current domain, creating an empty record if unknown.
    pub fn set_current_domain(&mut self, name: &str) -> &Domain {
        self.current_domain = Some(name.to_string());
        self.domain_or_create(name)
    }

    /// Records sign-up credentials for `name`.
    ///
    /// Never clears projects: an existing record (for example one created by
    /// a first visit) keeps its tree and only the credential fields change.
    pub fn create_domain(&mut self, name: &str, credentials: Credentials) -> &Domain {
        let domain = self.domain_or_create(name);
        domain.password = Some(credentials.password);
        domain.email = Some(credentials.email);
        domain.phone = Some(credentials.phone);
        debug!("event=store_create_domain module=store status=ok");
        domain
    }

    /// Replaces contact fields. Returns `false` when the domain is unknown.
    pub fn update_profile(&mut self, name: &str, email: &str, phone: &str) -> bool {
        let Some(domain) = self.domains.get_mut(name) else {
            debug!("event=store_update_profile module=store status=not_found");
            return false;
        };
        domain.email = Some(email.to_string());
        domain.phone = Some(phone.to_string());
        true
    }

    /// Replaces the password. Returns `false` when the domain is unknown.
    pub fn update_password(&mut self, name: &str, new_password: &str) -> bool {
        let Some(domain) = self.domains.get_mut(name) else {
            debug!("event=store_update_password module=store status=not_found");
            return false;
        };
        domain.password = Some(new_password.to_string());
        true
    }

    pub fn project(&self, domain: &str, project_slug: &str) -> Option<&Project> {
        self.domains.get(domain)?.project(project_slug)
    }

    /// Appends a project, creating the domain record when absent.
    pub fn add_project(&mut self, domain: &str, project: Project) {
        self.domain_or_create(domain).projects.push(project);
        debug!("event=store_add_project module=store status=ok");
    }

    /// Appends a folder to a project.
    ///
    /// Returns `false` without touching the tree when the domain or project
    /// does not exist.
    pub fn add_folder(&mut self, domain: &str, project_slug: &str, folder: Folder) -> bool {
        let Some(project) = self.project_mut(domain, project_slug) else {
            debug!("event=store_add_folder module=store status=not_found project={project_slug}");
            return false;
        };
        project.folders.push(folder);
        true
    }

    /// Looks up one file through three nested slug searches.
    pub fn file(
        &self,
        domain: &str,
        project_slug: &str,
        folder_slug: &str,
        file_slug: &str,
    ) -> Option<LocatedFile<'_>> {
        let project = self.project(domain, project_slug)?;
        let folder = project.folder(folder_slug)?;
        let file = folder.file(file_slug)?;
        Some(LocatedFile {
            file,
            path: WorkspacePath::file(domain, project.slug(), folder.slug(), file.slug()),
        })
    }

    /// Looks up a file by its `/domain/project/folder/file` path.
    pub fn file_at(&self, path: &str) -> Option<LocatedFile<'_>> {
        match WorkspacePath::parse(path)? {
            WorkspacePath::File {
                domain,
                project,
                folder,
                file,
            } => self.file(&domain, &project, &folder, &file),
            _ => None,
        }
    }

    /// Appends a file to a folder addressed by slug or display name.
    ///
    /// Returns `false` when the domain, project or folder is missing.
    pub fn add_file(
        &mut self,
        domain: &str,
        project_slug: &str,
        folder_key: &str,
        file: File,
    ) -> bool {
        let Some(folder) = self.folder_mut(domain, project_slug, folder_key) else {
            debug!("event=store_add_file module=store status=not_found project={project_slug} folder={folder_key}");
            return false;
        };
        folder.files.push(file);
        true
    }

    /// Replaces the content of the file addressed by `path`.
    ///
    /// Malformed paths and missing nodes are silent no-ops returning `false`.
    pub fn update_file_content(&mut self, path: &str, content: impl Into<String>) -> bool {
        let Some(WorkspacePath::File {
            domain,
            project,
            folder,
            file,
        }) = WorkspacePath::parse(path)
        else {
            debug!("event=store_update_file module=store status=malformed_path");
            return false;
        };

        let Some(target) = self
            .folder_mut(&domain, &project, &folder)
            .and_then(|folder| folder.file_mut(&file))
        else {
            debug!("event=store_update_file module=store status=not_found");
            return false;
        };
        target.content = content.into();
        true
    }

    /// Removes every file in the folder whose title slug matches `file_key`.
    ///
    /// Returns whether anything was removed.
    pub fn delete_file(
        &mut self,
        domain: &str,
        project_slug: &str,
        folder_key: &str,
        file_key: &str,
    ) -> bool {
        let Some(folder) = self.folder_mut(domain, project_slug, folder_key) else {
            debug!("event=store_delete_file module=store status=not_found");
            return false;
        };
        let before = folder.files.len();
        folder
            .files
            .retain(|file| !slug_matches(&file.title, file_key));
        before != folder.files.len()
    }

    fn domain_or_create(&mut self, name: &str) -> &mut Domain {
        self.domains.entry(name.to_string()).or_insert_with(|| {
            debug!("event=store_create_empty_domain module=store status=ok");
            Domain::empty(name)
        })
    }

    fn project_mut(&mut self, domain: &str, project_slug: &str) -> Option<&mut Project> {
        self.domains.get_mut(domain)?.project_mut(project_slug)
    }

    fn folder_mut(
        &mut self,
        domain: &str,
        project_slug: &str,
        folder_key: &str,
    ) -> Option<&mut Folder> {
        self.project_mut(domain, project_slug)?
            .folder_mut(folder_key)
    }
}
