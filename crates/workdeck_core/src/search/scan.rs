//! Linear substring search over the workspace tree.
//!
//! # Responsibility
//! - Match files by case-insensitive substring on title or content.
//! - Shape hits with a preview window and a canonical path.
//!
//! # Invariants
//! - Hits follow tree order: domain name, then project, folder and file
//!   insertion order.
//! - Queries shorter than [`MIN_QUERY_CHARS`] after trimming return no hits.
//! - Preview offsets are counted in chars, never bytes.

use crate::model::path::WorkspacePath;
use crate::model::workspace::{Domain, File, FileType, Folder, Project};
use crate::repo::workspace_store::WorkspaceStore;
use log::debug;

/// Shortest trimmed query that triggers a search.
pub const MIN_QUERY_CHARS: usize = 2;
/// Context kept before the first content match.
pub const PREVIEW_CHARS_BEFORE: usize = 20;
/// Context kept after the end of the first content match.
pub const PREVIEW_CHARS_AFTER: usize = 60;
/// Leading content shown when only the title matches.
pub const TITLE_ONLY_PREVIEW_CHARS: usize = 80;

const ELLIPSIS: &str = "...";

/// Search options for tree scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// User query text, matched as typed (case-insensitive).
    pub text: String,
    /// Optional file type filter.
    pub kind: Option<FileType>,
    /// Maximum number of hits; `None` means unbounded.
    pub limit: Option<u32>,
}

impl SearchQuery {
    /// Creates an unbounded query with no type filter.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
            limit: None,
        }
    }
}

/// Single file hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub kind: FileType,
    pub preview: String,
    pub path: WorkspacePath,
    /// `"{domain} / {project} / {folder}"`; set only by [`search_all`].
    pub breadcrumb: Option<String>,
}

/// Searches every file of every domain.
pub fn search_all(store: &WorkspaceStore, query: &SearchQuery) -> Vec<SearchHit> {
    let Some(needle) = Needle::from_query(query) else {
        return Vec::new();
    };

    let mut hits = Vec::new();
    'domains: for domain in store.domains() {
        for project in &domain.projects {
            for folder in &project.folders {
                for file in &folder.files {
                    if needle.is_full(hits.len()) {
                        break 'domains;
                    }
                    if let Some(mut hit) = match_file(&needle, domain, project, folder, file) {
                        hit.breadcrumb = Some(format!(
                            "{} / {} / {}",
                            domain.name, project.name, folder.name
                        ));
                        hits.push(hit);
                    }
                }
            }
        }
    }

    debug!(
        "event=search_all module=search status=ok hits={}",
        hits.len()
    );
    hits
}

/// Searches the files of one project.
///
/// Returns an empty list when the domain or project does not exist.
pub fn search_project(
    store: &WorkspaceStore,
    domain_name: &str,
    project_slug: &str,
    query: &SearchQuery,
) -> Vec<SearchHit> {
    let Some(needle) = Needle::from_query(query) else {
        return Vec::new();
    };
    let Some(domain) = store.domain(domain_name) else {
        return Vec::new();
    };
    let Some(project) = domain.project(project_slug) else {
        debug!("event=search_project module=search status=not_found project={project_slug}");
        return Vec::new();
    };

    let mut hits = Vec::new();
    'folders: for folder in &project.folders {
        for file in &folder.files {
            if needle.is_full(hits.len()) {
                break 'folders;
            }
            if let Some(hit) = match_file(&needle, domain, project, folder, file) {
                hits.push(hit);
            }
        }
    }

    debug!(
        "event=search_project module=search status=ok hits={}",
        hits.len()
    );
    hits
}

/// Builds the preview shown for a file whose content or title matched.
///
/// With a content match the window spans [`PREVIEW_CHARS_BEFORE`] chars
/// before the match and [`PREVIEW_CHARS_AFTER`] chars after its end, with
/// `...` on each clipped side. Without one, the first
/// [`TITLE_ONLY_PREVIEW_CHARS`] chars are shown followed by `...`.
pub fn build_preview(content: &str, query: &str) -> String {
    let needle = lowercase_chars(query);
    preview_for(content, &needle, find_case_insensitive(content, &needle))
}

struct Needle {
    lowered: String,
    chars: Vec<char>,
    kind: Option<FileType>,
    limit: Option<usize>,
}

impl Needle {
    fn from_query(query: &SearchQuery) -> Option<Self> {
        if query.text.trim().chars().count() < MIN_QUERY_CHARS {
            return None;
        }
        if query.limit == Some(0) {
            return None;
        }
        let lowered = query.text.to_lowercase();
        Some(Self {
            chars: lowered.chars().collect(),
            lowered,
            kind: query.kind,
            limit: query.limit.map(|value| value as usize),
        })
    }

    fn is_full(&self, found: usize) -> bool {
        self.limit.is_some_and(|limit| found >= limit)
    }
}

fn match_file(
    needle: &Needle,
    domain: &Domain,
    project: &Project,
    folder: &Folder,
    file: &File,
) -> Option<SearchHit> {
    if needle.kind.is_some_and(|kind| kind != file.kind) {
        return None;
    }

    let title_hit = file.title.to_lowercase().contains(&needle.lowered);
    let content_offset = find_case_insensitive(&file.content, &needle.chars);
    if !title_hit && content_offset.is_none() {
        return None;
    }

    Some(SearchHit {
        title: file.title.clone(),
        kind: file.kind,
        preview: preview_for(&file.content, &needle.chars, content_offset),
        path: WorkspacePath::file(
            domain.name.as_str(),
            project.slug(),
            folder.slug(),
            file.slug(),
        ),
        breadcrumb: None,
    })
}

fn preview_for(content: &str, needle: &[char], offset: Option<usize>) -> String {
    let chars = content.chars().collect::<Vec<_>>();
    let Some(offset) = offset else {
        let mut preview = chars
            .iter()
            .take(TITLE_ONLY_PREVIEW_CHARS)
            .collect::<String>();
        preview.push_str(ELLIPSIS);
        return preview;
    };

    let start = offset.saturating_sub(PREVIEW_CHARS_BEFORE);
    let end = (offset + needle.len() + PREVIEW_CHARS_AFTER).min(chars.len());
    let mut preview = String::new();
    if start > 0 {
        preview.push_str(ELLIPSIS);
    }
    preview.extend(&chars[start..end]);
    if end < chars.len() {
        preview.push_str(ELLIPSIS);
    }
    preview
}

/// Returns the char offset in `haystack` where the lowercased needle starts.
fn find_case_insensitive(haystack: &str, needle: &[char]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    // One source char may lowercase to several chars; keep the source index.
    let mut lowered = Vec::new();
    let mut origins = Vec::new();
    for (index, ch) in haystack.chars().enumerate() {
        for lower in ch.to_lowercase() {
            lowered.push(lower);
            origins.push(index);
        }
    }

    lowered
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|position| origins[position])
}

fn lowercase_chars(value: &str) -> Vec<char> {
    value.to_lowercase().chars().collect()
}
