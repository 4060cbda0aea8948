use workdeck_core::{
    FileType, NewFileRequest, WorkspacePath, WorkspaceService, WorkspaceServiceError,
    WorkspaceStore,
};

fn file_request(folder: &str, name: &str, kind: FileType, content: &str) -> NewFileRequest {
    NewFileRequest {
        folder: folder.to_string(),
        name: name.to_string(),
        kind,
        content: content.to_string(),
    }
}

#[test]
fn open_domain_normalizes_and_creates_record() {
    let mut store = WorkspaceStore::new();
    let mut service = WorkspaceService::new(&mut store);

    assert_eq!(service.open_domain("  Acme ").unwrap(), "acme");
    assert_eq!(
        service.open_domain("   ").unwrap_err(),
        WorkspaceServiceError::DomainRequired
    );

    assert_eq!(store.current_domain(), Some("acme"));
    assert!(store.domain("acme").is_some());
}

#[test]
fn create_project_returns_slug_path() {
    let mut store = WorkspaceStore::new();
    let mut service = WorkspaceService::new(&mut store);

    let path = service.create_project("acme", "Q3 Launch Plan").unwrap();
    assert_eq!(path.to_string(), "/acme/q3-launch-plan");

    let err = service.create_project("acme", " ").unwrap_err();
    assert_eq!(err.to_string(), "Project name is required");

    assert_eq!(
        store.project("acme", "q3-launch-plan").unwrap().name,
        "Q3 Launch Plan"
    );
}

#[test]
fn create_folder_requires_name_and_project() {
    let mut store = WorkspaceStore::new();
    let mut service = WorkspaceService::new(&mut store);
    service.create_project("acme", "Ops").unwrap();

    let err = service.create_folder("acme", "ops", "").unwrap_err();
    assert_eq!(err.to_string(), "Folder name is required");

    let err = service.create_folder("acme", "missing", "Docs").unwrap_err();
    assert!(matches!(err, WorkspaceServiceError::ProjectNotFound { .. }));

    service.create_folder("acme", "ops", "Run Books").unwrap();
    assert!(store.project("acme", "ops").unwrap().folder("run-books").is_some());
}

#[test]
fn create_file_completes_title_and_default_content() {
    let mut store = WorkspaceStore::new();
    let mut service = WorkspaceService::new(&mut store);
    service.create_project("acme", "Ops").unwrap();
    service.create_folder("acme", "ops", "Run Books").unwrap();

    let path = service
        .create_file(
            "acme",
            "ops",
            &file_request("Run Books", "Deploy Notes", FileType::Markdown, ""),
        )
        .unwrap();
    assert_eq!(
        path,
        WorkspacePath::file("acme", "ops", "run-books", "deploy-notes.md")
    );

    service
        .create_file(
            "acme",
            "ops",
            &file_request("run-books", "config.json", FileType::Json, "{}"),
        )
        .unwrap();

    let located = store.file_at("/acme/ops/run-books/deploy-notes.md").unwrap();
    assert_eq!(located.file.title, "Deploy Notes.md");
    assert_eq!(located.file.content, "# New Document\n\nStart writing here...");

    let config = store.file("acme", "ops", "run-books", "config.json").unwrap();
    assert_eq!(config.file.content, "{}");
    assert_eq!(config.file.kind, FileType::Json);
}

#[test]
fn create_file_validates_inputs() {
    let mut store = WorkspaceStore::new();
    let mut service = WorkspaceService::new(&mut store);
    service.create_project("acme", "Ops").unwrap();
    service.create_folder("acme", "ops", "Docs").unwrap();

    let err = service
        .create_file("acme", "ops", &file_request("docs", " ", FileType::Text, ""))
        .unwrap_err();
    assert_eq!(err.to_string(), "File name is required");

    let err = service
        .create_file("acme", "ops", &file_request("", "a", FileType::Text, ""))
        .unwrap_err();
    assert_eq!(err.to_string(), "Please select a folder");

    let err = service
        .create_file("acme", "ops", &file_request("missing", "a", FileType::Text, ""))
        .unwrap_err();
    assert!(matches!(err, WorkspaceServiceError::FolderNotFound { .. }));

    let err = service
        .create_file("acme", "nope", &file_request("docs", "a", FileType::Text, ""))
        .unwrap_err();
    assert!(matches!(err, WorkspaceServiceError::ProjectNotFound { .. }));

    assert!(store.project("acme", "ops").unwrap().folder("docs").unwrap().files.is_empty());
}
