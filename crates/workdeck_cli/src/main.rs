//! Workdeck command-line entry point.
//!
//! # Responsibility
//! - Load the workspace from configuration and answer one read-only command.
//! - Keep output plain text and deterministic.

use clap::{Parser, Subcommand};
use log::info;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;
use workdeck_core::{
    init_from_config, search_all, search_project, CoreConfig, Domain, FileType, SearchHit,
    SearchQuery, WorkspacePath, WorkspaceStore,
};

#[derive(Debug, Parser)]
#[command(name = "workdeck", version, about = "Browse and search a Workdeck workspace")]
struct Cli {
    /// Overrides WORKDECK_LOG_LEVEL.
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// Overrides WORKDECK_LOG_DIR; must be absolute.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Prints domains, projects, folders and files.
    Tree {
        /// Restricts output to one domain, by name or `/domain` path.
        domain: Option<String>,
    },
    /// Prints one file addressed as /domain/project/folder/file.
    Show { path: String },
    /// Searches file titles and content.
    Search {
        query: String,
        /// Restricts the search to one project, as /domain/project.
        #[arg(long)]
        project: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
        /// One of markdown|json|text.
        #[arg(long, value_parser = parse_kind)]
        kind: Option<FileType>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = CoreConfig::from_env();
    apply_overrides(&mut config, &cli);
    if let Err(err) = init_from_config(&config) {
        eprintln!("workdeck: logging disabled: {err}");
    }

    let store = match config.build_store() {
        Ok(store) => store,
        Err(err) => {
            eprintln!("workdeck: {err}");
            return ExitCode::FAILURE;
        }
    };
    info!("event=cli_start module=cli status=ok");

    match run(&store, &cli.command) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("workdeck: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Command-line flags take precedence over environment values.
fn apply_overrides(config: &mut CoreConfig, cli: &Cli) {
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(dir) = &cli.log_dir {
        config.log_dir = Some(dir.clone());
    }
}

fn run(store: &WorkspaceStore, command: &Command) -> Result<String, String> {
    match command {
        Command::Tree { domain } => match domain {
            Some(raw) => {
                let name = domain_key(raw);
                store
                    .domain(&name)
                    .map(render_domain)
                    .ok_or_else(|| format!("domain `{name}` not found"))
            }
            None => Ok(store.domains().map(render_domain).collect()),
        },
        Command::Show { path } => store
            .file_at(path)
            .map(|located| format!("{}\n\n{}\n", located.path, located.file.content))
            .ok_or_else(|| format!("file `{path}` not found")),
        Command::Search {
            query,
            project,
            limit,
            kind,
        } => {
            let query = SearchQuery {
                text: query.clone(),
                kind: *kind,
                limit: *limit,
            };
            let hits = match project.as_deref() {
                None => search_all(store, &query),
                Some(raw) => match WorkspacePath::parse(raw) {
                    Some(WorkspacePath::Project { domain, project }) => {
                        search_project(store, &domain, &project, &query)
                    }
                    _ => return Err(format!("`{raw}` is not a /domain/project path")),
                },
            };
            Ok(render_hits(&hits))
        }
    }
}

/// Accepts a bare domain name or any workspace path under it.
fn domain_key(raw: &str) -> String {
    WorkspacePath::parse(raw)
        .map(|path| path.domain().to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn render_domain(domain: &Domain) -> String {
    let mut out = format!("{}\n", domain.name);
    for project in &domain.projects {
        let _ = writeln!(out, "  {} ({})", project.name, project.slug());
        for folder in &project.folders {
            let _ = writeln!(out, "    {}/", folder.name);
            for file in &folder.files {
                let _ = writeln!(out, "      {} [{}]", file.title, file.kind.as_str());
            }
        }
    }
    out
}

fn render_hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return "No results.\n".to_string();
    }

    let mut out = String::new();
    for hit in hits {
        let _ = writeln!(out, "{}  {}", hit.title, hit.path);
        if let Some(breadcrumb) = &hit.breadcrumb {
            let _ = writeln!(out, "  {breadcrumb}");
        }
        let _ = writeln!(out, "  {}", hit.preview.replace('\n', " "));
    }
    out
}

fn parse_kind(raw: &str) -> Result<FileType, String> {
    FileType::parse(&raw.to_ascii_lowercase())
        .ok_or_else(|| format!("unknown file type `{raw}`; expected markdown|json|text"))
}

#[cfg(test)]
mod tests {
    use super::{apply_overrides, domain_key, parse_kind, run, Cli, Command};
    use clap::Parser;
    use std::path::PathBuf;
    use workdeck_core::{CoreConfig, FileType, WorkspaceStore};

    fn seeded() -> WorkspaceStore {
        WorkspaceStore::with_seed().expect("seed should load")
    }

    #[test]
    fn tree_renders_one_domain() {
        let output = run(
            &seeded(),
            &Command::Tree {
                domain: Some("design".to_string()),
            },
        )
        .expect("design should render");
        assert!(output.starts_with("design\n"));
        assert!(output.contains("  Website Redesign (website-redesign)"));
        assert!(output.contains("      homepage.md [markdown]"));
    }

    #[test]
    fn show_prints_file_content() {
        let output = run(
            &seeded(),
            &Command::Show {
                path: "/somanath/hackathon/planning/idea.md".to_string(),
            },
        )
        .expect("idea.md should render");
        assert!(output.contains("# Big Idea"));

        let missing = run(
            &seeded(),
            &Command::Show {
                path: "/somanath/hackathon".to_string(),
            },
        );
        assert!(missing.is_err());
    }

    #[test]
    fn search_accepts_project_scope() {
        let cli = Cli::try_parse_from([
            "workdeck",
            "search",
            "real-time",
            "--project",
            "/somanath/hackathon",
            "--kind",
            "Text",
        ])
        .expect("arguments should parse");

        let output = run(&seeded(), &cli.command).expect("search should run");
        assert!(output.starts_with("competitors.txt  /somanath/hackathon/research/competitors.txt"));
        assert!(!output.contains("idea.md"));
    }

    #[test]
    fn search_rejects_non_project_scope() {
        let command = Command::Search {
            query: "idea".to_string(),
            project: Some("/somanath".to_string()),
            limit: None,
            kind: None,
        };
        assert!(run(&seeded(), &command).is_err());
    }

    #[test]
    fn flags_override_environment_config() {
        let mut config = CoreConfig::from_lookup(|key| match key {
            "WORKDECK_LOG_LEVEL" => Some("error".to_string()),
            "WORKDECK_LOG_DIR" => Some("/var/log/workdeck".to_string()),
            _ => None,
        });
        let cli = Cli::try_parse_from([
            "workdeck",
            "--log-level",
            "warn",
            "--log-dir",
            "/x",
            "tree",
        ])
        .expect("arguments should parse");

        apply_overrides(&mut config, &cli);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.log_dir, Some(PathBuf::from("/x")));
        assert!(config.load_seed);
    }

    #[test]
    fn environment_config_survives_without_flags() {
        let mut config = CoreConfig::from_lookup(|key| {
            (key == "WORKDECK_LOG_LEVEL").then(|| "error".to_string())
        });
        let cli = Cli::try_parse_from(["workdeck", "tree"]).expect("arguments should parse");

        apply_overrides(&mut config, &cli);
        assert_eq!(config.log_level, "error");
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn tree_accepts_domain_path() {
        assert_eq!(domain_key("/design/website-redesign"), "design");
        assert_eq!(domain_key("design"), "design");

        let output = run(
            &seeded(),
            &Command::Tree {
                domain: Some("/somanath".to_string()),
            },
        )
        .expect("somanath should render");
        assert!(output.starts_with("somanath\n"));
    }

    #[test]
    fn parse_kind_is_case_insensitive() {
        assert_eq!(parse_kind("JSON"), Ok(FileType::Json));
        assert!(parse_kind("yaml").is_err());
    }
}
