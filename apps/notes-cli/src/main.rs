use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use notes_client::{
    compose::Compose,
    dashboard::{
        Dashboard, EditDraft, DELETE_FAILED, DETAIL_FAILED, LOAD_FAILED, UPDATE_FAILED,
    },
    register::RegisterForm,
    ClientConfig, ClientError, Note, NotesApiClient, SessionStore, SummarizerClient,
};
use runtime::{LoggingConfig, Section};

const CREATE_FAILED: &str = "Failed to create note";

/// Notes CLI - manage your notes from the terminal
#[derive(Parser)]
#[command(name = "notes-cli")]
#[command(about = "Notes CLI - manage your notes from the terminal")]
#[command(version)]
struct Cli {
    /// Path to client configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the notes server (overrides config)
    #[arg(long)]
    api_url: Option<String>,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account
    Register {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        password: String,
        #[arg(long, default_value = "")]
        confirm_password: String,
    },
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Log out and forget the session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// List your notes, newest first
    List {
        /// Only show notes whose title contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one note
    Show { id: i32 },
    /// Create a note
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        /// Save a generated summary instead of the full content
        #[arg(long)]
        summarize: bool,
    },
    /// Edit a note
    Edit {
        id: i32,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        /// Replace the content with a generated summary
        #[arg(long)]
        summarize: bool,
    },
    /// Delete a note
    Delete {
        id: i32,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Console logging stays off unless asked for so command output is clean.
fn init_logging(verbose: u8) {
    let console_level = match verbose {
        0 => "off",
        1 => "debug",
        _ => "trace",
    };
    let mut cfg: LoggingConfig = HashMap::new();
    cfg.insert(
        "default".to_string(),
        Section {
            console_level: console_level.to_string(),
            file: String::new(),
            file_level: String::new(),
            max_backups: None,
            max_size_mb: None,
        },
    );
    runtime::logging::init_logging_from_config(&cfg, Path::new("."));
}

struct Ctx {
    config: ClientConfig,
    api: NotesApiClient,
    store: SessionStore,
}

impl Ctx {
    fn new(cli: &Cli) -> Result<Self> {
        let mut config = ClientConfig::load(cli.config.as_deref())?;
        if let Some(url) = &cli.api_url {
            config.api_base_url = url.clone();
        }
        let api = NotesApiClient::from_config(&config)?;
        let store = SessionStore::new(config.session_path()?);
        tracing::debug!(api = api.base_url(), session = %store.path().display(), "client ready");
        Ok(Self { config, api, store })
    }

    fn summarizer(&self) -> Result<SummarizerClient> {
        Ok(SummarizerClient::from_config(&self.config)?)
    }

    async fn dashboard(&self) -> Result<Dashboard<'_>> {
        let session = self.store.load()?;
        Dashboard::load(&self.api, session)
            .await
            .map_err(|e| notify(LOAD_FAILED, e))
    }
}

/// One-line notification for a failed action. Messages the user can act on
/// are shown as they are; everything else is prefixed with the action.
fn notify(action: &str, err: ClientError) -> anyhow::Error {
    match err {
        ClientError::Validation { .. } | ClientError::NotLoggedIn => anyhow::Error::new(err),
        ClientError::Unauthenticated(_) => anyhow::Error::new(ClientError::NotLoggedIn),
        other => anyhow::Error::new(other).context(action.to_string()),
    }
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = Ctx::new(&cli)?;

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
            confirm_password,
        } => {
            let form = RegisterForm {
                name,
                email,
                password,
                confirm_password,
            };
            let user = form.submit(&ctx.api).await?;
            println!("User registered successfully: {} <{}>", user.name, user.email);
        }

        Commands::Login { email, password } => {
            let session = ctx.api.login(&email, &password).await?;
            ctx.store.save(&session)?;
            println!("Login successful. Welcome, {}!", session.user.name);
        }

        Commands::Logout => {
            if let Some(session) = ctx.store.load()? {
                if let Err(e) = ctx.api.logout(&session).await {
                    tracing::warn!(error = %e, "server logout failed; clearing local session anyway");
                }
            }
            ctx.store.clear()?;
            println!("Logged out successfully");
        }

        Commands::Whoami => {
            let session = ctx.store.require()?;
            let user = ctx
                .api
                .me(&session)
                .await
                .map_err(|e| notify("Failed to load user", e))?;
            println!("{} <{}>", user.name, user.email);
        }

        Commands::List { search } => {
            let mut dashboard = ctx.dashboard().await?;
            if let Some(q) = search {
                dashboard.set_query(q);
            }
            let visible = dashboard.visible();
            if visible.is_empty() {
                if dashboard.query().trim().is_empty() {
                    println!("No notes yet");
                } else {
                    println!("No notes match '{}'", dashboard.query().trim());
                }
            }
            for note in visible {
                println!(
                    "#{:<5} {}  ({})",
                    note.id,
                    note.title,
                    note.updated_at.format("%Y-%m-%d %H:%M")
                );
            }
        }

        Commands::Show { id } => {
            let dashboard = ctx.dashboard().await?;
            let note = dashboard
                .view(id)
                .await
                .map_err(|e| notify(DETAIL_FAILED, e))?;
            print_note(&note);
        }

        Commands::Create {
            title,
            content,
            summarize,
        } => {
            let mut draft = Compose::new(title, content);
            draft.validate()?;
            if summarize {
                let summarizer = ctx.summarizer()?;
                match draft.generate_summary(&summarizer).await {
                    Ok(summary) => println!("Summary: {summary}"),
                    Err(e) => eprintln!("{e}"),
                }
            }
            let session = ctx.store.load()?;
            let note = draft
                .save(&ctx.api, session.as_ref())
                .await
                .map_err(|e| notify(CREATE_FAILED, e))?;
            println!("Note created successfully (#{})", note.id);
        }

        Commands::Edit {
            id,
            title,
            content,
            summarize,
        } => {
            if title.is_none() && content.is_none() && !summarize {
                bail!("Nothing to update: pass --title, --content or --summarize");
            }
            let mut dashboard = ctx.dashboard().await?;
            let current = dashboard
                .view(id)
                .await
                .map_err(|e| notify(DETAIL_FAILED, e))?;

            let mut draft = EditDraft::from(&current);
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(content) = content {
                draft.content = content;
            }
            if summarize {
                let summarizer = ctx.summarizer()?;
                if let Err(e) = draft.summarize(&summarizer).await {
                    eprintln!("{e}");
                }
            }

            let note = dashboard
                .edit(&draft)
                .await
                .map_err(|e| notify(UPDATE_FAILED, e))?;
            println!("Note updated successfully (#{})", note.id);
        }

        Commands::Delete { id, yes } => {
            let mut dashboard = ctx.dashboard().await?;
            if !yes {
                let title = dashboard
                    .notes()
                    .iter()
                    .find(|n| n.id == id)
                    .map(|n| format!(" \"{}\"", n.title))
                    .unwrap_or_default();
                if !confirm(&format!("Delete note #{id}{title}?"))? {
                    println!("Cancelled");
                    return Ok(());
                }
            }
            let message = dashboard
                .delete(id)
                .await
                .map_err(|e| notify(DELETE_FAILED, e))?;
            println!("{message}");
        }
    }

    Ok(())
}

fn print_note(note: &Note) {
    println!("#{} {}", note.id, note.title);
    println!(
        "created {}  updated {}",
        note.created_at.format("%Y-%m-%d %H:%M"),
        note.updated_at.format("%Y-%m-%d %H:%M")
    );
    println!();
    println!("{}", note.content);
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
