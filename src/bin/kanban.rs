//! Command-line front end for a persisted Kanban board.
//!
//! Usage:
//!
//! ```text
//! kanban show
//! kanban add <column> <title> [description]
//! kanban move <task> <drop-target>
//! kanban edit <task> <title> [description]
//! kanban delete <task>
//! ```
//!
//! `move` takes the same drop target a pointer gesture would report: a task
//! id (insert before that task) or a column id (append to that column).
//! Settings come from the JSON file named by `KANBAN_CONFIG`; see
//! [`kanban::config`].

use kanban::board::adapters::{FileSnapshotStore, UuidTaskIds};
use kanban::board::domain::{AppState, BoardDomainError, TaskId};
use kanban::board::ports::SnapshotStoreError;
use kanban::board::services::{
    BoardService, BoardServiceError, CreateTaskRequest, EditTaskRequest,
};
use kanban::config::{ConfigError, KanbanConfig};
use kanban::telemetry::{TelemetryError, init_tracing};
use mockable::DefaultClock;
use std::env;
use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Service = BoardService<FileSnapshotStore, DefaultClock, UuidTaskIds>;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("storage unavailable: {0}")]
    Storage(#[from] SnapshotStoreError),
    #[error(transparent)]
    Service(#[from] BoardServiceError),
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

#[derive(Debug)]
enum Command {
    Show,
    Add {
        column: String,
        title: String,
        description: Option<String>,
    },
    Move {
        task: String,
        target: String,
    },
    Edit {
        task: String,
        title: String,
        description: Option<String>,
    },
    Delete {
        task: String,
    },
}

impl Command {
    fn parse(args: &[String]) -> Result<Self, CliError> {
        match args {
            [cmd] if cmd == "show" => Ok(Self::Show),
            [cmd, column, title, rest @ ..] if cmd == "add" && rest.len() <= 1 => Ok(Self::Add {
                column: column.clone(),
                title: title.clone(),
                description: rest.first().cloned(),
            }),
            [cmd, task, target] if cmd == "move" => Ok(Self::Move {
                task: task.clone(),
                target: target.clone(),
            }),
            [cmd, task, title, rest @ ..] if cmd == "edit" && rest.len() <= 1 => Ok(Self::Edit {
                task: task.clone(),
                title: title.clone(),
                description: rest.first().cloned(),
            }),
            [cmd, task] if cmd == "delete" => Ok(Self::Delete { task: task.clone() }),
            _ => Err(CliError::InvalidArgs(
                "expected show, add <column> <title> [description], move <task> <target>, \
                 edit <task> <title> [description], or delete <task>"
                    .to_owned(),
            )),
        }
    }
}

fn main() -> Result<(), BoxError> {
    let config = KanbanConfig::from_env().map_err(CliError::from)?;
    init_tracing(&config.log_filter).map_err(CliError::from)?;
    let args: Vec<String> = env::args().skip(1).collect();
    let command = Command::parse(&args)?;
    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::RuntimeInit)?;
    runtime.block_on(run(config, command)).map_err(Into::into)
}

async fn run(config: KanbanConfig, command: Command) -> Result<(), CliError> {
    let store = FileSnapshotStore::open(&config.storage_dir)?;
    let service: Service = BoardService::open(
        Arc::new(store),
        Arc::new(DefaultClock),
        Arc::new(UuidTaskIds),
        config.storage_key,
    )
    .await;

    let mut out = io::stdout().lock();
    match command {
        Command::Show => {}
        Command::Add {
            column,
            title,
            description,
        } => {
            let mut request = CreateTaskRequest::new(column.as_str(), title);
            if let Some(description) = description {
                request = request.with_description(description);
            }
            match service.create_task(request).await? {
                Some(task_id) => writeln!(out, "added {task_id}")?,
                None => writeln!(out, "no column named '{column}'")?,
            }
        }
        Command::Move { task, target } => {
            let task_id = TaskId::new(task)?;
            if !service.drop_task(&task_id, &target).await {
                writeln!(out, "nothing moved")?;
            }
        }
        Command::Edit {
            task,
            title,
            description,
        } => {
            let task_id = TaskId::new(task)?;
            let current = service.snapshot().await;
            let description = description.unwrap_or_else(|| {
                current
                    .task(&task_id)
                    .and_then(|task| task.description())
                    .unwrap_or_default()
                    .to_owned()
            });
            let request = EditTaskRequest::new(title, description);
            if !service.edit_task(&task_id, request).await? {
                writeln!(out, "nothing changed")?;
            }
        }
        Command::Delete { task } => {
            let task_id = TaskId::new(task)?;
            if !service.delete_task(&task_id).await {
                writeln!(out, "no task '{task_id}' on the board")?;
            }
        }
    }

    render(&mut out, &*service.snapshot().await)?;
    Ok(())
}

fn render(out: &mut impl Write, state: &AppState) -> io::Result<()> {
    let Some(board) = state.active_board() else {
        return writeln!(out, "No board is active yet.");
    };
    writeln!(out, "# {}", board.name())?;
    for column in state.board_columns(board.id()) {
        writeln!(out, "\n## {} ({})", column.title(), column.id())?;
        let tasks = state.column_tasks(column.id());
        if tasks.is_empty() {
            writeln!(out, "  (empty)")?;
        }
        for task in tasks {
            writeln!(out, "  - {} [{}]", task.title(), task.id())?;
            if let Some(description) = task.description() {
                writeln!(out, "      {description}")?;
            }
        }
    }
    Ok(())
}
