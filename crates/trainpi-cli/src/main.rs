use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use trainpi_core::plan::CourseStatus;
use trainpi_core::snapshot::{ProgressPayload, ProgressType};
use trainpi_core::user::UserIdentity;
use trainpi_infrastructure::{ConfigService, TrainpiPaths};

mod commands;
mod context;
mod logging;

use context::AppContext;

#[derive(Parser)]
#[command(name = "trainpi")]
#[command(about = "TrainPi - career matching and learning plans", long_about = None)]
struct Cli {
    /// User id whose snapshot to use (guest when absent)
    #[arg(long, global = true)]
    user: Option<String>,

    /// Directory holding snapshot files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct Selections {
    /// Interest tag (repeatable)
    #[arg(long = "interest")]
    interests: Vec<String>,

    /// Skill (repeatable)
    #[arg(long = "skill")]
    skills: Vec<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account and seed a starter plan
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: Option<String>,
    },
    /// Sign in (creates the account if needed)
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Rank careers for the given selections
    Match {
        #[command(flatten)]
        selections: Selections,
    },
    /// Preview, save or show a learning plan
    Plan {
        #[command(subcommand)]
        action: PlanAction,
    },
    /// Set the status of a course in the saved plan
    Course {
        course_id: String,
        /// not_started, in_progress or completed
        status: CourseStatus,
    },
    /// Show the synchronized dashboard snapshot
    Dashboard,
    /// Manage lessons
    Lessons {
        #[command(subcommand)]
        action: LessonAction,
    },
    /// Report lesson or course progress
    Progress {
        #[arg(long)]
        lesson_id: u64,
        #[arg(long = "type", value_enum, default_value_t = ProgressKind::Lesson)]
        kind: ProgressKind,
        #[arg(long)]
        completion: f64,
        #[arg(long)]
        minutes: Option<u32>,
    },
    /// List or clear attendance exceptions
    Exceptions {
        #[command(subcommand)]
        action: ExceptionAction,
    },
}

#[derive(Subcommand)]
enum PlanAction {
    /// Build a plan without saving it
    Preview {
        /// Career path; defaults to the best match
        #[arg(long)]
        career: Option<String>,
        #[command(flatten)]
        selections: Selections,
    },
    /// Build a plan and save it with the selections
    Save {
        #[arg(long)]
        career: Option<String>,
        #[command(flatten)]
        selections: Selections,
    },
    /// Show stored selections, matches and plan
    Show,
}

#[derive(Subcommand)]
enum LessonAction {
    List,
    Get { id: u64 },
    /// Insert or replace a lesson read from a JSON file
    Upsert { file: PathBuf },
}

#[derive(Subcommand)]
enum ExceptionAction {
    List,
    Clear { id: u64 },
}

#[derive(Clone, Copy, ValueEnum)]
enum ProgressKind {
    Lesson,
    Career,
    Quiz,
    Course,
}

impl From<ProgressKind> for ProgressType {
    fn from(kind: ProgressKind) -> Self {
        match kind {
            ProgressKind::Lesson => ProgressType::Lesson,
            ProgressKind::Career => ProgressType::Career,
            ProgressKind::Quiz => ProgressType::Quiz,
            ProgressKind::Course => ProgressType::Course,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrainpiPaths::new(None);
    let config_service = match cli.config.clone() {
        Some(path) => ConfigService::with_path(Some(path)),
        None => ConfigService::new(),
    };
    let config = config_service.get_config();
    let _log_guard = logging::init(&config.logging, &paths)?;

    let ctx = AppContext::new(&config, &paths, cli.data_dir.clone())?;
    let identity = match cli.user.as_deref() {
        Some(id) => UserIdentity::from_auth(true, Some(id.into())),
        None => UserIdentity::Guest,
    };

    match cli.command {
        Commands::Register {
            email,
            password,
            name,
        } => commands::account::register(&ctx, &email, &password, name.as_deref()).await?,
        Commands::Login { email, password } => {
            commands::account::login(&ctx, &email, &password).await?
        }
        Commands::Match { selections } => {
            commands::career::discover(&ctx, &selections.interests, &selections.skills).await?
        }
        Commands::Plan { action } => match action {
            PlanAction::Preview { career, selections } => {
                commands::career::preview(
                    &ctx,
                    career.as_deref(),
                    &selections.interests,
                    &selections.skills,
                )
                .await?
            }
            PlanAction::Save { career, selections } => {
                commands::career::save(
                    &ctx,
                    &identity,
                    career.as_deref(),
                    &selections.interests,
                    &selections.skills,
                )
                .await?
            }
            PlanAction::Show => commands::career::show(&ctx, &identity)?,
        },
        Commands::Course { course_id, status } => {
            commands::career::update_course(&ctx, &identity, &course_id, status)?
        }
        Commands::Dashboard => commands::activity::dashboard(&ctx, &identity)?,
        Commands::Lessons { action } => match action {
            LessonAction::List => commands::activity::list_lessons(&ctx, &identity).await?,
            LessonAction::Get { id } => commands::activity::get_lesson(&ctx, &identity, id).await?,
            LessonAction::Upsert { file } => {
                commands::activity::upsert_lesson(&ctx, &identity, &file).await?
            }
        },
        Commands::Progress {
            lesson_id,
            kind,
            completion,
            minutes,
        } => {
            let payload = ProgressPayload {
                lesson_id,
                progress_type: kind.into(),
                completion_percentage: completion,
                time_spent_minutes: minutes,
            };
            commands::activity::progress(&ctx, &identity, &payload).await?
        }
        Commands::Exceptions { action } => match action {
            ExceptionAction::List => commands::activity::list_exceptions(&ctx, &identity).await?,
            ExceptionAction::Clear { id } => {
                commands::activity::clear_exception(&ctx, &identity, id).await?
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plan_save() {
        let cli = Cli::try_parse_from([
            "trainpi",
            "--user",
            "7",
            "plan",
            "save",
            "--career",
            "Data Scientist",
            "--interest",
            "Data",
            "--skill",
            "Python",
            "--skill",
            "SQL",
        ])
        .unwrap();

        assert_eq!(cli.user.as_deref(), Some("7"));
        match cli.command {
            Commands::Plan {
                action: PlanAction::Save { career, selections },
            } => {
                assert_eq!(career.as_deref(), Some("Data Scientist"));
                assert_eq!(selections.skills, vec!["Python", "SQL"]);
            }
            _ => panic!("expected plan save"),
        }
    }

    #[test]
    fn test_parse_course_status() {
        let cli = Cli::try_parse_from(["trainpi", "course", "course-ds-1", "completed"]).unwrap();
        match cli.command {
            Commands::Course { course_id, status } => {
                assert_eq!(course_id, "course-ds-1");
                assert_eq!(status, CourseStatus::Completed);
            }
            _ => panic!("expected course"),
        }
    }
}
