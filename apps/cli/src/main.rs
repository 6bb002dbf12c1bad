use std::{path::PathBuf, process::ExitCode, sync::Arc};

mod render;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    filter_mentors, filter_stories, BookingForm, Intent, MentorCard, MentorHubClient, MentorQuery,
    Page, SessionState, StoryCard, StoryComposer, StoryQuery, STORY_SHARED_NOTICE,
};
use serde::Serialize;
use shared::{
    domain::{CategoryFilter, MentorId, SessionKind, SortKey, StoryCategory},
    error::{ErrorBody, ServiceError},
    protocol::Credentials,
};
use storage::SeedStore;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mindful", about = "Browse mentors and community stories")]
struct Cli {
    /// Sign-in email.
    #[arg(long, global = true, default_value = "")]
    user: String,
    #[arg(long, global = true, default_value = "")]
    secret: String,
    /// Print JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    /// Directory holding mentors.json and stories.json.
    #[arg(long, global = true)]
    seed_dir: Option<PathBuf>,
    /// Log directives for stderr; RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_filter: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the mentor directory.
    Mentors {
        #[arg(long, default_value = "")]
        query: String,
        /// Exact specialty, e.g. "Anxiety"; "All" disables the facet.
        #[arg(long, default_value = "All")]
        specialty: String,
        #[arg(long, default_value = "rating")]
        sort: SortKey,
    },
    /// Search community stories.
    Stories {
        #[arg(long, default_value = "All")]
        category: CategoryFilter,
        #[arg(long, default_value = "")]
        query: String,
    },
    /// Show one mentor with sessions, reviews and time slots.
    Profile { mentor_id: i64 },
    /// Book a session; defaults to a video call on the first free slot.
    Book {
        mentor_id: i64,
        #[arg(long, default_value = "video")]
        session: SessionKind,
        /// Zero-based index into the mentor's time slots.
        #[arg(long)]
        slot: Option<usize>,
    },
    /// Share a story with the community.
    Share {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long, default_value = "Recovery")]
        category: StoryCategory,
        #[arg(long)]
        anonymous: bool,
        /// Comma separated.
        #[arg(long, default_value = "")]
        tags: String,
    },
}

#[derive(Serialize)]
struct ProfileOutput<'a> {
    mentor: &'a shared::domain::Mentor,
    details: &'a shared::domain::ProfileDetails,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&cli.log_filter))
        .with_writer(std::io::stderr)
        .init();

    let json = cli.json;
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ServiceError>() {
                Some(service) if json => {
                    let body = ErrorBody::from(service.clone());
                    match serde_json::to_string_pretty(&body) {
                        Ok(text) => println!("{text}"),
                        Err(_) => eprintln!("error: {}", service.message),
                    }
                }
                Some(service) => eprintln!("error: {}", service.message),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

async fn run(cli: Cli) -> Result<()> {
    let records = SeedStore::open(cli.seed_dir.as_deref()).context("loading seed records")?;
    let client = MentorHubClient::new(Arc::new(records));

    let identity = client
        .login(&Credentials::new(cli.user.trim(), cli.secret))
        .await?;
    let session = SessionState::default().reduce(Intent::LoginSucceeded(identity));
    let json = cli.json;

    match cli.command {
        Command::Mentors {
            query,
            specialty,
            sort,
        } => {
            let session = session.reduce(Intent::Navigate(Page::Mentors));
            tracing::debug!(page = ?session.page(), "listing mentors");
            let catalog = client.load_catalog().await?;
            let query = MentorQuery {
                text: query,
                specialty,
                sort,
            };
            let shown = filter_mentors(&catalog.mentors, &query);
            if json {
                let cards: Vec<MentorCard> = shown.into_iter().map(MentorCard::from).collect();
                print_json(&cards)?;
            } else {
                print!("{}", render::mentors(&shown, catalog.mentors.len()));
            }
        }
        Command::Stories { category, query } => {
            let session = session.reduce(Intent::Navigate(Page::Stories));
            tracing::debug!(page = ?session.page(), "listing stories");
            let catalog = client.load_catalog().await?;
            let shown = filter_stories(
                &catalog.stories,
                &StoryQuery {
                    category,
                    text: query,
                },
            );
            let cards: Vec<StoryCard> = shown.into_iter().map(StoryCard::from).collect();
            if json {
                print_json(&cards)?;
            } else {
                print!("{}", render::stories(&cards));
            }
        }
        Command::Profile { mentor_id } => {
            let mentor_id = MentorId(mentor_id);
            let mentor = client.mentor(mentor_id).await?;
            let session = session.reduce(Intent::OpenProfile(Some(mentor)));
            let mentor = session
                .profile_mentor()
                .ok_or_else(|| anyhow!("profile for mentor {mentor_id} could not be opened"))?;
            let details = client.profile_details(mentor_id).await?;
            if json {
                print_json(&ProfileOutput {
                    mentor,
                    details: &details,
                })?;
            } else {
                print!("{}", render::profile(mentor, &details));
            }
        }
        Command::Book {
            mentor_id,
            session: kind,
            slot,
        } => {
            let mentor_id = MentorId(mentor_id);
            let details = client.profile_details(mentor_id).await?;
            let mut form = BookingForm::default();
            form.open(&details);
            form.select_session(kind);
            if let Some(index) = slot {
                if !form.select_slot(&details, index) {
                    return Err(ServiceError::validation(format!(
                        "time slot {index} is booked or does not exist"
                    ))
                    .into());
                }
            }
            let request = form.submit(mentor_id, &details)?;
            let confirmation = client.book(&request).await?;
            form.complete(confirmation.mentor_id);
            if json {
                print_json(&confirmation)?;
            } else {
                print!("{}", render::booking(&confirmation));
            }
        }
        Command::Share {
            title,
            content,
            category,
            anonymous,
            tags,
        } => {
            let author = session
                .user()
                .cloned()
                .ok_or_else(|| anyhow!("no signed-in user"))?;
            let mut composer = StoryComposer::default();
            composer.open();
            composer.title = title;
            composer.content = content;
            composer.category = category;
            composer.is_anonymous = anonymous;
            composer.tags = tags;
            let draft = composer.submit()?;
            let story = client.share_story(&author, &draft).await?;
            let notice = composer.complete().unwrap_or(STORY_SHARED_NOTICE);
            let card = StoryCard::from(&story);
            if json {
                print_json(&card)?;
            } else {
                println!("{notice}");
                print!("{}", render::stories(std::slice::from_ref(&card)));
            }
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("failed to encode output")?
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_mentor_filters() {
        let cli = Cli::parse_from([
            "mindful", "--user", "a@b.c", "--secret", "pw", "mentors", "--specialty", "ADHD",
            "--sort", "experience",
        ]);
        match cli.command {
            Command::Mentors {
                specialty, sort, ..
            } => {
                assert_eq!(specialty, "ADHD");
                assert_eq!(sort, SortKey::Experience);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_labels_for_categories_and_sessions() {
        let cli = Cli::parse_from(["mindful", "stories", "--category", "success-stories"]);
        match cli.command {
            Command::Stories { category, .. } => {
                assert_eq!(category, CategoryFilter::Only(StoryCategory::SuccessStories));
            }
            other => panic!("unexpected command {other:?}"),
        }

        let cli = Cli::parse_from(["mindful", "book", "2", "--session", "phone", "--slot", "4"]);
        match cli.command {
            Command::Book {
                mentor_id,
                session,
                slot,
            } => {
                assert_eq!(mentor_id, 2);
                assert_eq!(session, SessionKind::Phone);
                assert_eq!(slot, Some(4));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn log_filter_defaults_to_warn_and_is_overridable() {
        let cli = Cli::parse_from(["mindful", "stories"]);
        assert_eq!(cli.log_filter, "warn");
        let cli = Cli::parse_from(["mindful", "stories", "--log-filter", "client_core=debug"]);
        assert_eq!(cli.log_filter, "client_core=debug");
    }

    #[tokio::test]
    async fn blank_story_title_is_a_validation_error() {
        let cli = Cli::parse_from([
            "mindful", "--user", "x@y.z", "--secret", "pw", "share", "--title", " ", "--content",
            "body",
        ]);
        let err = run(cli).await.expect_err("blank title");
        let service = err.downcast_ref::<ServiceError>().expect("service error");
        assert_eq!(service.code, shared::error::ErrorCode::Validation);
    }

    #[tokio::test]
    async fn missing_credentials_stop_at_the_gate() {
        let cli = Cli::parse_from(["mindful", "--user", "x@y.z", "mentors"]);
        let err = run(cli).await.expect_err("no secret");
        let service = err.downcast_ref::<ServiceError>().expect("service error");
        assert_eq!(service.code, shared::error::ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn booking_a_taken_slot_is_rejected() {
        let cli = Cli::parse_from([
            "mindful", "--user", "x@y.z", "--secret", "pw", "book", "1", "--slot", "3",
        ]);
        let err = run(cli).await.expect_err("booked slot");
        let service = err.downcast_ref::<ServiceError>().expect("service error");
        assert_eq!(service.code, shared::error::ErrorCode::Validation);
    }

    #[tokio::test]
    async fn unknown_profile_is_not_found() {
        let cli = Cli::parse_from(["mindful", "--user", "x", "--secret", "pw", "profile", "40"]);
        let err = run(cli).await.expect_err("unknown");
        let service = err.downcast_ref::<ServiceError>().expect("service error");
        assert_eq!(service.code, shared::error::ErrorCode::NotFound);
    }
}
