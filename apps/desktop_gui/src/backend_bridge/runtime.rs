//! Runtime bridge between UI command queue and backend event intake.

use std::{path::PathBuf, sync::Arc, thread};

use client_core::MentorHubClient;
use crossbeam_channel::{Receiver, Sender};
use storage::SeedStore;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

/// Spawns the worker thread. It owns a Tokio runtime and the client, and exits
/// once the command queue disconnects.
pub fn launch(seed_dir: Option<PathBuf>, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let records = match SeedStore::open(seed_dir.as_deref()) {
            Ok(records) => records,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: {err:#}"),
                )));
                tracing::error!("failed to load seed records: {err:#}");
                return;
            }
        };
        let client = MentorHubClient::new(Arc::new(records));
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                let name = cmd.name();
                let event = handle_command(&client, cmd).await;
                if ui_tx.send(event).is_err() {
                    tracing::debug!(command = name, "ui event queue closed; stopping worker");
                    break;
                }
            }
        });
        tracing::info!("backend worker stopped");
    });
}

pub async fn handle_command(client: &MentorHubClient, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::Login { credentials } => match client.login(&credentials).await {
            Ok(identity) => UiEvent::LoginOk(identity),
            Err(err) => UiEvent::Error(UiError::from_service(UiErrorContext::Login, err)),
        },
        BackendCommand::LoadCatalog => match client.load_catalog().await {
            Ok(catalog) => UiEvent::CatalogLoaded(catalog),
            Err(err) => UiEvent::Error(UiError::from_service(UiErrorContext::Catalog, err)),
        },
        BackendCommand::LoadProfileDetails { mentor_id } => {
            match client.profile_details(mentor_id).await {
                Ok(details) => UiEvent::ProfileDetailsLoaded(details),
                Err(err) => UiEvent::Error(UiError::from_service(UiErrorContext::Profile, err)),
            }
        }
        BackendCommand::BookSession { request } => match client.book(&request).await {
            Ok(confirmation) => UiEvent::BookingConfirmed(confirmation),
            Err(err) => UiEvent::Error(UiError::from_service(UiErrorContext::Booking, err)),
        },
        BackendCommand::ShareStory { author, draft } => {
            match client.share_story(&author, &draft).await {
                Ok(story) => UiEvent::StoryShared(story),
                Err(err) => UiEvent::Error(UiError::from_service(UiErrorContext::ShareStory, err)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossbeam_channel::bounded;
    use shared::{domain::MentorId, protocol::Credentials};

    use super::*;
    use crate::controller::events::UiErrorCategory;

    fn client() -> Arc<MentorHubClient> {
        MentorHubClient::new(Arc::new(SeedStore::builtin().expect("seed")))
    }

    #[tokio::test]
    async fn login_command_yields_identity() {
        let event = handle_command(
            &client(),
            BackendCommand::Login {
                credentials: Credentials::new("morgan@example.org", "pw"),
            },
        )
        .await;
        match event {
            UiEvent::LoginOk(identity) => assert_eq!(identity.display_name, "morgan"),
            _ => panic!("expected login"),
        }
    }

    #[tokio::test]
    async fn rejected_login_is_an_auth_error() {
        let event = handle_command(
            &client(),
            BackendCommand::Login {
                credentials: Credentials::new("", "pw"),
            },
        )
        .await;
        match event {
            UiEvent::Error(err) => {
                assert_eq!(err.category(), UiErrorCategory::Auth);
                assert_eq!(err.context(), UiErrorContext::Login);
            }
            _ => panic!("expected error"),
        }
    }

    #[tokio::test]
    async fn unknown_profile_is_not_found() {
        let event = handle_command(
            &client(),
            BackendCommand::LoadProfileDetails {
                mentor_id: MentorId(99),
            },
        )
        .await;
        match event {
            UiEvent::Error(err) => assert_eq!(err.category(), UiErrorCategory::NotFound),
            _ => panic!("expected error"),
        }
    }

    #[test]
    fn worker_answers_commands_over_the_queues() {
        let (cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(16);
        launch(None, cmd_rx, ui_tx);
        cmd_tx.send(BackendCommand::LoadCatalog).expect("queue");

        let catalog = loop {
            match ui_rx.recv_timeout(Duration::from_secs(5)).expect("event") {
                UiEvent::CatalogLoaded(catalog) => break catalog,
                UiEvent::Info(_) => continue,
                _ => panic!("unexpected event"),
            }
        };
        assert_eq!(catalog.mentors.len(), 6);
        assert_eq!(catalog.stories.len(), 5);
    }

    #[test]
    fn bad_seed_dir_reports_startup_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let (_cmd_tx, cmd_rx) = bounded(4);
        let (ui_tx, ui_rx) = bounded(16);
        launch(Some(dir.path().to_path_buf()), cmd_rx, ui_tx);

        let err = loop {
            match ui_rx.recv_timeout(Duration::from_secs(5)).expect("event") {
                UiEvent::Error(err) => break err,
                UiEvent::Info(_) => continue,
                _ => panic!("unexpected event"),
            }
        };
        assert_eq!(err.context(), UiErrorContext::BackendStartup);
        assert!(err.message().contains("mentors.json"));
    }
}
