use super::loader::EventLoader;
use super::models::Event;
use crate::error::{component_error, AppResult};
use tokio::sync::{mpsc, oneshot};
use tracing::info;

/// The events actor that processes load requests one at a time
pub struct EventsActor {
    loader: EventLoader,
    command_rx: mpsc::Receiver<EventsCommand>,
}

/// Commands that can be sent to the events actor
pub enum EventsCommand {
    LoadEvents(oneshot::Sender<AppResult<Vec<Event>>>),
    Shutdown,
}

/// Sending side of the actor mailbox
#[derive(Clone)]
pub struct EventsActorHandle {
    command_tx: mpsc::Sender<EventsCommand>,
}

impl EventsActorHandle {
    /// Ask the actor to load the events and wait for the answer
    pub async fn load_events(&self) -> AppResult<Vec<Event>> {
        let (response_tx, response_rx) = oneshot::channel();
        self.command_tx
            .send(EventsCommand::LoadEvents(response_tx))
            .await
            .map_err(|e| component_error(&format!("Events actor mailbox error: {}", e)))?;

        response_rx
            .await
            .map_err(|_| component_error("Events actor dropped the response"))?
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        let _ = self.command_tx.send(EventsCommand::Shutdown).await;
        Ok(())
    }
}

impl EventsActor {
    /// Create a new actor and return its handle
    pub fn new(loader: EventLoader) -> (Self, EventsActorHandle) {
        let (command_tx, command_rx) = mpsc::channel(32);
        let actor = Self { loader, command_rx };
        (actor, EventsActorHandle { command_tx })
    }

    /// Start the actor's processing loop
    pub async fn run(&mut self) {
        info!("Events actor started");

        while let Some(cmd) = self.command_rx.recv().await {
            match cmd {
                EventsCommand::LoadEvents(response_tx) => {
                    let result = self.loader.load().await;
                    // The caller may have gone away; the load is simply abandoned
                    let _ = response_tx.send(result);
                }
                EventsCommand::Shutdown => {
                    info!("Events actor shutting down");
                    break;
                }
            }
        }

        info!("Events actor shut down");
    }
}
