use super::actor::{EventsActor, EventsActorHandle};
use super::loader::EventLoader;
use super::models::Event;
use crate::error::AppResult;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Handle for interacting with the events actor
#[derive(Clone)]
pub struct EventsHandle {
    actor_handle: EventsActorHandle,
    _actor_task: Arc<JoinHandle<()>>,
}

impl EventsHandle {
    /// Create a new EventsHandle and spawn the actor
    pub fn new(loader: EventLoader) -> Self {
        let (mut actor, handle) = EventsActor::new(loader);

        let actor_task = tokio::spawn(async move {
            actor.run().await;
        });

        Self {
            actor_handle: handle,
            _actor_task: Arc::new(actor_task),
        }
    }

    /// Load the event list; the session is already updated when this resolves
    pub async fn load_events(&self) -> AppResult<Vec<Event>> {
        self.actor_handle.load_events().await
    }

    /// Shutdown the actor
    pub async fn shutdown(&self) -> AppResult<()> {
        self.actor_handle.shutdown().await
    }
}
