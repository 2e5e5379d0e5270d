//! # Generic Actor Server
//!
//! `ResourceActor` owns one record collection and processes requests sequentially, which gives
//! exclusive access to the store without locking.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use indexmap::IndexMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "server" half of the actor. It owns the store and the receiver end of
/// the channel. Each instance runs in its own Tokio task and handles one message at a time,
/// so two updates to the same record are applied in arrival order (last write wins) and never
/// interleave.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the `actor` (server) and `client`.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
/// use std::convert::Infallible;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = Infallible;
///     type Context = ();
///     type Error = Infallible;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Infallible> {
///         Ok(Self { id, text: params.text })
///     }
///     async fn on_update(&mut self, update: Infallible, _: &()) -> Result<(), Infallible> {
///         match update {}
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate { text: "boiler check".into() }).await.unwrap();
///     assert_eq!(note.id, 1);
///     assert_eq!(client.list().await.unwrap().len(), 1);
/// }
/// ```
///
/// # Implementation Details
///
/// The store is an `IndexMap` so `List` returns records in insertion order. IDs come from a
/// `u32` counter starting at 1; a failed create still consumes its counter value, so IDs are
/// never reused.
///
/// * **Create**: next ID, `T::from_create_params`, `on_create`, insert, respond with the record.
/// * **Get**: clone of the record or `None`.
/// * **List**: clones of every record in insertion order.
/// * **Update**: clone the record, run `on_update` on the clone, then swap it in. A failed
///   hook leaves the stored record untouched.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: IndexMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When it is full, client calls wait
    /// for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: IndexMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Short type name, e.g. "MaintenanceTicket"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut draft = current.clone();
                    if let Err(e) = draft.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), draft.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(draft));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: u32,
        label: String,
        value: i64,
    }

    #[derive(Debug)]
    struct CounterCreate {
        label: String,
    }

    #[derive(Debug)]
    struct CounterUpdate {
        add: i64,
        label: Option<String>,
    }

    #[derive(Debug, thiserror::Error)]
    enum CounterError {
        #[error("label must not be empty")]
        EmptyLabel,
        #[error("counter would go negative")]
        Negative,
    }

    #[async_trait]
    impl ActorEntity for Counter {
        type Id = u32;
        type Create = CounterCreate;
        type Update = CounterUpdate;
        type Context = ();
        type Error = CounterError;

        fn from_create_params(id: u32, params: CounterCreate) -> Result<Self, Self::Error> {
            if params.label.is_empty() {
                return Err(CounterError::EmptyLabel);
            }
            Ok(Self {
                id,
                label: params.label,
                value: 0,
            })
        }

        async fn on_update(&mut self, update: CounterUpdate, _: &()) -> Result<(), Self::Error> {
            // Label is applied before the range check on purpose: a rejected update must not
            // leak the label change into the store.
            if let Some(label) = update.label {
                self.label = label;
            }
            self.value += update.add;
            if self.value < 0 {
                return Err(CounterError::Negative);
            }
            Ok(())
        }
    }

    fn spawn_counter() -> ResourceClient<Counter> {
        let (actor, client) = ResourceActor::<Counter>::new(8);
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let client = spawn_counter();
        for label in ["c", "a", "b"] {
            client
                .create(CounterCreate {
                    label: label.into(),
                })
                .await
                .unwrap();
        }

        let labels: Vec<String> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, ["c", "a", "b"]);
    }

    #[tokio::test]
    async fn failed_create_does_not_reuse_id() {
        let client = spawn_counter();
        let first = client.create(CounterCreate { label: "a".into() }).await.unwrap();
        let rejected = client.create(CounterCreate { label: "".into() }).await;
        assert!(matches!(rejected, Err(FrameworkError::EntityError(_))));
        let second = client.create(CounterCreate { label: "b".into() }).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 3);
        assert_eq!(client.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn rejected_update_leaves_record_untouched() {
        let client = spawn_counter();
        let created = client.create(CounterCreate { label: "a".into() }).await.unwrap();

        let result = client
            .update(
                created.id,
                CounterUpdate {
                    add: -5,
                    label: Some("renamed".into()),
                },
            )
            .await;
        assert!(matches!(result, Err(FrameworkError::EntityError(_))));

        let stored = client.get(created.id).await.unwrap().unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let client = spawn_counter();
        client.create(CounterCreate { label: "a".into() }).await.unwrap();

        let err = client
            .update(
                42,
                CounterUpdate {
                    add: 1,
                    label: None,
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(client.list().await.unwrap().len(), 1);
    }
}
