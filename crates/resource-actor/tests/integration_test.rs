use async_trait::async_trait;
use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceActor, ResourceClient};
use std::convert::Infallible;

// --- Test Entities ---

#[derive(Clone, Debug, PartialEq)]
struct Request {
    id: u32,
    title: String,
    done: bool,
}

#[derive(Debug)]
struct RequestCreate {
    title: String,
}

#[derive(Debug, Default)]
struct RequestUpdate {
    title: Option<String>,
    done: Option<bool>,
}

#[derive(Debug, thiserror::Error)]
enum RequestError {
    #[error("title is required")]
    MissingTitle,
    #[error("{0}")]
    Framework(String),
}

impl From<String> for RequestError {
    fn from(msg: String) -> Self {
        RequestError::Framework(msg)
    }
}

#[async_trait]
impl ActorEntity for Request {
    type Id = u32;
    type Create = RequestCreate;
    type Update = RequestUpdate;
    type Context = ResourceClient<LogLine>;
    type Error = RequestError;

    fn from_create_params(id: u32, params: RequestCreate) -> Result<Self, Self::Error> {
        if params.title.trim().is_empty() {
            return Err(RequestError::MissingTitle);
        }
        Ok(Self {
            id,
            title: params.title,
            done: false,
        })
    }

    async fn on_create(&mut self, log: &Self::Context) -> Result<(), Self::Error> {
        log.create(format!("opened {}", self.title))
            .await
            .map_err(|e| RequestError::Framework(e.to_string()))?;
        Ok(())
    }

    async fn on_update(&mut self, update: RequestUpdate, _: &Self::Context) -> Result<(), Self::Error> {
        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(RequestError::MissingTitle);
            }
            self.title = title;
        }
        if let Some(done) = update.done {
            self.done = done;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
struct LogLine {
    id: u32,
    text: String,
}

#[async_trait]
impl ActorEntity for LogLine {
    type Id = u32;
    type Create = String;
    type Update = Infallible;
    type Context = ();
    type Error = Infallible;

    fn from_create_params(id: u32, text: String) -> Result<Self, Self::Error> {
        Ok(Self { id, text })
    }

    async fn on_update(&mut self, update: Infallible, _: &()) -> Result<(), Self::Error> {
        match update {}
    }
}

struct RequestClient {
    inner: ResourceClient<Request>,
}

impl ActorClient<Request> for RequestClient {
    type Error = RequestError;

    fn inner(&self) -> &ResourceClient<Request> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        RequestError::Framework(e.to_string())
    }
}

fn start() -> (ResourceClient<Request>, ResourceClient<LogLine>) {
    let (log_actor, log_client) = ResourceActor::<LogLine>::new(10);
    let (request_actor, request_client) = ResourceActor::<Request>::new(10);
    tokio::spawn(log_actor.run(()));
    tokio::spawn(request_actor.run(log_client.clone()));
    (request_client, log_client)
}

// --- Tests ---

#[tokio::test]
async fn test_full_lifecycle() {
    let (client, _log) = start();

    let created = client
        .create(RequestCreate {
            title: "Leaky tap".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 1);
    assert!(!created.done);

    let fetched = client.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let updated = client
        .update(
            created.id,
            RequestUpdate {
                done: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Leaky tap");
    assert!(updated.done);

    // Same update again is a no-op
    let again = client
        .update(
            created.id,
            RequestUpdate {
                done: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(again, updated);

    assert!(client.get(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_context_receives_side_effects() {
    let (client, log) = start();

    client
        .create(RequestCreate {
            title: "Broken lift".into(),
        })
        .await
        .unwrap();
    client
        .create(RequestCreate { title: "   ".into() })
        .await
        .unwrap_err();

    let lines: Vec<String> = log.list().await.unwrap().into_iter().map(|l| l.text).collect();
    assert_eq!(lines, ["opened Broken lift"]);
}

#[tokio::test]
async fn test_concurrent_creates_get_unique_ids() {
    let (client, _log) = start();

    let mut handles = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .create(RequestCreate {
                    title: format!("request {i}"),
                })
                .await
                .unwrap()
                .id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<u32>>());
}

#[tokio::test]
async fn test_actor_client_trait_defaults() {
    let (inner, _log) = start();
    inner
        .create(RequestCreate {
            title: "Gate code".into(),
        })
        .await
        .unwrap();

    let client = RequestClient { inner };
    let all = client.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(client.get(1).await.unwrap().unwrap().title, "Gate code");
}

#[tokio::test]
async fn test_closed_actor_reports_error() {
    let (actor, client) = ResourceActor::<LogLine>::new(1);
    drop(actor);

    let err = client.list().await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}
