use async_trait::async_trait;
use resource_framework::{FrameworkError, Resource, ResourceService, ServiceClient, ResourceClient};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Studio {
    id: u64,
    name: String,
    founded: i32,
}

#[derive(Debug)]
struct StudioCreate {
    name: String,
    founded: i32,
}

#[derive(Debug)]
struct StudioUpdate {
    name: Option<String>,
    founded: Option<i32>,
}

#[derive(Debug)]
enum StudioFilter {
    FoundedBefore(i32),
}

#[derive(Debug)]
enum StudioAction {
    Rename(String),
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("invalid studio: {0}")]
struct StudioError(String);

#[async_trait]
impl Resource for Studio {
    type Id = u64;
    type Create = StudioCreate;
    type Update = StudioUpdate;
    type Filter = StudioFilter;
    type Action = StudioAction;
    type ActionResult = String;
    type Context = ();
    type Error = StudioError;

    fn from_create_params(id: u64, params: StudioCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(StudioError("name".into()));
        }
        Ok(Self {
            id,
            name: params.name,
            founded: params.founded,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.name.to_lowercase())
    }

    fn matches(&self, filter: &StudioFilter) -> bool {
        match filter {
            StudioFilter::FoundedBefore(year) => self.founded < *year,
        }
    }

    async fn on_update(&mut self, update: StudioUpdate, _ctx: &()) -> Result<(), Self::Error> {
        // Apply the year first so a rejected name proves nothing was committed.
        if let Some(founded) = update.founded {
            self.founded = founded;
        }
        if let Some(name) = update.name {
            if name.is_empty() {
                return Err(StudioError("name".into()));
            }
            self.name = name;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.founded < 1900 {
            return Err(StudioError("protected".into()));
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: StudioAction, _ctx: &()) -> Result<String, Self::Error> {
        match action {
            StudioAction::Rename(name) => Ok(std::mem::replace(&mut self.name, name)),
        }
    }
}

struct StudioClient {
    inner: ResourceClient<Studio>,
}

#[async_trait]
impl ServiceClient<Studio> for StudioClient {
    type Error = FrameworkError;

    fn inner(&self) -> &ResourceClient<Studio> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e
    }
}

fn start() -> ResourceClient<Studio> {
    let (service, client) = ResourceService::new(10);
    tokio::spawn(service.run(()));
    client
}

fn studio(name: &str, founded: i32) -> StudioCreate {
    StudioCreate {
        name: name.into(),
        founded,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_ids_start_at_one_and_list_in_registration_order() {
    let client = start();

    let first = client.create(studio("Warner", 1923)).await.unwrap();
    let second = client.create(studio("Pixar", 1986)).await.unwrap();
    let third = client.create(studio("Gaumont", 1895)).await.unwrap();
    assert_eq!((first, second, third), (1, 2, 3));

    let names: Vec<String> = client
        .list(None)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Warner", "Pixar", "Gaumont"]);
}

#[tokio::test]
async fn test_failed_create_does_not_consume_an_id() {
    let client = start();

    assert!(matches!(
        client.create(studio("  ", 1950)).await,
        Err(FrameworkError::EntityError(_))
    ));
    assert!(matches!(
        client.create(studio("A24", 2012)).await,
        Ok(1)
    ));
    assert!(matches!(
        client.create(studio("a24", 2013)).await,
        Err(FrameworkError::Conflict(key)) if key == "a24"
    ));
    assert_eq!(client.create(studio("Neon", 2017)).await.unwrap(), 2);
}

#[tokio::test]
async fn test_filtered_list() {
    let client = start();
    client.create(studio("Gaumont", 1895)).await.unwrap();
    client.create(studio("Pixar", 1986)).await.unwrap();
    client.create(studio("Pathe", 1896)).await.unwrap();

    let old = client
        .list(Some(StudioFilter::FoundedBefore(1900)))
        .await
        .unwrap();
    assert_eq!(old.len(), 2);
    assert_eq!(old[0].name, "Gaumont");
    assert_eq!(old[1].name, "Pathe");
}

#[tokio::test]
async fn test_rejected_update_leaves_record_untouched() {
    let client = start();
    let id = client.create(studio("Pixar", 1986)).await.unwrap();
    client.create(studio("Neon", 2017)).await.unwrap();

    let err = client
        .update(
            id,
            StudioUpdate {
                name: Some(String::new()),
                founded: Some(1979),
            },
        )
        .await
        .unwrap_err();
    let err = err.downcast_entity::<StudioError>().unwrap();
    assert_eq!(err, StudioError("name".into()));

    // Renaming onto another record's key is a conflict, also with no effect.
    let err = client
        .update(
            id,
            StudioUpdate {
                name: Some("NEON".into()),
                founded: Some(1979),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::Conflict(_)));

    let stored = client.get(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Pixar");
    assert_eq!(stored.founded, 1986);

    // Updating a record onto its own key is fine.
    let updated = client
        .update(
            id,
            StudioUpdate {
                name: Some("PIXAR".into()),
                founded: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "PIXAR");
}

#[tokio::test]
async fn test_action_returns_result_and_commits() {
    let client = start();
    let id = client.create(studio("Pixar", 1986)).await.unwrap();

    let previous = client
        .perform_action(id, StudioAction::Rename("Pixar Animation".into()))
        .await
        .unwrap();
    assert_eq!(previous, "Pixar");
    assert_eq!(client.get(id).await.unwrap().unwrap().name, "Pixar Animation");

    assert!(matches!(
        client.perform_action(99, StudioAction::Rename("x".into())).await,
        Err(FrameworkError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_delete_and_delete_where() {
    let client = start();
    client.create(studio("Pixar", 1986)).await.unwrap();
    client.create(studio("Neon", 2017)).await.unwrap();
    let gaumont = client.create(studio("Gaumont", 1895)).await.unwrap();

    // on_delete veto
    assert!(matches!(
        client.delete(gaumont).await,
        Err(FrameworkError::EntityError(_))
    ));
    assert!(matches!(
        client.delete(42).await,
        Err(FrameworkError::NotFound(_))
    ));

    let removed = client
        .delete_where(StudioFilter::FoundedBefore(2000))
        .await;
    // Gaumont vetoes, so nothing matching is removed.
    assert!(removed.is_err());
    assert_eq!(client.list(None).await.unwrap().len(), 3);

    let removed = client
        .delete_where(StudioFilter::FoundedBefore(2020))
        .await;
    assert!(removed.is_err());

    client.delete(1).await.unwrap();
    let remaining = client.list(None).await.unwrap();
    assert_eq!(remaining.len(), 2);
    assert!(client.get(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_where_returns_removed_records() {
    let client = start();
    client.create(studio("Pixar", 1986)).await.unwrap();
    client.create(studio("Neon", 2017)).await.unwrap();
    client.create(studio("Ghibli", 1985)).await.unwrap();

    let removed = client
        .delete_where(StudioFilter::FoundedBefore(2000))
        .await
        .unwrap();
    let names: Vec<&str> = removed.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Pixar", "Ghibli"]);

    let none = client
        .delete_where(StudioFilter::FoundedBefore(1900))
        .await
        .unwrap();
    assert!(none.is_empty());
    assert_eq!(client.list(None).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_service_client_provided_methods() {
    let studios = StudioClient { inner: start() };
    let id = studios.inner().create(studio("Pixar", 1986)).await.unwrap();

    assert!(studios.find_by_id(id).await.unwrap().is_some());
    assert!(studios.find_by_id(7).await.unwrap().is_none());
    assert_eq!(studios.count().await.unwrap(), 1);

    assert!(studios.remove(id).await.unwrap());
    assert!(!studios.remove(id).await.unwrap());
    assert!(studios.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_closed_service_reports_service_closed() {
    let (service, client) = ResourceService::<Studio>::new(1);
    drop(service);

    assert!(matches!(
        client.list(None).await,
        Err(FrameworkError::ServiceClosed)
    ));
}
