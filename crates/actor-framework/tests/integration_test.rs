use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Bin {
    id: u32,
    label: String,
    units: u32,
}

#[derive(Debug)]
struct BinCreate {
    label: String,
    units: u32,
}

#[derive(Debug)]
struct BinUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum BinAction {
    Take(u32),
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum BinError {
    #[error("Bin label must not be empty")]
    EmptyLabel,
    #[error("Not enough units: requested {requested}, available {available}")]
    NotEnough { requested: u32, available: u32 },
}

#[async_trait]
impl ActorEntity for Bin {
    type Id = u32;
    type Create = BinCreate;
    type Update = BinUpdate;
    type Action = BinAction;
    type ActionResult = u32;
    type Context = ();
    type Error = BinError;

    fn from_create_params(id: u32, params: BinCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: params.label,
            units: params.units,
        })
    }

    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if self.label.is_empty() {
            return Err(BinError::EmptyLabel);
        }
        Ok(())
    }

    async fn on_update(&mut self, update: BinUpdate, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if let Some(label) = update.label {
            self.label = label;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: BinAction, _ctx: &Self::Context) -> Result<u32, Self::Error> {
        match action {
            BinAction::Take(requested) => {
                if requested > self.units {
                    return Err(BinError::NotEnough {
                        requested,
                        available: self.units,
                    });
                }
                self.units -= requested;
                Ok(self.units)
            }
        }
    }
}

fn bin(label: &str, units: u32) -> BinCreate {
    BinCreate {
        label: label.to_string(),
        units,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let id = client.create(bin("screws", 10)).await.unwrap();
    assert_eq!(id, 1);

    // 2. Action
    let left = client.perform_action(id, BinAction::Take(4)).await.unwrap();
    assert_eq!(left, 6);

    // 3. Update
    let updated = client
        .update(
            id,
            BinUpdate {
                label: Some("bolts".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.label, "bolts");
    assert_eq!(updated.units, 6);

    // 4. Delete
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_get_many_skips_unknown_ids_and_keeps_order() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    let a = client.create(bin("a", 1)).await.unwrap();
    let b = client.create(bin("b", 2)).await.unwrap();

    let found = client.get_many(vec![b, 99, a]).await.unwrap();
    let labels: Vec<_> = found.iter().map(|bin| bin.label.as_str()).collect();
    assert_eq!(labels, vec!["b", "a"]);

    assert!(client.get_many(Vec::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_entity_errors_are_recoverable() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    let rejected = client.create(bin("", 1)).await.unwrap_err();
    assert_eq!(rejected.downcast_entity::<BinError>().unwrap(), BinError::EmptyLabel);

    let id = client.create(bin("nails", 3)).await.unwrap();
    let err = client
        .perform_action(id, BinAction::Take(5))
        .await
        .unwrap_err()
        .downcast_entity::<BinError>()
        .unwrap();
    assert_eq!(
        err,
        BinError::NotEnough {
            requested: 5,
            available: 3
        }
    );

    // failed action leaves state untouched
    assert_eq!(client.get(id).await.unwrap().unwrap().units, 3);
}

#[tokio::test]
async fn test_missing_entity_reports_not_found() {
    let (actor, client) = ResourceActor::<Bin>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.perform_action(42, BinAction::Take(1)).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(id) if id == "42"));

    let err = client.delete(42).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(_)));
}
