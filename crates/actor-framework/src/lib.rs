//! # Actor Framework
//!
//! Building blocks for in-process resource actors on Tokio: each resource type
//! (customers, products, orders) lives in its own task, owns its state outright,
//! and is reached only through message passing.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]): the resource's data and business rules.
//! 2. **Runtime Layer** ([`ResourceActor`]): the message loop and the entity store.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]): typed async handles.
//!
//! Business logic is written once in the entity; the framework supplies the
//! channels, replies, and error plumbing.
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`ResourceActor::run`] rather than to
//! [`ResourceActor::new`]. Every client can therefore be created first and the
//! actors wired afterwards, whatever the dependency graph looks like.
//!
//! ## Concurrency Model
//!
//! - One Tokio task per actor.
//! - Requests to one actor are handled strictly one after another, so a
//!   read-check-write inside a single hook or action is atomic for that entity.
//! - Different actors run in parallel and share no mutable state.
//!
//! ## Testing
//!
//! The [`mock`] module offers [`mock::MockClient`] for queue-based expectations and
//! channel helpers for inspecting raw requests.
//!
//! **Further Reading**:
//! - [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/)

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
