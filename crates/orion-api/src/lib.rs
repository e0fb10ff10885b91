// orion-api: Async Rust client for the FIWARE Orion context broker (NGSIv2)

pub mod client;
pub mod error;
pub mod models;

mod registrations;
mod subscriptions;
mod version;

pub use client::{ClientConfig, OrionClient, Scope, DEFAULT_TIMEOUT};
pub use error::Error;
pub use models::{
    Condition, DataProvided, EntityMatcher, Expression, Notification, NotificationHttp,
    OrionVersion, Provider, ProviderHttp, Registration, Subject, Subscription, VersionInfo,
};
