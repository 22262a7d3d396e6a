//! CIS2 Connection Manager API client.

pub mod client;
pub mod constants;
pub mod models;

pub use client::{ApiClient, RequestBody};
pub use models::{
    ClientConfig, ClientConfigPatch, ConfigEnvelope, ConfigList, CreatedConfig, Environment,
    NewClientConfig, SigningAlgorithm,
};
