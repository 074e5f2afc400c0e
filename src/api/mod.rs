pub mod client;
pub mod endpoints;
pub mod models;
pub mod provider;

pub use client::RiotApiClient;
pub use provider::StatsProvider;
