//! Client for the Loppestars backend.

mod client;

pub use client::{
    ApiClient, HealthStatus, ProcessImageRequest, ProcessImageResponse, ScrapeStatusAck,
    ScrapeStatusRequest, ScrapeSummary,
};
