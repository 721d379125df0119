//! # wanikani-api
//!
//! A typed WaniKani API v2 client library for Rust.
//!
//! Every call is described by an inert, typed request value. Executing it
//! yields a success with the decoded body, or a failure carrying the status
//! code and the service's error message. Network faults are plain errors.
//!
//! ## Security
//!
//! - API tokens are redacted in `Debug` output
//! - Tracing skips the token provider and request bodies
//!
//! ## Crates
//!
//! - **wanikani-client** - HTTP transport, request builder, response
//!   classification, typed and conditional requests
//! - **wanikani-rest** - Resources, variant decoding for subjects and SRS
//!   stages, one method per endpoint, cursor pagination
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use wanikani_api::{SubjectFilters, SubjectType, WaniKaniClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads WANIKANI_API_TOKEN
//!     let client = WaniKaniClient::from_env()?;
//!
//!     let mut page = client
//!         .subjects(&SubjectFilters {
//!             types: vec![SubjectType::Kanji],
//!             levels: vec![1],
//!             ..Default::default()
//!         })
//!         .execute()
//!         .await?
//!         .into_result()?;
//!
//!     loop {
//!         for kanji in page.items() {
//!             println!("{} {:?}", kanji.slug(), kanji.primary_meaning());
//!         }
//!         match client.next_page(&page) {
//!             Some(next) => page = next.execute().await?.into_result()?,
//!             None => break,
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

// Re-export all crates for convenient access
#[cfg(feature = "client")]
pub use wanikani_client as client;
#[cfg(feature = "rest")]
pub use wanikani_rest as rest;

// Re-export commonly used types at the top level
#[cfg(feature = "client")]
pub use wanikani_client::{
    ApiResponse, ClientConfig, ConditionalRequest, Error, ErrorKind, Failure, Present, Request,
    Result, StaticToken, Success, TokenProvider,
};
#[cfg(feature = "rest")]
pub use wanikani_rest::{
    Assignment, AssignmentFilters, CollectionRequestExt, CreateReviewFor, Id, IdFilters, Report,
    Resource, ResourceSet, Review, SrsStage, Subject, SubjectFilters, SubjectType, Timestamp,
    WaniKaniClient,
};
