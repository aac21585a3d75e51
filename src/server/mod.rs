//! Server-side API backend.
//!
//! The backend uses Axum as the web framework and SeaORM for persistence. Flight
//! plans are stored as JSON documents keyed by their flight plan ID.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, authentication, and status mapping
//! - **Service Layer** (`service/`) - Flight plan operations and derived values, credential checks
//! - **Data Layer** (`data/`) - Storage adapter trait and its document store binding
//! - **Model Layer** (`model/`) - Domain models and transaction outcomes
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Authentication guard
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** authenticates the caller through `AuthGuard`
//! 3. **Controller** converts the DTO to params and calls the service
//! 4. **Service** delegates to the storage adapter
//! 5. **Data** reads or writes the document and maps it back to a domain model
//! 6. **Controller** maps the outcome to a status code and optional body

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
