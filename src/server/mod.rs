//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the application,
//! including API endpoints, business logic, and data access. The backend uses Axum
//! as the web framework and the official MongoDB driver for persistence.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - MongoDB operations and document-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, operation parameters, validation, and
//!   identifier allocation
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database handle)
//! - **Startup** (`startup`) - MongoDB client initialization and connectivity check
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! A typical write request flows through these layers:
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Controller** validates the payload into operation params, calls the service
//! 3. **Service** checks cross-field consistency, allocates identifiers, stamps timestamps
//! 4. **Data** performs the MongoDB call and returns document models
//! 5. **Service** converts documents to domain models and returns them to the controller
//! 6. **Controller** converts domain models to DTOs and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
