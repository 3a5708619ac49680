//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the
//! application, including API endpoints, business logic and data access. The
//! backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! Supporting modules provide application infrastructure:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB pool, thresholds)
//! - **Startup** (`startup`) - Initialization of database and sessions
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! A typical request flows through these layers:
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Middleware** resolves the session and authentication guards
//! 3. **Controller** validates access, converts DTOs to params, calls a service
//! 4. **Service** executes business rules, orchestrates data operations
//! 5. **Data** queries the database, converts entities to domain models
//! 6. **Controller** converts the domain result back to a DTO response

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
