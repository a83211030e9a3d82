//! Background execution of backend calls and timers.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol between the handler and the worker
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::{process, Worker};
pub use messages::{Mutation, WorkerMessage, WorkerResponse};
