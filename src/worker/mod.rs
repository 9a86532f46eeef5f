//! Background worker that persists settings off the render thread.
//!
//! - `messages`: request/response protocol with trace context propagation
//! - `handler`: worker implementation and message processing

pub mod handler;
pub mod messages;

pub use handler::HackerStoriesWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
