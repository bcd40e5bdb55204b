//! Simulated boundary tasks
//!
//! The dashboard's only asynchronous edges: a file-upload sink and an
//! "AI generation" run, both simulated with fixed timers. Unlike the
//! original fire-and-forget timers, every task here runs under a handle
//! that can be cancelled; a real upload or generation service can slot in
//! behind the same interface later.

pub mod generate;
pub mod task;
pub mod upload;

pub use generate::{GenerationError, GenerationRequest, GenerationStage, GeneratedModel, Generator};
pub use task::{CancelHandle, TaskError};
pub use upload::{FileDescriptor, IncomingFile, UploadCategory, UploadError, Uploader};
