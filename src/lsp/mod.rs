// LSP protocol layer
// - codec.rs: Content-Length framing over a byte stream
// - message.rs: JSON-RPC request/notification/response types
// - types.rs: Positions, ranges, diagnostics and capability payloads
// - lifecycle.rs: Session state machine and dispatch table
// - backend.rs: Handlers for the recognized methods
// - diagnostics.rs: Diagnostics generation
// - server.rs: Dispatch loop
// - error.rs: Codec and document errors

pub mod backend;
pub mod codec;
pub mod diagnostics;
pub mod error;
pub mod lifecycle;
pub mod message;
pub mod server;
pub mod types;
