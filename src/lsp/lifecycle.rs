//! Session lifecycle
//!
//! ```text
//! Uninitialized --initialize--> Initializing --initialized--> Running
//! Running --shutdown--> ShuttingDown --exit--> Exited (code 0)
//! Running --exit--> Exited (code 1)
//! Uninitialized --anything else--> Exited (after draining to exit)
//! ```
//!
//! [`transition`] is the only place that decides what a message means in a
//! given state. States only ever move forward.

use std::fmt;
use std::process::ExitCode;

/// Methods the server recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Initialize,
    Initialized,
    DidOpen,
    DidChange,
    Shutdown,
    Exit,
}

impl Method {
    pub fn parse(method: &str) -> Option<Self> {
        match method {
            "initialize" => Some(Self::Initialize),
            "initialized" => Some(Self::Initialized),
            "textDocument/didOpen" => Some(Self::DidOpen),
            "textDocument/didChange" => Some(Self::DidChange),
            "shutdown" => Some(Self::Shutdown),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SessionState {
    Uninitialized,
    Initializing,
    Running,
    ShuttingDown,
    Exited,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionState::Uninitialized => "uninitialized",
            SessionState::Initializing => "initializing",
            SessionState::Running => "running",
            SessionState::ShuttingDown => "shutting down",
            SessionState::Exited => "exited",
        };
        f.write_str(name)
    }
}

/// What the dispatcher must do with a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Answer `initialize` with the server capabilities
    Initialize,
    /// Handshake finished
    Initialized,
    /// Check the document and publish diagnostics
    PublishDiagnostics,
    /// Answer `shutdown` with a null result
    Shutdown,
    /// Close the session after a confirmed shutdown
    Exit,
    /// Close the session without a prior shutdown
    ExitUnconfirmed,
    /// Answer with -32002, then wait for `exit` and close
    RejectUninitialized,
    /// Answer with -32700 and keep waiting for `exit`
    RejectAfterShutdown,
    /// Drop the message
    Ignore,
}

/// How the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// `exit` followed `shutdown`, or the session was never initialized
    Clean,
    /// `exit` arrived while still running
    Unconfirmed,
}

impl Termination {
    pub fn code(self) -> u8 {
        match self {
            Termination::Clean => 0,
            Termination::Unconfirmed => 1,
        }
    }
}

impl From<Termination> for ExitCode {
    fn from(termination: Termination) -> Self {
        ExitCode::from(termination.code())
    }
}

/// Result of handling one message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminate(Termination),
}

/// Looks up the next state and action for a message.
///
/// `method` is `None` for responses and for methods the server does not
/// recognize.
pub fn transition(state: SessionState, method: Option<Method>) -> (SessionState, Action) {
    use Action as A;
    use Method as M;
    use SessionState as S;

    match (state, method) {
        (S::Uninitialized, Some(M::Initialize)) => (S::Initializing, A::Initialize),
        (S::Uninitialized, _) => (S::Exited, A::RejectUninitialized),

        (S::Initializing, Some(M::Initialized)) => (S::Running, A::Initialized),
        (S::Initializing, _) => (S::Initializing, A::Ignore),

        (S::Running, Some(M::DidOpen | M::DidChange)) => (S::Running, A::PublishDiagnostics),
        (S::Running, Some(M::Shutdown)) => (S::ShuttingDown, A::Shutdown),
        (S::Running, Some(M::Exit)) => (S::Exited, A::ExitUnconfirmed),
        (S::Running, _) => (S::Running, A::Ignore),

        (S::ShuttingDown, Some(M::Exit)) => (S::Exited, A::Exit),
        (S::ShuttingDown, _) => (S::ShuttingDown, A::RejectAfterShutdown),

        (S::Exited, _) => (S::Exited, A::Ignore),
    }
}
