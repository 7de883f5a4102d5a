use std::io::{Read, Write};

use anyhow::Context;
use tracing::{debug, error, info, warn};

use crate::lsp::backend::{Backend, extract_document};
use crate::lsp::codec::{MessageReader, MessageWriter};
use crate::lsp::error::CodecError;
use crate::lsp::lifecycle::{Action, Flow, Method, SessionState, Termination, transition};
use crate::lsp::message::Message;
use crate::spelling::WordSet;

/// Single-threaded dispatcher: reads one message, handles it completely, then
/// reads the next.
///
/// The server owns both stream handles, so they are released exactly once
/// when [`Server::run`] returns, whichever way the session ended.
pub struct Server<R: Read, W: Write> {
    reader: MessageReader<R>,
    writer: MessageWriter<W>,
    state: SessionState,
    backend: Backend,
}

impl<R: Read, W: Write> Server<R, W> {
    pub fn new(input: R, output: W, words: WordSet) -> Self {
        Self {
            reader: MessageReader::new(input),
            writer: MessageWriter::new(output),
            state: SessionState::Uninitialized,
            backend: Backend::new(words),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Runs the session until `exit` or a fatal stream error
    pub fn run(mut self) -> Result<Termination, CodecError> {
        let result = self.dispatch();
        self.close();
        result
    }

    fn dispatch(&mut self) -> Result<Termination, CodecError> {
        loop {
            let message = self.reader.read_message()?;
            if let Flow::Terminate(termination) = self.handle(message)? {
                return Ok(termination);
            }
        }
    }

    /// Applies one message to the session
    pub fn handle(&mut self, message: Message) -> Result<Flow, CodecError> {
        let method = message.method().and_then(Method::parse);
        if let (Some(name), None) = (message.method(), method) {
            debug!("Unrecognized method {}", name);
        }

        let (next, action) = transition(self.state, method);
        if next != self.state {
            info!("Session {} -> {}", self.state, next);
        }
        self.state = next;

        match action {
            Action::Initialize => {
                info!("initializing...");
                let response = self.backend.initialize(message.id().cloned())?;
                self.send(response)?;
            }
            Action::Initialized => info!("initialized"),
            Action::PublishDiagnostics => self.publish_diagnostics(&message)?,
            Action::Shutdown => {
                info!("shutting down...");
                let response = self.backend.shutdown(message.id().cloned());
                self.send(response)?;
            }
            Action::Exit => {
                info!("exiting");
                return Ok(Flow::Terminate(Termination::Clean));
            }
            Action::ExitUnconfirmed => {
                warn!("exit received without a prior shutdown request");
                return Ok(Flow::Terminate(Termination::Unconfirmed));
            }
            Action::RejectUninitialized => {
                error!("request received before initialization");
                let response = self.backend.not_initialized(message.id().cloned());
                self.send(response)?;
                self.drain_until_exit()?;
                info!("exiting");
                return Ok(Flow::Terminate(Termination::Clean));
            }
            Action::RejectAfterShutdown => {
                error!("request received after shutdown");
                let response = self.backend.shutting_down(message.id().cloned());
                self.send(response)?;
            }
            Action::Ignore => {
                debug!("Ignoring {:?} while {}", message.method(), self.state);
            }
        }

        Ok(Flow::Continue)
    }

    fn publish_diagnostics(&mut self, message: &Message) -> Result<(), CodecError> {
        let document = match extract_document(message.params()) {
            Ok(document) => document,
            Err(e) => {
                warn!("Skipping {:?}: {}", message.method(), e);
                return Ok(());
            }
        };

        let notification = self.backend.publish_diagnostics(&document)?;
        self.send(notification)
    }

    /// Discards every message up to and including `exit`
    fn drain_until_exit(&mut self) -> Result<(), CodecError> {
        info!("shutting down...");
        loop {
            let message = self.reader.read_message()?;
            if message.method().and_then(Method::parse) == Some(Method::Exit) {
                return Ok(());
            }
            debug!("Discarding {:?} while awaiting exit", message.method());
        }
    }

    fn send(&mut self, message: impl Into<Message>) -> Result<(), CodecError> {
        self.writer.write_message(&message.into())
    }

    fn close(self) {
        debug!("Closing input and output streams");
        drop(self.reader);
        drop(self.writer);
    }
}

/// Serves one session over the given streams
pub fn run_server(
    input: impl Read,
    output: impl Write,
    words: WordSet,
) -> anyhow::Result<Termination> {
    info!("Starting spell-lsp server with {} known words", words.len());

    let termination = Server::new(input, output, words)
        .run()
        .context("Language server session failed")?;

    info!(
        "spell-lsp server stopped with exit code {}",
        termination.code()
    );
    Ok(termination)
}
