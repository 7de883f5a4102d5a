//! Content-Length framing over a byte stream
//!
//! ```text
//! Content-Length: <N>\r\n
//! \r\n
//! <N bytes of JSON>
//! ```
//!
//! The reader skips any lines before the `Content-Length` header and any other
//! headers after it. Bodies are always buffered in full before parsing.

use std::io::{BufRead, BufReader, BufWriter, Read, Write};

use tracing::{debug, trace};

use crate::lsp::error::CodecError;
use crate::lsp::message::Message;

const CONTENT_LENGTH: &str = "Content-Length:";

/// Reads framed messages from the client
pub struct MessageReader<R> {
    reader: BufReader<R>,
}

impl<R: Read> MessageReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Blocks until a complete message is available.
    ///
    /// Returns [`CodecError::ConnectionClosed`] if the stream ends before or
    /// during a frame.
    pub fn read_message(&mut self) -> Result<Message, CodecError> {
        let content_length = self.read_headers()?;

        // Grows with the bytes actually received; never preallocated
        let mut body = Vec::new();
        (&mut self.reader)
            .take(content_length as u64)
            .read_to_end(&mut body)?;
        if body.len() < content_length {
            return Err(CodecError::ConnectionClosed);
        }
        trace!("Received {} byte body", content_length);

        let value = serde_json::from_slice(&body).map_err(CodecError::MalformedBody)?;
        Message::from_value(value)
    }

    /// Scans for the Content-Length header, then consumes the rest of the
    /// header block up to the blank line.
    fn read_headers(&mut self) -> Result<usize, CodecError> {
        let mut line = String::new();

        let content_length = loop {
            self.read_line(&mut line)?;
            if let Some(value) = line.strip_prefix(CONTENT_LENGTH) {
                let value = value.trim();
                break value
                    .parse::<usize>()
                    .map_err(|_| CodecError::MalformedHeader(value.to_string()))?;
            }
            debug!("Skipping line before Content-Length header: {:?}", line.trim_end());
        };

        loop {
            self.read_line(&mut line)?;
            if line.trim().is_empty() {
                break;
            }
        }

        Ok(content_length)
    }

    fn read_line(&mut self, line: &mut String) -> Result<(), CodecError> {
        line.clear();
        if self.reader.read_line(line)? == 0 {
            return Err(CodecError::ConnectionClosed);
        }
        Ok(())
    }
}

/// Writes framed messages to the client
pub struct MessageWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> MessageWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Writes a single message and flushes it immediately.
    ///
    /// The `jsonrpc` version tag is added to the body.
    pub fn write_message(&mut self, message: &Message) -> Result<(), CodecError> {
        let body = serde_json::to_vec(&message.to_value()?).map_err(CodecError::MalformedBody)?;

        write!(self.writer, "Content-Length: {}\r\n\r\n", body.len())?;
        self.writer.write_all(&body)?;
        self.writer.flush()?;
        trace!("Sent {} byte body", body.len());
        Ok(())
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> Result<W, CodecError> {
        self.writer
            .into_inner()
            .map_err(|e| CodecError::Io(e.into_error()))
    }
}
