//! Stdio framing for MCP messages.
//!
//! Two framings are accepted on input:
//!
//! ```text
//! {"jsonrpc":"2.0","id":1,"method":"ping"}\n            (line-delimited)
//!
//! Content-Length: <length>\r\n
//! \r\n
//! {"jsonrpc":"2.0","id":1,"method":"ping"}              (header-framed)
//! ```
//!
//! Each response is written back using the framing of its request.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::error::{McpError, Result};

/// Upper bound on a single message, in either framing.
const MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

const CONTENT_LENGTH: &str = "content-length:";

/// How a message was framed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    /// One JSON document per line.
    Line,
    /// `Content-Length` header followed by a blank line and the body.
    ContentLength,
}

/// A decoded message body and its framing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub framing: Framing,
    pub body: String,
}

/// Reads framed messages from an async byte stream.
///
/// Malformed input (bad UTF-8, oversized lines, an unparseable
/// `Content-Length`) is consumed and reported as [`McpError::Protocol`];
/// the next call resumes at the following message.
pub struct FrameReader<R> {
    reader: BufReader<R>,
    max_length: usize,
    last_framing: Framing,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    /// Wrap a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            max_length: MAX_CONTENT_LENGTH,
            last_framing: Framing::Line,
        }
    }

    /// Override the per-message size limit.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Framing of the most recent message, including one that failed to
    /// decode. Errors should be answered in this framing.
    pub fn last_framing(&self) -> Framing {
        self.last_framing
    }

    /// Read the next message. Returns `None` at EOF.
    pub async fn next_frame(&mut self) -> Result<Option<Frame>> {
        let mut buf = Vec::new();

        loop {
            self.last_framing = Framing::Line;
            if self.read_line_bytes(&mut buf).await? == 0 {
                return Ok(None);
            }

            let line = std::str::from_utf8(&buf)
                .map_err(|e| McpError::protocol(format!("message is not UTF-8: {}", e)))?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if trimmed
                .get(..CONTENT_LENGTH.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(CONTENT_LENGTH))
            {
                self.last_framing = Framing::ContentLength;
                let length = match self.parse_content_length(&trimmed[CONTENT_LENGTH.len()..]) {
                    Ok(length) => length,
                    Err(e) => {
                        // The body length is unknown: drop the headers and
                        // the line holding the body.
                        self.skip_headers().await?;
                        self.discard_line().await?;
                        return Err(e);
                    }
                };
                let body = self.read_framed_body(length).await?;
                return Ok(Some(Frame {
                    framing: Framing::ContentLength,
                    body,
                }));
            }

            tracing::trace!(json = %trimmed, "received MCP message");
            return Ok(Some(Frame {
                framing: Framing::Line,
                body: trimmed.to_string(),
            }));
        }
    }

    /// Skip any remaining headers, then read exactly `length` bytes.
    async fn read_framed_body(&mut self, length: usize) -> Result<String> {
        self.skip_headers().await?;

        let mut body = vec![0u8; length];
        self.reader.read_exact(&mut body).await?;
        let body = String::from_utf8(body)
            .map_err(|e| McpError::protocol(format!("message body is not UTF-8: {}", e)))?;

        tracing::trace!(content_length = length, json = %body, "received MCP message");
        Ok(body)
    }

    /// Consume header lines up to and including the blank separator.
    async fn skip_headers(&mut self) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            if self.read_line_bytes(&mut buf).await? == 0 {
                return Err(McpError::protocol("EOF inside message headers"));
            }
            if buf.trim_ascii().is_empty() {
                return Ok(());
            }
        }
    }

    /// Read one line, newline included, into `buf`. Returns 0 at EOF.
    async fn read_line_bytes(&mut self, buf: &mut Vec<u8>) -> Result<usize> {
        buf.clear();
        let limit = self.max_length as u64 + 1;
        let read = (&mut self.reader).take(limit).read_until(b'\n', buf).await?;

        if buf.len() > self.max_length && buf.last() != Some(&b'\n') {
            self.discard_line().await?;
            buf.clear();
            return Err(McpError::protocol(format!(
                "message exceeds limit of {} bytes",
                self.max_length
            )));
        }
        Ok(read)
    }

    /// Drop input up to and including the next newline, without buffering it.
    async fn discard_line(&mut self) -> Result<()> {
        loop {
            let (consumed, done) = {
                let available = self.reader.fill_buf().await?;
                if available.is_empty() {
                    return Ok(());
                }
                match available.iter().position(|b| *b == b'\n') {
                    Some(i) => (i + 1, true),
                    None => (available.len(), false),
                }
            };
            self.reader.consume(consumed);
            if done {
                return Ok(());
            }
        }
    }

    fn parse_content_length(&self, value: &str) -> Result<usize> {
        let length: usize = value
            .trim()
            .parse()
            .map_err(|e| McpError::protocol(format!("invalid Content-Length: {}", e)))?;
        if length > self.max_length {
            return Err(McpError::protocol(format!(
                "Content-Length {} exceeds limit of {} bytes",
                length, self.max_length
            )));
        }
        Ok(length)
    }
}

/// Write one message with the given framing and flush.
pub async fn write_frame<W>(writer: &mut W, framing: Framing, body: &str) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    match framing {
        Framing::Line => {
            writer.write_all(body.as_bytes()).await?;
            writer.write_all(b"\n").await?;
        }
        Framing::ContentLength => {
            let header = format!("Content-Length: {}\r\n\r\n", body.len());
            writer.write_all(header.as_bytes()).await?;
            writer.write_all(body.as_bytes()).await?;
        }
    }
    writer.flush().await?;

    tracing::trace!(?framing, json = %body, "sent MCP message");
    Ok(())
}
