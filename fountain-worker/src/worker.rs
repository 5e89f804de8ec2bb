//! Parser worker implementation
//!
//! One spawned task owns the receiving end of a request channel and runs
//! the pipeline for each request in arrival order. That gives at-most-one
//! active computation per worker: a new document sent while another is
//! being processed simply queues behind it, and each reply goes back on
//! its request's own oneshot channel.
//!
//! Error policy: a grammar rejection becomes an `Error` reply with the
//! underlying message. Any panic inside the pipeline stages is a defect,
//! not an expected control path; it is caught here as a last resort and
//! converted to an `Error` reply instead of poisoning the worker.

use std::panic::{catch_unwind, AssertUnwindSafe};

use fountain_parser::fountain::token::Token;
use fountain_parser::fountain::transforms::standard::tokenize_document;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};

/// How many requests may queue before senders are backpressured.
const REQUEST_QUEUE_DEPTH: usize = 32;

/// The reply for one document. Serializes to exactly `{"tokens": [...]}`
/// or `{"error": "..."}` - never both, never neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParseReply {
    Tokens { tokens: Vec<Token> },
    Error { error: String },
}

struct ParseRequest {
    text: String,
    reply: oneshot::Sender<ParseReply>,
}

/// Cloneable handle for submitting documents to a spawned worker.
#[derive(Clone)]
pub struct ParserHandle {
    requests: mpsc::Sender<ParseRequest>,
}

impl ParserHandle {
    /// Tokenize one document snapshot and wait for its reply.
    pub async fn parse(&self, text: impl Into<String>) -> ParseReply {
        let (reply_tx, reply_rx) = oneshot::channel();
        let request = ParseRequest {
            text: text.into(),
            reply: reply_tx,
        };
        if self.requests.send(request).await.is_err() {
            return ParseReply::Error {
                error: "parser worker is no longer running".to_string(),
            };
        }
        match reply_rx.await {
            Ok(reply) => reply,
            Err(_) => ParseReply::Error {
                error: "parser worker dropped the request".to_string(),
            },
        }
    }
}

/// Spawn a parser worker onto the current tokio runtime.
pub fn spawn() -> ParserHandle {
    let (requests, inbox) = mpsc::channel(REQUEST_QUEUE_DEPTH);
    tokio::spawn(run_worker(inbox));
    ParserHandle { requests }
}

async fn run_worker(mut inbox: mpsc::Receiver<ParseRequest>) {
    while let Some(request) = inbox.recv().await {
        let reply = parse_to_reply(&request.text);
        // a closed reply channel means the caller gave up; nothing to do
        let _ = request.reply.send(reply);
    }
}

/// Run the pipeline for one document, converting every failure mode into
/// a reply value.
pub fn parse_to_reply(text: &str) -> ParseReply {
    match catch_unwind(AssertUnwindSafe(|| tokenize_document(text))) {
        Ok(Ok(tokens)) => ParseReply::Tokens { tokens },
        Ok(Err(err)) => ParseReply::Error {
            error: err.to_string(),
        },
        Err(payload) => ParseReply::Error {
            error: panic_message(payload.as_ref()),
        },
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "tokenizer panicked".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fountain_parser::fountain::token::TokenKind;

    #[test]
    fn test_parse_to_reply_success() {
        let reply = parse_to_reply("INT. KITCHEN - DAY\n");
        match reply {
            ParseReply::Tokens { tokens } => {
                assert_eq!(tokens[0].kind, TokenKind::SceneHeading);
            }
            ParseReply::Error { error } => panic!("unexpected error: {error}"),
        }
    }

    #[test]
    fn test_parse_to_reply_grammar_rejection() {
        let reply = parse_to_reply("/* never closed\n");
        match reply {
            ParseReply::Error { error } => assert!(error.contains("boneyard")),
            ParseReply::Tokens { .. } => panic!("expected an error reply"),
        }
    }

    #[test]
    fn test_reply_wire_shapes() {
        let success = ParseReply::Tokens { tokens: Vec::new() };
        let value = serde_json::to_value(&success).unwrap();
        assert!(value.get("tokens").is_some());
        assert!(value.get("error").is_none());

        let failure = ParseReply::Error {
            error: "bad input".to_string(),
        };
        let value = serde_json::to_value(&failure).unwrap();
        assert!(value.get("error").is_some());
        assert!(value.get("tokens").is_none());
    }
}
