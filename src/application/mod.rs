//! Application layer - request handling shared by both front-ends.
//!
//! The command-line tool and the web form each used to carry their own
//! copy of the algorithm; this layer is the single entry point they both
//! delegate to now.

mod score_handler;

pub use score_handler::{ScoreRequest, ScoreRequestHandler, ScoreResponse};
