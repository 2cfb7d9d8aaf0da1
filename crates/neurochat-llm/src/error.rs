use std::time::Duration;

use thiserror::Error;

/// Every way a [`crate::submit`] call can fail.
///
/// All four kinds are returned, never raised: the shell picks a
/// human-readable rendering per kind and the transcript stays untouched
/// on any of them.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The minimum interval since the last attempted request has not
    /// elapsed. Recoverable: wait out `wait` and resend.
    #[error("rate limited: wait {:.1}s before sending another message", .wait.as_secs_f64())]
    RateLimited { wait: Duration },

    /// Transport-level failure: connection refused, timeout, DNS. A
    /// single attempt is made per call; there is no automatic retry.
    #[error("cannot reach completion endpoint: {0}")]
    ConnectionFailed(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("server returned {status}: {body}")]
    ServerError { status: u16, body: String },

    /// The endpoint answered 2xx but the payload was unparseable or the
    /// completion text field was missing. Usually an endpoint or model
    /// configuration mismatch.
    #[error("malformed response from endpoint: {0}")]
    MalformedResponse(String),
}
