//! Failure taxonomy for backend calls.

use thiserror::Error;

/// Everything that can go wrong between issuing a request and handing its
/// decoded body to the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
	/// The request could not be built or sent (connection refused, CORS, ...).
	#[error("request failed: {0}")]
	Request(String),

	/// The backend answered with a non-2xx status.
	#[error("HTTP {status}: {text}")]
	Status { status: u16, text: String },

	/// The body was not the JSON shape we expected.
	#[error("malformed response: {0}")]
	Decode(String),

	/// The graph payload could not be interpreted as a network.
	#[error("unusable graph payload: {0}")]
	Payload(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_error_reads_like_http() {
		let err = ApiError::Status {
			status: 422,
			text: "Unprocessable Entity".into(),
		};
		assert_eq!(err.to_string(), "HTTP 422: Unprocessable Entity");
	}
}
