//! Error types for loading and building the graph.

use thiserror::Error;

/// Failure to obtain the graph description at startup. Always fatal.
#[derive(Debug, Error)]
pub enum LoadError {
	/// No browser window is available (not running in a document context).
	#[error("no window available")]
	NoWindow,
	/// The request could not be sent or its body could not be read.
	#[error("request for {url} failed: {reason}")]
	Network {
		/// Requested location.
		url: String,
		/// Browser error text.
		reason: String,
	},
	/// The server answered with a non-success status.
	#[error("{url} returned status {status}")]
	Status {
		/// Requested location.
		url: String,
		/// HTTP status code.
		status: u16,
	},
	/// The body was not a valid graph description.
	#[error("invalid graph data: {0}")]
	Parse(#[from] serde_json::Error),
}

/// Rejected graph store mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
	/// An edge endpoint is not in the store.
	#[error("node {0} does not exist")]
	MissingNode(String),
	/// The edge key is taken.
	#[error("edge {0} already exists")]
	DuplicateEdge(String),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_message_names_the_status() {
		let err = LoadError::Status {
			url: "./data/network.json".to_string(),
			status: 500,
		};

		assert_eq!(err.to_string(), "./data/network.json returned status 500");
	}
}
