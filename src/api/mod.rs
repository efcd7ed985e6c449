//! Wire models for the MOA backend and the seam the page talks through.

mod http;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub use http::HttpBackend;

/// One selectable entry, as returned by `/diseases` and `/drugs_for_disease`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
	pub value: String,
	pub name: String,
}

/// Body of `POST /drugs_for_disease`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugsForDiseaseRequest {
	pub disease_label: String,
}

/// Body of `POST /graph`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphRequest {
	pub disease_label: String,
	pub drug_label: String,
	pub k1: u32,
	pub k2: u32,
}

/// Graph data exactly as the backend sent it. Only the renderer looks inside.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphPayload(pub serde_json::Value);

#[derive(Clone, Debug, Deserialize)]
pub struct GraphResponse {
	#[serde(rename = "MOA_network")]
	pub moa_network: GraphPayload,
}

/// The three calls the page makes. Implemented over HTTP in the browser and
/// in memory by tests.
#[allow(async_fn_in_trait)]
pub trait Backend {
	async fn diseases(&self) -> Result<Vec<Choice>, ApiError>;

	async fn drugs_for_disease(
		&self,
		request: &DrugsForDiseaseRequest,
	) -> Result<Vec<Choice>, ApiError>;

	async fn graph(&self, request: &GraphRequest) -> Result<GraphResponse, ApiError>;
}
