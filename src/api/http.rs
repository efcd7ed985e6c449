use log::debug;

use super::{Backend, Choice, DrugsForDiseaseRequest, GraphRequest, GraphResponse};
use crate::config::ApiConfig;
use crate::error::ApiError;

/// Talks to the backend over `fetch`.
#[derive(Clone, Debug, Default)]
pub struct HttpBackend {
	config: ApiConfig,
}

impl HttpBackend {
	pub fn new(config: ApiConfig) -> Self {
		Self { config }
	}
}

impl Backend for HttpBackend {
	async fn diseases(&self) -> Result<Vec<Choice>, ApiError> {
		let url = self.config.endpoint("/diseases");
		debug!("GET {}", url);
		wasm_impl::get_json(&url).await
	}

	async fn drugs_for_disease(
		&self,
		request: &DrugsForDiseaseRequest,
	) -> Result<Vec<Choice>, ApiError> {
		let url = self.config.endpoint("/drugs_for_disease");
		debug!("POST {} disease_label={}", url, request.disease_label);
		wasm_impl::post_json(&url, request).await
	}

	async fn graph(&self, request: &GraphRequest) -> Result<GraphResponse, ApiError> {
		let url = self.config.endpoint("/graph");
		debug!("POST {} {:?}", url, request);
		wasm_impl::post_json(&url, request).await
	}
}

#[cfg(target_arch = "wasm32")]
mod wasm_impl {
	use gloo_net::http::{Request, Response};
	use serde::Serialize;
	use serde::de::DeserializeOwned;

	use crate::error::ApiError;

	pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
		let resp = Request::get(url)
			.send()
			.await
			.map_err(|e| ApiError::Request(e.to_string()))?;
		decode(resp).await
	}

	pub async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiError>
	where
		B: Serialize,
		T: DeserializeOwned,
	{
		let resp = Request::post(url)
			.json(body)
			.map_err(|e| ApiError::Request(e.to_string()))?
			.send()
			.await
			.map_err(|e| ApiError::Request(e.to_string()))?;
		decode(resp).await
	}

	async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
		if !resp.ok() {
			return Err(ApiError::Status {
				status: resp.status(),
				text: resp.status_text(),
			});
		}
		resp.json::<T>()
			.await
			.map_err(|e| ApiError::Decode(e.to_string()))
	}
}

/// `fetch` only exists in the browser; native builds (tests) fail every call.
#[cfg(not(target_arch = "wasm32"))]
mod wasm_impl {
	use serde::Serialize;
	use serde::de::DeserializeOwned;

	use crate::error::ApiError;

	const UNAVAILABLE: &str = "HTTP backend is only available in the browser";

	pub async fn get_json<T: DeserializeOwned>(_url: &str) -> Result<T, ApiError> {
		Err(ApiError::Request(UNAVAILABLE.into()))
	}

	pub async fn post_json<B, T>(_url: &str, _body: &B) -> Result<T, ApiError>
	where
		B: Serialize,
		T: DeserializeOwned,
	{
		Err(ApiError::Request(UNAVAILABLE.into()))
	}
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
	use super::*;

	#[test]
	fn native_build_reports_request_failure() {
		let backend = HttpBackend::new(ApiConfig::new("http://127.0.0.1:8000"));
		let err = pollster::block_on(backend.diseases()).unwrap_err();
		assert!(matches!(err, ApiError::Request(_)));
	}
}
