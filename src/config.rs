//! Backend origin and slider settings.

/// Origin used when no override was baked in at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	pub base_url: String,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self::new(option_env!("MOA_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
	}
}

impl ApiConfig {
	pub fn new(base_url: impl Into<String>) -> Self {
		let mut base_url = base_url.into();
		while base_url.ends_with('/') {
			base_url.pop();
		}
		Self { base_url }
	}

	/// Absolute URL for an endpoint path such as `/diseases`.
	pub fn endpoint(&self, path: &str) -> String {
		format!("{}/{}", self.base_url, path.trim_start_matches('/'))
	}
}

/// Bounds shared by both k sliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderConfig {
	pub min: u32,
	pub max: u32,
	pub step: u32,
	pub start: u32,
}

impl Default for SliderConfig {
	fn default() -> Self {
		Self {
			min: 20,
			max: 100,
			step: 5,
			start: 20,
		}
	}
}

impl SliderConfig {
	/// Clamp into `[min, max]` and snap to the step grid anchored at `min`.
	/// Halfway values round up.
	pub fn quantize(&self, raw: f64) -> u32 {
		if !raw.is_finite() {
			return self.start;
		}
		let (min, max, step) = (self.min as f64, self.max as f64, self.step.max(1) as f64);
		let clamped = raw.clamp(min, max);
		let snapped = min + ((clamped - min) / step + 0.5).floor() * step;
		// the grid may not land exactly on max
		let snapped = if snapped > max { snapped - step } else { snapped };
		snapped as u32
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn endpoint_joins_without_double_slash() {
		let cfg = ApiConfig::new("http://localhost:8000/");
		assert_eq!(cfg.endpoint("/graph"), "http://localhost:8000/graph");
		assert_eq!(cfg.endpoint("diseases"), "http://localhost:8000/diseases");
	}

	#[test]
	fn slider_values_are_clamped() {
		let s = SliderConfig::default();
		assert_eq!(s.quantize(0.0), 20);
		assert_eq!(s.quantize(-15.0), 20);
		assert_eq!(s.quantize(250.0), 100);
		assert_eq!(s.quantize(f64::NAN), 20);
	}

	#[test]
	fn slider_values_snap_to_step_from_min() {
		let s = SliderConfig::default();
		assert_eq!(s.quantize(40.0), 40);
		assert_eq!(s.quantize(42.0), 40);
		assert_eq!(s.quantize(42.5), 45);
		assert_eq!(s.quantize(58.0), 60);
		assert_eq!(s.quantize(99.0), 100);

		for raw in 0..=120 {
			let v = s.quantize(raw as f64);
			assert!((20..=100).contains(&v));
			assert_eq!((v - 20) % 5, 0);
		}
	}

	#[test]
	fn grid_not_reaching_max_stays_in_range() {
		let s = SliderConfig {
			min: 20,
			max: 98,
			step: 5,
			start: 20,
		};
		assert_eq!(s.quantize(98.0), 95);
	}
}
