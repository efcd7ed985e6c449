//! The page controller: reads the widgets, talks to the backend, and writes
//! the answers back into reactive state.
//!
//! Every flow is an `async fn` that settles into an [`Outcome`]; the view
//! layer fires them with [`spawn`]. Requests are never aborted on the wire.
//! Instead each one takes a generation ticket and its response is dropped
//! unless that ticket is still the newest when it arrives.

mod options;

use std::fmt;
use std::future::Future;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;
use log::{debug, error, info};

use crate::api::{Backend, Choice, DrugsForDiseaseRequest, GraphPayload, GraphRequest};
use crate::config::SliderConfig;
use crate::error::ApiError;

pub use options::{Generation, OptionList, Outcome, Ticket};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slider {
	K1,
	K2,
}

impl fmt::Display for Slider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Slider::K1 => write!(f, "slider 1"),
			Slider::K2 => write!(f, "slider 2"),
		}
	}
}

/// Reactive state behind the page. Everything here is `Send + Sync`, so it
/// can be captured by view closures and cleanup hooks.
#[derive(Clone)]
pub struct ExplorerState {
	pub diseases: RwSignal<OptionList>,
	pub drugs: RwSignal<OptionList>,
	pub disease: RwSignal<String>,
	pub drug: RwSignal<String>,
	pub k1: RwSignal<u32>,
	pub k2: RwSignal<u32>,
	pub graph: RwSignal<GraphPayload>,
	graph_generation: RwSignal<Generation>,
	alive: Arc<AtomicBool>,
}

impl ExplorerState {
	fn new(sliders: SliderConfig) -> Self {
		let start = sliders.quantize(sliders.start as f64);
		Self {
			diseases: RwSignal::new(OptionList::default()),
			drugs: RwSignal::new(OptionList::default()),
			disease: RwSignal::new(String::new()),
			drug: RwSignal::new(String::new()),
			k1: RwSignal::new(start),
			k2: RwSignal::new(start),
			graph: RwSignal::new(GraphPayload::default()),
			graph_generation: RwSignal::new(Generation::default()),
			alive: Arc::new(AtomicBool::new(true)),
		}
	}

	pub fn slider(&self, which: Slider) -> RwSignal<u32> {
		match which {
			Slider::K1 => self.k1,
			Slider::K2 => self.k2,
		}
	}

	pub fn is_alive(&self) -> bool {
		self.alive.load(Ordering::Acquire)
	}

	/// Tear down: every response still in flight will be discarded.
	pub fn dispose(&self) {
		if !self.alive.swap(false, Ordering::AcqRel) {
			return;
		}
		let _ = self.diseases.try_update(OptionList::invalidate);
		let _ = self.drugs.try_update(OptionList::invalidate);
		let _ = self.graph_generation.try_update(Generation::invalidate);
		debug!("Explorer disposed");
	}
}

/// Owns the backend and the page state.
pub struct Explorer<B> {
	backend: Rc<B>,
	state: ExplorerState,
	sliders: SliderConfig,
}

impl<B> Clone for Explorer<B> {
	fn clone(&self) -> Self {
		Self {
			backend: self.backend.clone(),
			state: self.state.clone(),
			sliders: self.sliders,
		}
	}
}

/// Run a flow on the UI event loop without waiting for it.
pub fn spawn<F>(flow: F)
where
	F: Future<Output = Outcome> + 'static,
{
	leptos::task::spawn_local(async move {
		let outcome = flow.await;
		debug!("Flow finished: {:?}", outcome);
	});
}

impl<B: Backend + 'static> Explorer<B> {
	pub fn new(backend: Rc<B>, sliders: SliderConfig) -> Self {
		Self {
			backend,
			state: ExplorerState::new(sliders),
			sliders,
		}
	}

	pub fn state(&self) -> &ExplorerState {
		&self.state
	}

	/// Fetch the disease list and replace Dropdown 1's options with it.
	pub async fn load_diseases(&self) -> Outcome {
		let Some(ticket) = self.begin(self.state.diseases) else {
			return Outcome::Stale;
		};
		let result = self.backend.diseases().await;
		self.settle(self.state.diseases, ticket, result, "diseases")
	}

	/// Dropdown 1 changed: remember the selection and refetch candidates.
	pub async fn select_disease(&self, value: String) -> Outcome {
		info!("Value of dropdown 1: {}", value);
		self.state.disease.set(value.clone());
		self.refresh_drugs(value).await
	}

	/// "Find drug candidates" button: refetch for the current selection.
	pub async fn find_drug_candidates(&self) -> Outcome {
		let disease = self.state.disease.get_untracked();
		info!("Find drug candidates triggered, disease label: {}", disease);
		self.refresh_drugs(disease).await
	}

	pub fn select_drug(&self, value: String) {
		info!("Value of dropdown 2: {}", value);
		self.state.drug.set(value);
	}

	/// Store a slider value after snapping it onto the slider grid.
	pub fn set_slider(&self, which: Slider, raw: f64) -> u32 {
		let value = self.sliders.quantize(raw);
		self.state.slider(which).set(value);
		info!("Value of {}: {}", which, value);
		value
	}

	async fn refresh_drugs(&self, disease: String) -> Outcome {
		if disease.is_empty() {
			debug!("No disease selected, clearing drug candidates");
			let _ = self.state.drugs.try_update(OptionList::reset);
			self.state.drug.set(String::new());
			return Outcome::Skipped;
		}
		let Some(ticket) = self.begin(self.state.drugs) else {
			return Outcome::Stale;
		};
		let request = DrugsForDiseaseRequest {
			disease_label: disease,
		};
		let result = self.backend.drugs_for_disease(&request).await;
		let outcome = self.settle(self.state.drugs, ticket, result, "drug candidates");

		if let Outcome::Applied(_) = outcome {
			let drug = self.state.drug.get_untracked();
			if !drug.is_empty() && !self.state.drugs.with_untracked(|l| l.contains(&drug)) {
				self.state.drug.set(String::new());
			}
		}
		outcome
	}

	/// Snapshot of the four inputs the graph endpoint takes.
	pub fn graph_request(&self) -> GraphRequest {
		GraphRequest {
			disease_label: self.state.disease.get_untracked(),
			drug_label: self.state.drug.get_untracked(),
			k1: self.state.k1.get_untracked(),
			k2: self.state.k2.get_untracked(),
		}
	}

	/// Ask for the MOA network and hand it to the renderer.
	pub async fn generate_graph(&self) -> Outcome {
		let request = self.graph_request();
		info!(
			"Generate triggered: disease={} drug={} k1={} k2={}",
			request.disease_label, request.drug_label, request.k1, request.k2
		);
		if !self.state.is_alive() {
			return Outcome::Stale;
		}
		let Some(ticket) = self.state.graph_generation.try_update(Generation::issue) else {
			return Outcome::Stale;
		};

		let result = self.backend.graph(&request).await;

		let current = self.state.is_alive()
			&& self
				.state
				.graph_generation
				.try_with_untracked(|g| g.is_current(ticket))
				.unwrap_or(false);
		if !current {
			debug!("Dropping superseded graph response");
			return Outcome::Stale;
		}
		match result {
			Ok(response) => {
				self.state.graph.set(response.moa_network);
				Outcome::Applied(1)
			}
			Err(err) => {
				error!("Error occurred while fetching graph: {}", err);
				Outcome::Failed(err)
			}
		}
	}

	fn begin(&self, list: RwSignal<OptionList>) -> Option<Ticket> {
		if !self.state.is_alive() {
			return None;
		}
		list.try_update(OptionList::begin)
	}

	fn settle(
		&self,
		list: RwSignal<OptionList>,
		ticket: Ticket,
		result: Result<Vec<Choice>, ApiError>,
		what: &str,
	) -> Outcome {
		if !self.state.is_alive() {
			return Outcome::Stale;
		}
		let outcome = list
			.try_update(|l| l.settle(ticket, result))
			.unwrap_or(Outcome::Stale);
		match &outcome {
			Outcome::Applied(n) => debug!("Loaded {} {}", n, what),
			Outcome::Stale => debug!("Dropping superseded {} response", what),
			Outcome::Failed(err) => error!("Error occurred while fetching {}: {}", what, err),
			Outcome::Skipped => {}
		}
		outcome
	}
}
