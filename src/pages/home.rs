use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use web_sys::MouseEvent;

use crate::api::HttpBackend;
use crate::components::dropdown::Dropdown;
use crate::components::force_graph::{ForceGraphCanvas, GraphData};
use crate::components::legend::Legend;
use crate::components::range_slider::RangeSlider;
use crate::config::{ApiConfig, SliderConfig};
use crate::explorer::{Explorer, Slider, spawn};

/// Disease and drug pickers, the two k sliders, and the MOA network view.
#[component]
pub fn Home() -> impl IntoView {
	let api = use_context::<ApiConfig>().unwrap_or_default();
	let sliders = use_context::<SliderConfig>().unwrap_or_default();
	let explorer = Explorer::new(Rc::new(HttpBackend::new(api)), sliders);
	let state = explorer.state().clone();

	on_cleanup({
		let state = state.clone();
		move || state.dispose()
	});

	{
		let explorer = explorer.clone();
		spawn(async move { explorer.load_diseases().await });
	}

	let (diseases, drugs, payload) = (state.diseases, state.drugs, state.graph);
	let disease_options = Signal::derive(move || diseases.with(|l| l.options().to_vec()));
	let drug_options = Signal::derive(move || drugs.with(|l| l.options().to_vec()));

	// a payload we cannot draw leaves the previous network on screen
	let graph_data = Memo::new(move |prev: Option<&GraphData>| {
		payload.with(|p| match GraphData::try_from(p) {
			Ok(data) => data,
			Err(err) => {
				error!("Cannot render MOA network: {}", err);
				prev.cloned().unwrap_or_default()
			}
		})
	});

	let on_disease = {
		let explorer = explorer.clone();
		move |value: String| {
			let explorer = explorer.clone();
			spawn(async move { explorer.select_disease(value).await });
		}
	};
	let on_drug = {
		let explorer = explorer.clone();
		move |value: String| explorer.select_drug(value)
	};
	let on_find = {
		let explorer = explorer.clone();
		move |_: MouseEvent| {
			let explorer = explorer.clone();
			spawn(async move { explorer.find_drug_candidates().await });
		}
	};
	let on_generate = {
		let explorer = explorer.clone();
		move |_: MouseEvent| {
			let explorer = explorer.clone();
			spawn(async move { explorer.generate_graph().await });
		}
	};
	let on_k1 = {
		let explorer = explorer.clone();
		move |raw: f64| {
			explorer.set_slider(Slider::K1, raw);
		}
	};
	let on_k2 = {
		let explorer = explorer.clone();
		move |raw: f64| {
			explorer.set_slider(Slider::K2, raw);
		}
	};

	view! {
		<div class="moa-explorer">
			<aside class="controls">
				<h1>"MOA Explorer"</h1>
				<Dropdown
					id="dropdown-1"
					placeholder="Select a disease"
					options=disease_options
					selected=state.disease
					on_change=on_disease
				/>
				<button id="btn-2" on:click=on_find>"Find drug candidates"</button>
				<Dropdown
					id="dropdown-2"
					placeholder="Select a drug"
					options=drug_options
					selected=state.drug
					on_change=on_drug
				/>
				<RangeSlider
					id="slider-1"
					label="Indication nodes (k1)"
					config=sliders
					value=state.k1
					on_change=on_k1
				/>
				<RangeSlider
					id="slider-2"
					label="Drug nodes (k2)"
					config=sliders
					value=state.k2
					on_change=on_k2
				/>
				<button id="btn-1" on:click=on_generate>"Generate"</button>
				<Legend />
			</aside>
			<main id="MOA_network" class="graph-area" style="height: 80vh;">
				<ForceGraphCanvas data=graph_data />
			</main>
		</div>
	}
}
