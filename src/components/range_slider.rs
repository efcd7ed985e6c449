use leptos::prelude::*;

use crate::config::SliderConfig;

/// `<input type="range">` with its current value shown in the label.
/// `on_change` receives the raw position; snapping is the caller's job.
#[component]
pub fn RangeSlider<F>(
	#[prop(into)] id: String,
	#[prop(into)] label: String,
	config: SliderConfig,
	#[prop(into)] value: Signal<u32>,
	on_change: F,
) -> impl IntoView
where
	F: Fn(f64) + 'static,
{
	view! {
		<div class="range-slider">
			<label for=id.clone()>{label} ": " {move || value.get()}</label>
			<input
				type="range"
				id=id
				min=config.min.to_string()
				max=config.max.to_string()
				step=config.step.to_string()
				prop:value=move || value.get().to_string()
				on:input=move |ev| {
					match event_target_value(&ev).parse::<f64>() {
						Ok(raw) => on_change(raw),
						Err(err) => log::warn!("Ignoring slider input: {}", err),
					}
				}
			/>
		</div>
	}
}
