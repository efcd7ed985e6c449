use leptos::prelude::*;

use crate::api::Choice;

/// A `<select>` whose options are rebuilt wholesale every time `options`
/// changes. The leading empty option stands for "nothing chosen".
#[component]
pub fn Dropdown<F>(
	#[prop(into)] id: String,
	#[prop(into)] placeholder: String,
	#[prop(into)] options: Signal<Vec<Choice>>,
	#[prop(into)] selected: Signal<String>,
	on_change: F,
) -> impl IntoView
where
	F: Fn(String) + 'static,
{
	view! {
		<select
			id=id
			class="ui dropdown"
			prop:value=move || selected.get()
			on:change=move |ev| on_change(event_target_value(&ev))
		>
			<option value="">{placeholder}</option>
			{move || {
				let current = selected.get();
				options
					.get()
					.into_iter()
					.map(|choice| {
						let is_selected = choice.value == current;
						view! {
							<option value=choice.value selected=is_selected>
								{choice.name}
							</option>
						}
					})
					.collect_view()
			}}
		</select>
	}
}
