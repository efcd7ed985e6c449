use leptos::prelude::*;

/// Node kinds the backend colours and shapes the MOA network by.
const ENTRIES: &[(&str, &str, &str)] = &[
	("Drug", "#439AD9", "▲"),
	("Indication", "#DD614A", "▼"),
	("Protein", "#7F8C8D", "⬬"),
	("Biological function", "#2ECC71", "■"),
];

#[component]
pub fn Legend() -> impl IntoView {
	view! {
		<ul class="graph-legend">
			{ENTRIES
				.iter()
				.map(|&(name, color, glyph)| {
					view! {
						<li>
							<span style=format!("color: {color};")>{glyph}</span>
							" "
							{name}
						</li>
					}
				})
				.collect_view()}
		</ul>
	}
}
