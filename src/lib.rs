//! Leptos client-side app for exploring drug mechanism-of-action networks.
//!
//! The page lists diseases from the backend, fetches drug candidates for the
//! chosen one, and renders the MOA network for a disease/drug pair.

use std::any::Any;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};
use web_sys::HtmlElement;

// Modules
mod api;
mod components;
mod config;
mod error;
mod explorer;
mod pages;

// Top-Level pages
use crate::config::{ApiConfig, SliderConfig};
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the explorer and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(ApiConfig::default());
	provide_context(SliderConfig::default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		// sets the document title
		<Title text="MOA Explorer" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}

/// A mounted explorer. Dropping it (or calling [`ExplorerHandle::dispose`])
/// unmounts the page and discards any responses still in flight.
pub struct ExplorerHandle {
	mount: Box<dyn Any>,
}

impl ExplorerHandle {
	/// Unmount the page and tear down its state.
	pub fn dispose(self) {
		drop(self.mount);
		info!("Explorer unmounted");
	}

	/// Keep the page mounted for the rest of the program.
	pub fn forget(self) {
		std::mem::forget(self.mount);
	}
}

/// Mount the explorer into `container` and start loading the disease list.
pub fn initialize(container: HtmlElement) -> ExplorerHandle {
	let handle = leptos::mount::mount_to(container, App);
	ExplorerHandle {
		mount: Box::new(handle),
	}
}
