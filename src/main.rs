use moa_explorer::{init_logging, initialize};

fn main() {
	init_logging();
	match web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	{
		Some(body) => initialize(body).forget(),
		None => log::error!("No document body to mount the explorer into"),
	}
}
