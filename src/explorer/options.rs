//! Option lists fed by requests that can be superseded.

use crate::api::Choice;
use crate::error::ApiError;

/// Captured when a request is issued. Only the newest ticket may settle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Generation {
	current: u64,
}

impl Generation {
	pub fn issue(&mut self) -> Ticket {
		self.current += 1;
		Ticket(self.current)
	}

	pub fn is_current(&self, ticket: Ticket) -> bool {
		ticket.0 == self.current
	}

	/// Orphan every ticket handed out so far.
	pub fn invalidate(&mut self) {
		self.current += 1;
	}
}

/// How a response was handled on arrival.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
	/// Applied; carries the number of options (or 1 for a graph).
	Applied(usize),
	/// A newer request was issued since, or the page went away.
	Stale,
	/// The request failed. Previous contents are untouched.
	Failed(ApiError),
	/// Nothing to ask for, so no request went out.
	Skipped,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionList {
	options: Vec<Choice>,
	generation: Generation,
}

impl OptionList {
	pub fn options(&self) -> &[Choice] {
		&self.options
	}

	pub fn contains(&self, value: &str) -> bool {
		self.options.iter().any(|c| c.value == value)
	}

	pub fn begin(&mut self) -> Ticket {
		self.generation.issue()
	}

	pub fn invalidate(&mut self) {
		self.generation.invalidate();
	}

	/// Drop the options and orphan any request still in flight.
	pub fn reset(&mut self) {
		self.generation.invalidate();
		self.options.clear();
	}

	/// Replace the options wholesale if `ticket` is still the newest one.
	pub fn settle(&mut self, ticket: Ticket, result: Result<Vec<Choice>, ApiError>) -> Outcome {
		if !self.generation.is_current(ticket) {
			return Outcome::Stale;
		}
		match result {
			Ok(options) => {
				self.options.clear();
				self.options.extend(options);
				Outcome::Applied(self.options.len())
			}
			Err(err) => Outcome::Failed(err),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn choice(value: &str, name: &str) -> Choice {
		Choice {
			value: value.into(),
			name: name.into(),
		}
	}

	#[test]
	fn success_replaces_instead_of_merging() {
		let mut list = OptionList::default();
		let t = list.begin();
		list.settle(t, Ok(vec![choice("a", "A"), choice("b", "B")]));

		let t = list.begin();
		let outcome = list.settle(t, Ok(vec![choice("c", "C")]));

		assert_eq!(outcome, Outcome::Applied(1));
		assert_eq!(list.options(), &[choice("c", "C")]);
		assert!(!list.contains("a"));
	}

	#[test]
	fn failure_keeps_previous_options() {
		let mut list = OptionList::default();
		let t = list.begin();
		list.settle(t, Ok(vec![choice("a", "A")]));

		let t = list.begin();
		let outcome = list.settle(t, Err(ApiError::Request("connection refused".into())));

		assert!(matches!(outcome, Outcome::Failed(ApiError::Request(_))));
		assert_eq!(list.options(), &[choice("a", "A")]);
	}

	#[test]
	fn late_response_for_superseded_request_is_dropped() {
		let mut list = OptionList::default();
		let older = list.begin();
		let newer = list.begin();

		assert_eq!(
			list.settle(newer, Ok(vec![choice("new", "New")])),
			Outcome::Applied(1)
		);
		assert_eq!(
			list.settle(older, Ok(vec![choice("old", "Old")])),
			Outcome::Stale
		);
		assert_eq!(list.options(), &[choice("new", "New")]);
	}

	#[test]
	fn reset_clears_and_orphans() {
		let mut list = OptionList::default();
		let t = list.begin();
		list.settle(t, Ok(vec![choice("a", "A")]));
		let pending = list.begin();

		list.reset();

		assert!(list.options().is_empty());
		assert_eq!(list.settle(pending, Ok(vec![choice("b", "B")])), Outcome::Stale);
		assert!(list.options().is_empty());
	}

	#[test]
	fn invalidate_orphans_outstanding_tickets() {
		let mut list = OptionList::default();
		let t = list.begin();
		list.invalidate();
		assert_eq!(list.settle(t, Ok(vec![choice("x", "X")])), Outcome::Stale);
		assert!(list.options().is_empty());
	}
}
