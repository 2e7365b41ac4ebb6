use std::collections::BTreeSet;

/// Ids the user currently has selected. Ids are not checked against any catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
	ids: BTreeSet<String>,
}

impl SelectionSet {
	/// Empty selection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `id` if absent, removes it if present. Returns whether it is now selected.
	pub fn toggle(&mut self, id: &str) -> bool {
		if self.ids.remove(id) {
			false
		} else {
			self.ids.insert(id.to_owned());
			true
		}
	}

	/// Removes every id.
	pub fn clear(&mut self) {
		self.ids.clear();
	}

	/// Whether `id` is selected.
	pub fn contains(&self, id: &str) -> bool {
		self.ids.contains(id)
	}

	/// Number of selected ids, orphans included.
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	/// Whether nothing is selected.
	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	/// Selected ids in sorted order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.ids.iter().map(String::as_str)
	}
}
