use std::{collections::BTreeSet, rc::Rc};

use crate::{
	catalog::{Catalog, MenuCategory, MenuItem, ALL_CATEGORIES},
	i18n::{fill, tr, Locale, StringId, Strings},
	links::whatsapp_link,
};

pub const MIN_GUESTS: u16 = 50;
pub const MAX_GUESTS: u16 = 1000;
pub const GUEST_STEP: u16 = 50;
pub const DEFAULT_GUESTS: u16 = 200;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
	#[default]
	All,
	Category(String),
}

impl CategoryFilter {
	/// The filter buttons carry the category id as their value, with "all" for everything
	#[must_use]
	pub fn from_value(value: &str) -> Self {
		if value == ALL_CATEGORIES {
			Self::All
		} else {
			Self::Category(value.to_string())
		}
	}

	#[must_use]
	pub fn value(&self) -> &str {
		match self {
			Self::All => ALL_CATEGORIES,
			Self::Category(id) => id,
		}
	}

	#[must_use]
	pub fn matches(&self, item: &MenuItem) -> bool {
		match self {
			Self::All => true,
			Self::Category(id) => item.category_id == *id,
		}
	}
}

/// The "build your own menu" picker.
///
/// The selection survives filter changes, so something picked under "BBQ" stays picked while
/// browsing "Desserts". Only ids that exist in the catalog can ever be selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuSelector {
	catalog: Rc<Catalog>,
	filter: CategoryFilter,
	selected: BTreeSet<String>,
	guest_estimate: u16,
}

impl MenuSelector {
	#[must_use]
	pub fn new(catalog: Rc<Catalog>) -> Self {
		Self {
			catalog,
			filter: CategoryFilter::All,
			selected: BTreeSet::new(),
			guest_estimate: DEFAULT_GUESTS,
		}
	}

	#[must_use]
	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	#[must_use]
	pub fn filter(&self) -> &CategoryFilter {
		&self.filter
	}

	#[must_use]
	pub fn guest_estimate(&self) -> u16 {
		self.guest_estimate
	}

	pub fn set_filter(&mut self, filter: CategoryFilter) {
		self.filter = filter;
	}

	pub fn visible_items(&self) -> impl Iterator<Item = &MenuItem> {
		self.catalog.items()
			.iter()
			.filter(|item| self.filter.matches(item))
	}

	#[must_use]
	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.contains(id)
	}

	/// Flip `id` in or out of the selection, returning whether it's now selected. Ids the catalog
	/// doesn't know about are ignored.
	pub fn toggle(&mut self, id: &str) -> bool {
		if !self.catalog.contains(id) {
			return false;
		}

		if self.selected.remove(id) {
			false
		} else {
			self.selected.insert(id.to_string());
			true
		}
	}

	pub fn clear_all(&mut self) {
		self.selected.clear();
	}

	#[must_use]
	pub fn selected_count(&self) -> usize {
		self.selected.len()
	}

	/// Selected items in catalog order (not the order they were picked in)
	pub fn selected_items(&self) -> impl Iterator<Item = &MenuItem> {
		self.catalog.items()
			.iter()
			.filter(|item| self.selected.contains(&item.id))
	}

	/// How many selected items each category has, for the badges on the filter buttons. Every
	/// category is listed, even with a count of zero.
	#[must_use]
	pub fn category_counts(&self) -> Vec<(&MenuCategory, usize)> {
		self.catalog.categories()
			.iter()
			.map(|cat| (cat, self.count_in(&cat.id)))
			.collect()
	}

	#[must_use]
	pub fn count_in(&self, category_id: &str) -> usize {
		self.selected_items()
			.filter(|item| item.category_id == category_id)
			.count()
	}

	pub fn increment_guests(&mut self) {
		self.guest_estimate = self.guest_estimate.saturating_add(GUEST_STEP).min(MAX_GUESTS);
	}

	pub fn decrement_guests(&mut self) {
		self.guest_estimate = self.guest_estimate.saturating_sub(GUEST_STEP).max(MIN_GUESTS);
	}

	/// For the slider, which can hand us anything
	pub fn set_guest_estimate(&mut self, guests: i64) {
		self.guest_estimate = guests.clamp(i64::from(MIN_GUESTS), i64::from(MAX_GUESTS))
			.try_into()
			.unwrap_or(DEFAULT_GUESTS);
	}

	/// The text we hand to WhatsApp: a greeting, the guest estimate, then one section per
	/// category that has anything selected, then a closing line. Categories and items keep catalog
	/// order.
	#[must_use]
	pub fn compose_summary<S: Strings + ?Sized>(&self, strings: &S, locale: Locale) -> String {
		let guests = self.guest_estimate.to_string();
		let mut lines = vec![
			tr(strings, locale, StringId::MenuGreeting).into_owned(),
			fill(&tr(strings, locale, StringId::MenuGuestLine), &[("count", guests.as_str())]),
		];

		for cat in self.catalog.categories() {
			let mut items = self.selected_items()
				.filter(|item| item.category_id == cat.id)
				.peekable();

			if items.peek().is_none() {
				continue;
			}

			lines.push(String::new());
			lines.push(format!("*{}*", cat.name.get(locale)));
			lines.extend(items.map(|item| format!("- {}", item.name.get(locale))));
		}

		lines.push(String::new());
		lines.push(tr(strings, locale, StringId::MenuClosing).into_owned());

		lines.join("\n")
	}

	#[must_use]
	pub fn whatsapp_link<S: Strings + ?Sized>(&self, phone: &str, strings: &S, locale: Locale) -> String {
		whatsapp_link(phone, &self.compose_summary(strings, locale))
	}
}
