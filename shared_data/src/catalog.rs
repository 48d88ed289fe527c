use std::{collections::HashSet, sync::OnceLock};

use serde::{Deserialize, Serialize};

use crate::i18n::LocalizedText;

static MENU_JSON: &str = include_str!("../data/menu.json");

/// Category id the menu filter uses to mean "everything", so no real category may take it
pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
	pub id: String,
	pub name: LocalizedText,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
	pub id: String,
	pub name: LocalizedText,
	#[serde(rename = "category")]
	pub category_id: String,
	pub image: String,
	#[serde(default)]
	pub featured: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
	#[error("couldn't parse catalog json: {0}")]
	Parse(#[from] serde_json::Error),
	#[error("category '{0}' is declared more than once")]
	DuplicateCategory(String),
	#[error("'all' is reserved for the 'show everything' filter")]
	ReservedCategory,
	#[error("item '{0}' is declared more than once")]
	DuplicateItem(String),
	#[error("item '{item}' belongs to unknown category '{category}'")]
	UnknownCategory { item: String, category: String },
}

/// The fixed, ordered list of dishes. Built once and never mutated; the order items appear in
/// here is the order they're shown and listed in messages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Catalog {
	categories: Vec<MenuCategory>,
	items: Vec<MenuItem>,
}

#[derive(Deserialize)]
struct RawCatalog {
	categories: Vec<MenuCategory>,
	items: Vec<MenuItem>,
}

impl Catalog {
	pub fn new(categories: Vec<MenuCategory>, items: Vec<MenuItem>) -> Result<Self, CatalogError> {
		let mut category_ids = HashSet::new();
		for cat in &categories {
			if cat.id == ALL_CATEGORIES {
				return Err(CatalogError::ReservedCategory);
			}
			if !category_ids.insert(cat.id.as_str()) {
				return Err(CatalogError::DuplicateCategory(cat.id.clone()));
			}
		}

		let mut item_ids = HashSet::new();
		for item in &items {
			if !item_ids.insert(item.id.as_str()) {
				return Err(CatalogError::DuplicateItem(item.id.clone()));
			}
			if !category_ids.contains(item.category_id.as_str()) {
				return Err(CatalogError::UnknownCategory {
					item: item.id.clone(),
					category: item.category_id.clone()
				});
			}
		}

		Ok(Self { categories, items })
	}

	pub fn from_json(json: &str) -> Result<Self, CatalogError> {
		let RawCatalog { categories, items } = serde_json::from_str(json)?;
		Self::new(categories, items)
	}

	/// The catalog compiled into the binary
	#[must_use]
	pub fn bundled() -> &'static Self {
		static CATALOG: OnceLock<Catalog> = OnceLock::new();

		// This is checked by `bundled_catalog_is_valid` below, so it can only fail if someone
		// edits menu.json without running the tests
		CATALOG.get_or_init(|| Self::from_json(MENU_JSON).unwrap())
	}

	#[must_use]
	pub fn categories(&self) -> &[MenuCategory] {
		&self.categories
	}

	#[must_use]
	pub fn items(&self) -> &[MenuItem] {
		&self.items
	}

	#[must_use]
	pub fn category(&self, id: &str) -> Option<&MenuCategory> {
		self.categories.iter().find(|c| c.id == id)
	}

	#[must_use]
	pub fn item(&self, id: &str) -> Option<&MenuItem> {
		self.items.iter().find(|i| i.id == id)
	}

	#[must_use]
	pub fn contains(&self, id: &str) -> bool {
		self.item(id).is_some()
	}

	pub fn featured(&self) -> impl Iterator<Item = &MenuItem> {
		self.items.iter().filter(|i| i.featured)
	}

	pub fn in_category<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a MenuItem> {
		self.items.iter().filter(move |i| i.category_id == category_id)
	}
}

#[cfg(test)]
pub(crate) fn test_item(id: &str, category: &str) -> MenuItem {
	MenuItem {
		id: id.into(),
		name: LocalizedText::new(format!("Item {id}"), format!("آئٹم {id}")),
		category_id: category.into(),
		image: format!("/assets/menu/{id}.webp"),
		featured: false,
	}
}

#[cfg(test)]
pub(crate) fn test_category(id: &str) -> MenuCategory {
	MenuCategory {
		id: id.into(),
		name: LocalizedText::new(format!("Category {id}"), format!("زمرہ {id}")),
	}
}
