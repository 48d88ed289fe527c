use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::i18n::LocalizedText;

static SITE_JSON: &str = include_str!("../data/site.json");

/// The server hands the configured [`ContactInfo`] to the yew app as JSON inside a
/// `<script type="application/json">` with this id
pub const CONTACT_SCRIPT_ID: &str = "contact-info";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
	pub whatsapp: String,
	pub phone: String,
	pub email: String,
	pub address: LocalizedText,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueInfo {
	pub id: String,
	pub name: LocalizedText,
	pub description: LocalizedText,
	// a display label like "300-1000", same as the guest buckets
	pub capacity: String,
	pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
	pub id: String,
	pub name: LocalizedText,
	pub price_per_head: u32,
	pub items: Vec<LocalizedText>,
	#[serde(default)]
	pub popular: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
	pub name: String,
	pub event: LocalizedText,
	pub quote: LocalizedText,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
	pub question: LocalizedText,
	pub answer: LocalizedText,
}

/// Everything on the informational pages. Read-only; loaded once.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
	pub business_name: LocalizedText,
	pub contact: ContactInfo,
	pub venues: Vec<VenueInfo>,
	pub packages: Vec<Package>,
	pub testimonials: Vec<Testimonial>,
	pub faq: Vec<FaqEntry>,
}

impl SiteContent {
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}

	#[must_use]
	pub fn bundled() -> &'static Self {
		static CONTENT: OnceLock<SiteContent> = OnceLock::new();

		// Same deal as the catalog: `bundled_content_parses` keeps this honest
		CONTENT.get_or_init(|| Self::from_json(SITE_JSON).unwrap())
	}
}

/// Format a price the way people here write it, e.g. `Rs. 2,600`
#[must_use]
pub fn format_rupees(amount: u32) -> String {
	let digits = amount.to_string();
	let mut out = String::with_capacity(digits.len() + digits.len() / 3);
	for (idx, ch) in digits.chars().enumerate() {
		if idx != 0 && (digits.len() - idx) % 3 == 0 {
			out.push(',');
		}
		out.push(ch);
	}
	format!("Rs. {out}")
}
