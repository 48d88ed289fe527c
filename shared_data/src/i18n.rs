use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	#[default]
	En,
	Ur,
}

impl Locale {
	pub const ALL: [Self; 2] = [Self::En, Self::Ur];

	#[must_use]
	pub const fn code(self) -> &'static str {
		match self {
			Self::En => "en",
			Self::Ur => "ur",
		}
	}

	/// Text direction, for the `dir` attribute on `<html>`
	#[must_use]
	pub const fn dir(self) -> &'static str {
		match self {
			Self::En => "ltr",
			Self::Ur => "rtl",
		}
	}

	/// The locale the language switcher should offer
	#[must_use]
	pub const fn other(self) -> Self {
		match self {
			Self::En => Self::Ur,
			Self::Ur => Self::En,
		}
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
	type Err = UnknownLocale;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"en" => Ok(Self::En),
			"ur" => Ok(Self::Ur),
			_ => Err(UnknownLocale(s.to_string())),
		}
	}
}

/// A piece of bundled data (dish names, venue descriptions, ...) that exists in both languages.
/// Urdu is allowed to be missing, in which case we show the English.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
	pub en: String,
	#[serde(default)]
	pub ur: String,
}

impl LocalizedText {
	#[must_use]
	pub fn new(en: impl Into<String>, ur: impl Into<String>) -> Self {
		Self { en: en.into(), ur: ur.into() }
	}

	#[must_use]
	pub fn get(&self, locale: Locale) -> &str {
		match locale {
			Locale::Ur if !self.ur.is_empty() => &self.ur,
			_ => &self.en,
		}
	}
}

/// Anything that can turn a [`StringId`] into text for a given locale. Components get one of
/// these handed to them instead of reaching for a global table, so tests can swap in their own.
pub trait Strings {
	fn lookup(&self, locale: Locale, id: StringId) -> Option<&str>;
}

impl<S: Strings + ?Sized> Strings for &S {
	fn lookup(&self, locale: Locale, id: StringId) -> Option<&str> {
		(**self).lookup(locale, id)
	}
}

/// Resolve `id`: the requested locale first, then English, then the key itself so that a missing
/// string is visible on the page instead of silently blank.
pub fn tr<S: Strings + ?Sized>(strings: &S, locale: Locale, id: StringId) -> Cow<'_, str> {
	strings.lookup(locale, id)
		.or_else(|| strings.lookup(Locale::En, id))
		.map_or_else(|| Cow::Borrowed(id.key()), Cow::Borrowed)
}

/// Replace every `{name}` placeholder in `template` with its value
#[must_use]
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
	vars.iter()
		.fold(template.to_string(), |acc, (name, value)| acc.replace(&format!("{{{name}}}"), value))
}

/// The string table that ships with the site
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BundledStrings;

// Every id gets both of its translations right next to it so that it's hard to add one and forget
// the other. An empty string counts as missing.
macro_rules! string_table{
	($($id:ident => $key:literal { en: $en:literal, ur: $ur:literal }),* $(,)?) => {
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
		pub enum StringId {
			$($id),*
		}

		impl StringId {
			pub const ALL: &'static [Self] = &[$(Self::$id),*];

			#[must_use]
			pub const fn key(self) -> &'static str {
				match self {
					$(Self::$id => $key),*
				}
			}
		}

		impl Strings for BundledStrings {
			fn lookup(&self, locale: Locale, id: StringId) -> Option<&str> {
				let text = match (locale, id) {
					$(
						(Locale::En, StringId::$id) => $en,
						(Locale::Ur, StringId::$id) => $ur,
					)*
				};
				(!text.is_empty()).then_some(text)
			}
		}
	}
}

string_table! {
	// navigation
	NavHome => "nav.home" { en: "Home", ur: "ہوم" },
	NavVenues => "nav.venues" { en: "Venues", ur: "مقامات" },
	NavMenu => "nav.menu" { en: "Menu", ur: "مینو" },
	NavPackages => "nav.packages" { en: "Packages", ur: "پیکجز" },
	NavFaq => "nav.faq" { en: "FAQ", ur: "عمومی سوالات" },
	NavBook => "nav.book" { en: "Book Now", ur: "ابھی بک کریں" },
	LanguageToggle => "nav.language" { en: "اردو", ur: "English" },

	// home & static pages
	HomeHeadline => "home.headline" { en: "Weddings & events, catered with care", ur: "شادیاں اور تقریبات، محبت سے سجی ہوئی" },
	HomeTagline => "home.tagline" {
		en: "Two banquet venues, a full kitchen, and a team that has done this a thousand times.",
		ur: "دو شاندار ہال، مکمل کچن، اور ایک تجربہ کار ٹیم۔"
	},
	FeaturedDishes => "home.featured" { en: "Signature dishes", ur: "خاص پکوان" },
	TestimonialsTitle => "home.testimonials" { en: "What our clients say", ur: "ہمارے کلائنٹس کیا کہتے ہیں" },
	VenueCapacity => "venues.capacity" { en: "Capacity", ur: "گنجائش" },
	PackagesPerHead => "packages.per_head" { en: "per head", ur: "فی کس" },
	PackagesPopular => "packages.popular" { en: "Most popular", ur: "سب سے مقبول" },
	FaqTitle => "faq.title" { en: "Frequently asked questions", ur: "عمومی سوالات" },

	// contact
	WhatsAppCta => "contact.whatsapp" { en: "Continue on WhatsApp", ur: "واٹس ایپ پر جاری رکھیں" },
	CallCta => "contact.call" { en: "Call Us", ur: "ہمیں کال کریں" },

	// booking wizard
	StepCounter => "booking.step" { en: "Step {current} of {total}", ur: "مرحلہ {current} از {total}" },
	StepEventDetails => "booking.step.event" { en: "Event Details", ur: "تقریب کی تفصیلات" },
	StepServices => "booking.step.services" { en: "Venue & Services", ur: "مقام اور خدمات" },
	StepContact => "booking.step.contact" { en: "Contact Info", ur: "رابطے کی معلومات" },
	StepReview => "booking.step.review" { en: "Review & Submit", ur: "جائزہ اور جمع کریں" },
	FieldEventType => "booking.field.event_type" { en: "Event Type", ur: "تقریب کی قسم" },
	FieldEventDate => "booking.field.event_date" { en: "Event Date", ur: "تقریب کی تاریخ" },
	FieldGuestCount => "booking.field.guest_count" { en: "Number of Guests", ur: "مہمانوں کی تعداد" },
	FieldVenue => "booking.field.venue" { en: "Venue", ur: "مقام" },
	FieldName => "booking.field.name" { en: "Full Name", ur: "پورا نام" },
	FieldPhone => "booking.field.phone" { en: "Phone Number", ur: "فون نمبر" },
	FieldEmail => "booking.field.email" { en: "Email (optional)", ur: "ای میل (اختیاری)" },
	FieldNotes => "booking.field.notes" { en: "Additional Notes", ur: "اضافی تفصیلات" },
	SelectPlaceholder => "booking.select" { en: "Select...", ur: "منتخب کریں..." },
	NotProvided => "booking.not_provided" { en: "Not provided", ur: "فراہم نہیں کیا گیا" },
	EventWedding => "event.wedding" { en: "Wedding", ur: "شادی" },
	EventMehndi => "event.mehndi" { en: "Mehndi", ur: "مہندی" },
	EventBarat => "event.barat" { en: "Barat", ur: "بارات" },
	EventWalima => "event.walima" { en: "Walima", ur: "ولیمہ" },
	EventCorporate => "event.corporate" { en: "Corporate Event", ur: "کارپوریٹ تقریب" },
	EventBirthday => "event.birthday" { en: "Birthday", ur: "سالگرہ" },
	EventOther => "event.other" { en: "Other", ur: "دیگر" },
	VenueGrandMarquee => "venue.grand_marquee" { en: "Grand Marquee", ur: "گرینڈ مارکی" },
	VenueRoyalHall => "venue.royal_hall" { en: "Royal Banquet Hall", ur: "رائل بینکوئٹ ہال" },
	VenueCateringOnly => "venue.catering_only" { en: "Catering Only (your venue)", ur: "صرف کیٹرنگ (آپ کا مقام)" },
	VenueBoth => "venue.both" { en: "Both Venues", ur: "دونوں مقامات" },
	ButtonNext => "booking.next" { en: "Next", ur: "آگے" },
	ButtonBack => "booking.back" { en: "Back", ur: "پیچھے" },
	ButtonSubmit => "booking.submit" { en: "Submit Inquiry", ur: "درخواست جمع کریں" },
	ButtonSubmitting => "booking.submitting" { en: "Submitting...", ur: "جمع ہو رہی ہے..." },
	ErrorRequired => "error.required" { en: "This field is required", ur: "یہ خانہ ضروری ہے" },
	ErrorDateInPast => "error.date_in_past" { en: "Please choose today or a later date", ur: "براہ کرم آج یا بعد کی تاریخ منتخب کریں" },
	ErrorInvalidEmail => "error.invalid_email" { en: "Please enter a valid email address", ur: "براہ کرم درست ای میل درج کریں" },
	ThankYouTitle => "booking.thanks.title" { en: "Thank you, {name}!", ur: "شکریہ، {name}!" },
	ThankYouBody => "booking.thanks.body" {
		en: "We have received your inquiry and will get back to you shortly.",
		ur: "ہمیں آپ کی درخواست موصول ہو گئی ہے، ہم جلد آپ سے رابطہ کریں گے۔"
	},
	BookingGreeting => "booking.whatsapp.greeting" {
		en: "Assalam-o-Alaikum! My name is {name} and I just sent a booking inquiry through your website.",
		ur: "السلام علیکم! میرا نام {name} ہے اور میں نے ابھی آپ کی ویب سائٹ سے بکنگ کی درخواست بھیجی ہے۔"
	},

	// menu selector
	MenuTitle => "menu.title" { en: "Build your menu", ur: "اپنا مینو بنائیں" },
	MenuAll => "menu.all" { en: "All", ur: "سب" },
	MenuGuests => "menu.guests" { en: "Guests", ur: "مہمان" },
	MenuSelected => "menu.selected" { en: "Your selection", ur: "آپ کا انتخاب" },
	MenuClearAll => "menu.clear" { en: "Clear all", ur: "سب ہٹائیں" },
	MenuEmpty => "menu.empty" { en: "Tap dishes to add them to your menu", ur: "مینو میں شامل کرنے کے لیے پکوان منتخب کریں" },
	MenuFeatured => "menu.featured" { en: "Featured", ur: "خاص" },
	MenuSend => "menu.send" { en: "Get a quote on WhatsApp", ur: "واٹس ایپ پر قیمت معلوم کریں" },
	MenuGreeting => "menu.whatsapp.greeting" {
		en: "Assalam-o-Alaikum! I would like a quote for this custom menu.",
		ur: "السلام علیکم! مجھے اس مینو کی قیمت معلوم کرنی ہے۔"
	},
	MenuGuestLine => "menu.whatsapp.guests" { en: "Estimated guests: {count}", ur: "متوقع مہمان: {count}" },
	MenuClosing => "menu.whatsapp.closing" {
		en: "Please share pricing and availability.",
		ur: "براہ کرم قیمت اور دستیابی سے آگاہ کریں۔"
	},
}
