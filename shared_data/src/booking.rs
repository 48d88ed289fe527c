use std::{collections::BTreeMap, str::FromStr, sync::LazyLock, time::Duration};

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
	clock::Clock,
	i18n::{fill, tr, Locale, StringId, Strings},
	links::whatsapp_link,
};

/// How long the pretend submission takes before we show the thank-you view
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

static EMAIL: LazyLock<Regex> = LazyLock::new(||
	// the literal is fine, so this can't fail
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
);

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {kind}")]
pub struct UnknownChoice {
	pub kind: &'static str,
	pub value: String,
}

// All the <select> options in the form are closed sets that need a stable form value, a way back
// from that value, and a translated label. Writing that out by hand three times got old.
macro_rules! choice{
	($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal, $label:ident),* $(,)? }) => {
		$(#[$meta])*
		#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
		pub enum $name {
			$(#[serde(rename = $value)] $variant),*
		}

		impl $name {
			pub const ALL: &'static [Self] = &[$(Self::$variant),*];

			#[must_use]
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Self::$variant => $value),*
				}
			}

			#[must_use]
			pub const fn label(self) -> StringId {
				match self {
					$(Self::$variant => StringId::$label),*
				}
			}
		}

		impl FromStr for $name {
			type Err = UnknownChoice;
			fn from_str(s: &str) -> Result<Self, Self::Err> {
				match s {
					$($value => Ok(Self::$variant),)*
					_ => Err(UnknownChoice { kind: stringify!($name), value: s.to_string() })
				}
			}
		}
	}
}

choice!(EventType {
	Wedding => "wedding", EventWedding,
	Mehndi => "mehndi", EventMehndi,
	Barat => "barat", EventBarat,
	Walima => "walima", EventWalima,
	Corporate => "corporate", EventCorporate,
	Birthday => "birthday", EventBirthday,
	Other => "other", EventOther,
});

choice!(Venue {
	VenueA => "venue-a", VenueGrandMarquee,
	VenueB => "venue-b", VenueRoyalHall,
	CateringOnly => "catering-only", VenueCateringOnly,
	Both => "both", VenueBoth,
});

/// The guest count buckets. We only ever need the label (it goes straight into the message), so
/// there's deliberately no numeric range attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuestRange {
	#[serde(rename = "50-100")]
	UpTo100,
	#[serde(rename = "100-200")]
	UpTo200,
	#[serde(rename = "200-300")]
	UpTo300,
	#[serde(rename = "300-500")]
	UpTo500,
	#[serde(rename = "500-700")]
	UpTo700,
	#[serde(rename = "700+")]
	Over700,
}

impl GuestRange {
	pub const ALL: &'static [Self] = &[
		Self::UpTo100, Self::UpTo200, Self::UpTo300, Self::UpTo500, Self::UpTo700, Self::Over700
	];

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			Self::UpTo100 => "50-100",
			Self::UpTo200 => "100-200",
			Self::UpTo300 => "200-300",
			Self::UpTo500 => "300-500",
			Self::UpTo700 => "500-700",
			Self::Over700 => "700+",
		}
	}
}

impl FromStr for GuestRange {
	type Err = UnknownChoice;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL.iter()
			.copied()
			.find(|r| r.label() == s)
			.ok_or_else(|| UnknownChoice { kind: "GuestRange", value: s.to_string() })
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
	#[default]
	EventDetails,
	Services,
	Contact,
	Review,
}

impl Step {
	pub const ALL: [Self; 4] = [Self::EventDetails, Self::Services, Self::Contact, Self::Review];

	/// 1-based, for "Step 2 of 4"
	#[must_use]
	pub const fn number(self) -> u8 {
		match self {
			Self::EventDetails => 1,
			Self::Services => 2,
			Self::Contact => 3,
			Self::Review => 4,
		}
	}

	#[must_use]
	pub const fn next(self) -> Option<Self> {
		match self {
			Self::EventDetails => Some(Self::Services),
			Self::Services => Some(Self::Contact),
			Self::Contact => Some(Self::Review),
			Self::Review => None,
		}
	}

	#[must_use]
	pub const fn prev(self) -> Option<Self> {
		match self {
			Self::EventDetails => None,
			Self::Services => Some(Self::EventDetails),
			Self::Contact => Some(Self::Services),
			Self::Review => Some(Self::Contact),
		}
	}

	#[must_use]
	pub const fn title(self) -> StringId {
		match self {
			Self::EventDetails => StringId::StepEventDetails,
			Self::Services => StringId::StepServices,
			Self::Contact => StringId::StepContact,
			Self::Review => StringId::StepReview,
		}
	}

	#[must_use]
	pub const fn fields(self) -> &'static [Field] {
		match self {
			Self::EventDetails => &[Field::EventType, Field::EventDate, Field::GuestCount],
			Self::Services => &[Field::Venue],
			Self::Contact => &[Field::Name, Field::Phone, Field::Email, Field::Notes],
			Self::Review => &[],
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
	EventType,
	EventDate,
	GuestCount,
	Venue,
	Name,
	Phone,
	Email,
	Notes,
}

impl Field {
	pub const ALL: [Self; 8] = [
		Self::EventType, Self::EventDate, Self::GuestCount, Self::Venue,
		Self::Name, Self::Phone, Self::Email, Self::Notes
	];

	/// Used as the input's `name`/`id` in the form
	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::EventType => "eventType",
			Self::EventDate => "eventDate",
			Self::GuestCount => "guestCount",
			Self::Venue => "venue",
			Self::Name => "name",
			Self::Phone => "phone",
			Self::Email => "email",
			Self::Notes => "notes",
		}
	}

	#[must_use]
	pub const fn label(self) -> StringId {
		match self {
			Self::EventType => StringId::FieldEventType,
			Self::EventDate => StringId::FieldEventDate,
			Self::GuestCount => StringId::FieldGuestCount,
			Self::Venue => StringId::FieldVenue,
			Self::Name => StringId::FieldName,
			Self::Phone => StringId::FieldPhone,
			Self::Email => StringId::FieldEmail,
			Self::Notes => StringId::FieldNotes,
		}
	}

	#[must_use]
	pub const fn step(self) -> Step {
		match self {
			Self::EventType | Self::EventDate | Self::GuestCount => Step::EventDetails,
			Self::Venue => Step::Services,
			Self::Name | Self::Phone | Self::Email | Self::Notes => Step::Contact,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("this field is required")]
	Required,
	#[error("the event date can't be in the past")]
	DateInPast,
	#[error("that doesn't look like an email address")]
	InvalidEmail,
}

impl FieldError {
	#[must_use]
	pub const fn message(self) -> StringId {
		match self {
			Self::Required => StringId::ErrorRequired,
			Self::DateInPast => StringId::ErrorDateInPast,
			Self::InvalidEmail => StringId::ErrorInvalidEmail,
		}
	}
}

pub type FieldErrors = BTreeMap<Field, FieldError>;

/// One field's worth of user input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldValue {
	EventType(Option<EventType>),
	EventDate(Option<NaiveDate>),
	GuestCount(Option<GuestRange>),
	Venue(Option<Venue>),
	Name(String),
	Phone(String),
	Email(String),
	Notes(String),
}

impl FieldValue {
	#[must_use]
	pub const fn field(&self) -> Field {
		match self {
			Self::EventType(_) => Field::EventType,
			Self::EventDate(_) => Field::EventDate,
			Self::GuestCount(_) => Field::GuestCount,
			Self::Venue(_) => Field::Venue,
			Self::Name(_) => Field::Name,
			Self::Phone(_) => Field::Phone,
			Self::Email(_) => Field::Email,
			Self::Notes(_) => Field::Notes,
		}
	}

	/// Build a value from what a form control hands us. Selects and date inputs give an empty
	/// string when nothing's chosen, which we treat as unset.
	pub fn parse(field: Field, raw: &str) -> Result<Self, UnknownChoice> {
		fn opt<T: FromStr<Err = UnknownChoice>>(raw: &str) -> Result<Option<T>, UnknownChoice> {
			if raw.is_empty() { Ok(None) } else { raw.parse().map(Some) }
		}

		Ok(match field {
			Field::EventType => Self::EventType(opt(raw)?),
			Field::GuestCount => Self::GuestCount(opt(raw)?),
			Field::Venue => Self::Venue(opt(raw)?),
			Field::EventDate => Self::EventDate(if raw.is_empty() {
				None
			} else {
				Some(NaiveDate::parse_from_str(raw, "%Y-%m-%d")
					.map_err(|_| UnknownChoice { kind: "date", value: raw.to_string() })?)
			}),
			Field::Name => Self::Name(raw.to_string()),
			Field::Phone => Self::Phone(raw.to_string()),
			Field::Email => Self::Email(raw.to_string()),
			Field::Notes => Self::Notes(raw.to_string()),
		})
	}
}

/// What the visitor has typed so far. Lives only as long as the wizard does.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
	pub event_type: Option<EventType>,
	pub event_date: Option<NaiveDate>,
	pub guest_count: Option<GuestRange>,
	pub venue: Option<Venue>,
	pub name: String,
	pub phone: String,
	pub email: String,
	pub notes: String,
}

impl BookingDraft {
	pub fn apply(&mut self, value: FieldValue) {
		match value {
			FieldValue::EventType(v) => self.event_type = v,
			FieldValue::EventDate(v) => self.event_date = v,
			FieldValue::GuestCount(v) => self.guest_count = v,
			FieldValue::Venue(v) => self.venue = v,
			FieldValue::Name(v) => self.name = v,
			FieldValue::Phone(v) => self.phone = v,
			FieldValue::Email(v) => self.email = v,
			FieldValue::Notes(v) => self.notes = v,
		}
	}

	/// Check only the rules that belong to `step`; what's on other steps doesn't matter here.
	/// Every broken rule is reported, not just the first.
	#[must_use]
	pub fn validate(&self, step: Step, today: NaiveDate) -> FieldErrors {
		let mut errors = FieldErrors::new();

		match step {
			Step::EventDetails => {
				if self.event_type.is_none() {
					errors.insert(Field::EventType, FieldError::Required);
				}
				let date_err = match self.event_date {
					None => Some(FieldError::Required),
					Some(date) if date < today => Some(FieldError::DateInPast),
					Some(_) => None,
				};
				if let Some(err) = date_err {
					errors.insert(Field::EventDate, err);
				}
				if self.guest_count.is_none() {
					errors.insert(Field::GuestCount, FieldError::Required);
				}
			},
			Step::Services => if self.venue.is_none() {
				errors.insert(Field::Venue, FieldError::Required);
			},
			Step::Contact => {
				if self.name.trim().is_empty() {
					errors.insert(Field::Name, FieldError::Required);
				}
				if self.phone.trim().is_empty() {
					errors.insert(Field::Phone, FieldError::Required);
				}
				let email = self.email.trim();
				if !email.is_empty() && !EMAIL.is_match(email) {
					errors.insert(Field::Email, FieldError::InvalidEmail);
				}
			},
			Step::Review => (),
		}

		errors
	}

	/// The localized value of `field` as it should appear on the review step
	#[must_use]
	pub fn display_value<S: Strings + ?Sized>(&self, field: Field, strings: &S, locale: Locale) -> String {
		let text = match field {
			Field::EventType => self.event_type.map(|e| tr(strings, locale, e.label()).into_owned()),
			Field::EventDate => self.event_date.map(|d| d.format("%d %b %Y").to_string()),
			Field::GuestCount => self.guest_count.map(|g| g.label().to_string()),
			Field::Venue => self.venue.map(|v| tr(strings, locale, v.label()).into_owned()),
			Field::Name => non_empty(&self.name),
			Field::Phone => non_empty(&self.phone),
			Field::Email => non_empty(&self.email),
			Field::Notes => non_empty(&self.notes),
		};

		text.unwrap_or_else(|| tr(strings, locale, StringId::NotProvided).into_owned())
	}

	/// (label, value) pairs for everything on steps 1-3, in form order
	#[must_use]
	pub fn summary<S: Strings + ?Sized>(&self, strings: &S, locale: Locale) -> Vec<(String, String)> {
		Field::ALL.iter()
			.map(|&f| (
				tr(strings, locale, f.label()).into_owned(),
				self.display_value(f, strings, locale)
			))
			.collect()
	}
}

fn non_empty(s: &str) -> Option<String> {
	let s = s.trim();
	(!s.is_empty()).then(|| s.to_string())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Phase {
	#[default]
	Editing,
	// the submit button's been hit and we're waiting out the delay
	InFlight,
	Submitted(BookingDraft),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
	#[error("{0} field(s) on this step need attention")]
	Invalid(usize),
	#[error("the review step submits instead of moving forward")]
	NoNextStep,
	#[error("already on the first step")]
	NoPreviousStep,
	#[error("submitting is only possible from the review step")]
	NotOnReview,
	#[error("a submission is already in flight")]
	InFlight,
	#[error("nothing is being submitted")]
	NotInFlight,
	#[error("this inquiry has already been submitted")]
	Submitted,
}

/// The four-step booking inquiry.
///
/// Moving forward validates the step being left and refuses to move if anything's wrong; moving
/// back never validates. Editing a field clears that field's error straight away without
/// re-checking it: the error only comes back on the next attempt to move forward. Once the
/// submission has gone through, the wizard is frozen on a snapshot of what was sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingWizard {
	step: Step,
	draft: BookingDraft,
	errors: FieldErrors,
	phase: Phase,
}

impl BookingWizard {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn step(&self) -> Step {
		self.step
	}

	#[must_use]
	pub fn draft(&self) -> &BookingDraft {
		&self.draft
	}

	#[must_use]
	pub fn errors(&self) -> &FieldErrors {
		&self.errors
	}

	#[must_use]
	pub fn error(&self, field: Field) -> Option<FieldError> {
		self.errors.get(&field).copied()
	}

	#[must_use]
	pub fn phase(&self) -> &Phase {
		&self.phase
	}

	#[must_use]
	pub fn is_in_flight(&self) -> bool {
		self.phase == Phase::InFlight
	}

	#[must_use]
	pub fn submitted(&self) -> Option<&BookingDraft> {
		match self.phase {
			Phase::Submitted(ref draft) => Some(draft),
			_ => None,
		}
	}

	fn ensure_editing(&self) -> Result<(), TransitionError> {
		match self.phase {
			Phase::Editing => Ok(()),
			Phase::InFlight => Err(TransitionError::InFlight),
			Phase::Submitted(_) => Err(TransitionError::Submitted),
		}
	}

	pub fn set(&mut self, value: FieldValue) -> Result<(), TransitionError> {
		self.ensure_editing()?;
		self.errors.remove(&value.field());
		self.draft.apply(value);
		Ok(())
	}

	pub fn set_event_type(&mut self, event_type: EventType) -> Result<(), TransitionError> {
		self.set(FieldValue::EventType(Some(event_type)))
	}

	pub fn set_event_date(&mut self, date: NaiveDate) -> Result<(), TransitionError> {
		self.set(FieldValue::EventDate(Some(date)))
	}

	pub fn set_guest_count(&mut self, guests: GuestRange) -> Result<(), TransitionError> {
		self.set(FieldValue::GuestCount(Some(guests)))
	}

	pub fn set_venue(&mut self, venue: Venue) -> Result<(), TransitionError> {
		self.set(FieldValue::Venue(Some(venue)))
	}

	pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), TransitionError> {
		self.set(FieldValue::Name(name.into()))
	}

	pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<(), TransitionError> {
		self.set(FieldValue::Phone(phone.into()))
	}

	pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), TransitionError> {
		self.set(FieldValue::Email(email.into()))
	}

	pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<(), TransitionError> {
		self.set(FieldValue::Notes(notes.into()))
	}

	/// Try to move to the next step. On failure the step stays put and the error set becomes
	/// exactly what's wrong with the current step.
	pub fn next(&mut self, today: NaiveDate) -> Result<Step, TransitionError> {
		self.ensure_editing()?;
		let next = self.step.next().ok_or(TransitionError::NoNextStep)?;

		let errors = self.draft.validate(self.step, today);
		if errors.is_empty() {
			self.errors.clear();
			self.step = next;
			Ok(next)
		} else {
			let count = errors.len();
			self.errors = errors;
			Err(TransitionError::Invalid(count))
		}
	}

	pub fn back(&mut self) -> Result<Step, TransitionError> {
		self.ensure_editing()?;
		let prev = self.step.prev().ok_or(TransitionError::NoPreviousStep)?;
		self.step = prev;
		Ok(prev)
	}

	/// Start submitting from the review step. Steps 1-3 get checked once more since the date
	/// could've slipped into the past while the page sat open; if so we jump back to the first
	/// step with a problem.
	pub fn begin_submit(&mut self, today: NaiveDate) -> Result<(), TransitionError> {
		self.ensure_editing()?;
		if self.step != Step::Review {
			return Err(TransitionError::NotOnReview);
		}

		let errors = Step::ALL.iter()
			.flat_map(|&step| self.draft.validate(step, today))
			.collect::<FieldErrors>();

		if let Some(first) = errors.keys().next() {
			self.step = first.step();
			let count = errors.len();
			self.errors = errors;
			return Err(TransitionError::Invalid(count));
		}

		self.errors.clear();
		self.phase = Phase::InFlight;
		Ok(())
	}

	/// Finish the pretend submission, handing back what was sent. There's no failure path; it
	/// always goes through.
	pub fn finish_submit(&mut self) -> Result<&BookingDraft, TransitionError> {
		match self.phase {
			Phase::InFlight => {
				self.phase = Phase::Submitted(self.draft.clone());
				Ok(&self.draft)
			},
			Phase::Editing => Err(TransitionError::NotInFlight),
			Phase::Submitted(_) => Err(TransitionError::Submitted),
		}
	}

	/// The whole submission in one go, for callers that can hold onto the wizard across the
	/// delay. The UI does the two halves itself since it can't.
	pub async fn submit<C: Clock + ?Sized>(&mut self, clock: &C) -> Result<(), TransitionError> {
		self.begin_submit(clock.today())?;
		clock.delay(SUBMIT_DELAY).await;
		self.finish_submit().map(drop)
	}

	/// "Thank you, {name}!" once submitted
	#[must_use]
	pub fn confirmation_title<S: Strings + ?Sized>(&self, strings: &S, locale: Locale) -> Option<String> {
		self.submitted().map(|draft| fill(
			&tr(strings, locale, StringId::ThankYouTitle),
			&[("name", draft.name.trim())]
		))
	}

	/// The message we prefill when the visitor follows up on WhatsApp after submitting: the
	/// greeting, then the event details so the business knows which inquiry this is
	#[must_use]
	pub fn whatsapp_greeting<S: Strings + ?Sized>(&self, strings: &S, locale: Locale) -> Option<String> {
		let draft = self.submitted()?;

		let mut lines = vec![
			fill(&tr(strings, locale, StringId::BookingGreeting), &[("name", draft.name.trim())]),
			String::new(),
		];
		lines.extend(Step::EventDetails.fields()
			.iter()
			.chain(Step::Services.fields())
			.map(|&field| format!(
				"- {}: {}",
				tr(strings, locale, field.label()),
				draft.display_value(field, strings, locale)
			)));

		Some(lines.join("\n"))
	}

	#[must_use]
	pub fn whatsapp_cta<S: Strings + ?Sized>(&self, phone: &str, strings: &S, locale: Locale) -> Option<String> {
		self.whatsapp_greeting(strings, locale)
			.map(|msg| whatsapp_link(phone, &msg))
	}
}

#[cfg(test)]
mod tests {
	use chrono::Days;
	use futures::executor::block_on;

	use super::*;
	use crate::{clock::testing::FixedClock, i18n::BundledStrings};

	fn today() -> NaiveDate {
		NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()
	}

	fn future() -> NaiveDate {
		today().checked_add_days(Days::new(30)).unwrap()
	}

	fn filled_in() -> BookingWizard {
		let mut wiz = BookingWizard::new();
		wiz.set_event_type(EventType::Walima).unwrap();
		wiz.set_event_date(future()).unwrap();
		wiz.set_guest_count(GuestRange::UpTo500).unwrap();
		wiz.next(today()).unwrap();
		wiz.set_venue(Venue::Both).unwrap();
		wiz.next(today()).unwrap();
		wiz.set_name("Fatima Khan").unwrap();
		wiz.set_phone("+92 321 7654321").unwrap();
		wiz.next(today()).unwrap();
		wiz
	}

	#[test]
	fn empty_first_step_reports_everything_at_once() {
		let mut wiz = BookingWizard::new();
		assert_eq!(wiz.next(today()), Err(TransitionError::Invalid(3)));
		assert_eq!(wiz.step(), Step::EventDetails);
		assert_eq!(
			wiz.errors().keys().copied().collect::<Vec<_>>(),
			vec![Field::EventType, Field::EventDate, Field::GuestCount]
		);
		assert!(wiz.errors().values().all(|e| *e == FieldError::Required));
	}

	#[test]
	fn wedding_without_venue_stops_on_step_two() {
		let mut wiz = BookingWizard::new();
		wiz.set_event_type("wedding".parse().unwrap()).unwrap();
		wiz.set_event_date(future()).unwrap();
		wiz.set_guest_count("200-300".parse().unwrap()).unwrap();

		assert_eq!(wiz.next(today()), Ok(Step::Services));
		assert!(wiz.errors().is_empty());

		assert_eq!(wiz.next(today()), Err(TransitionError::Invalid(1)));
		assert_eq!(wiz.step(), Step::Services);
		assert_eq!(wiz.error(Field::Venue), Some(FieldError::Required));
		assert_eq!(wiz.errors().len(), 1);
	}

	#[test]
	fn contact_step_phone_and_email() {
		let mut wiz = BookingWizard::new();
		wiz.set_event_type(EventType::Barat).unwrap();
		wiz.set_event_date(future()).unwrap();
		wiz.set_guest_count(GuestRange::Over700).unwrap();
		wiz.next(today()).unwrap();
		wiz.set_venue(Venue::VenueA).unwrap();
		wiz.next(today()).unwrap();

		wiz.set_name("Ahmed").unwrap();
		wiz.set_phone("").unwrap();
		wiz.set_email("not-an-email").unwrap();

		assert_eq!(wiz.next(today()), Err(TransitionError::Invalid(2)));
		assert_eq!(wiz.step(), Step::Contact);
		assert_eq!(wiz.error(Field::Phone), Some(FieldError::Required));
		assert_eq!(wiz.error(Field::Email), Some(FieldError::InvalidEmail));
		assert_eq!(wiz.error(Field::Name), None);

		wiz.set_phone("0300 1234567").unwrap();
		wiz.set_email("").unwrap();
		assert_eq!(wiz.next(today()), Ok(Step::Review));
	}

	#[test]
	fn whitespace_only_contact_details_are_missing() {
		let draft = BookingDraft { name: "   ".into(), phone: "\t".into(), email: "  ".into(), ..Default::default() };
		let errors = draft.validate(Step::Contact, today());
		assert_eq!(errors.get(&Field::Name), Some(&FieldError::Required));
		assert_eq!(errors.get(&Field::Phone), Some(&FieldError::Required));
		assert_eq!(errors.get(&Field::Email), None);
	}

	#[test]
	fn email_shapes() {
		let check = |email: &str| BookingDraft {
			name: "a".into(),
			phone: "1".into(),
			email: email.into(),
			..Default::default()
		}.validate(Step::Contact, today()).is_empty();

		assert!(check("ahmed@example.com"));
		assert!(check("a.b+c@mail.co.pk"));
		assert!(check(""));
		assert!(!check("not-an-email"));
		assert!(!check("missing@tld"));
		assert!(!check("two@@example.com"));
		assert!(!check("spaces in@example.com"));
	}

	#[test]
	fn dates_before_today_are_rejected_but_today_is_fine() {
		let yesterday = today().pred_opt().unwrap();
		let mut draft = BookingDraft {
			event_type: Some(EventType::Birthday),
			event_date: Some(yesterday),
			guest_count: Some(GuestRange::UpTo100),
			..Default::default()
		};
		assert_eq!(
			draft.validate(Step::EventDetails, today()).get(&Field::EventDate),
			Some(&FieldError::DateInPast)
		);

		draft.event_date = Some(today());
		assert!(draft.validate(Step::EventDetails, today()).is_empty());
	}

	#[test]
	fn later_steps_dont_matter_until_reached() {
		let draft = BookingDraft {
			event_type: Some(EventType::Corporate),
			event_date: Some(future()),
			guest_count: Some(GuestRange::UpTo200),
			email: "garbage".into(),
			..Default::default()
		};
		assert!(draft.validate(Step::EventDetails, today()).is_empty());
		assert!(draft.validate(Step::Review, today()).is_empty());
	}

	#[test]
	fn setting_a_field_clears_its_error_even_if_still_invalid() {
		let mut wiz = BookingWizard::new();
		wiz.next(today()).unwrap_err();
		assert!(wiz.error(Field::EventDate).is_some());

		// still in the past, but we don't re-check until the next attempt
		wiz.set_event_date(today().pred_opt().unwrap()).unwrap();
		assert_eq!(wiz.error(Field::EventDate), None);
		assert_eq!(wiz.error(Field::EventType), Some(FieldError::Required));

		wiz.set_event_type(EventType::Mehndi).unwrap();
		wiz.set_guest_count(GuestRange::UpTo300).unwrap();
		assert_eq!(wiz.next(today()), Err(TransitionError::Invalid(1)));
		assert_eq!(wiz.error(Field::EventDate), Some(FieldError::DateInPast));
	}

	#[test]
	fn back_never_validates() {
		let mut wiz = filled_in();
		assert_eq!(wiz.step(), Step::Review);

		// break things on the way back; back doesn't care
		wiz.set_name("").unwrap();
		assert_eq!(wiz.back(), Ok(Step::Contact));
		wiz.set(FieldValue::Venue(None)).unwrap();
		assert_eq!(wiz.back(), Ok(Step::Services));
		assert_eq!(wiz.back(), Ok(Step::EventDetails));
		assert_eq!(wiz.back(), Err(TransitionError::NoPreviousStep));
		assert_eq!(wiz.step(), Step::EventDetails);
		assert!(wiz.errors().is_empty());
	}

	#[test]
	fn review_submits_instead_of_moving_forward() {
		let mut wiz = filled_in();
		assert_eq!(wiz.next(today()), Err(TransitionError::NoNextStep));
		assert_eq!(wiz.step(), Step::Review);
	}

	#[test]
	fn can_only_submit_from_review() {
		let mut wiz = BookingWizard::new();
		assert_eq!(wiz.begin_submit(today()), Err(TransitionError::NotOnReview));
		assert_eq!(wiz.finish_submit(), Err(TransitionError::NotInFlight));
	}

	#[test]
	fn submission_is_guarded_while_in_flight() {
		let mut wiz = filled_in();
		wiz.begin_submit(today()).unwrap();
		assert!(wiz.is_in_flight());

		assert_eq!(wiz.begin_submit(today()), Err(TransitionError::InFlight));
		assert_eq!(wiz.back(), Err(TransitionError::InFlight));
		assert_eq!(wiz.set_notes("extra naan"), Err(TransitionError::InFlight));

		wiz.finish_submit().unwrap();
		assert_eq!(wiz.submitted(), Some(wiz.draft()));
	}

	#[test]
	fn submitted_wizard_is_frozen() {
		let mut wiz = filled_in();
		wiz.begin_submit(today()).unwrap();
		wiz.finish_submit().unwrap();

		assert_eq!(wiz.next(today()), Err(TransitionError::Submitted));
		assert_eq!(wiz.back(), Err(TransitionError::Submitted));
		assert_eq!(wiz.set_name("Someone else"), Err(TransitionError::Submitted));
		assert_eq!(wiz.begin_submit(today()), Err(TransitionError::Submitted));
		assert_eq!(wiz.finish_submit(), Err(TransitionError::Submitted));
		assert_eq!(wiz.submitted().map(|d| d.name.as_str()), Some("Fatima Khan"));
	}

	#[test]
	fn stale_date_sends_the_visitor_back_to_step_one() {
		let mut wiz = filled_in();
		let much_later = future().checked_add_days(Days::new(1)).unwrap();

		assert_eq!(wiz.begin_submit(much_later), Err(TransitionError::Invalid(1)));
		assert_eq!(wiz.step(), Step::EventDetails);
		assert_eq!(wiz.error(Field::EventDate), Some(FieldError::DateInPast));
		assert_eq!(*wiz.phase(), Phase::Editing);
	}

	#[test]
	fn submit_waits_on_the_injected_clock() {
		let clock = FixedClock::new(today());
		let mut wiz = filled_in();

		block_on(wiz.submit(&clock)).unwrap();

		assert_eq!(*clock.delays.borrow(), vec![SUBMIT_DELAY]);
		assert!(wiz.submitted().is_some());

		// and a second go doesn't wait again
		assert_eq!(block_on(wiz.submit(&clock)), Err(TransitionError::Submitted));
		assert_eq!(clock.delays.borrow().len(), 1);
	}

	#[test]
	fn confirmation_is_personalized() {
		let mut wiz = filled_in();
		assert_eq!(wiz.confirmation_title(&BundledStrings, Locale::En), None);
		assert_eq!(wiz.whatsapp_cta("+92 300 1234567", &BundledStrings, Locale::En), None);

		wiz.begin_submit(today()).unwrap();
		wiz.finish_submit().unwrap();

		assert_eq!(
			wiz.confirmation_title(&BundledStrings, Locale::En).as_deref(),
			Some("Thank you, Fatima Khan!")
		);
		assert!(wiz.confirmation_title(&BundledStrings, Locale::Ur).unwrap().contains("Fatima Khan"));

		let link = wiz.whatsapp_cta("+92 300 1234567", &BundledStrings, Locale::En).unwrap();
		assert!(link.starts_with("https://wa.me/923001234567?text="));
		assert!(link.contains("Fatima%20Khan"));
	}

	#[test]
	fn submitted_draft_serializes_for_the_log() {
		let mut wiz = filled_in();
		wiz.begin_submit(today()).unwrap();
		let json = serde_json::to_value(wiz.finish_submit().unwrap()).unwrap();

		assert_eq!(json["eventType"], "walima");
		assert_eq!(json["eventDate"], "2026-11-16");
		assert_eq!(json["venue"], "both");
		assert_eq!(json["name"], "Fatima Khan");
	}

	#[test]
	fn whatsapp_follow_up_carries_the_event_details() {
		let mut wiz = filled_in();
		wiz.begin_submit(today()).unwrap();
		let sent = wiz.finish_submit().unwrap().clone();
		assert_eq!(sent.venue, Some(Venue::Both));

		let link = wiz.whatsapp_cta("+92 300 1234567", &BundledStrings, Locale::En).unwrap();
		let (_, encoded) = link.split_once("?text=").unwrap();
		let message = urlencoding::decode(encoded).unwrap();

		assert!(message.starts_with("Assalam-o-Alaikum! My name is Fatima Khan"));
		assert!(message.contains("- Event Type: Walima"), "{message}");
		assert!(message.contains(": 300-500"), "{message}");
		assert!(message.contains(&future().format("%d %b %Y").to_string()), "{message}");
		assert!(message.contains(&tr(&BundledStrings, Locale::En, StringId::VenueBoth).into_owned()), "{message}");
		// contact details are already in the inquiry itself
		assert!(!message.contains("+92 321 7654321"));
	}

	#[test]
	fn field_values_from_form_controls() {
		assert_eq!(FieldValue::parse(Field::EventType, "mehndi"), Ok(FieldValue::EventType(Some(EventType::Mehndi))));
		assert_eq!(FieldValue::parse(Field::Venue, ""), Ok(FieldValue::Venue(None)));
		assert_eq!(FieldValue::parse(Field::GuestCount, "700+"), Ok(FieldValue::GuestCount(Some(GuestRange::Over700))));
		assert_eq!(
			FieldValue::parse(Field::EventDate, "2026-12-01"),
			Ok(FieldValue::EventDate(NaiveDate::from_ymd_opt(2026, 12, 1)))
		);
		assert!(FieldValue::parse(Field::EventDate, "tomorrow").is_err());
		assert!(FieldValue::parse(Field::EventType, "funeral").is_err());
		assert_eq!(FieldValue::parse(Field::Notes, " veg "), Ok(FieldValue::Notes(" veg ".into())));
	}

	#[test]
	fn every_field_belongs_to_the_step_that_lists_it() {
		for step in Step::ALL {
			for field in step.fields() {
				assert_eq!(field.step(), step);
			}
		}
		assert_eq!(Step::ALL.iter().map(|s| s.fields().len()).sum::<usize>(), Field::ALL.len());
	}

	#[test]
	fn review_summary_fills_in_blanks() {
		let wiz = filled_in();
		let summary = wiz.draft().summary(&BundledStrings, Locale::En);
		assert_eq!(summary.len(), Field::ALL.len());
		assert!(summary.contains(&("Event Type".into(), "Walima".into())));
		assert!(summary.contains(&("Number of Guests".into(), "300-500".into())));
		assert!(summary.contains(&("Venue".into(), "Both Venues".into())));
		assert!(summary.contains(&("Email (optional)".into(), "Not provided".into())));
	}
}
