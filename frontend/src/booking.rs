use std::rc::Rc;

use chrono::NaiveDate;
use gloo_console::log;
use shared_data::{
	booking::{EventType, GuestRange, Venue, SUBMIT_DELAY},
	clock::Clock,
	BookingWizard, BundledStrings, Field, FieldValue, Locale, Step, StringId,
	TransitionError,
};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{chrome, clock::BrowserClock, t};

#[derive(Debug)]
pub enum WizardMsg {
	Set(FieldValue),
	Next(NaiveDate),
	Back,
	BeginSubmit(NaiveDate),
	FinishSubmit,
}

#[derive(Clone, Default, PartialEq)]
pub struct WizardState(BookingWizard);

impl Reducible for WizardState {
	type Action = WizardMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut wizard = self.0.clone();

		let res = match action {
			WizardMsg::Set(value) => wizard.set(value),
			WizardMsg::Next(today) => wizard.next(today).map(drop),
			WizardMsg::Back => wizard.back().map(drop),
			WizardMsg::BeginSubmit(today) => wizard.begin_submit(today),
			WizardMsg::FinishSubmit => wizard.finish_submit().map(drop),
		};

		match res {
			// the errors are on the wizard now and will be shown next to each field
			Ok(()) | Err(TransitionError::Invalid(_)) => (),
			Err(e) => log!(format!("Ignoring booking action: {e}")),
		}

		Self(wizard).into()
	}
}

// Every control in the form hands its value over the same way, so they can all share this
fn control_value(e: &InputEvent) -> Option<String> {
	let target = e.target()?;
	target.dyn_ref::<HtmlInputElement>().map(HtmlInputElement::value)
		.or_else(|| target.dyn_ref::<HtmlSelectElement>().map(HtmlSelectElement::value))
		.or_else(|| target.dyn_ref::<HtmlTextAreaElement>().map(HtmlTextAreaElement::value))
}

#[derive(Properties, PartialEq)]
pub struct BookingProps {
	pub locale: Locale
}

#[function_component(BookingWizardView)]
pub fn booking_wizard(props: &BookingProps) -> Html {
	let locale = props.locale;
	let wizard = use_reducer_eq(WizardState::default);

	// The timer hangs off the wizard actually entering the in-flight phase rather than off the
	// click, so it only ever starts once per submission
	{
		let wizard = wizard.clone();
		use_effect_with(wizard.0.is_in_flight(), move |&in_flight| {
			if in_flight {
				match serde_json::to_string(wizard.0.draft()) {
					Ok(json) => log!(format!("Booking inquiry submitted: {json}")),
					Err(e) => log!(format!("Couldn't serialize booking inquiry: {e}")),
				}

				wasm_bindgen_futures::spawn_local(async move {
					BrowserClock.delay(SUBMIT_DELAY).await;
					wizard.dispatch(WizardMsg::FinishSubmit);
				});
			}

			|| ()
		});
	}

	let today = BrowserClock.today();
	let phone = &chrome::contact().whatsapp;

	if let Some(title) = wizard.0.confirmation_title(&BundledStrings, locale) {
		let cta = wizard.0.whatsapp_cta(phone, &BundledStrings, locale).unwrap_or_default();
		return html! {
			<div class="card" id="booking-thanks">
				<h1>{ title }</h1>
				<p>{ t(locale, StringId::ThankYouBody) }</p>
				<a class="button" href={ cta } target="_blank" rel="noopener">
					{ t(locale, StringId::WhatsAppCta) }
				</a>
			</div>
		};
	}

	let on_field = |field: Field| {
		let wizard = wizard.clone();
		Callback::from(move |e: InputEvent| {
			let Some(raw) = control_value(&e) else {
				log!("Form event came from something that isn't a form control");
				return;
			};

			match FieldValue::parse(field, &raw) {
				Ok(value) => wizard.dispatch(WizardMsg::Set(value)),
				Err(err) => log!(format!("Ignoring form value: {err}")),
			}
		})
	};

	let field_block = |field: Field, control: Html| html! {
		<div class="form-field">
			<label for={ field.as_str() }>{ t(locale, field.label()) }</label>
			{ control }
			{ match wizard.0.error(field) {
				Some(err) => html! { <div class="field-error">{ t(locale, err.message()) }</div> },
				None => html! {}
			}}
		</div>
	};

	let draft = wizard.0.draft();
	let step = wizard.0.step();

	let body = match step {
		Step::EventDetails => html! {
			<>
				{ field_block(Field::EventType, html! {
					<select id="eventType" oninput={ on_field(Field::EventType) }>
						<option value="" selected={ draft.event_type.is_none() }>{ t(locale, StringId::SelectPlaceholder) }</option>
						{ for EventType::ALL.iter().map(|&ev| html! {
							<option value={ ev.as_str() } selected={ draft.event_type == Some(ev) }>
								{ t(locale, ev.label()) }
							</option>
						}) }
					</select>
				}) }
				{ field_block(Field::EventDate, html! {
					<input
						type="date"
						id="eventDate"
						min={ today.format("%Y-%m-%d").to_string() }
						value={ draft.event_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default() }
						oninput={ on_field(Field::EventDate) }
					/>
				}) }
				{ field_block(Field::GuestCount, html! {
					<select id="guestCount" oninput={ on_field(Field::GuestCount) }>
						<option value="" selected={ draft.guest_count.is_none() }>{ t(locale, StringId::SelectPlaceholder) }</option>
						{ for GuestRange::ALL.iter().map(|&range| html! {
							<option value={ range.label() } selected={ draft.guest_count == Some(range) }>
								{ range.label() }
							</option>
						}) }
					</select>
				}) }
			</>
		},
		Step::Services => field_block(Field::Venue, html! {
			<div id="venue" class="grid">
				{ for Venue::ALL.iter().map(|&venue| html! {
					<label class="card">
						<input
							type="radio"
							name="venue"
							value={ venue.as_str() }
							checked={ draft.venue == Some(venue) }
							oninput={ on_field(Field::Venue) }
						/>
						{ t(locale, venue.label()) }
					</label>
				}) }
			</div>
		}),
		Step::Contact => html! {
			<>
				{ field_block(Field::Name, html! {
					<input type="text" id="name" value={ draft.name.clone() } oninput={ on_field(Field::Name) } />
				}) }
				{ field_block(Field::Phone, html! {
					<input type="tel" id="phone" placeholder="0300 1234567" value={ draft.phone.clone() } oninput={ on_field(Field::Phone) } />
				}) }
				{ field_block(Field::Email, html! {
					<input type="email" id="email" value={ draft.email.clone() } oninput={ on_field(Field::Email) } />
				}) }
				{ field_block(Field::Notes, html! {
					<textarea id="notes" value={ draft.notes.clone() } oninput={ on_field(Field::Notes) } />
				}) }
			</>
		},
		Step::Review => html! {
			<table id="review">
				<tbody>
					{ for draft.summary(&BundledStrings, locale).into_iter().map(|(label, value)| html! {
						<tr>
							<th>{ label }</th>
							<td>{ value }</td>
						</tr>
					}) }
				</tbody>
			</table>
		},
	};

	let on_back = {
		let wizard = wizard.clone();
		Callback::from(move |_: MouseEvent| wizard.dispatch(WizardMsg::Back))
	};

	let on_next = {
		let wizard = wizard.clone();
		Callback::from(move |_: MouseEvent| wizard.dispatch(WizardMsg::Next(BrowserClock.today())))
	};

	let on_submit = {
		let wizard = wizard.clone();
		Callback::from(move |_: MouseEvent| wizard.dispatch(WizardMsg::BeginSubmit(BrowserClock.today())))
	};

	let in_flight = wizard.0.is_in_flight();
	let (current, total) = (step.number().to_string(), Step::ALL.len().to_string());
	let counter = shared_data::i18n::fill(
		&t(locale, StringId::StepCounter),
		&[("current", current.as_str()), ("total", total.as_str())]
	);

	html! {
		<div class="card" id="booking-wizard">
			<div class="step-counter">{ counter }</div>
			<h2>{ t(locale, step.title()) }</h2>
			{ body }
			<div class="wizard-actions">
				if step.prev().is_some() {
					<button class="secondary" onclick={ on_back } disabled={ in_flight }>
						{ t(locale, StringId::ButtonBack) }
					</button>
				}
				if step == Step::Review {
					<button onclick={ on_submit } disabled={ in_flight }>
						{ t(locale, if in_flight { StringId::ButtonSubmitting } else { StringId::ButtonSubmit }) }
					</button>
				} else {
					<button onclick={ on_next }>{ t(locale, StringId::ButtonNext) }</button>
				}
			</div>
		</div>
	}
}
