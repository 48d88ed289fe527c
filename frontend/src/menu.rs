use std::rc::Rc;

use gloo_console::log;
use shared_data::{
	menu::{MAX_GUESTS, MIN_GUESTS, GUEST_STEP},
	Catalog, BundledStrings, CategoryFilter, Locale, MenuItem, MenuSelector, StringId,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{chrome, t};

pub enum MenuMsg {
	Filter(CategoryFilter),
	Toggle(String),
	ClearAll,
	MoreGuests,
	FewerGuests,
	SetGuests(i64),
}

#[derive(Clone, PartialEq)]
pub struct MenuState(MenuSelector);

impl Default for MenuState {
	fn default() -> Self {
		Self(MenuSelector::new(Rc::new(Catalog::bundled().clone())))
	}
}

impl Reducible for MenuState {
	type Action = MenuMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut menu = self.0.clone();

		match action {
			MenuMsg::Filter(filter) => menu.set_filter(filter),
			MenuMsg::Toggle(id) => {
				menu.toggle(&id);
			}
			MenuMsg::ClearAll => menu.clear_all(),
			MenuMsg::MoreGuests => menu.increment_guests(),
			MenuMsg::FewerGuests => menu.decrement_guests(),
			MenuMsg::SetGuests(guests) => menu.set_guest_estimate(guests),
		}

		Self(menu).into()
	}
}

#[derive(Properties, PartialEq)]
pub struct MenuProps {
	pub locale: Locale
}

#[function_component(MenuSelectorView)]
pub fn menu_selector(props: &MenuProps) -> Html {
	let locale = props.locale;
	let menu = use_reducer_eq(MenuState::default);

	let filter_button = |filter: CategoryFilter, label: String, count: usize| {
		let active = *menu.0.filter() == filter;
		let onclick = {
			let menu = menu.clone();
			Callback::from(move |_: MouseEvent| menu.dispatch(MenuMsg::Filter(filter.clone())))
		};

		html! {
			<button class={ classes!("filter", active.then_some("active")) } { onclick }>
				{ label }
				if count > 0 {
					<span class="badge">{ count.to_string() }</span>
				}
			</button>
		}
	};

	let item_card = |item: &MenuItem| {
		let selected = menu.0.is_selected(&item.id);
		let onclick = {
			let menu = menu.clone();
			let id = item.id.clone();
			Callback::from(move |_: MouseEvent| menu.dispatch(MenuMsg::Toggle(id.clone())))
		};

		html! {
			<div class={ classes!("card", "menu-item", selected.then_some("selected")) } { onclick }>
				<img src={ item.image.clone() } alt={ item.name.get(locale).to_string() } loading="lazy" />
				<h3>{ item.name.get(locale) }</h3>
				if item.featured {
					<span class="badge">{ t(locale, StringId::MenuFeatured) }</span>
				}
				if selected {
					<span class="check">{ "✓" }</span>
				}
			</div>
		}
	};

	let on_fewer = {
		let menu = menu.clone();
		Callback::from(move |_: MouseEvent| menu.dispatch(MenuMsg::FewerGuests))
	};

	let on_more = {
		let menu = menu.clone();
		Callback::from(move |_: MouseEvent| menu.dispatch(MenuMsg::MoreGuests))
	};

	let on_slide = {
		let menu = menu.clone();
		Callback::from(move |e: InputEvent| {
			let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
				log!("Guest slider event didn't come from an input");
				return;
			};

			match input.value().parse::<i64>() {
				Ok(guests) => menu.dispatch(MenuMsg::SetGuests(guests)),
				Err(e) => log!(format!("Couldn't read guest slider value: {e}")),
			}
		})
	};

	let on_clear = {
		let menu = menu.clone();
		Callback::from(move |_: MouseEvent| menu.dispatch(MenuMsg::ClearAll))
	};

	let phone = &chrome::contact().whatsapp;
	let selected = menu.0.selected_count();

	html! {
		<div id="menu-selector">
			<h1>{ t(locale, StringId::MenuTitle) }</h1>
			<div class="filters">
				{ filter_button(CategoryFilter::All, t(locale, StringId::MenuAll), selected) }
				{ for menu.0.category_counts().into_iter().map(|(cat, count)| filter_button(
					CategoryFilter::Category(cat.id.clone()),
					cat.name.get(locale).to_string(),
					count
				)) }
			</div>
			<div class="guests">
				<label for="guests">{ t(locale, StringId::MenuGuests) }</label>
				<button class="secondary" onclick={ on_fewer }>{ "−" }</button>
				<strong>{ menu.0.guest_estimate().to_string() }</strong>
				<button class="secondary" onclick={ on_more }>{ "+" }</button>
				<input
					type="range"
					id="guests"
					min={ MIN_GUESTS.to_string() }
					max={ MAX_GUESTS.to_string() }
					step={ GUEST_STEP.to_string() }
					value={ menu.0.guest_estimate().to_string() }
					oninput={ on_slide }
				/>
			</div>
			<div class="menu-layout">
				<div class="grid">
					{ for menu.0.visible_items().map(item_card) }
				</div>
				<aside class="card">
					<h2>{ t(locale, StringId::MenuSelected) }{ format!(" ({selected})") }</h2>
					if selected == 0 {
						<p>{ t(locale, StringId::MenuEmpty) }</p>
					} else {
						<ul>
							{ for menu.0.selected_items().map(|item| html! {
								<li>{ item.name.get(locale) }</li>
							}) }
						</ul>
						<button class="secondary" onclick={ on_clear }>{ t(locale, StringId::MenuClearAll) }</button>
						<a
							class="button"
							href={ menu.0.whatsapp_link(phone, &BundledStrings, locale) }
							target="_blank"
							rel="noopener"
						>
							{ t(locale, StringId::MenuSend) }
						</a>
					}
				</aside>
			</div>
		</div>
	}
}
