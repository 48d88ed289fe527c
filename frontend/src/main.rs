use serde::Deserialize;
use shared_data::{tr, BundledStrings, Locale, StringId};
use yew_router::prelude::*;
use yew::prelude::*;
use booking::BookingWizardView;
use chrome::{ContactButtons, Header};
use menu::MenuSelectorView;
use style::SharedStyle;

mod booking;
mod chrome;
mod clock;
mod menu;
mod style;

#[derive(Clone, Routable, PartialEq)]
enum Route {
	#[at("/book")]
	Book,
	#[at("/menu")]
	Menu,
	#[not_found]
	#[at("/404")]
	NotFound
}

#[derive(Deserialize, Default)]
struct LangQuery {
	#[serde(default)]
	lang: Option<String>
}

/// The locale comes from `?lang=`, same as the server-rendered pages, so links between the two
/// keep the visitor's language
#[hook]
fn use_locale() -> Locale {
	use_location()
		.and_then(|loc| loc.query::<LangQuery>().ok())
		.and_then(|q| q.lang)
		.and_then(|lang| lang.parse().ok())
		.unwrap_or_default()
}

/// Shorthand for looking up a bundled string as something `html!` can render
pub fn t(locale: Locale, id: StringId) -> String {
	tr(&BundledStrings, locale, id).into_owned()
}

#[derive(Properties, PartialEq)]
struct PageProps {
	route: Route
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
	let locale = use_locale();

	// the server-rendered pages set these on <html> directly; we have to do it after the fact
	use_effect_with(locale, |locale| {
		if let Some(root) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.document_element()) {
			_ = root.set_attribute("lang", locale.code());
			_ = root.set_attribute("dir", locale.dir());
		}

		|| ()
	});

	let content = match props.route {
		Route::Book => html! { <BookingWizardView { locale } /> },
		Route::Menu => html! { <MenuSelectorView { locale } /> },
		Route::NotFound => html! {
			<p><a href={ format!("/?lang={}", locale.code()) }>{ t(locale, StringId::NavHome) }</a></p>
		}
	};

	html! {
		<>
			<SharedStyle />
			<Header { locale } />
			<main>{ content }</main>
			<ContactButtons { locale } />
		</>
	}
}

fn switch(route: Route) -> Html {
	html! { <Page { route } /> }
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<BrowserRouter>
			<Switch<Route> render={switch} />
		</BrowserRouter>
	}
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
