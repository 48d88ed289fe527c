use std::sync::OnceLock;

use gloo_console::log;
use shared_data::{
	content::{ContactInfo, CONTACT_SCRIPT_ID},
	links, Locale, SiteContent, StringId,
};
use yew::prelude::*;

use crate::t;

/// The numbers the server was configured with, which it drops into the page for us. If the page
/// didn't come from the server (e.g. `trunk serve`), we use the ones bundled with the app.
pub fn contact() -> &'static ContactInfo {
	static CONTACT: OnceLock<ContactInfo> = OnceLock::new();

	CONTACT.get_or_init(|| {
		let json = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.get_element_by_id(CONTACT_SCRIPT_ID))
			.and_then(|el| el.text_content());

		match json.map(|j| serde_json::from_str(&j)) {
			Some(Ok(contact)) => contact,
			Some(Err(e)) => {
				log!(format!("Couldn't read contact info from the page, using the bundled one: {e}"));
				SiteContent::bundled().contact.clone()
			},
			None => SiteContent::bundled().contact.clone()
		}
	})
}

#[derive(Properties, PartialEq)]
pub struct LocaleProps {
	pub locale: Locale
}

#[function_component(Header)]
pub fn header(props: &LocaleProps) -> Html {
	let locale = props.locale;
	let code = locale.code();
	let content = SiteContent::bundled();

	html! {
		<nav>
			<a href={ format!("/?lang={code}") }><strong>{ content.business_name.get(locale) }</strong></a>
			<span>
				<a href={ format!("/venues?lang={code}") }>{ t(locale, StringId::NavVenues) }</a>
				{ " · " }
				<a href={ format!("/menu?lang={code}") }>{ t(locale, StringId::NavMenu) }</a>
				{ " · " }
				<a href={ format!("/packages?lang={code}") }>{ t(locale, StringId::NavPackages) }</a>
				{ " · " }
				<a href={ format!("/faq?lang={code}") }>{ t(locale, StringId::NavFaq) }</a>
				{ " · " }
				<a href={ format!("/book?lang={code}") }>{ t(locale, StringId::NavBook) }</a>
			</span>
			// a full reload is fine here; it's the same page in the other language
			<a href={ format!("?lang={}", locale.other().code()) }>{ t(locale, StringId::LanguageToggle) }</a>
		</nav>
	}
}

#[function_component(ContactButtons)]
pub fn contact_buttons(props: &LocaleProps) -> Html {
	let contact = contact();

	html! {
		<div id="contact-fab">
			<a class="button" href={ links::whatsapp_chat_link(&contact.whatsapp) } target="_blank" rel="noopener">
				{ "WhatsApp" }
			</a>
			<a class="button" href={ links::tel_link(&contact.phone) }>{ t(props.locale, StringId::CallCta) }</a>
		</div>
	}
}
