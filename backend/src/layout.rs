use horrorshow::{html, Raw, RenderOnce, TemplateBuffer, helper::doctype};
use shared_data::{content::ContactInfo, links, Locale, SiteContent, StringId};

use crate::t;

const NAV_LINKS: [(&str, StringId); 5] = [
	("/venues", StringId::NavVenues),
	("/menu", StringId::NavMenu),
	("/packages", StringId::NavPackages),
	("/faq", StringId::NavFaq),
	("/book", StringId::NavBook),
];

/// The frame every server-rendered page sits in: `<html lang dir>`, the nav bar, and the floating
/// WhatsApp/call buttons
pub struct Layout<'a, C: RenderOnce> {
	pub locale: Locale,
	pub title: String,
	// the path of the page itself, so the language toggle can point back at it
	pub path: &'a str,
	pub contact: &'a ContactInfo,
	pub content: C
}

impl<C> RenderOnce for Layout<'_, C> where C: RenderOnce {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { locale, title, path, contact, content } = self;
		let code = locale.code();
		let business = SiteContent::bundled().business_name.get(locale);

		tmpl << html! {
			: doctype::HTML;
			html(lang = code, dir = locale.dir()) {
				head {
					meta(charset = "utf-8");
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					title : format!("{title} | {business}");
					style : Raw(shared_data::BASE_STYLE);
				}
				body {
					nav {
						a(href = format!("/?lang={code}")) {
							strong : business;
						}
						span {
							@ for link in NAV_LINKS {
								a(href = format!("{}?lang={code}", link.0)) : t(locale, link.1);
								: " ";
							}
						}
						a(href = format!("{path}?lang={}", locale.other().code())) : t(locale, StringId::LanguageToggle);
					}
					main : content;
					div(id = "contact-fab") {
						a(class = "button", href = links::whatsapp_chat_link(&contact.whatsapp), target = "_blank", rel = "noopener") : "WhatsApp";
						a(class = "button", href = links::tel_link(&contact.phone)) : t(locale, StringId::CallCta);
					}
					footer {
						p : contact.address.get(locale);
						p {
							a(href = format!("mailto:{}", contact.email)) : &contact.email;
						}
					}
				}
			}
		};
	}
}
