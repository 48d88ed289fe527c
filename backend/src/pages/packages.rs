use horrorshow::{html, RenderOnce, TemplateBuffer};
use shared_data::{content::format_rupees, Locale, SiteContent, StringId};

use crate::t;

pub struct Packages {
	pub locale: Locale
}

impl RenderOnce for Packages {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let locale = self.locale;

		tmpl << html! {
			h1 : t(locale, StringId::NavPackages);
			div(class = "grid") {
				@ for package in &SiteContent::bundled().packages {
					div(class = card_class(package.popular), id = format!("package-{}", package.id)) {
						@ if package.popular {
							span(class = "badge") : t(locale, StringId::PackagesPopular);
						}
						h2 : package.name.get(locale);
						p {
							strong : format_rupees(package.price_per_head);
							: " ";
							: t(locale, StringId::PackagesPerHead);
						}
						ul {
							@ for item in &package.items {
								li : item.get(locale);
							}
						}
					}
				}
			}
			a(class = "button", href = format!("/menu?lang={}", locale.code())) : t(locale, StringId::NavMenu);
		};
	}
}

fn card_class(popular: bool) -> &'static str {
	if popular { "card popular" } else { "card" }
}
