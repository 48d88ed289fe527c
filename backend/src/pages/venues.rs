use horrorshow::{html, RenderOnce, TemplateBuffer};
use shared_data::{Locale, SiteContent, StringId};

use crate::t;

pub struct Venues {
	pub locale: Locale
}

impl RenderOnce for Venues {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let locale = self.locale;

		tmpl << html! {
			h1 : t(locale, StringId::NavVenues);
			div(class = "grid") {
				@ for venue in &SiteContent::bundled().venues {
					div(class = "card", id = format!("venue-{}", venue.id)) {
						img(src = &venue.image, alt = venue.name.get(locale), loading = "lazy");
						h2 : venue.name.get(locale);
						p : venue.description.get(locale);
						p {
							strong : t(locale, StringId::VenueCapacity);
							: ": ";
							: &venue.capacity;
						}
						a(class = "button", href = format!("/book?lang={}", locale.code())) : t(locale, StringId::NavBook);
					}
				}
			}
		};
	}
}
