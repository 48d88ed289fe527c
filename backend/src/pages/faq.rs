use horrorshow::{html, RenderOnce, TemplateBuffer};
use shared_data::{Locale, SiteContent, StringId};

use crate::t;

pub struct Faq {
	pub locale: Locale
}

impl RenderOnce for Faq {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let locale = self.locale;

		tmpl << html! {
			h1 : t(locale, StringId::FaqTitle);
			@ for entry in &SiteContent::bundled().faq {
				details(class = "card") {
					summary : entry.question.get(locale);
					p : entry.answer.get(locale);
				}
			}
		};
	}
}
