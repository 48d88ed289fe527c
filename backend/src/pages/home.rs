use horrorshow::{html, RenderOnce, TemplateBuffer};
use shared_data::{content::ContactInfo, links, Catalog, Locale, SiteContent, StringId};

use crate::t;

pub struct Home<'a> {
	pub locale: Locale,
	pub contact: &'a ContactInfo
}

impl RenderOnce for Home<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { locale, contact } = self;
		let code = locale.code();
		let content = SiteContent::bundled();

		tmpl << html! {
			section(id = "hero") {
				h1 : t(locale, StringId::HomeHeadline);
				p : t(locale, StringId::HomeTagline);
				a(class = "button", href = format!("/book?lang={code}")) : t(locale, StringId::NavBook);
				: " ";
				a(class = "button secondary", href = links::whatsapp_chat_link(&contact.whatsapp), target = "_blank", rel = "noopener") : t(locale, StringId::WhatsAppCta);
			}
			section(id = "featured") {
				h2 : t(locale, StringId::FeaturedDishes);
				div(class = "grid") {
					@ for item in Catalog::bundled().featured() {
						div(class = "card") {
							img(src = &item.image, alt = item.name.get(locale), loading = "lazy");
							h3 : item.name.get(locale);
						}
					}
				}
				a(href = format!("/menu?lang={code}")) : t(locale, StringId::NavMenu);
			}
			section(id = "testimonials") {
				h2 : t(locale, StringId::TestimonialsTitle);
				div(class = "grid") {
					@ for review in &content.testimonials {
						blockquote(class = "card") {
							p : review.quote.get(locale);
							footer {
								strong : &review.name;
								: ", ";
								: review.event.get(locale);
							}
						}
					}
				}
			}
		};
	}
}
