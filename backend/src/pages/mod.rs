use std::sync::Arc;

use axum::{
	extract::{Query, State},
	http::StatusCode,
	response::Html,
};
use horrorshow::{RenderOnce, Template};
use serde::Deserialize;
use shared_data::{Locale, StringId};
use tracing::{debug, error};

use crate::{config::Config, layout::Layout, t};

pub mod faq;
pub mod home;
pub mod packages;
pub mod venues;

#[derive(Deserialize, Default, Debug)]
pub struct LangQuery {
	#[serde(default)]
	lang: Option<String>
}

impl LangQuery {
	/// Anything we don't recognize just gets English
	pub fn locale(&self) -> Locale {
		match self.lang.as_deref().map(str::parse::<Locale>) {
			Some(Ok(locale)) => locale,
			Some(Err(e)) => {
				debug!("Falling back to English: {e}");
				Locale::default()
			},
			None => Locale::default()
		}
	}
}

pub type PageResult = Result<Html<String>, (StatusCode, String)>;

fn render_page<C: RenderOnce>(
	config: &Config,
	locale: Locale,
	path: &str,
	title: StringId,
	content: C
) -> PageResult {
	Layout {
		locale,
		title: t(locale, title),
		path,
		contact: &config.contact,
		content
	}.into_string()
		.map(Html)
		.map_err(|e| {
			error!("Couldn't render {path}: {e}");
			(StatusCode::INTERNAL_SERVER_ERROR, format!("Couldn't render page: {e}"))
		})
}

pub async fn get_home_view(State(config): State<Arc<Config>>, Query(q): Query<LangQuery>) -> PageResult {
	let locale = q.locale();
	render_page(&config, locale, "/", StringId::NavHome, home::Home { locale, contact: &config.contact })
}

pub async fn get_venues_view(State(config): State<Arc<Config>>, Query(q): Query<LangQuery>) -> PageResult {
	let locale = q.locale();
	render_page(&config, locale, "/venues", StringId::NavVenues, venues::Venues { locale })
}

pub async fn get_packages_view(State(config): State<Arc<Config>>, Query(q): Query<LangQuery>) -> PageResult {
	let locale = q.locale();
	render_page(&config, locale, "/packages", StringId::NavPackages, packages::Packages { locale })
}

pub async fn get_faq_view(State(config): State<Arc<Config>>, Query(q): Query<LangQuery>) -> PageResult {
	let locale = q.locale();
	render_page(&config, locale, "/faq", StringId::FaqTitle, faq::Faq { locale })
}

#[cfg(test)]
mod tests {
	use super::*;

	fn query(lang: Option<&str>) -> LangQuery {
		LangQuery { lang: lang.map(str::to_string) }
	}

	#[test]
	fn lang_query_picks_locale() {
		assert_eq!(query(None).locale(), Locale::En);
		assert_eq!(query(Some("en")).locale(), Locale::En);
		assert_eq!(query(Some("ur")).locale(), Locale::Ur);
	}

	#[test]
	fn unknown_lang_is_english() {
		assert_eq!(query(Some("fr")).locale(), Locale::En);
		assert_eq!(query(Some("")).locale(), Locale::En);
	}
}
