use std::{path::Path, sync::Arc};

use axum::{
	extract::State,
	http::StatusCode,
	response::Html,
	routing::get,
	Router,
};
use shared_data::{content::{ContactInfo, CONTACT_SCRIPT_ID}, tr, BundledStrings, Locale, StringId};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::error;

pub mod config;
mod layout;
mod pages;
mod robots;

use config::Config;

/// Look up a bundled string as something horrorshow can render
pub fn t(locale: Locale, id: StringId) -> String {
	tr(&BundledStrings, locale, id).into_owned()
}

pub fn router(config: Config) -> Router {
	let dist = ServeDir::new(&config.frontend_dist);

	Router::new()
		.route("/", get(pages::get_home_view))
		.route("/venues", get(pages::get_venues_view))
		.route("/packages", get(pages::get_packages_view))
		.route("/faq", get(pages::get_faq_view))
		// the yew app does its own routing between these two
		.route("/book", get(get_app_shell))
		.route("/menu", get(get_app_shell))
		.route("/robots.txt", get(robots::get_robots_txt))
		.route("/health", get(get_health))
		.fallback_service(dist)
		.layer(TraceLayer::new_for_http())
		.with_state(Arc::new(config))
}

async fn get_health() -> &'static str {
	"ok"
}

async fn get_app_shell(State(config): State<Arc<Config>>) -> Result<Html<String>, (StatusCode, String)> {
	let index = read_index(&config.index_html()).await?;

	with_contact(&index, &config.contact)
		.map(Html)
		.map_err(|e| {
			error!("Couldn't serialize contact info: {e}");
			(StatusCode::INTERNAL_SERVER_ERROR, format!("Couldn't prepare page: {e}"))
		})
}

/// Put the configured contact numbers into the yew shell, since the wasm can only see the ones
/// bundled at build time
fn with_contact(index: &str, contact: &ContactInfo) -> serde_json::Result<String> {
	// `</` can't show up inside a <script>, and `<\/` is the same string to a JSON parser
	let json = serde_json::to_string(contact)?.replace("</", "<\\/");
	let script = format!(r#"<script id="{CONTACT_SCRIPT_ID}" type="application/json">{json}</script>"#);

	Ok(match index.find("</head>") {
		Some(idx) => format!("{}{script}{}", &index[..idx], &index[idx..]),
		None => format!("{script}{index}")
	})
}

async fn read_index(path: &Path) -> Result<String, (StatusCode, String)> {
	tokio::fs::read_to_string(path).await
		.map_err(|e| {
			error!("Couldn't read {}: {e}", path.display());
			(StatusCode::SERVICE_UNAVAILABLE, "The booking app isn't available right now".into())
		})
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use axum::body::{to_bytes, Body};
	use http::Request;
	use tower::ServiceExt;

	use super::*;

	const SHELL: &str = "<html><head><title>app</title></head><body>yew goes here</body></html>";

	// each test gets its own directory so they can run in parallel
	fn dist_with_index(name: &str) -> PathBuf {
		let dir = std::env::temp_dir().join(format!("catering-backend-test-{name}-{}", std::process::id()));
		std::fs::create_dir_all(&dir).unwrap();
		std::fs::write(dir.join("index.html"), SHELL).unwrap();
		dir
	}

	async fn fetch(config: Config, uri: &str) -> (StatusCode, String) {
		let resp = router(config)
			.oneshot(Request::get(uri).body(Body::empty()).unwrap())
			.await
			.unwrap();

		let status = resp.status();
		let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
		(status, String::from_utf8(body.to_vec()).unwrap())
	}

	#[tokio::test]
	async fn health_is_ok() {
		assert_eq!(fetch(Config::default(), "/health").await, (StatusCode::OK, "ok".into()));
	}

	#[tokio::test]
	async fn robots_allows_everything() {
		let (status, body) = fetch(Config::default(), "/robots.txt").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains("Allow: /"));
	}

	#[tokio::test]
	async fn home_switches_to_urdu() {
		let (status, body) = fetch(Config::default(), "/?lang=ur").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains(r#"dir="rtl""#));

		let (_, body) = fetch(Config::default(), "/").await;
		assert!(body.contains(r#"dir="ltr""#));
	}

	#[tokio::test]
	async fn unknown_lang_renders_english() {
		let (status, body) = fetch(Config::default(), "/faq?lang=de").await;
		assert_eq!(status, StatusCode::OK);
		assert!(body.contains(r#"<html lang="en" dir="ltr">"#));
	}

	#[tokio::test]
	async fn every_page_renders() {
		for path in ["/", "/venues", "/packages", "/faq"] {
			let (status, body) = fetch(Config::default(), path).await;
			assert_eq!(status, StatusCode::OK, "{path}");
			assert!(body.contains(r#"id="contact-fab""#), "{path}");
		}
	}

	#[tokio::test]
	async fn configured_whatsapp_number_is_used() {
		let mut config = Config::default();
		config.contact.whatsapp = "+92 321 7654321".into();

		let (_, body) = fetch(config, "/packages").await;
		assert!(body.contains("https://wa.me/923217654321"));
	}

	#[tokio::test]
	async fn book_and_menu_serve_the_app() {
		let config = Config {
			frontend_dist: dist_with_index("shell"),
			..Config::default()
		};

		for path in ["/book", "/menu?lang=ur"] {
			let (status, body) = fetch(config.clone(), path).await;
			assert_eq!(status, StatusCode::OK, "{path}");
			assert!(body.ends_with("</head><body>yew goes here</body></html>"), "{path}: {body}");
			assert!(body.contains(r#"<script id="contact-info" type="application/json">"#), "{path}");
		}
	}

	#[tokio::test]
	async fn app_shell_carries_configured_contact() {
		let mut config = Config {
			frontend_dist: dist_with_index("contact"),
			..Config::default()
		};
		config.contact.whatsapp = "+92 321 7654321".into();
		config.contact.phone = "+92 42 1111 2222".into();

		let (_, body) = fetch(config, "/book").await;
		let start = body.find(r#"type="application/json">"#).unwrap() + r#"type="application/json">"#.len();
		let end = start + body[start..].find("</script>").unwrap();
		let contact: ContactInfo = serde_json::from_str(&body[start..end]).unwrap();

		assert_eq!(contact.whatsapp, "+92 321 7654321");
		assert_eq!(contact.phone, "+92 42 1111 2222");
	}

	#[test]
	fn contact_json_cannot_close_the_script() {
		let mut contact = Config::default().contact;
		contact.email = "</script><b>@example.com".into();

		let page = with_contact("<head></head>", &contact).unwrap();
		assert_eq!(page.matches("</script>").count(), 1);

		let start = page.find('{').unwrap();
		let end = page.rfind('}').unwrap() + 1;
		let parsed: ContactInfo = serde_json::from_str(&page[start..end]).unwrap();
		assert_eq!(parsed.email, contact.email);
	}

	#[test]
	fn contact_goes_first_without_a_head() {
		let page = with_contact("<body></body>", &Config::default().contact).unwrap();
		assert!(page.starts_with(r#"<script id="contact-info""#));
		assert!(page.ends_with("</script><body></body>"));
	}

	#[tokio::test]
	async fn missing_app_is_unavailable() {
		let config = Config {
			frontend_dist: std::env::temp_dir().join("catering-backend-test-nothing-here"),
			..Config::default()
		};

		let (status, _) = fetch(config, "/book").await;
		assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
	}
}
