use std::{net::{IpAddr, Ipv4Addr, SocketAddr}, path::PathBuf};

use shared_data::{content::ContactInfo, SiteContent};

macro_rules! dotenv_num{
	($key:expr, $default:expr, $type:ident) => {
		dotenv::var($key).ok()
			.and_then(|v| v.parse::<$type>().ok())
			.unwrap_or($default)
	}
}

#[derive(Clone, Debug)]
pub struct Config {
	pub addr: SocketAddr,
	// where trunk put the built yew app; /book and /menu are served out of here
	pub frontend_dist: PathBuf,
	pub contact: ContactInfo,
}

impl Config {
	/// Read everything from `.env`/the environment, falling back to the bundled contact details
	pub fn from_env() -> Self {
		let port = dotenv_num!("BACKEND_PORT", 8080, u16);
		let host = dotenv_num!("BACKEND_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr);

		let frontend_dist = dotenv::var("FRONTEND_DIST")
			.ok()
			.filter(|d| !d.is_empty())
			.unwrap_or_else(|| "frontend/dist".into())
			.into();

		let mut contact = SiteContent::bundled().contact.clone();
		if let Some(num) = non_empty_var("WHATSAPP_NUMBER") {
			contact.whatsapp = num;
		}
		if let Some(num) = non_empty_var("PHONE_NUMBER") {
			contact.phone = num;
		}

		Self {
			addr: SocketAddr::new(host, port),
			frontend_dist,
			contact
		}
	}

	pub fn index_html(&self) -> PathBuf {
		self.frontend_dist.join("index.html")
	}
}

impl Default for Config {
	fn default() -> Self {
		Self {
			addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080),
			frontend_dist: "frontend/dist".into(),
			contact: SiteContent::bundled().contact.clone()
		}
	}
}

fn non_empty_var(key: &str) -> Option<String> {
	dotenv::var(key).ok().filter(|v| !v.trim().is_empty())
}
