// Everything here is public marketing content, so crawlers can have all of it
static ROBOTS_TXT: &str = "User-agent: *\nAllow: /\n";

pub async fn get_robots_txt() -> &'static str {
	ROBOTS_TXT
}
