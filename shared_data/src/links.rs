//! Outbound deep links. These are the only thing the site ever "sends": everything else happens
//! on the visitor's phone once WhatsApp or the dialer opens.

#[must_use]
pub fn digits_only(phone: &str) -> String {
	phone.chars().filter(char::is_ascii_digit).collect()
}

/// `https://wa.me/<digits>?text=<message>`, with the message percent-encoded so that newlines
/// survive as `%0A` and spaces as `%20` (never `+`)
#[must_use]
pub fn whatsapp_link(phone: &str, message: &str) -> String {
	format!("https://wa.me/{}?text={}", digits_only(phone), urlencoding::encode(message))
}

/// A link straight to the business without any prefilled text
#[must_use]
pub fn whatsapp_chat_link(phone: &str) -> String {
	format!("https://wa.me/{}", digits_only(phone))
}

#[must_use]
pub fn tel_link(phone: &str) -> String {
	format!("tel:+{}", digits_only(phone))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_formatting_from_numbers() {
		assert_eq!(digits_only("+92 (300) 123-4567"), "923001234567");
		assert_eq!(digits_only("no digits"), "");
	}

	#[test]
	fn whatsapp_text_is_percent_encoded() {
		let link = whatsapp_link("+92 300 1234567", "Hi there!\nGuests: 200 & more");
		assert_eq!(
			link,
			"https://wa.me/923001234567?text=Hi%20there%21%0AGuests%3A%20200%20%26%20more"
		);
	}

	#[test]
	fn whatsapp_text_keeps_urdu_intact_after_decoding() {
		let message = "السلام علیکم";
		let link = whatsapp_link("923001234567", message);
		let (_, encoded) = link.split_once("?text=").unwrap();
		assert!(!encoded.contains(' '));
		assert_eq!(urlencoding::decode(encoded).unwrap(), message);
	}

	#[test]
	fn tel_links() {
		assert_eq!(tel_link("+92 300 1234567"), "tel:+923001234567");
		assert_eq!(whatsapp_chat_link("0092-300"), "https://wa.me/0092300");
	}
}
