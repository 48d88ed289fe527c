pub mod booking;
pub mod catalog;
pub mod clock;
pub mod content;
pub mod i18n;
pub mod links;
pub mod menu;

pub use booking::{BookingDraft, BookingWizard, Field, FieldError, FieldValue, Step, TransitionError};
pub use catalog::{Catalog, MenuCategory, MenuItem};
pub use clock::Clock;
pub use content::SiteContent;
pub use i18n::{tr, BundledStrings, Locale, LocalizedText, StringId, Strings};
pub use menu::{CategoryFilter, MenuSelector};

pub static BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Noto+Nastaliq+Urdu&family=Playfair+Display&display=swap');
* {
	--maroon: #6d1f2f;
	--gold: #c9a24b;
	--cream: #fbf6ec;
	--ink: #2b2024;
	--muted: #7b6a6f;
	--card: #ffffff;
	--border: #e7dcc8;
	--error: #b3261e;
	box-sizing: border-box;
	color: var(--ink);
	font-family: "Playfair Display", Georgia, serif;
}
html[lang="ur"] * {
	font-family: "Noto Nastaliq Urdu", serif;
	line-height: 2;
}
body {
	background-color: var(--cream);
	margin: 0;
}
a {
	color: var(--maroon);
	text-decoration: none;
}
nav {
	display: flex;
	flex-wrap: wrap;
	gap: 18px;
	align-items: center;
	justify-content: space-between;
	padding: 14px 24px;
	background-color: var(--maroon);
}
nav a, nav span {
	color: var(--cream);
}
main {
	max-width: 1000px;
	margin: 0 auto;
	padding: 20px;
}
button, .button {
	background-color: var(--maroon);
	color: var(--cream);
	border: 1px solid var(--maroon);
	border-radius: 6px;
	padding: 8px 14px;
	cursor: pointer;
}
button.secondary {
	background-color: transparent;
	color: var(--maroon);
}
button:disabled {
	opacity: 0.6;
	cursor: default;
}
input, select, textarea {
	width: 100%;
	padding: 8px;
	border: 1px solid var(--border);
	border-radius: 6px;
	background-color: var(--card);
}
.card {
	background-color: var(--card);
	border: 1px solid var(--border);
	border-radius: 10px;
	padding: 16px;
}
.grid {
	display: grid;
	grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
	gap: 16px;
}
.field-error {
	color: var(--error);
	font-size: 14px;
}
.badge {
	background-color: var(--gold);
	border-radius: 10px;
	padding: 0 7px;
	margin-inline-start: 6px;
	font-size: 13px;
}
.button.secondary {
	background-color: transparent;
	color: var(--maroon);
}
.form-field {
	margin-bottom: 14px;
}
.step-counter {
	color: var(--muted);
	font-size: 14px;
}
.wizard-actions, .filters, .guests {
	display: flex;
	flex-wrap: wrap;
	gap: 10px;
	align-items: center;
	margin: 12px 0;
}
.filter.active {
	background-color: var(--gold);
	border-color: var(--gold);
}
.menu-layout {
	display: grid;
	grid-template-columns: 1fr 280px;
	gap: 20px;
	align-items: start;
}
.menu-item {
	cursor: pointer;
	position: relative;
}
.menu-item img, .card img {
	width: 100%;
	border-radius: 6px;
}
.menu-item.selected {
	border: 2px solid var(--maroon);
}
.menu-item .check {
	position: absolute;
	top: 10px;
	inset-inline-end: 10px;
	color: var(--maroon);
	font-size: 20px;
}
.popular {
	border: 2px solid var(--gold);
}
footer {
	text-align: center;
	color: var(--muted);
	padding: 24px;
}
#contact-fab {
	position: fixed;
	bottom: 18px;
	inset-inline-end: 18px;
	display: flex;
	flex-direction: column;
	gap: 8px;
}
"#;
