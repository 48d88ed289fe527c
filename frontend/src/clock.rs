use std::time::Duration;

use chrono::NaiveDate;
use gloo_timers::future::TimeoutFuture;
use shared_data::clock::{Clock, Delay};

/// The real thing: the visitor's local date and actual browser timers
#[derive(Clone, Copy, Default, PartialEq)]
pub struct BrowserClock;

impl Clock for BrowserClock {
	fn today(&self) -> NaiveDate {
		let now = js_sys::Date::new_0();
		// js months are 0-based
		NaiveDate::from_ymd_opt(
			now.get_full_year() as i32,
			now.get_month() + 1,
			now.get_date()
		).unwrap_or_default()
	}

	fn delay(&self, duration: Duration) -> Delay {
		let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
		Box::pin(TimeoutFuture::new(millis))
	}
}
