use std::{future::Future, pin::Pin, time::Duration};

use chrono::NaiveDate;

pub type Delay = Pin<Box<dyn Future<Output = ()>>>;

/// Where the booking wizard gets "today" from (for the event date check) and how it waits out the
/// simulated submission. The browser build uses the JS clock and real timers; tests use a fixed
/// date and delays that resolve immediately.
pub trait Clock {
	fn today(&self) -> NaiveDate;
	fn delay(&self, duration: Duration) -> Delay;
}

impl<C: Clock + ?Sized> Clock for &C {
	fn today(&self) -> NaiveDate {
		(**self).today()
	}

	fn delay(&self, duration: Duration) -> Delay {
		(**self).delay(duration)
	}
}
