use yew::prelude::*;
use gloo_timers::callback::Interval;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Whole units left until the big day. Clamped at zero once it's passed so
/// the hero never counts up into negative days.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
	pub days: i64,
	pub hours: i64,
	pub minutes: i64,
	pub seconds: i64
}

#[must_use]
pub fn time_until(target_ms: i64, now_ms: i64) -> TimeLeft {
	let distance = (target_ms - now_ms).max(0);

	TimeLeft {
		days: distance / MS_PER_DAY,
		hours: distance % MS_PER_DAY / MS_PER_HOUR,
		minutes: distance % MS_PER_HOUR / MS_PER_MINUTE,
		seconds: distance % MS_PER_MINUTE / MS_PER_SECOND
	}
}

#[function_component(Countdown)]
pub fn countdown() -> Html {
	let target_ms = shared_data::wedding_datetime().timestamp_millis();
	let left = use_state(|| time_until(target_ms, js_sys::Date::now() as i64));

	{
		let left = left.clone();
		use_effect_with((), move |_| {
			let tick = Interval::new(1_000, move || {
				left.set(time_until(target_ms, js_sys::Date::now() as i64));
			});

			// dropping the interval on teardown stops the tick
			move || drop(tick)
		});
	}

	html! {
		<h1 id="countdown">{ format!("{} DAYS TO THE WEDDING", left.days) }</h1>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_into_whole_units() {
		// 2 days, 3 hours, 4 minutes, 5 seconds
		let distance = 2 * MS_PER_DAY + 3 * MS_PER_HOUR + 4 * MS_PER_MINUTE + 5 * MS_PER_SECOND;

		assert_eq!(
			time_until(distance, 0),
			TimeLeft { days: 2, hours: 3, minutes: 4, seconds: 5 }
		);
	}

	#[test]
	fn sub_second_remainders_round_down() {
		assert_eq!(time_until(MS_PER_DAY + 999, 0).days, 1);
		assert_eq!(time_until(MS_PER_DAY + 999, 0).seconds, 0);
	}

	#[test]
	fn never_counts_past_the_day() {
		assert_eq!(time_until(0, 0), TimeLeft::default());
		assert_eq!(time_until(0, MS_PER_DAY), TimeLeft::default());
	}
}
