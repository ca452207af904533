use chrono::{DateTime, FixedOffset, TimeZone};

/// A guest's answer to "will you attend?". The wire values are the ones the
/// rsvps table has always stored, so don't change them without migrating it.
#[derive(serde::Serialize, serde::Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Attendance {
	#[default]
	#[serde(rename = "yes")]
	Accepts,
	#[serde(rename = "no")]
	Declines
}

impl Attendance {
	// these double as the <option> values in the form selects
	pub const ACCEPTS_VALUE: &'static str = "yes";
	pub const DECLINES_VALUE: &'static str = "no";

	#[must_use]
	pub fn as_value(self) -> &'static str {
		match self {
			Self::Accepts => Self::ACCEPTS_VALUE,
			Self::Declines => Self::DECLINES_VALUE
		}
	}

	#[must_use]
	pub fn from_value(value: &str) -> Option<Self> {
		match value {
			Self::ACCEPTS_VALUE => Some(Self::Accepts),
			Self::DECLINES_VALUE => Some(Self::Declines),
			_ => None
		}
	}
}

/// The one record we ever write to the store. `brunch_attendance` stays off
/// the wire entirely until the guest actually picks an answer; `message` is
/// always sent, even when empty.
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RsvpRecord {
	pub full_name: String,
	pub email: String,
	pub attendance: Attendance,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub brunch_attendance: Option<Attendance>,
	pub message: String
}

// Houston is on daylight time in late April, so UTC-5
#[must_use]
pub fn wedding_datetime() -> DateTime<FixedOffset> {
	FixedOffset::west_opt(5 * 3600)
		.and_then(|offset| offset.with_ymd_and_hms(2026, 4, 25, 15, 30, 0).single())
		.expect("the wedding date better be a real date")
}

#[must_use]
pub fn wedding_date_display() -> String {
	wedding_datetime().format("%B %-d, %Y at %-I:%M %p").to_string()
}

pub const VENUE_ADDRESS: &str = "1607 Missouri Street, Houston, TX 77006";

pub static BASE_STYLE: &str = r#"
* {
	--cream: #eddbca;
	--sage: #cfcd99;
	--blush: #fbc1c6;
	--parchment: #ede9dd;
	--paper: #faf8f5;
	--olive: #695c22;
	--moss: #a5a55f;
	--magenta: #cf2f75;
	--burnt-orange: #ed4e22;
	--warm-brown: #ae611b;
	--peach: #f5d7ca;
	--rose: #e4919f;
	--dusty-rose: #d4a3a6;
	--salmon: #f9a58a;
	font-family: "Playfair Display", serif;
	color: var(--olive);
	box-sizing: border-box;
}
body {
	background-color: var(--cream);
	margin: 0;
}
h2.section-title {
	text-align: center;
	font-size: 52px;
	font-weight: 300;
	letter-spacing: 2px;
}
.section-rule {
	width: 96px;
	height: 4px;
	background-color: var(--magenta);
	margin: 16px auto 64px auto;
}
.cursive {
	font-family: "Cedarville Cursive", cursive;
	font-weight: 600;
}
input, select, textarea {
	width: 100%;
	padding: 12px 16px;
	border: 1px solid var(--dusty-rose);
	border-radius: 8px;
	background-color: rgba(245, 215, 202, 0.2);
	font-size: 16px;
}
input:focus, select:focus, textarea:focus {
	outline: 2px solid var(--magenta);
}
button {
	border: none;
	border-radius: 8px;
	cursor: pointer;
}
"#;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn attendance_values_round_trip() {
		fn check(att: Attendance) {
			assert_eq!(Attendance::from_value(att.as_value()), Some(att));
		}

		check(Attendance::Accepts);
		check(Attendance::Declines);
		assert_eq!(Attendance::from_value(""), None);
		assert_eq!(Attendance::from_value("maybe"), None);
	}

	#[test]
	fn attendance_defaults_to_accepting() {
		assert_eq!(Attendance::default(), Attendance::Accepts);
	}

	#[test]
	fn record_wire_format_is_stable() {
		let record = RsvpRecord {
			full_name: "Jane Doe".into(),
			email: "jane@example.com".into(),
			..RsvpRecord::default()
		};

		assert_eq!(
			serde_json::to_value(&record).unwrap(),
			serde_json::json!({
				"full_name": "Jane Doe",
				"email": "jane@example.com",
				"attendance": "yes",
				"message": ""
			})
		);
	}

	#[test]
	fn answered_brunch_reaches_the_wire() {
		let record = RsvpRecord {
			full_name: "Jane Doe".into(),
			email: "jane@example.com".into(),
			attendance: Attendance::Declines,
			brunch_attendance: Some(Attendance::Declines),
			message: "congrats you two!".into()
		};

		assert_eq!(
			serde_json::to_value(&record).unwrap(),
			serde_json::json!({
				"full_name": "Jane Doe",
				"email": "jane@example.com",
				"attendance": "no",
				"brunch_attendance": "no",
				"message": "congrats you two!"
			})
		);
	}

	#[test]
	fn wedding_date_displays_like_the_invitations() {
		assert_eq!(wedding_date_display(), "April 25, 2026 at 3:30 PM");
	}
}
