use std::fmt::{self, Display};

use gloo_net::http::Request;
use shared_data::RsvpRecord;

// Where RSVPs get written. The table lives behind a hosted REST layer, so
// creating a record is just one POST against the collection endpoint. The
// deploy script overrides this at build time; the default works with the
// reverse proxy we put in front of the store.
const STORE_URL: &str = match option_env!("RSVP_STORE_URL") {
	Some(url) => url,
	None => "/rest/v1/rsvps"
};

/// Every way the insert can go wrong, flattened into one kind. The detail
/// string is only ever shown in the console; guests just see the generic
/// error line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionFailed(pub String);

impl Display for SubmissionFailed {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "rsvp submission failed: {}", self.0)
	}
}

/// Sends exactly one create-record request. We don't read anything back
/// beyond the status; the store assigns the record its identity.
pub async fn insert_rsvp(record: &RsvpRecord) -> Result<(), SubmissionFailed> {
	let request = Request::post(STORE_URL)
		.header("Prefer", "return=minimal")
		.json(record)
		.map_err(|e| SubmissionFailed(format!("couldn't serialize the rsvp: {e:?}")))?;

	match request.send().await {
		Err(err) => Err(SubmissionFailed(format!("transport error: {err:?}"))),
		Ok(res) if res.ok() => Ok(()),
		Ok(res) => {
			let text = res.text().await.unwrap_or_else(|e| format!("{e:?}"));
			Err(SubmissionFailed(format!("store returned {}: {text}", res.status())))
		}
	}
}
