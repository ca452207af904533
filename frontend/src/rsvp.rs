use yew::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use gloo_console::error;
use gloo_timers::callback::Timeout;
use shared_data::{Attendance, RsvpRecord};
use std::rc::Rc;
use crate::store::{self, SubmissionFailed};

// How long a thank-you or error banner stays up before the form goes back to
// normal
const STATUS_REVERT_MS: u32 = 5_000;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
	#[default]
	Idle,
	Submitting,
	Success,
	Error
}

#[derive(Debug)]
pub enum RsvpMsg {
	FullName(String),
	Email(String),
	Attendance(Attendance),
	BrunchAttendance(Option<Attendance>),
	Message(String),
	Submitted,
	Resolved(Result<(), SubmissionFailed>),
	Reverted
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RsvpDetails {
	pub full_name: String,
	pub email: String,
	pub attendance: Attendance,
	pub brunch_attendance: Option<Attendance>,
	pub message: String,
	pub status: SubmitStatus
}

impl RsvpDetails {
	/// The record we would send if the guest hit submit right now, or None if
	/// a required field is still empty or another submission is already in
	/// flight. Every insert goes through here, so nothing incomplete can ever
	/// reach the store even if the browser's own `required` checks get
	/// bypassed somehow.
	#[must_use]
	pub fn record(&self) -> Option<RsvpRecord> {
		if self.status == SubmitStatus::Submitting
			|| self.full_name.is_empty()
			|| self.email.is_empty() {
			return None;
		}

		Some(RsvpRecord {
			full_name: self.full_name.clone(),
			email: self.email.clone(),
			attendance: self.attendance,
			brunch_attendance: self.brunch_attendance,
			message: self.message.clone()
		})
	}
}

impl Reducible for RsvpDetails {
	type Action = RsvpMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		macro_rules! clone_self{ ($item:ident) => {
			Self { $item, ..(*self).clone() }.into()
		}}

		match action {
			RsvpMsg::FullName(full_name) => clone_self!(full_name),
			RsvpMsg::Email(email) => clone_self!(email),
			RsvpMsg::Attendance(attendance) => clone_self!(attendance),
			RsvpMsg::BrunchAttendance(brunch_attendance) => clone_self!(brunch_attendance),
			RsvpMsg::Message(message) => clone_self!(message),
			RsvpMsg::Submitted => {
				let status = SubmitStatus::Submitting;
				clone_self!(status)
			},
			// a confirmed write means the form's job is done, so everything
			// resets to defaults for the next guest on this device
			RsvpMsg::Resolved(Ok(())) => Self {
				status: SubmitStatus::Success,
				..Self::default()
			}.into(),
			// whereas a failed write keeps what was typed so the guest can
			// just try again
			RsvpMsg::Resolved(Err(_)) => {
				let status = SubmitStatus::Error;
				clone_self!(status)
			},
			RsvpMsg::Reverted => match self.status {
				SubmitStatus::Success | SubmitStatus::Error => {
					let status = SubmitStatus::Idle;
					clone_self!(status)
				},
				// a new submission started while the old banner was still
				// up; its own resolution schedules the next revert
				SubmitStatus::Idle | SubmitStatus::Submitting => self
			}
		}
	}
}

const STYLE: &str = "
#rsvp {
	padding: 80px 16px;
	background-color: #ffffff;
}
#rsvp-card {
	max-width: 680px;
	margin: 0 auto;
	padding: 48px 32px;
	border: 1px solid rgba(228, 145, 159, 0.2);
	border-radius: 8px;
	box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
}
#rsvp-card label {
	display: block;
	font-size: 18px;
	margin: 24px 0 8px 0;
}
#rsvp-card textarea {
	resize: none;
	height: 110px;
}
#rsvp-submit {
	width: 100%;
	margin-top: 32px;
	padding: 16px;
	background-color: var(--magenta);
	color: #ffffff;
	font-size: 18px;
	transition: background-color 0.2s;
}
#rsvp-submit:hover {
	background-color: var(--burnt-orange);
}
#rsvp-submit:disabled {
	opacity: 0.5;
	cursor: not-allowed;
}
.form-response {
	text-align: center;
	font-size: 18px;
	margin-top: 24px;
}
.form-response.success {
	color: var(--moss);
}
.form-response.error {
	color: var(--burnt-orange);
}
";

#[function_component(RsvpSection)]
pub fn rsvp_section() -> Html {
	let details = use_reducer_eq(RsvpDetails::default);

	// The pending auto-revert, if there is one. Dropping a Timeout cancels
	// it, so overwriting this slot or tearing the section down stops the
	// timer before it can poke state that's gone.
	let revert_timer = use_mut_ref(|| Option::<Timeout>::None);

	{
		let revert_timer = revert_timer.clone();
		use_effect_with((), move |_| move || {
			revert_timer.borrow_mut().take();
		});
	}

	macro_rules! text_callback{
		($type:ident, $element:ty) => {{
			let details = details.clone();
			Callback::from(move |e: Event| if let Some(msg) = e.target()
				.and_then(|t| t.dyn_into::<$element>().ok())
				.map(|input| RsvpMsg::$type(input.value())) {
					details.dispatch(msg);
				}
			)
		}}
	}

	let name_callback = text_callback!(FullName, HtmlInputElement);
	let email_callback = text_callback!(Email, HtmlInputElement);
	let message_callback = text_callback!(Message, HtmlTextAreaElement);

	let attendance_callback = {
		let details = details.clone();
		Callback::from(move |e: Event| if let Some(att) = e.target()
			.and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
			.and_then(|select| Attendance::from_value(&select.value())) {
				details.dispatch(RsvpMsg::Attendance(att));
			}
		)
	};

	// the empty option maps back to "no answer", which never hits the wire
	let brunch_callback = {
		let details = details.clone();
		Callback::from(move |e: Event| if let Some(select) = e.target()
			.and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
				details.dispatch(RsvpMsg::BrunchAttendance(Attendance::from_value(&select.value())));
			}
		)
	};

	let submit_details = details.clone();
	let submit_timer = revert_timer.clone();
	let onsubmit = Callback::from(move |ev: SubmitEvent| {
		// by the time this fires the browser has already run its
		// required-field checks, so all that's left is to keep the page from
		// actually navigating
		ev.prevent_default();

		let Some(record) = submit_details.record() else { return };

		// a submission is starting; an old banner's timer must not flip the
		// status out from under it
		submit_timer.borrow_mut().take();
		submit_details.dispatch(RsvpMsg::Submitted);

		let details = submit_details.clone();
		let revert_timer = submit_timer.clone();
		wasm_bindgen_futures::spawn_local(async move {
			let result = store::insert_rsvp(&record).await;

			if let Err(ref err) = result {
				error!(format!("{err}"));
			}

			details.dispatch(RsvpMsg::Resolved(result));

			let revert_details = details.clone();
			*revert_timer.borrow_mut() = Some(Timeout::new(
				STATUS_REVERT_MS,
				move || revert_details.dispatch(RsvpMsg::Reverted)
			));
		});
	});

	let submitting = details.status == SubmitStatus::Submitting;

	let response = match details.status {
		SubmitStatus::Success => html! {
			<div class="form-response success">
				{ "Thank you! Your RSVP has been received." }
			</div>
		},
		SubmitStatus::Error => html! {
			<div class="form-response error">
				{ "There was an error. Please try again." }
			</div>
		},
		SubmitStatus::Idle | SubmitStatus::Submitting => html! {}
	};

	html! {
		<section id="rsvp">
			<style>{ STYLE }</style>
			<h2 class="section-title">{ "RSVP" }</h2>
			<div class="section-rule"></div>
			<div id="rsvp-card">
				<form { onsubmit }>
					<label for="full_name">{ "Full Name" }</label>
					<input
						type="text"
						id="full_name"
						name="full_name"
						required={ true }
						value={ details.full_name.clone() }
						onchange={ name_callback }
					/>

					<label for="email">{ "Email" }</label>
					<input
						type="email"
						id="email"
						name="email"
						required={ true }
						value={ details.email.clone() }
						onchange={ email_callback }
					/>

					<label for="attendance">{ "Will you attend?" }</label>
					<select id="attendance" name="attendance" onchange={ attendance_callback }>
						<option
							value={ Attendance::Accepts.as_value() }
							selected={ details.attendance == Attendance::Accepts }
						>{ "Accept with pleasure" }</option>
						<option
							value={ Attendance::Declines.as_value() }
							selected={ details.attendance == Attendance::Declines }
						>{ "Regretfully decline" }</option>
					</select>

					<label for="brunch_attendance">{ "Join us for brunch the morning after?" }</label>
					<select id="brunch_attendance" name="brunch_attendance" onchange={ brunch_callback }>
						<option value="" selected={ details.brunch_attendance.is_none() }>
							{ "No answer yet" }
						</option>
						<option
							value={ Attendance::Accepts.as_value() }
							selected={ details.brunch_attendance == Some(Attendance::Accepts) }
						>{ "Wouldn't miss it" }</option>
						<option
							value={ Attendance::Declines.as_value() }
							selected={ details.brunch_attendance == Some(Attendance::Declines) }
						>{ "Just the wedding for us" }</option>
					</select>

					<label for="message">{ "Dietary Restrictions or Message" }</label>
					<textarea
						id="message"
						name="message"
						value={ details.message.clone() }
						onchange={ message_callback }
					/>

					<button id="rsvp-submit" type="submit" disabled={ submitting }>
						{ if submitting { "Sending..." } else { "Submit RSVP" } }
					</button>

					{ response }
				</form>
			</div>
		</section>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn filled() -> RsvpDetails {
		RsvpDetails {
			full_name: "Jane Doe".into(),
			email: "jane@example.com".into(),
			..RsvpDetails::default()
		}
	}

	fn step(state: RsvpDetails, msg: RsvpMsg) -> RsvpDetails {
		(*Rc::new(state).reduce(msg)).clone()
	}

	#[test]
	fn record_needs_both_required_fields() {
		assert_eq!(RsvpDetails::default().record(), None);

		let no_email = RsvpDetails {
			email: String::new(),
			..filled()
		};
		assert_eq!(no_email.record(), None);

		let no_name = RsvpDetails {
			full_name: String::new(),
			..filled()
		};
		assert_eq!(no_name.record(), None);
	}

	#[test]
	fn record_carries_the_entered_values() {
		assert_eq!(
			filled().record(),
			Some(RsvpRecord {
				full_name: "Jane Doe".into(),
				email: "jane@example.com".into(),
				attendance: Attendance::Accepts,
				brunch_attendance: None,
				message: String::new()
			})
		);
	}

	#[test]
	fn field_updates_are_pure_and_always_succeed() {
		let state = step(filled(), RsvpMsg::Message("no shellfish please".into()));
		assert_eq!(state.message, "no shellfish please");
		assert_eq!(state.full_name, "Jane Doe");
		assert_eq!(state.status, SubmitStatus::Idle);

		let state = step(state, RsvpMsg::Attendance(Attendance::Declines));
		assert_eq!(state.attendance, Attendance::Declines);

		let state = step(state, RsvpMsg::BrunchAttendance(Some(Attendance::Accepts)));
		assert_eq!(state.brunch_attendance, Some(Attendance::Accepts));
	}

	#[test]
	fn no_second_record_while_submitting() {
		let state = step(filled(), RsvpMsg::Submitted);
		assert_eq!(state.status, SubmitStatus::Submitting);
		assert_eq!(state.record(), None);
	}

	#[test]
	fn success_resets_the_form_then_reverts_to_idle() {
		let mut state = filled();
		state.message = "see you there!".into();

		let state = step(state, RsvpMsg::Submitted);
		let state = step(state, RsvpMsg::Resolved(Ok(())));

		assert_eq!(state.status, SubmitStatus::Success);
		assert_eq!(state.full_name, "");
		assert_eq!(state.email, "");
		assert_eq!(state.attendance, Attendance::Accepts);
		assert_eq!(state.brunch_attendance, None);
		assert_eq!(state.message, "");

		let state = step(state, RsvpMsg::Reverted);
		assert_eq!(state.status, SubmitStatus::Idle);
	}

	#[test]
	fn error_keeps_what_was_entered() {
		let mut state = filled();
		state.message = "see you there!".into();

		let state = step(state, RsvpMsg::Submitted);
		let state = step(
			state,
			RsvpMsg::Resolved(Err(SubmissionFailed("store returned 500".into())))
		);

		assert_eq!(state.status, SubmitStatus::Error);
		assert_eq!(state.full_name, "Jane Doe");
		assert_eq!(state.email, "jane@example.com");
		assert_eq!(state.message, "see you there!");

		let state = step(state, RsvpMsg::Reverted);
		assert_eq!(state.status, SubmitStatus::Idle);
		assert_eq!(state.full_name, "Jane Doe");
	}

	#[test]
	fn stray_revert_never_interrupts_a_submission() {
		let state = step(filled(), RsvpMsg::Submitted);
		let state = step(state, RsvpMsg::Reverted);
		assert_eq!(state.status, SubmitStatus::Submitting);
	}
}
