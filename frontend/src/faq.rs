use yew::prelude::*;

struct Faq {
	question: &'static str,
	answer: &'static str
}

const FAQS: &[Faq] = &[
	Faq {
		question: "Can I bring a plus one?",
		answer: "Unfortunately not due to the limited space of the venue. We ask each person \
			who is invited to register separately using the RSVP form."
	},
	Faq {
		question: "Are children allowed?",
		answer: "Yes… maybe? We honestly don't know yet."
	},
	Faq {
		question: "Will there be a wedding registry?",
		answer: "Your presence at our wedding is the greatest gift of all. However, if you wish \
			to give us a gift, we are accepting monetary contributions that will be used toward \
			our honeymoon."
	}
];

const STYLE: &str = "
#faqs {
	padding: 80px 16px;
	background-color: var(--paper);
}
#faq-blurb {
	text-align: center;
	color: var(--warm-brown);
	font-size: 18px;
	margin-bottom: 48px;
}
#faq-list {
	max-width: 900px;
	margin: 0 auto;
}
.faq-entry {
	background-color: #ffffff;
	border: 1px solid rgba(228, 145, 159, 0.2);
	border-radius: 8px;
	box-shadow: 0 4px 6px rgba(0, 0, 0, 0.07);
	margin-bottom: 16px;
	overflow: hidden;
}
.faq-entry > button {
	width: 100%;
	display: flex;
	justify-content: space-between;
	align-items: center;
	text-align: left;
	padding: 16px 24px;
	background: none;
	font-size: 18px;
	font-weight: 500;
}
.faq-entry .chevron {
	color: var(--magenta);
	transition: transform 0.3s;
}
.faq-entry .chevron.open {
	transform: rotate(180deg);
}
.faq-entry .answer {
	padding: 16px 24px;
	background-color: var(--paper);
	border-top: 1px solid rgba(228, 145, 159, 0.2);
	color: var(--warm-brown);
	line-height: 1.6;
}
";

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
	// which question is unfolded right now, if any. Opening one closes
	// whatever else was open, and clicking the open one folds it back up.
	let open = use_state(|| Option::<usize>::None);

	html! {
		<section id="faqs">
			<style>{ STYLE }</style>
			<h2 class="section-title cursive">{ "FAQs" }</h2>
			<p id="faq-blurb">{ "Here you will find commonly asked questions and their answers" }</p>
			<div id="faq-list">
			{
				FAQS.iter().enumerate().map(|(index, faq)| {
					let is_open = *open == Some(index);
					let open = open.clone();
					let onclick = Callback::from(move |_| open.set(
						if is_open { None } else { Some(index) }
					));

					html! {
						<div class="faq-entry">
							<button type="button" { onclick }>
								<span>{ faq.question }</span>
								<span class={ if is_open { "chevron open" } else { "chevron" } }>
									{ "▾" }
								</span>
							</button>
							{
								if is_open {
									html! { <p class="answer">{ faq.answer }</p> }
								} else {
									html! {}
								}
							}
						</div>
					}
				}).collect::<Html>()
			}
			</div>
		</section>
	}
}
