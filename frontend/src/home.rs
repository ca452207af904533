use yew::prelude::*;
use crate::{countdown::Countdown, faq::FaqSection, rsvp::RsvpSection, style::SharedStyle};

const NAV_LINKS: &[&str] = &["Our Story", "RSVP", "The Details", "Gallery", "FAQs"];

const GALLERY_IMAGES: &[&str] = &[
	"/img_0497.jpg",
	"/img_1998.jpg",
	"/img_8031.jpg",
	"/img_8001.jpg",
	"/64ccaf04-cc4e-43de-9688-6d09734e461a000115360016.jpeg",
	"/img_6754.jpg",
	"/309fd33a-8e4c-46ff-befd-3ff0fce33ea2.jpg",
	"/img_6554.jpg"
];

const STYLE: &str = "
nav {
	position: fixed;
	top: 0;
	width: 100%;
	background-color: var(--sage);
	box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
	z-index: 50;
}
#nav-inner {
	max-width: 1280px;
	margin: 0 auto;
	padding: 12px 16px;
	display: grid;
	grid-template-columns: 1fr auto 1fr;
	align-items: center;
}
#couple-logo {
	justify-self: start;
	display: flex;
	gap: 6px;
	align-items: center;
	color: #ffffff;
	font-size: 18px;
	text-decoration: none;
}
#couple-logo .heart, footer .heart {
	color: var(--salmon);
}
#nav-links {
	justify-self: center;
	display: flex;
	gap: 32px;
	padding: 8px 16px;
	border-top: 1.5px solid rgba(255, 255, 255, 0.4);
	border-bottom: 1.5px solid rgba(255, 255, 255, 0.4);
}
#nav-links > a {
	color: #ffffff;
	text-decoration: none;
	letter-spacing: 1px;
	white-space: nowrap;
	transition: color 0.2s;
}
#nav-links > a:hover {
	color: var(--rose);
}
#home {
	position: relative;
	height: 100vh;
	background-image: linear-gradient(to bottom, rgba(0, 0, 0, 0.3), transparent, rgba(0, 0, 0, 0.5)), url(/wallyphoto.png);
	background-size: cover;
	background-position: center center;
	background-attachment: fixed;
	display: flex;
	flex-direction: column;
	justify-content: flex-end;
	text-align: center;
	padding-bottom: 96px;
}
#home h2 {
	color: #ffffff;
	font-size: clamp(45px, 8vw, 80px);
	text-shadow: 2px 2px 8px rgba(0, 0, 0, 0.7);
	margin-bottom: 24px;
}
#home #countdown {
	color: #ffffff;
	font-size: clamp(24px, 4vw, 36px);
	font-weight: 700;
	letter-spacing: 0.1em;
	text-shadow: 3px 3px 12px rgba(0, 0, 0, 0.8);
}
#our-story {
	position: relative;
	padding: 80px 16px;
	background-image: linear-gradient(rgba(105, 92, 34, 0.7), rgba(105, 92, 34, 0.7)), url(/img_8001.jpg);
	background-size: cover;
	background-position: center;
}
#our-story h2 {
	color: #ffffff;
}
#story-text {
	max-width: 900px;
	margin: 0 auto;
	text-align: center;
}
#story-text > p {
	color: var(--peach);
	font-size: 20px;
	line-height: 1.6;
	margin-top: 24px;
}
#the-details {
	padding: 80px 16px;
	background-color: var(--parchment);
}
.detail-card {
	max-width: 680px;
	margin: 0 auto 48px auto;
	padding: 32px;
	background-color: #ffffff;
	border: 1px solid rgba(228, 145, 159, 0.2);
	border-radius: 8px;
	box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
	text-align: center;
}
.detail-card > h3 {
	font-size: 30px;
	margin-bottom: 24px;
}
.detail-card p {
	color: var(--warm-brown);
	font-size: 18px;
	line-height: 1.6;
}
.detail-card .accent {
	color: var(--magenta);
}
.detail-card img {
	max-width: 100%;
	border-radius: 8px;
	margin-top: 24px;
}
#gallery {
	padding: 80px 16px;
	background-color: #ffffff;
}
#gallery-grid {
	max-width: 1280px;
	margin: 0 auto;
	display: grid;
	grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
	gap: 16px;
}
#gallery-grid img {
	width: 100%;
	aspect-ratio: 1;
	object-fit: cover;
	border-radius: 8px;
	box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
	transition: transform 0.5s;
}
#gallery-grid img:hover {
	transform: scale(1.05);
}
footer {
	padding: 48px 16px;
	background-color: var(--olive);
	text-align: center;
}
#footer-names {
	display: flex;
	justify-content: center;
	gap: 12px;
	font-size: 30px;
	color: #ffffff;
	margin-bottom: 16px;
}
footer > p {
	color: var(--peach);
	font-size: 18px;
}
";

#[function_component(Home)]
pub fn home() -> Html {
	html! {
		<>
			<SharedStyle />
			<style>{ STYLE }</style>
			<nav>
				<div id="nav-inner">
					<a id="couple-logo" href="#home">
						<span>{ "Coralanne" }</span>
						<span class="heart">{ "♥" }</span>
						<span>{ "Alexander" }</span>
					</a>
					<div id="nav-links">
						{
							NAV_LINKS.iter().map(|link| html! {
								<a href={ format!("#{}", link.to_lowercase().replace(' ', "-")) }>
									{ link }
								</a>
							}).collect::<Html>()
						}
					</div>
					<div></div>
				</div>
			</nav>

			<section id="home">
				<h2 class="cursive">{ "We're Getting Married!" }</h2>
				<Countdown />
			</section>

			<section id="our-story">
				<h2 class="section-title cursive">{ "Our Story" }</h2>
				<div class="section-rule"></div>
				<div id="story-text">
					<p>
						{ "Our love story is no typical love story, nor is it a grand love story \
						you will find in Hollywood movies. This love story is unique and special. \
						It starts with a young girl walking into a coffee shop, Coralanne, and a \
						young man robbing the store. Then, out of nowhere, my knight in shining \
						armor stepped up and KILLED the guy robbing the store with one of his \
						special raisin fart attacks." }
					</p>
					<p>
						{ "At that moment, I was in awe; I knew I had found the one for me. I went \
						up to him and said, 'Me, you, dino nuggets at my place. 5 o'clock, be \
						there or be a square.'" }
					</p>
					<p>{ "And Alexander replied, 'Dino nuggies are my favorite!'" }</p>
				</div>
			</section>

			<RsvpSection />

			<section id="the-details">
				<h2 class="section-title">{ "The Details" }</h2>
				<div class="section-rule"></div>
				<div class="detail-card">
					<h3>{ "Ceremony" }</h3>
					<p class="accent">{ shared_data::wedding_date_display() }</p>
					<p>{ shared_data::VENUE_ADDRESS }</p>
				</div>
				<div class="detail-card">
					<h3>{ "Attire" }</h3>
					<p>
						{ "We kindly request that our guests dress in " }
						<em>{ "Spring Cocktail" }</em>
						{ " attire." }
					</p>
					<img src="/dresscode.png" alt="Dress Code" />
				</div>
				<div class="detail-card">
					<h3>{ "Travel Accommodations" }</h3>
					<p>{ "Information about travel accommodations will be provided here." }</p>
				</div>
			</section>

			<section id="gallery">
				<h2 class="section-title">{ "Gallery" }</h2>
				<div class="section-rule"></div>
				<div id="gallery-grid">
					{
						GALLERY_IMAGES.iter().enumerate().map(|(index, image)| html! {
							<img src={ *image } alt={ format!("Gallery {}", index + 1) } />
						}).collect::<Html>()
					}
				</div>
			</section>

			<FaqSection />

			<footer>
				<div id="footer-names">
					<span>{ "Coralanne" }</span>
					<span class="heart">{ "♥" }</span>
					<span>{ "Alexander" }</span>
				</div>
				<p>{ shared_data::wedding_datetime().format("%B %-d, %Y").to_string() }</p>
			</footer>
		</>
	}
}
