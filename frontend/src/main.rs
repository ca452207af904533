use yew_router::prelude::*;
use yew::prelude::*;
use home::Home;

mod home;
mod countdown;
mod rsvp;
mod faq;
mod store;
mod style;

// The whole site is one page of anchored sections, but keeping the router
// means any stray path still lands somewhere sensible instead of a blank
// document.
#[derive(Clone, Routable, PartialEq)]
enum Route {
	#[not_found]
	#[at("/")]
	Home
}

fn switch(route: Route) -> Html {
	match route {
		Route::Home => html! { <Home /> }
	}
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	html! {
		<BrowserRouter>
			<Switch<Route> render={switch} />
		</BrowserRouter>
	}
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
