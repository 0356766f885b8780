use gloo_console::log;
use shared_data::Gallery;
use web_sys::Element;

mod contact;
mod slider;
mod wizard;

pub fn alert(msg: &str) {
	let Some(window) = web_sys::window() else {
		log!("No window to alert in: ", msg);
		return;
	};

	if let Err(e) = window.alert_with_message(msg) {
		log!("Couldn't show alert: ", e);
	}
}

// The pages are all rendered by the backend; we just bring the interactive bits to life wherever
// they have a spot waiting for them
fn main() {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		log!("No document to mount into");
		return;
	};

	if let Some(root) = document.get_element_by_id("intake-wizard") {
		// get rid of the noscript fallback
		root.set_inner_html("");
		yew::Renderer::<wizard::IntakeWizard>::with_root(root).render();
	}

	if let Some(root) = document.get_element_by_id("contact-form") {
		yew::Renderer::<contact::ContactForm>::with_root(root).render();
	}

	let sliders = document.get_elements_by_class_name("image-slider");
	let sliders = (0..sliders.length())
		.filter_map(|idx| sliders.item(idx))
		.collect::<Vec<Element>>();

	for root in sliders {
		let gallery = root.get_attribute("data-gallery")
			.and_then(|g| g.parse::<Gallery>().ok())
			.unwrap_or_default();

		yew::Renderer::<slider::ImageSlider>::with_root_and_props(root, slider::SliderProps { gallery }).render();
	}
}
