use gloo_console::log;
use gloo_net::http::Request;
use shared_data::ContactSubmission;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::alert;

macro_rules! input_callback{
	($state:ident, $elem:ty, $field:ident) => {{
		let $state = $state.clone();
		Callback::from(move |e: InputEvent| if let Some(el) = e.target()
			.and_then(|t| t.dyn_into::<$elem>().ok()) {
				let mut msg = (*$state).clone();
				msg.$field = el.value();
				$state.set(msg);
			}
		)
	}}
}

async fn send_message(msg: &ContactSubmission) -> Result<(), String> {
	let res = Request::post("/api/contact")
		.json(msg)
		.map_err(|e| format!("Couldn't encode message: {e:?}"))?
		.send()
		.await
		.map_err(|e| format!("Couldn't send message: {e:?}"))?;

	if res.ok() {
		Ok(())
	} else {
		Err(format!("Server returned {}: {}", res.status(), res.text().await.unwrap_or_default()))
	}
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
	let message = use_state(ContactSubmission::default);
	let sending = use_state(|| false);

	let on_submit = {
		let message = message.clone();
		let sending = sending.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			if *sending {
				return;
			}
			sending.set(true);

			let message = message.clone();
			let sending = sending.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match send_message(&message).await {
					Ok(()) => {
						alert("Thank you! We'll be in touch soon.");
						message.set(ContactSubmission::default());
					},
					Err(e) => {
						log!("Contact form failed: ", e);
						alert("Something went wrong. Please try again.");
					}
				}
				sending.set(false);
			});
		})
	};

	html! {
		<form onsubmit={ on_submit }>
			<label for="contact-name">{ "Name" }</label>
			<input
				id="contact-name"
				type="text"
				required=true
				value={ message.name.clone() }
				oninput={ input_callback!(message, HtmlInputElement, name) }
			/>
			<label for="contact-store">{ "Store Name/Website" }</label>
			<input
				id="contact-store"
				type="text"
				value={ message.restaurant.clone() }
				oninput={ input_callback!(message, HtmlInputElement, restaurant) }
			/>
			<label for="contact-city">{ "City" }</label>
			<input
				id="contact-city"
				type="text"
				value={ message.city.clone() }
				oninput={ input_callback!(message, HtmlInputElement, city) }
			/>
			<label for="contact-message">{ "Message" }</label>
			<textarea
				id="contact-message"
				rows="5"
				required=true
				value={ message.message.clone() }
				oninput={ input_callback!(message, HtmlTextAreaElement, message) }
			/>
			<button type="submit" class="button" disabled={ *sending }>
				{ if *sending { "Sending..." } else { "Send Message" } }
			</button>
		</form>
	}
}
