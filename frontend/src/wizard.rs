use std::rc::Rc;

use gloo_console::log;
use gloo_net::http::Request;
use shared_data::{
	fields,
	wizard::{Step, Wizard, WizardState},
	IntakeForm,
	SelectedFile
};
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::alert;

/// The wizard plus the actual browser file it's talking about, which has to tag along so we can
/// put it in the request
#[derive(Clone, Default, PartialEq)]
pub struct WizardModel {
	wizard: Wizard,
	file: Option<web_sys::File>,
}

pub enum WizardMsg {
	Select(web_sys::File),
	Next,
	Back,
	JumpTo(Step),
	Email(String),
	Phone(String),
	Usage(String),
	Specifics(String),
	BeginSubmit,
	Resolved(bool),
}

impl Reducible for WizardModel {
	type Action = WizardMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut next = (*self).clone();

		match action {
			WizardMsg::Select(file) => {
				let selected = SelectedFile::new(file.name(), file.type_());
				if let Err(e) = next.wizard.select_file(selected) {
					alert(&e.to_string());
					return self;
				}
				next.file = Some(file);
			},
			WizardMsg::Next => if let Err(e) = next.wizard.next() {
				alert(&e.to_string());
				return self;
			},
			WizardMsg::Back => next.wizard.back(),
			WizardMsg::JumpTo(step) => if !next.wizard.jump_to(step) {
				return self;
			},
			WizardMsg::Email(email) => next.wizard.set_email(email),
			WizardMsg::Phone(phone) => next.wizard.set_phone(phone),
			WizardMsg::Usage(usage) => next.wizard.set_usage(usage),
			WizardMsg::Specifics(specifics) => next.wizard.set_specifics(specifics),
			// a failure here just leaves the email error on the wizard for the view to show
			WizardMsg::BeginSubmit => {
				_ = next.wizard.begin_submit();
			},
			WizardMsg::Resolved(ok) => next.wizard.finish_submit(ok),
		}

		next.into()
	}
}

enum SendOutcome {
	Sent,
	Rejected(u16),
	Failed(String),
}

async fn send_form(form: IntakeForm, file: Option<web_sys::File>) -> SendOutcome {
	let data = match FormData::new() {
		Ok(d) => d,
		Err(e) => return SendOutcome::Failed(format!("Couldn't create FormData: {e:?}"))
	};

	if let Some(ref file) = file {
		if let Err(e) = data.append_with_blob_and_filename(fields::FILE, file, &file.name()) {
			return SendOutcome::Failed(format!("Couldn't attach file: {e:?}"));
		}
	}

	for (name, value) in form.text_fields() {
		if let Err(e) = data.append_with_str(name, value) {
			return SendOutcome::Failed(format!("Couldn't add {name}: {e:?}"));
		}
	}

	let req = match Request::post("/api/submit-form").body(data) {
		Ok(req) => req,
		Err(e) => return SendOutcome::Failed(format!("Couldn't build request: {e:?}"))
	};

	match req.send().await {
		Ok(res) if res.ok() => SendOutcome::Sent,
		Ok(res) => {
			log!("Submission rejected: ", res.text().await.unwrap_or_default());
			SendOutcome::Rejected(res.status())
		},
		Err(e) => SendOutcome::Failed(format!("{e:?}"))
	}
}

#[function_component(IntakeWizard)]
pub fn intake_wizard() -> Html {
	let model = use_reducer_eq(WizardModel::default);
	let wizard = &model.wizard;

	macro_rules! text_callback{
		($elem:ty, $msg:ident) => {{
			let model = model.clone();
			Callback::from(move |e: InputEvent| if let Some(el) = e.target()
				.and_then(|t| t.dyn_into::<$elem>().ok()) {
					model.dispatch(WizardMsg::$msg(el.value()));
				}
			)
		}}
	}

	let dispatch = |msg: fn() -> WizardMsg| {
		let model = model.clone();
		Callback::from(move |_: MouseEvent| model.dispatch(msg()))
	};

	let on_file = {
		let model = model.clone();
		Callback::from(move |e: Event| {
			let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) else {
				log!("File picker event didn't come from an input");
				return;
			};

			if let Some(file) = input.files().and_then(|files| files.get(0)) {
				model.dispatch(WizardMsg::Select(file));
			}
		})
	};

	let on_submit = {
		let model = model.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			// run the transition on a copy first so we know what to send; the reducer then does
			// the exact same thing to the real one
			let mut probe = model.wizard.clone();
			let form = probe.begin_submit();
			model.dispatch(WizardMsg::BeginSubmit);

			let Ok(form) = form else {
				return;
			};

			let file = model.file.clone();
			let model = model.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let ok = match send_form(form, file).await {
					SendOutcome::Sent => true,
					SendOutcome::Rejected(status) => {
						log!("Submission came back with status ", status);
						alert("Something went wrong. Please try again.");
						false
					},
					SendOutcome::Failed(err) => {
						log!("Error submitting form: ", err);
						alert("Error submitting form. Please try again.");
						false
					}
				};
				model.dispatch(WizardMsg::Resolved(ok));
			});
		})
	};

	let current = wizard.step();
	let steps = Step::ALL.iter().map(|&step| {
		let class = if step == current {
			"active"
		} else if wizard.is_reachable(step) {
			"completed"
		} else {
			"locked"
		};

		let model = model.clone();
		html! {
			<button
				class={ classes!("step-button", class) }
				disabled={ !wizard.is_reachable(step) }
				onclick={ move |_| model.dispatch(WizardMsg::JumpTo(step)) }
			>
				<strong>{ step.title() }</strong>
				<br/>
				<small>{ step.description() }</small>
			</button>
		}
	}).collect::<Html>();

	let email_error = wizard.email_error().map(|e| html! {
		<p class="field-error">{ e.to_string() }</p>
	});

	let fields = wizard.fields();

	let body = match wizard.state() {
		WizardState::At(Step::Upload) => html! {
			<>
				<h2>{ "Upload Your Image" }</h2>
				<p>{ "Share a photo of your piece" }</p>
				<label class="dropzone">
					<p><strong>{
						wizard.file().map_or("Click to upload", |f| f.name.as_str())
					}</strong></p>
					<small>{ "PNG, JPG or JPEG (max 10MB)" }</small>
					<input type="file" accept=".jpeg,.jpg,.png" onchange={ on_file } />
				</label>
				<div class="wizard-controls">
					<span/>
					<button class="button" disabled={ wizard.file().is_none() } onclick={ dispatch(|| WizardMsg::Next) }>
						{ "Next" }
					</button>
				</div>
			</>
		},
		WizardState::At(Step::Reimagine) => html! {
			<>
				<h2>{ "Reimagine Your Image" }</h2>
				<p>{ "Tell us about your vision" }</p>
				<label>{ "Where will this image be used?" }</label>
				<textarea
					rows="3"
					placeholder="e.g., Instagram feed, product page, lookbook..."
					value={ fields.usage.clone() }
					oninput={ text_callback!(HtmlTextAreaElement, Usage) }
				/>
				<label>{ "Any specifics to be addressed in the shot?" }</label>
				<textarea
					rows="3"
					placeholder="e.g., Model skin tone, lighting, setting, warm tones..."
					value={ fields.specifics.clone() }
					oninput={ text_callback!(HtmlTextAreaElement, Specifics) }
				/>
				<div class="wizard-controls">
					<button class="button secondary" onclick={ dispatch(|| WizardMsg::Back) }>{ "Back" }</button>
					<button class="button" onclick={ dispatch(|| WizardMsg::Next) }>{ "Next" }</button>
				</div>
			</>
		},
		WizardState::At(Step::Approve) => html! {
			<>
				<h2>{ "Confirm Your Details" }</h2>
				<p>{ "We'll email you your free sample within 24 hours" }</p>
				<label>{ "Email Address" }</label>
				<input
					type="email"
					placeholder="your@email.com"
					value={ fields.email.clone() }
					oninput={ text_callback!(HtmlInputElement, Email) }
				/>
				{ email_error }
				<label>{ "Phone Number (Optional)" }</label>
				<input
					type="tel"
					placeholder="+1 (555) 123-4567"
					value={ fields.phone.clone() }
					oninput={ text_callback!(HtmlInputElement, Phone) }
				/>
				<div class="wizard-controls">
					<button class="button secondary" onclick={ dispatch(|| WizardMsg::Back) }>{ "Back" }</button>
					<button class="button" onclick={ dispatch(|| WizardMsg::Next) }>{ "Next" }</button>
				</div>
			</>
		},
		WizardState::At(Step::Deliver) | WizardState::Sending => {
			let sending = wizard.is_sending();
			let optional = |label: &'static str, value: &str| (!value.is_empty()).then(|| html! {
				<p><small>{ label }</small>{ " " }{ value.to_owned() }</p>
			});

			html! {
				<>
					<h2>{ "Almost There!" }</h2>
					<p>{ "Submit and we'll get started on your visuals" }</p>
					<div class="review">
						<h3>{ "Review Your Information:" }</h3>
						<p><small>{ "File:" }</small>{ " " }{ wizard.file().map(|f| f.name.clone()).unwrap_or_default() }</p>
						<p><small>{ "Email:" }</small>{ " " }{ fields.email.clone() }</p>
						{ optional("Phone:", &fields.phone) }
						{ optional("Usage:", &fields.usage) }
						{ optional("Specifics:", &fields.specifics) }
					</div>
					{ email_error }
					<form onsubmit={ on_submit }>
						<div class="wizard-controls">
							<button type="button" class="button secondary" disabled={ sending } onclick={ dispatch(|| WizardMsg::Back) }>
								{ "Back" }
							</button>
							<button type="submit" class="button" disabled={ sending }>
								{ if sending { "Sending..." } else { "Submit Request" } }
							</button>
						</div>
					</form>
				</>
			}
		},
		WizardState::Submitted => html! {
			<div class="center">
				<h2>{ "Request Submitted!" }</h2>
				<p>{ "Your AI visual is on its way. Check your email in 24 hours for your free sample." }</p>
				<p><small>{ "We'll also send you a link to view your complete order and next steps." }</small></p>
				<div class="review">{ format!("Confirmation sent to {}", fields.email) }</div>
			</div>
		},
	};

	html! {
		<>
			<div id="steps">{ steps }</div>
			<div class="card">{ body }</div>
		</>
	}
}
