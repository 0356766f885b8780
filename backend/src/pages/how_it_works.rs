use axum::{http::StatusCode, response::Html};
use horrorshow::html;
use shared_data::SUPPORT_EMAIL;

use super::{render, Faq, Page};

static HOW_IT_WORKS_FAQ: [(&str, &str); 6] = [
	(
		"How long does it take to receive my visuals?",
		"We deliver your AI-generated visuals within 24 hours of approval. Most clients receive them even faster."
	),
	(
		"Can I request multiple images?",
		"Yes! With our Starter plan, you get 5 images per month. Growth and Pro plans offer more."
	),
	(
		"What if I don't like the first result?",
		"We offer unlimited revisions with your subscription. Just let us know what to adjust."
	),
	(
		"Do I own the rights to the images?",
		"Absolutely. You own all commercial rights to every image we create for you."
	),
	(
		"Can I use these for multiple platforms?",
		"Yes! Use them on Instagram, your online store, marketplaces, lookbooks, print materials, everywhere."
	),
	(
		"Is there a contract or commitment?",
		"Nope. Cancel anytime. No hidden fees, no long-term commitment."
	),
];

static WIZARD_STYLE: &str = r"
#steps {
	display: grid;
	grid-template-columns: repeat(4, 1fr);
	gap: 12px;
	margin-bottom: 48px;
}
.step-button {
	padding: 16px;
	border: none;
	border-radius: 12px;
	background-color: var(--muted-paper);
	color: var(--muted-ink);
	cursor: not-allowed;
}
.step-button.completed {
	background-color: var(--bronze);
	color: white;
	cursor: pointer;
}
.step-button.active {
	background-color: var(--gold);
	color: white;
}
.step-button * {
	color: inherit;
}
#wizard-card {
	max-width: 800px;
	margin: 0 auto;
}
.dropzone {
	display: block;
	padding: 48px;
	border: 2px dashed var(--border);
	border-radius: 12px;
	text-align: center;
	cursor: pointer;
}
.dropzone input {
	display: none;
}
.wizard-controls {
	display: flex;
	justify-content: space-between;
	margin-top: 24px;
}
.review {
	padding: 24px;
	border-radius: 8px;
	background-color: var(--muted-paper);
}
";

pub async fn how_it_works_page() -> Result<Html<String>, StatusCode> {
	render(Page {
		title: "How It Works | JewelAI",
		style: WIZARD_STYLE,
		content: html! {
			section(class = "muted center") {
				h1 : "How It Works";
				p(class = "lede") : "Four simple steps to transform your jewellery collection";
			}
			section {
				div(id = "wizard-card", class = "container") {
					// the intake island replaces everything in here
					div(id = "intake-wizard") {
						noscript {
							p {
								: "The request form needs javascript. You can also email your photos to ";
								a(href = format_args!("mailto:{SUPPORT_EMAIL}"), class = "accent") : SUPPORT_EMAIL;
								: ".";
							}
						}
					}
				}
			}
			section(class = "muted") : Faq { title: "Frequently Asked Questions", items: &HOW_IT_WORKS_FAQ };
		}
	})
}
