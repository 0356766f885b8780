use axum::{http::StatusCode, response::Html};
use horrorshow::{html, RenderOnce, TemplateBuffer};
use shared_data::SUPPORT_EMAIL;

use super::{render, Faq, Page};

struct Plan {
	name: &'static str,
	price: u32,
	description: &'static str,
	highlighted: bool,
	// (feature, included)
	features: [(&'static str, bool); 8],
}

impl Plan {
	const fn class(&self) -> &'static str {
		if self.highlighted { "card plan highlighted" } else { "card plan" }
	}
}

const fn feature_class(included: bool) -> &'static str {
	if included { "included" } else { "excluded" }
}

const fn feature_mark(included: bool) -> &'static str {
	if included { "✓ " } else { "✗ " }
}

const PLANS: [Plan; 3] = [
	Plan {
		name: "Starter",
		price: 29,
		description: "Perfect for new jewellery brands",
		highlighted: false,
		features: [
			("5 AI visuals per month", true),
			("Unlimited revisions", true),
			("Email support", true),
			("24-hour delivery", true),
			("Commercial rights", true),
			("Priority support", false),
			("Custom brand guidelines", false),
			("Dedicated account manager", false),
		],
	},
	Plan {
		name: "Growth",
		price: 99,
		description: "For growing jewellers",
		highlighted: true,
		features: [
			("20 AI visuals per month", true),
			("Unlimited revisions", true),
			("Priority email support", true),
			("24-hour delivery", true),
			("Commercial rights", true),
			("Priority support", true),
			("Custom brand guidelines", true),
			("Dedicated account manager", false),
		],
	},
	Plan {
		name: "Pro",
		price: 249,
		description: "For multi-store jewellers",
		highlighted: false,
		features: [
			("Unlimited AI visuals", true),
			("Unlimited revisions", true),
			("24/7 phone & email support", true),
			("Same-day delivery", true),
			("Commercial rights", true),
			("Priority support", true),
			("Custom brand guidelines", true),
			("Dedicated account manager", true),
		],
	},
];

// (aspect, us, traditional)
const COMPARISON: [(&str, &str, &str); 5] = [
	("Professional Photoshoot", "Less than $5 / visual", "$1,000-2,000"),
	("Setup Time", "5 minutes", "2-4 weeks"),
	("Styling & Prep", "Included", "+ $1,000-2,000"),
	("Rush Delivery", "24-48 hours", "Not available"),
	("Cost Savings", "95%", "Baseline"),
];

static PRICING_FAQ: [(&str, &str); 4] = [
	(
		"Can I change plans anytime?",
		"Yes! Upgrade or downgrade your plan anytime. Changes take effect on your next billing cycle."
	),
	(
		"Is there a setup fee?",
		"No setup fees. Just sign up and start creating. Your first visual is free."
	),
	(
		"What if I need more visuals?",
		"You can purchase additional visuals à la carte, or upgrade to a higher plan for more monthly visuals."
	),
	(
		"Do you offer discounts for annual billing?",
		const_format::concatcp!("Yes! Pay annually and get 2 months free. Contact our team at ", SUPPORT_EMAIL, " for details.")
	),
];

static PRICING_STYLE: &str = r"
.plan.highlighted {
	background-color: var(--gold);
	border-color: var(--gold);
	transform: scale(1.04);
}
.plan.highlighted * {
	color: white;
}
.plan.highlighted .button {
	background-color: white;
	color: var(--gold);
}
.price {
	font-size: 48px;
	font-weight: 700;
}
.plan ul {
	list-style: none;
	padding: 0;
}
.plan li.excluded {
	opacity: 0.5;
}
#roi {
	margin: 80px 0;
	border-color: var(--gold);
}
table {
	width: 100%;
	border-collapse: collapse;
}
th, td {
	text-align: left;
	padding: 16px 24px;
	border-bottom: 1px solid var(--border);
}
td.ours {
	color: var(--gold);
	font-weight: 600;
}
";

pub async fn pricing_page() -> Result<Html<String>, StatusCode> {
	render(Page {
		title: "Pricing | JewelAI",
		style: PRICING_STYLE,
		content: PricingView
	})
}

struct PricingView;

impl RenderOnce for PricingView {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			section(class = "muted center") {
				h1 : "Simple, Transparent Pricing";
				p(class = "lede") : "From startups to enterprise jewellers, we have a plan for everyone";
			}
			section {
				div(class = "container") {
					div(class = "grid") {
						@ for plan in PLANS {
							div(class = plan.class()) {
								h3 : plan.name;
								p : plan.description;
								div {
									span(class = "price") : format!("${}", plan.price);
									span : "/month";
								}
								a(href = "/how-it-works", class = "button") : "Get Started";
								ul {
									@ for (feature, included) in plan.features {
										li(class = feature_class(included)) {
											: feature_mark(included);
											: feature;
										}
									}
								}
							}
						}
					}
					div(id = "roi", class = "card center") {
						h2 : "Your ROI is Guaranteed";
						p(class = "lede") {
							: "On average, our clients see a ";
							strong(class = "accent") : "42% increase in revenue";
							: " within 3 months of using JewelAI. That's a 14x return on your investment.";
						}
						a(href = "/how-it-works", class = "button") : "Start with a Free AI Visual";
					}
					h2(class = "center") : "JewelAI vs. Traditional Photography";
					table {
						thead {
							tr {
								th : "Aspect";
								th(class = "accent") : "JewelAI";
								th : "Traditional Photography";
							}
						}
						tbody {
							@ for (aspect, ours, traditional) in COMPARISON {
								tr {
									td : aspect;
									td(class = "ours") : ours;
									td : traditional;
								}
							}
						}
					}
				}
			}
			section(class = "muted") : Faq { title: "Pricing Questions?", items: &PRICING_FAQ };
		};
	}
}
