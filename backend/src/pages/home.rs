use axum::{http::StatusCode, response::Html};
use horrorshow::{html, RenderOnce, TemplateBuffer};
use shared_data::Gallery;

use super::{render, Page, SliderMount};

struct Testimonial {
	name: &'static str,
	role: &'static str,
	text: &'static str,
	image: &'static str,
}

const TESTIMONIALS: [Testimonial; 3] = [
	Testimonial {
		name: "Sarah Chen",
		role: "Jewellery Brand Owner, NYC",
		text: "JewelAI increased our product page conversions by 340%. The AI-generated photos show our jewellery from every angle beautifully.",
		image: "/assets/images/professional-woman-jewelry-designer.jpg",
	},
	Testimonial {
		name: "Marcus Rodriguez",
		role: "Luxury Jeweller, LA",
		text: "We used to spend $15k on professional shoots. Now we generate unlimited showcase photos for $79/month. Game changer.",
		image: "/assets/images/professional-man-jewelry-maker.jpg",
	},
	Testimonial {
		name: "Emily Watson",
		role: "E-commerce Manager, Chicago",
		text: "Our Instagram engagement tripled with JewelAI. Every post shows jewellery on diverse, stunning AI-generated models.",
		image: "/assets/images/professional-woman-e-commerce.jpg",
	},
];

const STATS: [(&str, &str); 3] = [
	("+340%", "E-commerce Conversion Increase"),
	("+287%", "Instagram Engagement Boost"),
	("+58%", "Average Revenue Increase"),
];

// (challenge, solution)
const VALUE_PROPS: [(&str, &str); 3] = [
	(
		"Professional product shoots are expensive and time-consuming",
		"Generate unlimited AI photos for $79/month on diverse models"
	),
	(
		"Need to show jewellery on many different skin tones and body types",
		"Customize AI models by appearance, style, and setting instantly"
	),
	(
		"Inconsistent product imagery across channels",
		"Brand-consistent, realistic, stunning jewellery photography every time"
	),
];

static HOME_STYLE: &str = r"
#hero {
	min-height: 80vh;
	display: flex;
	align-items: center;
	background: linear-gradient(to bottom, var(--paper), var(--muted-paper));
}
#hero .container {
	display: flex;
	flex-wrap: wrap;
	align-items: center;
	gap: 48px;
}
#hero .container > div {
	flex: 1 1 400px;
}
#hero h1 {
	font-size: 56px;
	line-height: 1.1;
}
.testimonial-author {
	display: flex;
	align-items: center;
	gap: 16px;
}
.testimonial-author img {
	width: 48px;
	height: 48px;
	border-radius: 50%;
	background-color: var(--muted-paper);
}
.stars {
	color: var(--gold);
}
#final-cta {
	background: linear-gradient(to right, #d4a5741a, #8b6f471a);
}
";

pub async fn home_page() -> Result<Html<String>, StatusCode> {
	render(Page {
		title: "JewelAI - AI-Generated Jewellery Product Photography",
		style: HOME_STYLE,
		content: HomeView
	})
}

struct HomeView;

impl RenderOnce for HomeView {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			section(id = "hero") {
				div(class = "container") {
					div {
						h1 {
							: "Professional jewellery shots, ";
							span(class = "accent") : "on AI models";
							: ", instantly.";
						}
						p(class = "lede") : "AI-generated product photography of your jewellery on diverse human \
							models. Perfect for e-commerce, Instagram, lookbooks & campaigns, delivered in minutes, \
							not weeks.";
						a(href = "/how-it-works", class = "button") : "Generate Your First Photo";
					}
					div : SliderMount(Gallery::Home);
				}
			}
			section {
				div(class = "container") {
					h2(class = "center") : "Why Jewellery Brands Love JewelAI";
					div(class = "grid") {
						@ for (problem, solution) in VALUE_PROPS {
							div(class = "card") {
								h3 : "The Challenge";
								p : problem;
								hr;
								h3(class = "accent") : "Our Solution";
								p : solution;
							}
						}
					}
				}
			}
			section(class = "muted") {
				div(class = "container") {
					h2(class = "center") : "Real Results from Jewellery Brands";
					div(class = "grid") {
						@ for (value, label) in STATS {
							div(class = "card center") {
								div(class = "stat") : value;
								div : label;
							}
						}
					}
				}
			}
			section {
				div(class = "container") {
					h2(class = "center") : "What Jewellery Brands Say";
					div(class = "grid") {
						@ for t in TESTIMONIALS {
							div(class = "card") {
								div(class = "stars") : "★★★★★";
								p {
									em : format!("\"{}\"", t.text);
								}
								div(class = "testimonial-author") {
									img(src = t.image, alt = t.name);
									div {
										strong : t.name;
										br;
										small : t.role;
									}
								}
							}
						}
					}
				}
			}
			section(id = "final-cta", class = "center") {
				div(class = "container") {
					h2 : "Ready to Transform Your Jewellery Photography?";
					p(class = "lede") : "Join jewellery brands and designers generating stunning AI product \
						photos on beautiful models. No photoshoots, no stylists, no weeks of waiting.";
					a(href = "/how-it-works", class = "button") : "Start Generating Photos Free";
				}
			}
		};
	}
}
