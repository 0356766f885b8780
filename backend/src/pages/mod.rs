use axum::{http::StatusCode, response::Html};
use chrono::Datelike;
use const_format::concatcp;
use horrorshow::{helper::doctype, html, Raw, RenderOnce, Template, TemplateBuffer};
use shared_data::{Gallery, SUPPORT_EMAIL};

pub mod about;
pub mod home;
pub mod how_it_works;
pub mod pricing;

const GOLD: &str = "#d4a574";
const BRONZE: &str = "#8b6f47";

pub static BASE_STYLE: &str = concatcp!(r"
* {
	--gold: ", GOLD, r";
	--bronze: ", BRONZE, r";
	--ink: #2b2118;
	--muted-ink: #6f6257;
	--paper: #fffaf4;
	--muted-paper: #f5ece1;
	--card: #ffffff;
	--border: #e8dccd;
	box-sizing: border-box;
	font-family: system-ui, -apple-system, sans-serif;
	color: var(--ink);
}
body {
	margin: 0;
	background-color: var(--paper);
}
a {
	color: inherit;
	text-decoration: none;
}
section {
	padding: 80px 16px;
}
section.muted {
	background-color: var(--muted-paper);
}
.container {
	max-width: 1040px;
	margin: 0 auto;
}
.center {
	text-align: center;
}
.accent {
	color: var(--gold);
}
.lede {
	font-size: 22px;
	color: var(--muted-ink);
	line-height: 1.5;
}
.button {
	display: inline-block;
	padding: 14px 32px;
	border: none;
	border-radius: 999px;
	background-color: var(--gold);
	color: white;
	font-weight: 600;
	font-size: 16px;
	cursor: pointer;
}
.button:disabled {
	opacity: 0.5;
	cursor: default;
}
.button.secondary {
	background-color: transparent;
	color: var(--ink);
	border: 1px solid var(--border);
}
.grid {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
	gap: 32px;
}
.card {
	padding: 32px;
	background-color: var(--card);
	border: 1px solid var(--border);
	border-radius: 16px;
}
.stat {
	font-size: 48px;
	font-weight: 700;
	color: var(--gold);
}
input, textarea, select {
	width: 100%;
	padding: 10px 12px;
	margin: 6px 0 16px 0;
	font-size: 16px;
	border: 1px solid var(--border);
	border-radius: 8px;
	background-color: var(--card);
}
.field-error {
	color: #b3261e;
	font-size: 14px;
}
nav {
	position: sticky;
	top: 0;
	z-index: 50;
	background-color: rgba(255, 250, 244, 0.9);
	border-bottom: 1px solid var(--border);
}
nav .container {
	display: flex;
	justify-content: space-between;
	align-items: center;
	height: 64px;
	padding: 0 16px;
}
#logo {
	font-weight: 700;
	font-size: 24px;
	color: var(--gold);
}
#nav-links {
	display: flex;
	gap: 32px;
	color: var(--muted-ink);
}
#mobile-menu {
	display: none;
}
#mobile-menu summary {
	list-style: none;
	cursor: pointer;
	font-size: 24px;
}
#mobile-menu a {
	display: block;
	padding: 8px 0;
}
@media (max-width: 768px) {
	#nav-links, #nav-cta {
		display: none;
	}
	#mobile-menu {
		display: block;
	}
}
footer {
	background-color: var(--ink);
	padding: 48px 16px;
}
footer * {
	color: var(--muted-paper);
}
footer h3, footer h4 {
	color: var(--gold);
}
footer ul {
	list-style: none;
	padding: 0;
}
#copyright {
	border-top: 1px solid var(--muted-ink);
	padding-top: 32px;
	text-align: center;
	font-size: 14px;
}
.faq {
	padding: 20px 24px;
	margin-bottom: 16px;
}
.faq-question {
	font-weight: 600;
	cursor: pointer;
}
.faq-answer {
	color: var(--muted-ink);
	margin-left: 10px;
}
.image-slider {
	min-height: 320px;
}
");

const NAV_LINKS: [(&str, &str); 4] = [
	("/", "Home"),
	("/how-it-works", "How It Works"),
	("/pricing", "Pricing"),
	("/about", "About"),
];

// this has to match up with the names that trunk spits out (with `--filehash false`)
const LOAD_ISLANDS: &str = "import init from '/assets/frontend.js'; init('/assets/frontend_bg.wasm');";

/// The chrome around every page: head, navbar, footer, and the script that brings the wasm
/// islands to life
pub struct Page<C: RenderOnce> {
	pub title: &'static str,
	pub style: &'static str,
	pub content: C,
}

impl<C> RenderOnce for Page<C> where C: RenderOnce {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let year = chrono::Utc::now().year();

		tmpl << html! {
			: doctype::HTML;
			html(lang = "en") {
				head {
					title : self.title;
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					meta(name = "theme-color", content = GOLD);
					link(rel = "icon", href = "/assets/images/icon.svg", type = "image/svg+xml");
					style : Raw(BASE_STYLE);
					style : Raw(self.style);
				}
				body {
					nav {
						div(class = "container") {
							a(href = "/", id = "logo") : "JewelAI";
							div(id = "nav-links") {
								@ for (href, label) in NAV_LINKS {
									a(href = href) : label;
								}
							}
							a(href = "/how-it-works", id = "nav-cta", class = "button") : "Get Started";
							// no js needed to open and close this
							details(id = "mobile-menu") {
								summary(title = "Toggle menu") : "☰";
								@ for (href, label) in NAV_LINKS {
									a(href = href) : label;
								}
								a(href = "/how-it-works", class = "button") : "Get Started";
							}
						}
					}
					main : self.content;
					footer {
						div(class = "container") {
							div(class = "grid") {
								div {
									h3 : "JewelAI";
									p : "AI-generated jewellery product photography that sells.";
								}
								div {
									h4 : "Product";
									ul {
										li { a(href = "/") : "Home"; }
										li { a(href = "/how-it-works") : "How It Works"; }
										li { a(href = "/pricing") : "Pricing"; }
									}
								}
								div {
									h4 : "Company";
									ul {
										li { a(href = "/about") : "About"; }
										li { a(href = format_args!("mailto:{SUPPORT_EMAIL}")) : "Contact"; }
									}
								}
								div {
									h4 : "Get in Touch";
									a(href = format_args!("mailto:{SUPPORT_EMAIL}")) : SUPPORT_EMAIL;
								}
							}
							p(id = "copyright") : format!("© {year} JewelAI. All rights reserved.");
						}
					}
					script(type = "module") : Raw(LOAD_ISLANDS);
				}
			}
		};
	}
}

/// Where the frontend mounts a before/after slider
pub struct SliderMount(pub Gallery);

impl RenderOnce for SliderMount {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << Raw(format!(r#"<div class="image-slider" data-gallery="{}"></div>"#, self.0.as_str()));
	}
}

pub struct Faq {
	pub title: &'static str,
	pub items: &'static [(&'static str, &'static str)],
}

impl RenderOnce for Faq {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		tmpl << html! {
			div(class = "container") {
				h2(class = "center") : self.title;
				@ for (question, answer) in self.items {
					details(class = "card faq") {
						summary(class = "faq-question") : *question;
						p(class = "faq-answer") : *answer;
					}
				}
			}
		};
	}
}

pub fn render<C: RenderOnce>(page: Page<C>) -> Result<Html<String>, StatusCode> {
	let title = page.title;
	page.into_string()
		.map(Html)
		.map_err(|e| {
			tracing::error!(page = title, error = %e, "Couldn't render page");
			StatusCode::INTERNAL_SERVER_ERROR
		})
}

pub async fn not_found() -> (StatusCode, Html<String>) {
	let page = Page {
		title: "Not found | JewelAI",
		style: "",
		content: html! {
			section(class = "center") {
				h1 : "404";
				p(class = "lede") : "We couldn't find that page.";
				a(href = "/", class = "button") : "Back home";
			}
		}
	};

	match render(page) {
		Ok(html) => (StatusCode::NOT_FOUND, html),
		Err(status) => (status, Html(String::new()))
	}
}
