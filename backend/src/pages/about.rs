use axum::{http::StatusCode, response::Html};
use horrorshow::html;
use shared_data::{Gallery, SUPPORT_EMAIL};

use super::{render, Page, SliderMount};

static ABOUT_STYLE: &str = r"
#story {
	max-width: 800px;
	margin: 0 auto;
	line-height: 1.6;
}
#mission {
	background-color: #d4a5740d;
	border-color: #d4a5741a;
}
#contact-grid {
	display: grid;
	grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
	gap: 48px;
}
#contact-form label {
	font-weight: 600;
}
#response-time {
	border-color: var(--gold);
}
";

pub async fn about_page() -> Result<Html<String>, StatusCode> {
	render(Page {
		title: "About | JewelAI",
		style: ABOUT_STYLE,
		content: html! {
			section(class = "muted center") {
				h1 : "About JewelAI";
				p(class = "lede") : "We're a design studio built for jewellers, not marketers";
			}
			section {
				div(id = "story") {
					h2 : "Bridging the Visualization Gap";
					p(class = "lede") : "At JewelAI, we believe that jewellery is more than just metal and stone. \
						It is an expression of identity. Yet, for too long, the online jewellery buying experience \
						has been disconnected from reality. A pair of earrings on a white background is a product; \
						those same earrings on a person are a story.";
					p(class = "lede") : "We realized that traditional e-commerce photography leaves too much to \
						the imagination. Customers struggle to gauge size, drop, and fit, leading to hesitation and \
						returns. Traditional model photoshoots are expensive and logistically complex to adapt to \
						every new collection.";
					div(id = "mission", class = "card") {
						h3 : "Our Mission";
						p : "To bridge the gap between imagination and reality by using AI to transform static \
							jewellery images into diverse, lifelike experiences that represent every customer.";
					}
				}
			}
			section(class = "muted") {
				div(class = "container") {
					h2(class = "center") : "Gallery";
					: SliderMount(Gallery::About);
				}
			}
			section {
				div(class = "container") {
					h2(class = "center") : "Get in Touch";
					div(id = "contact-grid") {
						div(class = "card") {
							h3 : "Send us a Message";
							// the contact island takes over this element
							div(id = "contact-form");
						}
						div {
							h3 : "Contact Info";
							p {
								strong : "Email";
								br;
								a(href = format_args!("mailto:{SUPPORT_EMAIL}"), class = "accent") : SUPPORT_EMAIL;
							}
							div(id = "response-time", class = "card") {
								strong : "Response Time:";
								: " We typically respond within 24 hours.";
							}
						}
					}
				}
			}
		}
	})
}
