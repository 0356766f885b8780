use std::rc::Rc;

use shared_data::{Carousel, Gallery};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SliderProps {
	pub gallery: Gallery,
}

pub enum SlideMsg {
	Next,
	Prev,
	GoTo(usize),
}

#[derive(PartialEq)]
struct SliderState(Carousel);

impl Reducible for SliderState {
	type Action = SlideMsg;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut carousel = self.0;
		match action {
			SlideMsg::Next => carousel.next(),
			SlideMsg::Prev => carousel.prev(),
			SlideMsg::GoTo(idx) => if !carousel.go_to(idx) {
				return self;
			},
		}
		Self(carousel).into()
	}
}

#[function_component(ImageSlider)]
pub fn image_slider(props: &SliderProps) -> Html {
	let slides = props.gallery.slides();
	let state = use_reducer_eq(|| SliderState(Carousel::new(slides.len())));

	let Some(slide) = slides.get(state.0.current()) else {
		return html! {};
	};

	let move_by = |msg: fn() -> SlideMsg| {
		let state = state.clone();
		Callback::from(move |_: MouseEvent| state.dispatch(msg()))
	};

	let dots = (0..slides.len()).map(|idx| {
		let state = state.clone();
		html! {
			<button
				class={ classes!("dot", (idx == state.0.current()).then_some("active")) }
				title={ format!("Go to slide {}", idx + 1) }
				onclick={ move |_| state.dispatch(SlideMsg::GoTo(idx)) }
			/>
		}
	}).collect::<Html>();

	html! {
		<>
			<style>{ r"
.image-slider .frame {
	position: relative;
}
.image-slider img {
	width: 100%;
	border-radius: 16px;
}
.image-slider img.before {
	position: absolute;
	left: 16px;
	bottom: 16px;
	width: 30%;
	border: 3px solid white;
	border-radius: 12px;
}
.image-slider .arrow {
	position: absolute;
	top: 50%;
	transform: translateY(-50%);
	border: none;
	border-radius: 50%;
	width: 40px;
	height: 40px;
	background-color: #ffffffcc;
	cursor: pointer;
}
.image-slider .arrow.left {
	left: 12px;
}
.image-slider .arrow.right {
	right: 12px;
}
.image-slider .dots {
	display: flex;
	justify-content: center;
	gap: 8px;
	margin-top: 16px;
}
.image-slider .dot {
	width: 10px;
	height: 10px;
	border: none;
	border-radius: 50%;
	background-color: var(--border);
	cursor: pointer;
}
.image-slider .dot.active {
	background-color: var(--gold);
}
			" }</style>
			<div class="frame">
				<img src={ slide.after } alt={ slide.alt } />
				<img class="before" src={ slide.before } alt={ format!("{} (before)", slide.alt) } />
				<button class="arrow left" title="Previous slide" onclick={ move_by(|| SlideMsg::Prev) }>{ "‹" }</button>
				<button class="arrow right" title="Next slide" onclick={ move_by(|| SlideMsg::Next) }>{ "›" }</button>
			</div>
			<div class="dots">{ dots }</div>
		</>
	}
}
