use std::str::FromStr;

/// One before/after pair in a slider. Paths are relative to the site root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slide {
	pub before: &'static str,
	pub after: &'static str,
	pub alt: &'static str,
}

pub static HOME_SLIDES: [Slide; 3] = [
	Slide {
		before: "/assets/images/simple-gold-ring-on-white-background.jpg",
		after: "/assets/images/luxury-gold-ring-on-womans-hand-professional-photo.jpg",
		alt: "Ring showcase transformation",
	},
	Slide {
		before: "/assets/images/basic-diamond-necklace-product-photo.jpg",
		after: "/assets/images/luxury-diamond-necklace-on-model-professional-stud.jpg",
		alt: "Necklace transformation",
	},
	Slide {
		before: "/assets/images/simple-bracelet-on-white-background.jpg",
		after: "/assets/images/luxury-bracelet-on-womans-wrist-elegant-profession.jpg",
		alt: "Bracelet transformation",
	},
];

// the about page still shows the food shots from before we moved into jewellery
pub static ABOUT_SLIDES: [Slide; 3] = [
	Slide {
		before: "/assets/images/basic-salad-plate.jpg",
		after: "/assets/images/professional-gourmet-salad-dish-michelin-star-phot.jpg",
		alt: "Salad transformation",
	},
	Slide {
		before: "/assets/images/simple-dessert.jpg",
		after: "/assets/images/professional-gourmet-dessert-plating-photography.jpg",
		alt: "Dessert transformation",
	},
	Slide {
		before: "/assets/images/basic-pizza.jpg",
		after: "/assets/images/professional-gourmet-pizza-studio-photography.jpg",
		alt: "Pizza transformation",
	},
];

/// Which set of slides a slider on the page should show. The server writes this into a
/// `data-gallery` attribute and the frontend reads it back out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Gallery {
	#[default]
	Home,
	About,
}

impl Gallery {
	#[must_use]
	pub const fn slides(self) -> &'static [Slide] {
		match self {
			Self::Home => &HOME_SLIDES,
			Self::About => &ABOUT_SLIDES,
		}
	}

	#[must_use]
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Home => "home",
			Self::About => "about",
		}
	}
}

impl FromStr for Gallery {
	type Err = ();
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"home" => Ok(Self::Home),
			"about" => Ok(Self::About),
			_ => Err(())
		}
	}
}

/// Which slide is showing. Everything wraps around, and a carousel with no slides just ignores
/// everything you ask of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
	len: usize,
	current: usize,
}

impl Carousel {
	#[must_use]
	pub const fn new(len: usize) -> Self {
		Self { len, current: 0 }
	}

	#[must_use]
	pub const fn current(&self) -> usize {
		self.current
	}

	#[must_use]
	pub const fn len(&self) -> usize {
		self.len
	}

	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}

	pub fn next(&mut self) {
		if !self.is_empty() {
			self.current = (self.current + 1) % self.len;
		}
	}

	pub fn prev(&mut self) {
		if !self.is_empty() {
			self.current = (self.current + self.len - 1) % self.len;
		}
	}

	pub fn go_to(&mut self, idx: usize) -> bool {
		let valid = idx < self.len;
		if valid {
			self.current = idx;
		}
		valid
	}
}
