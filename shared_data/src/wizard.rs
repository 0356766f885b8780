//! The four-step intake form from the how-it-works page, without any of the rendering.
//!
//! The steps only ever move one at a time (or backwards to somewhere already visited), and the
//! only two gates are "you picked an image" and "your email looks like an email".

use super::{IntakeForm, SelectedFile, is_valid_email};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
	Upload,
	Reimagine,
	Approve,
	Deliver,
}

impl Step {
	pub const ALL: [Self; 4] = [Self::Upload, Self::Reimagine, Self::Approve, Self::Deliver];

	#[must_use]
	pub const fn index(self) -> usize {
		match self {
			Self::Upload => 0,
			Self::Reimagine => 1,
			Self::Approve => 2,
			Self::Deliver => 3,
		}
	}

	#[must_use]
	pub fn from_index(idx: usize) -> Option<Self> {
		Self::ALL.get(idx).copied()
	}

	#[must_use]
	pub fn next(self) -> Option<Self> {
		Self::from_index(self.index() + 1)
	}

	#[must_use]
	pub fn prev(self) -> Option<Self> {
		self.index().checked_sub(1).and_then(Self::from_index)
	}

	#[must_use]
	pub const fn title(self) -> &'static str {
		match self {
			Self::Upload => "Upload",
			Self::Reimagine => "Reimagine",
			Self::Approve => "Approve",
			Self::Deliver => "Deliver",
		}
	}

	#[must_use]
	pub const fn description(self) -> &'static str {
		match self {
			Self::Upload => "Share your piece",
			Self::Reimagine => "Describe the vision",
			Self::Approve => "Confirm details",
			Self::Deliver => "Get your visuals",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardState {
	At(Step),
	// still on Deliver, but the request is out and we're waiting to hear back
	Sending,
	Submitted,
}

impl WizardState {
	/// The step the indicator should highlight
	#[must_use]
	pub const fn step(self) -> Step {
		match self {
			Self::At(step) => step,
			Self::Sending | Self::Submitted => Step::Deliver,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
	#[error("Please upload an image first.")]
	NoFile,
	#[error("Please upload a JPEG, JPG, or PNG file.")]
	UnsupportedFileType,
	#[error("Please enter a valid email address.")]
	InvalidEmail,
	// trying to pick a file or submit from somewhere that doesn't allow it
	#[error("That can't be done from this step.")]
	WrongStep,
}

/// Everything a transition guard might need to look at
#[derive(Clone, Copy, Debug)]
pub struct Guard<'a> {
	pub file: Option<&'a SelectedFile>,
	pub email: &'a str,
}

/// Whether the forward edge out of `state` is open. For `Deliver`, "forward" means submitting.
#[must_use]
pub fn can_advance(state: WizardState, guard: &Guard<'_>) -> bool {
	match state {
		WizardState::At(Step::Upload) => guard.file.is_some_and(SelectedFile::is_accepted),
		WizardState::At(Step::Reimagine | Step::Approve) => true,
		WizardState::At(Step::Deliver) => is_valid_email(guard.email),
		WizardState::Sending | WizardState::Submitted => false,
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wizard {
	state: WizardState,
	fields: IntakeForm,
	file: Option<SelectedFile>,
	email_error: Option<WizardError>,
}

impl Default for Wizard {
	fn default() -> Self {
		Self {
			state: WizardState::At(Step::Upload),
			fields: IntakeForm::default(),
			file: None,
			email_error: None,
		}
	}
}

impl Wizard {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub const fn state(&self) -> WizardState {
		self.state
	}

	#[must_use]
	pub const fn step(&self) -> Step {
		self.state.step()
	}

	#[must_use]
	pub const fn fields(&self) -> &IntakeForm {
		&self.fields
	}

	#[must_use]
	pub const fn file(&self) -> Option<&SelectedFile> {
		self.file.as_ref()
	}

	#[must_use]
	pub fn email_error(&self) -> Option<WizardError> {
		self.email_error
	}

	#[must_use]
	pub fn is_sending(&self) -> bool {
		self.state == WizardState::Sending
	}

	#[must_use]
	pub fn is_submitted(&self) -> bool {
		self.state == WizardState::Submitted
	}

	fn guard(&self) -> Guard<'_> {
		Guard { file: self.file.as_ref(), email: &self.fields.email }
	}

	/// Steps can be revisited, never skipped ahead to
	#[must_use]
	pub fn is_reachable(&self, step: Step) -> bool {
		matches!(self.state, WizardState::At(current) if step <= current)
	}

	pub fn select_file(&mut self, file: SelectedFile) -> Result<(), WizardError> {
		if self.state != WizardState::At(Step::Upload) {
			return Err(WizardError::WrongStep);
		}

		if !file.is_accepted() {
			return Err(WizardError::UnsupportedFileType);
		}

		self.file = Some(file);
		self.state = WizardState::At(Step::Reimagine);
		Ok(())
	}

	pub fn next(&mut self) -> Result<(), WizardError> {
		let WizardState::At(current) = self.state else {
			return Ok(());
		};

		// Deliver's way forward is `begin_submit`, not this
		let Some(next) = current.next() else {
			return Ok(());
		};

		if !can_advance(self.state, &self.guard()) {
			return Err(WizardError::NoFile);
		}

		self.state = WizardState::At(next);
		Ok(())
	}

	pub fn back(&mut self) {
		if let WizardState::At(current) = self.state {
			if let Some(prev) = current.prev() {
				self.state = WizardState::At(prev);
			}
		}
	}

	pub fn jump_to(&mut self, step: Step) -> bool {
		let reachable = self.is_reachable(step);
		if reachable {
			self.state = WizardState::At(step);
		}
		reachable
	}

	// once the request is out the fields are frozen
	fn editable(&self) -> bool {
		matches!(self.state, WizardState::At(_))
	}

	pub fn set_email(&mut self, email: String) {
		if self.editable() {
			self.fields.email = email;
			self.email_error = None;
		}
	}

	pub fn set_phone(&mut self, phone: String) {
		if self.editable() {
			self.fields.phone = phone;
		}
	}

	pub fn set_usage(&mut self, usage: String) {
		if self.editable() {
			self.fields.usage = usage;
		}
	}

	pub fn set_specifics(&mut self, specifics: String) {
		if self.editable() {
			self.fields.specifics = specifics;
		}
	}

	/// Moves into `Sending` and hands back what should go over the wire, or records why it can't.
	pub fn begin_submit(&mut self) -> Result<IntakeForm, WizardError> {
		if self.state != WizardState::At(Step::Deliver) {
			return Err(WizardError::WrongStep);
		}

		if !can_advance(self.state, &self.guard()) {
			self.email_error = Some(WizardError::InvalidEmail);
			return Err(WizardError::InvalidEmail);
		}

		self.email_error = None;
		self.state = WizardState::Sending;
		Ok(self.fields.clone())
	}

	pub fn finish_submit(&mut self, succeeded: bool) {
		if self.state == WizardState::Sending {
			self.state = if succeeded {
				WizardState::Submitted
			} else {
				WizardState::At(Step::Deliver)
			};
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn png() -> SelectedFile {
		SelectedFile::new("ring.png", "image/png")
	}

	fn at_deliver(email: &str) -> Wizard {
		let mut wiz = Wizard::new();
		wiz.select_file(png()).unwrap();
		wiz.next().unwrap();
		wiz.set_email(email.into());
		wiz.next().unwrap();
		assert_eq!(wiz.step(), Step::Deliver);
		wiz
	}

	#[test]
	fn next_without_file_changes_nothing() {
		let mut wiz = Wizard::new();
		wiz.set_usage("lookbook".into());
		let before = wiz.clone();

		assert_eq!(wiz.next(), Err(WizardError::NoFile));
		assert_eq!(wiz, before);
		assert_eq!(wiz.step(), Step::Upload);
	}

	#[test]
	fn gif_is_rejected_png_advances() {
		let mut wiz = Wizard::new();
		let before = wiz.clone();

		assert_eq!(
			wiz.select_file(SelectedFile::new("ring.gif", "image/gif")),
			Err(WizardError::UnsupportedFileType)
		);
		assert_eq!(wiz, before);

		wiz.select_file(png()).unwrap();
		assert_eq!(wiz.state(), WizardState::At(Step::Reimagine));
		assert_eq!(wiz.file().map(|f| f.name.as_str()), Some("ring.png"));
	}

	#[test]
	fn files_only_picked_on_upload() {
		let mut wiz = Wizard::new();
		wiz.select_file(png()).unwrap();
		assert_eq!(wiz.select_file(png()), Err(WizardError::WrongStep));

		// but going back lets you swap it out
		wiz.back();
		wiz.select_file(SelectedFile::new("necklace.jpg", "image/jpeg")).unwrap();
		assert_eq!(wiz.file().map(|f| f.name.as_str()), Some("necklace.jpg"));
		assert_eq!(wiz.step(), Step::Reimagine);
	}

	#[test]
	fn middle_steps_are_unconditional() {
		let mut wiz = Wizard::new();
		wiz.select_file(png()).unwrap();
		wiz.next().unwrap();
		assert_eq!(wiz.step(), Step::Approve);
		// no email yet, still allowed onto Deliver
		wiz.next().unwrap();
		assert_eq!(wiz.step(), Step::Deliver);
		// and nothing past it
		wiz.next().unwrap();
		assert_eq!(wiz.step(), Step::Deliver);
	}

	#[test]
	fn back_keeps_fields() {
		let mut wiz = at_deliver("a@b.co");
		wiz.back();
		wiz.set_specifics("warm tones".into());
		wiz.back();
		wiz.back();
		assert_eq!(wiz.step(), Step::Upload);
		// can't go back from the start
		wiz.back();
		assert_eq!(wiz.step(), Step::Upload);

		assert_eq!(wiz.fields().email, "a@b.co");
		assert_eq!(wiz.fields().specifics, "warm tones");
		assert!(wiz.file().is_some());
	}

	#[test]
	fn jumping_only_to_visited_steps() {
		let mut wiz = Wizard::new();
		assert!(wiz.is_reachable(Step::Upload));
		assert!(!wiz.jump_to(Step::Reimagine));

		wiz.select_file(png()).unwrap();
		wiz.next().unwrap();
		assert!(!wiz.is_reachable(Step::Deliver));
		assert!(!wiz.jump_to(Step::Deliver));
		assert!(wiz.jump_to(Step::Upload));
		assert_eq!(wiz.step(), Step::Upload);

		// having been at Approve doesn't keep it reachable once you've stepped back
		assert!(!wiz.jump_to(Step::Approve));
	}

	#[test]
	fn submit_blocked_on_bad_email() {
		let mut wiz = at_deliver("not-an-email");
		assert_eq!(wiz.begin_submit(), Err(WizardError::InvalidEmail));
		assert_eq!(wiz.state(), WizardState::At(Step::Deliver));
		assert_eq!(wiz.email_error(), Some(WizardError::InvalidEmail));

		wiz.set_email("a@b.co".into());
		assert_eq!(wiz.email_error(), None);
		let form = wiz.begin_submit().unwrap();
		assert_eq!(form.email, "a@b.co");
		assert!(wiz.is_sending());
	}

	#[test]
	fn failed_send_returns_to_deliver() {
		let mut wiz = at_deliver("a@b.co");
		wiz.begin_submit().unwrap();

		// no double submits or wandering off while it's in flight
		assert_eq!(wiz.begin_submit(), Err(WizardError::WrongStep));
		assert!(!wiz.jump_to(Step::Upload));
		wiz.back();
		assert!(wiz.is_sending());

		wiz.finish_submit(false);
		assert_eq!(wiz.state(), WizardState::At(Step::Deliver));
		assert!(wiz.begin_submit().is_ok());
	}

	#[test]
	fn submitted_is_terminal() {
		let mut wiz = at_deliver("a@b.co");
		wiz.begin_submit().unwrap();
		wiz.finish_submit(true);
		assert!(wiz.is_submitted());

		let before = wiz.clone();
		wiz.back();
		wiz.next().unwrap();
		wiz.set_email("other@b.co".into());
		wiz.finish_submit(false);
		assert!(!wiz.jump_to(Step::Upload));
		assert_eq!(wiz.begin_submit(), Err(WizardError::WrongStep));
		assert_eq!(wiz, before);
		assert_eq!(wiz.fields().email, "a@b.co");
	}

	#[test]
	fn guards() {
		let file = png();
		let gif = SelectedFile::new("a.gif", "image/gif");
		let none = Guard { file: None, email: "" };
		let with_file = Guard { file: Some(&file), email: "" };

		assert!(!can_advance(WizardState::At(Step::Upload), &none));
		assert!(!can_advance(WizardState::At(Step::Upload), &Guard { file: Some(&gif), email: "" }));
		assert!(can_advance(WizardState::At(Step::Upload), &with_file));
		assert!(can_advance(WizardState::At(Step::Reimagine), &none));
		assert!(can_advance(WizardState::At(Step::Approve), &none));
		assert!(!can_advance(WizardState::At(Step::Deliver), &with_file));
		assert!(can_advance(WizardState::At(Step::Deliver), &Guard { file: None, email: "a@b.co" }));
		assert!(!can_advance(WizardState::Sending, &with_file));
		assert!(!can_advance(WizardState::Submitted, &with_file));
	}

	#[test]
	fn step_indices() {
		for (idx, step) in Step::ALL.into_iter().enumerate() {
			assert_eq!(step.index(), idx);
			assert_eq!(Step::from_index(idx), Some(step));
		}
		assert_eq!(Step::from_index(4), None);
		assert_eq!(Step::Upload.prev(), None);
		assert_eq!(Step::Deliver.next(), None);
	}
}
