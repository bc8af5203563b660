//! Resource packages, one per area of the GitHub v3 API. Every package holds
//! a clone of the shared `GithubObject`, so sub-packages handed out by a
//! parent talk through the same client and options.

macro_rules! package {
	($(#[$meta:meta])* $name:ident) => {
		$(#[$meta])*
		#[derive(Clone)]
		pub struct $name {
			object: $crate::object::GithubObject,
		}

		impl $name {
			pub fn new(object: $crate::object::GithubObject) -> Self {
				Self { object }
			}
		}
	};
}

pub mod activity;
pub mod authorization;
pub mod data;
pub mod gists;
pub mod gitignore;
pub mod issues;
pub mod markdown;
pub mod orgs;
pub mod pulls;
pub mod repositories;
pub mod users;

/// Rejects webhook event lists naming events GitHub does not know.
pub(crate) fn ensure_hook_events<S: AsRef<str>>(
	events: &[S],
) -> crate::Result<()> {
	snafu::ensure!(
		events
			.iter()
			.all(
				|event| crate::constants::HOOK_EVENTS.contains(&event.as_ref()),
			),
		crate::error::Validation {
			msg: "Your events array contains an unauthorized event."
		}
	);
	Ok(())
}
