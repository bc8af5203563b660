mod feeds;
mod notifications;
mod starring;

pub use feeds::Feeds;
pub use notifications::Notifications;
pub use starring::Starring;

package!(
	/// Events, feeds, notifications and stars.
	Activity
);

impl Activity {
	pub fn feeds(&self) -> Feeds {
		Feeds::new(self.object.clone())
	}

	pub fn notifications(&self) -> Notifications {
		Notifications::new(self.object.clone())
	}

	pub fn starring(&self) -> Starring {
		Starring::new(self.object.clone())
	}
}
