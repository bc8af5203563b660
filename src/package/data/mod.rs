mod refs;
mod tags;
mod trees;

pub use refs::Refs;
pub use tags::{Tagger, Tags};
pub use trees::Trees;

package!(
	/// The git database: raw refs, trees and annotated tags.
	Data
);

impl Data {
	pub fn refs(&self) -> Refs {
		Refs::new(self.object.clone())
	}

	pub fn tags(&self) -> Tags {
		Tags::new(self.object.clone())
	}

	pub fn trees(&self) -> Trees {
		Trees::new(self.object.clone())
	}
}
