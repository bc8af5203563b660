use serde_json::Value;

use crate::{object::process_response, Result};

package!(Feeds);

impl Feeds {
	/// The feeds available to the authenticated user.
	pub async fn get_feeds(&self) -> Result<Value> {
		let url = self.object.fetch_url("/feeds", 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}
}
