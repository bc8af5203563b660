use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use crate::{object::process_response, Result};

package!(Notifications);

fn list_query(
	all: bool,
	participating: bool,
	since: Option<DateTime<Utc>>,
	before: Option<DateTime<Utc>>,
) -> Vec<(&'static str, String)> {
	let mut query = Vec::new();
	if all {
		query.push(("all", "1".to_string()));
	}
	if participating {
		query.push(("participating", "1".to_string()));
	}
	if let Some(since) = since {
		query.push(("since", since.to_rfc3339()));
	}
	if let Some(before) = before {
		query.push(("before", before.to_rfc3339()));
	}
	query
}

fn read_body(
	unread: bool,
	read: bool,
	last_read_at: Option<DateTime<Utc>>,
) -> Value {
	let mut body = json!({ "unread": unread, "read": read });
	if let Some(last_read_at) = last_read_at {
		body["last_read_at"] = json!(last_read_at.to_rfc3339());
	}
	body
}

impl Notifications {
	/// Notifications of the authenticated user. `all` includes notifications
	/// already marked as read, `participating` restricts the list to threads
	/// the user takes part in.
	pub async fn get_list(
		&self,
		all: bool,
		participating: bool,
		since: Option<DateTime<Utc>>,
		before: Option<DateTime<Utc>>,
	) -> Result<Value> {
		let query = list_query(all, participating, since, before);
		let url = self.object.fetch_url_with("/notifications", &query, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn get_list_repository(
		&self,
		owner: &str,
		repo: &str,
		all: bool,
		participating: bool,
		since: Option<DateTime<Utc>>,
		before: Option<DateTime<Utc>>,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/notifications", owner, repo);
		let query = list_query(all, participating, since, before);
		let url = self.object.fetch_url_with(&path, &query, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn mark_read(
		&self,
		unread: bool,
		read: bool,
		last_read_at: Option<DateTime<Utc>>,
	) -> Result<Value> {
		let url = self.object.fetch_url("/notifications", 0, 0)?;
		let response = self
			.object
			.put(url, &read_body(unread, read, last_read_at))
			.await?;
		process_response(&response, 205)
	}

	pub async fn mark_read_repository(
		&self,
		owner: &str,
		repo: &str,
		unread: bool,
		read: bool,
		last_read_at: Option<DateTime<Utc>>,
	) -> Result<Value> {
		let path = format!("/repos/{}/{}/notifications", owner, repo);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self
			.object
			.put(url, &read_body(unread, read, last_read_at))
			.await?;
		process_response(&response, 205)
	}

	pub async fn view_thread(&self, id: u64) -> Result<Value> {
		let path = format!("/notifications/threads/{}", id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn mark_read_thread(
		&self,
		id: u64,
		unread: bool,
		read: bool,
	) -> Result<Value> {
		let path = format!("/notifications/threads/{}", id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self
			.object
			.patch(url, &json!({ "unread": unread, "read": read }))
			.await?;
		process_response(&response, 205)
	}

	pub async fn get_thread_subscription(&self, id: u64) -> Result<Value> {
		let path = format!("/notifications/threads/{}/subscription", id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.get(url).await?;
		process_response(&response, 200)
	}

	pub async fn set_thread_subscription(
		&self,
		id: u64,
		subscribed: bool,
		ignored: bool,
	) -> Result<Value> {
		let path = format!("/notifications/threads/{}/subscription", id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self
			.object
			.put(url, &json!({ "subscribed": subscribed, "ignored": ignored }))
			.await?;
		process_response(&response, 200)
	}

	pub async fn delete_thread_subscription(&self, id: u64) -> Result<Value> {
		let path = format!("/notifications/threads/{}/subscription", id);
		let url = self.object.fetch_url(&path, 0, 0)?;
		let response = self.object.delete(url).await?;
		process_response(&response, 204)
	}
}

#[cfg(test)]
mod tests {
	use chrono::{DateTime, Utc};

	use crate::{http::HttpMethod, testing};

	#[tokio::test]
	async fn get_list_query() {
		let (github, transport) = testing::github(200, testing::SAMPLE);
		let since: DateTime<Utc> = "2012-12-12T00:00:00Z".parse().unwrap();

		github
			.activity()
			.notifications()
			.get_list(true, true, Some(since), None)
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/notifications?all=1&participating=1&since=2012-12-12T00%3A00%3A00%2B00%3A00"
		);
	}

	#[tokio::test]
	async fn get_list_repository_without_flags() {
		let (github, transport) = testing::github(200, testing::SAMPLE);

		github
			.activity()
			.notifications()
			.get_list_repository(
				"joomla",
				"joomla-platform",
				false,
				false,
				None,
				None,
			)
			.await
			.unwrap();

		assert_eq!(
			transport.last_path(),
			"/repos/joomla/joomla-platform/notifications"
		);
	}

	#[tokio::test]
	async fn mark_read() {
		let (github, transport) = testing::github(205, "");

		let result = github
			.activity()
			.notifications()
			.mark_read(true, true, None)
			.await
			.unwrap();

		assert!(result.is_null());
		let request = transport.last_request();
		assert_eq!(request.method, HttpMethod::Put);
		assert_eq!(
			request.body.as_deref(),
			Some(r#"{"unread":true,"read":true}"#)
		);
	}

	#[tokio::test]
	async fn mark_read_repository_with_date() {
		let (github, transport) = testing::github(205, "");
		let at: DateTime<Utc> = "1966-09-14T00:00:00Z".parse().unwrap();

		github
			.activity()
			.notifications()
			.mark_read_repository(
				"joomla",
				"joomla-platform",
				true,
				false,
				Some(at),
			)
			.await
			.unwrap();

		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"unread":true,"read":false,"last_read_at":"1966-09-14T00:00:00+00:00"}"#)
		);
	}

	#[tokio::test]
	async fn mark_read_failure() {
		let (github, _) = testing::github(500, testing::ERROR);

		let err = github
			.activity()
			.notifications()
			.mark_read(true, true, None)
			.await
			.unwrap_err();

		assert_eq!(err.to_string(), "Generic Error");
	}

	#[tokio::test]
	async fn mark_read_thread() {
		let (github, transport) = testing::github(205, "");

		github
			.activity()
			.notifications()
			.mark_read_thread(1, true, true)
			.await
			.unwrap();

		let request = transport.last_request();
		assert_eq!(request.method, HttpMethod::Patch);
		assert_eq!(transport.last_path(), "/notifications/threads/1");
	}

	#[tokio::test]
	async fn thread_subscription() {
		let (github, transport) = testing::github(200, testing::SAMPLE);
		let notifications = github.activity().notifications();

		notifications.set_thread_subscription(1, true, false).await.unwrap();
		assert_eq!(
			transport.last_body().as_deref(),
			Some(r#"{"subscribed":true,"ignored":false}"#)
		);
		assert_eq!(
			transport.last_path(),
			"/notifications/threads/1/subscription"
		);

		let err =
			notifications.delete_thread_subscription(1).await.unwrap_err();
		assert_eq!(err.status(), Some(200));
	}
}
