use std::sync::Arc;

use crate::{
	config::{self, Options},
	constants::{DEFAULT_API_URL, DEFAULT_USER_AGENT},
	http::{Client, ReqwestTransport, Transport},
	object::GithubObject,
	package::{
		activity::Activity, authorization::Authorization, data::Data,
		gists::Gists, gitignore::Gitignore, issues::Issues, markdown::Markdown,
		orgs::Orgs, pulls::Pulls, repositories::Repositories, users::Users,
	},
	Result,
};

/// Entry point of the library: holds the options and HTTP client and hands
/// out the resource packages, all of which share them.
///
/// ```no_run
/// # async fn run() -> github_v3::Result<()> {
/// use github_v3::{config, Github, Options};
///
/// let github = Github::new(Options::new().with(config::TOKEN, "secret"))?;
/// let issue = github.issues().get("joomla", "joomla-cms", 1).await?;
/// println!("{}", issue["title"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Github {
	object: GithubObject,
}

impl Github {
	/// A client using the default reqwest transport.
	pub fn new(options: Options) -> Result<Self> {
		Ok(Self::with_transport(options, Arc::new(ReqwestTransport::new()?)))
	}

	/// A client configured from `GITHUB_*` environment variables.
	pub fn from_env() -> Result<Self> {
		Self::new(Options::from_env())
	}

	pub fn with_transport(
		options: Options,
		transport: Arc<dyn Transport>,
	) -> Self {
		Self::with_client(options, Client::from_shared(transport))
	}

	pub fn with_client(options: Options, client: Client) -> Self {
		if !options.contains(config::USER_AGENT) {
			options.set(config::USER_AGENT, DEFAULT_USER_AGENT);
		}
		if !options.contains(config::API_URL) {
			options.set(config::API_URL, DEFAULT_API_URL);
		}

		Self {
			object: GithubObject::new(Arc::new(options), Arc::new(client)),
		}
	}

	pub fn get_option(&self, key: &str) -> Option<String> {
		self.object.options().get(key)
	}

	pub fn set_option<V: Into<String>>(&self, key: &str, value: V) -> &Self {
		self.object.options().set(key, value);
		self
	}

	pub fn client(&self) -> &Client {
		self.object.client()
	}

	pub fn object(&self) -> &GithubObject {
		&self.object
	}

	pub fn activity(&self) -> Activity {
		Activity::new(self.object.clone())
	}

	pub fn authorization(&self) -> Authorization {
		Authorization::new(self.object.clone())
	}

	pub fn data(&self) -> Data {
		Data::new(self.object.clone())
	}

	pub fn gists(&self) -> Gists {
		Gists::new(self.object.clone())
	}

	pub fn gitignore(&self) -> Gitignore {
		Gitignore::new(self.object.clone())
	}

	pub fn issues(&self) -> Issues {
		Issues::new(self.object.clone())
	}

	pub fn markdown(&self) -> Markdown {
		Markdown::new(self.object.clone())
	}

	pub fn orgs(&self) -> Orgs {
		Orgs::new(self.object.clone())
	}

	pub fn pulls(&self) -> Pulls {
		Pulls::new(self.object.clone())
	}

	pub fn repositories(&self) -> Repositories {
		Repositories::new(self.object.clone())
	}

	pub fn users(&self) -> Users {
		Users::new(self.object.clone())
	}
}
