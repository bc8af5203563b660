pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub const DEFAULT_USER_AGENT: &str = "JGitHub/2.0";

pub const FALLBACK_ERROR_MESSAGE: &str =
	"Invalid response received from GitHub.";

pub const OAUTH_AUTHORIZE_URL: &str =
	"https://github.com/login/oauth/authorize";

pub const OAUTH_ACCESS_TOKEN_URL: &str =
	"https://github.com/login/oauth/access_token";

pub const RAW_JSON_MEDIA_TYPE: &str = "application/vnd.github.raw+json";

pub const FORM_MEDIA_TYPE: &str = "application/x-www-form-urlencoded";

pub const SHA_MEDIA_TYPE: &str = "application/vnd.github.VERSION.sha";

// NOTE: Hook creation and editing reject any event missing from this list
pub const HOOK_EVENTS: [&str; 22] = [
	"*",
	"commit_comment",
	"create",
	"delete",
	"deployment",
	"deployment_status",
	"fork",
	"gollum",
	"issue_comment",
	"issues",
	"member",
	"membership",
	"page_build",
	"public",
	"pull_request_review_comment",
	"pull_request",
	"push",
	"repository",
	"release",
	"status",
	"team_add",
	"watch",
];

pub const SORT_DIRECTIONS: [&str; 2] = ["asc", "desc"];
