/// Default base URL of the Fake API (version 1)
pub const DEFAULT_BASE_API_URL: &str = "http://localhost:8080/v1";
/// Default HTTP client request timeout in seconds (1 minute)
pub const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 60;
/// Default record version sent when deleting a resource
pub const DEFAULT_RECORD_VERSION: &str = "0";
/// Default page size applied when only a page number is given
pub const DEFAULT_PAGE_SIZE: &str = "2";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "fake-api-client/0.1.0";

/// Environment variable holding the base API URL
pub const ENV_BASE_API_URL: &str = "BASE_API_URL";
/// Legacy environment variable holding the base API URL
pub const ENV_LEGACY_BASE_API_URL: &str = "FAKE_API_BASE_URL_V1";
/// Environment variable holding the client timeout (e.g. `30s`, `1m30s`)
pub const ENV_CLIENT_TIMEOUT: &str = "HTTP_CLIENT_REQ_TIME_OUT";
/// Environment variable holding the record version used on delete
pub const ENV_RECORD_VERSION: &str = "HTTP_RECORD_VERSION";
/// Environment variable holding the default page size
pub const ENV_DEFAULT_PAGE_SIZE: &str = "HTTP_DEFAULT_PAGE_SIZE";

/// Collection path of the accounts resource
pub const ACCOUNT_PATH: &str = "/accounts";
/// Type discriminator of the accounts resource
pub const ACCOUNT_TYPE: &str = "accounts";

/// Query label for the page number
pub const PAGE_NUMBER_LABEL: &str = "page[number]=";
/// Query label for the page size
pub const PAGE_SIZE_LABEL: &str = "page[size]=";
/// Query label for the record version
pub const VERSION_LABEL: &str = "version=";
