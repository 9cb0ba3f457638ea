/// Application name, used for the config directory.
pub const APP_NAME: &str = "m365";

/// Public Microsoft Graph endpoint.
pub const GRAPH_URL: &str = "https://graph.microsoft.com";

/// File holding the persisted connection.
pub const CONNECTION_FILENAME: &str = "connection.json";

/// GUID used by SharePoint to mean "no hub site".
pub const EMPTY_GUID: &str = "00000000-0000-0000-0000-000000000000";

/// Overrides the stored default access token.
pub const ENV_ACCESS_TOKEN: &str = "M365_ACCESS_TOKEN";

/// Overrides the stored tenant SharePoint URL.
pub const ENV_SPO_URL: &str = "M365_SPO_URL";

/// Overrides the Microsoft Graph base URL.
pub const ENV_GRAPH_URL: &str = "M365_GRAPH_URL";

/// Overrides the config directory.
pub const ENV_CONFIG_DIR: &str = "M365_CONFIG_DIR";
