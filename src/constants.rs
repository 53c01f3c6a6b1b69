// src/constants.rs
//
// Application-wide constants for talking to the NoteHub service.

/// Endpoint for the notes collection. Listing and creation hit it directly,
/// deletion appends `/<id>`.
pub const DEFAULT_BASE_URL: &str = "https://notehub-public.goit.study/api/notes";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV_VAR: &str = "NOTEHUB_TOKEN";

/// Environment variable overriding the base URL.
///
/// Used for staging servers and local mock servers in tests.
pub const BASE_URL_ENV_VAR: &str = "NOTEHUB_BASE_URL";

/// Config file name, looked up under the platform config directory.
///
/// Used in: `infrastructure/config.rs`
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the platform config directory holding `CONFIG_FILE_NAME`.
pub const CONFIG_DIR_NAME: &str = "notehub";

/// Maximum characters of note content shown per line in listings.
///
/// Used in: `ports/text.rs`
pub const PREVIEW_MAX_CHARS: usize = 60;
