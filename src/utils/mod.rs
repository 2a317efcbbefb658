pub mod environment;
pub mod paths;
pub mod terminal;

pub use environment::{
    SESSION_ID_ENV_VAR, SESSION_TOKEN_ENV_VAR, credentials_path_under, get_credentials_path,
    get_home_dir, read_env_value,
};
pub use paths::format_path_with_tilde;
pub use terminal::{PREVIEW_CHARS, sanitize_for_terminal, truncate_with_ellipsis};
