use std::path::Path;

use super::environment::get_home_dir;

/// Formats a path with `~` substituted for the home directory
///
/// Used when telling the operator where credentials were saved.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use lk_cli::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/.clawdbot/linkedin-monitor/credentials.json");
/// // "~/.clawdbot/linkedin-monitor/credentials.json" when HOME=/home/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = get_home_dir().ok();
    format_path_with_tilde_internal(path, home.as_deref())
}

/// Path formatting with an explicit home directory (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    match home.and_then(|home| path.strip_prefix(home).ok()) {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest.display()),
        None => path.display().to_string(),
    }
}
