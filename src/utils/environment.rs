use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable holding the `li_at` cookie
pub const SESSION_TOKEN_ENV_VAR: &str = "LINKEDIN_LI_AT";

/// Environment variable holding the `JSESSIONID` cookie
pub const SESSION_ID_ENV_VAR: &str = "LINKEDIN_JSESSIONID";

const CREDENTIALS_RELATIVE_PATH: [&str; 3] = [".clawdbot", "linkedin-monitor", "credentials.json"];

/// Read an environment variable, treating unset, empty and non-UTF-8 values as absent
pub fn read_env_value(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}

/// Get the user's home directory, preferring `$HOME`
pub fn get_home_dir() -> Result<PathBuf> {
    env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .context("HOME environment variable not set")
}

/// Get the credential file path (~/.clawdbot/linkedin-monitor/credentials.json)
pub fn get_credentials_path() -> Result<PathBuf> {
    Ok(credentials_path_under(&get_home_dir()?))
}

/// Credential file location below a given home directory
pub fn credentials_path_under(home: &Path) -> PathBuf {
    let mut path = home.to_path_buf();
    path.extend(CREDENTIALS_RELATIVE_PATH);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_path_under_home() {
        let path = credentials_path_under(Path::new("/home/operator"));
        assert_eq!(
            path,
            PathBuf::from("/home/operator/.clawdbot/linkedin-monitor/credentials.json")
        );
    }

    #[test]
    fn test_credentials_path_follows_home_dir() {
        // Reads HOME without mutating it
        if let Ok(home) = get_home_dir() {
            assert_eq!(get_credentials_path().unwrap(), credentials_path_under(&home));
        }
    }

    #[test]
    fn test_read_env_value_missing() {
        assert!(read_env_value("LK_CLI_TEST_SURELY_UNSET_VARIABLE").is_none());
    }
}
