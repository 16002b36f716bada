//! Configuration loader.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a TOML file, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    ///
    /// Only TOML values are expanded; `#` comments are left as written.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        let mut lines = Vec::new();

        for line in content.split('\n') {
            let (code, comment) = line.split_at(comment_start(line));
            let mut expanded = code.to_string();
            for cap in re.captures_iter(code) {
                let var_name = &cap[1];
                let var_value = std::env::var(var_name)
                    .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
                expanded = expanded.replace(&cap[0], &var_value);
            }
            expanded.push_str(comment);
            lines.push(expanded);
        }

        Ok(lines.join("\n"))
    }

    /// Expand shell-style paths (e.g., `~/.quote-plugin/logs`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

/// Byte offset of the `#` that starts a comment on this line, or the line
/// length. A `#` inside a basic or literal string does not count.
fn comment_start(line: &str) -> usize {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (idx, ch) in line.char_indices() {
        match quote {
            Some('"') if escaped => escaped = false,
            Some('"') if ch == '\\' => escaped = true,
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch == '#' => return idx,
            None => {}
        }
    }

    line.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.server.port, 3101);
    }

    #[test]
    fn test_load_basic_config() {
        let content = r#"
            [server]
            host = "127.0.0.1"
            port = 4000

            [plugin]
            id = "quote-staging"
            base_url = "http://10.0.0.5:4000"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.plugin.id, "quote-staging");
        assert_eq!(config.plugin.base_url, "http://10.0.0.5:4000");
    }

    #[test]
    fn test_load_core_and_logging() {
        let content = r#"
            [core]
            url = "http://core:9000"
            register_on_startup = true
            timeout_secs = 5

            [logging]
            level = "debug"
            dir = "~/.quote-plugin/logs"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.core.url, "http://core:9000");
        assert!(config.core.register_on_startup);
        assert_eq!(config.core.timeout_secs, 5);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.dir.as_deref(), Some("~/.quote-plugin/logs"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[server]").unwrap();
        writeln!(file, "port = 5000").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/plugin.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_nonexistent_file() {
        let config = ConfigLoader::load_or_default(Path::new("/nonexistent/plugin.toml")).unwrap();
        assert_eq!(config.plugin.id, "quote");
    }

    #[test]
    fn test_load_or_default_still_reports_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "port = [unclosed").unwrap();
        assert!(ConfigLoader::load_or_default(file.path()).is_err());
    }

    #[test]
    fn test_load_invalid_toml() {
        let result = ConfigLoader::load_str("invalid = [unclosed");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_expand_env_vars() {
        // SAFETY: This test runs in isolation and sets a unique test-only env var
        unsafe {
            std::env::set_var("QUOTE_PLUGIN_TEST_CORE_URL", "http://core.test:9000");
        }
        let content = "[core]\nurl = \"${QUOTE_PLUGIN_TEST_CORE_URL}\"";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.core.url, "http://core.test:9000");
        unsafe {
            std::env::remove_var("QUOTE_PLUGIN_TEST_CORE_URL");
        }
    }

    #[test]
    fn test_expand_env_vars_not_set() {
        let content = "value = \"${NONEXISTENT_QUOTE_PLUGIN_VAR_12345}\"";
        let result = ConfigLoader::expand_env_vars(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(_))));
    }

    #[test]
    fn test_expand_env_vars_no_vars() {
        let content = "value = \"no variables here\"";
        let expanded = ConfigLoader::expand_env_vars(content).unwrap();
        assert_eq!(expanded, content);
    }

    #[test]
    fn test_env_reference_in_comment_is_ignored() {
        let content = "# values may use ${QUOTE_PLUGIN_UNSET_IN_COMMENT}\n\
                       [server]\n\
                       port = 4100 # or ${QUOTE_PLUGIN_UNSET_TRAILING}\n";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.server.port, 4100);
    }

    #[test]
    fn test_hash_inside_string_is_not_a_comment() {
        // SAFETY: unique test-only env var
        unsafe {
            std::env::set_var("QUOTE_PLUGIN_TEST_NAME_SUFFIX", "eu");
        }
        let content = "[plugin]\nname = \"Quotes #1 ${QUOTE_PLUGIN_TEST_NAME_SUFFIX}\" # region";
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.plugin.name, "Quotes #1 eu");
        unsafe {
            std::env::remove_var("QUOTE_PLUGIN_TEST_NAME_SUFFIX");
        }
    }

    #[test]
    fn test_comment_start() {
        assert_eq!(comment_start("port = 1 # note"), 9);
        assert_eq!(comment_start("name = 'a#b'"), 12);
        assert_eq!(comment_start(r##"name = "a\"#b""##), 14);
        assert_eq!(comment_start("# header"), 0);
    }

    #[test]
    fn test_expand_path_no_tilde() {
        assert_eq!(ConfigLoader::expand_path("/var/log/quote"), "/var/log/quote");
    }
}
