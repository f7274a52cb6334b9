use crate::config::Config;

/// Resolve the current user id.
///
/// A `--user` flag wins over the config file. Blank ids count as no user.
pub fn current_user(flag: Option<&str>, config: &Config) -> Option<String> {
    flag.or(config.user.as_deref())
        .map(str::trim)
        .filter(|user| !user.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(user: Option<&str>) -> Config {
        Config {
            user: user.map(str::to_string),
            history_path: None,
        }
    }

    #[test]
    fn test_flag_overrides_config() {
        assert_eq!(
            current_user(Some("bob"), &config_with(Some("alice"))).as_deref(),
            Some("bob")
        );
    }

    #[test]
    fn test_falls_back_to_config() {
        assert_eq!(current_user(None, &config_with(Some("alice"))).as_deref(), Some("alice"));
    }

    #[test]
    fn test_no_user_anywhere() {
        assert_eq!(current_user(None, &config_with(None)), None);
    }

    #[test]
    fn test_blank_user_is_none() {
        assert_eq!(current_user(Some("  "), &config_with(None)), None);
        assert_eq!(current_user(None, &config_with(Some(""))), None);
    }

    #[test]
    fn test_user_is_trimmed() {
        assert_eq!(current_user(Some(" carol "), &config_with(None)).as_deref(), Some("carol"));
    }
}
