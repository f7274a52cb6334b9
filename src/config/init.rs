use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::config::{get_config_path, Config};
use crate::prompt::Prompter;

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(18));
    }
    println!();
}

/// Ask for the config values. Returns the config and where to save it.
pub fn prompt_config<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_path: &Path,
) -> Result<(Config, PathBuf)> {
    prompter.say("Assessments are saved to your history when a user id is set.")?;
    prompter.say("Leave it as 'none' to take the assessment anonymously.")?;
    let user = prompter.ask_with_default("User id", "none")?;
    let user = if user == "none" || user.trim().is_empty() {
        None
    } else {
        Some(user.trim().to_string())
    };

    prompter.say("")?;
    let default_history = crate::history::get_history_path();
    let history = prompter.ask_with_default(
        "Where should assessment history be kept?",
        &default_history.display().to_string(),
    )?;
    let history_path = PathBuf::from(history);
    let history_path = if history_path == default_history {
        None
    } else {
        Some(history_path)
    };

    prompter.say("")?;
    let path = prompter.ask_with_default(
        "Where should the config be saved?",
        &default_path.display().to_string(),
    )?;

    Ok((Config { user, history_path }, PathBuf::from(path)))
}

/// Serialize a config to YAML and write it, creating parent directories.
pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    std::fs::write(path, &yaml)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, it is offered as the config file path.
/// Otherwise the default config path is offered.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    typewriter("Prakriti Configuration Wizard");
    println!("=============================");
    println!();

    let stdin = std::io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());

    let default_config_path = default_path.unwrap_or_else(get_config_path);
    let (config, config_path) = prompt_config(&mut prompter, &default_config_path)?;

    if config_path.exists() {
        let overwrite = prompter.ask_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    write_config(&config_path, &config)?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `prakriti` to take the assessment.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompt_config_with_user() {
        let input = "alice\n/tmp/prakriti/history.json\n/tmp/prakriti/config.yaml\n";
        let mut prompter = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());

        let (config, path) = prompt_config(&mut prompter, Path::new("/default.yaml")).unwrap();
        assert_eq!(config.user.as_deref(), Some("alice"));
        assert_eq!(config.history_path, Some(PathBuf::from("/tmp/prakriti/history.json")));
        assert_eq!(path, PathBuf::from("/tmp/prakriti/config.yaml"));
    }

    #[test]
    fn test_prompt_config_accepts_defaults() {
        let mut prompter = Prompter::new(Cursor::new(b"\n\n\n".to_vec()), Vec::new());

        let (config, path) = prompt_config(&mut prompter, Path::new("/default.yaml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(path, PathBuf::from("/default.yaml"));
    }

    #[test]
    fn test_write_config_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.yaml");
        let config = Config {
            user: Some("bob".to_string()),
            history_path: Some(dir.path().join("history.json")),
        };

        write_config(&path, &config).unwrap();
        let loaded = crate::config::load_config(Some(path)).unwrap();
        assert_eq!(loaded, config);
    }
}
