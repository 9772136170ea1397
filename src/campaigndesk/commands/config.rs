use crate::commands::{CmdMessage, CmdResult, DeskPaths};
use crate::config::DeskConfig;
use crate::error::{DeskError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &DeskPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = DeskConfig::load(paths.data_dir())?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {
            for (key, value) in config.list_all() {
                result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
            }
        }
        ConfigAction::ShowKey(key) => {
            let value = config
                .get(&key)
                .ok_or_else(|| DeskError::Config(format!("Unknown config key: {}", key)))?;
            result.add_message(CmdMessage::info(format!("{} = {}", key, value)));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(paths.data_dir())?;
            let shown = config.get(&key).unwrap_or(value);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
        }
    }

    Ok(result.with_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn shows_defaults_for_every_key() {
        let temp = TempDir::new().unwrap();
        let paths = DeskPaths::new(temp.path().to_path_buf());
        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.messages.len(), 3);
        assert_eq!(result.messages[0].content, "upcoming-days = 7");
    }

    #[test]
    fn set_persists() {
        let temp = TempDir::new().unwrap();
        let paths = DeskPaths::new(temp.path().to_path_buf());
        run(&paths, ConfigAction::Set("recent-limit".into(), "9".into())).unwrap();

        let result = run(&paths, ConfigAction::ShowKey("recent-limit".into())).unwrap();
        assert_eq!(result.messages[0].content, "recent-limit = 9");
        assert_eq!(result.config.unwrap().recent_limit, 9);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let temp = TempDir::new().unwrap();
        let paths = DeskPaths::new(temp.path().to_path_buf());
        assert!(run(&paths, ConfigAction::ShowKey("colour".into())).is_err());
        assert!(run(&paths, ConfigAction::Set("colour".into(), "red".into())).is_err());
    }
}
