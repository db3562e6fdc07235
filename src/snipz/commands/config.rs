use crate::commands::{CmdMessage, CmdResult, SnipzPaths};
use crate::config::SnipzConfig;
use crate::error::{Result, SnipzError};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &SnipzPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.config_dir;
    match action {
        ConfigAction::ShowAll => {
            let config = SnipzConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = SnipzConfig::load(dir)?;
            let val = config
                .get(&key)
                .ok_or_else(|| SnipzError::Api(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(val));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = SnipzConfig::load(dir)?;
            config.set(&key, &value)?;
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::config::ThemeMode;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn paths(dir: &TempDir) -> SnipzPaths {
        SnipzPaths {
            config_dir: dir.path().to_path_buf(),
        }
    }

    #[test]
    fn set_persists_value() {
        let dir = TempDir::new().unwrap();
        let result = run(
            &paths(&dir),
            ConfigAction::Set("theme".into(), "light".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Success);

        let shown = run(&paths(&dir), ConfigAction::ShowAll).unwrap();
        assert_eq!(shown.config.unwrap().theme, ThemeMode::Light);
    }

    #[test]
    fn unknown_key_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = run(&paths(&dir), ConfigAction::ShowKey("colour".into())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert!(err.to_string().contains("colour"));

        let err = run(
            &paths(&dir),
            ConfigAction::Set("colour".into(), "red".into()),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
    }

    #[test]
    fn rejected_value_is_an_error_and_not_saved() {
        let dir = TempDir::new().unwrap();
        let err = run(
            &paths(&dir),
            ConfigAction::Set("theme".into(), "neon".into()),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Other);
        assert!(err.to_string().contains("neon"));
        assert!(!dir.path().join("config.json").exists());
    }

    #[test]
    fn show_key_returns_the_value() {
        let dir = TempDir::new().unwrap();
        let result = run(&paths(&dir), ConfigAction::ShowKey("theme".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(result.messages[0].content, "dark");
    }
}
