use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;

/// Client-side preferences that survive restarts, keyed by server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LocalState {
    pub defaults: Vec<DefaultsEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultsEntry {
    pub base_url: String,
    pub default_account_id: Option<Uuid>,
    pub default_category_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultsValue {
    pub account_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
}

impl LocalState {
    pub fn load(path: &str) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let parent = Path::new(path).parent();
        if let Some(parent) = parent {
            fs::create_dir_all(parent)?;
        }
        let payload = serde_json::to_string_pretty(self)?;
        fs::write(path, payload)?;
        Ok(())
    }

    pub fn defaults_for(&self, base_url: &str) -> DefaultsValue {
        self.defaults
            .iter()
            .find(|entry| entry.base_url == base_url)
            .map(|entry| DefaultsValue {
                account_id: entry.default_account_id,
                category_id: entry.default_category_id,
            })
            .unwrap_or_default()
    }

    pub fn set_defaults(&mut self, base_url: &str, value: DefaultsValue) {
        if let Some(entry) = self
            .defaults
            .iter_mut()
            .find(|entry| entry.base_url == base_url)
        {
            entry.default_account_id = value.account_id;
            entry.default_category_id = value.category_id;
            return;
        }

        self.defaults.push(DefaultsEntry {
            base_url: base_url.to_string(),
            default_account_id: value.account_id,
            default_category_id: value.category_id,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> String {
        std::env::temp_dir()
            .join(format!("fintui-{}-{name}", std::process::id()))
            .join("state.json")
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn missing_file_is_empty_state() {
        let state = LocalState::load(&temp_path("missing")).unwrap();
        assert_eq!(state, LocalState::default());
    }

    #[test]
    fn set_defaults_updates_in_place() {
        let mut state = LocalState::default();
        let account = Uuid::from_u128(1);
        state.set_defaults(
            "http://a/",
            DefaultsValue {
                account_id: Some(account),
                category_id: None,
            },
        );
        state.set_defaults(
            "http://a/",
            DefaultsValue {
                account_id: Some(account),
                category_id: Some(Uuid::from_u128(2)),
            },
        );

        assert_eq!(state.defaults.len(), 1);
        assert_eq!(
            state.defaults_for("http://a/").category_id,
            Some(Uuid::from_u128(2))
        );
        assert_eq!(state.defaults_for("http://b/"), DefaultsValue::default());
    }

    #[test]
    fn save_then_load_preserves_entries() {
        let path = temp_path("roundtrip");
        let mut state = LocalState::default();
        state.set_defaults(
            "http://a/",
            DefaultsValue {
                account_id: Some(Uuid::from_u128(7)),
                category_id: None,
            },
        );
        state.save(&path).unwrap();

        let loaded = LocalState::load(&path).unwrap();
        assert_eq!(loaded, state);
        let _ = fs::remove_file(&path);
    }
}
