//! Run configuration consulted by address resolution: the alias table and the
//! default sender.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Serializes tests that touch the `SCENARIO_*` environment.
#[cfg(test)]
pub(crate) static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default, with = "ordered_aliases")]
    pub aliases: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
}

impl Settings {
    pub fn from_json_str(raw: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Alias address for `name`, matched case-insensitively. The stored address
    /// is returned verbatim.
    pub fn find_alias(&self, name: &str) -> Option<&str> {
        let wanted = name.to_lowercase();
        self.aliases
            .iter()
            .find(|(alias, _)| alias.to_lowercase() == wanted)
            .map(|(_, address)| address.as_str())
    }

    /// Alias name bound to `address`, if any.
    pub fn alias_for(&self, address: &str) -> Option<&str> {
        let wanted = address.to_lowercase();
        self.aliases
            .iter()
            .find(|(_, addr)| addr.to_lowercase() == wanted)
            .map(|(alias, _)| alias.as_str())
    }

    /// Adds an alias, replacing an existing one with the same name in place.
    pub fn set_alias(&mut self, name: impl Into<String>, address: impl Into<String>) {
        let name = name.into();
        let address = address.into();
        let wanted = name.to_lowercase();
        match self
            .aliases
            .iter_mut()
            .find(|(alias, _)| alias.to_lowercase() == wanted)
        {
            Some(slot) => slot.1 = address,
            None => self.aliases.push((name, address)),
        }
    }

    /// Applies `SCENARIO_ALIASES`, `SCENARIO_FROM` and `SCENARIO_NETWORK`.
    pub fn apply_env_overrides(&mut self) -> Result<(), SettingsError> {
        let raw = match std::env::var("SCENARIO_ALIASES") {
            Ok(raw) => Some(raw),
            Err(std::env::VarError::NotPresent) => None,
            Err(std::env::VarError::NotUnicode(value)) => {
                return Err(SettingsError::InvalidAlias(
                    value.to_string_lossy().into_owned(),
                ))
            }
        };
        if let Some(raw) = raw {
            for (name, address) in parse_alias_entries(&raw)? {
                tracing::debug!("[SETTINGS] alias {} -> {} from env", name, address);
                self.set_alias(name, address);
            }
        }
        if let Some(from) = non_empty_env("SCENARIO_FROM") {
            self.from = Some(from);
        }
        if let Some(network) = non_empty_env("SCENARIO_NETWORK") {
            self.network = Some(network);
        }
        Ok(())
    }
}

fn non_empty_env(var: &str) -> Option<String> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses `Name:0xaddr;Other:0xaddr`. Blank entries are skipped.
pub fn parse_alias_entries(raw: &str) -> Result<Vec<(String, String)>, SettingsError> {
    let mut out = Vec::new();
    for entry in raw.split(';') {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some((name, address)) = trimmed.split_once(':') else {
            return Err(SettingsError::InvalidAlias(trimmed.to_string()));
        };
        let (name, address) = (name.trim(), address.trim());
        if name.is_empty() || address.is_empty() {
            return Err(SettingsError::InvalidAlias(trimmed.to_string()));
        }
        out.push((name.to_string(), address.to_string()));
    }
    Ok(out)
}

/// Aliases are a JSON object on disk; keep document order in memory.
mod ordered_aliases {
    use super::{Map, Value};
    use serde::de::Error as DeError;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(
        aliases: &[(String, String)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let map: Map<String, Value> = aliases
            .iter()
            .map(|(name, address)| (name.clone(), Value::String(address.clone())))
            .collect();
        map.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, String)>, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        map.into_iter()
            .map(|(name, value)| match value {
                Value::String(address) => Ok((name, address)),
                other => Err(<D::Error as DeError>::custom(format!(
                    "alias `{name}` must map to an address string, got {other}"
                ))),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_alias_entries, Settings, ENV_LOCK};
    use crate::error::SettingsError;

    #[test]
    fn test_from_json_str_keeps_alias_order() {
        let settings = Settings::from_json_str(
            r#"{"aliases":{"Zed":"0x02","Alpha":"0x01"},"from":"0xroot","network":"development"}"#,
        )
        .expect("settings");
        assert_eq!(
            settings.aliases,
            vec![
                ("Zed".to_string(), "0x02".to_string()),
                ("Alpha".to_string(), "0x01".to_string())
            ]
        );
        assert_eq!(settings.from.as_deref(), Some("0xroot"));
        assert_eq!(settings.network.as_deref(), Some("development"));
    }

    #[test]
    fn test_from_json_str_rejects_non_string_alias() {
        let err = Settings::from_json_str(r#"{"aliases":{"Foo":1}}"#).expect_err("bad alias");
        assert!(matches!(err, SettingsError::InvalidJson(_)));
    }

    #[test]
    fn test_find_alias_is_case_insensitive_and_verbatim() {
        let mut settings = Settings::default();
        settings.set_alias("Foo", "0xAbCd");
        assert_eq!(settings.find_alias("FOO"), Some("0xAbCd"));
        assert_eq!(settings.alias_for("0xabcd"), Some("Foo"));
        assert_eq!(settings.find_alias("bar"), None);
    }

    #[test]
    fn test_parse_alias_entries() {
        let parsed = parse_alias_entries(" Foo:0x01 ;; Bar : 0x02 ").expect("parsed");
        assert_eq!(
            parsed,
            vec![
                ("Foo".to_string(), "0x01".to_string()),
                ("Bar".to_string(), "0x02".to_string())
            ]
        );
        assert!(matches!(
            parse_alias_entries("Foo0x01"),
            Err(SettingsError::InvalidAlias(_))
        ));
        assert!(matches!(
            parse_alias_entries("Foo:"),
            Err(SettingsError::InvalidAlias(_))
        ));
    }

    #[test]
    fn test_env_overrides_replace_aliases_and_sender() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        std::env::set_var("SCENARIO_ALIASES", "foo:0x09;Extra:0x0a");
        std::env::set_var("SCENARIO_FROM", " 0xsender ");
        std::env::remove_var("SCENARIO_NETWORK");

        let mut settings = Settings::default();
        settings.set_alias("Foo", "0x01");
        let applied = settings.apply_env_overrides();

        std::env::remove_var("SCENARIO_ALIASES");
        std::env::remove_var("SCENARIO_FROM");

        applied.expect("overrides");
        assert_eq!(
            settings.aliases,
            vec![
                ("Foo".to_string(), "0x09".to_string()),
                ("Extra".to_string(), "0x0a".to_string())
            ]
        );
        assert_eq!(settings.from.as_deref(), Some("0xsender"));
        assert_eq!(settings.network, None);
    }

    #[cfg(unix)]
    #[test]
    fn test_env_aliases_not_unicode_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let _guard = ENV_LOCK.lock().expect("env lock");
        std::env::set_var("SCENARIO_ALIASES", OsStr::from_bytes(b"Foo:0x\xff01"));
        std::env::remove_var("SCENARIO_FROM");
        std::env::remove_var("SCENARIO_NETWORK");

        let mut settings = Settings::default();
        let applied = settings.apply_env_overrides();

        std::env::remove_var("SCENARIO_ALIASES");

        assert!(matches!(applied, Err(SettingsError::InvalidAlias(_))));
        assert!(settings.aliases.is_empty());
    }
}
