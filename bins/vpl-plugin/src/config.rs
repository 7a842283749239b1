//! 命令行配置文件.
//!
//! JSON 格式, 所有字段均可省略:
//!
//! ```json
//! { "platform": { "hw_decode_plugins": false }, "log_level": "debug" }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use vplkit_plugin::PlatformCaps;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(
        default = "PlatformCaps::current",
        deserialize_with = "deserialize_platform"
    )]
    pub platform: PlatformCaps,
    #[serde(default)]
    pub log_level: Option<String>,
}

/// 配置文件中的平台能力, 省略的字段沿用当前平台的值
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlatformOverrides {
    hw_decode_plugins: Option<bool>,
    fei_encode_plugin: Option<bool>,
}

impl PlatformOverrides {
    fn apply(self, base: PlatformCaps) -> PlatformCaps {
        PlatformCaps {
            hw_decode_plugins: self.hw_decode_plugins.unwrap_or(base.hw_decode_plugins),
            fei_encode_plugin: self.fei_encode_plugin.unwrap_or(base.fei_encode_plugin),
        }
    }
}

fn deserialize_platform<'de, D>(deserializer: D) -> Result<PlatformCaps, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = PlatformOverrides::deserialize(deserializer)?;
    Ok(overrides.apply(PlatformCaps::current()))
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            platform: PlatformCaps::current(),
            log_level: None,
        }
    }
}

impl CliConfig {
    /// 读取配置文件, 未指定路径时使用当前平台的默认值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件失败, path={}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("解析配置文件失败, path={}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_无配置文件使用当前平台() {
        let config = CliConfig::load(None).unwrap();
        assert_eq!(config.platform, PlatformCaps::current());
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_空对象() {
        let file = write_config("{}");
        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_覆盖平台能力() {
        let file = write_config(
            r#"{
                "platform": {"hw_decode_plugins": false, "fei_encode_plugin": true},
                "log_level": "trace"
            }"#,
        );
        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.platform, PlatformCaps::ANDROID);
        assert_eq!(config.log_level.as_deref(), Some("trace"));
    }

    #[test]
    fn test_部分平台字段沿用当前平台() {
        let file = write_config(r#"{"platform": {"hw_decode_plugins": false}}"#);
        let config = CliConfig::load(Some(file.path())).unwrap();
        let expected = PlatformCaps {
            hw_decode_plugins: false,
            ..PlatformCaps::current()
        };
        assert_eq!(config.platform, expected);

        let file = write_config(r#"{"platform": {}}"#);
        let config = CliConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.platform, PlatformCaps::current());
    }

    #[test]
    fn test_覆盖不改变未指定字段() {
        // Windows 上只覆盖解码插件时, FEI 编码插件仍保持关闭
        let overrides = PlatformOverrides {
            hw_decode_plugins: Some(true),
            fei_encode_plugin: None,
        };
        assert_eq!(overrides.apply(PlatformCaps::WINDOWS), PlatformCaps::WINDOWS);
        assert_eq!(
            PlatformOverrides::default().apply(PlatformCaps::ANDROID),
            PlatformCaps::ANDROID
        );
    }

    #[test]
    fn test_未知平台字段() {
        let file = write_config(r#"{"platform": {"hw_decode": false}}"#);
        assert!(CliConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_格式错误() {
        let file = write_config("{ platform");
        let err = CliConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("解析配置文件失败"));
    }

    #[test]
    fn test_文件不存在() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(CliConfig::load(Some(&missing)).is_err());
    }
}
