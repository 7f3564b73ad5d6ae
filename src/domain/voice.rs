//! Voice Catalog - 音色目录
//!
//! 进程启动时固定的音色 ID → 显示名称映射，只读。

use std::collections::BTreeMap;

use thiserror::Error;

/// 默认音色 ID
pub const DEFAULT_VOICE: &str = "japanese_female";

/// 内置音色表
const VOICES: &[(&str, &str)] = &[
    ("japanese_female", "Japanese Female Voice"),
    ("japanese_male", "Japanese Male Voice"),
    ("japanese_cute", "Japanese Cute Voice"),
];

/// 音色错误
#[derive(Debug, Error)]
pub enum VoiceError {
    #[error("Unknown voice: {0}")]
    Unknown(String),
}

/// 音色目录
///
/// 静态映射，BTreeMap 保证 /voices 输出顺序稳定
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    voices: BTreeMap<&'static str, &'static str>,
}

impl VoiceCatalog {
    pub fn new() -> Self {
        Self {
            voices: VOICES.iter().copied().collect(),
        }
    }

    /// 解析请求中的音色字段
    ///
    /// 未指定时返回默认音色，指定了未知 ID 时报错
    pub fn resolve(&self, voice: Option<&str>) -> Result<&'static str, VoiceError> {
        match voice {
            None => Ok(DEFAULT_VOICE),
            Some(id) => self
                .voices
                .get_key_value(id)
                .map(|(k, _)| *k)
                .ok_or_else(|| VoiceError::Unknown(id.to_string())),
        }
    }

    /// 音色显示名称
    pub fn display_name(&self, voice_id: &str) -> Option<&'static str> {
        self.voices.get(voice_id).copied()
    }

    /// 遍历全部音色 (id, 显示名称)
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.voices.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.voices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_default_when_absent() {
        let catalog = VoiceCatalog::new();
        assert_eq!(catalog.resolve(None).unwrap(), DEFAULT_VOICE);
    }

    #[test]
    fn test_resolve_known_voice() {
        let catalog = VoiceCatalog::new();
        assert_eq!(catalog.resolve(Some("japanese_male")).unwrap(), "japanese_male");
    }

    #[test]
    fn test_resolve_unknown_voice_fails() {
        let catalog = VoiceCatalog::new();
        assert!(matches!(
            catalog.resolve(Some("english_male")),
            Err(VoiceError::Unknown(_))
        ));
    }

    #[test]
    fn test_catalog_contents() {
        let catalog = VoiceCatalog::new();
        assert_eq!(catalog.len(), 3);
        assert_eq!(
            catalog.display_name("japanese_cute"),
            Some("Japanese Cute Voice")
        );
    }
}
