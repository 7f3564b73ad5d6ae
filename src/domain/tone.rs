//! Tone Generator - 正弦波 PCM 采样生成
//!
//! TTS 服务不可用时的兜底音频：根据文本长度生成固定音高的提示音。
//! 所有参数为固定常量，同样长度的文本总是产生完全相同的采样序列。

use std::f64::consts::PI;

/// 采样率（Hz）
pub const SAMPLE_RATE: u32 = 44100;

/// 音调频率（Hz，A4 音高）
pub const FREQUENCY: f64 = 440.0;

/// 振幅比例（满量程的 0.3）
pub const AMPLITUDE: f64 = 0.3;

/// 每个字符对应的音频时长（秒）
pub const SECS_PER_CHAR: f64 = 0.1;

/// 音频最大时长（秒）
pub const MAX_DURATION_SECS: f64 = 3.0;

/// 根据文本长度计算音频时长（秒）
///
/// 时长 = min(字符数 * 0.1, 3.0)，空文本时长为 0
pub fn duration_secs(text: &str) -> f64 {
    let chars = text.chars().count() as f64;
    (chars * SECS_PER_CHAR).min(MAX_DURATION_SECS)
}

/// 生成单声道 16-bit 正弦波采样序列
///
/// 采样 i 的值为 round(0.3 * 32767 * sin(2π * 440 * i / 44100))，
/// 并钳制在 i16 范围内。空文本产生空序列，不报错。
pub fn generate(text: &str) -> Vec<i16> {
    let duration = duration_secs(text);
    let sample_count = (SAMPLE_RATE as f64 * duration).floor() as usize;

    let mut samples = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let t = i as f64 / SAMPLE_RATE as f64;
        let value = AMPLITUDE * 32767.0 * (2.0 * PI * FREQUENCY * t).sin();
        samples.push(value.round().clamp(i16::MIN as f64, i16::MAX as f64) as i16);
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_matches_text_length() {
        // 5 字符 → 0.5 秒 → 22050 采样
        assert_eq!(generate("こんにちは").len(), 22050);
        // 1 字符 → 0.1 秒 → 4410 采样
        assert_eq!(generate("a").len(), 4410);
    }

    #[test]
    fn test_empty_text_produces_no_samples() {
        assert!(generate("").is_empty());
    }

    #[test]
    fn test_duration_capped_at_three_seconds() {
        let long_text = "x".repeat(1000);
        assert_eq!(duration_secs(&long_text), MAX_DURATION_SECS);
        assert_eq!(generate(&long_text).len(), (SAMPLE_RATE as f64 * 3.0) as usize);
    }

    #[test]
    fn test_deterministic_for_same_length() {
        assert_eq!(generate("abcde"), generate("vwxyz"));
    }

    #[test]
    fn test_amplitude_stays_within_scale() {
        // 0.3 * 32767 ≈ 9830，远小于 i16 上限
        let max = generate("hello world").iter().map(|s| s.abs()).max().unwrap();
        assert!(max <= 9831);
        assert!(max > 9000);
    }

    #[test]
    fn test_first_sample_is_zero() {
        // sin(0) = 0
        let samples = generate("abc");
        assert_eq!(samples[0], 0);
    }
}
