//! WAV Codec - RIFF/WAVE 字节流的编码与解析
//!
//! 编码端产生规范的 44 字节头 + 16-bit LE PCM 数据；
//! 解析端按 chunk 遍历定位 fmt/data，用于校验外部 TTS 返回的音频。

use thiserror::Error;

/// WAV 解析错误
#[derive(Debug, Error)]
pub enum WavError {
    #[error("WAV data too short: {0} bytes")]
    TooShort(usize),

    #[error("Invalid WAV: {0}")]
    InvalidFormat(String),

    #[error("Unsupported WAV: {0}")]
    Unsupported(String),
}

/// 解析出的 WAV 信息
#[derive(Debug, Clone, PartialEq)]
pub struct WavInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
    /// 16-bit PCM 采样序列
    pub samples: Vec<i16>,
}

impl WavInfo {
    /// 音频时长（秒）
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 || self.channels == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / (self.sample_rate as f64 * self.channels as f64)
    }
}

/// 将 16-bit 单声道采样序列编码为规范 WAV 字节流
///
/// 输出长度恒为 44 + 2 * samples.len()，对任意有限输入总是成功
pub fn encode(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
    const CHANNELS: u16 = 1;
    const BITS_PER_SAMPLE: u16 = 16;

    let data_size = (samples.len() * 2) as u32;
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = sample_rate * block_align as u32;

    let mut out = Vec::with_capacity(44 + samples.len() * 2);

    // RIFF 头
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_size).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // PCM
    out.extend_from_slice(&CHANNELS.to_le_bytes());
    out.extend_from_slice(&sample_rate.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());
    for sample in samples {
        out.extend_from_slice(&sample.to_le_bytes());
    }

    out
}

/// 解析 WAV 字节流
///
/// 按 chunk 遍历查找 fmt 和 data，未知 chunk 跳过。
/// 仅支持 16-bit PCM
pub fn parse(data: &[u8]) -> Result<WavInfo, WavError> {
    if data.len() < 44 {
        return Err(WavError::TooShort(data.len()));
    }

    if &data[0..4] != b"RIFF" {
        return Err(WavError::InvalidFormat("missing RIFF header".to_string()));
    }
    if &data[8..12] != b"WAVE" {
        return Err(WavError::InvalidFormat("missing WAVE identifier".to_string()));
    }

    let mut pos = 12;
    let mut fmt: Option<(u16, u16, u32, u16)> = None;
    let mut pcm_data: Option<&[u8]> = None;

    while pos + 8 <= data.len() {
        let chunk_id = &data[pos..pos + 4];
        let chunk_size =
            u32::from_le_bytes([data[pos + 4], data[pos + 5], data[pos + 6], data[pos + 7]])
                as usize;
        let body_start = pos + 8;
        let body_end = body_start.checked_add(chunk_size).filter(|&e| e <= data.len());

        match chunk_id {
            b"fmt " => {
                let end = body_end.ok_or_else(|| {
                    WavError::InvalidFormat("fmt chunk exceeds data".to_string())
                })?;
                if chunk_size < 16 {
                    return Err(WavError::InvalidFormat("fmt chunk too small".to_string()));
                }
                let body = &data[body_start..end];
                let audio_format = u16::from_le_bytes([body[0], body[1]]);
                let channels = u16::from_le_bytes([body[2], body[3]]);
                let sample_rate = u32::from_le_bytes([body[4], body[5], body[6], body[7]]);
                let bits_per_sample = u16::from_le_bytes([body[14], body[15]]);
                fmt = Some((audio_format, channels, sample_rate, bits_per_sample));
            }
            b"data" => {
                let end = body_end.ok_or_else(|| {
                    WavError::InvalidFormat("data chunk exceeds data".to_string())
                })?;
                pcm_data = Some(&data[body_start..end]);
            }
            _ => {}
        }

        // chunk 按 2 字节对齐
        pos = body_start + chunk_size + (chunk_size & 1);
    }

    let (audio_format, channels, sample_rate, bits_per_sample) =
        fmt.ok_or_else(|| WavError::InvalidFormat("missing fmt chunk".to_string()))?;
    let pcm_data =
        pcm_data.ok_or_else(|| WavError::InvalidFormat("missing data chunk".to_string()))?;

    if audio_format != 1 {
        return Err(WavError::Unsupported(format!(
            "audio format {} (only PCM)",
            audio_format
        )));
    }
    if bits_per_sample != 16 {
        return Err(WavError::Unsupported(format!(
            "{} bits per sample (only 16)",
            bits_per_sample
        )));
    }

    let samples = pcm_data
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();

    Ok(WavInfo {
        sample_rate,
        channels,
        bits_per_sample,
        samples,
    })
}
