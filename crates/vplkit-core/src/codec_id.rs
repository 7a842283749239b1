//! 编解码器标识符.
//!
//! 对标 VPL 的 `MFX_CODEC_*` 常量, 每个值同时携带其 FourCC 编码.

use std::fmt;

use crate::error::{VplError, VplResult};

/// 按 VPL 的 `MFX_MAKEFOURCC` 规则打包四个 ASCII 字符 (小端)
pub const fn make_fourcc(code: [u8; 4]) -> u32 {
    (code[0] as u32) | (code[1] as u32) << 8 | (code[2] as u32) << 16 | (code[3] as u32) << 24
}

/// 编解码器标识符
///
/// 唯一标识一种编解码算法, 插件选择逻辑将其视为不透明值.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CodecId {
    // ========================
    // 视频编解码器
    // ========================
    /// H.264 / AVC
    H264,
    /// H.265 / HEVC
    H265,
    /// MPEG-2 Video
    Mpeg2,
    /// VC-1
    Vc1,
    /// VP8
    Vp8,
    /// VP9
    Vp9,
    /// AV1
    Av1,
    /// Motion JPEG
    Jpeg,

    // ========================
    // 音频编解码器 (旧版音频插件)
    // ========================
    /// AAC
    Aac,
    /// MP3
    Mp3,
}

impl CodecId {
    /// 全部已知编解码器, 按声明顺序
    pub const ALL: [CodecId; 10] = [
        Self::H264,
        Self::H265,
        Self::Mpeg2,
        Self::Vc1,
        Self::Vp8,
        Self::Vp9,
        Self::Av1,
        Self::Jpeg,
        Self::Aac,
        Self::Mp3,
    ];

    /// 获取 VPL 使用的 FourCC 编码
    pub const fn fourcc(&self) -> u32 {
        let code = match self {
            Self::H264 => *b"AVC ",
            Self::H265 => *b"HEVC",
            Self::Mpeg2 => *b"MPG2",
            Self::Vc1 => *b"VC1 ",
            Self::Vp8 => *b"VP8 ",
            Self::Vp9 => *b"VP9 ",
            Self::Av1 => *b"AV1 ",
            Self::Jpeg => *b"JPEG",
            Self::Aac => *b"AAC ",
            Self::Mp3 => *b"MP3 ",
        };
        make_fourcc(code)
    }

    /// 由 FourCC 编码反查编解码器
    pub fn from_fourcc(fourcc: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.fourcc() == fourcc)
    }

    /// 获取编解码器的人类可读名称
    pub const fn name(&self) -> &'static str {
        match self {
            Self::H264 => "h264",
            Self::H265 => "hevc",
            Self::Mpeg2 => "mpeg2",
            Self::Vc1 => "vc1",
            Self::Vp8 => "vp8",
            Self::Vp9 => "vp9",
            Self::Av1 => "av1",
            Self::Jpeg => "jpeg",
            Self::Aac => "aac",
            Self::Mp3 => "mp3",
        }
    }

    /// 按名称解析编解码器, 接受 `name()` 的输出以及常见别名
    pub fn from_name(name: &str) -> VplResult<Self> {
        let lower = name.to_ascii_lowercase();
        let id = match lower.as_str() {
            "h264" | "avc" => Self::H264,
            "hevc" | "h265" => Self::H265,
            "mpeg2" | "mpg2" => Self::Mpeg2,
            "vc1" => Self::Vc1,
            "vp8" => Self::Vp8,
            "vp9" => Self::Vp9,
            "av1" => Self::Av1,
            "jpeg" | "mjpeg" => Self::Jpeg,
            "aac" => Self::Aac,
            "mp3" => Self::Mp3,
            _ => {
                return Err(VplError::InvalidArgument(format!("未知编解码器名称: {name}")));
            }
        };
        Ok(id)
    }
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
