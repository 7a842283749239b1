//! 插件标识 (UID).
//!
//! 对标 VPL 的 `mfxPluginUID`: 固定 16 字节, 逐字节比较.

use std::fmt;
use std::str::FromStr;

use vplkit_core::VplError;

/// 插件 UID 字节长度
pub const PLUGIN_UID_LEN: usize = 16;

/// 插件标识
///
/// 字节顺序即声明顺序, 十六进制文本的第一对字符对应第一个字节.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct PluginUid(pub [u8; PLUGIN_UID_LEN]);

impl PluginUid {
    /// 空标识 (全零), 表示 "无插件"
    pub const NULL: Self = Self([0; PLUGIN_UID_LEN]);

    /// HEVC 软件解码器
    pub const HEVCD_SW: Self = Self([
        0x15, 0xdd, 0x93, 0x68, 0x25, 0xad, 0x47, 0x5e, 0xa3, 0x4e, 0x35, 0xf3, 0xf5, 0x42, 0x17,
        0xa6,
    ]);
    /// HEVC 硬件解码器
    pub const HEVCD_HW: Self = Self([
        0x33, 0xa6, 0x1c, 0x0b, 0x4c, 0x27, 0x45, 0x4c, 0xa8, 0xd8, 0x5d, 0xde, 0x75, 0x7c, 0x6f,
        0x8e,
    ]);
    /// HEVC 软件编码器
    pub const HEVCE_SW: Self = Self([
        0x2f, 0xca, 0x99, 0x74, 0x9f, 0xdb, 0x49, 0xae, 0xb1, 0x21, 0xa5, 0xb6, 0x3e, 0xf5, 0x68,
        0xf7,
    ]);
    /// HEVC GPU 加速编码器
    pub const HEVCE_GACC: Self = Self([
        0xe5, 0x40, 0x0a, 0x06, 0xc7, 0x4d, 0x41, 0xf5, 0xb1, 0x2d, 0x43, 0x0b, 0xba, 0xa2, 0x3d,
        0x0b,
    ]);
    /// HEVC 硬件编码器
    pub const HEVCE_HW: Self = Self([
        0x6f, 0xad, 0xc7, 0x91, 0xa0, 0xc2, 0xeb, 0x47, 0x9a, 0xb6, 0xdc, 0xd5, 0xea, 0x9d, 0xa3,
        0x47,
    ]);
    /// VP8 硬件解码器
    pub const VP8D_HW: Self = Self([
        0xf6, 0x22, 0x39, 0x4d, 0x8d, 0x87, 0x45, 0x2f, 0x87, 0x8c, 0x51, 0xf2, 0xfc, 0x9b, 0x41,
        0x31,
    ]);
    /// VP8 硬件编码器
    pub const VP8E_HW: Self = Self([
        0xbf, 0xfc, 0x51, 0x8c, 0xde, 0x13, 0x4d, 0xf9, 0x8a, 0x96, 0xf4, 0xcf, 0x81, 0x6c, 0x0f,
        0xac,
    ]);
    /// VP9 硬件解码器
    pub const VP9D_HW: Self = Self([
        0xa9, 0x22, 0x39, 0x4d, 0x8d, 0x87, 0x45, 0x2f, 0x87, 0x8c, 0x51, 0xf2, 0xfc, 0x9b, 0x41,
        0x31,
    ]);
    /// VP9 硬件编码器
    pub const VP9E_HW: Self = Self([
        0xce, 0x44, 0xef, 0x6f, 0x1a, 0x6d, 0x22, 0x46, 0xb4, 0x12, 0xbb, 0x38, 0xd6, 0xe4, 0x51,
        0x82,
    ]);
    /// 相机管线
    pub const CAMERA_HW: Self = Self([
        0x54, 0x54, 0x26, 0x16, 0x24, 0x33, 0x41, 0xe6, 0x93, 0xae, 0x89, 0x99, 0x42, 0xce, 0x73,
        0x55,
    ]);
    /// 屏幕采集
    pub const CAPTURE_HW: Self = Self([
        0x22, 0xd6, 0x2c, 0x07, 0xe6, 0x72, 0x40, 0x8f, 0xbb, 0x4c, 0xc2, 0x0e, 0xd7, 0xa0, 0x53,
        0xe4,
    ]);
    /// 反电视电影 (PTIR)
    pub const ITELECINE_HW: Self = Self([
        0xe7, 0x44, 0x75, 0x3a, 0xcd, 0x74, 0x40, 0x2e, 0x89, 0xa2, 0xee, 0x06, 0x35, 0x49, 0x61,
        0x79,
    ]);
    /// H.264 前瞻 (look-ahead)
    pub const H264LA_HW: Self = Self([
        0x58, 0x8f, 0x11, 0x85, 0xd4, 0x7b, 0x42, 0x96, 0x8d, 0xea, 0x37, 0x7b, 0xb5, 0xd0, 0xdc,
        0xb4,
    ]);
    /// AAC 解码器
    pub const AACD: Self = Self([
        0xe9, 0x34, 0x67, 0x25, 0xac, 0x2f, 0x4c, 0x93, 0xaa, 0x58, 0x5c, 0x11, 0xc7, 0x08, 0x7c,
        0xf4,
    ]);
    /// AAC 编码器
    pub const AACE: Self = Self([
        0xb2, 0xa2, 0xa0, 0x5a, 0x4e, 0xac, 0x46, 0xbf, 0xa9, 0xde, 0x7e, 0x80, 0xc9, 0x8d, 0x2e,
        0x18,
    ]);
    /// HEVC FEI 硬件插件 (ENC 接口)
    pub const HEVCE_FEI_HW: Self = Self([
        0x87, 0xe0, 0xe8, 0x02, 0x07, 0x37, 0x52, 0x40, 0x85, 0x25, 0x15, 0xcf, 0x4a, 0x5e, 0xdd,
        0xe6,
    ]);
    /// HEVC FEI 编码插件 (ENCODE 接口), 与 `HEVCE_FEI_HW` 是不同的插件
    pub const HEVC_FEI_ENCODE: Self = Self([
        0x54, 0x18, 0xa7, 0x06, 0x66, 0xf9, 0x4d, 0x5c, 0xb4, 0xf7, 0xb1, 0xca, 0xee, 0x86, 0x33,
        0x9b,
    ]);

    /// 由 16 字节构造
    pub const fn new(bytes: [u8; PLUGIN_UID_LEN]) -> Self {
        Self(bytes)
    }

    /// 获取原始字节
    pub const fn as_bytes(&self) -> &[u8; PLUGIN_UID_LEN] {
        &self.0
    }

    /// 逐字节比较两个标识, 16 个字节全部相同才返回 true
    pub fn equals(&self, other: &PluginUid) -> bool {
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a == b)
    }

    /// 是否为空标识
    pub fn is_null(&self) -> bool {
        self.equals(&Self::NULL)
    }

    /// 编码为 32 个小写十六进制字符
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl From<[u8; PLUGIN_UID_LEN]> for PluginUid {
    fn from(bytes: [u8; PLUGIN_UID_LEN]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for PluginUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for PluginUid {
    type Err = VplError;

    /// 与 [`crate::resolve_text`] 相同: 先查名称表, 再按十六进制解析
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::resolve::resolve_text(s)
    }
}
