//! 平台能力标志.
//!
//! 某些组件角色只在部分平台上有独立插件: Android 上解码器内置于运行时,
//! 不需要硬件解码插件; Windows 上没有 HEVC FEI 编码插件.
//! 这些差异以运行时标志表达, 同一个二进制可以测试全部组合.

use serde::{Deserialize, Serialize};

/// 平台能力
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformCaps {
    /// 是否使用独立的硬件解码插件 (HEVC/VP8/VP9)
    pub hw_decode_plugins: bool,
    /// 是否提供 HEVC FEI 编码插件
    pub fei_encode_plugin: bool,
}

impl PlatformCaps {
    /// 全部能力开启
    pub const ALL: Self = Self {
        hw_decode_plugins: true,
        fei_encode_plugin: true,
    };

    /// Android: 解码器内置于运行时
    pub const ANDROID: Self = Self {
        hw_decode_plugins: false,
        fei_encode_plugin: true,
    };

    /// Windows: 无 FEI 编码插件
    pub const WINDOWS: Self = Self {
        hw_decode_plugins: true,
        fei_encode_plugin: false,
    };

    /// 按当前编译目标推导
    pub fn current() -> Self {
        Self {
            hw_decode_plugins: !cfg!(target_os = "android"),
            fei_encode_plugin: !cfg!(target_os = "windows"),
        }
    }
}

impl Default for PlatformCaps {
    fn default() -> Self {
        Self::ALL
    }
}
