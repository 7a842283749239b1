//! # vplkit
//!
//! VPL/MediaSDK 样例工具集.
//!
//! 编解码 SDK 本身是外部依赖, 这里只提供调用 SDK 之前需要的纯逻辑:
//! - **插件标识**: 符号名称 / 十六进制文本到 16 字节 UID 的解析
//! - **默认插件**: 按 (实现类别, 组件角色, 编解码器) 选择默认插件
//! - **加载请求**: 按 UID 或按文件路径构造插件加载参数
//!
//! # 快速开始
//!
//! ```rust
//! use vplkit::plugin::{PluginUid, resolve_text};
//!
//! let uid = resolve_text("vp9e_hw").unwrap();
//! assert_eq!(uid, PluginUid::VP9E_HW);
//! println!("vp9e_hw = {uid}");
//! ```
//!
//! # Crate 结构
//!
//! | Crate | 功能 |
//! |-------|------|
//! | `vplkit-core` | 错误类型、编解码器标识、实现类别 |
//! | `vplkit-plugin` | 插件标识解析与默认插件选择 |

/// 核心类型
pub use vplkit_core as core;

/// 插件标识解析与默认插件选择
pub use vplkit_plugin as plugin;

/// 获取 vplkit 版本号
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
