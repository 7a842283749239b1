//! # vplkit-plugin
//!
//! VPL/MediaSDK 插件标识 (16 字节 UID) 的解析与默认插件选择.
//!
//! - 按符号名称 (`hevcd_sw`, `vp9e_hw` 等) 或 32 位十六进制串解析 UID
//! - 按 (实现类别, 组件角色, 编解码器) 三元组推导默认插件 UID
//! - 构造插件加载请求 (按 UID 或按文件路径)
//!
//! ## 使用示例
//!
//! ```rust
//! use vplkit_core::{CodecId, ImplClass};
//! use vplkit_plugin::{ComponentRole, PlatformCaps, PluginUid, default_plugin_uid, resolve_text};
//!
//! let uid = resolve_text("hevcd_sw").unwrap();
//! assert_eq!(uid, PluginUid::HEVCD_SW);
//!
//! let caps = PlatformCaps::default();
//! let uid = default_plugin_uid(ImplClass::Hardware, ComponentRole::Encode, CodecId::Vp8, &caps);
//! assert_eq!(uid, PluginUid::VP8E_HW);
//! ```

pub mod component;
pub mod params;
pub mod platform;
pub mod resolve;
pub mod selection;
pub mod uid;

// 重导出常用类型
pub use component::{ComponentRole, ComponentType};
pub use params::{PluginLoadType, PluginParams};
pub use platform::PlatformCaps;
pub use resolve::{known_name, named_uids, resolve_text};
pub use selection::{default_plugin_uid, default_plugin_uid_for_mask};
pub use uid::PluginUid;
