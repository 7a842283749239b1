//! # vplkit-core
//!
//! vplkit 核心库, 提供所有 crate 共用的错误类型与基础枚举.
//!
//! 编解码器标识对应 VPL/MediaSDK 的 `MFX_CODEC_*` FourCC,
//! 实现类别对应 `MFX_IMPL_SOFTWARE` / `MFX_IMPL_HARDWARE`.

pub mod codec_id;
pub mod error;
pub mod impl_class;

// 重导出常用类型
pub use codec_id::CodecId;
pub use error::{VplError, VplResult};
pub use impl_class::ImplClass;
