//! 统一错误类型定义.
//!
//! 所有 vplkit crate 共用的错误类型, 支持跨模块传播.

use thiserror::Error;

/// vplkit 统一错误类型
#[derive(Debug, Error)]
pub enum VplError {
    /// 插件标识文本既不是已知名称, 也不是 32 位十六进制串
    #[error("未知插件标识: {0}")]
    UnknownPluginId(String),

    /// 无效参数
    #[error("无效参数: {0}")]
    InvalidArgument(String),
}

/// vplkit 统一 Result 类型
pub type VplResult<T> = Result<T, VplError>;
