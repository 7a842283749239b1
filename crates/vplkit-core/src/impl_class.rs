//! 实现类别.
//!
//! 对标 VPL 的 `MFX_IMPL_SOFTWARE` / `MFX_IMPL_HARDWARE`.

use std::fmt;

use crate::error::{VplError, VplResult};

/// 编解码实现类别: 纯软件或专用硬件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImplClass {
    /// 软件实现
    Software,
    /// 硬件实现
    Hardware,
}

impl ImplClass {
    /// 获取简短名称 (`sw` / `hw`)
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Software => "sw",
            Self::Hardware => "hw",
        }
    }

    /// 按名称解析, 接受 `sw`/`software` 与 `hw`/`hardware`
    pub fn from_name(name: &str) -> VplResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "sw" | "software" => Ok(Self::Software),
            "hw" | "hardware" => Ok(Self::Hardware),
            _ => Err(VplError::InvalidArgument(format!("未知实现类别: {name}"))),
        }
    }
}

impl fmt::Display for ImplClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Software => "软件",
            Self::Hardware => "硬件",
        };
        write!(f, "{name}")
    }
}
