//! 组件类型与组件角色.
//!
//! `ComponentType` 是样例程序中使用的组件位掩码 (解码/编码/VPP/ENC/FEI),
//! `ComponentRole` 是默认插件选择真正区分的四种角色.

use std::fmt;

use bitflags::bitflags;
use vplkit_core::{VplError, VplResult};

bitflags! {
    /// 组件类型位掩码
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ComponentType: u32 {
        /// 视频解码
        const DECODE = 0x0001;
        /// 视频编码
        const ENCODE = 0x0002;
        /// 视频处理
        const VPP    = 0x0004;
        /// ENC (仅运动估计/模式决策的编码接口)
        const ENC    = 0x0008;
        /// FEI 修饰位
        const FEI    = 0x1000;
    }
}

/// 组件角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentRole {
    /// 解码
    Decode,
    /// 编码
    Encode,
    /// 带 FEI 的编码
    EncodeFei,
    /// 仅 ENC 接口
    Enc,
}

impl ComponentRole {
    /// 获取命令行使用的名称
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Decode => "decode",
            Self::Encode => "encode",
            Self::EncodeFei => "encode-fei",
            Self::Enc => "enc",
        }
    }

    /// 按名称解析
    pub fn from_name(name: &str) -> VplResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "decode" | "dec" => Ok(Self::Decode),
            "encode" => Ok(Self::Encode),
            "encode-fei" | "encode_fei" | "fei" => Ok(Self::EncodeFei),
            "enc" => Ok(Self::Enc),
            _ => Err(VplError::InvalidArgument(format!("未知组件角色: {name}"))),
        }
    }

    /// 对应的组件位掩码
    pub const fn component_type(&self) -> ComponentType {
        match self {
            Self::Decode => ComponentType::DECODE,
            Self::Encode => ComponentType::ENCODE,
            Self::EncodeFei => ComponentType::ENCODE.union(ComponentType::FEI),
            Self::Enc => ComponentType::ENC,
        }
    }
}

impl fmt::Display for ComponentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<ComponentType> for ComponentRole {
    type Error = VplError;

    /// 仅精确匹配四种组合, 其余掩码 (如 VPP, DECODE|ENCODE) 均不对应角色
    fn try_from(value: ComponentType) -> Result<Self, Self::Error> {
        [Self::Decode, Self::Encode, Self::EncodeFei, Self::Enc]
            .into_iter()
            .find(|role| role.component_type() == value)
            .ok_or_else(|| {
                VplError::InvalidArgument(format!("组件掩码 {:#06x} 不对应任何角色", value.bits()))
            })
    }
}
