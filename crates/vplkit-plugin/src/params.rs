//! 插件加载请求.
//!
//! 样例程序的命令行允许按 UID 或按动态库路径指定插件, 这里只构造请求,
//! 路径是否存在、UID 是否可加载由后续的加载步骤判断.

use std::path::PathBuf;

use log::debug;

use crate::resolve::resolve_text;
use crate::uid::PluginUid;

/// 插件加载方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PluginLoadType {
    /// 未设置
    #[default]
    Unset,
    /// 按 UID 加载
    Guid,
    /// 按文件路径加载
    File,
}

/// 插件加载参数
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PluginParams {
    /// 加载方式
    pub load_type: PluginLoadType,
    /// 插件 UID (按 UID 加载时有效)
    pub uid: PluginUid,
    /// 插件路径 (按文件加载时有效)
    pub path: PathBuf,
}

impl PluginParams {
    /// 由 UID 文本构造加载请求
    ///
    /// 解析失败时返回未设置的参数, 不报错, 由调用方检查 [`Self::is_set`].
    pub fn parse_guid(text: &str) -> Self {
        match resolve_text(text) {
            Ok(uid) => Self {
                load_type: PluginLoadType::Guid,
                uid,
                ..Self::default()
            },
            Err(e) => {
                debug!("插件 UID 解析失败, 保持未设置: {e}");
                Self::default()
            }
        }
    }

    /// 由文件路径构造加载请求, 不做任何校验
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            load_type: PluginLoadType::File,
            path: path.into(),
            ..Self::default()
        }
    }

    /// 是否已指定加载方式
    pub fn is_set(&self) -> bool {
        self.load_type != PluginLoadType::Unset
    }
}
