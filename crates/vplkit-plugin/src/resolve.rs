//! 插件标识文本解析.
//!
//! 文本先按符号名称查表, 查不到时若长度恰为 32 则按十六进制逐对解码.
//!
//! 十六进制解码是宽松的: 每一对字符按流式数值转换处理, 跳过前导空白,
//! 接受可选的正负号, 读取最长的十六进制数字前缀, 没有数字时结果为 0.
//! 因此包含非十六进制字符的 32 字符文本不会报错, 只会得到对应的零字节.

use std::collections::HashMap;
use std::sync::OnceLock;

use log::debug;
use vplkit_core::{VplError, VplResult};

use crate::uid::{PLUGIN_UID_LEN, PluginUid};

/// 十六进制文本长度 (每字节两个字符)
pub const PLUGIN_UID_HEX_LEN: usize = PLUGIN_UID_LEN * 2;

/// 已知插件的符号名称表, 按声明顺序
static NAMED_PLUGINS: [(&str, PluginUid); 16] = [
    ("hevcd_sw", PluginUid::HEVCD_SW),
    ("hevcd_hw", PluginUid::HEVCD_HW),
    ("hevce_sw", PluginUid::HEVCE_SW),
    ("hevce_gacc", PluginUid::HEVCE_GACC),
    ("hevce_hw", PluginUid::HEVCE_HW),
    ("vp8d_hw", PluginUid::VP8D_HW),
    ("vp8e_hw", PluginUid::VP8E_HW),
    ("vp9d_hw", PluginUid::VP9D_HW),
    ("vp9e_hw", PluginUid::VP9E_HW),
    ("camera_hw", PluginUid::CAMERA_HW),
    ("capture_hw", PluginUid::CAPTURE_HW),
    ("ptir_hw", PluginUid::ITELECINE_HW),
    ("h264_la_hw", PluginUid::H264LA_HW),
    ("aacd", PluginUid::AACD),
    ("aace", PluginUid::AACE),
    ("hevce_fei_hw", PluginUid::HEVCE_FEI_HW),
];

/// 名称索引, 首次使用时构建, 之后只读
fn name_index() -> &'static HashMap<&'static str, PluginUid> {
    static INDEX: OnceLock<HashMap<&'static str, PluginUid>> = OnceLock::new();
    INDEX.get_or_init(|| NAMED_PLUGINS.iter().copied().collect())
}

/// 获取全部已知的 (名称, UID) 对
pub fn named_uids() -> &'static [(&'static str, PluginUid)] {
    &NAMED_PLUGINS
}

/// 反查 UID 对应的符号名称
pub fn known_name(uid: &PluginUid) -> Option<&'static str> {
    NAMED_PLUGINS
        .iter()
        .find(|(_, known)| known.equals(uid))
        .map(|(name, _)| *name)
}

/// 将文本解析为插件 UID
///
/// 1. 与名称表精确匹配 (区分大小写) 时返回对应常量;
/// 2. 否则, 文本恰为 32 字节时按十六进制逐对解码;
/// 3. 否则返回 [`VplError::UnknownPluginId`].
///
/// 需要 "失败即空标识" 语义的调用方可使用 `unwrap_or_default()`.
pub fn resolve_text(text: &str) -> VplResult<PluginUid> {
    if let Some(uid) = name_index().get(text) {
        return Ok(*uid);
    }

    let bytes = text.as_bytes();
    if bytes.len() != PLUGIN_UID_HEX_LEN {
        debug!("插件标识既不是已知名称也不是 32 位十六进制: {text:?}");
        return Err(VplError::UnknownPluginId(text.to_string()));
    }

    let mut uid = PluginUid::NULL;
    for (dst, pair) in uid.0.iter_mut().zip(bytes.chunks_exact(2)) {
        *dst = parse_hex_pair(pair);
    }
    debug!("按十六进制解析插件标识: {text} -> {uid}");
    Ok(uid)
}

/// 宽松解析一对十六进制字符
///
/// 行为等同流式数值提取: 跳过前导空白, 可选符号, 读取最长十六进制前缀.
/// 负号按无符号回绕处理, 最终截断为 8 位.
fn parse_hex_pair(pair: &[u8]) -> u8 {
    let mut rest = pair;
    while let [first, tail @ ..] = rest {
        // 与 C 的 isspace 一致, 垂直制表符也算空白
        if !(first.is_ascii_whitespace() || *first == b'\x0b') {
            break;
        }
        rest = tail;
    }

    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };

    let mut value: u32 = 0;
    for &c in rest {
        match (c as char).to_digit(16) {
            Some(d) => value = value * 16 + d,
            None => break,
        }
    }

    if negative {
        value = value.wrapping_neg();
    }
    value as u8
}
