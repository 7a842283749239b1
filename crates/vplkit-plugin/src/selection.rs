//! 默认插件选择.
//!
//! 按 (实现类别, 组件角色, 编解码器) 三元组查表, 表中没有的组合返回
//! [`PluginUid::NULL`]. 这里没有错误路径, 调用方通过 `is_null()` 判断.

use log::trace;
use vplkit_core::{CodecId, ImplClass};

use crate::component::{ComponentRole, ComponentType};
use crate::platform::PlatformCaps;
use crate::uid::PluginUid;

/// 获取默认插件 UID
pub fn default_plugin_uid(
    impl_class: ImplClass,
    role: ComponentRole,
    codec: CodecId,
    caps: &PlatformCaps,
) -> PluginUid {
    use CodecId::{H265, Vp8, Vp9};
    use ComponentRole::{Decode, Enc, Encode, EncodeFei};
    use ImplClass::{Hardware, Software};

    let uid = match (impl_class, role, codec) {
        (Software, Decode, H265) => PluginUid::HEVCD_SW,
        (Software, Encode, H265) => PluginUid::HEVCE_SW,

        (Hardware, Decode, H265) if caps.hw_decode_plugins => PluginUid::HEVCD_HW,
        (Hardware, Decode, Vp8) if caps.hw_decode_plugins => PluginUid::VP8D_HW,
        (Hardware, Decode, Vp9) if caps.hw_decode_plugins => PluginUid::VP9D_HW,
        (Hardware, Encode, H265) => PluginUid::HEVCE_HW,
        (Hardware, Encode, Vp8) => PluginUid::VP8E_HW,
        (Hardware, EncodeFei, H265) if caps.fei_encode_plugin => PluginUid::HEVC_FEI_ENCODE,
        // HEVC FEI 走 ENC 接口
        (Hardware, Enc, H265) => PluginUid::HEVCE_FEI_HW,

        _ => PluginUid::NULL,
    };

    trace!("默认插件: {impl_class:?}/{role}/{codec} -> {uid}");
    uid
}

/// 按组件位掩码获取默认插件 UID, 掩码不对应任何角色时返回空标识
pub fn default_plugin_uid_for_mask(
    impl_class: ImplClass,
    component: ComponentType,
    codec: CodecId,
    caps: &PlatformCaps,
) -> PluginUid {
    match ComponentRole::try_from(component) {
        Ok(role) => default_plugin_uid(impl_class, role, codec, caps),
        Err(_) => PluginUid::NULL,
    }
}
