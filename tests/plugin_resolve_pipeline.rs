//! 集成测试: 插件标识解析与默认插件选择的完整流程.
//!
//! 测试流程: 名称/十六进制文本 → UID → 加载请求
//! 以及: (实现类别, 组件掩码, 编解码器) → 默认 UID → 十六进制 → 再解析

use vplkit::core::{CodecId, ImplClass, VplError};
use vplkit::plugin::{
    ComponentRole, ComponentType, PlatformCaps, PluginLoadType, PluginParams, PluginUid,
    default_plugin_uid, default_plugin_uid_for_mask, known_name, named_uids, resolve_text,
};

/// 辅助: 全部平台能力组合
fn all_caps() -> Vec<PlatformCaps> {
    let mut caps = Vec::new();
    for hw_decode_plugins in [false, true] {
        for fei_encode_plugin in [false, true] {
            caps.push(PlatformCaps {
                hw_decode_plugins,
                fei_encode_plugin,
            });
        }
    }
    caps
}

#[test]
fn test_文档中的名称常量() {
    let expected = [
        ("hevcd_sw", PluginUid::HEVCD_SW),
        ("hevce_hw", PluginUid::HEVCE_HW),
        ("vp9e_hw", PluginUid::VP9E_HW),
        ("aacd", PluginUid::AACD),
        ("ptir_hw", PluginUid::ITELECINE_HW),
        ("hevce_fei_hw", PluginUid::HEVCE_FEI_HW),
    ];
    for (name, uid) in expected {
        assert_eq!(resolve_text(name).unwrap(), uid);
        assert_eq!(name.parse::<PluginUid>().unwrap(), uid);
    }
}

#[test]
fn test_默认插件经十六进制往返() {
    for caps in all_caps() {
        for impl_class in [ImplClass::Software, ImplClass::Hardware] {
            for role in [
                ComponentRole::Decode,
                ComponentRole::Encode,
                ComponentRole::EncodeFei,
                ComponentRole::Enc,
            ] {
                for codec in CodecId::ALL {
                    let uid = default_plugin_uid(impl_class, role, codec, &caps);
                    if uid.is_null() {
                        continue;
                    }
                    let hex = uid.to_hex();
                    assert_eq!(hex.len(), 32);
                    assert_eq!(resolve_text(&hex).unwrap(), uid);

                    let params = PluginParams::parse_guid(&hex);
                    assert_eq!(params.load_type, PluginLoadType::Guid);
                    assert_eq!(params.uid, uid);
                }
            }
        }
    }
}

#[test]
fn test_默认插件均有名称或为fei编码() {
    // 除 HEVC_FEI_ENCODE 外, 所有默认插件都能在名称表里找到
    for caps in all_caps() {
        for codec in CodecId::ALL {
            let mask = ComponentType::ENCODE | ComponentType::FEI;
            let uid = default_plugin_uid_for_mask(ImplClass::Hardware, mask, codec, &caps);
            if !uid.is_null() {
                assert_eq!(uid, PluginUid::HEVC_FEI_ENCODE);
                assert_eq!(known_name(&uid), None);
            }
            for mask in [ComponentType::DECODE, ComponentType::ENCODE, ComponentType::ENC] {
                let uid = default_plugin_uid_for_mask(ImplClass::Hardware, mask, codec, &caps);
                if !uid.is_null() {
                    assert!(known_name(&uid).is_some(), "{uid} 没有名称");
                }
            }
        }
    }
}

#[test]
fn test_硬件解码受平台能力控制() {
    let with = PlatformCaps {
        hw_decode_plugins: true,
        fei_encode_plugin: false,
    };
    let without = PlatformCaps {
        hw_decode_plugins: false,
        fei_encode_plugin: false,
    };
    let hevc = |caps: &PlatformCaps| {
        default_plugin_uid(ImplClass::Hardware, ComponentRole::Decode, CodecId::H265, caps)
    };
    assert_eq!(hevc(&with), PluginUid::HEVCD_HW);
    assert_eq!(hevc(&without), PluginUid::NULL);
}

#[test]
fn test_未知文本() {
    let err = resolve_text("hevcd").unwrap_err();
    assert!(matches!(err, VplError::UnknownPluginId(ref t) if t == "hevcd"));
    assert!(!PluginParams::parse_guid("hevcd").is_set());

    let params = PluginParams::from_path("hevcd");
    assert_eq!(params.load_type, PluginLoadType::File);
}

#[test]
fn test_名称表无重复() {
    let names = named_uids();
    for (i, (name_a, uid_a)) in names.iter().enumerate() {
        for (name_b, uid_b) in &names[i + 1..] {
            assert_ne!(name_a, name_b);
            assert_ne!(uid_a, uid_b, "{name_a} 与 {name_b} 的 UID 重复");
        }
    }
}

#[test]
fn test_版本号() {
    assert!(!vplkit::version().is_empty());
}
