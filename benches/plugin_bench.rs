//! vplkit 性能基准测试.
//!
//! 覆盖插件标识的名称查表、十六进制解析和默认插件选择.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vplkit::core::{CodecId, ImplClass};
use vplkit::plugin::{ComponentRole, PlatformCaps, default_plugin_uid, resolve_text};

fn bench_resolve_name(c: &mut Criterion) {
    c.bench_function("resolve_name_hevce_fei_hw", |b| {
        b.iter(|| resolve_text(black_box("hevce_fei_hw")).unwrap());
    });
}

fn bench_resolve_hex(c: &mut Criterion) {
    c.bench_function("resolve_hex_32", |b| {
        b.iter(|| resolve_text(black_box("5418a70666f94d5cb4f7b1caee86339b")).unwrap());
    });
}

fn bench_default_uid(c: &mut Criterion) {
    let caps = PlatformCaps::current();
    c.bench_function("default_uid_all_codecs", |b| {
        b.iter(|| {
            for codec in CodecId::ALL {
                black_box(default_plugin_uid(
                    ImplClass::Hardware,
                    ComponentRole::Encode,
                    black_box(codec),
                    &caps,
                ));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_resolve_name,
    bench_resolve_hex,
    bench_default_uid
);
criterion_main!(benches);
