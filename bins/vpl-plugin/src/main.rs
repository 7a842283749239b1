//! vpl-plugin - VPL 插件标识查询工具
//!
//! 将插件名称或十六进制文本解析为 16 字节 UID, 并按
//! (实现类别, 组件角色, 编解码器) 查询默认插件.

mod config;
mod logging;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use std::process;

use vplkit_core::{CodecId, ImplClass};
use vplkit_plugin::{
    ComponentRole, PluginParams, PluginUid, default_plugin_uid, known_name, named_uids,
};

use config::CliConfig;

/// VPL 插件标识查询工具
#[derive(Parser, Debug)]
#[command(name = "vpl-plugin", version, about = "VPL 插件标识查询工具")]
struct Cli {
    /// 配置文件路径 (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 日志级别 (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// 输出 JSON 格式
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 解析插件名称或 32 位十六进制 UID
    Resolve {
        /// 插件名称 (如 hevcd_sw) 或十六进制 UID
        #[arg(required = true)]
        texts: Vec<String>,
    },
    /// 查询默认插件
    Default {
        /// 实现类别 (sw / hw)
        #[arg(long = "impl")]
        impl_class: String,
        /// 组件角色 (decode / encode / encode-fei / enc)
        #[arg(long)]
        component: String,
        /// 编解码器 (hevc / vp8 / vp9 ...)
        #[arg(long)]
        codec: String,
    },
    /// 列出全部已知插件名称
    List,
    /// 输出指定名称插件的十六进制 UID
    Hex {
        /// 插件名称
        name: String,
    },
}

// ============================================================
// JSON 输出结构体
// ============================================================

/// 单个插件的查询结果
#[derive(Serialize)]
struct UidInfo {
    input: String,
    uid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
}

/// 默认插件查询结果
#[derive(Serialize)]
struct DefaultInfo {
    impl_class: &'static str,
    component: &'static str,
    codec: &'static str,
    /// 无默认插件时为 None
    uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'static str>,
}

// ============================================================
// 主逻辑
// ============================================================

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("错误: {e:#}");
            process::exit(2);
        }
    };

    if let Err(e) = logging::init("vpl-plugin", cli.verbose, config.log_level.as_deref()) {
        eprintln!("警告: 日志初始化失败: {e:#}");
    }
    tracing::debug!("平台能力: {:?}", config.platform);

    match run(&cli, &config) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("错误: {e:#}");
            process::exit(2);
        }
    }
}

/// 执行子命令, 返回 false 表示有输入未能解析
fn run(cli: &Cli, config: &CliConfig) -> Result<bool> {
    match &cli.command {
        Command::Resolve { texts } => resolve(texts, cli.json),
        Command::Default {
            impl_class,
            component,
            codec,
        } => {
            let impl_class = ImplClass::from_name(impl_class)?;
            let role = ComponentRole::from_name(component)?;
            let codec = CodecId::from_name(codec)?;
            let uid = default_plugin_uid(impl_class, role, codec, &config.platform);
            print_default(impl_class, role, codec, uid, cli.json)?;
            Ok(true)
        }
        Command::List => {
            list(cli.json)?;
            Ok(true)
        }
        Command::Hex { name } => {
            hex(name, cli.json)?;
            Ok(true)
        }
    }
}

fn hex(name: &str, json: bool) -> Result<()> {
    let Some((known, uid)) = named_uids().iter().find(|(n, _)| *n == name) else {
        bail!("未知插件名称: {name}");
    };

    if json {
        let info = UidInfo {
            input: name.to_string(),
            uid: uid.to_hex(),
            name: Some(*known),
        };
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{uid}");
    }
    Ok(())
}

fn resolve(texts: &[String], json: bool) -> Result<bool> {
    let mut all_ok = true;
    let mut infos = Vec::with_capacity(texts.len());

    for text in texts {
        let params = PluginParams::parse_guid(text);
        if !params.is_set() {
            eprintln!("错误: 未知插件标识 '{text}'");
            all_ok = false;
            continue;
        }
        infos.push(UidInfo {
            input: text.clone(),
            uid: params.uid.to_hex(),
            name: known_name(&params.uid),
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&infos)?);
    } else {
        for info in &infos {
            match info.name {
                Some(name) => println!("{}  {}  ({name})", info.input, info.uid),
                None => println!("{}  {}", info.input, info.uid),
            }
        }
    }
    Ok(all_ok)
}

fn print_default(
    impl_class: ImplClass,
    role: ComponentRole,
    codec: CodecId,
    uid: PluginUid,
    json: bool,
) -> Result<()> {
    let info = DefaultInfo {
        impl_class: impl_class.name(),
        component: role.name(),
        codec: codec.name(),
        uid: (!uid.is_null()).then(|| uid.to_hex()),
        name: known_name(&uid),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }
    match (&info.uid, info.name) {
        (None, _) => println!("{impl_class}/{role}/{codec}: 无默认插件"),
        (Some(hex), Some(name)) => println!("{impl_class}/{role}/{codec}: {hex} ({name})"),
        (Some(hex), None) => println!("{impl_class}/{role}/{codec}: {hex}"),
    }
    Ok(())
}

fn list(json: bool) -> Result<()> {
    if json {
        let infos: Vec<UidInfo> = named_uids()
            .iter()
            .map(|(name, uid)| UidInfo {
                input: name.to_string(),
                uid: uid.to_hex(),
                name: Some(*name),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("已知插件:");
    for (name, uid) in named_uids() {
        println!("  {name:<14} {uid}");
    }
    Ok(())
}
