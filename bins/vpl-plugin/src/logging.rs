//! 日志初始化模块.
//!
//! 双输出:
//! - console: 彩色, 输出到 stderr, 默认 warn, -v 起随 verbosity 提升
//! - file: 无色, 默认 info, 可通过 -v/-vv, 配置文件 log_level 或 VPL_LOG 环境变量调整
//!
//! 日志文件输出到 $cwd/logs/{prefix}.{date}.log

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Timelike};
use std::sync::OnceLock;
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, FormatEvent, FormatFields, format::Writer},
    layer::{Layer, SubscriberExt},
    registry::LookupSpan,
    util::SubscriberInitExt,
};

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// verbosity 对应的日志级别: 0=info, 1=debug, 2+=trace
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// 初始化日志系统
///
/// - `file_prefix`: 日志文件前缀
/// - `verbosity`: -v 次数
/// - `configured_level`: 配置文件中的级别, 优先于 verbosity
pub fn init(file_prefix: &str, verbosity: u8, configured_level: Option<&str>) -> Result<()> {
    std::fs::create_dir_all("logs").context("创建日志目录失败")?;

    let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::DAILY)
        .filename_prefix(file_prefix)
        .filename_suffix("log")
        .build("logs")
        .context("创建日志文件失败")?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    LOG_GUARD.set(guard).ok();

    // Console: 查询结果走 stdout, 日志走 stderr, 默认只显示警告
    let console_level = if verbosity == 0 {
        "warn"
    } else {
        level_for_verbosity(verbosity)
    };
    let console_layer = fmt::Layer::default()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .event_format(LineFormatter::Console)
        .with_filter(EnvFilter::new(console_level));

    // File: VPL_LOG 环境变量 > 配置文件 > -v
    let file_level = configured_level.unwrap_or_else(|| level_for_verbosity(verbosity));
    let file_filter =
        EnvFilter::try_from_env("VPL_LOG").unwrap_or_else(|_| EnvFilter::new(file_level));

    let file_layer = fmt::Layer::default()
        .with_writer(non_blocking)
        .with_ansi(false)
        .event_format(LineFormatter::File)
        .with_filter(file_filter);

    Registry::default()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("日志系统已初始化")?;

    Ok(())
}

/// 单行格式: 时间戳 + 级别 + 消息
///
/// console 彩色显示级别, file 无色并额外输出 target.
#[derive(Clone, Copy)]
enum LineFormatter {
    Console,
    File,
}

impl LineFormatter {
    /// 消息前的行首部分
    fn prefix(self, level: &tracing::Level, target: &str) -> String {
        match self {
            Self::Console => {
                let color = match *level {
                    tracing::Level::ERROR => "\x1b[31m",
                    tracing::Level::WARN => "\x1b[33m",
                    tracing::Level::INFO => "\x1b[32m",
                    _ => "\x1b[34m",
                };
                format!("{} {color}{level:5}\x1b[0m > ", timestamp())
            }
            Self::File => format!("{} {level:5} {target} > ", timestamp()),
        }
    }
}

impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(writer, "{}", self.prefix(meta.level(), meta.target()))?;
        ctx.format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// `[MM-DD HH:MM:SS.mmm]`
fn timestamp() -> String {
    let now = Local::now();
    format!(
        "[{:02}-{:02} {:02}:{:02}:{:02}.{:03}]",
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
        now.timestamp_subsec_millis(),
    )
}
