use env_logger::{Builder, Target};
use log::{LevelFilter, SetLoggerError};
use std::io;

/// 初始化日志：debug 模式下输出 Debug 级别，否则 Info
///
/// RUST_LOG 环境变量同样生效。
pub fn config_logger(debug_mode: bool) -> Result<(), SetLoggerError> {
    let mut builder = Builder::from_default_env();

    builder
        .target(Target::Stderr)
        .format_module_path(false)
        .format_timestamp(None);

    if debug_mode {
        builder.filter(None, LevelFilter::Debug);
    } else {
        builder.filter(None, LevelFilter::Info);
    }

    builder.try_init()
}

/// XML 1.0 的 Char 产生式
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// 检查文本能否写入 XML，遇到非法字符时返回 InvalidData
pub fn check_xml_chars(text: &str) -> io::Result<()> {
    match text.chars().find(|&c| !is_xml_char(c)) {
        Some(c) => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("character U+{:04X} cannot be written to XML: {:?}", c as u32, text),
        )),
        None => Ok(()),
    }
}

/// 把任意文本包装成 CDATA 段
///
/// 文本中的 "]]>" 会拆到两个相邻的 CDATA 段中，读回时拼接即可还原。
/// '\r' 在 CDATA 内会被换行规范化吞掉，改为在段之间写 &#xD; 字符引用。
pub fn wrap_cdata(text: &str) -> String {
    let body = text
        .replace("]]>", "]]]]><![CDATA[>")
        .replace('\r', "]]>&#xD;<![CDATA[");
    format!("<![CDATA[{}]]>", body)
}

/// 转义属性值中的特殊字符
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            // 属性值中的空白会被规范化为空格
            '\t' => escaped.push_str("&#x9;"),
            '\n' => escaped.push_str("&#xA;"),
            '\r' => escaped.push_str("&#xD;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
