use crate::config::CompilerConfiguration;
use crate::models::{BuildArguments, TargetConfiguration};
use crate::utils::{check_xml_chars, escape_attribute, wrap_cdata};
use log::debug;
use std::io::{self, Write};

/// 根元素名称，仅在写完整文档时使用
pub const DOCUMENT_ROOT: &str = "CompilerConfiguration";

const INDENT: &str = "  ";

/// 带缩进的简单 XML 写入器，内容统一写为 CDATA
pub struct XmlWriter<'w, W: Write> {
    out: &'w mut W,
    depth: usize,
}

impl<'w, W: Write> XmlWriter<'w, W> {
    pub fn new(out: &'w mut W, depth: usize) -> Self {
        XmlWriter { out, depth }
    }

    fn indent(&mut self) -> io::Result<()> {
        for _ in 0..self.depth {
            self.out.write_all(INDENT.as_bytes())?;
        }
        Ok(())
    }

    pub fn start_element(&mut self, name: &str, attributes: &[(&str, &str)]) -> io::Result<()> {
        for (_, value) in attributes {
            check_xml_chars(value)?;
        }
        self.indent()?;
        write!(self.out, "<{}", name)?;
        for (key, value) in attributes {
            write!(self.out, " {}=\"{}\"", key, escape_attribute(value))?;
        }
        writeln!(self.out, ">")?;
        self.depth += 1;
        Ok(())
    }

    pub fn end_element(&mut self, name: &str) -> io::Result<()> {
        self.depth = self.depth.saturating_sub(1);
        self.indent()?;
        writeln!(self.out, "</{}>", name)
    }

    /// 单行元素：<name><![CDATA[text]]></name>
    /// 文本含 XML 不允许的字符时返回 InvalidData，且不写入任何内容
    pub fn cdata_element(&mut self, name: &str, text: &str) -> io::Result<()> {
        check_xml_chars(text)?;
        self.indent()?;
        writeln!(self.out, "<{}>{}</{}>", name, wrap_cdata(text), name)
    }
}

impl BuildArguments {
    pub fn write_to<W: Write>(&self, x: &mut XmlWriter<W>) -> io::Result<()> {
        x.cdata_element("CompilerArg", &self.compiler_arguments)?;
        x.cdata_element("LinkerArgs", &self.linker_arguments)
    }
}

impl TargetConfiguration {
    /// 写出整个 <TargetConfiguration> 元素（包括 Target 属性）
    pub fn write_to<W: Write>(&self, x: &mut XmlWriter<W>) -> io::Result<()> {
        x.start_element("TargetConfiguration", &[("Target", self.target.as_str())])?;

        x.cdata_element("Compiler", &self.compiler)?;
        x.cdata_element("Linker", &self.linker)?;
        x.cdata_element("ObjectLinkPattern", &self.object_file_link_pattern)?;
        x.cdata_element("IncludePathPattern", &self.include_path_pattern)?;

        x.start_element("DebugArgs", &[])?;
        self.debug_arguments.write_to(x)?;
        x.end_element("DebugArgs")?;

        x.start_element("ReleaseArgs", &[])?;
        self.release_arguments.write_to(x)?;
        x.end_element("ReleaseArgs")?;

        x.end_element("TargetConfiguration")
    }
}

impl CompilerConfiguration {
    /// 写出目标配置和默认库，不包含包裹元素
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut x = XmlWriter::new(out, 1);
        for t in self.targets() {
            t.write_to(&mut x)?;
        }

        x.start_element("DefaultLibs", &[])?;
        for lib in &self.default_libraries {
            x.cdata_element("lib", lib)?;
        }
        x.end_element("DefaultLibs")
    }

    /// 写出完整文档：XML 声明 + 带 Vendor 属性的根元素
    pub fn save<W: Write>(&self, mut out: W) -> io::Result<()> {
        debug!(
            "[generator] Saving {} configuration with {} target(s)",
            self.vendor,
            self.targets().len()
        );
        writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(out, "<{} Vendor=\"{}\">", DOCUMENT_ROOT, self.vendor)?;
        self.write_to(&mut out)?;
        writeln!(out, "</{}>", DOCUMENT_ROOT)?;
        out.flush()
    }

    /// 先在内存中生成完整文档，失败时不会留下半个文档
    pub fn to_xml(&self) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.save(&mut buffer)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
