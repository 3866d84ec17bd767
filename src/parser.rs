use crate::config::CompilerConfiguration;
use crate::error::Result;
use crate::models::{BuildArguments, CompileTarget, CompilerVendor, TargetConfiguration};
use log::{debug, trace, warn};
use roxmltree::{Document, Node};
use std::io::Read;

/// 拼接元素下的全部文本（CDATA 在 roxmltree 中同样是文本节点）
fn element_text(node: Node) -> String {
    node.children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

fn skip(parent: &str, node: Node) {
    trace!("[parser] Skipping unknown <{}> in <{}>", node.tag_name().name(), parent);
}

impl BuildArguments {
    /// 从 <DebugArgs>/<ReleaseArgs> 元素读取参数，缺失的子元素保持原值
    pub fn read_from(&mut self, node: Node) {
        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "CompilerArg" => self.compiler_arguments = element_text(child),
                // 旧版本写入的是 LinkerArg
                "LinkerArgs" | "LinkerArg" => self.linker_arguments = element_text(child),
                _ => skip("BuildArguments", child),
            }
        }
    }
}

impl TargetConfiguration {
    /// 从 <TargetConfiguration Target="..."> 元素读取
    pub fn read_from(node: Node) -> Result<Self> {
        let target = match node.attribute("Target") {
            Some(name) => name.parse::<CompileTarget>()?,
            None => {
                warn!("[parser] TargetConfiguration without Target attribute, assuming Executable");
                CompileTarget::default()
            }
        };

        let mut t = TargetConfiguration::new(target);
        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "Compiler" => t.compiler = element_text(child),
                "Linker" => t.linker = element_text(child),
                "ObjectLinkPattern" => t.object_file_link_pattern = element_text(child),
                "IncludePathPattern" => t.include_path_pattern = element_text(child),
                "DebugArgs" => t.debug_arguments.read_from(child),
                "ReleaseArgs" => t.release_arguments.read_from(child),
                _ => skip("TargetConfiguration", child),
            }
        }
        Ok(t)
    }
}

impl CompilerConfiguration {
    /// 读取调用方包裹元素下的目标配置和默认库
    ///
    /// 已存在的同类目标会被替换，新目标按文档顺序追加。
    /// 全部子元素解析成功后才写入 self，出错时 self 保持不变。
    pub fn read_from(&mut self, node: Node) -> Result<()> {
        let mut targets = Vec::new();
        let mut libraries = Vec::new();

        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "TargetConfiguration" => {
                    let t = TargetConfiguration::read_from(child)?;
                    debug!("[parser] Loaded target configuration {}", t.target);
                    targets.push(t);
                }
                "DefaultLibs" => {
                    for lib in child.children().filter(|n| n.is_element()) {
                        if lib.tag_name().name() == "lib" {
                            libraries.push(element_text(lib));
                        } else {
                            skip("DefaultLibs", lib);
                        }
                    }
                }
                _ => skip("CompilerConfiguration", child),
            }
        }

        for t in targets {
            self.upsert_target_configuration(t);
        }
        self.default_libraries.extend(libraries);
        Ok(())
    }

    /// 解析完整文档，根元素的 Vendor 属性给出厂商
    pub fn from_xml(xml_content: &str) -> Result<Self> {
        let doc = Document::parse(xml_content)?;
        let root = doc.root_element();

        let vendor = match root.attribute("Vendor") {
            Some(name) => name.parse::<CompilerVendor>()?,
            None => {
                warn!("[parser] No Vendor attribute on <{}>, assuming DMD", root.tag_name().name());
                CompilerVendor::default()
            }
        };

        let mut cfg = CompilerConfiguration::new(vendor);
        cfg.read_from(root)?;
        debug!(
            "[parser] Loaded {} configuration with {} target(s), {} default lib(s)",
            vendor,
            cfg.targets().len(),
            cfg.default_libraries.len()
        );
        Ok(cfg)
    }

    pub fn load<R: Read>(mut reader: R) -> Result<Self> {
        let mut xml_content = String::new();
        reader.read_to_string(&mut xml_content)?;
        CompilerConfiguration::from_xml(&xml_content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_text_joins_cdata_sections() {
        let doc = Document::parse("<a><![CDATA[x]]]]><![CDATA[>y]]></a>").unwrap();
        assert_eq!(element_text(doc.root_element()), "x]]>y");
    }

    #[test]
    fn test_build_arguments_keep_missing_fields() {
        let doc = Document::parse("<DebugArgs><CompilerArg>-g</CompilerArg></DebugArgs>").unwrap();
        let mut args = BuildArguments::new("old", "-L-lm");
        args.read_from(doc.root_element());
        assert_eq!(args.compiler_arguments, "-g");
        assert_eq!(args.linker_arguments, "-L-lm");
    }

    #[test]
    fn test_failed_read_leaves_configuration_untouched() {
        let doc = Document::parse(
            r#"<Root>
    <TargetConfiguration Target="Executable">
        <Compiler><![CDATA[/opt/dmd]]></Compiler>
    </TargetConfiguration>
    <DefaultLibs><lib><![CDATA[curl]]></lib></DefaultLibs>
    <TargetConfiguration Target="BogusKind"/>
</Root>"#,
        )
        .unwrap();

        let mut cfg = CompilerConfiguration::create_with_defaults(CompilerVendor::Dmd);
        let before = cfg.clone();
        assert!(cfg.read_from(doc.root_element()).is_err());
        assert_eq!(cfg, before);
    }
}
