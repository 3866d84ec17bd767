use dcompconf::{CompileTarget, CompilerConfiguration, CompilerVendor, ConfigError};

#[test]
fn test_parse_configuration_document() {
    let xml_content = r#"<?xml version="1.0" encoding="UTF-8"?>
<CompilerConfiguration Vendor="LDC">
    <TargetConfiguration Target="SharedLibrary">
        <Compiler><![CDATA[/opt/ldc/bin/ldc2]]></Compiler>
        <Linker><![CDATA[/opt/ldc/bin/ldc2]]></Linker>
        <ObjectLinkPattern><![CDATA["{0}"]]></ObjectLinkPattern>
        <IncludePathPattern><![CDATA[-I="{0}"]]></IncludePathPattern>
        <DebugArgs>
            <CompilerArg><![CDATA[-c "$src" -of="$obj" $includes -g]]></CompilerArg>
            <LinkerArgs><![CDATA[-shared $objs -of="$target"]]></LinkerArgs>
        </DebugArgs>
        <ReleaseArgs>
            <CompilerArg><![CDATA[-c "$src" -O3]]></CompilerArg>
            <LinkerArgs><![CDATA[-shared $objs -O3]]></LinkerArgs>
        </ReleaseArgs>
    </TargetConfiguration>
    <TargetConfiguration Target="Executable">
        <Compiler><![CDATA[ldc2]]></Compiler>
    </TargetConfiguration>
    <DefaultLibs>
        <lib><![CDATA[phobos2]]></lib>
        <lib><![CDATA[curl]]></lib>
        <lib><![CDATA[curl]]></lib>
    </DefaultLibs>
</CompilerConfiguration>"#;

    let cfg = CompilerConfiguration::from_xml(xml_content).unwrap();
    assert_eq!(cfg.vendor, CompilerVendor::Ldc);

    let kinds: Vec<_> = cfg.targets().iter().map(|t| t.target).collect();
    assert_eq!(kinds, vec![CompileTarget::SharedLibrary, CompileTarget::Executable]);

    let shared = &cfg.targets()[0];
    assert_eq!(shared.compiler, "/opt/ldc/bin/ldc2");
    assert_eq!(shared.include_path_pattern, "-I=\"{0}\"");
    assert_eq!(shared.debug_arguments.compiler_arguments, "-c \"$src\" -of=\"$obj\" $includes -g");
    assert_eq!(shared.debug_arguments.linker_arguments, "-shared $objs -of=\"$target\"");
    assert_eq!(shared.release_arguments.linker_arguments, "-shared $objs -O3");

    assert_eq!(cfg.default_libraries, vec!["phobos2", "curl", "curl"]);
}

#[test]
fn test_missing_elements_keep_type_defaults() {
    let xml_content = r#"<CompilerConfiguration Vendor="DMD">
    <TargetConfiguration Target="StaticLibrary">
        <Compiler><![CDATA[dmd]]></Compiler>
    </TargetConfiguration>
</CompilerConfiguration>"#;

    let cfg = CompilerConfiguration::from_xml(xml_content).unwrap();
    let lib = cfg.find_target_configuration(CompileTarget::StaticLibrary).unwrap();
    assert_eq!(lib.compiler, "dmd");
    assert_eq!(lib.linker, "");
    assert_eq!(lib.object_file_link_pattern, "\"{0}\"");
    assert_eq!(lib.include_path_pattern, "-I\"{0}\"");
    assert_eq!(lib.debug_arguments.compiler_arguments, "");
    assert_eq!(lib.release_arguments.linker_arguments, "");
    assert!(cfg.default_libraries.is_empty());
}

#[test]
fn test_unknown_elements_are_skipped() {
    let xml_content = r#"<Root Vendor="GDC">
    <ParseCache><Path>/usr/include/d</Path></ParseCache>
    <TargetConfiguration Target="Executable" Extra="1">
        <Compiler><![CDATA[gdc]]></Compiler>
        <Optimizer><![CDATA[-flto]]></Optimizer>
        <DebugArgs>
            <Sanitizer>address</Sanitizer>
            <CompilerArg><![CDATA[-g]]></CompilerArg>
        </DebugArgs>
    </TargetConfiguration>
    <DefaultLibs>
        <path>/usr/lib</path>
        <lib><![CDATA[gphobos]]></lib>
    </DefaultLibs>
</Root>"#;

    let cfg = CompilerConfiguration::from_xml(xml_content).unwrap();
    assert_eq!(cfg.vendor, CompilerVendor::Gdc);
    assert_eq!(cfg.targets().len(), 1);
    assert_eq!(cfg.targets()[0].compiler, "gdc");
    assert_eq!(cfg.targets()[0].debug_arguments.compiler_arguments, "-g");
    assert_eq!(cfg.default_libraries, vec!["gphobos"]);
}

#[test]
fn test_unknown_target_kind_fails() {
    let xml_content = r#"<CompilerConfiguration Vendor="DMD">
    <TargetConfiguration Target="BogusKind">
        <Compiler><![CDATA[dmd]]></Compiler>
    </TargetConfiguration>
</CompilerConfiguration>"#;

    let result = CompilerConfiguration::from_xml(xml_content);
    match result {
        Err(ConfigError::UnknownTargetKind(name)) => assert_eq!(name, "BogusKind"),
        other => panic!("expected unknown target kind error, got {:?}", other),
    }

    let err = CompilerConfiguration::from_xml(xml_content).unwrap_err();
    assert!(err.to_string().contains("unknown target kind 'BogusKind'"));
}

#[test]
fn test_unknown_vendor_fails() {
    let xml_content = r#"<CompilerConfiguration Vendor="GCC"></CompilerConfiguration>"#;
    assert!(matches!(
        CompilerConfiguration::from_xml(xml_content),
        Err(ConfigError::UnknownVendor(name)) if name == "GCC"
    ));
}

#[test]
fn test_missing_attributes_use_defaults() {
    let xml_content = r#"<CompilerConfiguration>
    <TargetConfiguration>
        <Linker><![CDATA[ld]]></Linker>
    </TargetConfiguration>
</CompilerConfiguration>"#;

    let cfg = CompilerConfiguration::from_xml(xml_content).unwrap();
    assert_eq!(cfg.vendor, CompilerVendor::Dmd);
    assert_eq!(cfg.targets()[0].target, CompileTarget::Executable);
    assert_eq!(cfg.targets()[0].linker, "ld");
}

#[test]
fn test_legacy_linker_arg_element() {
    let xml_content = r#"<CompilerConfiguration Vendor="DMD">
    <TargetConfiguration Target="Executable">
        <ReleaseArgs>
            <CompilerArg><![CDATA[-O]]></CompilerArg>
            <LinkerArg><![CDATA[$objs -of"$target"]]></LinkerArg>
        </ReleaseArgs>
    </TargetConfiguration>
</CompilerConfiguration>"#;

    let cfg = CompilerConfiguration::from_xml(xml_content).unwrap();
    assert_eq!(cfg.targets()[0].release_arguments.linker_arguments, "$objs -of\"$target\"");
}

#[test]
fn test_truncated_document_fails() {
    let xml_content =
        r#"<CompilerConfiguration Vendor="DMD"><TargetConfiguration Target="Executable">"#;
    assert!(matches!(
        CompilerConfiguration::from_xml(xml_content),
        Err(ConfigError::Xml(_))
    ));
}

#[test]
fn test_read_into_existing_configuration_replaces_targets() {
    let mut cfg = CompilerConfiguration::create_with_defaults(CompilerVendor::Dmd);
    let count = cfg.targets().len();

    let xml_content = r#"<Root>
    <TargetConfiguration Target="SharedLibrary">
        <Compiler><![CDATA[/usr/local/bin/dmd]]></Compiler>
    </TargetConfiguration>
</Root>"#;
    let doc = roxmltree::Document::parse(xml_content).unwrap();
    cfg.read_from(doc.root_element()).unwrap();

    assert_eq!(cfg.targets().len(), count);
    let shared = cfg.find_target_configuration(CompileTarget::SharedLibrary).unwrap();
    assert_eq!(shared.compiler, "/usr/local/bin/dmd");
    assert_eq!(shared.linker, "");
}
