use crate::error::ConfigError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// 对象文件在 $objs 宏中的默认展开格式
pub const DEFAULT_OBJECT_FILE_LINK_PATTERN: &str = "\"{0}\"";
/// include 路径在 $includes 宏中的默认展开格式
pub const DEFAULT_INCLUDE_PATH_PATTERN: &str = "-I\"{0}\"";

/// D 编译器厂商
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CompilerVendor {
    #[default]
    #[serde(rename = "DMD")]
    Dmd,
    #[serde(rename = "GDC")]
    Gdc,
    #[serde(rename = "LDC")]
    Ldc,
}

impl CompilerVendor {
    pub const ALL: [CompilerVendor; 3] =
        [CompilerVendor::Dmd, CompilerVendor::Gdc, CompilerVendor::Ldc];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompilerVendor::Dmd => "DMD",
            CompilerVendor::Gdc => "GDC",
            CompilerVendor::Ldc => "LDC",
        }
    }
}

impl fmt::Display for CompilerVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompilerVendor {
    type Err = ConfigError;

    /// 厂商名不区分大小写
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompilerVendor::ALL
            .into_iter()
            .find(|v| v.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownVendor(s.to_string()))
    }
}

/// 链接目标类型，决定最终产物
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum CompileTarget {
    #[default]
    Executable,
    ConsolelessExecutable,
    SharedLibrary,
    StaticLibrary,
}

impl CompileTarget {
    pub const ALL: [CompileTarget; 4] = [
        CompileTarget::Executable,
        CompileTarget::ConsolelessExecutable,
        CompileTarget::SharedLibrary,
        CompileTarget::StaticLibrary,
    ];

    /// 文档中 Target 属性使用的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            CompileTarget::Executable => "Executable",
            CompileTarget::ConsolelessExecutable => "ConsolelessExecutable",
            CompileTarget::SharedLibrary => "SharedLibrary",
            CompileTarget::StaticLibrary => "StaticLibrary",
        }
    }
}

impl fmt::Display for CompileTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompileTarget {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompileTarget::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownTargetKind(s.to_string()))
    }
}

/// 单个构建模式（debug 或 release）的参数模板
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildArguments {
    pub compiler_arguments: String, // 编译参数模板
    pub linker_arguments: String,   // 链接参数模板
}

impl BuildArguments {
    pub fn new(compiler_arguments: &str, linker_arguments: &str) -> Self {
        BuildArguments {
            compiler_arguments: compiler_arguments.to_string(),
            linker_arguments: linker_arguments.to_string(),
        }
    }
}

/// 某一链接目标的编译器/链接器命令与参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetConfiguration {
    pub target: CompileTarget,
    pub compiler: String,
    pub linker: String,
    /// 每个 .obj/.o 文件在 $objs 链接宏中的展开格式
    pub object_file_link_pattern: String,
    /// 每个 include 路径在 $includes 编译宏中的展开格式
    pub include_path_pattern: String,
    pub debug_arguments: BuildArguments,
    pub release_arguments: BuildArguments,
}

impl TargetConfiguration {
    pub fn new(target: CompileTarget) -> Self {
        TargetConfiguration {
            target,
            compiler: String::new(),
            linker: String::new(),
            object_file_link_pattern: DEFAULT_OBJECT_FILE_LINK_PATTERN.to_string(),
            include_path_pattern: DEFAULT_INCLUDE_PATH_PATTERN.to_string(),
            debug_arguments: BuildArguments::default(),
            release_arguments: BuildArguments::default(),
        }
    }

    pub fn arguments(&self, is_debug: bool) -> &BuildArguments {
        if is_debug {
            &self.debug_arguments
        } else {
            &self.release_arguments
        }
    }

    pub fn arguments_mut(&mut self, is_debug: bool) -> &mut BuildArguments {
        if is_debug {
            &mut self.debug_arguments
        } else {
            &mut self.release_arguments
        }
    }

    pub fn format_object_file(&self, object_file: &str) -> String {
        self.object_file_link_pattern.replace("{0}", object_file)
    }

    pub fn format_include_path(&self, include_path: &str) -> String {
        self.include_path_pattern.replace("{0}", include_path)
    }
}

impl Default for TargetConfiguration {
    fn default() -> Self {
        TargetConfiguration::new(CompileTarget::default())
    }
}
