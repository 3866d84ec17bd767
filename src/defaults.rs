use crate::config::CompilerConfiguration;
use crate::models::{
    BuildArguments, CompileTarget, CompilerVendor, DEFAULT_INCLUDE_PATH_PATTERN,
    DEFAULT_OBJECT_FILE_LINK_PATTERN,
};
use log::debug;

/// 某一厂商的默认值提供者：一对重置函数
///
/// 构建参数必须先于命令路径重置，因为后者只作用于已存在的目标配置。
#[derive(Debug, Clone, Copy)]
pub struct VendorDefaults {
    vendor: CompilerVendor,
    build_arguments: fn(&mut CompilerConfiguration),
    compiler_configuration: fn(&mut CompilerConfiguration),
}

impl CompilerVendor {
    pub fn defaults(self) -> VendorDefaults {
        match self {
            CompilerVendor::Dmd => VendorDefaults {
                vendor: self,
                build_arguments: dmd::reset_build_arguments,
                compiler_configuration: dmd::reset_compiler_configuration,
            },
            CompilerVendor::Gdc => VendorDefaults {
                vendor: self,
                build_arguments: gdc::reset_build_arguments,
                compiler_configuration: gdc::reset_compiler_configuration,
            },
            CompilerVendor::Ldc => VendorDefaults {
                vendor: self,
                build_arguments: ldc::reset_build_arguments,
                compiler_configuration: ldc::reset_compiler_configuration,
            },
        }
    }

    /// 该厂商默认提供的目标类型
    pub fn supported_targets(self) -> &'static [CompileTarget] {
        match self {
            CompilerVendor::Dmd => dmd::TARGETS,
            CompilerVendor::Gdc => gdc::TARGETS,
            CompilerVendor::Ldc => ldc::TARGETS,
        }
    }
}

impl VendorDefaults {
    pub fn vendor(&self) -> CompilerVendor {
        self.vendor
    }

    /// 为厂商支持的每种目标设置 debug/release 参数模板
    /// （按需创建目标配置）
    pub fn reset_build_arguments(&self, cfg: &mut CompilerConfiguration) {
        debug!("[defaults] Resetting {} build arguments", self.vendor);
        (self.build_arguments)(cfg);
    }

    /// 为所有已存在的目标设置编译器/链接器命令及格式
    pub fn reset_compiler_configuration(&self, cfg: &mut CompilerConfiguration) {
        debug!("[defaults] Resetting {} compiler commands", self.vendor);
        (self.compiler_configuration)(cfg);
    }

    pub fn initialize_defaults(&self, cfg: &mut CompilerConfiguration) {
        self.reset_build_arguments(cfg);
        self.reset_compiler_configuration(cfg);
    }
}

fn set_arguments(
    cfg: &mut CompilerConfiguration,
    target: CompileTarget,
    debug: (&str, &str),
    release: (&str, &str),
) {
    let t = cfg.get_target_configuration(target);
    t.object_file_link_pattern = DEFAULT_OBJECT_FILE_LINK_PATTERN.to_string();
    t.include_path_pattern = DEFAULT_INCLUDE_PATH_PATTERN.to_string();
    t.debug_arguments = BuildArguments::new(debug.0, debug.1);
    t.release_arguments = BuildArguments::new(release.0, release.1);
}

mod dmd {
    use super::*;

    pub const TARGETS: &[CompileTarget] = &[
        CompileTarget::Executable,
        CompileTarget::ConsolelessExecutable,
        CompileTarget::SharedLibrary,
        CompileTarget::StaticLibrary,
    ];

    const DEBUG_COMPILE: &str = "-c \"$src\" -of\"$obj\" $includes -gc -debug";
    const RELEASE_COMPILE: &str = "-c \"$src\" -of\"$obj\" $includes -O -inline -release";
    const DEBUG_COMPILE_PIC: &str = "-c \"$src\" -of\"$obj\" $includes -fPIC -gc -debug";
    const RELEASE_COMPILE_PIC: &str = "-c \"$src\" -of\"$obj\" $includes -fPIC -O -inline -release";

    pub fn reset_build_arguments(cfg: &mut CompilerConfiguration) {
        for &target in TARGETS {
            let (debug, release) = match target {
                CompileTarget::Executable => (
                    (DEBUG_COMPILE, "$objs -of\"$target\" -gc $libs"),
                    (RELEASE_COMPILE, "$objs -of\"$target\" -O -inline -release $libs"),
                ),
                CompileTarget::ConsolelessExecutable => (
                    (DEBUG_COMPILE, "$objs -of\"$target\" -gc -L/SUBSYSTEM:WINDOWS $libs"),
                    (
                        RELEASE_COMPILE,
                        "$objs -of\"$target\" -O -inline -release -L/SUBSYSTEM:WINDOWS $libs",
                    ),
                ),
                CompileTarget::SharedLibrary => (
                    (DEBUG_COMPILE_PIC, "-shared $objs -of\"$target\" -gc $libs"),
                    (RELEASE_COMPILE_PIC, "-shared $objs -of\"$target\" -O -inline -release $libs"),
                ),
                CompileTarget::StaticLibrary => (
                    (DEBUG_COMPILE, "-lib $objs -of\"$target\""),
                    (RELEASE_COMPILE, "-lib $objs -of\"$target\""),
                ),
            };
            set_arguments(cfg, target, debug, release);
        }
    }

    pub fn reset_compiler_configuration(cfg: &mut CompilerConfiguration) {
        cfg.set_all_compiler_commands("dmd");
        cfg.set_all_linker_commands("dmd");
    }
}

mod gdc {
    use super::*;

    // gdc 不区分有无控制台的可执行文件
    pub const TARGETS: &[CompileTarget] = &[
        CompileTarget::Executable,
        CompileTarget::SharedLibrary,
        CompileTarget::StaticLibrary,
    ];

    const DEBUG_COMPILE: &str = "-c \"$src\" -o \"$obj\" $includes -g -fdebug";
    const RELEASE_COMPILE: &str =
        "-c \"$src\" -o \"$obj\" $includes -O3 -frelease -finline-functions";
    const DEBUG_COMPILE_PIC: &str = "-c \"$src\" -o \"$obj\" $includes -fPIC -g -fdebug";
    const RELEASE_COMPILE_PIC: &str =
        "-c \"$src\" -o \"$obj\" $includes -fPIC -O3 -frelease -finline-functions";

    pub fn reset_build_arguments(cfg: &mut CompilerConfiguration) {
        for &target in TARGETS {
            let (debug, release) = match target {
                CompileTarget::SharedLibrary => (
                    (DEBUG_COMPILE_PIC, "-shared $objs -o \"$target\" -g $libs"),
                    (RELEASE_COMPILE_PIC, "-shared $objs -o \"$target\" -O3 $libs"),
                ),
                // 静态库由 ar 打包
                CompileTarget::StaticLibrary => (
                    (DEBUG_COMPILE, "rcs \"$target\" $objs"),
                    (RELEASE_COMPILE, "rcs \"$target\" $objs"),
                ),
                _ => (
                    (DEBUG_COMPILE, "$objs -o \"$target\" -g $libs"),
                    (RELEASE_COMPILE, "$objs -o \"$target\" -O3 $libs"),
                ),
            };
            set_arguments(cfg, target, debug, release);
        }
    }

    pub fn reset_compiler_configuration(cfg: &mut CompilerConfiguration) {
        cfg.set_all_compiler_commands("gdc");
        for t in cfg.targets_mut() {
            t.linker = match t.target {
                CompileTarget::StaticLibrary => "ar".to_string(),
                _ => "gdc".to_string(),
            };
        }
    }
}

mod ldc {
    use super::*;

    pub const TARGETS: &[CompileTarget] = &[
        CompileTarget::Executable,
        CompileTarget::ConsolelessExecutable,
        CompileTarget::SharedLibrary,
        CompileTarget::StaticLibrary,
    ];

    const DEBUG_COMPILE: &str = "-c \"$src\" -of=\"$obj\" $includes -g -d-debug";
    const RELEASE_COMPILE: &str = "-c \"$src\" -of=\"$obj\" $includes -O3 -release";
    const DEBUG_COMPILE_PIC: &str =
        "-c \"$src\" -of=\"$obj\" $includes -relocation-model=pic -g -d-debug";
    const RELEASE_COMPILE_PIC: &str =
        "-c \"$src\" -of=\"$obj\" $includes -relocation-model=pic -O3 -release";

    pub fn reset_build_arguments(cfg: &mut CompilerConfiguration) {
        for &target in TARGETS {
            let (debug, release) = match target {
                CompileTarget::Executable => (
                    (DEBUG_COMPILE, "$objs -of=\"$target\" -g $libs"),
                    (RELEASE_COMPILE, "$objs -of=\"$target\" -O3 -release $libs"),
                ),
                CompileTarget::ConsolelessExecutable => (
                    (DEBUG_COMPILE, "$objs -of=\"$target\" -g -L=/SUBSYSTEM:WINDOWS $libs"),
                    (
                        RELEASE_COMPILE,
                        "$objs -of=\"$target\" -O3 -release -L=/SUBSYSTEM:WINDOWS $libs",
                    ),
                ),
                CompileTarget::SharedLibrary => (
                    (DEBUG_COMPILE_PIC, "-shared $objs -of=\"$target\" -g $libs"),
                    (RELEASE_COMPILE_PIC, "-shared $objs -of=\"$target\" -O3 -release $libs"),
                ),
                CompileTarget::StaticLibrary => (
                    (DEBUG_COMPILE, "-lib $objs -of=\"$target\""),
                    (RELEASE_COMPILE, "-lib $objs -of=\"$target\""),
                ),
            };
            set_arguments(cfg, target, debug, release);
        }
    }

    /// ldc2 的 include 参数写作 -I=path
    pub fn reset_compiler_configuration(cfg: &mut CompilerConfiguration) {
        cfg.set_all_compiler_commands("ldc2");
        cfg.set_all_linker_commands("ldc2");
        for t in cfg.targets_mut() {
            t.include_path_pattern = "-I=\"{0}\"".to_string();
        }
    }
}
