use crate::models::{CompileTarget, CompilerVendor, TargetConfiguration};
use log::debug;
use serde::Serialize;

/// 某一编译器厂商的全部编译/链接命令及参数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompilerConfiguration {
    pub vendor: CompilerVendor,
    targets: Vec<TargetConfiguration>, // 每种目标类型最多一项
    pub default_libraries: Vec<String>,
}

impl CompilerConfiguration {
    /// 空配置，不含任何链接目标
    pub fn new(vendor: CompilerVendor) -> Self {
        CompilerConfiguration {
            vendor,
            targets: Vec::new(),
            default_libraries: Vec::new(),
        }
    }

    /// 按厂商初始化所有命令与参数（包括 debug 和 release 参数）
    pub fn create_with_defaults(vendor: CompilerVendor) -> Self {
        debug!("[config] Creating {} configuration with defaults", vendor);
        let mut cfg = CompilerConfiguration::new(vendor);
        vendor.defaults().initialize_defaults(&mut cfg);
        debug!(
            "[config] {} configuration has {} target(s)",
            vendor,
            cfg.targets.len()
        );
        cfg
    }

    /// 按当前厂商重新应用默认值，已有目标的内容会被覆盖
    pub fn reset_to_defaults(&mut self) {
        debug!("[config] Resetting {} configuration to defaults", self.vendor);
        self.vendor.defaults().initialize_defaults(self);
    }

    pub fn targets(&self) -> &[TargetConfiguration] {
        &self.targets
    }

    pub fn targets_mut(&mut self) -> impl Iterator<Item = &mut TargetConfiguration> {
        self.targets.iter_mut()
    }

    pub fn find_target_configuration(&self, target: CompileTarget) -> Option<&TargetConfiguration> {
        self.targets.iter().find(|t| t.target == target)
    }

    /// 查找指定目标的配置，不存在时创建并追加
    pub fn get_target_configuration(&mut self, target: CompileTarget) -> &mut TargetConfiguration {
        match self.targets.iter().position(|t| t.target == target) {
            Some(index) => &mut self.targets[index],
            None => {
                debug!("[config] Adding target configuration for {}", target);
                self.targets.push(TargetConfiguration::new(target));
                let last = self.targets.len() - 1;
                &mut self.targets[last]
            }
        }
    }

    /// 同种目标已存在时原位替换，否则追加到末尾
    pub(crate) fn upsert_target_configuration(&mut self, config: TargetConfiguration) {
        match self.targets.iter_mut().find(|t| t.target == config.target) {
            Some(existing) => *existing = config,
            None => self.targets.push(config),
        }
    }

    /// 覆盖所有已有目标的 debug 或 release 编译参数
    pub fn set_all_compiler_build_args(
        &mut self,
        new_compiler_arguments: &str,
        affect_debug_arguments: bool,
    ) {
        for t in &mut self.targets {
            t.arguments_mut(affect_debug_arguments).compiler_arguments =
                new_compiler_arguments.to_string();
        }
    }

    /// 覆盖所有已有目标的编译器命令
    pub fn set_all_compiler_commands(&mut self, new_compiler_path: &str) {
        for t in &mut self.targets {
            t.compiler = new_compiler_path.to_string();
        }
    }

    pub fn set_all_linker_commands(&mut self, new_linker_path: &str) {
        for t in &mut self.targets {
            t.linker = new_linker_path.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut cfg = CompilerConfiguration::new(CompilerVendor::Dmd);
        cfg.get_target_configuration(CompileTarget::StaticLibrary).compiler = "dmd".to_string();
        let again = cfg.get_target_configuration(CompileTarget::StaticLibrary);
        assert_eq!(again.compiler, "dmd");
        assert_eq!(cfg.targets().len(), 1);
    }

    #[test]
    fn test_upsert_replaces_in_place() {
        let mut cfg = CompilerConfiguration::new(CompilerVendor::Dmd);
        cfg.get_target_configuration(CompileTarget::Executable);
        cfg.get_target_configuration(CompileTarget::SharedLibrary);

        let mut replacement = TargetConfiguration::new(CompileTarget::Executable);
        replacement.linker = "ld".to_string();
        cfg.upsert_target_configuration(replacement);

        let kinds: Vec<_> = cfg.targets().iter().map(|t| t.target).collect();
        assert_eq!(kinds, vec![CompileTarget::Executable, CompileTarget::SharedLibrary]);
        assert_eq!(cfg.targets()[0].linker, "ld");
    }
}
