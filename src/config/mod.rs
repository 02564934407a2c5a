// ==========================================
// 披萨面团计算器 - 配置层
// ==========================================
// 职责: 表单默认值与校验模式的配置管理,支持文件覆写
// ==========================================

pub mod config_manager;
pub mod form_defaults;

// 重导出核心配置管理器
pub use config_manager::{config_keys, default_config_path, ConfigManager, CONFIG_PATH_ENV};
pub use form_defaults::FormDefaults;
