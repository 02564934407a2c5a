// ==========================================
// 披萨面团计算器 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、覆写管理
// 存储: 内存 key-value（内置默认值 + JSON 配置文件覆写）
// ==========================================

use crate::config::form_defaults::FormDefaults;
use crate::domain::flour::lookup_preset;
use crate::domain::types::YeastForm;
use serde_json::json;
use std::collections::HashMap;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "PIZZA_DOUGH_CONFIG";

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    pub const DOUGH_BALL_GRAMS: &str = "dough_ball_grams";
    pub const DEFAULT_FLOUR: &str = "default_flour";
    pub const DEFAULT_BALL_COUNT: &str = "default_ball_count";
    pub const DEFAULT_SALT_PCT: &str = "default_salt_pct";
    pub const DEFAULT_OIL_PCT: &str = "default_oil_pct";
    pub const DEFAULT_YEAST_FORM: &str = "default_yeast_form";
    pub const DEFAULT_COLD_HOURS: &str = "default_cold_hours";
    pub const DEFAULT_COLD_TEMP_C: &str = "default_cold_temp_c";
    pub const DEFAULT_WARM_HOURS: &str = "default_warm_hours";
    pub const DEFAULT_WARM_TEMP_C: &str = "default_warm_temp_c";
    pub const STRICT_VALIDATION: &str = "strict_validation";

    /// 全部已知配置键
    pub const ALL: [&str; 11] = [
        DOUGH_BALL_GRAMS,
        DEFAULT_FLOUR,
        DEFAULT_BALL_COUNT,
        DEFAULT_SALT_PCT,
        DEFAULT_OIL_PCT,
        DEFAULT_YEAST_FORM,
        DEFAULT_COLD_HOURS,
        DEFAULT_COLD_TEMP_C,
        DEFAULT_WARM_HOURS,
        DEFAULT_WARM_TEMP_C,
        STRICT_VALIDATION,
    ];
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    values: HashMap<String, String>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    /// 创建仅含内置默认值的配置管理器
    pub fn new() -> Self {
        let defaults = FormDefaults::default();
        let mut values = HashMap::new();

        values.insert(config_keys::DOUGH_BALL_GRAMS.to_string(), defaults.ball_grams.to_string());
        values.insert(config_keys::DEFAULT_FLOUR.to_string(), defaults.flour.clone());
        values.insert(config_keys::DEFAULT_BALL_COUNT.to_string(), defaults.ball_count.to_string());
        values.insert(config_keys::DEFAULT_SALT_PCT.to_string(), defaults.salt_pct.to_string());
        values.insert(config_keys::DEFAULT_OIL_PCT.to_string(), defaults.oil_pct.to_string());
        values.insert(config_keys::DEFAULT_YEAST_FORM.to_string(), defaults.yeast_form.to_string());
        values.insert(config_keys::DEFAULT_COLD_HOURS.to_string(), defaults.cold_hours.to_string());
        values.insert(config_keys::DEFAULT_COLD_TEMP_C.to_string(), defaults.cold_temp_c.to_string());
        values.insert(config_keys::DEFAULT_WARM_HOURS.to_string(), defaults.warm_hours.to_string());
        values.insert(config_keys::DEFAULT_WARM_TEMP_C.to_string(), defaults.warm_temp_c.to_string());
        values.insert(
            config_keys::STRICT_VALIDATION.to_string(),
            defaults.strict_validation.to_string(),
        );

        Self { values }
    }

    /// 从 JSON 配置文件创建（文件中的键覆写内置默认值）
    ///
    /// 文件格式: {"dough_ball_grams": 280, "default_flour": "Caputo Nuvola"}
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| format!("配置文件读取失败: {}: {}", path.display(), e))?;

        let mut manager = Self::new();
        let count = manager.overlay_json(&raw)?;
        info!(path = %path.display(), count, "已加载配置文件");

        Ok(manager)
    }

    /// 按优先级加载配置
    ///
    /// 1) 显式路径
    /// 2) 环境变量 PIZZA_DOUGH_CONFIG
    /// 3) 用户配置目录下的 config.json（存在时）
    /// 4) 内置默认值
    pub fn load(explicit_path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        if let Some(path) = explicit_path {
            return Self::from_json_file(path);
        }

        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            if !path.trim().is_empty() {
                return Self::from_json_file(path.trim());
            }
        }

        if let Some(path) = default_config_path() {
            if path.is_file() {
                return Self::from_json_file(path);
            }
        }

        debug!("未找到配置文件,使用内置默认值");
        Ok(Self::new())
    }

    /// 用 JSON 对象覆写配置
    ///
    /// # 返回
    /// - Ok(usize): 覆写的配置项数量
    fn overlay_json(&mut self, raw: &str) -> Result<usize, Box<dyn Error>> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let object = value
            .as_object()
            .ok_or("配置文件格式错误: 顶层必须是 JSON 对象")?;

        let mut count = 0;
        for (key, value) in object {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                other => return Err(format!("配置项 {} 的值类型不支持: {}", key, other).into()),
            };
            if !config_keys::ALL.contains(&key.as_str()) {
                tracing::warn!(key = %key, "忽略未知配置项");
                continue;
            }
            self.values.insert(key.clone(), text);
            count += 1;
        }

        Ok(count)
    }

    /// 读取配置值
    pub fn get_global_config_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// 写入配置值
    pub fn set_config_value(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    /// 获取所有配置的快照（JSON格式,键有序）
    pub fn get_config_snapshot(&self) -> Result<String, Box<dyn Error>> {
        let ordered: std::collections::BTreeMap<&String, &String> = self.values.iter().collect();
        Ok(serde_json::to_string(&json!(ordered))?)
    }

    /// 从配置快照恢复配置
    ///
    /// # 返回
    /// - Ok(usize): 恢复的配置项数量
    pub fn restore_config_from_snapshot(&mut self, snapshot_json: &str) -> Result<usize, Box<dyn Error>> {
        let config_map: HashMap<String, String> = serde_json::from_str(snapshot_json)?;

        let mut count = 0;
        for (key, value) in config_map {
            self.values.insert(key, value);
            count += 1;
        }

        Ok(count)
    }

    // ===== 类型化读取 =====

    fn get_f64(&self, key: &str) -> Result<f64, Box<dyn Error>> {
        let raw = self
            .get_global_config_value(key)
            .ok_or_else(|| format!("配置项缺失: {}", key))?;
        let value = raw
            .trim()
            .replacen(',', ".", 1)
            .parse::<f64>()
            .map_err(|e| format!("配置项 {} 不是数值: {} ({})", key, raw, e))?;
        if !value.is_finite() {
            return Err(format!("配置项 {} 不是有限数值: {}", key, raw).into());
        }
        Ok(value)
    }

    fn get_non_negative(&self, key: &str) -> Result<f64, Box<dyn Error>> {
        let value = self.get_f64(key)?;
        if value < 0.0 {
            return Err(format!("配置项 {} 不能为负数: {}", key, value).into());
        }
        Ok(value)
    }

    /// 单个面团球重量（克, > 0）
    pub fn get_ball_grams(&self) -> Result<f64, Box<dyn Error>> {
        let value = self.get_f64(config_keys::DOUGH_BALL_GRAMS)?;
        if value <= 0.0 {
            return Err(format!("面团球重量必须大于 0: {}", value).into());
        }
        Ok(value)
    }

    /// 默认面粉（必须是已知预设）
    pub fn get_default_flour(&self) -> Result<String, Box<dyn Error>> {
        let name = self
            .get_global_config_value(config_keys::DEFAULT_FLOUR)
            .ok_or("配置项缺失: default_flour")?;
        Ok(lookup_preset(name)?.name.to_string())
    }

    /// 默认酵母形态
    pub fn get_default_yeast_form(&self) -> Result<YeastForm, Box<dyn Error>> {
        let raw = self
            .get_global_config_value(config_keys::DEFAULT_YEAST_FORM)
            .ok_or("配置项缺失: default_yeast_form")?;
        Ok(raw.parse::<YeastForm>()?)
    }

    /// 是否启用严格校验
    pub fn get_strict_validation(&self) -> Result<bool, Box<dyn Error>> {
        let raw = self
            .get_global_config_value(config_keys::STRICT_VALIDATION)
            .unwrap_or("false");
        Ok(matches!(
            raw.trim().to_lowercase().as_str(),
            "1" | "true" | "yes" | "y" | "on"
        ))
    }

    /// 组装表单默认值
    pub fn form_defaults(&self) -> Result<FormDefaults, Box<dyn Error>> {
        let ball_count = self.get_f64(config_keys::DEFAULT_BALL_COUNT)?;
        if ball_count < 1.0 {
            return Err(format!("默认面团球数量不能小于 1: {}", ball_count).into());
        }

        Ok(FormDefaults {
            ball_grams: self.get_ball_grams()?,
            flour: self.get_default_flour()?,
            ball_count,
            salt_pct: self.get_non_negative(config_keys::DEFAULT_SALT_PCT)?,
            oil_pct: self.get_non_negative(config_keys::DEFAULT_OIL_PCT)?,
            yeast_form: self.get_default_yeast_form()?,
            cold_hours: self.get_non_negative(config_keys::DEFAULT_COLD_HOURS)?,
            cold_temp_c: self.get_non_negative(config_keys::DEFAULT_COLD_TEMP_C)?,
            warm_hours: self.get_non_negative(config_keys::DEFAULT_WARM_HOURS)?,
            warm_temp_c: self.get_non_negative(config_keys::DEFAULT_WARM_TEMP_C)?,
            strict_validation: self.get_strict_validation()?,
        })
    }
}

/// 默认配置文件路径: <用户配置目录>/pizza-dough-calc/config.json
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pizza-dough-calc").join("config.json"))
}
