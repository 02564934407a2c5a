// ==========================================
// 披萨面团计算器 - API 数据传输对象
// ==========================================
// DoughForm: 表单原始文本（未校验）
// DoughResponse: 计算结果 + 展示所需的附加信息
// ==========================================

use serde::{Deserialize, Serialize};

use crate::config::FormDefaults;
use crate::domain::dough::KneadingPlan;
use crate::domain::types::YeastForm;

// ==========================================
// DoughForm - 表单
// ==========================================

/// 表单原始输入
///
/// 数值字段保持文本形式,由 InputValidator 统一解析
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoughForm {
    /// 面粉预设名称
    pub flour: String,
    /// 面团球数量
    pub balls: String,
    /// 含水率 %（None 表示使用面粉预设的建议值）
    #[serde(default)]
    pub hydration: Option<String>,
    /// 盐 %
    pub salt: String,
    /// 橄榄油 %
    pub oil: String,
    /// 酵母形态标识（instant / dry / fresh）
    pub yeast: String,
    /// TK 时长 / 温度
    pub tk_hours: String,
    pub tk_temp: String,
    /// TO 时长 / 温度
    pub to_hours: String,
    pub to_temp: String,
}

impl DoughForm {
    /// 按默认值生成表单
    pub fn from_defaults(defaults: &FormDefaults) -> Self {
        Self {
            flour: defaults.flour.clone(),
            balls: defaults.ball_count.to_string(),
            hydration: None,
            salt: defaults.salt_pct.to_string(),
            oil: defaults.oil_pct.to_string(),
            yeast: defaults.yeast_form.to_string(),
            tk_hours: defaults.cold_hours.to_string(),
            tk_temp: defaults.cold_temp_c.to_string(),
            to_hours: defaults.warm_hours.to_string(),
            to_temp: defaults.warm_temp_c.to_string(),
        }
    }
}

impl Default for DoughForm {
    fn default() -> Self {
        Self::from_defaults(&FormDefaults::default())
    }
}

// ==========================================
// 参考数据选项
// ==========================================

/// 面粉下拉选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlourOption {
    pub name: String,
    pub hydration: f64,
    pub protein: f64,
    /// 筋力指示条宽度 %
    pub strength_pct: f64,
}

/// 酵母下拉选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YeastOption {
    pub id: YeastForm,
    pub label: String,
    pub multiplier: f64,
}

// ==========================================
// DoughResponse - 计算结果
// ==========================================

/// 配料行（按展示顺序）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    /// 稳定键（water / yeast / flour / oil / salt）
    pub key: String,
    /// 显示名称
    pub label: String,
    /// 克数（未取整）
    pub grams: f64,
}

impl IngredientLine {
    /// 一位小数展示
    pub fn display_grams(&self) -> String {
        format_grams(self.grams)
    }
}

/// 克数保留一位小数（.x5 向上进位）
pub fn format_grams(grams: f64) -> String {
    format!("{:.1}", (grams * 10.0).round() / 10.0)
}

/// 计算结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoughResponse {
    /// 面粉预设
    pub flour: FlourOption,
    /// 实际使用的含水率 %
    pub hydration_pct: f64,
    /// 面团球数量
    pub ball_count: f64,
    /// 面团总重（克）
    pub total_dough_mass_grams: f64,
    /// 酵母形态
    pub yeast_form: YeastForm,
    /// 酵母 %（由 TK/TO 自动估算）
    pub yeast_pct: f64,
    /// 配料（水、酵母、面粉、油、盐）
    pub ingredients: Vec<IngredientLine>,
    /// 揉面计划
    pub kneading: KneadingPlan,
    /// 揉面建议
    pub kneading_advice: String,
    /// 操作提示
    pub tip: String,
}

impl DoughResponse {
    /// 按键查找配料克数
    pub fn grams(&self, key: &str) -> Option<f64> {
        self.ingredients.iter().find(|i| i.key == key).map(|i| i.grams)
    }
}
