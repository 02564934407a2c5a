use serde::{Deserialize, Serialize};

use crate::domain::flour::DEFAULT_FLOUR;
use crate::domain::types::YeastForm;

/// 表单默认值
///
/// 来源: 内置默认值,可被配置文件覆写
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    /// 单个面团球重量（克）
    pub ball_grams: f64,

    /// 默认面粉（预设名称）
    pub flour: String,

    /// 默认面团球数量
    pub ball_count: f64,

    /// 默认盐 %
    pub salt_pct: f64,

    /// 默认橄榄油 %
    pub oil_pct: f64,

    /// 默认酵母形态
    pub yeast_form: YeastForm,

    /// TK 时长（小时）/ 温度（°C）
    pub cold_hours: f64,
    pub cold_temp_c: f64,

    /// TO 时长（小时）/ 温度（°C）
    pub warm_hours: f64,
    pub warm_temp_c: f64,

    /// 严格校验（默认关闭,按表单行为自动修正）
    #[serde(default)]
    pub strict_validation: bool,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            ball_grams: crate::DOUGH_BALL_GRAMS,
            flour: DEFAULT_FLOUR.to_string(),
            ball_count: 4.0,
            salt_pct: 2.8,
            oil_pct: 2.0,
            yeast_form: YeastForm::Instant,
            cold_hours: 24.0,
            cold_temp_c: 4.0,
            warm_hours: 2.0,
            warm_temp_c: 22.0,
            strict_validation: false,
        }
    }
}
