// ==========================================
// 披萨面团计算器 - 面粉预设表
// ==========================================
// 职责: 面粉名称 → (建议含水率, 平均蛋白质含量)
// 生命周期: 进程级只读数据,运行时不可修改
// ==========================================

use crate::domain::types::DomainError;
use serde::Serialize;

/// 面粉预设
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlourPreset {
    /// 预设名称（下拉列表显示值）
    pub name: &'static str,
    /// 建议含水率 %
    pub hydration: f64,
    /// 平均蛋白质含量 %
    pub protein: f64,
}

impl FlourPreset {
    /// 面粉筋力指示条宽度（0~100%）
    ///
    /// 蛋白质 8% 对应 0，每 +1% 蛋白质 +12 个百分点，上限 100
    pub fn strength_pct(&self) -> f64 {
        ((self.protein - 8.0) * 12.0).clamp(0.0, 100.0)
    }
}

/// 默认面粉
pub const DEFAULT_FLOUR: &str = "Caputo Pizzeria (00)";

// ==========================================
// 预设表（按下拉列表顺序）
// ==========================================
pub static FLOUR_PRESETS: [FlourPreset; 10] = [
    // 意大利专业面粉
    FlourPreset { name: "Caputo Pizzeria (00)", hydration: 62.0, protein: 12.5 },
    FlourPreset { name: "Caputo Manitoba Oro", hydration: 65.0, protein: 14.5 },
    FlourPreset { name: "Caputo Nuvola", hydration: 68.0, protein: 13.0 },
    FlourPreset { name: "Inna włoska 00 (pizza)", hydration: 60.0, protein: 12.0 },
    // 家用/超市面粉
    FlourPreset { name: "Zwykła typ 00 (marketowa)", hydration: 58.0, protein: 11.0 },
    FlourPreset { name: "Typ 450 (tortowa)", hydration: 56.0, protein: 9.0 },
    FlourPreset { name: "Typ 500/550 (uniwersalna)", hydration: 60.0, protein: 10.5 },
    FlourPreset { name: "Typ 650 (chlebowa/uniwersalna)", hydration: 62.0, protein: 12.0 },
    FlourPreset { name: "Typ 750 (mocniejsza chlebowa)", hydration: 64.0, protein: 12.5 },
    FlourPreset { name: "Mieszanka \"mąka do pizzy\" (marketowa)", hydration: 61.0, protein: 11.5 },
];

/// 全部预设
pub fn all_presets() -> &'static [FlourPreset] {
    &FLOUR_PRESETS
}

/// 按名称精确查找
pub fn find_preset(name: &str) -> Option<&'static FlourPreset> {
    FLOUR_PRESETS.iter().find(|p| p.name == name)
}

/// 按名称查找（忽略首尾空白与大小写）,找不到返回 DomainError
pub fn lookup_preset(name: &str) -> Result<&'static FlourPreset, DomainError> {
    let wanted = name.trim();
    find_preset(wanted)
        .or_else(|| {
            let lower = wanted.to_lowercase();
            FLOUR_PRESETS.iter().find(|p| p.name.to_lowercase() == lower)
        })
        .ok_or_else(|| DomainError::UnknownFlour(name.to_string()))
}

/// 默认面粉预设
pub fn default_preset() -> &'static FlourPreset {
    &FLOUR_PRESETS[0]
}
