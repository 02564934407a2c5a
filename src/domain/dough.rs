// ==========================================
// 披萨面团计算器 - 面团领域实体
// ==========================================
// 职责: 发酵阶段 / 配方输入输出 / 揉面计划
// 生命周期: 单次计算内有效,不持久化
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// FermentationStage - 发酵阶段
// ==========================================
/// 单个发酵阶段（时长 + 温度）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FermentationStage {
    /// 时长（小时, ≥ 0）
    pub duration_hours: f64,
    /// 温度（摄氏度,不做物理合理性校验）
    pub temperature_celsius: f64,
}

impl FermentationStage {
    pub fn new(duration_hours: f64, temperature_celsius: f64) -> Self {
        Self {
            duration_hours,
            temperature_celsius,
        }
    }
}

// ==========================================
// FermentationProfile - 两段式发酵方案
// ==========================================
/// TK（冷藏发酵）+ TO（室温发酵）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FermentationProfile {
    /// 冷藏阶段 (TK)
    pub cold: FermentationStage,
    /// 室温阶段 (TO)
    pub warm: FermentationStage,
}

impl FermentationProfile {
    pub fn new(cold: FermentationStage, warm: FermentationStage) -> Self {
        Self { cold, warm }
    }
}

impl Default for FermentationProfile {
    /// 24h@4°C 冷藏 + 2h@22°C 室温
    fn default() -> Self {
        Self {
            cold: FermentationStage::new(24.0, 4.0),
            warm: FermentationStage::new(2.0, 22.0),
        }
    }
}

// ==========================================
// RecipeInputs - 配方输入（烘焙百分比）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeInputs {
    /// 面团总重（克, > 0）
    pub total_dough_mass_grams: f64,
    /// 含水率 %
    pub hydration_pct: f64,
    /// 盐 %
    pub salt_pct: f64,
    /// 橄榄油 %
    pub oil_pct: f64,
    /// 酵母 %
    pub yeast_pct: f64,
}

impl RecipeInputs {
    /// 烘焙系数 = 1 + Σ(百分比/100)
    pub fn baker_factor(&self) -> f64 {
        1.0 + self.hydration_pct / 100.0
            + self.salt_pct / 100.0
            + self.oil_pct / 100.0
            + self.yeast_pct / 100.0
    }
}

// ==========================================
// RecipeOutputs - 配方输出（绝对克数）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecipeOutputs {
    pub flour_grams: f64,
    pub water_grams: f64,
    pub salt_grams: f64,
    pub oil_grams: f64,
    pub yeast_grams: f64,
}

impl RecipeOutputs {
    /// 全部配料总重
    pub fn total_grams(&self) -> f64 {
        self.flour_grams + self.water_grams + self.salt_grams + self.oil_grams + self.yeast_grams
    }
}

// ==========================================
// KneadingPlan - 揉面计划
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KneadingPlan {
    /// 手工揉面（分钟）
    pub knead_minutes: u32,
    /// 厨师机（分钟）
    pub planetary_minutes: u32,
    /// 手持打蛋器带面钩（分钟）
    pub hand_mixer_minutes: u32,
    /// 折叠次数
    pub fold_count: u32,
    /// 折叠间隔（分钟）
    pub fold_interval_minutes: u32,
    /// 折叠总耗时（分钟）
    pub total_fold_minutes: u32,
    /// 高含水面团
    pub is_wet_dough: bool,
}

impl KneadingPlan {
    /// 揉面建议文案
    pub fn advice(&self) -> &'static str {
        if self.is_wet_dough {
            "高含水面团: 以折叠代替长时间揉面。"
        } else {
            "标准含水率: 短暂静置 + 2 次折叠即可。"
        }
    }
}
