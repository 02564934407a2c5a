// ==========================================
// 披萨面团计算器 - 配方换算引擎
// ==========================================
// 职责: 面团总重 + 烘焙百分比 → 各配料绝对克数
// 公式: flour = total / (1 + Σpct/100), x = flour × pct/100
// 说明: 本引擎不做输入校验,调用方负责钳位
// ==========================================

use crate::domain::dough::{RecipeInputs, RecipeOutputs};

// ==========================================
// RecipeResolver - 配方换算引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct RecipeResolver;

impl RecipeResolver {
    pub fn new() -> Self {
        Self
    }

    /// 烘焙百分比反算
    pub fn resolve(&self, inputs: &RecipeInputs) -> RecipeOutputs {
        let flour = inputs.total_dough_mass_grams / inputs.baker_factor();

        RecipeOutputs {
            flour_grams: flour,
            water_grams: flour * inputs.hydration_pct / 100.0,
            salt_grams: flour * inputs.salt_pct / 100.0,
            oil_grams: flour * inputs.oil_pct / 100.0,
            yeast_grams: flour * inputs.yeast_pct / 100.0,
        }
    }
}

/// 配方换算（无状态函数入口）
pub fn resolve_recipe(
    total_dough_mass_grams: f64,
    hydration_pct: f64,
    salt_pct: f64,
    oil_pct: f64,
    yeast_pct: f64,
) -> RecipeOutputs {
    RecipeResolver::new().resolve(&RecipeInputs {
        total_dough_mass_grams,
        hydration_pct,
        salt_pct,
        oil_pct,
        yeast_pct,
    })
}
