// ==========================================
// 披萨面团计算器 - 引擎编排器
// ==========================================
// 用途: 协调三个推导引擎的执行顺序
// 流程: 酵母估算 → 配方换算; 揉面计划独立计算
// ==========================================

use crate::domain::dough::{FermentationProfile, KneadingPlan, RecipeInputs, RecipeOutputs};
use crate::domain::types::YeastForm;
use crate::engine::{KneadingPlanner, RecipeResolver, YeastEstimator};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ==========================================
// DoughParameters - 已校验的计算参数
// ==========================================

/// 编排器输入（均已由调用方钳位）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoughParameters {
    /// 面团球数量（≥ 1）
    pub ball_count: f64,
    /// 单个面团球重量（克）
    pub ball_grams: f64,
    /// 含水率 %
    pub hydration_pct: f64,
    /// 盐 %
    pub salt_pct: f64,
    /// 橄榄油 %
    pub oil_pct: f64,
    /// 面粉蛋白质 %
    pub flour_protein_pct: f64,
    /// 酵母形态
    pub yeast_form: YeastForm,
    /// 发酵方案
    pub fermentation: FermentationProfile,
}

impl DoughParameters {
    /// 面团总重 = 球数 × 单球重量
    pub fn total_dough_mass_grams(&self) -> f64 {
        self.ball_count * self.ball_grams
    }
}

// ==========================================
// DoughReport - 计算结果
// ==========================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoughReport {
    /// 面团总重（克）
    pub total_dough_mass_grams: f64,
    /// 酵母百分比（由发酵方案自动估算）
    pub yeast_pct: f64,
    /// 各配料克数
    pub recipe: RecipeOutputs,
    /// 揉面计划
    pub kneading: KneadingPlan,
}

// ==========================================
// DoughCalculator - 引擎编排器
// ==========================================

#[derive(Debug, Clone, Copy, Default)]
pub struct DoughCalculator {
    yeast: YeastEstimator,
    recipe: RecipeResolver,
    kneading: KneadingPlanner,
}

impl DoughCalculator {
    pub fn new() -> Self {
        Self {
            yeast: YeastEstimator::new(),
            recipe: RecipeResolver::new(),
            kneading: KneadingPlanner::new(),
        }
    }

    /// 执行完整推导流程
    ///
    /// 无缓存,每次调用都基于当前参数重新计算
    #[instrument(skip(self), fields(balls = params.ball_count, yeast = %params.yeast_form))]
    pub fn calculate(&self, params: &DoughParameters) -> DoughReport {
        let total_dough_mass_grams = params.total_dough_mass_grams();

        // ==========================================
        // 步骤1: 酵母估算
        // ==========================================
        let yeast_pct = self
            .yeast
            .estimate_profile(&params.fermentation, params.yeast_form);
        debug!(yeast_pct, "步骤1: 酵母估算完成");

        // ==========================================
        // 步骤2: 配方换算
        // ==========================================
        let recipe = self.recipe.resolve(&RecipeInputs {
            total_dough_mass_grams,
            hydration_pct: params.hydration_pct,
            salt_pct: params.salt_pct,
            oil_pct: params.oil_pct,
            yeast_pct,
        });
        debug!(flour_grams = recipe.flour_grams, "步骤2: 配方换算完成");

        // ==========================================
        // 步骤3: 揉面计划
        // ==========================================
        let kneading = self
            .kneading
            .plan(params.hydration_pct, params.flour_protein_pct);
        debug!(
            knead_minutes = kneading.knead_minutes,
            wet = kneading.is_wet_dough,
            "步骤3: 揉面计划完成"
        );

        DoughReport {
            total_dough_mass_grams,
            yeast_pct,
            recipe,
            kneading,
        }
    }
}
