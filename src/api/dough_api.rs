// ==========================================
// 披萨面团计算器 - 面团计算 API
// ==========================================
// 职责: 表单 → 校验 → 引擎编排 → 展示结果
// 说明: 每次调用都基于当前表单重新计算,无缓存
// ==========================================

use tracing::{info, instrument};

use crate::api::dto::{DoughForm, DoughResponse, FlourOption, IngredientLine, YeastOption};
use crate::api::error::ApiResult;
use crate::api::validator::{
    adjust_value, InputValidator, NumericField, StepDirection, ValidationMode,
};
use crate::config::{ConfigManager, FormDefaults};
use crate::domain::dough::{FermentationProfile, FermentationStage};
use crate::domain::flour::{all_presets, lookup_preset, FlourPreset};
use crate::domain::types::YeastForm;
use crate::engine::{DoughCalculator, DoughParameters, YeastEstimator};

/// 配料操作提示
pub const INGREDIENT_TIP: &str = "盐在揉面后期加入;经典那不勒斯配方中橄榄油可省略。";

// ==========================================
// DoughApi - 面团计算 API
// ==========================================
pub struct DoughApi {
    defaults: FormDefaults,
    validator: InputValidator,
    calculator: DoughCalculator,
}

impl DoughApi {
    /// 按表单默认值创建
    pub fn new(defaults: FormDefaults) -> Self {
        let mode = if defaults.strict_validation {
            ValidationMode::Strict
        } else {
            ValidationMode::AutoFix
        };

        Self {
            defaults,
            validator: InputValidator::new(mode),
            calculator: DoughCalculator::new(),
        }
    }

    /// 从配置管理器创建
    pub fn from_config(config: &ConfigManager) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::new(config.form_defaults()?))
    }

    /// 覆盖校验模式
    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validator = InputValidator::new(mode);
        self
    }

    pub fn defaults(&self) -> &FormDefaults {
        &self.defaults
    }

    pub fn validation_mode(&self) -> ValidationMode {
        self.validator.mode()
    }

    // ==========================================
    // 参考数据
    // ==========================================

    /// 默认表单
    pub fn default_form(&self) -> DoughForm {
        DoughForm::from_defaults(&self.defaults)
    }

    /// 面粉下拉选项
    pub fn list_flours(&self) -> Vec<FlourOption> {
        all_presets().iter().map(flour_option).collect()
    }

    /// 酵母下拉选项
    pub fn list_yeast_forms(&self) -> Vec<YeastOption> {
        YeastForm::ALL
            .iter()
            .map(|form| YeastOption {
                id: *form,
                label: form.label().to_string(),
                multiplier: form.multiplier(),
            })
            .collect()
    }

    // ==========================================
    // 表单操作
    // ==========================================

    /// 选择面粉: 同时把含水率重置为该面粉的建议值
    pub fn select_flour(&self, form: &mut DoughForm, flour_name: &str) -> ApiResult<()> {
        let preset = lookup_preset(flour_name)?;
        form.flour = preset.name.to_string();
        form.hydration = Some(preset.hydration.to_string());
        Ok(())
    }

    /// 加减按钮
    pub fn adjust_field(&self, field: NumericField, raw: &str, direction: StepDirection) -> String {
        adjust_value(raw, direction, field.step(), field.min())
    }

    // ==========================================
    // 计算
    // ==========================================

    /// 只估算酵母百分比
    pub fn estimate_yeast(&self, form: &DoughForm) -> ApiResult<f64> {
        let yeast_form: YeastForm = form.yeast.parse()?;
        let profile = self.read_profile(form)?;
        Ok(YeastEstimator::new().estimate_profile(&profile, yeast_form))
    }

    /// 完整计算
    #[instrument(skip(self, form), fields(flour = %form.flour, balls = %form.balls))]
    pub fn calculate(&self, form: &DoughForm) -> ApiResult<DoughResponse> {
        let preset = lookup_preset(&form.flour)?;
        let yeast_form: YeastForm = form.yeast.parse()?;

        let ball_count = self.validator.read_field(NumericField::BallCount, &form.balls)?;
        let hydration_pct = self
            .validator
            .read_optional_field(NumericField::Hydration, form.hydration.as_deref())?
            .unwrap_or(preset.hydration);
        let salt_pct = self.validator.read_field(NumericField::SaltPct, &form.salt)?;
        let oil_pct = self.validator.read_field(NumericField::OilPct, &form.oil)?;
        let fermentation = self.read_profile(form)?;

        let params = DoughParameters {
            ball_count,
            ball_grams: self.defaults.ball_grams,
            hydration_pct,
            salt_pct,
            oil_pct,
            flour_protein_pct: preset.protein,
            yeast_form,
            fermentation,
        };

        let report = self.calculator.calculate(&params);
        info!(
            total_grams = report.total_dough_mass_grams,
            yeast_pct = report.yeast_pct,
            knead_minutes = report.kneading.knead_minutes,
            "面团计算完成"
        );

        let recipe = report.recipe;
        let ingredients = vec![
            ingredient("water", "水", recipe.water_grams),
            ingredient("yeast", "酵母", recipe.yeast_grams),
            ingredient("flour", "面粉", recipe.flour_grams),
            ingredient("oil", "橄榄油", recipe.oil_grams),
            ingredient("salt", "盐", recipe.salt_grams),
        ];

        Ok(DoughResponse {
            flour: flour_option(preset),
            hydration_pct,
            ball_count,
            total_dough_mass_grams: report.total_dough_mass_grams,
            yeast_form,
            yeast_pct: report.yeast_pct,
            ingredients,
            kneading: report.kneading,
            kneading_advice: report.kneading.advice().to_string(),
            tip: INGREDIENT_TIP.to_string(),
        })
    }

    fn read_profile(&self, form: &DoughForm) -> ApiResult<FermentationProfile> {
        let cold = FermentationStage::new(
            self.validator.read_field(NumericField::ColdHours, &form.tk_hours)?,
            self.validator.read_field(NumericField::ColdTemp, &form.tk_temp)?,
        );
        let warm = FermentationStage::new(
            self.validator.read_field(NumericField::WarmHours, &form.to_hours)?,
            self.validator.read_field(NumericField::WarmTemp, &form.to_temp)?,
        );
        Ok(FermentationProfile::new(cold, warm))
    }
}

impl Default for DoughApi {
    fn default() -> Self {
        Self::new(FormDefaults::default())
    }
}

fn flour_option(preset: &FlourPreset) -> FlourOption {
    FlourOption {
        name: preset.name.to_string(),
        hydration: preset.hydration,
        protein: preset.protein,
        strength_pct: preset.strength_pct(),
    }
}

fn ingredient(key: &str, label: &str, grams: f64) -> IngredientLine {
    IngredientLine {
        key: key.to_string(),
        label: label.to_string(),
        grams,
    }
}
