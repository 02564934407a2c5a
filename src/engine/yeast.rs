// ==========================================
// 披萨面团计算器 - 酵母用量估算引擎
// ==========================================
// 模型: Q10 温度敏感模型（每 ±10°C 发酵速率 ×2 / ÷2）
// 职责: 两段式发酵方案 + 酵母形态 → 酵母百分比（占面粉重量）
// 红线: 先钳位即发干酵母基准值,再乘形态系数
// ==========================================

use crate::domain::dough::{FermentationProfile, FermentationStage};
use crate::domain::types::YeastForm;
use tracing::debug;

/// 参考温度（°C）
pub const BASE_TEMP_C: f64 = 22.0;
/// 温度敏感系数
pub const Q10: f64 = 2.0;
/// 有效时长异常时的兜底值（小时）
pub const FALLBACK_EFFECTIVE_HOURS: f64 = 4.0;
/// 即发干酵母基准: 百分比 × 有效小时
pub const INSTANT_PCT_HOURS: f64 = 0.8;
/// 即发干酵母百分比下限
pub const MIN_INSTANT_PCT: f64 = 0.01;
/// 即发干酵母百分比上限
pub const MAX_INSTANT_PCT: f64 = 1.0;

// ==========================================
// YeastEstimator - 酵母用量估算引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct YeastEstimator;

impl YeastEstimator {
    pub fn new() -> Self {
        Self
    }

    /// 估算酵母百分比
    ///
    /// # 参数
    /// - cold_hours / cold_temp_c: TK 阶段
    /// - warm_hours / warm_temp_c: TO 阶段
    /// - yeast_form: 酵母形态
    ///
    /// # 返回
    /// 保留 3 位小数的百分比,范围 [0.01 × 系数, 1.0 × 系数]
    pub fn estimate(
        &self,
        cold_hours: f64,
        warm_hours: f64,
        cold_temp_c: f64,
        warm_temp_c: f64,
        yeast_form: YeastForm,
    ) -> f64 {
        let effective_hours = self.effective_hours(cold_hours, warm_hours, cold_temp_c, warm_temp_c);
        let instant_pct = self.instant_pct(effective_hours);

        round3(instant_pct * yeast_form.multiplier())
    }

    /// 按发酵方案估算
    pub fn estimate_profile(&self, profile: &FermentationProfile, yeast_form: YeastForm) -> f64 {
        self.estimate(
            profile.cold.duration_hours,
            profile.warm.duration_hours,
            profile.cold.temperature_celsius,
            profile.warm.temperature_celsius,
            yeast_form,
        )
    }

    // ==========================================
    // 模型分步
    // ==========================================

    /// 单阶段折算为 22°C 等效时长
    pub fn stage_equivalent_hours(&self, stage: FermentationStage) -> f64 {
        stage.duration_hours * Q10.powf((stage.temperature_celsius - BASE_TEMP_C) / 10.0)
    }

    /// 两阶段有效时长之和（含兜底）
    ///
    /// 非有限值或 ≤ 0 时返回 FALLBACK_EFFECTIVE_HOURS
    pub fn effective_hours(
        &self,
        cold_hours: f64,
        warm_hours: f64,
        cold_temp_c: f64,
        warm_temp_c: f64,
    ) -> f64 {
        let warm_eq = self.stage_equivalent_hours(FermentationStage::new(warm_hours, warm_temp_c));
        let cold_eq = self.stage_equivalent_hours(FermentationStage::new(cold_hours, cold_temp_c));

        let effective_hours = warm_eq + cold_eq;
        if !effective_hours.is_finite() || effective_hours <= 0.0 {
            debug!(
                effective_hours,
                fallback = FALLBACK_EFFECTIVE_HOURS,
                "有效发酵时长无效,使用兜底值"
            );
            return FALLBACK_EFFECTIVE_HOURS;
        }
        effective_hours
    }

    /// 即发干酵母基准百分比（钳位到 [0.01, 1.0]）
    pub fn instant_pct(&self, effective_hours: f64) -> f64 {
        (INSTANT_PCT_HOURS / effective_hours).clamp(MIN_INSTANT_PCT, MAX_INSTANT_PCT)
    }
}

/// 四舍五入到 3 位小数
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// 酵母百分比估算（无状态函数入口）
pub fn estimate_yeast_pct(
    cold_hours: f64,
    warm_hours: f64,
    cold_temp_c: f64,
    warm_temp_c: f64,
    yeast_form: YeastForm,
) -> f64 {
    YeastEstimator::new().estimate(cold_hours, warm_hours, cold_temp_c, warm_temp_c, yeast_form)
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    // ==========================================
    // 第一部分: 典型方案
    // ==========================================

    #[test]
    fn test_scenario_1_zero_duration_uses_fallback() {
        // 场景1: 两阶段时长均为 0 → 兜底 4h → 0.8/4 = 0.2
        let engine = YeastEstimator::new();
        assert_eq!(engine.estimate(0.0, 0.0, 4.0, 22.0, YeastForm::Instant), 0.2);
        assert_eq!(engine.estimate(0.0, 0.0, -30.0, 90.0, YeastForm::Instant), 0.2);
    }

    #[test]
    fn test_scenario_2_fridge_24h_plus_room_2h() {
        // 场景2: 24h@4°C + 2h@22°C
        let engine = YeastEstimator::new();

        let cold_eq = engine.stage_equivalent_hours(FermentationStage::new(24.0, 4.0));
        assert!((cold_eq - 24.0 * 2f64.powf(-1.8)).abs() < EPS);
        assert!((cold_eq - 6.8922).abs() < 1e-3);

        let effective = engine.effective_hours(24.0, 2.0, 4.0, 22.0);
        assert!((effective - 8.8922).abs() < 1e-3);

        // 0.8 / 8.8922 ≈ 0.08997 → 0.090
        assert_eq!(engine.estimate(24.0, 2.0, 4.0, 22.0, YeastForm::Instant), 0.09);
    }

    #[test]
    fn test_scenario_3_room_temp_8h() {
        // 场景3: 室温 8h,即发
        let pct = estimate_yeast_pct(0.0, 8.0, 4.0, 22.0, YeastForm::Instant);
        assert_eq!(pct, 0.1);
    }

    #[test]
    fn test_scenario_4_warm_5h_fresh() {
        // 场景4: 5h@24°C,鲜酵母 → 0.1393 × 3 → 0.418
        let pct = estimate_yeast_pct(0.0, 5.0, 4.0, 24.0, YeastForm::Fresh);
        assert_eq!(pct, 0.418);
    }

    // ==========================================
    // 第二部分: 钳位边界
    // ==========================================

    #[test]
    fn test_scenario_5_short_profile_clamped_to_max() {
        // 场景5: 极短发酵 → 基准值超过 1.0 被压回 1.0
        let engine = YeastEstimator::new();
        assert_eq!(engine.estimate(0.0, 0.1, 4.0, 22.0, YeastForm::Instant), 1.0);
    }

    #[test]
    fn test_scenario_6_long_profile_clamped_to_min() {
        // 场景6: 100h 室温 → 0.008 被抬到 0.01
        let engine = YeastEstimator::new();
        assert_eq!(engine.estimate(0.0, 100.0, 4.0, 22.0, YeastForm::Instant), 0.01);
        assert_eq!(engine.estimate(0.0, 100.0, 4.0, 22.0, YeastForm::Dry), 0.015);
    }

    #[test]
    fn test_scenario_7_clamp_before_multiplier() {
        // 场景7: 先钳位后乘系数,鲜酵母可达 3.0%
        let engine = YeastEstimator::new();
        assert_eq!(engine.estimate(0.0, 0.1, 4.0, 22.0, YeastForm::Fresh), 3.0);
        assert_eq!(engine.estimate(0.0, 0.1, 4.0, 22.0, YeastForm::Dry), 1.5);
    }

    #[test]
    fn test_scenario_8_overflow_uses_fallback() {
        // 场景8: 极高温导致等效时长溢出为 inf → 兜底
        let engine = YeastEstimator::new();
        let effective = engine.effective_hours(0.0, 1.0, 4.0, 20_000.0);
        assert_eq!(effective, FALLBACK_EFFECTIVE_HOURS);
        assert_eq!(engine.estimate(0.0, 1.0, 4.0, 20_000.0, YeastForm::Instant), 0.2);
    }

    #[test]
    fn test_scenario_9_nan_temperature_uses_fallback() {
        // 场景9: NaN 温度 → 兜底
        let engine = YeastEstimator::new();
        assert_eq!(engine.effective_hours(10.0, 0.0, f64::NAN, 22.0), FALLBACK_EFFECTIVE_HOURS);
    }

    #[test]
    fn test_scenario_10_underflow_to_zero_uses_fallback() {
        // 场景10: 极低温导致等效时长下溢为 0 → 兜底
        let engine = YeastEstimator::new();
        assert_eq!(
            engine.effective_hours(10.0, 0.0, -20_000.0, 22.0),
            FALLBACK_EFFECTIVE_HOURS
        );
    }

    // ==========================================
    // 第三部分: 性质
    // ==========================================

    #[test]
    fn test_scenario_11_output_within_form_range() {
        let engine = YeastEstimator::new();
        let hours = [0.0, 0.25, 1.0, 3.5, 8.0, 24.0, 72.0, 500.0];
        let temps = [-10.0, 0.0, 4.0, 18.0, 22.0, 30.0, 45.0];

        for form in YeastForm::ALL {
            let m = form.multiplier();
            for &cold_h in &hours {
                for &warm_h in &hours {
                    for &cold_t in &temps {
                        for &warm_t in &temps {
                            let pct = engine.estimate(cold_h, warm_h, cold_t, warm_t, form);
                            assert!(
                                pct >= MIN_INSTANT_PCT * m - 1e-9 && pct <= MAX_INSTANT_PCT * m + 1e-9,
                                "out of range: {} for {:?}",
                                pct,
                                form
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_scenario_12_more_time_less_yeast() {
        // 场景12: 有效时长增加 → 基准值严格下降,直到 0.01 下限
        let engine = YeastEstimator::new();
        let mut previous = f64::INFINITY;
        let mut hours = 0.8;
        while hours < 80.0 {
            let pct = engine.instant_pct(hours);
            assert!(pct < previous);
            previous = pct;
            hours += 0.5;
        }
        assert_eq!(engine.instant_pct(80.0), MIN_INSTANT_PCT);
        assert_eq!(engine.instant_pct(200.0), MIN_INSTANT_PCT);
    }

    #[test]
    fn test_scenario_13_idempotent() {
        let engine = YeastEstimator::new();
        let a = engine.estimate(18.5, 3.0, 5.0, 21.0, YeastForm::Dry);
        let b = engine.estimate(18.5, 3.0, 5.0, 21.0, YeastForm::Dry);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_scenario_14_profile_entry_matches_flat_entry() {
        let engine = YeastEstimator::new();
        let profile = FermentationProfile::default();
        assert_eq!(
            engine.estimate_profile(&profile, YeastForm::Instant),
            engine.estimate(24.0, 2.0, 4.0, 22.0, YeastForm::Instant)
        );
    }
}
