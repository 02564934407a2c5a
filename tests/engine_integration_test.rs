// ==========================================
// 推导引擎集成测试
// ==========================================
// 测试目标: 酵母估算 → 配方换算 → 揉面计划 全流程
// 覆盖范围: 公开函数入口、编排器、钳位与兜底行为
// ==========================================


use pizza_dough_calc::domain::dough::{FermentationProfile, FermentationStage};
use pizza_dough_calc::domain::flour::{all_presets, lookup_preset};
use pizza_dough_calc::{
    estimate_yeast_pct, plan_kneading, resolve_recipe, DoughCalculator, YeastForm,
};
use test_helpers::{approx, default_params, EPS};

// ==========================================
// 酵母估算
// ==========================================

#[test]
fn test_yeast_zero_profile_fallback() {
    pizza_dough_calc::logging::init_test();

    for form in YeastForm::ALL {
        let pct = estimate_yeast_pct(0.0, 0.0, 4.0, 22.0, form);
        assert!(approx(pct, 0.2 * form.multiplier(), EPS), "{:?} → {}", form, pct);
    }
}

#[test]
fn test_yeast_fridge_profile() {
    // 24h@4°C + 2h@22°C: 有效时长 ≈ 8.892h → 0.090
    assert_eq!(estimate_yeast_pct(24.0, 2.0, 4.0, 22.0, YeastForm::Instant), 0.09);
    // 0.08997 × 1.5 = 0.13495 → 0.135
    assert_eq!(estimate_yeast_pct(24.0, 2.0, 4.0, 22.0, YeastForm::Dry), 0.135);
}

#[test]
fn test_yeast_fresh_can_reach_three_percent() {
    // 先钳位再乘系数: 鲜酵母上限为 3.0%
    assert_eq!(estimate_yeast_pct(0.0, 0.25, 4.0, 30.0, YeastForm::Fresh), 3.0);
}

#[test]
fn test_yeast_warmer_means_less_yeast() {
    let cool = estimate_yeast_pct(0.0, 6.0, 4.0, 18.0, YeastForm::Instant);
    let warm = estimate_yeast_pct(0.0, 6.0, 4.0, 26.0, YeastForm::Instant);
    assert!(warm < cool);
}

// ==========================================
// 配方换算
// ==========================================

#[test]
fn test_recipe_sum_matches_total_mass() {
    let out = resolve_recipe(1000.0, 62.0, 2.8, 2.0, 0.2);
    assert!(approx(out.flour_grams, 598.80, 0.005));
    assert!(approx(out.water_grams, 371.26, 0.005));
    assert!(approx(out.salt_grams, 16.77, 0.005));
    assert!(approx(out.oil_grams, 11.98, 0.005));
    assert!(approx(out.yeast_grams, 1.198, 0.0005));
    assert!(approx(out.total_grams(), 1000.0, EPS));
}

// ==========================================
// 揉面计划
// ==========================================

#[test]
fn test_kneading_for_every_preset() {
    for preset in all_presets() {
        let plan = plan_kneading(preset.hydration, preset.protein);
        assert!((6..=22).contains(&plan.knead_minutes));
        assert!((4..=15).contains(&plan.planetary_minutes));
        assert!((5..=18).contains(&plan.hand_mixer_minutes));
        assert_eq!(plan.is_wet_dough, preset.hydration >= 67.0);
        assert_eq!(
            plan.total_fold_minutes,
            (plan.fold_count - 1) * plan.fold_interval_minutes
        );
    }
}

#[test]
fn test_kneading_manitoba() {
    // 65% / 14.5%: 6 + 1.75 + 2.8 = 10.55
    let preset = lookup_preset("Caputo Manitoba Oro").unwrap();
    let plan = plan_kneading(preset.hydration, preset.protein);
    assert_eq!(plan.knead_minutes, 11);
    assert_eq!(plan.planetary_minutes, 6); // 5.8025
    assert_eq!(plan.hand_mixer_minutes, 8); // 7.9125
    assert!(!plan.is_wet_dough);
}

// ==========================================
// 编排器
// ==========================================

#[test]
fn test_calculator_pipeline() {
    let calculator = DoughCalculator::new();
    let mut params = default_params();
    params.ball_count = 6.0;
    params.yeast_form = YeastForm::Dry;
    params.fermentation = FermentationProfile::new(
        FermentationStage::new(48.0, 4.0),
        FermentationStage::new(3.0, 21.0),
    );

    let report = calculator.calculate(&params);

    assert_eq!(report.total_dough_mass_grams, 1500.0);
    assert_eq!(
        report.yeast_pct,
        estimate_yeast_pct(48.0, 3.0, 4.0, 21.0, YeastForm::Dry)
    );
    let expected = resolve_recipe(1500.0, 62.0, 2.8, 2.0, report.yeast_pct);
    assert_eq!(report.recipe, expected);
    assert_eq!(report.kneading, plan_kneading(62.0, 12.5));
}

#[test]
fn test_calculator_permissive_temperatures() {
    // 核心引擎不校验温度物理合理性
    let calculator = DoughCalculator::new();
    let mut params = default_params();
    params.fermentation = FermentationProfile::new(
        FermentationStage::new(24.0, -5.0),
        FermentationStage::new(1.0, 120.0),
    );

    let report = calculator.calculate(&params);
    assert!(report.yeast_pct >= 0.01 && report.yeast_pct <= 1.0);
    assert!(approx(report.recipe.total_grams(), 1000.0, EPS));
}
