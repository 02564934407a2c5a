// ==========================================
// 披萨面团计算器 - 揉面计划引擎
// ==========================================
// 职责: 含水率 + 面粉蛋白质 → 揉面时长 + 折叠计划
// 输出: 分钟数四舍五入取整（基于未取整的手工揉面时长计算）
// ==========================================

use crate::domain::dough::KneadingPlan;

/// 含水率基线（%）
pub const HYDRATION_BASELINE: f64 = 60.0;
/// 蛋白质基线（%）
pub const PROTEIN_BASELINE: f64 = 11.0;
/// 高含水面团阈值（%, 含）
pub const WET_DOUGH_HYDRATION: f64 = 67.0;

const HYDRATION_MINUTES_PER_PCT: f64 = 0.35;
const PROTEIN_MINUTES_PER_PCT: f64 = 0.8;
const BASE_KNEAD_MINUTES: f64 = 6.0;

// (系数, 下限, 上限)
const KNEAD_RANGE: (f64, f64) = (6.0, 22.0);
const PLANETARY: (f64, f64, f64) = (0.55, 4.0, 15.0);
const HAND_MIXER: (f64, f64, f64) = (0.75, 5.0, 18.0);

// (次数, 间隔分钟)
const WET_FOLDS: (u32, u32) = (3, 12);
const STANDARD_FOLDS: (u32, u32) = (2, 15);

// ==========================================
// KneadingPlanner - 揉面计划引擎
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct KneadingPlanner;

impl KneadingPlanner {
    pub fn new() -> Self {
        Self
    }

    /// 生成揉面计划
    ///
    /// 规则:
    /// 1) 含水率每高于 60% 一个点 +0.35 分钟
    /// 2) 蛋白质每高于 11% 一个点 +0.8 分钟
    /// 3) 手工 = clamp(6 + 规则1 + 规则2, 6, 22)
    /// 4) 厨师机 = clamp(手工 × 0.55, 4, 15); 手持打蛋器 = clamp(手工 × 0.75, 5, 18)
    /// 5) 含水率 ≥ 67% → 3 次 × 12 分钟; 否则 2 次 × 15 分钟
    pub fn plan(&self, hydration_pct: f64, flour_protein_pct: f64) -> KneadingPlan {
        let knead = self.knead_minutes_raw(hydration_pct, flour_protein_pct);
        let planetary = (knead * PLANETARY.0).clamp(PLANETARY.1, PLANETARY.2);
        let hand_mixer = (knead * HAND_MIXER.0).clamp(HAND_MIXER.1, HAND_MIXER.2);

        let is_wet_dough = hydration_pct >= WET_DOUGH_HYDRATION;
        let (fold_count, fold_interval_minutes) = if is_wet_dough {
            WET_FOLDS
        } else {
            STANDARD_FOLDS
        };

        KneadingPlan {
            knead_minutes: round_minutes(knead),
            planetary_minutes: round_minutes(planetary),
            hand_mixer_minutes: round_minutes(hand_mixer),
            fold_count,
            fold_interval_minutes,
            total_fold_minutes: (fold_count - 1) * fold_interval_minutes,
            is_wet_dough,
        }
    }

    /// 手工揉面时长（未取整,已钳位）
    pub fn knead_minutes_raw(&self, hydration_pct: f64, flour_protein_pct: f64) -> f64 {
        let hydration_factor = (hydration_pct - HYDRATION_BASELINE).max(0.0) * HYDRATION_MINUTES_PER_PCT;
        let protein_factor = (flour_protein_pct - PROTEIN_BASELINE).max(0.0) * PROTEIN_MINUTES_PER_PCT;

        (BASE_KNEAD_MINUTES + hydration_factor + protein_factor).clamp(KNEAD_RANGE.0, KNEAD_RANGE.1)
    }
}

fn round_minutes(minutes: f64) -> u32 {
    minutes.round() as u32
}

/// 揉面计划（无状态函数入口）
pub fn plan_kneading(hydration_pct: f64, flour_protein_pct: f64) -> KneadingPlan {
    KneadingPlanner::new().plan(hydration_pct, flour_protein_pct)
}
