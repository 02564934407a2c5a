// ==========================================
// 披萨面团计算器 - 引擎层
// ==========================================
// 全部引擎均为无状态纯函数,可重入,无缓存
// ==========================================

pub mod kneading;
pub mod orchestrator;
pub mod recipe;
pub mod yeast;

pub use kneading::{plan_kneading, KneadingPlanner};
pub use orchestrator::{DoughCalculator, DoughParameters, DoughReport};
pub use recipe::{resolve_recipe, RecipeResolver};
pub use yeast::{estimate_yeast_pct, YeastEstimator};
