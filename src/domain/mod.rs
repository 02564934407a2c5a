// ==========================================
// 披萨面团计算器 - 领域层
// ==========================================

pub mod dough;
pub mod flour;
pub mod types;

pub use dough::{
    FermentationProfile, FermentationStage, KneadingPlan, RecipeInputs, RecipeOutputs,
};
pub use flour::{FlourPreset, DEFAULT_FLOUR, FLOUR_PRESETS};
pub use types::{DomainError, YeastForm};
