// ==========================================
// 披萨面团计算器 - 核心库
// ==========================================
// 技术栈: Rust + serde + tracing
// 系统定位: 纯函数推导引擎（酵母估算 / 配方换算 / 揉面计划）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 推导规则
pub mod engine;

// 配置层 - 表单默认值
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 输入边界与结果组装
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    DomainError, FermentationProfile, FermentationStage, FlourPreset, KneadingPlan, RecipeInputs,
    RecipeOutputs, YeastForm, FLOUR_PRESETS,
};

// 引擎
pub use engine::{
    estimate_yeast_pct, plan_kneading, resolve_recipe, DoughCalculator, DoughParameters,
    DoughReport, KneadingPlanner, RecipeResolver, YeastEstimator,
};

// API
pub use api::{ApiError, ApiResult, DoughApi, DoughForm, DoughResponse};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "Papa Pietro 披萨面团计算器";

// 单个面团球重量（克）
pub const DOUGH_BALL_GRAMS: f64 = 250.0;
