// ==========================================
// 披萨面团计算器 - API 层
// ==========================================
// 职责: 表现层调用入口,负责输入边界校验与结果组装
// ==========================================

pub mod dough_api;
pub mod dto;
pub mod error;
pub mod validator;

pub use dough_api::DoughApi;
pub use dto::{DoughForm, DoughResponse, FlourOption, IngredientLine, YeastOption};
pub use error::{ApiError, ApiResult, ErrorResponse};
pub use validator::{InputValidator, NumericField, StepDirection, ValidationMode};
