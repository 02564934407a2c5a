// ==========================================
// 披萨面团计算器 - API层错误类型
// ==========================================
// 职责: 输入边界错误,领域错误转换为用户可读消息
// 说明: 推导引擎本身不会失败,错误只出现在输入边界
// ==========================================

use crate::domain::types::DomainError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {field}={value:?}")]
    InvalidInput { field: String, value: String },

    #[error("缺少输入: {0}")]
    MissingInput(String),

    #[error("数值范围错误: 字段 {field} 的值 {value} 低于下限 {min}")]
    ValueRangeError { field: String, value: f64, min: f64 },

    // ==========================================
    // 参考数据错误
    // ==========================================
    #[error("未知的面粉类型: {0}")]
    UnknownFlour(String),

    #[error("未知的酵母类型: {0}")]
    UnknownYeastForm(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 稳定错误代码（供 JSON 输出使用）
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput { .. } => "INVALID_INPUT",
            ApiError::MissingInput(_) => "MISSING_INPUT",
            ApiError::ValueRangeError { .. } => "VALUE_RANGE_ERROR",
            ApiError::UnknownFlour(_) => "UNKNOWN_FLOUR",
            ApiError::UnknownYeastForm(_) => "UNKNOWN_YEAST_FORM",
            ApiError::ConfigError(_) => "CONFIG_ERROR",
            ApiError::Other(_) => "OTHER_ERROR",
        }
    }

    /// 转换为错误响应
    pub fn to_response(&self) -> ErrorResponse {
        let details = match self {
            ApiError::InvalidInput { field, value } => {
                Some(serde_json::json!({ "field": field, "value": value }))
            }
            ApiError::ValueRangeError { field, value, min } => {
                Some(serde_json::json!({ "field": field, "value": value, "min": min }))
            }
            _ => None,
        };

        ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            details,
        }
    }
}

// ==========================================
// 从 DomainError 转换
// ==========================================
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownFlour(name) => ApiError::UnknownFlour(name),
            DomainError::UnknownYeastForm(id) => ApiError::UnknownYeastForm(id),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

/// 错误响应（JSON 输出）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 错误代码
    pub code: String,

    /// 错误消息
    pub message: String,

    /// 详细信息（可选）
    pub details: Option<serde_json::Value>,
}
