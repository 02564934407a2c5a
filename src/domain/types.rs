// ==========================================
// 披萨面团计算器 - 领域类型定义
// ==========================================
// 职责: 酵母形态枚举 + 领域层错误类型
// 红线: 酵母形态是封闭集合,未知值必须拒绝
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ==========================================
// 领域错误 (Domain Error)
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("未知的酵母类型: {0}（仅支持 instant / dry / fresh）")]
    UnknownYeastForm(String),

    #[error("未知的面粉类型: {0}")]
    UnknownFlour(String),
}

// ==========================================
// 酵母形态 (Yeast Form)
// ==========================================
// 效力系数以即发干酵母为基准: instant=1, dry=1.5, fresh=3
// 序列化格式: 小写 (instant / dry / fresh)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YeastForm {
    Instant, // 即发干酵母
    #[serde(alias = "dry-active", alias = "dry_active")]
    Dry, // 活性干酵母
    Fresh, // 鲜酵母
}

impl YeastForm {
    /// 全部酵母形态（按下拉列表顺序）
    pub const ALL: [YeastForm; 3] = [YeastForm::Instant, YeastForm::Dry, YeastForm::Fresh];

    /// 相对即发干酵母的用量系数
    pub fn multiplier(self) -> f64 {
        match self {
            YeastForm::Instant => 1.0,
            YeastForm::Dry => 1.5,
            YeastForm::Fresh => 3.0,
        }
    }

    /// 稳定标识符（与序列化一致）
    pub fn id(self) -> &'static str {
        match self {
            YeastForm::Instant => "instant",
            YeastForm::Dry => "dry",
            YeastForm::Fresh => "fresh",
        }
    }

    /// 显示名称
    pub fn label(self) -> &'static str {
        match self {
            YeastForm::Instant => "即发干酵母",
            YeastForm::Dry => "活性干酵母",
            YeastForm::Fresh => "鲜酵母",
        }
    }
}

impl Default for YeastForm {
    fn default() -> Self {
        YeastForm::Instant
    }
}

impl fmt::Display for YeastForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for YeastForm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "instant" => Ok(YeastForm::Instant),
            "dry" | "dry-active" | "dry_active" => Ok(YeastForm::Dry),
            "fresh" => Ok(YeastForm::Fresh),
            _ => Err(DomainError::UnknownYeastForm(s.to_string())),
        }
    }
}
