// ==========================================
// 披萨面团计算器 - 输入边界校验器
// ==========================================
// 职责: 原始文本 → 数值（小数逗号/小数点统一,非有限值拒绝,下限钳位）
// 模式: Strict 返回错误; AutoFix 按表单行为自动修正并记录告警
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::api::error::{ApiError, ApiResult};

// ==========================================
// ValidationMode - 校验模式
// ==========================================

/// 校验模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationMode {
    /// 严格模式：任何无法解析或低于下限的输入都返回错误
    Strict,
    /// 自动修复模式：无法解析 → 下限,低于下限 → 下限
    AutoFix,
}

impl Default for ValidationMode {
    fn default() -> Self {
        ValidationMode::AutoFix
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Strict => write!(f, "STRICT"),
            ValidationMode::AutoFix => write!(f, "AUTO_FIX"),
        }
    }
}

impl FromStr for ValidationMode {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "STRICT" => Ok(ValidationMode::Strict),
            "AUTO_FIX" | "AUTOFIX" => Ok(ValidationMode::AutoFix),
            _ => Err(ApiError::ConfigError(format!("未知的校验模式: {}", s))),
        }
    }
}

// ==========================================
// NumericField - 表单数值字段
// ==========================================

/// 表单数值字段（下限 + 步长）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericField {
    BallCount,
    Hydration,
    SaltPct,
    OilPct,
    ColdHours,
    ColdTemp,
    WarmHours,
    WarmTemp,
}

impl NumericField {
    /// 字段下限（球数 ≥ 1,其余 ≥ 0）
    pub fn min(self) -> f64 {
        match self {
            NumericField::BallCount => 1.0,
            _ => 0.0,
        }
    }

    /// 加减按钮步长
    pub fn step(self) -> f64 {
        match self {
            NumericField::BallCount => 1.0,
            NumericField::SaltPct | NumericField::OilPct => 0.1,
            NumericField::Hydration
            | NumericField::ColdHours
            | NumericField::ColdTemp
            | NumericField::WarmHours
            | NumericField::WarmTemp => 0.5,
        }
    }

    /// 字段名（错误消息使用）
    pub fn name(self) -> &'static str {
        match self {
            NumericField::BallCount => "balls",
            NumericField::Hydration => "hydration",
            NumericField::SaltPct => "salt",
            NumericField::OilPct => "oil",
            NumericField::ColdHours => "tk_hours",
            NumericField::ColdTemp => "tk_temp",
            NumericField::WarmHours => "to_hours",
            NumericField::WarmTemp => "to_temp",
        }
    }
}

/// 加减方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    fn sign(self) -> f64 {
        match self {
            StepDirection::Up => 1.0,
            StepDirection::Down => -1.0,
        }
    }
}

// ==========================================
// 文本 → 数值 基础函数
// ==========================================

/// 解析数值文本（首个 ',' 视为小数点,非有限值返回 None）
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .replacen(',', ".", 1)
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// 输入框内容规范化
///
/// - 空白 → ""
/// - 无法解析 / 非有限值 → ""
/// - 其他 → max(min, value) 的文本形式
pub fn normalize_input_value(raw: &str, min: f64) -> String {
    match parse_decimal(raw) {
        Some(v) => v.max(min).to_string(),
        None => String::new(),
    }
}

/// 输入框编辑: 含 '-' 的输入被拒绝,保留原值
pub fn apply_edit(current: &str, edited: &str, min: f64) -> String {
    if edited.contains('-') {
        return current.to_string();
    }
    normalize_input_value(edited, min)
}

/// 宽松读取: 空白视为 0,无法解析视为下限,结果不低于下限
pub fn to_number_value(raw: &str, min: f64) -> f64 {
    if raw.trim().is_empty() {
        return min.max(0.0);
    }
    match parse_decimal(raw) {
        Some(v) => v.max(min),
        None => min,
    }
}

/// 加减按钮: max(min, round2(base ± step)),无法解析的基数视为 0
pub fn adjust_value(raw: &str, direction: StepDirection, step: f64, min: f64) -> String {
    let base = parse_decimal(raw).unwrap_or(0.0);
    let next = ((base + direction.sign() * step) * 100.0).round() / 100.0;
    next.max(min).to_string()
}

// ==========================================
// InputValidator - 输入校验器
// ==========================================

/// 输入校验器
#[derive(Debug, Clone, Copy, Default)]
pub struct InputValidator {
    mode: ValidationMode,
}

impl InputValidator {
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// 读取数值字段
    ///
    /// # 返回
    /// - Ok(f64): 有限且不低于字段下限的数值
    /// - Err(ApiError): 仅 Strict 模式
    pub fn read_field(&self, field: NumericField, raw: &str) -> ApiResult<f64> {
        let min = field.min();

        match self.mode {
            ValidationMode::Strict => {
                if raw.trim().is_empty() {
                    return Err(ApiError::MissingInput(field.name().to_string()));
                }
                let value = parse_decimal(raw).ok_or_else(|| ApiError::InvalidInput {
                    field: field.name().to_string(),
                    value: raw.to_string(),
                })?;
                if value < min {
                    return Err(ApiError::ValueRangeError {
                        field: field.name().to_string(),
                        value,
                        min,
                    });
                }
                Ok(value)
            }
            ValidationMode::AutoFix => {
                let value = to_number_value(raw, min);
                if parse_decimal(raw) != Some(value) {
                    tracing::warn!(
                        field = field.name(),
                        raw,
                        value,
                        "AutoFix模式: 输入已修正"
                    );
                }
                Ok(value)
            }
        }
    }

    /// 读取可选数值字段（None 表示未填写）
    pub fn read_optional_field(&self, field: NumericField, raw: Option<&str>) -> ApiResult<Option<f64>> {
        match raw {
            Some(text) if !text.trim().is_empty() => self.read_field(field, text).map(Some),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_comma_and_point() {
        assert_eq!(parse_decimal("2,8"), Some(2.8));
        assert_eq!(parse_decimal(" 62.5 "), Some(62.5));
        assert_eq!(parse_decimal("1,5,0"), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal(""), None);
    }

    #[test]
    fn test_normalize_input_value() {
        assert_eq!(normalize_input_value("  ", 0.0), "");
        assert_eq!(normalize_input_value("0,5", 0.0), "0.5");
        assert_eq!(normalize_input_value("0", 1.0), "1");
        assert_eq!(normalize_input_value("x1", 0.0), "");
        assert_eq!(normalize_input_value("62", 0.0), "62");
    }

    #[test]
    fn test_apply_edit_rejects_minus() {
        assert_eq!(apply_edit("4", "-4", 0.0), "4");
        assert_eq!(apply_edit("4", "5", 0.0), "5");
    }

    #[test]
    fn test_to_number_value() {
        assert_eq!(to_number_value("", 1.0), 1.0);
        assert_eq!(to_number_value("", 0.0), 0.0);
        assert_eq!(to_number_value("garbage", 1.0), 1.0);
        assert_eq!(to_number_value("-3", 0.0), 0.0);
        assert_eq!(to_number_value("3,5", 1.0), 3.5);
    }

    #[test]
    fn test_adjust_value() {
        assert_eq!(adjust_value("2.8", StepDirection::Up, 0.1, 0.0), "2.9");
        assert_eq!(adjust_value("0.05", StepDirection::Down, 0.1, 0.0), "0");
        assert_eq!(adjust_value("1", StepDirection::Down, 1.0, 1.0), "1");
        assert_eq!(adjust_value("abc", StepDirection::Up, 0.5, 0.0), "0.5");
        assert_eq!(adjust_value("62", StepDirection::Up, 0.5, 0.0), "62.5");
    }

    #[test]
    fn test_field_min_and_step() {
        assert_eq!(NumericField::BallCount.min(), 1.0);
        assert_eq!(NumericField::ColdTemp.min(), 0.0);
        assert_eq!(NumericField::SaltPct.step(), 0.1);
        assert_eq!(NumericField::WarmHours.step(), 0.5);
    }

    #[test]
    fn test_strict_mode_errors() {
        let validator = InputValidator::new(ValidationMode::Strict);

        assert!(matches!(
            validator.read_field(NumericField::BallCount, "0"),
            Err(ApiError::ValueRangeError { .. })
        ));
        assert!(matches!(
            validator.read_field(NumericField::Hydration, "sixty"),
            Err(ApiError::InvalidInput { .. })
        ));
        assert!(matches!(
            validator.read_field(NumericField::SaltPct, " "),
            Err(ApiError::MissingInput(_))
        ));
        assert_eq!(validator.read_field(NumericField::OilPct, "2,5").unwrap(), 2.5);
    }

    #[test]
    fn test_autofix_mode_coerces() {
        let validator = InputValidator::new(ValidationMode::AutoFix);

        assert_eq!(validator.read_field(NumericField::BallCount, "0").unwrap(), 1.0);
        assert_eq!(validator.read_field(NumericField::Hydration, "sixty").unwrap(), 0.0);
        assert_eq!(validator.read_field(NumericField::ColdTemp, "-2").unwrap(), 0.0);
        assert_eq!(validator.read_field(NumericField::WarmTemp, "22").unwrap(), 22.0);
    }

    #[test]
    fn test_read_optional_field() {
        let validator = InputValidator::new(ValidationMode::Strict);
        assert_eq!(validator.read_optional_field(NumericField::Hydration, None).unwrap(), None);
        assert_eq!(validator.read_optional_field(NumericField::Hydration, Some("")).unwrap(), None);
        assert_eq!(
            validator.read_optional_field(NumericField::Hydration, Some("65")).unwrap(),
            Some(65.0)
        );
    }

    #[test]
    fn test_validation_mode_parse() {
        assert_eq!("strict".parse::<ValidationMode>().unwrap(), ValidationMode::Strict);
        assert_eq!("auto-fix".parse::<ValidationMode>().unwrap(), ValidationMode::AutoFix);
        assert!("lenient".parse::<ValidationMode>().is_err());
    }
}
