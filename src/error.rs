//! 统一错误处理模块
//!
//! 提供查词插件的统一错误类型定义和处理机制

// 标准库导入
use std::fmt;

// 第三方crate导入
use anyhow::Error as AnyhowError;

// 本地模块导入
use crate::language::LanguageCode;

/// 查词插件统一错误类型
///
/// 覆盖一次查询中可能出现的全部失败：语言校验、网络传输、页面结构变化等
#[derive(Debug)]
pub enum TranslationError {
    /// 语言代码不在支持列表中
    UnavailableLanguage {
        /// 用户输入的语言代码
        code: String,
    },

    /// 网络请求相关错误（超时、DNS、连接被拒绝等）
    Network {
        /// 错误消息
        message: String,
        /// HTTP状态码（如果适用）
        status_code: Option<u16>,
    },

    /// 结果页存在布局标记，但结构与预期不符
    Layout {
        /// 具体错误信息
        details: String,
    },

    /// 响应内容无法解码或解析为HTML
    HtmlParse {
        /// 具体错误信息
        details: String,
    },

    /// 配置相关错误
    Configuration {
        /// 配置项名称
        field: String,
        /// 错误原因
        reason: String,
    },

    /// 内部处理错误（包装anyhow::Error）
    Internal {
        /// 包装的错误
        source: AnyhowError,
    },
}

impl TranslationError {
    /// 是否为站点布局变化导致的错误（需要维护解析器）
    pub fn is_layout_change(&self) -> bool {
        matches!(self, TranslationError::Layout { .. })
    }
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::UnavailableLanguage { .. } => {
                let codes: Vec<&str> = LanguageCode::ALL.iter().map(|l| l.code()).collect();
                write!(
                    f,
                    "Languages have to be in the following list: {}",
                    codes.join(", ")
                )
            }
            TranslationError::Network {
                message,
                status_code,
            } => {
                if let Some(code) = status_code {
                    write!(f, "网络请求失败 [{}]: {}", code, message)
                } else {
                    write!(f, "网络请求失败: {}", message)
                }
            }
            TranslationError::Layout { details } => {
                write!(
                    f,
                    "dict.cc results page layout change, please raise an issue. ({})",
                    details
                )
            }
            TranslationError::HtmlParse { details } => {
                write!(f, "HTML解析失败: {}", details)
            }
            TranslationError::Configuration { field, reason } => {
                write!(f, "配置错误 [{}]: {}", field, reason)
            }
            TranslationError::Internal { source } => {
                write!(f, "内部处理错误: {}", source)
            }
        }
    }
}

impl std::error::Error for TranslationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslationError::Internal { source } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// 查词插件结果类型别名
pub type Result<T> = std::result::Result<T, TranslationError>;

/// 便捷的错误创建宏
#[macro_export]
macro_rules! translation_error {
    (unavailable_language, $code:expr) => {
        $crate::error::TranslationError::UnavailableLanguage {
            code: $code.to_string(),
        }
    };
    (network, $msg:expr) => {
        $crate::error::TranslationError::Network {
            message: $msg.to_string(),
            status_code: None,
        }
    };
    (network, $msg:expr, $code:expr) => {
        $crate::error::TranslationError::Network {
            message: $msg.to_string(),
            status_code: Some($code),
        }
    };
    (layout, $details:expr) => {
        $crate::error::TranslationError::Layout {
            details: $details.to_string(),
        }
    };
    (html_parse, $details:expr) => {
        $crate::error::TranslationError::HtmlParse {
            details: $details.to_string(),
        }
    };
    (config, $field:expr, $reason:expr) => {
        $crate::error::TranslationError::Configuration {
            field: $field.to_string(),
            reason: $reason.to_string(),
        }
    };
}

/// 从anyhow::Error转换为TranslationError
impl From<AnyhowError> for TranslationError {
    fn from(error: AnyhowError) -> Self {
        TranslationError::Internal { source: error }
    }
}

/// 从reqwest::Error转换为TranslationError
impl From<reqwest::Error> for TranslationError {
    fn from(error: reqwest::Error) -> Self {
        let status_code = error.status().map(|s| s.as_u16());
        TranslationError::Network {
            message: error.to_string(),
            status_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TranslationError::Network {
            message: "Connection failed".to_string(),
            status_code: Some(500),
        };

        assert_eq!(format!("{}", err), "网络请求失败 [500]: Connection failed");
    }

    #[test]
    fn test_unavailable_language_lists_codes() {
        let err = translation_error!(unavailable_language, "xx");
        assert_eq!(
            err.to_string(),
            "Languages have to be in the following list: en, de, fr, sv, es, nl, bg, ro, it, pt, ru"
        );
    }

    #[test]
    fn test_error_macro() {
        let err = translation_error!(network, "Test error", 404);
        match err {
            TranslationError::Network {
                message,
                status_code,
            } => {
                assert_eq!(message, "Test error");
                assert_eq!(status_code, Some(404));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_layout_change_detection() {
        assert!(translation_error!(layout, "2 headers expected").is_layout_change());
        assert!(!translation_error!(network, "timeout").is_layout_change());
    }

    #[test]
    fn test_anyhow_conversion() {
        let anyhow_err = anyhow::anyhow!("Test anyhow error");
        let translation_err: TranslationError = anyhow_err.into();

        match translation_err {
            TranslationError::Internal { .. } => {}
            _ => panic!("Wrong error type"),
        }
    }
}
