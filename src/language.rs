//! 语言代码模块
//!
//! dict.cc 只支持固定的一组两字母语言代码，这里用封闭枚举表示

use std::fmt;

use crate::error::Result;
use crate::translation_error;

/// dict.cc 支持的语言代码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageCode {
    En,
    De,
    Fr,
    Sv,
    Es,
    Nl,
    Bg,
    Ro,
    It,
    Pt,
    Ru,
}

impl LanguageCode {
    /// 全部支持的语言，顺序即对外展示顺序
    pub const ALL: [LanguageCode; 11] = [
        LanguageCode::En,
        LanguageCode::De,
        LanguageCode::Fr,
        LanguageCode::Sv,
        LanguageCode::Es,
        LanguageCode::Nl,
        LanguageCode::Bg,
        LanguageCode::Ro,
        LanguageCode::It,
        LanguageCode::Pt,
        LanguageCode::Ru,
    ];

    /// 两字母代码（小写）
    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::De => "de",
            LanguageCode::Fr => "fr",
            LanguageCode::Sv => "sv",
            LanguageCode::Es => "es",
            LanguageCode::Nl => "nl",
            LanguageCode::Bg => "bg",
            LanguageCode::Ro => "ro",
            LanguageCode::It => "it",
            LanguageCode::Pt => "pt",
            LanguageCode::Ru => "ru",
        }
    }

    /// 英文语言名称
    pub fn english_name(self) -> &'static str {
        match self {
            LanguageCode::En => "english",
            LanguageCode::De => "german",
            LanguageCode::Fr => "french",
            LanguageCode::Sv => "swedish",
            LanguageCode::Es => "spanish",
            LanguageCode::Nl => "dutch",
            LanguageCode::Bg => "bulgarian",
            LanguageCode::Ro => "romanian",
            LanguageCode::It => "italian",
            LanguageCode::Pt => "portuguese",
            LanguageCode::Ru => "russian",
        }
    }

    /// 不区分大小写地匹配语言代码，不做trim
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// 校验语言代码，不支持时返回 `UnavailableLanguage`
    pub fn parse(code: &str) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| translation_error!(unavailable_language, code))
    }

    /// 是否为 dict.cc 的枢纽语言（德语或英语）
    pub fn is_pivot(self) -> bool {
        matches!(self, LanguageCode::De | LanguageCode::En)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslationError;

    #[test]
    fn test_from_code_is_case_insensitive() {
        assert_eq!(LanguageCode::from_code("de"), Some(LanguageCode::De));
        assert_eq!(LanguageCode::from_code("DE"), Some(LanguageCode::De));
        assert_eq!(LanguageCode::from_code("Fr"), Some(LanguageCode::Fr));
    }

    #[test]
    fn test_unknown_codes_rejected() {
        for code in ["xx", "zh", "", "deu", " de", "english"] {
            assert_eq!(LanguageCode::from_code(code), None, "code: {:?}", code);
        }

        match LanguageCode::parse("ja") {
            Err(TranslationError::UnavailableLanguage { code }) => assert_eq!(code, "ja"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_names_and_pivots() {
        assert_eq!(LanguageCode::ALL.len(), 11);
        assert_eq!(LanguageCode::Pt.english_name(), "portuguese");
        assert_eq!(LanguageCode::Ru.to_string(), "ru");
        assert!(LanguageCode::De.is_pivot());
        assert!(LanguageCode::En.is_pivot());
        assert!(!LanguageCode::Sv.is_pivot());
    }
}
