//! 列解析模块
//!
//! dict.cc 总是把任意语言与德语或英语配对，结果表格的列顺序由站点决定。
//! 这里把每个翻译对重新排列为 (输入词, 译文)：
//! - de->en：左列是译文，右列是输入词
//! - en->de：左列是输入词，右列是译文
//! - 其它组合：在列标题中查找 "Deutsch" / "English" 子串来确定参照列
//!
//! 子串匹配跟随站点的渲染方式，行为必须保持不变。

use tracing::warn;

use crate::api_constants::{item_texts, layout_markers};
use crate::language::LanguageCode;
use crate::translator::{ParseResult, TranslationPair};

/// 按用户方向排列后的翻译
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTranslation {
    /// 输入语言一侧的词；列无法确定时为 `None`
    pub input: Option<String>,
    /// 输出语言一侧的词；列无法确定时为固定的错误文案
    pub output: String,
}

impl ResolvedTranslation {
    fn new(input: &str, output: &str) -> Self {
        Self {
            input: Some(input.to_string()),
            output: output.to_string(),
        }
    }

    fn unresolved() -> Self {
        Self {
            input: None,
            output: item_texts::ERROR_TEXT.to_string(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.input.is_some()
    }
}

/// 参照列的选择：用哪个标记子串，以及参照语言是否为源语言
fn reference_for(source: LanguageCode, destination: LanguageCode) -> Option<(&'static str, bool)> {
    if source == LanguageCode::De {
        Some((layout_markers::GERMAN_MARKER, true))
    } else if destination == LanguageCode::De {
        Some((layout_markers::GERMAN_MARKER, false))
    } else if source == LanguageCode::En {
        Some((layout_markers::ENGLISH_MARKER, true))
    } else if destination == LanguageCode::En {
        Some((layout_markers::ENGLISH_MARKER, false))
    } else {
        None
    }
}

/// 根据列标题排列单个翻译对
///
/// 参照标记出现在左列标题时，参照语言为源语言则左列为输入词，否则反转；
/// 出现在右列标题时规则相反；两列都不含标记时无法解析。
pub fn resolve_with_reference(
    left_language: Option<&str>,
    right_language: Option<&str>,
    pair: &TranslationPair,
    reference: &str,
    is_source: bool,
) -> ResolvedTranslation {
    let (left, right) = (pair.left.as_str(), pair.right.as_str());

    if left_language.is_some_and(|name| name.contains(reference)) {
        if is_source {
            ResolvedTranslation::new(left, right)
        } else {
            ResolvedTranslation::new(right, left)
        }
    } else if right_language.is_some_and(|name| name.contains(reference)) {
        if is_source {
            ResolvedTranslation::new(right, left)
        } else {
            ResolvedTranslation::new(left, right)
        }
    } else {
        ResolvedTranslation::unresolved()
    }
}

/// 将一个翻译对排列为 (输入词, 译文)
pub fn resolve_pair(
    source: LanguageCode,
    destination: LanguageCode,
    left_language: Option<&str>,
    right_language: Option<&str>,
    pair: &TranslationPair,
) -> ResolvedTranslation {
    match (source, destination) {
        (LanguageCode::De, LanguageCode::En) => ResolvedTranslation::new(&pair.right, &pair.left),
        (LanguageCode::En, LanguageCode::De) => ResolvedTranslation::new(&pair.left, &pair.right),
        _ => match reference_for(source, destination) {
            Some((reference, is_source)) => {
                resolve_with_reference(left_language, right_language, pair, reference, is_source)
            }
            None => ResolvedTranslation::unresolved(),
        },
    }
}

/// 排列解析结果中的全部翻译对，单个失败不影响其它翻译对
pub fn resolve_all(
    source: LanguageCode,
    destination: LanguageCode,
    result: &ParseResult,
) -> Vec<ResolvedTranslation> {
    let left_language = result.left_language.as_deref();
    let right_language = result.right_language.as_deref();

    result
        .pairs
        .iter()
        .map(|pair| {
            let resolved = resolve_pair(source, destination, left_language, right_language, pair);
            if !resolved.is_resolved() {
                warn!(
                    "⚠️  无法确定列方向 {}->{}: 列标题 {:?} / {:?}",
                    source, destination, left_language, right_language
                );
            }
            resolved
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> TranslationPair {
        TranslationPair::new("X", "Y")
    }

    fn resolved(input: &str, output: &str) -> ResolvedTranslation {
        ResolvedTranslation::new(input, output)
    }

    #[test]
    fn test_de_en_fixed_orientation() {
        let r = resolve_pair(LanguageCode::De, LanguageCode::En, Some("English"), Some("Deutsch"), &pair());
        assert_eq!(r, resolved("Y", "X"));

        // 列标题不参与判断
        let r = resolve_pair(LanguageCode::De, LanguageCode::En, None, None, &pair());
        assert_eq!(r, resolved("Y", "X"));
    }

    #[test]
    fn test_en_de_fixed_orientation() {
        let r = resolve_pair(LanguageCode::En, LanguageCode::De, Some("Deutsch"), Some("English"), &pair());
        assert_eq!(r, resolved("X", "Y"));
    }

    #[test]
    fn test_fr_to_de_with_german_left_column() {
        // 德语是目标语言：德语列中的 X 是译文
        let r = resolve_pair(
            LanguageCode::Fr,
            LanguageCode::De,
            Some("Deutsch"),
            Some("Französisch"),
            &pair(),
        );
        assert_eq!(r, resolved("Y", "X"));
    }

    #[test]
    fn test_de_to_fr_with_german_left_column() {
        // 德语是源语言：德语列中的 X 是输入词
        let r = resolve_pair(
            LanguageCode::De,
            LanguageCode::Fr,
            Some("Deutsch"),
            Some("Französisch"),
            &pair(),
        );
        assert_eq!(r, resolved("X", "Y"));
    }

    #[test]
    fn test_german_in_right_column() {
        let r = resolve_pair(
            LanguageCode::Fr,
            LanguageCode::De,
            Some("Französisch"),
            Some("Deutsch"),
            &pair(),
        );
        assert_eq!(r, resolved("X", "Y"));

        let r = resolve_pair(
            LanguageCode::De,
            LanguageCode::Fr,
            Some("Französisch"),
            Some("Deutsch"),
            &pair(),
        );
        assert_eq!(r, resolved("Y", "X"));
    }

    #[test]
    fn test_english_reference() {
        let r = resolve_pair(LanguageCode::En, LanguageCode::Sv, Some("English"), Some("Svenska"), &pair());
        assert_eq!(r, resolved("X", "Y"));

        let r = resolve_pair(LanguageCode::Sv, LanguageCode::En, Some("English"), Some("Svenska"), &pair());
        assert_eq!(r, resolved("Y", "X"));

        let r = resolve_pair(LanguageCode::Sv, LanguageCode::En, Some("Svenska"), Some("English"), &pair());
        assert_eq!(r, resolved("X", "Y"));
    }

    #[test]
    fn test_marker_is_substring_match() {
        let r = resolve_pair(
            LanguageCode::Fr,
            LanguageCode::De,
            Some("Französisch"),
            Some("Deutsch (DE)"),
            &pair(),
        );
        assert_eq!(r, resolved("X", "Y"));
    }

    #[test]
    fn test_missing_marker_is_unresolved() {
        let r = resolve_pair(LanguageCode::Fr, LanguageCode::De, Some("Französisch"), Some("Englisch"), &pair());
        assert_eq!(r.input, None);
        assert_eq!(r.output, item_texts::ERROR_TEXT);

        // 两列都不是枢纽语言时同样无法解析
        let r = resolve_pair(LanguageCode::Fr, LanguageCode::Sv, Some("Deutsch"), Some("English"), &pair());
        assert!(!r.is_resolved());
    }

    #[test]
    fn test_resolve_all_isolates_failures() {
        let result = ParseResult::new(
            Some("Deutsch".into()),
            Some("Französisch".into()),
            vec![TranslationPair::new("Haus", "maison"), TranslationPair::new("Hund", "chien")],
        );
        let resolved_pairs = resolve_all(LanguageCode::Fr, LanguageCode::De, &result);
        assert_eq!(
            resolved_pairs,
            vec![resolved("maison", "Haus"), resolved("chien", "Hund")]
        );

        let broken = ParseResult::new(
            Some("Français".into()),
            Some("Italiano".into()),
            vec![TranslationPair::new("a", "b")],
        );
        let resolved_pairs = resolve_all(LanguageCode::Fr, LanguageCode::De, &broken);
        assert_eq!(resolved_pairs.len(), 1);
        assert!(!resolved_pairs[0].is_resolved());
    }
}
