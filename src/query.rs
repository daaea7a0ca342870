//! 查询解析模块
//!
//! 将触发前缀之后的查询文本拆分为 (源语言, 目标语言, 查询词)。
//!
//! 支持的形式：
//! - `<text>`：单个词，de->en
//! - `> <text>`：de->en
//! - `< <text>`：en->de
//! - `<src> <dst> <text>`：显式指定语言
//! - 多个词但前两个都不是语言代码：整串作为查询词，de->en

use crate::language::LanguageCode;

/// 一次查词请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub source: LanguageCode,
    pub destination: LanguageCode,
    pub text: String,
}

impl LookupRequest {
    fn new(source: LanguageCode, destination: LanguageCode, text: String) -> Self {
        Self {
            source,
            destination,
            text,
        }
    }
}

/// 查询文本的解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedQuery {
    /// 没有任何字段，不做任何事
    Empty,
    /// 需要发起查词
    Lookup(LookupRequest),
    /// 两种语言都不是德语或英语
    UnsupportedCombination,
    /// 有语言代码不在支持列表中
    UnsupportedLanguage,
}

/// 解析查询文本
pub fn parse_query(query: &str) -> ParsedQuery {
    let fields: Vec<&str> = query.split_whitespace().collect();

    match fields.as_slice() {
        [] => ParsedQuery::Empty,
        [word] => lookup(LanguageCode::De, LanguageCode::En, word.to_string()),
        [">", rest @ ..] => lookup(LanguageCode::De, LanguageCode::En, rest.join(" ")),
        ["<", rest @ ..] => lookup(LanguageCode::En, LanguageCode::De, rest.join(" ")),
        [src, dst, rest @ ..] => {
            let source = LanguageCode::from_code(src);
            let destination = LanguageCode::from_code(dst);

            match (source, destination) {
                // 前两个字段都不是语言代码，按多词查询处理，例如 "hello world"
                (None, None) => lookup(LanguageCode::De, LanguageCode::En, fields.join(" ")),
                _ if !is_pivot(source) && !is_pivot(destination) => {
                    ParsedQuery::UnsupportedCombination
                }
                (Some(source), Some(destination)) => lookup(source, destination, rest.join(" ")),
                _ => ParsedQuery::UnsupportedLanguage,
            }
        }
    }
}

fn lookup(source: LanguageCode, destination: LanguageCode, text: String) -> ParsedQuery {
    ParsedQuery::Lookup(LookupRequest::new(source, destination, text))
}

fn is_pivot(code: Option<LanguageCode>) -> bool {
    code.is_some_and(LanguageCode::is_pivot)
}
