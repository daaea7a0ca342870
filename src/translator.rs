use tracing::{debug, info};
use url::Url;

use crate::api_constants::site_config;
use crate::config::LookupConfig;
use crate::error::Result;
use crate::html_processor::parse_result_page;
use crate::language::LanguageCode;
use crate::translation_error;
use crate::web_crawler::{PageFetcher, WebCrawler, WebCrawlerConfig};

/// 结果表格中的一行，按站点的列顺序（尚未对应到用户的源/目标语言）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationPair {
    pub left: String,
    pub right: String,
}

impl TranslationPair {
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }
}

/// 结果页解析结果
///
/// `left_language` / `right_language` 是站点渲染的列标题（如 "Deutsch"、"English"），
/// 只用于列解析；`source_url` 由 [`Translator`] 在解析之后填写。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    pub left_language: Option<String>,
    pub right_language: Option<String>,
    pub pairs: Vec<TranslationPair>,
    pub source_url: Option<Url>,
}

impl ParseResult {
    pub fn new(
        left_language: Option<String>,
        right_language: Option<String>,
        pairs: Vec<TranslationPair>,
    ) -> Self {
        Self {
            left_language,
            right_language,
            pairs,
            source_url: None,
        }
    }

    /// 无结果
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn n_results(&self) -> usize {
        self.pairs.len()
    }

    /// 有翻译对时两列语言名称必须都存在
    pub fn ensure_languages(&self) -> Result<()> {
        if !self.pairs.is_empty()
            && (self.left_language.is_none() || self.right_language.is_none())
        {
            return Err(translation_error!(
                layout,
                format!(
                    "{} rows found but language names are missing",
                    self.pairs.len()
                )
            ));
        }
        Ok(())
    }
}

/// 构造查词URL: `https://{from}-{to}.{domain}/?s={word}`
pub fn build_lookup_url(
    site_domain: &str,
    from: LanguageCode,
    to: LanguageCode,
    word: &str,
) -> Result<Url> {
    let base = format!("https://{}-{}.{}/", from.code(), to.code(), site_domain);
    Url::parse_with_params(&base, &[(site_config::SEARCH_PARAM, word)])
        .map_err(|e| translation_error!(config, "site_domain", format!("{}: {}", base, e)))
}

/// dict.cc 查词器
///
/// 每次调用 [`Translator::translate`] 都是一次独立的请求-解析过程，不缓存任何结果
pub struct Translator<F = WebCrawler> {
    fetcher: F,
    site_domain: String,
}

impl Translator<WebCrawler> {
    /// 根据配置创建使用真实网络的查词器
    pub fn from_config(config: &LookupConfig) -> Result<Self> {
        config.validate()?;
        let crawler = WebCrawler::new(WebCrawlerConfig::from(config))?;
        Ok(Self::with_fetcher(crawler, config.site_domain()))
    }
}

impl<F: PageFetcher> Translator<F> {
    pub fn with_fetcher(fetcher: F, site_domain: &str) -> Self {
        Self {
            fetcher,
            site_domain: site_domain.to_string(),
        }
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// 查询一个词
    ///
    /// 语言代码不区分大小写；任一代码不受支持时在发出请求前返回 `UnavailableLanguage`。
    /// 网络失败不重试。返回结果的 `source_url` 为实际请求的URL。
    pub async fn translate(
        &self,
        word: &str,
        from_language: &str,
        to_language: &str,
    ) -> Result<ParseResult> {
        let from = LanguageCode::parse(from_language)?;
        let to = LanguageCode::parse(to_language)?;

        let url = build_lookup_url(&self.site_domain, from, to, word)?;
        info!("🔎 查询 '{}' ({}->{})", word, from, to);

        let page = self.fetcher.fetch(url).await?;
        let body = String::from_utf8(page.body)
            .map_err(|e| translation_error!(html_parse, format!("响应不是有效的UTF-8: {}", e)))?;

        let mut result = parse_result_page(&body)?;
        result.source_url = Some(page.url);
        debug!("✅ 共 {} 条结果", result.n_results());

        Ok(result)
    }
}
