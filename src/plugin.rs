//! 启动器插件适配层
//!
//! 只负责两件事：声明触发前缀，以及把查词结果转换为结果条目交给宿主。
//! 剪贴板和浏览器等副作用由宿主执行，这里只描述动作。

use std::time::Instant;

use serde_json::{json, Value};
use tracing::{error, info};

use crate::api_constants::{item_texts, plugin_meta};
use crate::config::LookupConfig;
use crate::error::{Result, TranslationError};
use crate::language::LanguageCode;
use crate::query::{parse_query, LookupRequest, ParsedQuery};
use crate::resolver::resolve_all;
use crate::translator::{ParseResult, Translator};
use crate::utils::format_duration;
use crate::web_crawler::{PageFetcher, WebCrawler};

/// 条目动作的具体副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionKind {
    /// 复制文本到系统剪贴板
    CopyToClipboard(String),
    /// 在默认浏览器中打开URL
    OpenUrl(String),
}

/// 结果条目上的命名动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAction {
    pub id: String,
    pub label: String,
    pub kind: ActionKind,
}

impl ItemAction {
    pub fn copy(text: &str) -> Self {
        Self {
            id: "translation_to_clipboard".to_string(),
            label: item_texts::COPY_ACTION_LABEL.to_string(),
            kind: ActionKind::CopyToClipboard(text.to_string()),
        }
    }

    pub fn open(url: &str) -> Self {
        Self {
            id: "open".to_string(),
            label: item_texts::OPEN_ACTION_LABEL.to_string(),
            kind: ActionKind::OpenUrl(url.to_string()),
        }
    }

    pub fn to_json(&self) -> Value {
        let (kind, payload) = match &self.kind {
            ActionKind::CopyToClipboard(text) => ("copy_to_clipboard", text),
            ActionKind::OpenUrl(url) => ("open_url", url),
        };
        json!({
            "id": self.id,
            "label": self.label,
            "kind": kind,
            "payload": payload,
        })
    }
}

/// 交给宿主渲染的结果条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub id: String,
    pub text: String,
    pub subtext: String,
    pub icon: String,
    pub actions: Vec<ItemAction>,
}

impl ResultItem {
    fn new(id: impl Into<String>, icon: &str, text: impl Into<String>, subtext: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            subtext: subtext.into(),
            icon: icon.to_string(),
            actions: Vec::new(),
        }
    }

    fn with_action(mut self, action: ItemAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn to_json(&self) -> Value {
        json!({
            "id": self.id,
            "text": self.text,
            "subtext": self.subtext,
            "icon": self.icon,
            "actions": self.actions.iter().map(ItemAction::to_json).collect::<Vec<_>>(),
        })
    }
}

/// 宿主提供的单次查询接口
pub trait QueryHost {
    /// 触发前缀之后的查询文本
    fn query_string(&self) -> &str;
    /// 提交结果条目
    fn add_items(&mut self, items: Vec<ResultItem>);
}

/// dict.cc 查词插件
pub struct DictPlugin<F = WebCrawler> {
    translator: Translator<F>,
    config: LookupConfig,
}

impl DictPlugin<WebCrawler> {
    pub fn new(config: LookupConfig) -> Result<Self> {
        let translator = Translator::from_config(&config)?;
        Ok(Self { translator, config })
    }
}

impl<F: PageFetcher> DictPlugin<F> {
    pub fn with_translator(translator: Translator<F>, config: LookupConfig) -> Self {
        Self { translator, config }
    }

    pub fn name(&self) -> &'static str {
        plugin_meta::NAME
    }

    pub fn description(&self) -> &'static str {
        plugin_meta::DESCRIPTION
    }

    pub fn version(&self) -> &'static str {
        plugin_meta::VERSION
    }

    /// 宿主注册时使用的触发前缀
    pub fn default_trigger(&self) -> &str {
        self.config.trigger()
    }

    /// 处理一次触发查询；空查询不提交任何条目
    pub async fn handle_trigger_query<H: QueryHost>(&self, host: &mut H) {
        if let Some(items) = self.handle_query(host.query_string()).await {
            host.add_items(items);
        }
    }

    /// 将查询文本转换为结果条目；空查询返回 `None`
    pub async fn handle_query(&self, query: &str) -> Option<Vec<ResultItem>> {
        let request = match parse_query(query) {
            ParsedQuery::Empty => return None,
            ParsedQuery::UnsupportedCombination => {
                return Some(vec![self.unsupported_combination_item()])
            }
            ParsedQuery::UnsupportedLanguage => return Some(vec![self.unsupported_language_item()]),
            ParsedQuery::Lookup(request) => request,
        };

        let started = Instant::now();
        let items = match self
            .translator
            .translate(
                &request.text,
                request.source.code(),
                request.destination.code(),
            )
            .await
        {
            Ok(result) => self.result_items(&request, &result),
            Err(e) => vec![self.failure_item(&e)],
        };
        info!(
            "✅ '{}' 处理完成: {} 个条目, 耗时 {}",
            request.text,
            items.len(),
            format_duration(started.elapsed())
        );

        Some(items)
    }

    /// 有结果时先放“显示全部结果”条目，再逐条放译文；无结果时只放一条提示
    pub fn result_items(&self, request: &LookupRequest, result: &ParseResult) -> Vec<ResultItem> {
        let icon = self.config.icon();
        let resolved = resolve_all(request.source, request.destination, result);

        if resolved.is_empty() {
            return vec![ResultItem::new("no_results", icon, item_texts::NO_RESULTS_TEXT, "")];
        }

        let mut items = Vec::with_capacity(resolved.len() + 1);

        let mut open_all = ResultItem::new(
            "open_dictcc",
            icon,
            item_texts::OPEN_ALL_TEXT,
            item_texts::OPEN_ALL_SUBTEXT,
        );
        if let Some(url) = &result.source_url {
            open_all = open_all.with_action(ItemAction::open(url.as_str()));
        }
        items.push(open_all);

        for (idx, translation) in resolved.iter().enumerate() {
            let input = translation
                .input
                .as_deref()
                .unwrap_or(item_texts::UNKNOWN_INPUT);
            items.push(
                ResultItem::new(
                    format!("translation_{}", idx),
                    icon,
                    translation.output.as_str(),
                    format!(
                        "{}->{} translation of '{}'",
                        request.source, request.destination, input
                    ),
                )
                .with_action(ItemAction::copy(&translation.output)),
            );
        }

        items
    }

    fn unsupported_combination_item(&self) -> ResultItem {
        ResultItem::new(
            "unsupported_lang_combination",
            self.config.icon(),
            item_texts::UNSUPPORTED_COMBINATION_TEXT,
            item_texts::UNSUPPORTED_COMBINATION_SUBTEXT,
        )
    }

    fn unsupported_language_item(&self) -> ResultItem {
        let codes: Vec<String> = LanguageCode::ALL
            .iter()
            .map(|lang| format!("'{}'", lang.code()))
            .collect();
        ResultItem::new(
            "unsupported_language",
            self.config.icon(),
            item_texts::UNSUPPORTED_LANGUAGE_TEXT,
            format!(
                "Source and destination language must be one of [{}].",
                codes.join(", ")
            ),
        )
    }

    fn failure_item(&self, error: &TranslationError) -> ResultItem {
        if error.is_layout_change() {
            error!("❌ 结果页布局已变化，需要更新解析器: {}", error);
        } else {
            error!("❌ 查词失败: {}", error);
        }
        ResultItem::new(
            "lookup_failed",
            self.config.icon(),
            item_texts::LOOKUP_FAILED_TEXT,
            error.to_string(),
        )
    }
}
