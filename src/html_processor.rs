//! HTML处理模块
//!
//! 解析 dict.cc 结果页，提取翻译对和两列的语言名称。
//!
//! 站点按结果数量渲染两种表格布局：
//! - 建议表格：恰好两个 `td.td3nl` 单元格，每个单元格内的链接按位置配对
//! - 完整结果表格：若干 `td.td7nl[dir=ltr]` 单元格，按奇偶交替构成左右两列
//!
//! 判断页面属于哪种布局的逻辑只在 [`PageLayout::detect`] 中出现。

// 第三方crate导入
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::{debug, warn};

// 本地模块导入
use crate::api_constants::layout_markers;
use crate::error::Result;
use crate::translation_error;
use crate::translator::{ParseResult, TranslationPair};
use crate::utils::join_words;

/// 结果页布局
///
/// 每次解析只判定一次，后续提取逻辑按变体分派
pub enum PageLayout {
    /// 建议表格：左右两列单元格
    Suggestions { left: Handle, right: Handle },
    /// 完整结果表格：按文档顺序排列的宽列单元格
    FullResults { cells: Vec<Handle> },
    /// 页面中没有可识别的结果表格
    NoResults,
}

impl PageLayout {
    /// 根据页面中的标记元素判定布局，建议表格优先
    pub fn detect(dom: &RcDom) -> Self {
        let mut suggestion_cells = find_elements(&dom.document, |node| {
            is_td_with_class(node, layout_markers::SUGGESTION_CELL_CLASS)
        });
        if suggestion_cells.len() == 2 {
            let right = suggestion_cells.pop();
            let left = suggestion_cells.pop();
            if let (Some(left), Some(right)) = (left, right) {
                return PageLayout::Suggestions { left, right };
            }
        }

        let wide_cells = find_elements(&dom.document, |node| {
            is_td_with_class(node, layout_markers::WIDE_CELL_CLASS)
                && has_attr_value(node, "dir", layout_markers::LTR_DIRECTION)
        });
        if wide_cells.len() >= 2 {
            return PageLayout::FullResults { cells: wide_cells };
        }

        if !suggestion_cells.is_empty() || !wide_cells.is_empty() {
            debug!(
                "结果表格不完整 (建议单元格 {} 个, 宽列单元格 {} 个)，按无结果处理",
                suggestion_cells.len(),
                wide_cells.len()
            );
        }
        PageLayout::NoResults
    }

    /// 布局名称，用于日志
    pub fn name(&self) -> &'static str {
        match self {
            PageLayout::Suggestions { .. } => "suggestions",
            PageLayout::FullResults { .. } => "full-results",
            PageLayout::NoResults => "no-results",
        }
    }
}

/// 将原始HTML解析为DOM
pub fn parse_html(html: &str) -> Result<RcDom> {
    parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| translation_error!(html_parse, format!("{:?}", e)))
}

/// 解析结果页
///
/// 没有任何布局标记时返回空结果；有标记但语言表头数量不对时返回 `Layout` 错误
pub fn parse_result_page(html: &str) -> Result<ParseResult> {
    let dom = parse_html(html)?;
    let layout = PageLayout::detect(&dom);
    debug!("🔍 检测到结果页布局: {}", layout.name());

    let result = match layout {
        PageLayout::Suggestions { left, right } => {
            let (left_language, right_language) =
                language_headers(&dom, false, |cell| join_words(text_nodes(cell)))?;
            let pairs = link_texts(&left)
                .into_iter()
                .zip(link_texts(&right))
                .map(|(left, right)| TranslationPair::new(left, right))
                .collect();
            ParseResult::new(left_language, right_language, pairs)
        }
        PageLayout::FullResults { cells } => {
            let (left_language, right_language) = language_headers(&dom, true, |cell| {
                text_nodes(cell)
                    .into_iter()
                    .map(|text| text.trim().to_string())
                    .find(|text| !text.is_empty())
                    .unwrap_or_default()
            })?;
            // 偶数位为左列，奇数位为右列；末尾落单的单元格直接丢弃
            let pairs = cells
                .chunks_exact(2)
                .map(|row| {
                    TranslationPair::new(wide_cell_text(&row[0], true), wide_cell_text(&row[1], false))
                })
                .collect();
            ParseResult::new(left_language, right_language, pairs)
        }
        PageLayout::NoResults => ParseResult::empty(),
    };

    result.ensure_languages()?;
    debug!("📝 提取到 {} 个翻译对", result.n_results());
    Ok(result)
}

/// 读取恰好两个语言表头单元格
fn language_headers<F>(
    dom: &RcDom,
    require_ltr: bool,
    extract: F,
) -> Result<(Option<String>, Option<String>)>
where
    F: Fn(&Handle) -> String,
{
    let headers = find_elements(&dom.document, |node| {
        is_td_with_class(node, layout_markers::LANGUAGE_HEADER_CLASS)
            && (!require_ltr || has_attr_value(node, "dir", layout_markers::LTR_DIRECTION))
    });

    if headers.len() != 2 {
        warn!("⚠️  语言表头数量异常: 期望 2 个, 实际 {} 个", headers.len());
        return Err(translation_error!(
            layout,
            format!("expected 2 language header cells, found {}", headers.len())
        ));
    }

    let names: Vec<Option<String>> = headers
        .iter()
        .map(|cell| {
            let name = extract(cell);
            if name.is_empty() {
                None
            } else {
                Some(name)
            }
        })
        .collect();
    Ok((names[0].clone(), names[1].clone()))
}

/// 完整结果表格中单元格的文本：所有链接文本以单个空格拼接
///
/// 左列链接内部的文本片段以空格分隔，右列链接内部的片段直接相连
fn wide_cell_text(cell: &Handle, left_column: bool) -> String {
    let links = find_elements(cell, |node| is_element(node, "a"));
    join_words(links.iter().map(|link| {
        if left_column {
            join_words(text_nodes(link))
        } else {
            text_nodes(link).concat()
        }
    }))
}

/// 单元格内每个链接的文本，保持文档顺序
fn link_texts(cell: &Handle) -> Vec<String> {
    find_elements(cell, |node| is_element(node, "a"))
        .iter()
        .map(|link| text_nodes(link).concat().trim().to_string())
        .collect()
}

/// 按文档顺序（先序深度优先）收集满足条件的后代元素
fn find_elements<P>(root: &Handle, predicate: P) -> Vec<Handle>
where
    P: Fn(&Handle) -> bool,
{
    let mut found = Vec::new();
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();

    while let Some(node) = stack.pop() {
        if predicate(&node) {
            found.push(node.clone());
        }
        for child in node.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }

    found
}

/// 收集节点下所有文本节点的内容，保持文档顺序
fn text_nodes(root: &Handle) -> Vec<String> {
    let mut texts = Vec::new();
    let mut stack: Vec<Handle> = root.children.borrow().iter().rev().cloned().collect();

    while let Some(node) = stack.pop() {
        if let NodeData::Text { ref contents } = node.data {
            texts.push(contents.borrow().to_string());
        }
        for child in node.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }

    texts
}

fn is_element(node: &Handle, tag: &str) -> bool {
    match node.data {
        NodeData::Element { ref name, .. } => &*name.local == tag,
        _ => false,
    }
}

/// `td` 元素且 class 列表中包含指定类名
fn is_td_with_class(node: &Handle, class: &str) -> bool {
    if !is_element(node, "td") {
        return false;
    }
    match node.data {
        NodeData::Element { ref attrs, .. } => attrs.borrow().iter().any(|attr| {
            &*attr.name.local == "class" && attr.value.split_whitespace().any(|c| c == class)
        }),
        _ => false,
    }
}

fn has_attr_value(node: &Handle, attr_name: &str, value: &str) -> bool {
    match node.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .any(|attr| &*attr.name.local == attr_name && &*attr.value == value),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TranslationError;

    fn suggestion_page(pairs: &[(&str, &str)], headers: &[&str]) -> String {
        let header_cells: String = headers
            .iter()
            .map(|h| format!("<td class=\"td2\">{}</td>", h))
            .collect();
        let left: String = pairs
            .iter()
            .map(|(l, _)| format!("<a href=\"#\">{}</a><br>", l))
            .collect();
        let right: String = pairs
            .iter()
            .map(|(_, r)| format!("<a href=\"#\">{}</a><br>", r))
            .collect();
        format!(
            "<html><body><table><tr>{}</tr><tr><td class=\"td3nl\">{}</td><td class=\"td3nl\">{}</td></tr></table></body></html>",
            header_cells, left, right
        )
    }

    fn wide_page(cells: &[&str], headers: &[&str]) -> String {
        let header_cells: String = headers
            .iter()
            .map(|h| format!("<td class=\"td2\" dir=\"ltr\"><b>{}</b></td>", h))
            .collect();
        let rows: String = cells
            .chunks(2)
            .map(|row| {
                let tds: String = row
                    .iter()
                    .map(|cell| format!("<td class=\"td7nl\" dir=\"ltr\">{}</td>", cell))
                    .collect();
                format!("<tr><td class=\"td7cm\">1</td>{}</tr>", tds)
            })
            .collect();
        format!(
            "<html><body><table><tr>{}</tr>{}</table></body></html>",
            header_cells, rows
        )
    }

    #[test]
    fn test_suggestion_layout_pair_counts() {
        let all = [("Haus", "house"), ("Hund", "dog"), ("Katze", "cat")];
        for n in 0..=3 {
            let html = suggestion_page(&all[..n], &["Deutsch", "Englisch"]);
            let result = parse_result_page(&html).unwrap();

            assert_eq!(result.n_results(), n);
            assert_eq!(result.left_language.as_deref(), Some("Deutsch"));
            assert_eq!(result.right_language.as_deref(), Some("Englisch"));
            for (pair, (left, right)) in result.pairs.iter().zip(all.iter()) {
                assert_eq!(pair.left, *left);
                assert_eq!(pair.right, *right);
            }
            assert!(result.source_url.is_none());
        }
    }

    #[test]
    fn test_suggestion_layout_header_count_mismatch() {
        let html = suggestion_page(&[("Haus", "house")], &["Deutsch"]);
        let err = parse_result_page(&html).unwrap_err();
        assert!(matches!(err, TranslationError::Layout { .. }));

        let html = suggestion_page(&[("Haus", "house")], &["Deutsch", "Englisch", "Extra"]);
        assert!(parse_result_page(&html).unwrap_err().is_layout_change());
    }

    #[test]
    fn test_wide_layout_joins_links() {
        let html = wide_page(
            &[
                "<a href=\"#\">ins</a> <a href=\"#\">Haus</a>",
                "<a href=\"#\">into</a> <a href=\"#\">the</a> <a href=\"#\">house</a>",
                "<a href=\"#\">Haus</a> <var>{n}</var>",
                "<a href=\"#\">house</a>",
            ],
            &["Deutsch", "English"],
        );
        let result = parse_result_page(&html).unwrap();

        assert_eq!(result.n_results(), 2);
        assert_eq!(result.pairs[0], TranslationPair::new("ins Haus", "into the house"));
        assert_eq!(result.pairs[1], TranslationPair::new("Haus", "house"));
        assert_eq!(result.left_language.as_deref(), Some("Deutsch"));
        assert_eq!(result.right_language.as_deref(), Some("English"));
    }

    #[test]
    fn test_wide_layout_drops_trailing_unpaired_cell() {
        let html = wide_page(
            &[
                "<a>Haus</a>",
                "<a>house</a>",
                "<a>Hund</a>",
                "<a>dog</a>",
                "<a>Waise</a>",
            ],
            &["Deutsch", "English"],
        );
        let result = parse_result_page(&html).unwrap();

        assert_eq!(result.n_results(), 2);
        assert_eq!(result.pairs[1], TranslationPair::new("Hund", "dog"));
        assert!(result.pairs.iter().all(|p| p.left != "Waise" && p.right != "Waise"));
    }

    #[test]
    fn test_wide_layout_missing_header() {
        let html = wide_page(&["<a>Haus</a>", "<a>house</a>"], &["Deutsch"]);
        let err = parse_result_page(&html).unwrap_err();
        assert!(err.is_layout_change());
    }

    #[test]
    fn test_wide_layout_ignores_headers_without_ltr() {
        // 没有 dir="ltr" 的表头不计入
        let html = "<html><body><table>\
            <tr><td class=\"td2\" dir=\"ltr\">Deutsch</td><td class=\"td2\">English</td></tr>\
            <tr><td class=\"td7nl\" dir=\"ltr\"><a>Haus</a></td><td class=\"td7nl\" dir=\"ltr\"><a>house</a></td></tr>\
            </table></body></html>";
        assert!(parse_result_page(html).unwrap_err().is_layout_change());
    }

    #[test]
    fn test_no_markers_is_empty_result() {
        let html = "<html><body><p>Keine Treffer</p></body></html>";
        let result = parse_result_page(html).unwrap();
        assert_eq!(result.n_results(), 0);
        assert!(result.left_language.is_none());
        assert!(result.right_language.is_none());

        assert_eq!(parse_result_page("").unwrap().n_results(), 0);
    }

    #[test]
    fn test_layout_detection_prefers_suggestions() {
        let html = "<html><body><table>\
            <tr><td class=\"td2\">Deutsch</td><td class=\"td2\">English</td></tr>\
            <tr><td class=\"td3nl\"><a>Haus</a></td><td class=\"td3nl\"><a>house</a></td></tr>\
            <tr><td class=\"td7nl\" dir=\"ltr\"><a>x</a></td><td class=\"td7nl\" dir=\"ltr\"><a>y</a></td></tr>\
            </table></body></html>";
        let dom = parse_html(html).unwrap();
        assert!(matches!(PageLayout::detect(&dom), PageLayout::Suggestions { .. }));

        let result = parse_result_page(html).unwrap();
        assert_eq!(result.pairs, vec![TranslationPair::new("Haus", "house")]);
    }

    #[test]
    fn test_single_marker_cell_is_no_results() {
        let html = "<html><body><table><tr><td class=\"td7nl\" dir=\"ltr\"><a>Haus</a></td></tr></table></body></html>";
        let dom = parse_html(html).unwrap();
        assert!(matches!(PageLayout::detect(&dom), PageLayout::NoResults));
        assert_eq!(parse_result_page(html).unwrap().n_results(), 0);
    }

    #[test]
    fn test_rows_without_language_names_fail() {
        let html = suggestion_page(&[("Haus", "house")], &["", "Englisch"]);
        assert!(parse_result_page(&html).unwrap_err().is_layout_change());
    }
}
