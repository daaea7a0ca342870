/// 查词插件常量配置
///
/// 该文件定义了站点、页面结构和结果条目相关的常量，方便统一管理和维护

/// dict.cc 站点配置
pub mod site_config {
    /// 站点域名，子域名为 `{src}-{dst}`
    pub const DEFAULT_SITE_DOMAIN: &str = "dict.cc";

    /// 查询参数名
    pub const SEARCH_PARAM: &str = "s";

    /// 站点会拦截非浏览器UA，因此伪装为Firefox
    pub const DEFAULT_USER_AGENT: &str =
        "Mozilla/5.0 (Windows NT 6.3; WOW64; rv:30.0) Gecko/20100101 Firefox/30.0";

    /// 请求超时时间（秒）
    pub const REQUEST_TIMEOUT_SECONDS: u64 = 5;
}

/// 结果页DOM标记
///
/// dict.cc 按结果数量渲染两种表格布局，标记如下
pub mod layout_markers {
    /// 建议表格中的窄列单元格
    pub const SUGGESTION_CELL_CLASS: &str = "td3nl";

    /// 完整结果表格中的宽列单元格
    pub const WIDE_CELL_CLASS: &str = "td7nl";

    /// 语言表头单元格
    pub const LANGUAGE_HEADER_CLASS: &str = "td2";

    /// 完整结果表格要求的文字方向
    pub const LTR_DIRECTION: &str = "ltr";

    /// 德语列标题中包含的子串
    pub const GERMAN_MARKER: &str = "Deutsch";

    /// 英语列标题中包含的子串
    pub const ENGLISH_MARKER: &str = "English";
}

/// 插件元数据
pub mod plugin_meta {
    pub const NAME: &str = "Dict.cc Dictionary Lookups";
    pub const DESCRIPTION: &str = "Look up words in the dict.cc dictionary";
    pub const VERSION: &str = "0.9";
    pub const DEFAULT_TRIGGER: &str = "cc ";
    pub const DEFAULT_ICON: &str = "icon.png";
}

/// 结果条目文案
pub mod item_texts {
    /// 列解析失败时的替代译文
    pub const ERROR_TEXT: &str =
        "Something went wrong. Please report your query to my developer via a Git Issue!";

    pub const OPEN_ALL_TEXT: &str = "Show all results (opens browser)";
    pub const OPEN_ALL_SUBTEXT: &str =
        "Tip: You can scroll the result list with your arrow keys to show more results.";
    pub const OPEN_ACTION_LABEL: &str = "Open dict.cc";

    pub const COPY_ACTION_LABEL: &str = "Copy translation to clipboard";

    pub const NO_RESULTS_TEXT: &str = "No results found!";

    pub const UNSUPPORTED_COMBINATION_TEXT: &str = "Unsupported language combination!";
    pub const UNSUPPORTED_COMBINATION_SUBTEXT: &str = "One language must be one of ['en', 'de'].";

    pub const UNSUPPORTED_LANGUAGE_TEXT: &str = "Unsupported language!";

    pub const LOOKUP_FAILED_TEXT: &str = "Something went wrong.";

    /// 输入词无法确定时在副标题中显示的占位
    pub const UNKNOWN_INPUT: &str = "?";
}

/// 实用工具函数
/// 验证站点域名是否可用于拼接子域名
pub fn is_valid_site_domain(domain: &str) -> bool {
    !domain.is_empty()
        && !domain.contains("://")
        && !domain.contains('/')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
