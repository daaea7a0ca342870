//! 配置管理模块
//!
//! 提供CLI参数解析和查词配置管理功能

// 标准库导入
use std::time::Duration;

// 第三方crate导入
use clap::Parser;

// 本地模块导入
use crate::api_constants::{is_valid_site_domain, plugin_meta, site_config};
use crate::error::Result;
use crate::translation_error;

/// 查词配置结构体
///
/// 每次查询使用的只读配置，支持Builder模式进行链式配置。
///
/// # Examples
///
/// ```rust
/// use dictcc_lookup::config::LookupConfig;
///
/// let config = LookupConfig::new()
///     .with_site_domain("dict.cc")
///     .with_timeout_secs(5)
///     .with_trigger("cc ");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// 启动器触发前缀
    trigger: String,
    /// 站点域名
    site_domain: String,
    /// 请求使用的User-Agent
    user_agent: String,
    /// 请求超时时间（秒）
    timeout_secs: u64,
    /// 结果条目图标
    icon: String,
}

impl LookupConfig {
    /// 创建新的配置实例
    ///
    /// 返回具有默认值的配置实例：
    /// - 触发前缀: "cc "
    /// - 站点域名: dict.cc
    /// - User-Agent: Firefox 浏览器标识
    /// - 超时: 5秒
    pub fn new() -> Self {
        Self {
            trigger: plugin_meta::DEFAULT_TRIGGER.to_string(),
            site_domain: site_config::DEFAULT_SITE_DOMAIN.to_string(),
            user_agent: site_config::DEFAULT_USER_AGENT.to_string(),
            timeout_secs: site_config::REQUEST_TIMEOUT_SECONDS,
            icon: plugin_meta::DEFAULT_ICON.to_string(),
        }
    }

    /// 从CLI参数构建配置
    pub fn from_cli(cli: &Cli) -> Self {
        let mut config = Self::new()
            .with_site_domain(&cli.domain)
            .with_timeout_secs(cli.timeout);
        if let Some(user_agent) = &cli.user_agent {
            config = config.with_user_agent(user_agent);
        }
        if let Some(icon) = &cli.icon {
            config = config.with_icon(icon);
        }
        config
    }

    /// 获取触发前缀
    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// 获取站点域名
    pub fn site_domain(&self) -> &str {
        &self.site_domain
    }

    /// 获取User-Agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// 获取请求超时
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// 获取图标引用
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// 设置触发前缀
    pub fn with_trigger(mut self, trigger: &str) -> Self {
        self.trigger = trigger.to_string();
        self
    }

    /// 设置站点域名
    pub fn with_site_domain(mut self, domain: &str) -> Self {
        self.site_domain = domain.to_string();
        self
    }

    /// 设置User-Agent
    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// 设置请求超时（秒）
    pub fn with_timeout_secs(mut self, seconds: u64) -> Self {
        self.timeout_secs = seconds;
        self
    }

    /// 设置图标引用
    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = icon.to_string();
        self
    }

    /// 校验配置
    pub fn validate(&self) -> Result<()> {
        if !is_valid_site_domain(&self.site_domain) {
            return Err(translation_error!(
                config,
                "site_domain",
                format!("无效的站点域名: {:?}", self.site_domain)
            ));
        }
        if self.timeout_secs == 0 {
            return Err(translation_error!(config, "timeout", "超时时间必须大于0"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(translation_error!(config, "user_agent", "User-Agent不能为空"));
        }
        Ok(())
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// CLI参数结构
#[derive(Parser, Debug)]
#[command(author, version, about = "dict.cc 查词工具 - 以启动器插件的方式输出结果条目", long_about = None)]
pub struct Cli {
    /// 查询内容，例如: `en fr hello`、`< Haus`、`hello world`
    #[arg(value_name = "QUERY", trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,

    /// 站点域名
    #[arg(long, default_value = site_config::DEFAULT_SITE_DOMAIN)]
    pub domain: String,

    /// 请求超时时间（秒）
    #[arg(long, default_value_t = site_config::REQUEST_TIMEOUT_SECONDS)]
    pub timeout: u64,

    /// 自定义User-Agent字符串
    #[arg(long)]
    pub user_agent: Option<String>,

    /// 结果条目图标
    #[arg(long)]
    pub icon: Option<String>,

    /// 以JSON格式输出结果条目
    #[arg(long)]
    pub json: bool,

    /// 详细输出模式
    #[arg(short, long)]
    pub verbose: bool,

    /// 静默模式 (仅输出结果)
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// 将查询词重新拼接为启动器收到的查询字符串
    pub fn query_string(&self) -> String {
        self.query.join(" ")
    }
}
