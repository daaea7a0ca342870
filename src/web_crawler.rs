//! Web抓取模块 - 向 dict.cc 发起单次查词请求
//!
//! 此模块负责：
//! - 使用reqwest发送带浏览器UA的GET请求
//! - 施加固定超时，超时和连接失败统一归类为网络错误
//! - 返回响应正文和实际请求的URL，供结果页解析与“在浏览器打开”使用

// 标准库导入
use std::time::Duration;

// 第三方crate导入
use reqwest::header::USER_AGENT;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

// 本地模块导入
use crate::api_constants::site_config;
use crate::config::LookupConfig;
use crate::error::Result;
use crate::translation_error;

/// 抓取到的页面
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// 实际请求的URL（经过站点重定向后的最终地址）
    pub url: Url,
    /// HTTP状态码
    pub status: u16,
    /// 原始响应正文
    pub body: Vec<u8>,
}

/// 页面抓取接口
///
/// 查词流程只依赖这个接口，测试时可以替换为不访问网络的实现
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    /// 抓取单个页面，不做重试
    async fn fetch(&self, url: Url) -> Result<FetchedPage>;
}

/// Web抓取器配置结构体
#[derive(Debug, Clone)]
pub struct WebCrawlerConfig {
    /// 用户代理字符串
    pub user_agent: String,
    /// 请求超时时间
    pub timeout: Duration,
}

impl Default for WebCrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: site_config::DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(site_config::REQUEST_TIMEOUT_SECONDS),
        }
    }
}

impl From<&LookupConfig> for WebCrawlerConfig {
    fn from(config: &LookupConfig) -> Self {
        Self {
            user_agent: config.user_agent().to_string(),
            timeout: config.timeout(),
        }
    }
}

/// 基于reqwest的页面抓取器
///
/// 内部的 `Client` 只持有连接池，不保存任何跨查询的业务状态
pub struct WebCrawler {
    config: WebCrawlerConfig,
    client: Client,
}

impl WebCrawler {
    /// 创建新的抓取器实例
    pub fn new(config: WebCrawlerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| translation_error!(config, "http_client", e))?;
        Ok(Self { config, client })
    }

    /// 使用默认配置创建抓取器
    pub fn with_defaults() -> Result<Self> {
        Self::new(WebCrawlerConfig::default())
    }

    /// 获取当前配置
    pub fn config(&self) -> &WebCrawlerConfig {
        &self.config
    }
}

impl PageFetcher for WebCrawler {
    async fn fetch(&self, url: Url) -> Result<FetchedPage> {
        debug!("🌐 请求: {}", url);

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, self.config.user_agent.as_str())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // 与站点行为保持一致：非2xx仍然解析正文，页面无标记时自然得到空结果
            warn!("⚠️  站点返回非成功状态: {}", status);
        }

        let final_url = response.url().clone();
        let body = response.bytes().await?;
        debug!("📄 响应大小: {} 字节", body.len());

        Ok(FetchedPage {
            url: final_url,
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}
