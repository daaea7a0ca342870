use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use dictcc_lookup::config::{Cli, LookupConfig};
use dictcc_lookup::plugin::{ActionKind, DictPlugin, QueryHost, ResultItem};
use dictcc_lookup::utils::init_logging;

/// 命令行宿主：把一次查询的结果条目打印到stdout
struct CliHost {
    query: String,
    items: Vec<ResultItem>,
}

impl QueryHost for CliHost {
    fn query_string(&self) -> &str {
        &self.query
    }

    fn add_items(&mut self, items: Vec<ResultItem>) {
        self.items.extend(items);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    init_logging(cli.verbose, cli.quiet);

    let config = LookupConfig::from_cli(&cli);
    debug!("查词配置: {:?}", config);

    let plugin = DictPlugin::new(config).context("创建查词插件失败")?;

    let mut host = CliHost {
        query: cli.query_string(),
        items: Vec::new(),
    };
    plugin.handle_trigger_query(&mut host).await;

    if cli.json {
        let items: Vec<_> = host.items.iter().map(ResultItem::to_json).collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&items).context("序列化结果条目失败")?
        );
    } else {
        print_items(&host.items);
    }

    Ok(())
}

/// 以纯文本形式打印结果条目
fn print_items(items: &[ResultItem]) {
    for item in items {
        println!("{}", item.text);
        if !item.subtext.is_empty() {
            println!("    {}", item.subtext);
        }
        for action in &item.actions {
            match &action.kind {
                ActionKind::CopyToClipboard(text) => println!("    [{}] {}", action.label, text),
                ActionKind::OpenUrl(url) => println!("    [{}] {}", action.label, url),
            }
        }
    }
}
