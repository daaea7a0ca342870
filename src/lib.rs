//! dict.cc 查词插件库
//!
//! 这个库提供查询解析、结果页抓取与解析、列方向解析，以及面向启动器宿主的结果条目。

pub mod api_constants;
pub mod config;
pub mod error;
pub mod html_processor;
pub mod language;
pub mod plugin;
pub mod query;
pub mod resolver;
pub mod translator;
pub mod utils;
pub mod web_crawler;
