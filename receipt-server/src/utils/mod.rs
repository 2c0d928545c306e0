//! 工具模块 - 日志和输入校验
//!
//! # 内容
//!
//! - [`logger`] - tracing 初始化
//! - [`validation`] - 收据请求校验

pub mod logger;
pub mod validation;
