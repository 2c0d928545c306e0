//! Receipt Generator Server
//!
//! # 架构概述
//!
//! 接收收据数据 (JSON)，分配收据编号，渲染 PNG 并作为附件返回。
//!
//! - **计数器** (`counter`): 收据编号分配，JSON 文件持久化
//! - **HTTP API** (`api`): 生成接口、健康检查
//! - **渲染** (`receipt_render` crate): 模板合成与 PNG 编码
//!
//! # 模块结构
//!
//! ```text
//! receipt-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── counter/       # 收据编号计数器
//! ├── utils/         # 日志、校验
//! └── routes.rs      # 路由和中间件组装
//! ```

pub mod api;
pub mod core;
pub mod counter;
pub mod routes;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use counter::{FileCounterStore, MemoryCounterStore, ReceiptCounter};
pub use routes::{build_app, build_router};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

pub fn print_banner() {
    println!(
        r#"
    ____                  _       __
   / __ \___  ________  (_)___  / /_
  / /_/ / _ \/ ___/ _ \/ / __ \/ __/
 / _, _/  __/ /__/  __/ / /_/ / /_
/_/ |_|\___/\___/\___/_/ .___/\__/
                      /_/
    "#
    );
}

/// 设置运行环境 (dotenv, 日志, 工作目录)
pub fn setup_environment() -> crate::core::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();

    init_logger_with_file(
        Some(&config.log_level),
        config.log_dir.as_deref().and_then(|p| p.to_str()),
    );

    std::fs::create_dir_all(&config.work_dir).map_err(|source| ServerError::WorkDir {
        path: config.work_dir.clone(),
        source,
    })?;

    Ok(config)
}
