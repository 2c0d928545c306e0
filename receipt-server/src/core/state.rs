//! 服务器状态

use std::sync::Arc;

use receipt_render::{ReceiptRenderer, RenderAssets};

use crate::core::Config;
use crate::counter::{FileCounterStore, ReceiptCounter};

/// 服务器状态 - 所有请求共享
///
/// Clone 成本很低 (Arc)。
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 收据编号计数器
    pub counter: Arc<dyn ReceiptCounter>,
    /// 收据渲染器
    pub renderer: Arc<ReceiptRenderer>,
}

impl ServerState {
    pub fn new(
        config: Config,
        counter: Arc<dyn ReceiptCounter>,
        renderer: Arc<ReceiptRenderer>,
    ) -> Self {
        Self {
            config,
            counter,
            renderer,
        }
    }

    /// 根据配置创建状态：文件计数器 + 工作目录下的模板/字体
    pub fn initialize(config: &Config) -> Self {
        let counter = FileCounterStore::new(config.counter_path());
        let assets = RenderAssets::new(config.template_candidates(), config.font_candidates());

        tracing::info!(
            counter = %config.counter_path().display(),
            "Receipt counter file"
        );

        Self::new(
            config.clone(),
            Arc::new(counter),
            Arc::new(ReceiptRenderer::new(assets)),
        )
    }
}

impl std::fmt::Debug for ServerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerState")
            .field("config", &self.config)
            .field("renderer", &self.renderer)
            .finish_non_exhaustive()
    }
}
