use std::path::PathBuf;

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8000 | HTTP 服务端口 (未设置时读取 PORT) |
/// | WORK_DIR | . | 工作目录，存放计数器文件和静态资源 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 日志目录 (存在时写入按天滚动的文件) |
/// | STATIC_DIR | - | 静态文件目录 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/receipts HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: PathBuf,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别 / EnvFilter 指令
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<PathBuf>,
    /// 静态文件目录
    pub static_dir: Option<PathBuf>,
}

/// 计数器文件名
pub const COUNTER_FILE_NAME: &str = "receipt_counter.json";

/// 收据模板文件名
pub const TEMPLATE_FILE_NAME: &str = "D7 INVOICE.png";

/// 系统字体路径 (macOS, Debian/Ubuntu, Windows 当前目录)
const SYSTEM_FONT_PATHS: [&str; 3] = [
    "/System/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "arial.ttf",
];

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            http_port: std::env::var("HTTP_PORT")
                .or_else(|_| std::env::var("PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().map(PathBuf::from),
            static_dir: std::env::var("STATIC_DIR").ok().map(PathBuf::from),
        }
    }

    /// 使用自定义工作目录覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            http_port: 0,
            environment: "test".into(),
            log_level: "info".into(),
            log_dir: None,
            static_dir: None,
        }
    }

    /// 计数器文件路径
    pub fn counter_path(&self) -> PathBuf {
        self.work_dir.join(COUNTER_FILE_NAME)
    }

    /// 模板候选路径 (按优先级)
    pub fn template_candidates(&self) -> Vec<PathBuf> {
        vec![
            self.work_dir.join("..").join(TEMPLATE_FILE_NAME),
            self.work_dir.join("static").join(TEMPLATE_FILE_NAME),
        ]
    }

    /// 字体候选路径 (按优先级)
    pub fn font_candidates(&self) -> Vec<PathBuf> {
        let mut candidates = vec![self.work_dir.join("static").join("Roboto-Regular.ttf")];
        candidates.extend(SYSTEM_FONT_PATHS.iter().map(PathBuf::from));
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths() {
        let config = Config::with_work_dir("/srv/receipts");
        assert_eq!(
            config.counter_path(),
            PathBuf::from("/srv/receipts/receipt_counter.json")
        );

        let templates = config.template_candidates();
        assert_eq!(templates[0], PathBuf::from("/srv/receipts/../D7 INVOICE.png"));
        assert_eq!(templates[1], PathBuf::from("/srv/receipts/static/D7 INVOICE.png"));

        let fonts = config.font_candidates();
        assert_eq!(fonts.len(), 4);
        assert_eq!(fonts[0], PathBuf::from("/srv/receipts/static/Roboto-Regular.ttf"));
        assert_eq!(fonts[3], PathBuf::from("arial.ttf"));
    }
}
