//! 配置管理模块
//!
//! 提供加载流程的配置加载、解析和管理功能。
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (wavefront_topo.toml)
//!
//! ```toml
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = false
//! log_file = "wavefront_topo.log"
//!
//! [load]
//! path = "assets/model.obj"
//! tessellate_quads = true
//! compute_face_normals = true
//!
//! [export]
//! group = 0               # 省略则导出全部组
//! normal_source = "vertex" # vertex（平滑）或 face（平面）
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, Result};
use crate::geometry::export::NormalSource;

/// 运行配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,

    /// 加载与拓扑处理配置
    #[serde(default)]
    pub load: LoadConfig,

    /// 导出配置
    #[serde(default)]
    pub export: ExportConfig,
}

/// 日志配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// 加载配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadConfig {
    /// OBJ 文件路径
    #[serde(default = "default_model_path")]
    pub path: String,

    /// 加载后是否将四边形拆分为三角形
    #[serde(default = "default_true")]
    pub tessellate_quads: bool,

    /// 加载后是否计算面法线
    #[serde(default = "default_true")]
    pub compute_face_normals: bool,
}

/// 导出配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// 要导出的组索引，`None` 表示全部
    #[serde(default)]
    pub group: Option<usize>,

    /// 法线来源
    #[serde(default)]
    pub normal_source: NormalSource,
}

// 默认值函数
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "wavefront_topo.log".to_string() }
fn default_model_path() -> String { "model.obj".to_string() }
fn default_true() -> bool { true }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            path: default_model_path(),
            tessellate_quads: true,
            compute_face_normals: true,
        }
    }
}

impl Config {
    /// 从配置文件加载
    ///
    /// # 示例
    ///
    /// ```no_run
    /// use wavefront_topo::core::Config;
    ///
    /// let config = Config::from_file("wavefront_topo.toml")?;
    /// # Ok::<(), wavefront_topo::core::Error>(())
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        Self::from_toml_str(&contents)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在或无法解析则使用默认配置
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 从命令行参数覆盖配置
    ///
    /// 支持的参数：
    /// - 第一个不以 `--` 开头的参数：模型路径
    /// - `--flat` / `--smooth`: 使用面法线 / 顶点法线
    /// - `--group <index>`: 只导出指定组
    /// - `--no-tessellate`: 跳过四边形拆分
    /// - `--no-face-normals`: 跳过面法线计算
    /// - `--verbose`: 日志级别设为 debug
    ///
    /// 调用方应先去掉程序名（`std::env::args().skip(1)`）。
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        let mut iter = args.iter();
        let mut path_seen = false;
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--flat" => self.export.normal_source = NormalSource::Face,
                "--smooth" => self.export.normal_source = NormalSource::Vertex,
                "--no-tessellate" => self.load.tessellate_quads = false,
                "--no-face-normals" => self.load.compute_face_normals = false,
                "--verbose" => self.logging.level = LogLevel::Debug,
                "--group" => {
                    // 值总是被消耗，无法解析时保留原设置
                    if let Some(index) = iter.next().and_then(|s| s.parse().ok()) {
                        self.export.group = Some(index);
                    }
                }
                other if !other.starts_with("--") && !path_seen => {
                    self.load.path = other.to_string();
                    path_seen = true;
                }
                _ => {}
            }
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.load.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "load.path".to_string(),
                reason: "Model path must not be empty".to_string(),
            }.into());
        }

        if self.logging.file_output && self.logging.log_file.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "logging.log_file".to_string(),
                reason: "A log file is required when file_output is enabled".to_string(),
            }.into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.load.tessellate_quads);
        assert!(config.load.compute_face_normals);
        assert_eq!(config.export.group, None);
        assert_eq!(config.export.normal_source, NormalSource::Vertex);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = Config::from_toml_str(
            r#"
            [load]
            path = "plane.obj"

            [export]
            normal_source = "face"
            "#,
        )
        .unwrap();

        assert_eq!(config.load.path, "plane.obj");
        assert!(config.load.tessellate_quads);
        assert_eq!(config.export.normal_source, NormalSource::Face);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(Config::from_toml_str("[load\npath = 1").is_err());
    }

    #[test]
    fn test_apply_args() {
        let mut config = Config::default();
        config.apply_args(["cube.obj", "--flat", "--group", "2", "--no-tessellate", "--verbose"]);

        assert_eq!(config.load.path, "cube.obj");
        assert_eq!(config.export.normal_source, NormalSource::Face);
        assert_eq!(config.export.group, Some(2));
        assert!(!config.load.tessellate_quads);
        assert_eq!(config.logging.level, LogLevel::Debug);
    }

    #[test]
    fn test_apply_args_ignores_bad_group() {
        let mut config = Config::default();
        config.apply_args(["--group", "x", "cube.obj"]);
        assert_eq!(config.export.group, None);
        assert_eq!(config.load.path, "cube.obj");

        let mut config = Config::default();
        config.apply_args(["--group"]);
        assert_eq!(config.export.group, None);
        assert_eq!(config.load.path, LoadConfig::default().path);
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.load.path = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.file_output = true;
        config.logging.log_file.clear();
        assert!(config.validate().is_err());
    }
}
