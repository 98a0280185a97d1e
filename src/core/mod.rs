//! 核心功能模块
//!
//! 提供与网格格式无关的基础设施：数学类型、日志、配置和错误处理。
//!
//! # 模块组织
//!
//! - `math`：数学类型（基于 nalgebra）和法线计算辅助函数
//! - `log`：日志系统，基于 tracing
//! - `config`：配置管理，支持从 TOML 文件加载
//! - `error`：错误处理，定义统一的错误类型

pub mod math;
pub mod log;
pub mod config;
pub mod error;

// 重新导出常用类型，方便使用
pub use math::{Vector2, Vector3};
pub use error::{Result, Error};
pub use config::Config;
