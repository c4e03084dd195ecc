//! litesearch - 搜索词高亮 + 匹配之间折叠的编辑器引擎
//!
//! 模块结构：
//! - kernel: 引擎（索引、高亮/折叠差量、控制器、注册表）
//! - kernel::services: 宿主接口（ports）与配置/路径适配（adapters）
//! - models: 数据模型（Snapshot, TextBuffer, EditOp, 单词解析）

pub mod kernel;
pub mod models;
