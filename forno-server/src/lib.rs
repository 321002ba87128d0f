//! Forno Storefront Server - 披萨店在线点餐服务
//!
//! # 架构概述
//!
//! 本模块是点餐服务的主入口，提供以下核心功能：
//!
//! - **目录** (`db`): 披萨/饮品/甜点目录与订单存储 (JSON 快照)
//! - **定价** (`pricing`): 订单校验与权威定价 (整单 10% 菜单折扣)
//! - **HTTP API** (`api`): RESTful API 接口 (目录 CRUD, 购物车报价, 订单)
//!
//! # 模块结构
//!
//! ```text
//! forno-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 存储层 (内存目录 + 订单快照文件)
//! ├── pricing/       # 校验型订单定价
//! └── utils/         # 错误、日志、校验
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod pricing;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::db::Database;
pub use crate::pricing::{CatalogKind, PricingError};
pub use crate::utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// 设置进程环境: dotenv + 日志
pub fn setup_environment() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______
   / ____/___  _________  ____
  / /_  / __ \/ ___/ __ \/ __ \
 / __/ / /_/ / /  / / / / /_/ /
/_/    \____/_/  /_/ /_/\____/
    "#
    );
}
