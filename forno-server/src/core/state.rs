use crate::core::Config;
use crate::db::Database;

/// 服务器状态 - 持有所有共享服务的引用
///
/// ServerState 是每个请求处理器的入口，持有配置与存储层的共享引用。
/// Database 内部使用 Arc，clone 成本极低。
///
/// # 使用示例
///
/// ```ignore
/// let repo = OrderRepository::new(state.db.clone());
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 存储层 (内存目录 + 订单快照)
    pub db: Database,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: Database) -> Self {
        Self { config, db }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 存储层 (填充目录种子数据, 加载订单快照)
    ///
    /// # Panics
    ///
    /// 工作目录或订单快照初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db = Database::open(&config.data_dir())
            .await
            .expect("Failed to initialize store");

        Self::new(config.clone(), db)
    }
}
