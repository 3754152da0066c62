//! 商品 CMS 服务入口

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, Level};

use goods_cms::app::goods::handler::{router, AppState};
use goods_cms::app::goods::service::GoodsService;
use goods_cms::config::Config;
use goods_cms::infrastructure::logger::Logger;
use goods_cms::infrastructure::storage::FileStore;

#[tokio::main]
async fn main() {
    // 初始化日志
    Logger::init(Level::INFO);

    let config = Config::from_env();
    info!("启动商品 CMS 服务...");
    info!("商品库文件: {}", config.db_path.display());

    // 打开商品库，文件不存在时落一个空数组
    let store = FileStore::open(config.db_path.clone()).expect("无法初始化商品库文件");
    let state = AppState {
        goods_service: GoodsService::new(Arc::new(store)),
    };

    let app = router(state);

    let addr = format!("{}:{}", config.bind_address, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .expect("无法绑定监听地址");

    info!("🚀 商品 CMS 服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /api/goods          - 商品列表 (支持 ?search=)");
    info!("   POST   /api/goods          - 创建商品");
    info!("   GET    /api/goods/:id      - 获取单个商品");
    info!("   PATCH  /api/goods/:id      - 更新商品");
    info!("   DELETE /api/goods/:id      - 删除商品");
    info!("   GET    /api/category       - 分类列表");
    info!("   GET    /category/:name     - 按分类筛选");
    info!("   GET    /discount           - 折扣商品");
    info!("   GET    /login/:credentials - 登录凭证查询");

    // 启动服务器
    axum::serve(listener, app).await.expect("服务器启动失败");
}
