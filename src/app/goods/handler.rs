//! 商品接口处理器与路由表

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderName, Method, StatusCode},
    middleware,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::model::{Goods, GoodsDraft, GoodsPatch};
use super::service::GoodsService;
use crate::core::error::ApiError;
use crate::core::middleware::request_logging_middleware;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub goods_service: GoodsService,
}

/// 列表查询参数
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub search: Option<String>,
}

/// `GET /api/goods` — 商品列表，支持 `?search=`
pub async fn list_goods(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Goods>>, ApiError> {
    Ok(Json(state.goods_service.list(query.search.as_deref())?))
}

/// `GET /api/goods/:id` — 获取单个商品，查不到 404
pub async fn get_goods(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Goods>, ApiError> {
    Ok(Json(state.goods_service.get(&id)?))
}

/// `POST /api/goods` — 创建商品，201 并带 `Location` 头
pub async fn create_goods(
    State(state): State<AppState>,
    Json(draft): Json<GoodsDraft>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<Goods>), ApiError> {
    let created = state.goods_service.create(draft)?;
    let location = format!("/api/goods/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

/// `PATCH /api/goods/:id` — 部分更新
pub async fn update_goods(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<GoodsPatch>,
) -> Result<Json<Goods>, ApiError> {
    Ok(Json(state.goods_service.update(&id, patch)?))
}

/// `DELETE /api/goods/:id` — 删除，成功时响应体为 `{}`
pub async fn delete_goods(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.goods_service.delete(&id)?))
}

/// `GET /api/category` — 去重后的分类列表
pub async fn category_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.goods_service.category_list()?))
}

/// `GET /discount` — 有折扣的商品
pub async fn discount_list(State(state): State<AppState>) -> Result<Json<Vec<Goods>>, ApiError> {
    Ok(Json(state.goods_service.discount_list()?))
}

/// `GET /category/:name` — 按分类筛选（路径值已 URI 解码）
pub async fn goods_by_category(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Vec<Goods>>, ApiError> {
    Ok(Json(state.goods_service.by_category(&name)?))
}

/// `GET /login/:credentials` — 按 `<login>-<password>` 查找记录 id，
/// 查不到时返回 JSON `false`（该端点从不 404）
pub async fn login_lookup(
    State(state): State<AppState>,
    Path(credentials): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.goods_service.login_lookup(&credentials)?))
}

/// 未匹配的路径统一回 404
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" })))
}

/// 组装路由表与中间件。CORS 全放开：任意来源、
/// GET/POST/PATCH/DELETE/OPTIONS、仅允许 `Content-Type` 头，
/// 并向浏览器暴露 `Location`。
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::LOCATION]);

    Router::new()
        .route("/api/goods", get(list_goods).post(create_goods))
        .route(
            "/api/goods/:id",
            get(get_goods).patch(update_goods).delete(delete_goods),
        )
        .route("/api/category", get(category_list))
        .route("/category/:name", get(goods_by_category))
        .route("/discount", get(discount_list))
        .route("/login/:credentials", get(login_lookup))
        .fallback(not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
