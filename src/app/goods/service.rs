//! 商品业务服务
//!
//! 所有查询都是对整读出来的数组做线性扫描；所有变更都在
//! 单写者锁内完成"读-改-写"再整体落盘，写失败原样上报调用方。

use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::debug;

use super::model::{as_string, generate_id, is_truthy, Goods, GoodsDraft, GoodsPatch};
use crate::core::error::ApiError;
use crate::infrastructure::storage::GoodsStore;

#[derive(Clone)]
pub struct GoodsService {
    store: Arc<dyn GoodsStore>,
    // 串行化读-改-写，避免两个并发写相互覆盖
    write_lock: Arc<Mutex<()>>,
}

impl GoodsService {
    pub fn new(store: Arc<dyn GoodsStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// 商品列表；`search` 非空时按标题/描述做大小写无关的子串匹配
    pub fn list(&self, search: Option<&str>) -> Result<Vec<Goods>, ApiError> {
        let goods = self.store.read_all()?;
        let search = match search.map(str::trim) {
            Some(s) if !s.is_empty() => s.to_lowercase(),
            _ => return Ok(goods),
        };
        Ok(goods
            .into_iter()
            .filter(|item| {
                [&item.title, &item.description].into_iter().any(|field| {
                    field
                        .as_deref()
                        .map_or(false, |s| s.to_lowercase().contains(&search))
                })
            })
            .collect())
    }

    /// 按 id 获取单个商品，查不到返回 404
    pub fn get(&self, id: &str) -> Result<Goods, ApiError> {
        let goods = self.store.read_all()?;
        goods
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(ApiError::goods_not_found)
    }

    /// 所有出现过的分类，按首次出现顺序去重；无分类的记录跳过
    pub fn category_list(&self) -> Result<Vec<String>, ApiError> {
        let goods = self.store.read_all()?;
        let mut categories: Vec<String> = Vec::new();
        for item in goods {
            if let Some(category) = item.category {
                if !categories.contains(&category) {
                    categories.push(category);
                }
            }
        }
        Ok(categories)
    }

    /// `discount` 为真值的商品
    pub fn discount_list(&self) -> Result<Vec<Goods>, ApiError> {
        Ok(self
            .store
            .read_all()?
            .into_iter()
            .filter(|item| item.discount.as_ref().map_or(false, is_truthy))
            .collect())
    }

    /// 分类与给定值（已 URI 解码）完全相等的商品
    pub fn by_category(&self, category: &str) -> Result<Vec<Goods>, ApiError> {
        debug!("按分类筛选: {}", category);
        Ok(self
            .store
            .read_all()?
            .into_iter()
            .filter(|item| item.category.as_deref() == Some(category))
            .collect())
    }

    /// 按 `<login>-<password>` 凭证查找记录 id。
    /// 与其余端点不同，查不到时安静地返回 `false` 而不是 404。
    pub fn login_lookup(&self, credentials: &str) -> Result<Value, ApiError> {
        let credentials = credentials.to_lowercase();
        let (login, password) = credentials
            .split_once('-')
            .unwrap_or((credentials.as_str(), ""));

        let goods = self.store.read_all()?;
        for item in &goods {
            if item.login.to_lowercase() == login && item.password.to_lowercase() == password {
                return Ok(Value::String(item.id.clone()));
            }
        }
        Ok(Value::Bool(false))
    }

    /// 创建商品：整理字段、生成 id、追加、等待落盘完成
    pub fn create(&self, draft: GoodsDraft) -> Result<Goods, ApiError> {
        let new_item = make_goods(draft, generate_id())?;

        let _guard = self.write_lock.lock().unwrap();
        let mut goods = self.store.read_all()?;
        goods.push(new_item.clone());
        self.store.write_all(&goods)?;
        Ok(new_item)
    }

    /// 部分更新：只合并给出的核心字段并重新整理，其余字段原样保留
    pub fn update(&self, id: &str, patch: GoodsPatch) -> Result<Goods, ApiError> {
        let _guard = self.write_lock.lock().unwrap();
        let mut goods = self.store.read_all()?;
        let index = goods
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(ApiError::goods_not_found)?;

        let merged = GoodsDraft {
            name: patch
                .name
                .unwrap_or_else(|| Value::String(goods[index].name.clone())),
            login: patch
                .login
                .unwrap_or_else(|| Value::String(goods[index].login.clone())),
            password: patch
                .password
                .unwrap_or_else(|| Value::String(goods[index].password.clone())),
            amount: patch.amount.unwrap_or_else(|| goods[index].amount.clone()),
            ..GoodsDraft::default()
        };
        let rebuilt = make_goods(merged, id.to_string())?;

        let item = &mut goods[index];
        item.name = rebuilt.name;
        item.login = rebuilt.login;
        item.password = rebuilt.password;
        item.amount = rebuilt.amount;

        let updated = goods[index].clone();
        self.store.write_all(&goods)?;
        Ok(updated)
    }

    /// 删除商品，查不到返回 404；成功时响应体为 `{}`
    pub fn delete(&self, id: &str) -> Result<Value, ApiError> {
        let _guard = self.write_lock.lock().unwrap();
        let mut goods = self.store.read_all()?;
        let index = goods
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(ApiError::goods_not_found)?;
        goods.remove(index);
        self.store.write_all(&goods)?;
        Ok(Value::Object(serde_json::Map::new()))
    }
}

/// 从请求数据组装商品记录，必填字段整理后为空则以 422 拒绝
fn make_goods(draft: GoodsDraft, id: String) -> Result<Goods, ApiError> {
    let name = as_string(&draft.name);
    let login = as_string(&draft.login);
    let password = as_string(&draft.password);

    let mut errors = Vec::new();
    if name.is_empty() {
        errors.push("name is required".to_string());
    }
    if login.is_empty() {
        errors.push("login is required".to_string());
    }
    if password.is_empty() {
        errors.push("password is required".to_string());
    }
    if !errors.is_empty() {
        return Err(ApiError::Unprocessable(errors));
    }

    Ok(Goods {
        id,
        name,
        login,
        password,
        amount: draft.amount,
        category: draft.category,
        title: draft.title,
        description: draft.description,
        discount: draft.discount,
        rub: draft.rub,
        bit: draft.bit,
        transactions: draft.transactions,
        creation_date: draft.creation_date,
    })
}
