pub mod fix_school_ids;
pub mod summary;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::storage::Storage;

pub struct EmployeeService {
    storage: Option<Arc<dyn Storage>>,
}

impl EmployeeService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 教职工统计
    pub async fn get_summary(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        summary::get_summary(self, request).await
    }

    // 修复教职工的学校归属
    pub async fn fix_school_ids(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        fix_school_ids::fix_school_ids(self, request).await
    }
}
