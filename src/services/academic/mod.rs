pub mod grades;
pub mod performance;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::academic::requests::PerformanceParams;
use crate::storage::Storage;

pub struct AcademicService {
    storage: Option<Arc<dyn Storage>>,
}

impl AcademicService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 学业年级（学生与成绩记录中的年级并集）
    pub async fn list_grades(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        grades::list_grades(self, request).await
    }

    // 某年级的成绩记录
    pub async fn list_performances(
        &self,
        query: PerformanceParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        performance::list_performances(self, query, request).await
    }
}
