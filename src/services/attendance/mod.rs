pub mod grades;
pub mod students;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::attendance::requests::AttendanceStudentsParams;
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 考勤年级（静态文件）
    pub async fn list_grades(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        grades::list_grades(self, request).await
    }

    // 某年级的考勤学生名单
    pub async fn list_students(
        &self,
        query: AttendanceStudentsParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        students::list_students(self, query, request).await
    }
}
