#[macro_use]
mod common;

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use actix_web::{cookie::Cookie, test};
use async_trait::async_trait;
use common::*;
use rust_schoolhub::cache::{ObjectCache, session_cache_key};
use rust_schoolhub::entity::users;
use rust_schoolhub::errors::{Result, SchoolHubError};
use rust_schoolhub::models::{
    academic::entities::StudentPerformance,
    employees::entities::{Employee, EmployeeStatus},
    students::entities::{Student, StudentStatus},
    users::entities::{User, UserRole, UserStatus},
};
use rust_schoolhub::storage::Storage;
use rust_schoolhub::utils::JwtUtils;
use sea_orm::{ActiveModelTrait, Set};

const STORE_FAILURE: &str = "disk I/O error on schoolhub.db";

/// 记录调用次数、始终失败的存储
///
/// 设置了 `session_user` 时只有用户查询成功，其余数据读写仍然失败。
#[derive(Default)]
struct CountingStorage {
    calls: AtomicUsize,
    session_user: Option<User>,
}

impl CountingStorage {
    fn with_session_user(user: User) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            session_user: Some(user),
        }
    }

    fn hit<T>(&self) -> Result<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(SchoolHubError::database_operation(STORE_FAILURE))
    }
}

#[async_trait]
impl Storage for CountingStorage {
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        match &self.session_user {
            Some(user) if user.id == id => Ok(Some(user.clone())),
            _ => self.hit(),
        }
    }
    async fn list_accepted_students_by_grade(&self, _s: i64, _g: &str) -> Result<Vec<Student>> {
        self.hit()
    }
    async fn list_accepted_students(&self, _s: i64) -> Result<Vec<Student>> {
        self.hit()
    }
    async fn list_accepted_student_grades(&self, _s: i64) -> Result<Vec<String>> {
        self.hit()
    }
    async fn count_students(&self, _s: i64, _st: Option<StudentStatus>) -> Result<u64> {
        self.hit()
    }
    async fn list_performance_grades(&self, _s: i64) -> Result<Vec<String>> {
        self.hit()
    }
    async fn list_performances_by_grade(
        &self,
        _s: i64,
        _g: &str,
        _subject: Option<&str>,
    ) -> Result<Vec<StudentPerformance>> {
        self.hit()
    }
    async fn count_employees(&self, _s: i64, _st: Option<EmployeeStatus>) -> Result<u64> {
        self.hit()
    }
    async fn sum_active_employee_salaries(&self, _s: i64) -> Result<Option<f64>> {
        self.hit()
    }
    async fn list_employees_outside_school(&self, _s: i64) -> Result<Vec<Employee>> {
        self.hit()
    }
    async fn assign_employees_to_school(&self, _s: i64, _ids: &[i64]) -> Result<u64> {
        self.hit()
    }
}

const PROTECTED_GETS: &[&str] = &[
    "/api/attendance/grades",
    "/api/attendance/students?grade=5",
    "/api/academic/grades",
    "/api/academic/performance?grade=5",
    "/api/employee/summary",
    "/api/students",
    "/api/students/summary",
    "/api/session",
];

#[actix_web::test]
async fn missing_or_invalid_token_is_rejected_without_store_access() {
    let ctx = setup().await;
    let counting = Arc::new(CountingStorage::default());
    let storage: Arc<dyn Storage> = counting.clone();
    let app = test_app!(storage, ctx.cache.clone());

    let forged = JwtUtils::issue_with_secret(1, chrono::Duration::hours(1), "not-the-secret")
        .expect("sign forged token");

    for uri in PROTECTED_GETS {
        let req = test::TestRequest::get().uri(uri).to_request();
        let (status, body) = status_and_json(test::call_service(&app, req).await).await;
        assert_eq!(status, 401, "{uri} without token");
        assert_eq!(body, serde_json::json!({ "error": "Unauthorized" }));

        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer(&forged))
            .to_request();
        let (status, _) = status_and_json(test::call_service(&app, req).await).await;
        assert_eq!(status, 401, "{uri} with forged token");
    }

    let req = test::TestRequest::post()
        .uri("/api/employee/fix-school-ids")
        .to_request();
    let (status, _) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 401);

    assert_eq!(counting.calls.load(Ordering::SeqCst), 0);
}

#[actix_web::test]
async fn store_failure_while_loading_session_user_is_internal_error() {
    let ctx = setup().await;
    let counting = Arc::new(CountingStorage::default());
    let storage: Arc<dyn Storage> = counting.clone();
    let app = test_app!(storage, ctx.cache.clone());

    let req = test::TestRequest::get()
        .uri("/api/employee/summary")
        .insert_header(bearer(&token_for(1)))
        .to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 500);
    assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));
    assert_eq!(counting.calls.load(Ordering::SeqCst), 1);
}

#[actix_web::test]
async fn store_failure_in_handler_hides_cause() {
    let ctx = setup().await;
    let admin = User {
        id: 42,
        name: "outage_admin".to_string(),
        email: "outage_admin@example.com".to_string(),
        role: UserRole::Admin,
        status: UserStatus::Active,
        school_id: Some(1),
    };
    let counting = Arc::new(CountingStorage::with_session_user(admin));
    let storage: Arc<dyn Storage> = counting.clone();
    let app = test_app!(storage, ctx.cache.clone());
    let token = token_for(42);

    let req = test::TestRequest::get()
        .uri("/api/employee/summary")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 500);
    let raw = test::read_body(resp).await;
    assert!(!String::from_utf8_lossy(&raw).contains(STORE_FAILURE));
    let body: serde_json::Value = serde_json::from_slice(&raw).unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));

    let req = test::TestRequest::post()
        .uri("/api/employee/fix-school-ids")
        .insert_header(bearer(&token))
        .to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 500);
    assert_eq!(body, serde_json::json!({ "error": "Internal server error" }));

    assert!(counting.calls.load(Ordering::SeqCst) >= 2);
}

#[actix_web::test]
async fn deactivated_user_keeps_cached_session_until_evicted() {
    let ctx = setup().await;
    let school = seed_school(&ctx.db, "North").await;
    let teacher = seed_user(&ctx.db, "cached_teacher", "teacher", "active", Some(school)).await;
    let app = test_app!(ctx);
    let token = token_for(teacher);

    let session = |token: &str| {
        test::TestRequest::get()
            .uri("/api/session")
            .insert_header(bearer(token))
            .to_request()
    };

    let (status, _) = status_and_json(test::call_service(&app, session(&token)).await).await;
    assert_eq!(status, 200);

    users::ActiveModel {
        id: Set(teacher),
        status: Set("inactive".to_string()),
        ..Default::default()
    }
    .update(&ctx.db)
    .await
    .unwrap();

    // 缓存命中时不重新检查状态
    let (status, _) = status_and_json(test::call_service(&app, session(&token)).await).await;
    assert_eq!(status, 200);

    ctx.cache.remove(&session_cache_key(&token)).await;
    let (status, _) = status_and_json(test::call_service(&app, session(&token)).await).await;
    assert_eq!(status, 401);
}

#[actix_web::test]
async fn expired_token_is_rejected() {
    let ctx = setup().await;
    let school = seed_school(&ctx.db, "North").await;
    let admin = seed_user(&ctx.db, "expired_admin", "admin", "active", Some(school)).await;
    let app = test_app!(ctx);

    let token = JwtUtils::issue_session_token(admin, chrono::Duration::hours(-2)).unwrap();
    let req = test::TestRequest::get()
        .uri("/api/session")
        .insert_header(bearer(&token))
        .to_request();
    let (status, _) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 401);
}

#[actix_web::test]
async fn inactive_or_unknown_user_is_rejected() {
    let ctx = setup().await;
    let school = seed_school(&ctx.db, "North").await;
    let inactive = seed_user(&ctx.db, "inactive_teacher", "teacher", "inactive", Some(school)).await;
    let app = test_app!(ctx);

    for user_id in [inactive, 9_999] {
        let req = test::TestRequest::get()
            .uri("/api/session")
            .insert_header(bearer(&token_for(user_id)))
            .to_request();
        let (status, _) = status_and_json(test::call_service(&app, req).await).await;
        assert_eq!(status, 401, "user {user_id}");
    }
}

#[actix_web::test]
async fn session_cookie_is_accepted() {
    let ctx = setup().await;
    let school = seed_school(&ctx.db, "North").await;
    let teacher = seed_user(&ctx.db, "cookie_teacher", "teacher", "active", Some(school)).await;
    let app = test_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/session")
        .cookie(Cookie::new("session_token", token_for(teacher)))
        .to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert_eq!(body["user"]["id"], teacher);
    assert_eq!(body["user"]["role"], "teacher");
    assert_eq!(body["user"]["status"], "active");
    assert_eq!(body["user"]["schoolId"], school);
}

#[actix_web::test]
async fn non_admin_roles_are_forbidden_on_admin_routes() {
    let ctx = setup().await;
    let school = seed_school(&ctx.db, "North").await;
    let teacher = seed_user(&ctx.db, "role_teacher", "teacher", "active", Some(school)).await;
    let staff = seed_user(&ctx.db, "role_staff", "staff", "active", Some(school)).await;
    let app = test_app!(ctx);

    for user_id in [teacher, staff] {
        let token = token_for(user_id);
        for uri in ["/api/employee/summary", "/api/students", "/api/students/summary"] {
            let req = test::TestRequest::get()
                .uri(uri)
                .insert_header(bearer(&token))
                .to_request();
            let (status, body) = status_and_json(test::call_service(&app, req).await).await;
            assert_eq!(status, 403, "{uri} as user {user_id}");
            assert_eq!(body, serde_json::json!({ "error": "Forbidden" }));
        }

        let req = test::TestRequest::post()
            .uri("/api/employee/fix-school-ids")
            .insert_header(bearer(&token))
            .to_request();
        let (status, _) = status_and_json(test::call_service(&app, req).await).await;
        assert_eq!(status, 403);
    }

    // 成绩明细允许教师，不允许普通教职工
    let req = test::TestRequest::get()
        .uri("/api/academic/performance?grade=5")
        .insert_header(bearer(&token_for(staff)))
        .to_request();
    let (status, _) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 403);

    let req = test::TestRequest::get()
        .uri("/api/academic/performance?grade=5")
        .insert_header(bearer(&token_for(teacher)))
        .to_request();
    let (status, _) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
}

#[actix_web::test]
async fn user_without_school_is_forbidden_on_scoped_routes() {
    let ctx = setup().await;
    let admin = seed_user(&ctx.db, "homeless_admin", "admin", "active", None).await;
    let app = test_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/employee/summary")
        .insert_header(bearer(&token_for(admin)))
        .to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 403);
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn options_preflight_passes_without_session() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::default()
        .method(actix_web::http::Method::OPTIONS)
        .uri("/api/students")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);
}

#[actix_web::test]
async fn health_needs_no_session() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let (status, body) = status_and_json(test::call_service(&app, req).await).await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptimeSeconds"].as_i64().unwrap() >= 0);
}
