#![allow(dead_code)]

use std::sync::{Arc, Once};

use actix_web::{body::MessageBody, dev::ServiceResponse};
use rust_schoolhub::cache::ObjectCache;
use rust_schoolhub::cache::object_cache::moka::MokaCacheWrapper;
use rust_schoolhub::config::AppConfig;
use rust_schoolhub::entity::{employees, schools, student_performances, students, users};
use rust_schoolhub::storage::{Storage, sea_orm_storage::SeaOrmStorage};
use rust_schoolhub::utils::JwtUtils;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};

pub const TEST_SECRET: &str = "integration-test-secret";

/// 测试用全局配置：内存数据库 + 固定密钥
pub fn init_config() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let mut config = AppConfig::default();
        config.session.secret = TEST_SECRET.to_string();
        config.database.url = ":memory:".to_string();
        AppConfig::init_with(config).expect("test configuration already initialized");
    });
}

pub struct TestContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub db: DatabaseConnection,
}

/// 每个测试独立的内存数据库（已迁移）与内存缓存
pub async fn setup() -> TestContext {
    init_config();
    let seaorm = SeaOrmStorage::connect(&AppConfig::get().database)
        .await
        .expect("failed to open in-memory database");
    let db = seaorm.connection().clone();

    TestContext {
        storage: Arc::new(seaorm),
        cache: Arc::new(MokaCacheWrapper::with_settings(1_000, 60)),
        db,
    }
}

/// 使用给定存储与缓存构造完整的应用
macro_rules! test_app {
    ($storage:expr, $cache:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(
                    actix_web::web::QueryConfig::default()
                        .error_handler(rust_schoolhub::utils::query_error_handler),
                )
                .app_data(actix_web::web::Data::new($storage))
                .app_data(actix_web::web::Data::new($cache))
                .app_data(actix_web::web::Data::new(
                    rust_schoolhub::models::AppStartTime::now(),
                ))
                .configure(rust_schoolhub::routes::configure_api_routes),
        )
        .await
    };
    ($ctx:expr) => {
        test_app!($ctx.storage.clone(), $ctx.cache.clone())
    };
}

pub fn token_for(user_id: i64) -> String {
    JwtUtils::issue_session_token(user_id, chrono::Duration::hours(1))
        .expect("failed to sign test token")
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}

pub async fn status_and_json<B: MessageBody>(resp: ServiceResponse<B>) -> (u16, serde_json::Value) {
    let status = resp.status().as_u16();
    let body = actix_web::test::read_body(resp).await;
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).expect("response body is not JSON")
    };
    (status, json)
}

fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub async fn seed_school(db: &DatabaseConnection, name: &str) -> i64 {
    schools::ActiveModel {
        name: Set(name.to_string()),
        created_at: Set(now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("seed school")
    .id
}

pub async fn seed_user(
    db: &DatabaseConnection,
    name: &str,
    role: &str,
    status: &str,
    school_id: Option<i64>,
) -> i64 {
    users::ActiveModel {
        name: Set(name.to_string()),
        email: Set(format!("{name}@example.com")),
        role: Set(role.to_string()),
        status: Set(status.to_string()),
        school_id: Set(school_id),
        created_at: Set(now()),
        updated_at: Set(now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("seed user")
    .id
}

pub async fn seed_student(
    db: &DatabaseConnection,
    school_id: i64,
    name: &str,
    grade: &str,
    roll_number: Option<&str>,
    status: &str,
) -> i64 {
    students::ActiveModel {
        name: Set(name.to_string()),
        grade: Set(grade.to_string()),
        roll_number: Set(roll_number.map(str::to_string)),
        admission_number: Set(Some(format!("ADM-{name}"))),
        status: Set(status.to_string()),
        school_id: Set(school_id),
        created_at: Set(now()),
        updated_at: Set(now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("seed student")
    .id
}

pub async fn seed_employee(
    db: &DatabaseConnection,
    school_id: Option<i64>,
    name: &str,
    status: &str,
    salary: f64,
) -> i64 {
    employees::ActiveModel {
        name: Set(name.to_string()),
        status: Set(status.to_string()),
        salary: Set(salary),
        school_id: Set(school_id),
        created_at: Set(now()),
        updated_at: Set(now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("seed employee")
    .id
}

pub async fn seed_performance(
    db: &DatabaseConnection,
    school_id: i64,
    student_id: i64,
    grade: &str,
    subject: &str,
    score: f64,
) -> i64 {
    student_performances::ActiveModel {
        student_id: Set(student_id),
        grade: Set(grade.to_string()),
        subject: Set(subject.to_string()),
        score: Set(score),
        term: Set("2025-spring".to_string()),
        school_id: Set(school_id),
        recorded_at: Set(now()),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("seed performance")
    .id
}
