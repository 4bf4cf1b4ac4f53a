//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod employees;
mod performances;
mod students;
mod users;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{Result, SchoolHubError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        Self::connect(&AppConfig::get().database).await
    }

    /// 按给定数据库配置连接并执行迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolHubError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 底层数据库连接
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// SQLite 专用连接（WAL + pragma 优化，内存库除外）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = Self::is_sqlite_memory(url);

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolHubError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("temp_store", "memory")
                .pragma("wal_autocheckpoint", "1000");
        }

        // 内存库的每个连接都是独立数据库，只能使用单连接且不回收
        let (max_connections, idle_timeout) = if in_memory {
            (1, None)
        } else {
            (config.pool_size, Some(Duration::from_secs(300)))
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(idle_timeout)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .map_err(|e| SchoolHubError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolHubError::database_connection(format!("无法连接到数据库: {e}")))
    }

    fn is_sqlite_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SchoolHubError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    academic::entities::StudentPerformance,
    employees::entities::{Employee, EmployeeStatus},
    students::entities::{Student, StudentStatus},
    users::entities::User,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    // 学生模块
    async fn list_accepted_students_by_grade(
        &self,
        school_id: i64,
        grade: &str,
    ) -> Result<Vec<Student>> {
        self.list_accepted_students_by_grade_impl(school_id, grade)
            .await
    }

    async fn list_accepted_students(&self, school_id: i64) -> Result<Vec<Student>> {
        self.list_accepted_students_impl(school_id).await
    }

    async fn list_accepted_student_grades(&self, school_id: i64) -> Result<Vec<String>> {
        self.list_accepted_student_grades_impl(school_id).await
    }

    async fn count_students(&self, school_id: i64, status: Option<StudentStatus>) -> Result<u64> {
        self.count_students_impl(school_id, status).await
    }

    // 成绩模块
    async fn list_performance_grades(&self, school_id: i64) -> Result<Vec<String>> {
        self.list_performance_grades_impl(school_id).await
    }

    async fn list_performances_by_grade(
        &self,
        school_id: i64,
        grade: &str,
        subject: Option<&str>,
    ) -> Result<Vec<StudentPerformance>> {
        self.list_performances_by_grade_impl(school_id, grade, subject)
            .await
    }

    // 教职工模块
    async fn count_employees(
        &self,
        school_id: i64,
        status: Option<EmployeeStatus>,
    ) -> Result<u64> {
        self.count_employees_impl(school_id, status).await
    }

    async fn sum_active_employee_salaries(&self, school_id: i64) -> Result<Option<f64>> {
        self.sum_active_employee_salaries_impl(school_id).await
    }

    async fn list_employees_outside_school(&self, school_id: i64) -> Result<Vec<Employee>> {
        self.list_employees_outside_school_impl(school_id).await
    }

    async fn assign_employees_to_school(
        &self,
        school_id: i64,
        employee_ids: &[i64],
    ) -> Result<u64> {
        self.assign_employees_to_school_impl(school_id, employee_ids)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("schoolhub.db").unwrap(),
            "sqlite://schoolhub.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/school").unwrap(),
            "postgres://u:p@localhost/school"
        );
        assert!(SeaOrmStorage::build_database_url("ftp://example.com").is_err());
    }

    #[test]
    fn test_is_sqlite_memory() {
        assert!(SeaOrmStorage::is_sqlite_memory("sqlite::memory:"));
        assert!(SeaOrmStorage::is_sqlite_memory(
            "sqlite:file:test?mode=memory&cache=shared"
        ));
        assert!(!SeaOrmStorage::is_sqlite_memory("sqlite://schoolhub.db?mode=rwc"));
    }
}
