use chrono::{DateTime, Utc};

/// 程序启动时间，用于健康检查中的运行时长
#[derive(Debug, Clone, Copy)]
pub struct AppStartTime {
    pub start_datetime: DateTime<Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: Utc::now(),
        }
    }

    /// 已运行的秒数
    pub fn uptime_seconds(&self) -> i64 {
        Utc::now()
            .signed_duration_since(self.start_datetime)
            .num_seconds()
            .max(0)
    }
}
