use crate::cache::ObjectCache;
use crate::cache::object_cache::{moka::MokaCacheWrapper, redis::RedisObjectCache};
use crate::errors::{Result, SchoolHubError};
use once_cell::sync::Lazy;
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{Arc, RwLock},
};

pub type BoxedObjectCacheFuture =
    Pin<Box<dyn Future<Output = Result<Box<dyn ObjectCache>>> + Send>>;
pub type ObjectCacheConstructor = Arc<dyn Fn() -> BoxedObjectCacheFuture + Send + Sync>;

static OBJECT_CACHE_REGISTRY: Lazy<RwLock<HashMap<String, ObjectCacheConstructor>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

pub fn register_object_cache_plugin<S: Into<String>>(name: S, constructor: ObjectCacheConstructor) {
    let name = name.into();
    let mut registry = OBJECT_CACHE_REGISTRY
        .write()
        .expect("Cache registry lock poisoned");
    registry.insert(name, constructor);
}

pub fn get_object_cache_plugin(name: &str) -> Option<ObjectCacheConstructor> {
    OBJECT_CACHE_REGISTRY
        .read()
        .expect("Cache registry lock poisoned")
        .get(name)
        .cloned()
}

fn moka_constructor() -> BoxedObjectCacheFuture {
    Box::pin(async {
        let cache = MokaCacheWrapper::new().map_err(SchoolHubError::cache_connection)?;
        Ok::<Box<dyn ObjectCache>, SchoolHubError>(Box::new(cache))
    })
}

fn redis_constructor() -> BoxedObjectCacheFuture {
    Box::pin(async {
        let cache = RedisObjectCache::connect()
            .await
            .map_err(SchoolHubError::cache_connection)?;
        Ok::<Box<dyn ObjectCache>, SchoolHubError>(Box::new(cache))
    })
}

/// 注册内置缓存后端
pub fn register_builtin_object_caches() {
    register_object_cache_plugin("moka", Arc::new(moka_constructor));
    register_object_cache_plugin("redis", Arc::new(redis_constructor));
}

pub fn debug_object_cache_registry() {
    let registry = OBJECT_CACHE_REGISTRY
        .read()
        .expect("Cache registry lock poisoned");
    if registry.is_empty() {
        tracing::debug!("No object cache plugins registered.");
    } else {
        tracing::debug!("Registered object cache plugins:");
        for key in registry.keys() {
            tracing::debug!(" - {}", key);
        }
    }
}
