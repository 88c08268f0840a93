mod cache;

pub use cache::CacheKind;
pub use cache::PageCacheManager;
