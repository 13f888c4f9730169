pub mod compare;
pub mod dashboard;
pub mod dispatch;
pub mod export;
pub mod get;
pub mod list;
pub mod shared;
