//! storefront-api - 商品目录的 HTTP 服务
//!
//! 路由层只负责参数校验、鉴权和响应封装，数据读写全部交给 [`catalog::ProductStore`]。

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod response;
pub mod server;
