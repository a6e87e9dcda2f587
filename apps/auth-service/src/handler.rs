//! # HTTP リクエストハンドラ
//!
//! - `health`: ヘルスチェック
//! - `auth`: ログイン・ユーザー登録

pub mod auth;
pub mod health;

pub use auth::{AuthState, LoginResponse, REGISTERED_MESSAGE, RegisterResponse, login, register};
pub use health::health_check;
