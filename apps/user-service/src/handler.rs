//! # HTTP リクエストハンドラ
//!
//! - `health`: ヘルスチェック
//! - `user`: ユーザー情報の取得・更新

pub mod health;
pub mod user;

pub use health::health_check;
pub use user::{UPDATED_MESSAGE, UpdateUserResponse, UserResponse, UserState, get_user, update_user};
