//! # 認証ドメイン
//!
//! ログイン・登録で扱う認証情報とトークンを定義する。
//!
//! | 型 | 説明 |
//! |---|------|
//! | [`Credentials`] | 未解析の認証情報（リクエストボディ） |
//! | [`AccessToken`] | 発行されたアクセストークン |
//! | [`AuthToken`] | トークンと対象ユーザーの組 |

use crate::user::UserId;

define_raw_payload! {
    /// 認証情報
    ///
    /// `/auth/login` と `/auth/register` のリクエストボディ。
    pub struct Credentials;
}

define_string_id! {
    /// アクセストークン
    pub struct AccessToken, "アクセストークン";
}

/// ログイン成功時に発行される認証トークン
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    token:   AccessToken,
    user_id: UserId,
}

impl AuthToken {
    pub fn new(token: AccessToken, user_id: UserId) -> Self {
        Self { token, user_id }
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}
