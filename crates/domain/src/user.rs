//! # ユーザードメイン
//!
//! | 型 | 説明 |
//! |---|------|
//! | [`UserId`] | ユーザー識別子（パスからそのまま受け取る） |
//! | [`UserRecord`] | ユーザーレコード |
//! | [`UserUpdate`] | 未解析の更新内容（リクエストボディ） |

define_string_id! {
    /// ユーザー ID
    ///
    /// 形式は規定しない。空文字列のみ拒否する。
    pub struct UserId, "ユーザー ID";
}

define_raw_payload! {
    /// ユーザー更新内容
    ///
    /// `PUT /users/{id}` のリクエストボディ。
    pub struct UserUpdate;
}

/// ユーザーレコード
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    id:    UserId,
    name:  String,
    email: String,
}

impl UserRecord {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
