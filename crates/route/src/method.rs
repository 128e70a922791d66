//! # HTTP メソッド
//!
//! ルートが受け付けるメソッドと、HTML フォームがネイティブに扱えるメソッドを定義する。
//! HTML フォームは GET / POST しか送信できないため、それ以外のメソッドは
//! `_method` フィールドによるメソッドオーバーライドで表現する。

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// HTTP メソッド
///
/// JSON では小文字（`"get"`）、`Display` では大文字（`GET`）になる。
/// `_method` フィールドの値には大文字表記を使う。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Options,
}

impl HttpMethod {
    /// HTML フォームで送信する際の外側のメソッド
    ///
    /// HEAD は GET として、それ以外の非ネイティブメソッドは POST として送信する。
    pub fn form_method(self) -> FormMethod {
        match self {
            Self::Get | Self::Head => FormMethod::Get,
            Self::Post | Self::Put | Self::Patch | Self::Delete | Self::Options => {
                FormMethod::Post
            }
        }
    }

    /// `_method` オーバーライドが必要か
    pub fn requires_override(self) -> bool {
        !matches!(self, Self::Get | Self::Post)
    }
}

/// HTML フォームがネイティブに扱えるメソッド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FormMethod {
    Get,
    Post,
}
