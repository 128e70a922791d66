//! # ルート URL ビルダーのエラー定義
//!
//! すべて同期的・決定的な値エラーであり、リトライの対象にはならない。
//! 回復（ID の再入力を促すなど）は呼び出し側の責務。
//!
//! | エラー種別 | 発生条件 |
//! |-----------|---------|
//! | `MissingParameter` | 必須プレースホルダの値が未指定または `null` |
//! | `UnsupportedMethod` | ルートが宣言していない HTTP メソッドを要求した |
//! | `InvalidParameter` | 値を文字列化できない（配列、識別子を持たないオブジェクト） |

use thiserror::Error;

use crate::method::HttpMethod;

/// ルート URL の組み立てで発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// 必須のパスパラメータが解決できなかった
    #[error("パスパラメータ `{name}` が指定されていません")]
    MissingParameter {
        /// プレースホルダ名
        name: String,
    },

    /// ルートが宣言していない HTTP メソッドが要求された
    #[error("{path} は {method} メソッドをサポートしていません")]
    UnsupportedMethod {
        /// 要求されたメソッド
        method: HttpMethod,
        /// ルートのパステンプレート
        path:   &'static str,
    },

    /// パスパラメータの値を文字列化できない
    ///
    /// `[object Object]` のような意味のない URL を生成しないよう、
    /// スカラーに解決できない値はここで拒否する。
    #[error("パスパラメータ `{name}` の値が不正です: {reason}")]
    InvalidParameter {
        /// プレースホルダ名
        name:   String,
        /// 拒否した理由
        reason: String,
    },
}

impl RouteError {
    pub(crate) fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter { name: name.into() }
    }

    pub(crate) fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name:   name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameterのメッセージにプレースホルダ名が含まれる() {
        let err = RouteError::missing("proforma");
        assert_eq!(err.to_string(), "パスパラメータ `proforma` が指定されていません");
    }

    #[test]
    fn test_unsupported_methodのメッセージにパスとメソッドが含まれる() {
        let err = RouteError::UnsupportedMethod {
            method: HttpMethod::Delete,
            path:   "/api/login",
        };
        assert_eq!(
            err.to_string(),
            "/api/login は DELETE メソッドをサポートしていません"
        );
    }
}
