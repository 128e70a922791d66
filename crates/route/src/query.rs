//! # クエリ文字列
//!
//! URL に付加するクエリパラメータの指定と、`application/x-www-form-urlencoded`
//! 形式へのシリアライズを行う。
//!
//! ## 値の変換規則
//!
//! | 値 | 出力 |
//! |----|------|
//! | `null` | キーを削除する |
//! | `true` / `false` | `1` / `0` |
//! | 配列 | `key[]=v` を要素ごとに追加する |
//! | オブジェクト | `key[sub]=v`（スカラーのメンバーのみ） |
//! | その他 | 文字列化した値で上書きする |
//!
//! `merge_query` を指定した場合は `current_query`（現在の URL のクエリ）を
//! 起点にしてマージする。

use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::method::HttpMethod;

/// メソッドオーバーライドに使うクエリキー
pub const METHOD_OVERRIDE_KEY: &str = "_method";

/// クエリオプション
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    /// 付加するクエリパラメータ
    pub query:         Option<Map<String, Value>>,
    /// `current_query` にマージするクエリパラメータ
    pub merge_query:   Option<Map<String, Value>>,
    /// マージの起点となるクエリ文字列（先頭の `?` は省略可）
    pub current_query: Option<String>,
}

impl QueryOptions {
    /// `current_query` を起点にマージするオプションを作成する
    pub fn merge(current_query: impl Into<String>) -> Self {
        Self {
            merge_query: Some(Map::new()),
            current_query: Some(current_query.into()),
            ..Self::default()
        }
    }

    /// `query` にパラメータを追加する
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// `merge_query` にパラメータを追加する
    pub fn with_merge_query(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.merge_query
            .get_or_insert_with(Map::new)
            .insert(key.into(), value.into());
        self
    }

    /// `_method` を注入したオプションを返す
    ///
    /// 呼び出し側がマージを要求していれば `merge_query` に、そうでなければ
    /// `query` に注入する。同名のキーは上書きし、他のキーは保持する。
    pub(crate) fn with_method_override(&self, method: HttpMethod) -> Self {
        let value = Value::from(method.to_string());
        if self.merge_query.is_some() {
            self.clone().with_merge_query(METHOD_OVERRIDE_KEY, value)
        } else {
            self.clone().with_query(METHOD_OVERRIDE_KEY, value)
        }
    }

    /// `?` から始まるクエリ文字列を返す
    ///
    /// パラメータが空の場合は空文字列を返す（`?` を付けない）。
    pub fn to_query_string(&self) -> String {
        if self.query.is_none() && self.merge_query.is_none() {
            return String::new();
        }

        let mut params = match (&self.merge_query, &self.current_query) {
            (Some(_), Some(current)) => QueryParams::parse(current),
            _ => QueryParams::default(),
        };

        for entries in [&self.query, &self.merge_query].into_iter().flatten() {
            for (key, value) in entries {
                params.apply(key, value);
            }
        }

        let serialized = params.serialize();
        if serialized.is_empty() {
            String::new()
        } else {
            format!("?{serialized}")
        }
    }
}

/// 順序を保持するクエリパラメータの列
#[derive(Debug, Default)]
struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self(form_urlencoded::parse(query.as_bytes()).into_owned().collect())
    }

    fn apply(&mut self, key: &str, value: &Value) {
        match value {
            Value::Null => self.delete(key),
            Value::Array(items) => {
                let array_key = format!("{key}[]");
                self.delete(&array_key);
                for item in items.iter().filter_map(scalar_to_query) {
                    self.0.push((array_key.clone(), item));
                }
            }
            Value::Object(members) => {
                let prefix = format!("{key}[");
                self.0.retain(|(k, _)| !k.starts_with(&prefix));
                for (sub_key, member) in members {
                    if let Some(member) = scalar_to_query(member) {
                        self.set(&format!("{key}[{sub_key}]"), member);
                    }
                }
            }
            scalar => {
                if let Some(value) = scalar_to_query(scalar) {
                    self.set(key, value);
                }
            }
        }
    }

    fn delete(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    /// 最初に現れた同名キーの位置で値を置き換え、残りは削除する
    fn set(&mut self, key: &str, value: String) {
        match self.0.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.0[index].1 = value;
                let mut seen = 0usize;
                self.0.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    seen += 1;
                    seen == 1
                });
            }
            None => self.0.push((key.to_string(), value)),
        }
    }

    fn serialize(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.0.iter())
            .finish()
    }
}

fn scalar_to_query(value: &Value) -> Option<String> {
    match value {
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some("0".to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
