//! # URL デフォルト値
//!
//! 呼び出し側が明示しなかったプレースホルダに補う値を提供する。
//! ロケールやテナントのように、ほとんどのルートで共通する値を毎回渡さずに済む。
//!
//! デフォルト値は明示した引数より優先されない。明示値が `null` の場合は
//! 未指定とみなしてデフォルト値で補う。
//!
//! プロセス全体で共有するデフォルト値は [`set_url_defaults`] /
//! [`add_url_default`] で登録し、[`GlobalUrlDefaults`] 経由で参照する。

use std::sync::{LazyLock, PoisonError, RwLock};

use serde_json::{Map, Value};
use thiserror::Error;

/// URL デフォルト値の提供元
///
/// 実装は純粋かつ全域的でなければならない（副作用なし、常に結果を返す）。
pub trait UrlDefaultsProvider: Send + Sync {
    /// 正規化済みの引数にデフォルト値を補った引数を返す
    fn apply(&self, args: Map<String, Value>) -> Map<String, Value>;
}

/// URL デフォルト値の文字列表現のパースエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlDefaultsError {
    /// `key=value` 形式ではないエントリ
    #[error("URL デフォルト値の形式が不正です（key=value で指定してください）: {0}")]
    MalformedEntry(String),

    /// キーが空のエントリ
    #[error("URL デフォルト値のキーが空です: {0}")]
    EmptyKey(String),
}

/// プレースホルダ名とデフォルト値の対応
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlDefaults(Map<String, Value>);

impl UrlDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    /// デフォルト値を追加する
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// `locale=es,team=7` 形式の文字列からデフォルト値を読み込む
    ///
    /// 空文字列や空白のみのエントリは無視する。値は文字列として保持する。
    pub fn parse(s: &str) -> Result<Self, UrlDefaultsError> {
        let mut defaults = Self::new();
        for entry in s.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let Some((key, value)) = entry.split_once('=') else {
                return Err(UrlDefaultsError::MalformedEntry(entry.to_string()));
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(UrlDefaultsError::EmptyKey(entry.to_string()));
            }
            defaults.insert(key, value.trim());
        }
        Ok(defaults)
    }
}

impl UrlDefaultsProvider for UrlDefaults {
    fn apply(&self, mut args: Map<String, Value>) -> Map<String, Value> {
        for (key, value) in &self.0 {
            if matches!(args.get(key), None | Some(Value::Null)) {
                args.insert(key.clone(), value.clone());
            }
        }
        args
    }
}

/// デフォルト値を適用しない提供元
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDefaults;

impl UrlDefaultsProvider for NoDefaults {
    fn apply(&self, args: Map<String, Value>) -> Map<String, Value> {
        args
    }
}

static GLOBAL_DEFAULTS: LazyLock<RwLock<UrlDefaults>> =
    LazyLock::new(|| RwLock::new(UrlDefaults::new()));

/// プロセス全体の URL デフォルト値を置き換える
pub fn set_url_defaults(defaults: UrlDefaults) {
    tracing::debug!(count = defaults.len(), "URL デフォルト値を設定しました");
    *GLOBAL_DEFAULTS
        .write()
        .unwrap_or_else(PoisonError::into_inner) = defaults;
}

/// プロセス全体の URL デフォルト値に 1 件追加する
pub fn add_url_default(key: impl Into<String>, value: impl Into<Value>) {
    GLOBAL_DEFAULTS
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(key, value);
}

/// プロセス全体の URL デフォルト値をすべて削除する
pub fn clear_url_defaults() {
    set_url_defaults(UrlDefaults::new());
}

/// プロセス全体の URL デフォルト値のスナップショットを返す
pub fn url_defaults() -> UrlDefaults {
    GLOBAL_DEFAULTS
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// プロセス全体の URL デフォルト値を参照する提供元
///
/// 適用中は読み取りロックを保持するため、更新途中の状態を観測することはない。
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalUrlDefaults;

impl UrlDefaultsProvider for GlobalUrlDefaults {
    fn apply(&self, args: Map<String, Value>) -> Map<String, Value> {
        let defaults = GLOBAL_DEFAULTS.read().unwrap_or_else(PoisonError::into_inner);
        if defaults.is_empty() {
            return args;
        }
        defaults.apply(args)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn as_map(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("オブジェクトではありません: {other}"),
        }
    }

    #[test]
    fn test_未指定のキーにデフォルト値を補う() {
        let defaults = UrlDefaults::new().with("locale", "es");
        let applied = defaults.apply(as_map(json!({ "proforma": 1 })));

        assert_eq!(applied, as_map(json!({ "proforma": 1, "locale": "es" })));
    }

    #[test]
    fn test_明示した値はデフォルト値より優先される() {
        let defaults = UrlDefaults::new().with("locale", "es");
        let applied = defaults.apply(as_map(json!({ "locale": "en" })));

        assert_eq!(applied, as_map(json!({ "locale": "en" })));
    }

    #[test]
    fn test_nullの明示値はデフォルト値で補う() {
        let defaults = UrlDefaults::new().with("locale", "es");
        let applied = defaults.apply(as_map(json!({ "locale": null })));

        assert_eq!(applied, as_map(json!({ "locale": "es" })));
    }

    #[test]
    fn test_no_defaultsは引数を変更しない() {
        let args = as_map(json!({ "a": 1 }));
        assert_eq!(NoDefaults.apply(args.clone()), args);
    }

    #[test]
    fn test_parseでキーと値を読み込む() {
        let defaults = UrlDefaults::parse(" locale = es , team=7,, ").unwrap();

        assert_eq!(defaults.len(), 2);
        assert_eq!(defaults.get("locale"), Some(&json!("es")));
        assert_eq!(defaults.get("team"), Some(&json!("7")));
    }

    #[test]
    fn test_parseで空文字列は空のデフォルト値になる() {
        assert!(UrlDefaults::parse("").unwrap().is_empty());
    }

    #[rstest]
    #[case("locale", UrlDefaultsError::MalformedEntry("locale".to_string()))]
    #[case("=es", UrlDefaultsError::EmptyKey("=es".to_string()))]
    fn test_parseで不正なエントリはエラーになる(
        #[case] input: &str,
        #[case] expected: UrlDefaultsError,
    ) {
        assert_eq!(UrlDefaults::parse(input), Err(expected));
    }

    // グローバルな登録を変更するテストはこの 1 つに限定し、
    // 他のテストと衝突しないキーを使う
    #[test]
    fn test_グローバルに登録したデフォルト値を参照できる() {
        add_url_default("defaults_test_tenant", "acme");

        let applied = GlobalUrlDefaults.apply(Map::new());

        assert_eq!(applied.get("defaults_test_tenant"), Some(&json!("acme")));
        assert_eq!(
            url_defaults().get("defaults_test_tenant"),
            Some(&json!("acme"))
        );
    }
}
