//! # パスパラメータ
//!
//! 呼び出し側がプレースホルダに渡す値を表現する。
//!
//! 値は [`serde_json::Value`] で保持するため、`Serialize` を実装したエンティティを
//! そのまま渡せる。オブジェクトが渡された場合はプレースホルダのバインディング
//! フィールド（デフォルト `id`）を値として使う。
//!
//! | 形 | 例 | 解釈 |
//! |----|----|------|
//! | [`PathArgs::Scalar`] | `42` | 唯一（先頭）のプレースホルダの値 |
//! | [`PathArgs::Positional`] | `["ENTREGA", "OK"]` | 宣言順に対応付ける |
//! | [`PathArgs::Named`] | `{"proforma": 42}` | 名前で対応付ける |

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{error::RouteError, template::Placeholder};

/// パスパラメータ
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PathArgs {
    /// 引数なし
    #[default]
    None,
    /// 単一の値
    Scalar(Value),
    /// 宣言順に並べた値
    Positional(Vec<Value>),
    /// プレースホルダ名と値の対応
    Named(Map<String, Value>),
}

impl PathArgs {
    /// 名前付き引数を作成する
    pub fn named<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Named(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// エンティティを引数にする
    ///
    /// オブジェクトにシリアライズされる型は名前付き引数として扱われ、
    /// 単一プレースホルダのルートではバインディングフィールドが値になる。
    pub fn entity<T: Serialize>(entity: &T) -> Result<Self, serde_json::Error> {
        Ok(Self::from(serde_json::to_value(entity)?))
    }

    /// プレースホルダ名をキーとするマップに正規化する
    ///
    /// - スカラーは先頭のプレースホルダに対応付ける
    /// - 位置指定は宣言順に対応付け、余った値は無視する
    /// - 単一プレースホルダのルートで、プレースホルダ名を持たずバインディング
    ///   フィールドを持つマップはエンティティそのものとみなす
    pub(crate) fn normalize(self, placeholders: &[Placeholder<'_>]) -> Map<String, Value> {
        match self {
            Self::None => Map::new(),
            Self::Scalar(value) => placeholders
                .first()
                .map(|p| Map::from_iter([(p.name.to_string(), value)]))
                .unwrap_or_default(),
            Self::Positional(values) => placeholders
                .iter()
                .zip(values)
                .map(|(p, value)| (p.name.to_string(), value))
                .collect(),
            Self::Named(map) => match placeholders {
                [only]
                    if !map.contains_key(only.name) && map.contains_key(only.binding_field) =>
                {
                    Map::from_iter([(only.name.to_string(), Value::Object(map))])
                }
                _ => map,
            },
        }
    }
}

/// 解決済みの値をプレースホルダに差し込む文字列へ変換する
///
/// 必須プレースホルダの値が未指定または `null` の場合は `MissingParameter`、
/// 配列やバインディングフィールドを持たないオブジェクトは `InvalidParameter` になる。
pub(crate) fn resolve(
    placeholder: &Placeholder<'_>,
    value: Option<&Value>,
) -> Result<String, RouteError> {
    let value = match value {
        Some(Value::Object(fields)) => match fields.get(placeholder.binding_field) {
            Some(Value::Object(_) | Value::Array(_)) => {
                return Err(RouteError::invalid(
                    placeholder.name,
                    format!("`{}` がスカラーではありません", placeholder.binding_field),
                ));
            }
            Some(field) => Some(field),
            None => {
                return Err(RouteError::invalid(
                    placeholder.name,
                    format!("オブジェクトに `{}` がありません", placeholder.binding_field),
                ));
            }
        },
        other => other,
    };

    match value {
        None | Some(Value::Null) if placeholder.optional => Ok(String::new()),
        None | Some(Value::Null) => Err(RouteError::missing(placeholder.name)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(Value::Array(_)) => Err(RouteError::invalid(
            placeholder.name,
            "配列はパスパラメータに使用できません",
        )),
        Some(Value::Object(_)) => Err(RouteError::invalid(
            placeholder.name,
            "入れ子のオブジェクトはパスパラメータに使用できません",
        )),
    }
}

impl From<Value> for PathArgs {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::None,
            Value::Array(values) => Self::Positional(values),
            Value::Object(map) => Self::Named(map),
            scalar => Self::Scalar(scalar),
        }
    }
}

impl From<Map<String, Value>> for PathArgs {
    fn from(map: Map<String, Value>) -> Self {
        Self::Named(map)
    }
}

impl From<Vec<Value>> for PathArgs {
    fn from(values: Vec<Value>) -> Self {
        Self::Positional(values)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for PathArgs {
    fn from(values: [T; N]) -> Self {
        Self::Positional(values.into_iter().map(Into::into).collect())
    }
}

impl From<()> for PathArgs {
    fn from(_: ()) -> Self {
        Self::None
    }
}

impl<T: Into<PathArgs>> From<Option<T>> for PathArgs {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

macro_rules! impl_scalar_path_args {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for PathArgs {
                fn from(value: $ty) -> Self {
                    Self::Scalar(Value::from(value))
                }
            }
        )*
    };
}

impl_scalar_path_args!(&str, String, i32, i64, u32, u64, usize, bool);
