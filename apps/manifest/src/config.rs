//! # マニフェスト生成ツールの設定
//!
//! 環境変数から設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `URL_DEFAULTS` | No | （なし） | `key=value,...` 形式の URL デフォルト値 |
//! | `MANIFEST_COMPACT` | No | `false` | `true` で改行なしの JSON を出力する |
//! | `LOG_FORMAT` | No | `pretty` | ログ出力形式（`json` / `pretty`） |

use std::env;

use thiserror::Error;
use waymark_route::{UrlDefaults, UrlDefaultsError};

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("URL_DEFAULTS の読み込みに失敗しました: {0}")]
    UrlDefaults(#[from] UrlDefaultsError),
}

/// マニフェスト生成ツールの設定
#[derive(Debug, Clone, Default)]
pub struct ManifestConfig {
    /// プロセス全体に登録する URL デフォルト値
    pub url_defaults: UrlDefaults,
    /// 改行なしの JSON を出力するか
    pub compact:      bool,
}

impl ManifestConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            env::var("URL_DEFAULTS").ok().as_deref(),
            env::var("MANIFEST_COMPACT").ok().as_deref(),
        )
    }

    /// 環境変数の値から設定を組み立てる
    fn from_values(url_defaults: Option<&str>, compact: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            url_defaults: url_defaults
                .map(UrlDefaults::parse)
                .transpose()?
                .unwrap_or_default(),
            compact:      compact.is_some_and(|v| v.eq_ignore_ascii_case("true")),
        })
    }
}
