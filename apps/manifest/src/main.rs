//! # ルートマニフェスト生成ツール
//!
//! ルートテーブルを JSON で標準出力に出力する。ログは標準エラー出力に出る。
//!
//! ## 使い方
//!
//! ```bash
//! URL_DEFAULTS=locale=es cargo run -p waymark-manifest > routes.json
//! ```

use waymark_manifest::{config::ManifestConfig, manifest::RouteManifest};
use waymark_shared::{TracingConfig, observability::init_tracing};

fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("waymark-manifest");
    init_tracing(&tracing_config);

    let config = ManifestConfig::from_env()?;
    tracing::info!(
        tool = %tracing_config.tool_name,
        url_defaults = config.url_defaults.len(),
        "ルートマニフェストを生成します"
    );

    waymark_route::set_url_defaults(config.url_defaults.clone());

    let manifest = RouteManifest::build(waymark_routes::all(), &waymark_route::url_defaults());
    let json = if config.compact {
        serde_json::to_string(&manifest)?
    } else {
        serde_json::to_string_pretty(&manifest)?
    };
    println!("{json}");

    Ok(())
}
