//! URL の組み立て
//!
//! 引数の正規化 → デフォルト値の適用 → プレースホルダの置換 →
//! 末尾スラッシュの除去 → クエリの付加、の順に処理する。

use crate::{
    args::{self, PathArgs},
    defaults::UrlDefaultsProvider,
    error::RouteError,
    query::QueryOptions,
    template::RouteTemplate,
};

#[tracing::instrument(skip_all, level = "debug", fields(path = template.path()))]
pub(crate) fn build(
    template: &RouteTemplate,
    args: PathArgs,
    options: &QueryOptions,
    defaults: &dyn UrlDefaultsProvider,
) -> Result<String, RouteError> {
    let placeholders = template.placeholders();
    let resolved = defaults.apply(args.normalize(&placeholders));

    // トークンは宣言順に現れるため、未処理部分の先頭から順に置換する
    let mut path = String::with_capacity(template.path().len());
    let mut rest = template.path();
    for placeholder in &placeholders {
        let value = args::resolve(placeholder, resolved.get(placeholder.name))?;
        if let Some((head, tail)) = rest.split_once(placeholder.token) {
            path.push_str(head);
            path.push_str(&value);
            rest = tail;
        }
    }
    path.push_str(rest);

    let path = collapse_trailing_slashes(&path);
    let url = format!("{path}{}", options.to_query_string());

    tracing::debug!(%url, "ルート URL を組み立てました");
    Ok(url)
}

/// 末尾のスラッシュを取り除く（ルートパスは `/` のまま残す）
fn collapse_trailing_slashes(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::{
        defaults::{NoDefaults, UrlDefaults},
        method::HttpMethod,
    };

    const SHOW: RouteTemplate =
        RouteTemplate::new("/api/proformas/{proforma}", &[HttpMethod::Get, HttpMethod::Head]);
    const ESTADO: RouteTemplate = RouteTemplate::new(
        "/api/estados/{categoria}/{codigo}",
        &[HttpMethod::Get, HttpMethod::Head],
    );
    const LOGIN: RouteTemplate = RouteTemplate::new("/api/login", &[HttpMethod::Post]);
    const OPTIONAL: RouteTemplate = RouteTemplate::new("/x/{p?}/", &[HttpMethod::Get]);

    fn build_plain(template: &RouteTemplate, args: impl Into<PathArgs>) -> Result<String, RouteError> {
        build(template, args.into(), &QueryOptions::default(), &NoDefaults)
    }

    #[test]
    fn test_エンティティのidでプレースホルダを置換する() {
        assert_eq!(
            build_plain(&SHOW, json!({ "id": 42 })).unwrap(),
            "/api/proformas/42"
        );
    }

    #[test]
    fn test_位置指定で複数のプレースホルダを置換する() {
        assert_eq!(
            build_plain(&ESTADO, ["ENTREGA", "OK"]).unwrap(),
            "/api/estados/ENTREGA/OK"
        );
    }

    #[rstest]
    #[case(PathArgs::from(42))]
    #[case(PathArgs::from(json!({ "proforma": 42 })))]
    #[case(PathArgs::from(json!({ "id": 42 })))]
    #[case(PathArgs::from(json!({ "proforma": { "id": 42 } })))]
    #[case(PathArgs::from([42]))]
    fn test_引数の形によらず同じurlになる(#[case] args: PathArgs) {
        assert_eq!(build_plain(&SHOW, args).unwrap(), "/api/proformas/42");
    }

    #[test]
    fn test_位置指定と名前付きは同じurlになる() {
        let positional = build_plain(&ESTADO, ["ENTREGA", "OK"]).unwrap();
        let named = build_plain(&ESTADO, json!({ "categoria": "ENTREGA", "codigo": "OK" })).unwrap();

        assert_eq!(positional, named);
    }

    #[test]
    fn test_同じ入力からは同じurlになる() {
        let options = QueryOptions::default().with_query("page", 2);
        let first = build(&SHOW, PathArgs::from(1), &options, &NoDefaults).unwrap();
        let second = build(&SHOW, PathArgs::from(1), &options, &NoDefaults).unwrap();

        assert_eq!(first, second);
    }

    #[rstest]
    #[case(PathArgs::from(""))]
    #[case(PathArgs::None)]
    fn test_空の末尾セグメントのスラッシュを除去する(#[case] args: PathArgs) {
        assert_eq!(build_plain(&OPTIONAL, args).unwrap(), "/x");
    }

    #[test]
    fn test_必須パラメータが空文字列なら末尾スラッシュを除去する() {
        let template = RouteTemplate::new("/x/{p}/", &[HttpMethod::Get]);
        assert_eq!(build_plain(&template, "").unwrap(), "/x");
    }

    #[test]
    fn test_ルートパスはスラッシュを残す() {
        let template = RouteTemplate::new("/", &[HttpMethod::Get]);
        assert_eq!(build_plain(&template, ()).unwrap(), "/");
    }

    #[test]
    fn test_必須パラメータがなければmissing_parameterになる() {
        assert_eq!(
            build_plain(&ESTADO, ["ENTREGA"]),
            Err(RouteError::MissingParameter {
                name: "codigo".to_string(),
            })
        );
    }

    #[test]
    fn test_クエリを付加する() {
        let options = QueryOptions::default().with_query("redirect", "/x");
        let url = build(&LOGIN, PathArgs::None, &options, &NoDefaults).unwrap();

        assert_eq!(url, "/api/login?redirect=%2Fx");
    }

    #[test]
    fn test_デフォルト値で未指定のプレースホルダを補う() {
        let template =
            RouteTemplate::new("/{locale}/proformas/{proforma}", &[HttpMethod::Get]);
        let defaults = UrlDefaults::new().with("locale", "es");

        let url = build(
            &template,
            PathArgs::from(json!({ "proforma": 3 })),
            &QueryOptions::default(),
            &defaults,
        )
        .unwrap();

        assert_eq!(url, "/es/proformas/3");
    }

    #[test]
    fn test_置換した値に含まれるトークンは再置換しない() {
        let template = RouteTemplate::new("/a/{first}/{second}", &[HttpMethod::Get]);
        let url = build_plain(&template, ["{second}", "b"]).unwrap();

        assert_eq!(url, "/a/{second}/b");
    }
}
