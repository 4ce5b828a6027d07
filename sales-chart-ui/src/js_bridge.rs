//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart functions live in `assets/js/*.js`, are embedded at compile
//! time and evaluated as globals (no ES modules) once D3 itself has loaded.
//! Payloads cross the boundary as JSON strings, quoted as JS string literals.

use wasm_bindgen::JsValue;

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static LINE_CHART_JS: &str = include_str!("../assets/js/line-chart.js");

/// Global functions promoted to `window.*` after the scripts are evaluated.
const EXPORTED_FUNCTIONS: [&str; 5] = [
    "renderSalesLineChart",
    "destroySalesLineChart",
    "initTooltip",
    "showTooltip",
    "hideTooltip",
];

/// Quote `s` as a JS string literal (JSON strings are valid JS literals).
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Execute arbitrary JS. Exceptions are caught on the JS side and logged.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Sales chart JS call failed:', e); }}",
        code
    );
    if let Err(err) = js_sys::eval(&wrapped) {
        log::warn!("js_bridge: eval failed: {}", describe(&err));
    }
}

/// Script that waits for D3, evaluates the chart sources at global scope and
/// sets `window.__salesChartsReady`.
fn init_script() -> String {
    let sources = [TOOLTIP_JS, LINE_CHART_JS].join("\n");
    let promote: String = EXPORTED_FUNCTIONS
        .iter()
        .map(|name| {
            format!(
                "if (typeof {name} !== 'undefined') window.{name} = {name};\n",
                name = name
            )
        })
        .collect();

    format!(
        r#"
        window.__salesChartScripts = {sources};
        (function() {{
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__salesChartScripts);
                    delete window.__salesChartScripts;
                    {promote}
                    window.__salesChartsReady = true;
                    console.log('Sales charts initialized');
                }}
            }}, 100);
        }})();
        "#,
        sources = js_string(&sources),
        promote = promote,
    )
}

/// Load the chart scripts. Call once at app startup.
pub fn init_charts() {
    if let Err(err) = js_sys::eval(&init_script()) {
        log::error!("js_bridge: failed to initialize chart scripts: {}", describe(&err));
    }
}

/// Script that renders the line chart once D3, the chart scripts and the
/// container are all available.
///
/// Every call bumps `window.__salesChartGeneration`; a pending poll that has
/// been superseded by a newer call gives up, so the last selection wins.
pub fn line_chart_script(container_id: &str, data_json: &str, config_json: &str) -> String {
    let id = js_string(container_id);
    format!(
        r#"
        (function() {{
            var generation = (window.__salesChartGeneration || 0) + 1;
            window.__salesChartGeneration = generation;
            var poll = setInterval(function() {{
                if (window.__salesChartGeneration !== generation) {{
                    clearInterval(poll);
                    return;
                }}
                if (window.__salesChartsReady &&
                    typeof window.renderSalesLineChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderSalesLineChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('renderSalesLineChart error:', e); }}
                }}
            }}, 50);
        }})();
        "#,
        id = id,
        data = js_string(data_json),
        config = js_string(config_json),
    )
}

/// Render (or re-render) the sales line chart into `container_id`.
pub fn render_line_chart(container_id: &str, data_json: &str, config_json: &str) {
    call_js(&line_chart_script(container_id, data_json, config_json));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_string_escapes_quotes() {
        assert_eq!(js_string(r#"it's "quoted""#), r#""it's \"quoted\"""#);
        assert_eq!(js_string("a\nb"), r#""a\nb""#);
    }

    #[test]
    fn line_chart_script_embeds_payload_as_literals() {
        let script = line_chart_script(
            "sales-line-chart",
            r#"[{"date":"2024-01-01","sales":100.0}]"#,
            r#"{"title":"Sales in North Region"}"#,
        );
        assert!(script.contains(r#"window.renderSalesLineChart("sales-line-chart", "#));
        assert!(script.contains(r#""[{\"date\":\"2024-01-01\",\"sales\":100.0}]""#));
        assert!(script.contains(r#""{\"title\":\"Sales in North Region\"}""#));
        assert!(script.contains("__salesChartGeneration"));
    }

    #[test]
    fn init_script_promotes_every_export() {
        let script = init_script();
        for name in EXPORTED_FUNCTIONS {
            assert!(
                script.contains(&format!("window.{name} = {name};")),
                "{name} is not promoted"
            );
        }
        assert!(script.contains("window.__salesChartsReady = true;"));
    }

    #[test]
    fn embedded_sources_define_exports() {
        let sources = [TOOLTIP_JS, LINE_CHART_JS].join("\n");
        for name in EXPORTED_FUNCTIONS {
            assert!(
                sources.contains(&format!("function {name}(")),
                "{name} is not defined in assets/js"
            );
        }
    }
}
