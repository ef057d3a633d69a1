/// Fixed-position banner marking a non-production build.
pub fn demo_watermark() -> &'static str {
    concat!(
        r#"<div class="demo-watermark" aria-hidden="true" "#,
        r#"style="position:fixed;bottom:12px;right:12px;z-index:9999;pointer-events:none;"#,
        r#"padding:4px 10px;border-radius:4px;background:rgba(220,38,38,0.85);color:#fff;"#,
        r#"font:600 12px/1.4 sans-serif;letter-spacing:0.08em;text-transform:uppercase;">"#,
        "Demo",
        "</div>"
    )
}
