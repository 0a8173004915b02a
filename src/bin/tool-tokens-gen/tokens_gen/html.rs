#![forbid(unsafe_code)]

use super::audit::ContrastRow;
use anyhow::Result;
use chroma_tokens::tokens::DesignTokens;
use std::fs::File;
use std::io::{BufWriter, Write};

pub fn write_swatch_sheet(
    title: &str,
    tokens: &DesignTokens,
    rows: &[ContrastRow],
    path: impl AsRef<std::path::Path>,
) -> Result<std::path::PathBuf> {
    let path = path.as_ref();
    let f = File::create(path)?;
    let mut w = BufWriter::new(f);
    let page = tokens.colors.bg_primary.to_hex();
    let ink = tokens.colors.text_primary.to_hex();
    writeln!(
        w,
        r#"<!doctype html><meta charset="utf-8">
<style>
  body{{margin:0;background:{page};color:{ink};font-family:system-ui}}
  h2{{margin:12px}}
  .g{{display:grid;grid-template-columns:repeat(5,1fr);gap:6px;padding:8px}}
  .s{{aspect-ratio:3/1;border-radius:10px;display:flex;flex-direction:column;align-items:center;
      justify-content:center;font-weight:700;border:1px solid rgba(127,127,127,.35)}}
  table{{margin:12px;border-collapse:collapse}}
  td,th{{padding:4px 10px;text-align:left}}
</style>
<h2>{title}</h2>
<div class="g">"#
    )?;
    for (role, color) in tokens.colors.iter() {
        let hex = color.to_hex();
        writeln!(
            w,
            r#"<div class="s" style="background:{hex};color:{ink}"><span>{}</span><small>{hex} | {color}</small></div>"#,
            role.key()
        )?;
    }
    writeln!(w, "</div>")?;

    writeln!(
        w,
        "<table><tr><th>text</th><th>surface</th><th>L ratio</th><th>WCAG</th></tr>"
    )?;
    for row in rows {
        let text = format!(
            "#{:02X}{:02X}{:02X}",
            row.text_rgb.red, row.text_rgb.green, row.text_rgb.blue
        );
        let surface = format!(
            "#{:02X}{:02X}{:02X}",
            row.background_rgb.red, row.background_rgb.green, row.background_rgb.blue
        );
        writeln!(
            w,
            r#"<tr style="background:{surface};color:{text}"><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.2}{}</td></tr>"#,
            row.text,
            row.background,
            row.lightness_ratio,
            row.wcag_ratio,
            if row.passes_aa { "" } else { " ✗" }
        )?;
    }
    writeln!(w, "</table>")?;
    Ok(path.to_path_buf())
}
