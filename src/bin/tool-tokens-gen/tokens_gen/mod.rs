//! Helper tool writing token exports, swatch sheets and a contrast audit for preset seeds

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]

mod audit;
mod html;
mod json_io;
mod presets;

use anyhow::{Context, Result};
use chroma_tokens::{
    color::ColorFormat,
    export::{ExportTarget, export},
    tokens::generate,
};
use std::{env, fs, path::PathBuf};

use audit::audit_tokens;
use html::write_swatch_sheet;
use json_io::save_audit_json;
use presets::presets;

pub fn run() -> Result<()> {
    let target_dir = env::var("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("target"));
    let out_dir = target_dir.join("tool-tokens-gen");
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut written = Vec::new();
    let mut reports = Vec::new();
    for preset in presets() {
        let tokens = generate(&preset.seed);

        for (target, extension) in [(ExportTarget::Css, "css"), (ExportTarget::Json, "json")] {
            let path = out_dir.join(format!("{}.{extension}", preset.name));
            let body = export(&tokens, &preset.seed.gradient, target, ColorFormat::Hex)?;
            fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
            written.push(path);
        }

        let rows = audit_tokens(&tokens);
        written.push(write_swatch_sheet(
            preset.name,
            &tokens,
            &rows,
            out_dir.join(format!("{}.html", preset.name)),
        )?);

        println!("{}:", preset.name);
        for row in rows.iter().filter(|row| row.background == "bgPrimary") {
            println!(
                "  {:<14} L-ratio {:>5.2}  WCAG {:>5.2}{}",
                row.text,
                row.lightness_ratio,
                row.wcag_ratio,
                if row.passes_aa { "" } else { "  (below 4.5)" }
            );
        }
        reports.push((preset.name, rows));
    }

    written.push(save_audit_json(out_dir.join("contrast_audit.json"), &reports)?);

    println!("Generated token assets in {}:", out_dir.display());
    for path in &written {
        println!("  - {}", path.display());
    }

    Ok(())
}
