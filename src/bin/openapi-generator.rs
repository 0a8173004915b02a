use anyhow::Context;
use chroma_tokens::services::documentation::ApiDoc;
use utoipa::OpenApi;

fn main() -> anyhow::Result<()> {
    let doc = ApiDoc::openapi();
    println!(
        "{}",
        doc.to_pretty_json().context("serializing OpenAPI document")?
    );
    Ok(())
}
