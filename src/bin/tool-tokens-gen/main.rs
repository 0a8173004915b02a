//! Helper tool writing token exports, swatch sheets and a contrast audit for preset seeds

#[cfg(feature = "tool-tokens-gen")]
mod tokens_gen;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "tool-tokens-gen")]
    {
        tokens_gen::run()?;
    }
    Ok(())
}
