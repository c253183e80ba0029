#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = madrasa_rust::run().await {
        eprintln!("madrasa-rust fatal: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}
