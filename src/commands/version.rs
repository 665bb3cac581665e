use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("cgmon version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
