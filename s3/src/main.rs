use std::io::Write;

use aws_lister_core::util::init_tracing;
use aws_lister_s3::lister::S3Lister;

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let lister = S3Lister::from_env().await?;

    let mut out = std::io::stdout().lock();
    lister.write_report(&mut out).await?;
    out.flush()?;
    Ok(())
}
