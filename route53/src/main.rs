use std::io::Write;

use aws_lister_core::util::init_tracing;
use aws_lister_route53::lister::Route53Lister;

#[tokio::main(flavor = "current_thread")]
pub async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let lister = Route53Lister::from_env().await?;

    let mut out = std::io::stdout().lock();
    lister.write_report(&mut out).await?;
    out.flush()?;
    Ok(())
}
