use std::io::Write;

use aws_lister_core::report::{write_entry, write_header};

use super::S3Lister;

impl S3Lister {
    /// Writes one `[ bucket ]` header per bucket followed by a ` => key` line per object.
    ///
    /// Objects are listed through the bucket's own region when ListBuckets reports it.
    /// Lines are written as soon as each listing returns; a failure part way through
    /// leaves the earlier lines in `out`.
    pub async fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> anyhow::Result<()> {
        for (bucket, region) in self.list_bucket_regions().await? {
            write_header(out, &bucket)?;

            for key in self.list_objects_in(&bucket, region.as_deref()).await? {
                write_entry(out, &key)?;
            }
        }
        Ok(())
    }
}
