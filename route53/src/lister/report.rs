use std::io::Write;

use aws_lister_core::report::{write_entry, write_header};

use super::Route53Lister;

impl Route53Lister {
    /// Headers carry the zone name, not its id. Zones sharing a name are printed as
    /// separate sections under the same header.
    pub async fn write_report<W: Write + ?Sized>(&self, out: &mut W) -> anyhow::Result<()> {
        for (zone_id, zone_name) in self.list_zones().await? {
            write_header(out, &zone_name)?;

            for record_name in self.list_record_sets(&zone_id).await? {
                write_entry(out, &record_name)?;
            }
        }
        Ok(())
    }
}
