use crate::util::{list_hosted_zones, list_resource_record_sets};

use super::Route53Lister;

impl Route53Lister {
    /// `(id, name)` of each hosted zone, in provider order.
    pub async fn list_zones(&self) -> anyhow::Result<impl Iterator<Item = (String, String)>> {
        list_hosted_zones(self.get_client()).await
    }

    /// Record names within the zone identified by `zone_id`.
    pub async fn list_record_sets(&self, zone_id: &str) -> anyhow::Result<impl Iterator<Item = String>> {
        list_resource_record_sets(self.get_client(), zone_id).await
    }
}
