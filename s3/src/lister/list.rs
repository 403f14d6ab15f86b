use crate::util;

use super::S3Lister;

impl S3Lister {
    /// Names of the buckets visible to the resolved credentials, in provider order.
    pub async fn list_buckets(&self) -> anyhow::Result<impl Iterator<Item = String>> {
        Ok(self.list_bucket_regions().await?.map(|(name, _)| name))
    }

    /// `(name, region)` of each bucket, from the same single ListBuckets request.
    pub async fn list_bucket_regions(&self) -> anyhow::Result<impl Iterator<Item = (String, Option<String>)>> {
        Ok(util::list_buckets(self.get_client()).await?)
    }

    /// Keys held by `bucket`, first page only. A bucket in another region is retried
    /// once against the region S3 names.
    pub async fn list_objects(&self, bucket: &str) -> anyhow::Result<impl Iterator<Item = String>> {
        self.list_objects_in(bucket, None).await
    }

    /// Like `list_objects`, sending the first request to `region` when it is known.
    pub async fn list_objects_in(&self, bucket: &str, region: Option<&str>) -> anyhow::Result<impl Iterator<Item = String>> {
        match util::list_objects(self.client_for(region), bucket).await {
            Ok(keys) => Ok(keys),
            Err(err) => match self.redirect_target(&err, region) {
                Some(target) => {
                    tracing::debug!("s3: bucket {} is in {}, retrying there", bucket, target);
                    Ok(util::list_objects(self.get_client_in(&target), bucket).await?)
                }
                None => Err(err.into()),
            },
        }
    }
}
