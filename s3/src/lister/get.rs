use crate::util;

use super::S3Lister;

impl S3Lister {
    /// Reads the whole object into memory. A missing bucket or key is the SDK's error,
    /// returned as is.
    pub async fn read_object(&self, bucket: &str, key: &str) -> anyhow::Result<Vec<u8>> {
        self.read_object_in(bucket, key, None).await
    }

    pub async fn read_object_in(&self, bucket: &str, key: &str, region: Option<&str>) -> anyhow::Result<Vec<u8>> {
        let output = match util::get_object(self.client_for(region), bucket, key).await {
            Ok(output) => output,
            Err(err) => match self.redirect_target(&err, region) {
                Some(target) => {
                    tracing::debug!("s3: bucket {} is in {}, retrying there", bucket, target);
                    util::get_object(self.get_client_in(&target), bucket, key).await?
                }
                None => return Err(err.into()),
            },
        };

        let body = output.body.collect().await?;
        Ok(body.into_bytes().to_vec())
    }
}
