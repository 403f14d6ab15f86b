//! Single-request S3 calls.
//!
//! None of these follow continuation tokens: a listing holds whatever the first page
//! returned, so buckets with more than one page of keys are silently truncated.

use aws_sdk_s3::{
    error::SdkError,
    operation::{
        get_object::{GetObjectError, GetObjectOutput},
        list_buckets::ListBucketsError,
        list_objects::ListObjectsError,
    },
};

/// Set by S3 on responses from the wrong regional endpoint for a bucket.
pub const BUCKET_REGION_HEADER: &str = "x-amz-bucket-region";

/// `(name, region)` per bucket. The region is only present when S3 reports it.
pub async fn list_buckets(
    client: aws_sdk_s3::Client,
) -> Result<impl Iterator<Item = (String, Option<String>)>, SdkError<ListBucketsError>> {
    tracing::debug!("s3:ListBuckets");
    let output = client.list_buckets().send().await?;

    Ok(output
        .buckets
        .unwrap_or_default()
        .into_iter()
        .filter_map(|bucket| Some((bucket.name?, bucket.bucket_region))))
}

pub async fn list_objects(
    client: aws_sdk_s3::Client,
    bucket: &str,
) -> Result<impl Iterator<Item = String>, SdkError<ListObjectsError>> {
    tracing::debug!("s3:ListObjects bucket={}", bucket);
    let output = client.list_objects().bucket(bucket).send().await?;

    Ok(output.contents.unwrap_or_default().into_iter().filter_map(|object| object.key))
}

pub async fn get_object(
    client: aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
) -> Result<GetObjectOutput, SdkError<GetObjectError>> {
    tracing::debug!("s3:GetObject bucket={} key={}", bucket, key);
    client.get_object().bucket(bucket).key(key).send().await
}

/// The region S3 names for the bucket when a request was rejected by the wrong endpoint.
pub fn redirect_region<E>(err: &SdkError<E>) -> Option<&str> {
    match err {
        SdkError::ServiceError(context) => context.raw().headers().get(BUCKET_REGION_HEADER),
        _ => None,
    }
}
