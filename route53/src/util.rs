// Only the first page of each listing is read; `is_truncated` is ignored.

pub async fn list_hosted_zones(client: aws_sdk_route53::Client) -> anyhow::Result<impl Iterator<Item = (String, String)>> {
    tracing::debug!("route53:ListHostedZones");
    let list_result = client.list_hosted_zones().send().await?;

    Ok(list_result.hosted_zones.into_iter().map(|hz| (hz.id, hz.name)))
}

pub async fn list_resource_record_sets(
    client: aws_sdk_route53::Client,
    hosted_zone_id: &str,
) -> anyhow::Result<impl Iterator<Item = String>> {
    tracing::debug!("route53:ListResourceRecordSets hosted_zone_id={}", hosted_zone_id);
    let list_result = client
        .list_resource_record_sets()
        .hosted_zone_id(hosted_zone_id)
        .send()
        .await?;

    Ok(list_result.resource_record_sets.into_iter().map(|record| record.name))
}
