pub fn format_object_url(bucket: &str, key: &str, region: &str) -> String {
    format!("https://{bucket}.s3.{region}.amazonaws.com/{key}")
}
