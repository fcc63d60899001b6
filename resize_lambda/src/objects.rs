use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::tracing;

use crate::error::ResizeError;
use crate::image_type::ImageType;

const RESIZED_PREFIX: &str = "resized/";

pub fn resized_key(key: &str) -> String {
    format!("{RESIZED_PREFIX}{key}")
}

pub async fn fetch_object(
    s3_client: &S3Client,
    bucket: &str,
    key: &str,
) -> Result<Vec<u8>, ResizeError> {
    let fetch_error = |message: String| ResizeError::Fetch {
        bucket: bucket.to_string(),
        key: key.to_string(),
        message,
    };

    let output = s3_client
        .get_object()
        .bucket(bucket)
        .key(key)
        .send()
        .await
        .map_err(|err| fetch_error(err.into_service_error().to_string()))?;

    let body = output
        .body
        .collect()
        .await
        .map_err(|err| fetch_error(err.to_string()))?;
    Ok(body.into_bytes().to_vec())
}

pub async fn put_resized_object(
    s3_client: &S3Client,
    bucket: &str,
    key: &str,
    data: Vec<u8>,
    image_type: ImageType,
) -> Result<(), ResizeError> {
    let content_length = data.len();
    tracing::info!("Writing to: {}/{}", bucket, key);
    s3_client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(image_type.mime())
        .metadata("Content-Length", content_length.to_string())
        .metadata("Content-Type", image_type.mime())
        .body(ByteStream::from(data))
        .send()
        .await
        .map_err(|err| ResizeError::Store {
            bucket: bucket.to_string(),
            key: key.to_string(),
            message: err.into_service_error().to_string(),
        })?;
    Ok(())
}
