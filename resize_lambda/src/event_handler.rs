use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{tracing, Error, LambdaEvent};
use percent_encoding::percent_decode_str;

use crate::error::ResizeError;
use crate::image_type::{infer_suffix, ImageType};
use crate::object_url::format_object_url;

pub struct HandlerState {
    pub s3_client: S3Client,
    pub region: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceObject {
    pub bucket: String,
    pub key: String,
}

fn has_malformed_escape(raw_key: &str) -> bool {
    let bytes = raw_key.as_bytes();
    bytes.iter().enumerate().any(|(i, &byte)| {
        byte == b'%'
            && !matches!(
                bytes.get(i + 1..i + 3),
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}

/// Event keys are form encoded: `+` is a space and the rest is percent-escaped.
fn decode_key(raw_key: &str) -> Result<String, ResizeError> {
    if has_malformed_escape(raw_key) {
        return Err(ResizeError::MalformedEscape {
            key: raw_key.to_string(),
        });
    }
    let plus_decoded = raw_key.replace('+', " ");
    percent_decode_str(&plus_decoded)
        .decode_utf8()
        .map(|key| key.into_owned())
        .map_err(|source| ResizeError::KeyDecode {
            key: raw_key.to_string(),
            source,
        })
}

fn source_object(record: &S3EventRecord) -> Result<SourceObject, ResizeError> {
    let bucket = record
        .s3
        .bucket
        .name
        .clone()
        .ok_or(ResizeError::MissingBucket)?;
    let raw_key = record
        .s3
        .object
        .key
        .as_deref()
        .ok_or(ResizeError::MissingKey)?;
    Ok(SourceObject {
        bucket,
        key: decode_key(raw_key)?,
    })
}

fn first_source_object(event: &S3Event) -> Result<SourceObject, ResizeError> {
    let record = event.records.first().ok_or(ResizeError::EmptyEvent)?;
    if event.records.len() > 1 {
        tracing::debug!("Ignoring {} additional records", event.records.len() - 1);
    }
    source_object(record)
}

/// Returns the object URL for a supported image upload, or an empty string
/// when the key is not a jpg/png image.
pub async fn function_handler(
    event: LambdaEvent<S3Event>,
    state: &HandlerState,
) -> Result<String, Error> {
    let source = first_source_object(&event.payload)?;
    tracing::info!("Received {}/{}", source.bucket, source.key);

    let Some(suffix) = infer_suffix(&source.key) else {
        tracing::info!("Unable to infer image type for key {}", source.key);
        return Ok(String::new());
    };

    let Some(image_type) = ImageType::from_extension(suffix) else {
        tracing::info!("Skipping non-image {}", source.key);
        return Ok(String::new());
    };

    tracing::info!("Accepted {} image {}", image_type, source.key);
    Ok(format_object_url(&source.bucket, &source.key, &state.region))
}
