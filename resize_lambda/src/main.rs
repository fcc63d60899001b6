use lambda_runtime::{run, service_fn, tracing, Error};
use resize_lambda::client_factory::{build_s3_client, prewarm, Settings};
use resize_lambda::event_handler::{function_handler, HandlerState};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::subscriber::fmt().json().init();
    let settings = Settings::from_env()?;
    let s3_client = build_s3_client(&settings).await;
    if settings.prewarm {
        prewarm(&s3_client).await?;
    }
    let state = HandlerState {
        s3_client,
        region: settings.region,
    };
    run(service_fn(|event| function_handler(event, &state))).await
}
