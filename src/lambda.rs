use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tracing::Instrument;
use weather_proxy::utils::logger;
use weather_proxy::{
    check_settings, InvocationEvent, ProxyService, ProxySettings, ReqwestUpstream,
    ResponseEnvelope,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時建立一次，之後每次調用共用
    let settings = ProxySettings::from_env();
    if let Some(warning) = check_settings(&settings)? {
        tracing::warn!("{}", warning);
    }

    let service = ProxyService::new(settings, ReqwestUpstream::new()?);
    let service = &service;

    run(service_fn(|event: LambdaEvent<InvocationEvent>| async move {
        let span = logger::invocation_span(&event.context.request_id);
        Ok::<ResponseEnvelope, Error>(service.handle(event.payload).instrument(span).await)
    }))
    .await
}
