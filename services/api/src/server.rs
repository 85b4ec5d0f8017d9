use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryCandidateRepository, InMemoryFeedSource, InMemoryJobRepository,
    LoggingNotificationDispatcher, Seed,
};
use crate::routes::with_career_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use career_hub::config::AppConfig;
use career_hub::error::AppError;
use career_hub::telemetry;
use career_hub::workflows::dashboard::DashboardLoader;
use career_hub::workflows::jobs::JobPostingService;
use career_hub::workflows::talent::TalentSearchService;
use chrono::Local;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let seed = match args.seed.take() {
        Some(path) => Seed::from_path(&path)?,
        None => Seed::sample(Local::now().date_naive()),
    };
    info!(
        students = seed.students.len(),
        companies = seed.companies.len(),
        jobs = seed.jobs.len(),
        "seed data loaded"
    );

    let candidates = Arc::new(InMemoryCandidateRepository::with_candidates(seed.students));
    let jobs = Arc::new(InMemoryJobRepository::new(seed.companies, seed.jobs));
    let feed = Arc::new(InMemoryFeedSource::new(seed.news, seed.videos));
    let dispatcher = Arc::new(LoggingNotificationDispatcher::default());
    let page_size = config.listing.page_size;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
        dashboard: Arc::new(DashboardLoader::new(
            candidates.clone(),
            jobs.clone(),
            feed.clone(),
        )),
        feed,
        page_size,
    };

    let talent_service = Arc::new(TalentSearchService::new(candidates.clone(), page_size));
    let job_service = Arc::new(
        JobPostingService::new(jobs, candidates, dispatcher, page_size)
            .with_notifications(config.notifications.enabled),
    );

    let app = with_career_routes(talent_service, job_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        notifications = config.notifications.enabled,
        "career hub api ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
