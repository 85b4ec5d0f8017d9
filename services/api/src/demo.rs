use crate::infra::{
    InMemoryCandidateRepository, InMemoryFeedSource, InMemoryJobRepository,
    LoggingNotificationDispatcher, Seed,
};
use career_hub::config::AppConfig;
use career_hub::error::AppError;
use career_hub::telemetry;
use career_hub::workflows::feed::feed_page;
use career_hub::workflows::jobs::{CompanyId, DeliveryStatus, JobDraft, JobPostingService};
use career_hub::workflows::pagination::SearchState;
use career_hub::workflows::talent::{
    CandidateSummaryView, ExperienceBucket, FilterCriteria, JobType, Selection,
    TalentSearchPage, TalentSearchRequest, TalentSearchService,
};
use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
    /// Student roster: a JSON array, or an object wrapping one (e.g. `{"students": [...]}`)
    #[arg(long)]
    pub(crate) roster: PathBuf,
    /// Free text matched against name, education, university and skills
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Student or Alumni
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Experience range label, e.g. "3-5 years"
    #[arg(long)]
    pub(crate) experience: Option<String>,
    #[arg(long)]
    pub(crate) specialization: Option<String>,
    /// Education level label, e.g. "Bachelor's"
    #[arg(long)]
    pub(crate) education_level: Option<String>,
    /// Internship, Full-time, Part-time or Contract
    #[arg(long)]
    pub(crate) job_type: Option<String>,
    #[arg(long)]
    pub(crate) page: Option<usize>,
    /// Defaults to APP_PAGE_SIZE
    #[arg(long)]
    pub(crate) page_size: Option<usize>,
    /// Reference date for experience durations (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the page as JSON instead of a listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for the sample data (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Skip the job posting and notification portion of the demo
    #[arg(long)]
    pub(crate) skip_posting: bool,
}

pub(crate) fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let SearchArgs {
        roster,
        search,
        status,
        experience,
        specialization,
        education_level,
        job_type,
        page,
        page_size,
        today,
        json,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let seed = Seed::from_path(&roster)?;
    let repository = Arc::new(InMemoryCandidateRepository::with_candidates(seed.students));
    let service = TalentSearchService::new(repository, config.listing.page_size);

    let request = TalentSearchRequest {
        criteria: FilterCriteria {
            search_text: search.unwrap_or_default(),
            status: Selection::from(status),
            experience: Selection::from(experience),
            specialization: Selection::from(specialization),
            education_level: Selection::from(education_level),
            job_type: Selection::from(job_type),
        },
        page,
        page_size,
    };
    let result = service.search(&request, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_talent_page(&result);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let seed = Seed::sample(today);
    let candidates = Arc::new(InMemoryCandidateRepository::with_candidates(seed.students));
    let talent = TalentSearchService::new(candidates.clone(), 2);

    println!("Career hub demo ({today})");
    println!("\nStudent roster");
    for profile in talent.roster(today) {
        println!(
            "- {} | {} | {} ({} months) | {}",
            profile.name(),
            profile.education_level(),
            profile.experience_bucket(),
            profile.experience_months(),
            profile.job_type().map(JobType::label).unwrap_or("no preference")
        );
    }

    println!("\nExperience ranges");
    for bucket in ExperienceBucket::ALL {
        let request = TalentSearchRequest {
            criteria: FilterCriteria {
                experience: Selection::only(bucket.label()),
                ..FilterCriteria::default()
            },
            ..TalentSearchRequest::default()
        };
        let result = talent.search(&request, today);
        println!("- {}: {} student(s)", bucket, result.page.total_items);
    }

    println!("\nBrowsing 'Harbour University' two at a time");
    let mut state = SearchState::new(FilterCriteria {
        search_text: "Harbour University".to_string(),
        ..FilterCriteria::default()
    });
    loop {
        let request = TalentSearchRequest {
            criteria: state.criteria().clone(),
            page: Some(state.page()),
            page_size: None,
        };
        let result = talent.search(&request, today);
        render_talent_page(&result);
        if !result.page.has_next() {
            break;
        }
        state = state.next_page(result.page.total_pages);
    }

    let feed = InMemoryFeedSource::new(seed.news, seed.videos);
    let latest = feed_page(&feed.items(), "", config.listing.page_size, 1);
    println!("\nLatest news and videos");
    for item in &latest.items {
        println!("- {}", item.title());
    }

    if args.skip_posting {
        return Ok(());
    }

    println!("\nPosting a new job");
    let jobs = Arc::new(InMemoryJobRepository::new(seed.companies, seed.jobs));
    let dispatcher = Arc::new(LoggingNotificationDispatcher::default());
    let postings = JobPostingService::new(
        jobs,
        candidates,
        dispatcher.clone(),
        config.listing.page_size,
    )
    .with_notifications(config.notifications.enabled);

    let draft = JobDraft {
        title: "Junior Data Analyst".to_string(),
        description: "Build reporting for the customer insights team.".to_string(),
        location: "Auckland".to_string(),
        office_type: Some("Hybrid".to_string()),
        salary_range: Some("$65k-$72k".to_string()),
        job_type: Some(JobType::FullTime),
        qualifications: Some("Degree in a quantitative field".to_string()),
        skills: vec!["SQL".to_string(), "Python".to_string()],
        benefits: None,
        company_id: CompanyId("co-002".to_string()),
    };

    let created = match postings.create_job(draft, today) {
        Ok(created) => created,
        Err(err) => {
            println!("  Posting rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Created {} '{}' (response returned before notification completes)",
        created.job.id, created.job.title
    );

    match created.notification.wait() {
        DeliveryStatus::Delivered { recipients } => {
            println!("- Notification delivered to {recipients} student(s)");
        }
        DeliveryStatus::Skipped { reason } => println!("- Notification skipped: {reason}"),
        DeliveryStatus::Failed { reason } => {
            println!("- Notification failed ({reason}); the job remains published")
        }
    }
    for payload in dispatcher.sent() {
        for recipient in &payload.recipients {
            println!(
                "  - {} <{}> | {} | {}",
                recipient.name, recipient.email, recipient.education_level, recipient.experience_range
            );
        }
    }

    Ok(())
}

fn render_talent_page(result: &TalentSearchPage) {
    let page = &result.page;
    println!(
        "Page {} of {} | {} match(es) from {} student(s)",
        page.page_number, page.total_pages, page.total_items, result.roster_size
    );
    for view in &page.items {
        render_candidate(view);
    }
}

fn render_candidate(view: &CandidateSummaryView) {
    println!(
        "  - {} ({}) | {} | {} | {}",
        view.name,
        view.id,
        view.education_level,
        view.experience_range,
        view.university.as_deref().unwrap_or("no university listed")
    );
}
