use crate::infra::{load_catalog, InMemorySessionRepository, LoggingSubmissionSink};
use caddie_ai::error::AppError;
use caddie_ai::workflows::diagnosis::DiagnosisService;
use caddie_ai::workflows::recommendation::{Bundle, MatchingEngine};
use clap::Args;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Load the bundle catalog from a CSV export instead of the seed data
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
    /// Include the per-factor breakdown under each recommendation
    #[arg(long)]
    pub(crate) show_factors: bool,
}

const DEMO_WALK: [&str; 7] = [
    "Under 6 months",
    "100-109",
    "Direction",
    "None",
    "Driver",
    "Lower my scores",
    "¥50,000-¥100,000",
];

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog_csv.as_deref())?;
    let bundles_by_id: HashMap<String, Bundle> = catalog
        .bundles()
        .iter()
        .map(|bundle| (bundle.id.0.clone(), bundle.clone()))
        .collect();

    let service = DiagnosisService::new(
        Arc::new(InMemorySessionRepository::default()),
        Arc::new(LoggingSubmissionSink),
        MatchingEngine::default(),
        Arc::new(catalog),
    );

    println!("Fitting diagnosis demo");

    let mut state = service.start_session()?;
    let session_id = state.session_id.clone();

    for option in DEMO_WALK {
        let question = state
            .current_question
            .as_ref()
            .map(|question| question.prompt)
            .unwrap_or("(complete)");
        println!("- {question}");
        println!("  > {option}");

        state = service.submit_answer(&session_id, option)?;
    }

    let ranking = service.ranking(&session_id)?;

    println!(
        "\nProfile: {} tier, concern {}, budget {}",
        ranking.profile.skill_tier.label(),
        ranking
            .profile
            .primary_concern
            .map(|concern| concern.label())
            .unwrap_or("none"),
        ranking.profile.budget.label()
    );

    println!("\nRecommended club sets");
    for result in &ranking.results {
        let (name, price) = bundles_by_id
            .get(&result.bundle_id.0)
            .map(|bundle| (bundle.display_name.as_str(), bundle.base_price))
            .unwrap_or(("(unknown set)", 0));

        println!(
            "{:>2}. {} - match {}% - ¥{}",
            result.rank, name, result.score, price
        );
        println!("    {}", result.rationale);

        if args.show_factors {
            for factor in &result.factors {
                println!(
                    "    {:<13} fit {:.2} x weight {:.2} = {:.3}",
                    factor.factor.label(),
                    factor.fit,
                    factor.weight,
                    factor.fit * factor.weight
                );
            }
        }
    }

    Ok(())
}
