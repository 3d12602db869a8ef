use std::process::ExitCode;

use dioxus_logger::tracing;
use eden_names::{config::Config, startup, IdSpec, NameRequest};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let specs = match std::env::args()
        .skip(1)
        .map(|arg| arg.parse::<IdSpec>())
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(specs) if !specs.is_empty() => specs,
        Ok(_) => {
            eprintln!("Usage: eden-names <category:id>... (e.g. type:587 esi:95465499)");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let resolver = match startup::build_name_resolver(&config) {
        Ok(resolver) => resolver,
        Err(e) => {
            eprintln!("Failed to build portal client: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let request = specs
        .iter()
        .fold(NameRequest::new(), |request, spec| request.with_spec(*spec));

    tracing::info!(
        portal = %config.portal_url,
        id_count = specs.len(),
        "Resolving entity names"
    );

    let result = resolver.try_resolve(&request).await;

    for spec in &specs {
        println!("{}\t{}", spec.id(), resolver.get_name(Some(spec.id()), None));
    }

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Failed to resolve entity names");
            ExitCode::FAILURE
        }
    }
}
