//! Skill gap analyzer: match skills against job-role catalogs

use clap::Parser;
use log::{error, info};
use skillgap::catalog::{ResourceCatalog, RoleCatalog};
use skillgap::classify::RoleModel;
use skillgap::cli::{self, CatalogAction, Cli, Commands, ConfigAction};
use skillgap::config::Config;
use skillgap::error::{Result, SkillGapError};
use skillgap::extract::SkillExtractor;
use skillgap::input::InputManager;
use skillgap::matching::{parse_skill_list, rank_roles, RankedMatch, Scorer, ScorerKind};
use skillgap::output::{format_report, AnalysisReport};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Some(roles) = &cli.roles {
        config.catalogs.roles_path = roles.clone();
    }
    if let Some(resources) = &cli.resources {
        config.catalogs.resources_path = resources.clone();
    }

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            skills,
            role,
            scorer,
            output,
            save,
        } => {
            let candidate = parse_skill_list(&skills);
            if candidate.is_empty() {
                return Err(SkillGapError::InvalidInput(
                    "No skills given. Enter a comma-separated skill list.".to_string(),
                ));
            }

            let roles = RoleCatalog::load(&config.catalogs.roles_path)?;
            let resources = ResourceCatalog::load(&config.catalogs.resources_path)?;
            let scorer = resolve_scorer(&config, scorer.as_deref())?;

            let role = roles
                .get(&role)
                .ok_or_else(|| SkillGapError::UnknownRole(role.clone()))?;

            info!("Analyzing {} skills against '{}'", candidate.len(), role.name);
            let result = scorer.score(&candidate, &role.skills);
            let ranked = vec![RankedMatch {
                role: role.name.clone(),
                result,
            }];

            let report = AnalysisReport::build(candidate, ranked, &resources, scorer.name());
            emit(&report, &config, output.as_deref(), save)
        }

        Commands::Rank {
            skills,
            scorer,
            output,
            save,
        } => {
            let candidate = parse_skill_list(&skills);
            if candidate.is_empty() {
                return Err(SkillGapError::InvalidInput(
                    "No skills given. Enter a comma-separated skill list.".to_string(),
                ));
            }

            let roles = RoleCatalog::load(&config.catalogs.roles_path)?;
            let resources = ResourceCatalog::load(&config.catalogs.resources_path)?;
            let scorer = resolve_scorer(&config, scorer.as_deref())?;

            let mut ranked = rank_roles(&candidate, roles.roles(), scorer.as_ref());
            ranked.truncate(config.scoring.top_roles);

            let report = AnalysisReport::build(candidate, ranked, &resources, scorer.name());
            emit(&report, &config, output.as_deref(), save)
        }

        Commands::Resume {
            file,
            scorer,
            output,
            save,
        } => {
            cli::validate_file_extension(&file, cli::RESUME_EXTENSIONS)
                .map_err(|e| SkillGapError::InvalidInput(format!("Resume file: {}", e)))?;

            let roles = RoleCatalog::load(&config.catalogs.roles_path)?;
            let resources = ResourceCatalog::load(&config.catalogs.resources_path)?;
            let scorer = resolve_scorer(&config, scorer.as_deref())?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&file).await?;
            info!("Extracted {} characters from {}", resume_text.len(), file.display());

            let extractor = SkillExtractor::new(&roles.vocabulary())?
                .with_fuzzy_threshold(config.scoring.fuzzy_threshold);
            let extracted = extractor.extract(&resume_text);

            if extracted.is_empty() {
                println!("⚠️  No known skills found in your resume.");
                return Ok(());
            }

            println!(
                "✅ Extracted skills: {}",
                extracted.iter().cloned().collect::<Vec<_>>().join(", ")
            );

            let suggestions = extractor.fuzzy_suggestions(&resume_text);
            let mut ranked = rank_roles(&extracted, roles.roles(), scorer.as_ref());
            ranked.truncate(config.scoring.top_roles);

            let report = AnalysisReport::build(extracted, ranked, &resources, scorer.name())
                .with_fuzzy_suggestions(suggestions);

            if let Some(top) = report.top_score() {
                println!("📊 Job readiness score: {:.1}%\n", top);
            }

            emit(&report, &config, output.as_deref(), save)
        }

        Commands::Train => {
            let roles = RoleCatalog::load(&config.catalogs.roles_path)?;
            let model = RoleModel::train_with_threshold(&roles, config.scoring.classifier_threshold)?;
            model.save(config.models_dir())?;

            println!(
                "✅ Trained role model: {} labels, {} vocabulary terms",
                model.labels().len(),
                model.vocabulary_size()
            );
            println!("📁 Artifacts saved to {}", config.models_dir().display());
            Ok(())
        }

        Commands::Predict { skills } => {
            let model = RoleModel::load(config.models_dir())?;
            let predictions = model.predict(&skills);

            if predictions.is_empty() {
                println!("No roles predicted for the given skills.");
            } else {
                println!("🎯 Predicted roles:");
                for prediction in predictions {
                    println!(
                        "  • {} ({:.1}% confidence)",
                        prediction.label,
                        prediction.confidence * 100.0
                    );
                }
            }
            Ok(())
        }

        Commands::Catalog { action } => {
            match action {
                CatalogAction::Roles => {
                    let roles = RoleCatalog::load(&config.catalogs.roles_path)?;
                    println!("📋 Roles ({})", roles.len());
                    for role in roles.roles() {
                        println!(
                            "  • {}: {}",
                            role.name,
                            role.skills.iter().cloned().collect::<Vec<_>>().join(", ")
                        );
                    }
                }
                CatalogAction::Resources => {
                    let resources = ResourceCatalog::load(&config.catalogs.resources_path)?;
                    println!("📘 Resources ({})", resources.len());
                    for resource in resources.iter_sorted() {
                        println!("  • {}: {} ({})", resource.skill, resource.course, resource.url);
                    }
                }
            }
            Ok(())
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Role catalog: {}", config.catalogs.roles_path.display());
                    println!(
                        "Resource catalog: {}",
                        config.catalogs.resources_path.display()
                    );
                    println!("Models directory: {}", config.models_dir().display());
                    println!("Scoring strategy: {:?}", config.scoring.strategy);
                    println!("Top roles shown: {}", config.scoring.top_roles);
                    println!("Fuzzy threshold: {:.2}", config.scoring.fuzzy_threshold);
                }
                Some(ConfigAction::Reset) => {
                    let default_config = Config::default();
                    default_config.save()?;
                    println!("✅ Configuration reset to defaults");
                }
            }
            Ok(())
        }
    }
}

fn resolve_scorer(config: &Config, requested: Option<&str>) -> Result<Box<dyn Scorer>> {
    let kind = match requested {
        Some(name) => ScorerKind::parse(name).ok_or_else(|| {
            SkillGapError::InvalidInput(format!(
                "Unknown scorer '{}'. Supported: set, tfidf",
                name
            ))
        })?,
        None => config.scoring.strategy,
    };
    Ok(kind.build())
}

fn emit(
    report: &AnalysisReport,
    config: &Config,
    requested_format: Option<&str>,
    save: Option<PathBuf>,
) -> Result<()> {
    let format = match requested_format {
        Some(name) => cli::parse_output_format(name).map_err(SkillGapError::InvalidInput)?,
        None => config.output.format.clone(),
    };

    match save {
        Some(path) => {
            // Saved output never carries terminal colors.
            let rendered = format_report(report, &format, false)?;
            std::fs::write(&path, rendered)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => {
            let rendered = format_report(report, &format, config.output.color)?;
            println!("{}", rendered);
        }
    }

    Ok(())
}
