use anyhow::Context;
use chrono::Utc;
use clap::{Arg, ArgAction, Command};
use disha_app::Dashboard;
use disha_intake::{BudgetTier, ProjectConfig, RequirementsForm, ZoneRequirement};
use disha_model::{CabinetId, OptionStatus, ZoneId};
use disha_state::Action;
use disha_view::ViewModel;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Command::new("disha")
        .version("0.1.0")
        .about("DISHA project dashboard")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("overview")
                .about("Render the project overview")
                .arg(
                    Arg::new("option")
                        .long("option")
                        .help("Design option to select first (e.g. option-a)"),
                )
                .arg(
                    Arg::new("status")
                        .long("status")
                        .help("Filter the option grid by status (Preferred, Under Review, Alternative)"),
                ),
        )
        .subcommand(
            Command::new("zone")
                .about("Render a zone of the selected design option")
                .arg(Arg::new("id").required(true).help("Zone id (e.g. zone-a)")),
        )
        .subcommand(
            Command::new("cabinet")
                .about("Render a cabinet's manufacturing detail")
                .arg(Arg::new("zone").required(true).help("Zone id the cabinet belongs to"))
                .arg(Arg::new("id").required(true).help("Cabinet id (e.g. BC-001)")),
        )
        .subcommand(
            Command::new("export")
                .about("Write a cabinet's manufacturing package to disk")
                .arg(Arg::new("id").required(true).help("Cabinet id (e.g. BC-001)"))
                .arg(
                    Arg::new("dir")
                        .long("dir")
                        .default_value(".")
                        .help("Directory to write the CSV/JSON files into"),
                ),
        )
        .subcommand(
            Command::new("progress")
                .about("Print the workflow progress report")
                .arg(
                    Arg::new("project")
                        .long("project")
                        .help("Project-config JSON to load before reporting (pre-marks satisfied steps)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output the full report as JSON"),
                ),
        )
        .subcommand(
            Command::new("requirements")
                .about("Generate a project config from captured requirements")
                .arg(Arg::new("name").long("name").required(true).help("Client name"))
                .arg(Arg::new("email").long("email").required(true).help("Client email"))
                .arg(
                    Arg::new("area")
                        .long("area")
                        .required(true)
                        .value_parser(clap::value_parser!(u32))
                        .help("Kitchen area in square feet"),
                )
                .arg(
                    Arg::new("budget")
                        .long("budget")
                        .required(true)
                        .value_parser(clap::value_parser!(u64))
                        .help("Maximum budget in rupees"),
                )
                .arg(
                    Arg::new("tier")
                        .long("tier")
                        .default_value("mid")
                        .help("Budget tier: budget, mid or premium"),
                ),
        )
        .subcommand(Command::new("validate").about("Load and validate the fixture set"));

    let matches = cli.get_matches();

    let mut dashboard = Dashboard::open().context("fixture validation failed")?;

    match matches.subcommand() {
        Some(("overview", args)) => {
            if let Some(option) = args.get_one::<String>("option") {
                dashboard.dispatch(Action::SelectOption(option.as_str().into()))?;
            }
            let status = args.get_one::<String>("status").and_then(|s| parse_status(s));
            print_overview(&dashboard, status);
        }
        Some(("zone", args)) => {
            let id = args.get_one::<String>("id").expect("required arg");
            dashboard.dispatch(Action::SelectZone(ZoneId::new(id.as_str())))?;
            print_view(&dashboard);
        }
        Some(("cabinet", args)) => {
            let zone = args.get_one::<String>("zone").expect("required arg");
            let id = args.get_one::<String>("id").expect("required arg");
            dashboard.dispatch(Action::SelectZone(ZoneId::new(zone.as_str())))?;
            dashboard.dispatch(Action::SelectCabinet(CabinetId::new(id.as_str())))?;
            print_view(&dashboard);
        }
        Some(("export", args)) => {
            let id = CabinetId::new(args.get_one::<String>("id").expect("required arg").as_str());
            let dir = std::path::PathBuf::from(args.get_one::<String>("dir").expect("defaulted arg"));
            let export = dashboard
                .export_cabinet(&id)
                .with_context(|| format!("no manufacturing record for {id} in the selected option"))?;
            let json = export.package.to_json().context("package serialization failed")?;

            for (name, content) in [
                (format!("{id}-parts.csv"), export.parts_csv.as_str()),
                (format!("{id}-hardware.csv"), export.hardware_csv.as_str()),
                (format!("{id}-package.json"), json.as_str()),
            ] {
                let path = dir.join(name);
                std::fs::write(&path, content)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("wrote {}", path.display());
            }
        }
        Some(("progress", args)) => {
            let mut project_id = None;
            if let Some(path) = args.get_one::<String>("project") {
                let blob = std::fs::read_to_string(path)
                    .with_context(|| format!("reading project config {path}"))?;
                project_id = serde_json::from_str::<serde_json::Value>(&blob)
                    .ok()
                    .and_then(|v| v.get("projectId")?.as_str().map(str::to_string));
                dashboard.dispatch(Action::LoadExternalProject(blob))?;
            }
            let client = dashboard.store().project.client.clone();
            let report = dashboard.progress_report(project_id.as_deref(), Some(&client));
            if args.get_flag("json") {
                println!("{}", report.to_json().context("report serialization failed")?);
            } else {
                println!("Design Workflow Progress");
                println!("========================");
                println!();
                for phase in &report.checklist.phases {
                    println!(
                        "{:<16} {:>3}%  ({}/{} items)",
                        phase.name,
                        phase.progress,
                        phase.completed_count(),
                        phase.item_count()
                    );
                }
                println!();
                println!("Overall: {}%", report.overall_progress);
            }
        }
        Some(("requirements", args)) => {
            let mut form = RequirementsForm::default();
            form.client_info.name = args.get_one::<String>("name").expect("required arg").clone();
            form.client_info.email = args.get_one::<String>("email").expect("required arg").clone();
            form.space_info.total_area = *args.get_one::<u32>("area").expect("required arg");
            form.budget.max_budget = *args.get_one::<u64>("budget").expect("required arg");
            form.budget.range = match args.get_one::<String>("tier").expect("defaulted arg").as_str() {
                "budget" => BudgetTier::Budget,
                "premium" => BudgetTier::Premium,
                _ => BudgetTier::Mid,
            };
            for key in ["cooking", "prep", "storage", "cleaning"] {
                form.zones.insert(
                    key.to_string(),
                    ZoneRequirement {
                        required: true,
                        priority: "high".to_string(),
                    },
                );
            }

            match ProjectConfig::generate(&form, Utc::now()) {
                Ok(config) => println!("{}", serde_json::to_string_pretty(&config)?),
                Err(issues) => {
                    eprintln!("Please fix the following:");
                    for issue in issues {
                        eprintln!("  • {issue}");
                    }
                    std::process::exit(1);
                }
            }
        }
        Some(("validate", _)) => {
            // Dashboard::open above already validated; report the shape.
            let store = dashboard.store();
            let catalog = store.catalog_summary();
            println!("fixtures OK");
            println!("  options:    {}", store.option_count());
            println!("  milestones: {}", store.timeline.len());
            println!("  documents:  {}", store.documents.len());
            println!(
                "  products:   {} ({} selected, ₹{} total)",
                catalog.total_products, catalog.selected, catalog.total_value
            );
        }
        _ => {}
    }

    Ok(())
}

fn parse_status(label: &str) -> Option<OptionStatus> {
    match label {
        "Preferred" => Some(OptionStatus::Preferred),
        "Under Review" => Some(OptionStatus::UnderReview),
        "Alternative" => Some(OptionStatus::Alternative),
        _ => None,
    }
}

fn print_overview(dashboard: &Dashboard, status: Option<OptionStatus>) {
    let ViewModel::Overview(view) = dashboard.view() else {
        return;
    };
    println!("{} — {}", view.project_name, view.client);
    println!("{}", view.layout_summary);
    println!(
        "Investment: {}  (budget {:.1}% utilized)",
        view.total_investment, view.budget_utilization
    );
    println!();
    for card in view.filtered(status) {
        let marker = if card.selected { "▶" } else { " " };
        println!(
            "{marker} {:<22} {:<12} {}",
            card.name,
            card.status.to_string(),
            card.estimated_cost
        );
    }
    println!();
    println!("Zones ({} cabinets total):", view.total_cabinets);
    for zone in &view.zone_map {
        println!(
            "  {:<28} {:>2} cabinets  {:>8}  {}",
            zone.name, zone.cabinet_count, zone.total, zone.footprint
        );
    }
}

fn print_view(dashboard: &Dashboard) {
    let trail: Vec<String> = dashboard.breadcrumb().into_iter().map(|c| c.label).collect();
    println!("{}", trail.join(" › "));
    println!();
    match dashboard.view() {
        ViewModel::Overview(_) => {}
        ViewModel::Zone(zone) => {
            println!("{} — {}", zone.name, zone.description);
            println!("{}  @ {}", zone.dimensions, zone.location);
            println!("Budget: {}", zone.total);
            for (category, amount) in &zone.boq {
                println!("  {category:<12} {amount}");
            }
            println!();
            println!("Cabinets:");
            for cabinet in &zone.cabinets {
                println!(
                    "  {:<8} {:<5} {:<18} {}",
                    cabinet.id.to_string(),
                    cabinet.kind.label(),
                    cabinet.name.as_deref().unwrap_or("-"),
                    cabinet.dimensions.as_deref().unwrap_or("-")
                );
            }
        }
        ViewModel::Cabinet(cabinet) => {
            let Some(record) = &cabinet.record else {
                println!("{} — no manufacturing record", cabinet.id);
                return;
            };
            println!("{} — {} ({})", record.id, record.name, cabinet.kind.label());
            println!(
                "Carcass: {}×{}×{}mm, {} parts",
                record.dimensions.width,
                record.dimensions.depth,
                record.dimensions.height,
                record.part_count()
            );
            println!();
            println!("Parts:");
            for part in &record.components {
                println!(
                    "  {:<12} {:<18} {:<14} x{}",
                    part.id,
                    part.name,
                    part.dimensions.to_string(),
                    part.quantity
                );
            }
            if !record.hafele_hardware.is_empty() {
                println!();
                println!("Hardware:");
                for item in &record.hafele_hardware {
                    println!("  {:<12} {:<24} x{}", item.article, item.name, item.quantity);
                }
            }
            if !record.assembly_steps.is_empty() {
                println!();
                println!("Assembly:");
                for (i, step) in record.assembly_steps.iter().enumerate() {
                    println!("  {}. {step}", i + 1);
                }
            }
        }
    }
}
