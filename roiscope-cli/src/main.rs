use std::collections::BTreeSet;
use std::env;
use std::process;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;

use roiscope_engine::{
    estimate, format_dollars, Assumptions, Estimate, EstimateInputs, PainPoint,
};
use roiscope_intake::{LeadContact, LeadRequest, SubmissionTracker, WebhookClient};
use roiscope_pipeline::digest::DigestPipeline;
use roiscope_pipeline::pipelines::estimate_digest::EstimateDigestPipeline;
use roiscope_pipeline::scenario_loader::load_scenarios_file;
use roiscope_pipeline::types::{EstimateQuery, SavingsLine};

// ---------------------------------------------------------------------------
// JSON output contract
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct EstimateJson {
    generated_at: String,
    request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scenario_id: Option<String>,
    inputs: InputsJson,
    pain_multiplier: f64,
    lines: Vec<LineJson>,
    raw_annual_savings: f64,
    annual_savings: f64,
    investment: f64,
    roi_percent: f64,
    payback_months: f64,
}

#[derive(Serialize)]
struct InputsJson {
    daily_orders: u32,
    warehouse_staff: u32,
    order_time_minutes: u32,
    monthly_revenue: f64,
    pain_points: Vec<String>,
}

#[derive(Serialize)]
struct LineJson {
    category: String,
    raw_amount: f64,
    adjusted_amount: f64,
}

fn build_estimate_json(
    scenario_id: Option<String>,
    request_id: &str,
    inputs: &EstimateInputs,
    est: &Estimate,
    lines: &[SavingsLine],
) -> EstimateJson {
    EstimateJson {
        generated_at: Utc::now().to_rfc3339(),
        request_id: request_id.to_string(),
        scenario_id,
        inputs: InputsJson {
            daily_orders: inputs.daily_orders,
            warehouse_staff: inputs.warehouse_staff,
            order_time_minutes: inputs.order_time_minutes,
            monthly_revenue: inputs.monthly_revenue,
            pain_points: inputs
                .pain_points
                .iter()
                .map(|p| p.slug().to_string())
                .collect(),
        },
        pain_multiplier: est.pain_multiplier,
        lines: lines
            .iter()
            .map(|line| LineJson {
                category: line.category.to_string(),
                raw_amount: line.raw_amount,
                adjusted_amount: line.final_amount(),
            })
            .collect(),
        raw_annual_savings: est.raw_annual_savings,
        annual_savings: est.annual_savings,
        investment: est.investment,
        roi_percent: est.roi_percent,
        payback_months: est.payback_months,
    }
}

// ---------------------------------------------------------------------------
// Human-readable output
// ---------------------------------------------------------------------------

fn print_human(inputs: &EstimateInputs, est: &Estimate, lines: &[SavingsLine], elapsed_ms: u128) {
    let border = "\u{2550}".repeat(58);
    println!();
    println!("  \u{2554}{}\u{2557}", border);
    println!("  \u{2551}       ROISCOPE \u{2014} Warehouse Operations ROI Estimate       \u{2551}");
    println!("  \u{255a}{}\u{255d}", border);
    println!();

    println!(
        "  {} orders/day  \u{00b7}  {} staff  \u{00b7}  {} min/order  \u{00b7}  {}/month",
        inputs.daily_orders,
        inputs.warehouse_staff,
        inputs.order_time_minutes,
        format_dollars(inputs.monthly_revenue)
    );
    if inputs.pain_points.is_empty() {
        println!("  Pain points: none selected");
    } else {
        let labels: Vec<&str> = inputs.pain_points.iter().map(|p| p.label()).collect();
        println!("  Pain points: {}", labels.join(", "));
    }
    println!();

    println!("  Annual savings by category:");
    for line in lines {
        println!(
            "    {:<26} {:>12}",
            line.category.to_string(),
            format_dollars(line.final_amount())
        );
    }
    println!();

    println!(
        "  Total annual savings: {}   (raw {} \u{00d7} {:.2})",
        format_dollars(est.annual_savings),
        format_dollars(est.raw_annual_savings),
        est.pain_multiplier
    );
    println!("  Estimated investment: {}", format_dollars(est.investment));
    println!("  First-year ROI:       {:.0}%", est.roi_percent);
    println!("  Payback period:       {:.1} months", est.payback_months);
    println!();
    println!("  computed in {}ms", elapsed_ms);
    println!();
}

fn print_batch_human(results: &[(String, Estimate)]) {
    println!();
    println!(
        "  {:<16} {:>16} {:>12} {:>10} {:>10}",
        "scenario", "annual savings", "investment", "ROI", "payback"
    );
    for (scenario_id, est) in results {
        println!(
            "  {:<16} {:>16} {:>12} {:>9.0}% {:>8.1}mo",
            scenario_id,
            format_dollars(est.annual_savings),
            format_dollars(est.investment),
            est.roi_percent,
            est.payback_months
        );
    }
    println!();
}

// ---------------------------------------------------------------------------
// Argument parsing
// ---------------------------------------------------------------------------

struct CliOptions {
    daily_orders: u32,
    warehouse_staff: u32,
    order_time_minutes: u32,
    monthly_revenue: f64,
    pain_points: BTreeSet<PainPoint>,
    assumptions_path: Option<String>,
    batch_path: Option<String>,
    json_output: bool,
    submit: Option<SubmitOptions>,
}

struct SubmitOptions {
    webhook: String,
    name: String,
    email: String,
    company: Option<String>,
    help_type: Option<String>,
    source_page: String,
}

fn usage() -> ! {
    eprintln!("Usage: roiscope [OPTIONS]");
    eprintln!();
    eprintln!("Estimate options:");
    eprintln!("  --orders N           Daily order volume (default: 50)");
    eprintln!("  --staff N            Warehouse staff count (default: 8)");
    eprintln!("  --order-time MIN     Per-order processing minutes (default: 12)");
    eprintln!("  --revenue DOLLARS    Monthly revenue (default: 500000)");
    eprintln!("  --pain-points LIST   Comma-separated pain-point slugs");
    eprintln!("  --assumptions FILE   JSON file overriding business assumptions");
    eprintln!("  --batch FILE         Evaluate a CSV of scenarios instead");
    eprintln!("  --json               Output JSON instead of formatted text");
    eprintln!();
    eprintln!("Lead submission (single-estimate mode only):");
    eprintln!("  --submit             Submit the estimate report as a lead");
    eprintln!("  --webhook URL        CRM webhook endpoint (required with --submit)");
    eprintln!("  --name NAME          Contact name (required with --submit)");
    eprintln!("  --email EMAIL        Contact email (required with --submit)");
    eprintln!("  --company NAME       Contact company");
    eprintln!("  --help-type TYPE     What the prospect is asking for");
    eprintln!("  --source-page PATH   Page the lead came from (default: /roi-calculator)");
    eprintln!();
    eprintln!("Pain-point slugs:");
    for p in PainPoint::ALL {
        eprintln!("  {:<18} {}", p.slug(), p.label());
    }
    eprintln!();
    eprintln!("Example:");
    eprintln!("  roiscope --orders 120 --staff 15 --order-time 10 --revenue 1200000 \\");
    eprintln!("           --pain-points manual-orders,inventory-issues --json");
    process::exit(1);
}

fn parse_pain_points(raw: &str) -> Result<BTreeSet<PainPoint>, String> {
    let mut points = BTreeSet::new();
    for slug in raw.split(',') {
        let slug = slug.trim();
        if slug.is_empty() {
            continue;
        }
        match PainPoint::from_slug(slug) {
            Some(point) => {
                points.insert(point);
            }
            None => return Err(format!("unknown pain point '{}'", slug)),
        }
    }
    Ok(points)
}

fn parse_args(args: &[String]) -> CliOptions {
    let defaults = EstimateInputs::default();
    let mut options = CliOptions {
        daily_orders: defaults.daily_orders,
        warehouse_staff: defaults.warehouse_staff,
        order_time_minutes: defaults.order_time_minutes,
        monthly_revenue: defaults.monthly_revenue,
        pain_points: BTreeSet::new(),
        assumptions_path: None,
        batch_path: None,
        json_output: false,
        submit: None,
    };

    let mut webhook: Option<String> = None;
    let mut name: Option<String> = None;
    let mut email: Option<String> = None;
    let mut company: Option<String> = None;
    let mut help_type: Option<String> = None;
    let mut source_page = "/roi-calculator".to_string();
    let mut submit_requested = false;

    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = |i: &mut usize| -> String {
            if *i + 1 >= args.len() {
                eprintln!("Error: {} requires a value", flag);
                usage();
            }
            *i += 2;
            args[*i - 1].clone()
        };
        match flag {
            "--orders" => {
                options.daily_orders = value(&mut i).parse().unwrap_or_else(|_| {
                    eprintln!("Error: --orders requires a positive integer");
                    usage();
                })
            }
            "--staff" => {
                options.warehouse_staff = value(&mut i).parse().unwrap_or_else(|_| {
                    eprintln!("Error: --staff requires a positive integer");
                    usage();
                })
            }
            "--order-time" => {
                options.order_time_minutes = value(&mut i).parse().unwrap_or_else(|_| {
                    eprintln!("Error: --order-time requires a positive integer");
                    usage();
                })
            }
            "--revenue" => {
                options.monthly_revenue = value(&mut i).parse().unwrap_or_else(|_| {
                    eprintln!("Error: --revenue requires a number");
                    usage();
                })
            }
            "--pain-points" => {
                options.pain_points = parse_pain_points(&value(&mut i)).unwrap_or_else(|e| {
                    eprintln!("Error: {}", e);
                    usage();
                })
            }
            "--assumptions" => options.assumptions_path = Some(value(&mut i)),
            "--batch" => options.batch_path = Some(value(&mut i)),
            "--json" => {
                options.json_output = true;
                i += 1;
            }
            "--submit" => {
                submit_requested = true;
                i += 1;
            }
            "--webhook" => webhook = Some(value(&mut i)),
            "--name" => name = Some(value(&mut i)),
            "--email" => email = Some(value(&mut i)),
            "--company" => company = Some(value(&mut i)),
            "--help-type" => help_type = Some(value(&mut i)),
            "--source-page" => source_page = value(&mut i),
            "-h" | "--help" => usage(),
            other => {
                eprintln!("Unknown argument: {}", other);
                usage();
            }
        }
    }

    if submit_requested {
        if options.batch_path.is_some() {
            eprintln!("Error: --submit applies to a single estimate, not --batch");
            usage();
        }
        let (Some(webhook), Some(name), Some(email)) = (webhook, name, email) else {
            eprintln!("Error: --submit requires --webhook, --name, and --email");
            usage();
        };
        options.submit = Some(SubmitOptions {
            webhook,
            name,
            email,
            company,
            help_type,
            source_page,
        });
    }

    options
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    let assumptions = match &options.assumptions_path {
        Some(path) => match Assumptions::from_json_file(path) {
            Ok(a) => a,
            Err(e) => {
                eprintln!("Error loading assumptions: {}", e);
                process::exit(1);
            }
        },
        None => Assumptions::default(),
    };

    if let Some(batch_path) = &options.batch_path {
        run_batch(batch_path, &assumptions, options.json_output).await;
        return;
    }

    let inputs = EstimateInputs::clamped(
        options.daily_orders,
        options.warehouse_staff,
        options.order_time_minutes,
        options.monthly_revenue,
        options.pain_points.clone(),
    );

    let start = Instant::now();
    let pipeline = EstimateDigestPipeline::new();
    let mut query = EstimateQuery::new("cli-001", inputs.clone());
    query.assumptions = assumptions.clone();
    let result = pipeline.execute(query).await;
    let est = estimate(&inputs, &assumptions);
    let elapsed_ms = start.elapsed().as_millis();

    if options.json_output {
        let json = build_estimate_json(None, "cli-001", &inputs, &est, &result.selected_lines);
        println!("{}", serde_json::to_string_pretty(&json).unwrap());
    } else {
        print_human(&inputs, &est, &result.selected_lines, elapsed_ms);
    }

    if let Some(submit) = options.submit {
        submit_lead(submit, &inputs, &est).await;
    }
}

async fn run_batch(batch_path: &str, assumptions: &Assumptions, json_output: bool) {
    let scenarios = match load_scenarios_file(batch_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading scenarios: {}", e);
            process::exit(1);
        }
    };
    if scenarios.is_empty() {
        eprintln!("Error: no scenarios found in '{}'", batch_path);
        process::exit(1);
    }

    let pipeline = EstimateDigestPipeline::new();
    let mut results: Vec<(String, EstimateInputs, Estimate, Vec<SavingsLine>)> = Vec::new();
    for scenario in &scenarios {
        let inputs = scenario.to_inputs();
        let mut query = EstimateQuery::new(
            format!("batch-{}", scenario.scenario_id),
            inputs.clone(),
        );
        query.assumptions = assumptions.clone();
        let result = pipeline.execute(query).await;
        let est = estimate(&inputs, assumptions);
        results.push((
            scenario.scenario_id.clone(),
            inputs,
            est,
            result.selected_lines,
        ));
    }

    if json_output {
        let payload: Vec<EstimateJson> = results
            .iter()
            .map(|(scenario_id, inputs, est, lines)| {
                build_estimate_json(
                    Some(scenario_id.clone()),
                    &format!("batch-{}", scenario_id),
                    inputs,
                    est,
                    lines,
                )
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload).unwrap());
    } else {
        let summary: Vec<(String, Estimate)> = results
            .into_iter()
            .map(|(scenario_id, _, est, _)| (scenario_id, est))
            .collect();
        print_batch_human(&summary);
    }
}

async fn submit_lead(submit: SubmitOptions, inputs: &EstimateInputs, est: &Estimate) {
    let contact = LeadContact {
        name: submit.name,
        email: submit.email,
        company: submit.company,
        help_type: submit.help_type,
    };
    let lead = LeadRequest::from_estimate(contact, inputs, est, submit.source_page);

    let mut tracker = SubmissionTracker::new();
    if tracker.begin().is_err() {
        // A single CLI run can't race itself, but the guard stays.
        eprintln!("A submission is already in flight.");
        process::exit(1);
    }

    let client = WebhookClient::new(submit.webhook);
    match client.submit(&lead).await {
        Ok(_) => {
            tracker.finish(true);
            println!("  Report sent. We'll be in touch.");
        }
        Err(e) => {
            tracker.finish(false);
            log::error!("lead submission failed: {}", e);
            eprintln!("Something went wrong. Try again.");
            process::exit(1);
        }
    }
}
