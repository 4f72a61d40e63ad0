use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use wirecheck::{
    Category, Project, RenderOpts, ResolvedDoc, RuleSet, RulesConfig, Scale, Viewport,
};

#[derive(Parser, Debug)]
#[command(name = "wirecheck", version, about = "Review Phase 1 wireframe documents")]
struct Cli {
    /// More logging on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Schema-validate a document, then run design rules.
    Validate(ValidateArgs),
    /// Render a document to PNG.
    Render(RenderArgs),
    /// Run all rules and print an aggregated report.
    Audit(AuditArgs),
    /// Suggest UI patterns.
    Suggest(SuggestArgs),
    /// Render two documents side by side.
    Compare(CompareArgs),
    /// List the versions of a project.
    Versions(ProjectArgs),
    /// Approve the latest version of a project.
    Approve(ApproveArgs),
    /// Create a project with a starter document.
    Onboard(OnboardArgs),
}

/// `<doc>` is a JSON file or `<project>@latest|approved|v<n>`.
#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Document path or project reference.
    doc: String,

    /// Rule to run; repeat for several. All rules when omitted.
    #[arg(long = "rule")]
    rules: Vec<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,

    /// JSON file with rule thresholds.
    #[arg(long = "rules")]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Document path or project reference.
    doc: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Parser, Debug)]
struct ViewArgs {
    /// Viewport preset: mobile, tablet or desktop.
    #[arg(long, default_value = "desktop")]
    viewport: String,

    /// Explicit viewport width, overrides the preset.
    #[arg(long)]
    width: Option<u32>,

    /// Explicit canvas height; derived from the layout when omitted.
    #[arg(long)]
    height: Option<u32>,

    /// Pixel scale, 1 to 3.
    #[arg(long, default_value_t = 1)]
    scale: u32,

    /// Label components with their IDs.
    #[arg(long)]
    annotate: bool,

    /// Draw the 8 px spacing grid.
    #[arg(long)]
    grid: bool,
}

impl ViewArgs {
    fn opts(&self) -> anyhow::Result<RenderOpts> {
        let mut opts = RenderOpts::for_viewport(Viewport::parse(&self.viewport)?)
            .with_scale(Scale::new(self.scale)?);
        if let Some(w) = self.width {
            opts.width = w;
        }
        opts.height = self.height.unwrap_or(0);
        opts.annotate = self.annotate;
        opts.grid_overlay = self.grid;
        Ok(opts)
    }
}

#[derive(Parser, Debug)]
struct AuditArgs {
    /// Document path or project reference.
    doc: String,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,

    /// JSON file with rule thresholds.
    #[arg(long = "rules")]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SuggestArgs {
    /// Document path or project reference.
    doc: String,

    /// Category to run; repeat for several. All categories when omitted.
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Parser, Debug)]
struct CompareArgs {
    /// Left document.
    left: String,

    /// Right document.
    right: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    view: ViewArgs,
}

#[derive(Parser, Debug)]
struct ProjectArgs {
    /// Project directory.
    project: PathBuf,
}

#[derive(Parser, Debug)]
struct ApproveArgs {
    /// Project directory.
    project: PathBuf,

    /// Approver name.
    #[arg(long, default_value = "unknown")]
    by: String,
}

#[derive(Parser, Debug)]
struct OnboardArgs {
    /// Project directory.
    project: PathBuf,

    /// What the screen is for.
    #[arg(long, default_value = "Describe what this screen is for")]
    purpose: String,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Render(args) => cmd_render(args),
        Command::Audit(args) => cmd_audit(args),
        Command::Suggest(args) => cmd_suggest(args),
        Command::Compare(args) => cmd_compare(args),
        Command::Versions(args) => cmd_versions(args),
        Command::Approve(args) => cmd_approve(args),
        Command::Onboard(args) => cmd_onboard(args),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load(reference: &str) -> anyhow::Result<ResolvedDoc> {
    wirecheck::load_doc_ref(reference).with_context(|| format!("load '{reference}'"))
}

fn load_valid(reference: &str) -> anyhow::Result<ResolvedDoc> {
    let r = load(reference)?;
    r.doc
        .validate()
        .with_context(|| format!("'{}' is not a valid Phase 1 structure", r.path.display()))?;
    Ok(r)
}

fn rules_config(path: Option<&PathBuf>) -> anyhow::Result<RulesConfig> {
    match path {
        Some(p) => RulesConfig::from_path(p)
            .with_context(|| format!("load rules config '{}'", p.display())),
        None => Ok(RulesConfig::default()),
    }
}

fn exit_code(passed: bool) -> ExitCode {
    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<ExitCode> {
    let resolved = load(&args.doc)?;
    if let Err(e) = resolved.doc.validate() {
        if args.json {
            let v = serde_json::json!({ "status": "failed", "error": e.to_string() });
            println!("{}", serde_json::to_string_pretty(&v)?);
        } else {
            println!("✗ schema\n    {e}");
        }
        return Ok(ExitCode::FAILURE);
    }

    let cfg = rules_config(args.config.as_ref())?;
    let set = if args.rules.is_empty() {
        RuleSet::from_config(&cfg)?
    } else {
        RuleSet::select(&cfg, &args.rules)?
    };

    if set.len() == 1 {
        let Some((name, result)) = set.run(&resolved.doc).into_iter().next() else {
            return Ok(ExitCode::SUCCESS);
        };
        if args.json {
            println!("{}", wirecheck::rule_json(&result)?);
        } else {
            print!("{}", wirecheck::rule_text(name, &result));
        }
        return Ok(exit_code(result.passed));
    }

    let mut report = wirecheck::run_audit(&resolved.doc, &set);
    report.version = resolved.version;
    if args.json {
        println!("{}", wirecheck::audit_json(&report)?);
    } else {
        print!("{}", wirecheck::audit_text(&report));
    }
    Ok(exit_code(report.passed))
}

fn cmd_audit(args: AuditArgs) -> anyhow::Result<ExitCode> {
    let resolved = load_valid(&args.doc)?;
    let mut cfg = rules_config(args.config.as_ref())?;
    cfg.enabled = None;
    let set = RuleSet::from_config(&cfg)?;
    let mut report = wirecheck::run_audit(&resolved.doc, &set);
    report.version = resolved.version;
    if args.json {
        println!("{}", wirecheck::audit_json(&report)?);
    } else {
        println!(
            "{} {} ({} components)\n",
            report.phase, report.version, report.components
        );
        print!("{}", wirecheck::audit_text(&report));
    }
    Ok(exit_code(report.passed))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<ExitCode> {
    let resolved = load_valid(&args.doc)?;
    let opts = args.view.opts()?;
    let frame = wirecheck::render_document(&resolved.doc, &opts)?;
    frame
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!(
        "wrote {} ({}x{})",
        args.out.display(),
        frame.width,
        frame.height
    );
    Ok(ExitCode::SUCCESS)
}

fn cmd_suggest(args: SuggestArgs) -> anyhow::Result<ExitCode> {
    let resolved = load(&args.doc)?;
    let categories = args
        .categories
        .iter()
        .map(|c| Category::parse(c))
        .collect::<Result<Vec<_>, _>>()?;
    let out = wirecheck::suggest(&resolved.doc, &categories);
    if args.json {
        println!("{}", wirecheck::suggestions_json(&out)?);
    } else {
        print!("{}", wirecheck::suggestions_text(&out));
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_compare(args: CompareArgs) -> anyhow::Result<ExitCode> {
    let left = load_valid(&args.left)?;
    let right = load_valid(&args.right)?;
    let opts = args.view.opts()?;
    let a = wirecheck::render_document(&left.doc, &opts)?;
    let b = wirecheck::render_document(&right.doc, &opts)?;
    let frame = wirecheck::compose_side_by_side(
        &a,
        &b,
        Some((left.version.as_str(), right.version.as_str())),
    )?;
    frame
        .save_png(&args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;
    eprintln!("wrote {}", args.out.display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_versions(args: ProjectArgs) -> anyhow::Result<ExitCode> {
    let project = Project::open(&args.project);
    let versions = project
        .versions()
        .with_context(|| format!("list versions of '{}'", args.project.display()))?;
    let latest = versions.last().map(|v| v.number);
    for v in &versions {
        let mark = if Some(v.number) == latest { " (latest)" } else { "" };
        println!("v{}{mark}\t{}", v.number, v.path.display());
    }
    if project.has_approved() {
        let approved = project.load(wirecheck::Selector::Approved)?;
        println!("approved ({})\t{}", approved.version, approved.path.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_approve(args: ApproveArgs) -> anyhow::Result<ExitCode> {
    let project = Project::open(&args.project);
    let out = project
        .approve(&args.by, chrono::Utc::now())
        .with_context(|| format!("approve '{}'", args.project.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(ExitCode::SUCCESS)
}

fn cmd_onboard(args: OnboardArgs) -> anyhow::Result<ExitCode> {
    let project = Project::open(&args.project);
    let out = project
        .onboard(&args.purpose, chrono::Utc::now())
        .with_context(|| format!("onboard '{}'", args.project.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(ExitCode::SUCCESS)
}
