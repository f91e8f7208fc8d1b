use std::fs;
use std::path::Path;

use clap::Parser;

use metrics_guard::cli::{CheckArgs, Cli, ColorChoice, Commands, InitArgs};
use metrics_guard::config::{Config, ConfigLoader, FileConfigLoader};
use metrics_guard::engine::{MetricsEngine, ScanSummary, Thresholds};
use metrics_guard::language::ProfileRegistry;
use metrics_guard::report::{ColorMode, JsonReporter, ReportFormat, Reporter, TextReporter};
use metrics_guard::scanner::{DirectoryScanner, ProfileFilter};
use metrics_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> metrics_guard::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);

    // 2. Build the language registry (built-ins + configured languages)
    let registry = ProfileRegistry::with_custom_languages(&config.languages)?;

    // 3. Build the file filter from profile extensions and exclude patterns
    let mut exclude_patterns = config.scanner.exclude.clone();
    exclude_patterns.extend(args.exclude.clone());
    let filter = ProfileFilter::new(registry.extensions(), &exclude_patterns)?;

    // 4. Scan and analyze
    let scanner = DirectoryScanner::with_gitignore(filter, config.scanner.gitignore);
    let engine = MetricsEngine::new(&registry, Thresholds::from(&config.thresholds));
    let summary = engine.scan(&scanner, &args.paths)?;

    // 5. Render and write the report
    let output = render_report(args.format, &summary, color_choice_to_mode(cli.color))?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 6. Exit code reflects compliance
    if summary.compliant() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VIOLATIONS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> metrics_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(max_file_lines) = args.max_file_lines {
        config.thresholds.max_file_lines = max_file_lines;
    }

    if let Some(max_function_lines) = args.max_function_lines {
        config.thresholds.max_function_lines = max_function_lines;
    }

    if let Some(top_n) = args.top {
        config.thresholds.top_n = top_n;
    }

    if args.no_gitignore {
        config.scanner.gitignore = false;
    }
}

fn render_report(
    format: ReportFormat,
    summary: &ScanSummary,
    color_mode: ColorMode,
) -> metrics_guard::Result<String> {
    match format {
        ReportFormat::Text => TextReporter::new(color_mode).render(summary),
        ReportFormat::Json => JsonReporter.render(summary),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> metrics_guard::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_init_impl(args: &InitArgs) -> metrics_guard::Result<()> {
    if args.output.exists() && !args.force {
        return Err(metrics_guard::MetricsGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            args.output.display()
        )));
    }

    fs::write(&args.output, FileConfigLoader::template())?;
    println!("Created {}", args.output.display());
    Ok(())
}
