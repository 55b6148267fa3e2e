use clap::Parser;
use travel_catalog::config::{AddArgs, Command};
use travel_catalog::core::{ConfigProvider, ContentRegion, FormField, PresentationSurface, Storage};
use travel_catalog::utils::error::ErrorSeverity;
use travel_catalog::utils::{logger, validation::Validate};
use travel_catalog::{
    CatalogEngine, CatalogError, CliConfig, HttpPackageSource, LocalStorage, MemorySurface,
    TomlConfig,
};

const PAGE_TITLE: &str = "旅遊套票";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (若有指定)
    let toml_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let verbose = cli.verbose || toml_config.as_ref().is_some_and(|c| c.verbose());
    let json_logs = cli.json_logs || toml_config.as_ref().is_some_and(|c| c.json_logs());

    // 初始化日誌
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting travel-catalog CLI");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &toml_config {
        Some(config) => execute(&cli.command, config).await,
        None => execute(&cli.command, &cli).await,
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ travel-catalog failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

async fn execute<C>(command: &Command, config: &C) -> Result<(), CatalogError>
where
    C: ConfigProvider + Validate,
{
    // 驗證配置
    config.validate()?;

    let source = HttpPackageSource::from_config(config)?;
    let mut engine = CatalogEngine::new(MemorySurface::new());
    let loaded = engine.load(&source).await?;
    println!("📦 Loaded {} packages from {}", loaded, source.endpoint());

    match command {
        Command::Regions => {
            for region in engine.store().regions() {
                println!("{}", region);
            }
            return Ok(());
        }
        Command::List { region } => {
            if let Some(region) = region {
                let matched = engine.select_region(region);
                tracing::info!("🔍 Region '{}' matched {} packages", region, matched);
            }
        }
        Command::Add(args) => {
            fill_form(engine.surface_mut(), args);
            let record = engine.on_submit()?;
            println!("➕ #{} {} ({})", record.id, record.name, record.area);
        }
    }

    for message in engine.surface().notifications() {
        println!("🔔 {}", message);
    }

    let page = engine.page(PAGE_TITLE);
    let storage = LocalStorage::new(config.output_path().to_string());
    storage
        .write_file(config.output_filename(), page.as_bytes())
        .await?;

    println!(
        "✅ Rendered {} packages ({})",
        engine.surface().content(ContentRegion::ResultCount),
        engine.surface().selector()
    );
    println!(
        "📁 Output saved to: {}/{}",
        config.output_path(),
        config.output_filename()
    );

    Ok(())
}

fn fill_form(surface: &mut MemorySurface, args: &AddArgs) {
    let values = [
        (FormField::Name, &args.name),
        (FormField::ImgUrl, &args.img_url),
        (FormField::Region, &args.region),
        (FormField::Price, &args.price),
        (FormField::Num, &args.num),
        (FormField::Rate, &args.rate),
        (FormField::Description, &args.description),
    ];
    for (field, value) in values {
        surface.fill(field, value);
    }
}
