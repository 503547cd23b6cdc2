use candidate_forms::domain::ports::UserStore;
use candidate_forms::utils::error::{ErrorSeverity, FormError};
use candidate_forms::utils::logger::{self, LogFormat};
use candidate_forms::utils::validation::Validate;
use candidate_forms::{
    process_kind, schema_for, AppConfig, CliConfig, Command, FormContext, FormData,
    InMemoryUserStore, JsonFileUserStore,
};
use clap::Parser;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::from_file(path),
        None => Ok(AppConfig::default()),
    };

    // 初始化日誌，配置載入失敗時仍要有終端機輸出
    let format = LogFormat::resolve(config.as_ref().ok().map(|c| c.logging.json));
    logger::init_logger(format, cli.verbose);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load configuration: {}", e);
            fail(e)
        }
    };

    tracing::info!("Starting candidate-forms CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
        tracing::debug!("App config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(e);
    }

    match run(&cli, &config).await {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => fail(e),
    }
}

/// 回傳送出的表單是否可以接受
async fn run(cli: &CliConfig, config: &AppConfig) -> candidate_forms::Result<bool> {
    let catalog = config.load_catalog().await?;

    match &cli.command {
        Command::Schema { form } => {
            let schema = schema_for(*form, &catalog);
            println!("{}", serde_json::to_string_pretty(&schema)?);
            Ok(true)
        }
        Command::Validate { form, input } => {
            let body = read_input(input).await?;
            let data = FormData::from_urlencoded(&body);
            tracing::debug!("Read {} submitted fields", data.len());

            let users_file = cli
                .users
                .as_ref()
                .map(|p| p.display().to_string())
                .or_else(|| config.users.file.clone());
            let users: Box<dyn UserStore> = match users_file {
                Some(path) => Box::new(JsonFileUserStore::open(path).await?),
                None => Box::new(InMemoryUserStore::new()),
            };

            let ctx = FormContext::new(&catalog, users.as_ref());
            let report = process_kind(*form, &data, &ctx).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);

            if report.validated && !report.valid {
                tracing::info!("❌ {} has {} invalid fields", form.as_str(), report.errors.len());
                Ok(false)
            } else {
                tracing::info!("✅ {} processed", form.as_str());
                Ok(true)
            }
        }
    }
}

async fn read_input(input: &str) -> candidate_forms::Result<String> {
    if input == "-" {
        let mut body = String::new();
        tokio::io::stdin().read_to_string(&mut body).await?;
        Ok(body)
    } else {
        Ok(tokio::fs::read_to_string(input).await?)
    }
}

fn fail(e: FormError) -> ! {
    tracing::error!(
        "❌ candidate-forms failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 依錯誤嚴重程度決定結束碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::Medium => 3,
        ErrorSeverity::High => 4,
        ErrorSeverity::Critical => 5,
    };
    std::process::exit(exit_code);
}
