use clap::Parser;
use serde::Serialize;
use serde_json::json;
use sfetch::utils::validation::{validate_url, Validate};
use sfetch::utils::{error, logger};
use sfetch::{JsonClient, Mode};

#[derive(Debug, Parser)]
#[command(name = "test_api_methods")]
#[command(about = "Smoke-test the JSON fetch helpers against a live endpoint")]
struct Args {
    #[arg(long, default_value = "https://jsonplaceholder.typicode.com/posts")]
    endpoint: String,

    #[arg(long, help = "Only exercise one HTTP method (get/post/delete)")]
    method: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

impl Validate for Args {
    fn validate(&self) -> error::Result<()> {
        validate_url("endpoint", &self.endpoint)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SamplePost {
    title: String,
    body: String,
    user_id: i64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    // 驗證配置
    if let Err(e) = args.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    println!("🚀 測試 JSON API 的 HTTP 方法與 Payload");
    println!("📋 Endpoint: {}", args.endpoint);

    let client = JsonClient::new();

    // 指定 --method 時只跑單一動詞
    if let Some(method) = &args.method {
        let mode: Mode = method.parse()?;
        let payload = (mode == Mode::Post).then(|| json!({"title": "sfetch smoke test"}));
        let response = client.sfetch(&args.endpoint, mode, payload.as_ref()).await?;
        println!("  - {} {} -> {}", mode, args.endpoint, response.status());
        return Ok(());
    }

    let response = client.get(&args.endpoint).await?;
    println!("  - GET {} -> {}", args.endpoint, response.status());

    let payload = SamplePost {
        title: "sfetch smoke test".to_string(),
        body: "created by test_api_methods".to_string(),
        user_id: 1,
    };
    let response = client.post(&args.endpoint, &payload).await?;
    println!("  - POST {} -> {}", args.endpoint, response.status());

    let delete_url = format!("{}/1", args.endpoint.trim_end_matches('/'));
    let response = client.del(&delete_url).await?;
    println!("  - DELETE {} -> {}", delete_url, response.status());

    println!("✅ All requests completed");

    Ok(())
}
