use asset_uploader::config::{StorageConfig, UploadTarget, strict_from_env};
use asset_uploader::services::storage::StorageClient;
use asset_uploader::services::transport::ReqwestTransport;
use asset_uploader::services::upload_service::{Uploader, write_progress};
use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Local file to upload (default: public/favicon.svg, env: UPLOAD_FILE)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Target bucket (default: store-assets, env: UPLOAD_BUCKET)
    #[arg(short, long)]
    bucket: Option<String>,

    /// Object key inside the bucket (default: favicon.svg, env: UPLOAD_KEY)
    #[arg(short, long)]
    key: Option<String>,

    /// Exit with status 1 when the storage API rejects the upload (env: UPLOAD_STRICT)
    #[arg(long)]
    strict: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asset_uploader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = StorageConfig::from_env()?;
    let mut target = UploadTarget::from_env();
    if let Some(file) = args.file {
        target.file = file;
    }
    if let Some(bucket) = args.bucket {
        target.bucket = bucket;
    }
    if let Some(key) = args.key {
        target.object_key = key;
    }
    let strict = args.strict || strict_from_env();

    info!("☁️  Storage: {} (Bucket: {})", config.base_url, target.bucket);

    let client = StorageClient::new(config, Arc::new(ReqwestTransport::new()));
    let uploader = Uploader::new(client);

    let mut stdout = std::io::stdout();
    write_progress(&target, &mut stdout)?;
    let outcome = uploader.upload(&target).await?;
    outcome.write_report(&mut stdout)?;

    let code = outcome.exit_code(strict);
    if code != 0 {
        std::process::exit(code);
    }

    Ok(())
}
