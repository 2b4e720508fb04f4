use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use object_store_adapter::{
    create_adapter, DeleteObjectInput, GetObjectInput, HeadObjectInput, ListObjectsInput,
    ObjectKey, PutObjectInput, SignedUrlOperation, SignedUrlOptions, StorageAdapter,
    StorageConfig, TracingLogger,
};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "object-store-adapter-cli")]
#[command(about = "Run logged object storage operations from the command line", long_about = None)]
struct Cli {
    /// Log level, or a full tracing filter directive
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Upload a file as an object
    Put {
        bucket: String,
        key: String,
        /// File path to upload
        file: PathBuf,
        #[arg(long)]
        content_type: Option<String>,
        /// User metadata entry, repeatable
        #[arg(short, long = "metadata", value_name = "NAME=VALUE", value_parser = parse_metadata)]
        metadata: Vec<(String, String)>,
        /// Attach a generated x-request-id metadata entry
        #[arg(long)]
        request_id: bool,
    },

    /// Download an object
    Get {
        bucket: String,
        key: String,
        /// Output file path, defaults to the key's file name
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete an object
    Delete { bucket: String, key: String },

    /// List objects
    List {
        bucket: String,
        #[arg(short, long)]
        prefix: Option<String>,
        #[arg(short, long)]
        delimiter: Option<String>,
        #[arg(long)]
        max_keys: Option<usize>,
        #[arg(long)]
        continuation_token: Option<String>,
        /// Follow continuation tokens until the listing is exhausted
        #[arg(long)]
        all: bool,
    },

    /// Show object metadata
    Head { bucket: String, key: String },

    /// Generate a pre-signed URL
    Sign {
        #[arg(value_enum)]
        operation: SignOperation,
        bucket: String,
        key: String,
        /// Lifetime in seconds
        #[arg(long)]
        expires_in: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SignOperation {
    Get,
    Put,
}

impl From<SignOperation> for SignedUrlOperation {
    fn from(operation: SignOperation) -> Self {
        match operation {
            SignOperation::Get => SignedUrlOperation::Get,
            SignOperation::Put => SignedUrlOperation::Put,
        }
    }
}

fn parse_metadata(entry: &str) -> Result<(String, String), String> {
    match entry.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_string(), value.to_string())),
        _ => Err(format!("expected NAME=VALUE, got '{}'", entry)),
    }
}

impl Cli {
    fn init_logging(&self) -> Result<()> {
        let env_filter = EnvFilter::try_new(&self.log_level)
            .with_context(|| format!("Invalid log level: {}", self.log_level))?;

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();

        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(adapter: &StorageAdapter, command: Commands) -> Result<()> {
    match command {
        Commands::Put {
            bucket,
            key,
            file,
            content_type,
            metadata,
            request_id,
        } => {
            let body = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let mut input = PutObjectInput::new(bucket, key, body);
            if let Some(content_type) = content_type {
                input = input.with_content_type(content_type);
            }
            for (name, value) in metadata {
                input = input.with_metadata(name, value);
            }
            if request_id {
                input = input.with_metadata("x-request-id", uuid::Uuid::new_v4().to_string());
            }

            let output = adapter.put_object.call(input).await?;
            print_json(&output)
        }
        Commands::Get {
            bucket,
            key,
            output,
        } => {
            let output = match output {
                Some(path) => path,
                None => PathBuf::from(
                    ObjectKey::new(key.clone())
                        .context("Cannot derive an output file name from the key")?
                        .file_name(),
                ),
            };

            let result = adapter
                .get_object
                .call(GetObjectInput::new(bucket, key))
                .await?;

            let mut file = tokio::fs::File::create(&output)
                .await
                .with_context(|| format!("Failed to create {}", output.display()))?;
            let written = tokio::io::copy(&mut result.body.into_async_read(), &mut file)
                .await
                .context("Failed to download object")?;

            info!(path = %output.display(), bytes = written, "object downloaded");
            Ok(())
        }
        Commands::Delete { bucket, key } => {
            let output = adapter
                .delete_object
                .call(DeleteObjectInput::new(bucket, key))
                .await?;
            print_json(&output)
        }
        Commands::List {
            bucket,
            prefix,
            delimiter,
            max_keys,
            continuation_token,
            all,
        } => {
            let mut input = ListObjectsInput::new(bucket);
            input.prefix = prefix;
            input.delimiter = delimiter;
            input.max_keys = max_keys;
            input.continuation_token = continuation_token;

            loop {
                let page = adapter.list_objects.call(input.clone()).await?;
                print_json(&page)?;

                match page.next_continuation_token {
                    Some(token) if all => input.continuation_token = Some(token),
                    _ => break,
                }
            }
            Ok(())
        }
        Commands::Head { bucket, key } => {
            let output = adapter
                .head_object
                .call(HeadObjectInput::new(bucket, key))
                .await?;
            print_json(&output)
        }
        Commands::Sign {
            operation,
            bucket,
            key,
            expires_in,
        } => {
            let mut options = SignedUrlOptions::new(operation.into(), bucket, key);
            if let Some(seconds) = expires_in {
                options = options.with_expires_in(Duration::from_secs(seconds));
            }

            let url = adapter.get_signed_url.call(options).await?;
            print_json(&serde_json::json!({ "url": url }))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging()?;

    let config = StorageConfig::from_env().context("Invalid storage configuration")?;
    info!(?config, "using storage configuration");

    let adapter = create_adapter(config, Some(Arc::new(TracingLogger::new())));
    run(&adapter, cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_put_with_metadata() {
        let cli = Cli::try_parse_from([
            "object-store-adapter-cli",
            "put",
            "my-bucket",
            "docs/a.txt",
            "./a.txt",
            "-m",
            "owner=alice",
            "--metadata",
            "team=storage",
            "--request-id",
        ])
        .unwrap();

        match cli.command {
            Commands::Put {
                bucket,
                key,
                metadata,
                request_id,
                ..
            } => {
                assert_eq!(bucket, "my-bucket");
                assert_eq!(key, "docs/a.txt");
                assert_eq!(
                    metadata,
                    vec![
                        ("owner".to_string(), "alice".to_string()),
                        ("team".to_string(), "storage".to_string()),
                    ]
                );
                assert!(request_id);
            }
            other => panic!("Expected put command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_sign() {
        let cli = Cli::try_parse_from([
            "object-store-adapter-cli",
            "sign",
            "put",
            "my-bucket",
            "upload.bin",
            "--expires-in",
            "60",
        ])
        .unwrap();

        match cli.command {
            Commands::Sign {
                operation,
                expires_in,
                ..
            } => {
                assert_eq!(operation, SignOperation::Put);
                assert_eq!(expires_in, Some(60));
            }
            other => panic!("Expected sign command, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_malformed_metadata() {
        assert!(parse_metadata("no-equals").is_err());
        assert!(parse_metadata("=value").is_err());
        assert_eq!(
            parse_metadata("k=v=w").unwrap(),
            ("k".to_string(), "v=w".to_string())
        );
    }
}
