use crate::cert::{CertificateLookupService, CertificateUrlBuilder, CertificateUrlResult};
use crate::cli::args::*;
use crate::cli::completions::handle_completion_command;
use crate::config::ServiceConfig;
use crate::storage::LocalStore;
use crate::utils::errors::Result;
use crate::utils::output::OutputFormat;
use crate::utils::paths::CertificateApiPaths;
use std::io::{self, Write};
use std::sync::Arc;

pub async fn handle_command(cli: Cli) -> Result<()> {
    // Initialize logging - always to stderr
    if !cli.quiet {
        let serving = matches!(cli.command, Commands::Serve { .. });
        let log_level = match (cli.verbose, serving) {
            (0, false) => "certificate_api=warn", // Default: warnings only
            (0, true) | (1, _) => "certificate_api=info,tower_http=info",
            (2, _) => "certificate_api=debug,tower_http=debug",
            _ => "certificate_api=trace,tower_http=trace",
        };

        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(log_level)
            .init();
    }

    let output = OutputFormat::new(cli.raw);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Serve { bind, source } => {
            handle_serve_command(load_config(config_path)?, bind, source).await
        }
        Commands::Lookup {
            userid,
            useremail,
            json,
            source,
        } => {
            let request = LookupRequest {
                userid,
                useremail: useremail.as_deref(),
                json,
                quiet: cli.quiet,
            };
            handle_lookup_command(
                load_config(config_path)?,
                request,
                source,
                &mut io::stdout(),
                &mut io::stderr(),
            )
            .await
        }
        Commands::CheckData { data } => handle_check_data_command(
            load_config(config_path)?,
            data,
            &output,
            &mut io::stdout(),
            &mut io::stderr(),
        ),
        Commands::Completion { ref command } => handle_completion_command(command),
    }
}

/// An explicit path must exist; the default location may be absent
fn load_config(path: Option<&str>) -> Result<ServiceConfig> {
    match path {
        Some(path) => ServiceConfig::load(&CertificateApiPaths::expand_home(path)?),
        None => ServiceConfig::load_or_default(&CertificateApiPaths::config_file()?),
    }
}

/// Open the configured dataset and wire it into a lookup service
fn build_service(config: &ServiceConfig) -> Result<CertificateLookupService> {
    let store = Arc::new(LocalStore::open(config.data_file()?)?);
    let urls = CertificateUrlBuilder::from_config(config.wwwroot.as_deref());
    Ok(CertificateLookupService::from_store(store, urls))
}

async fn handle_serve_command(
    config: ServiceConfig,
    bind: Option<String>,
    source: SourceArgs,
) -> Result<()> {
    let config = config.merge(bind, source.data, source.wwwroot);
    let addr = config.bind_addr()?;
    let service = build_service(&config)?;

    if let Some(root) = service.url_builder().wwwroot() {
        tracing::info!("Rendering certificate URLs under {}", root);
    }

    crate::server::serve(addr, service).await
}

pub struct LookupRequest<'a> {
    pub userid: i64,
    pub useremail: Option<&'a str>,
    pub json: bool,
    pub quiet: bool,
}

async fn handle_lookup_command<W: Write, E: Write>(
    config: ServiceConfig,
    request: LookupRequest<'_>,
    source: SourceArgs,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let config = config.merge(None, source.data, source.wwwroot);
    let service = build_service(&config)?;
    let result = service
        .get_certificate_urls(request.userid, request.useremail)
        .await?;
    tracing::debug!("Lookup finished with status {}", result.status());

    if request.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        return Ok(());
    }

    match result {
        CertificateUrlResult::Success { certificate_urls } => {
            for url in certificate_urls {
                writeln!(out, "{url}")?;
            }
        }
        // Not a failure: the message goes to stderr and the command still succeeds
        CertificateUrlResult::Error { message } => {
            if !request.quiet {
                writeln!(err, "{message}")?;
            }
        }
    }
    Ok(())
}

fn handle_check_data_command<W: Write, E: Write>(
    config: ServiceConfig,
    data: Option<String>,
    output: &OutputFormat,
    out: &mut W,
    err: &mut E,
) -> Result<()> {
    let config = config.merge(None, data, None);
    let store = LocalStore::open(config.data_file()?)?;
    let records = store.records();

    let mut table_data: Vec<Vec<String>> = Vec::new();
    if !output.raw {
        table_data.push(vec![
            "ID".to_string(),
            "Email".to_string(),
            "Last Access".to_string(),
            "Certificates".to_string(),
        ]);
    }

    for user in records.users() {
        let last_access = user
            .last_access_at()
            .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_else(|| user.lastaccess.to_string());
        table_data.push(vec![
            user.id.to_string(),
            user.email.clone(),
            last_access,
            records.issue_count_for(user.id).to_string(),
        ]);
    }

    output.write_table(&table_data, out)?;
    writeln!(
        err,
        "{}: {} users, {} certificate issues",
        store.path().display(),
        records.user_count(),
        records.issue_count()
    )?;
    Ok(())
}
