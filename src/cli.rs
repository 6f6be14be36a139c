//! Command-line surface (spec.md §4.H): server mode, the three conversion
//! modes, and self-test, all sharing one `Settings` load.

use clap::Parser;

use crate::adapters::config::{load_settings, DEFAULT_CONFIG_PATH};
use crate::adapters::http;
use crate::core::domain::formatter;
use crate::core::domain::grammar::ArkGrammar;
use crate::core::errors::resolver::{ArkResolverError, ArkResolverResult};
use crate::core::use_cases::redirector;
use crate::selftest;

/// ARK resolver: parses and redirects Archival Resource Key URLs, and
/// converts repository identifiers to and from ARK URLs.
#[derive(Parser, Debug)]
#[command(name = "ark-resolver", version, about)]
pub struct Cli {
    /// Run the HTTP resolver server.
    #[arg(long, conflicts_with_all = ["ark", "iri", "number", "test"])]
    pub server: bool,

    /// Print the redirect target for an ARK URL.
    #[arg(long, value_name = "URL", conflicts_with_all = ["server", "iri", "number", "test"])]
    pub ark: Option<String>,

    /// Print the native ARK URL for a resource IRI.
    #[arg(long, value_name = "IRI", conflicts_with_all = ["server", "ark", "number", "test"])]
    pub iri: Option<String>,

    /// Print the legacy ARK URL for a numeric identifier (requires `--project`).
    #[arg(long, value_name = "N", conflicts_with_all = ["server", "ark", "iri", "test"])]
    pub number: Option<u64>,

    /// Project id; required alongside `--number`.
    #[arg(long, value_name = "PID", requires = "number")]
    pub project: Option<String>,

    /// Optional timestamp; requires `--iri` or `--number` (enforced in `run`).
    #[arg(long, value_name = "TS")]
    pub date: Option<String>,

    /// Run the self-test vectors and exit non-zero on any mismatch.
    #[arg(long, conflicts_with_all = ["server", "ark", "iri", "number"])]
    pub test: bool,

    /// Configuration file path.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,
}

/// Dispatches a parsed [`Cli`] to its mode, returning the process exit code.
pub async fn dispatch(cli: Cli) -> i32 {
    match run(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

async fn run(cli: Cli) -> ArkResolverResult<()> {
    if cli.date.is_some() && cli.iri.is_none() && cli.number.is_none() {
        return Err(ArkResolverError::Grammar(
            crate::core::errors::grammar::ArkGrammarError::MalformedUrl(
                "--date requires --iri or --number".to_string(),
            ),
        ));
    }

    if cli.test {
        return selftest::run().map_err(ArkResolverError::Grammar);
    }

    if cli.server {
        let settings = load_settings(&cli.config)?;
        return http::run(settings).await;
    }

    let settings = load_settings(&cli.config)?;
    let grammar = ArkGrammar::new(&settings.ark_config.resolver_host, &settings.ark_config.naan)?;

    if let Some(url) = cli.ark {
        let url_info = grammar.parse(&url, settings.dsp_ark_version)?;
        let target = redirector::redirect(&settings, &url_info)?;
        println!("{target}");
        return Ok(());
    }

    if let Some(iri) = cli.iri {
        let ark_url = formatter::from_resource_iri(
            &grammar,
            settings.dsp_ark_version,
            &iri,
            cli.date.as_deref(),
        )?;
        println!("{ark_url}");
        return Ok(());
    }

    if let Some(n) = cli.number {
        let project_id = cli
            .project
            .as_deref()
            .ok_or_else(|| {
                crate::core::errors::grammar::ArkGrammarError::MalformedUrl(
                    "--number requires --project".to_string(),
                )
            })?;
        let ark_url = formatter::from_legacy_numeric_id(
            &grammar,
            settings.dsp_ark_version,
            n,
            project_id,
            cli.date.as_deref(),
        )?;
        println!("{ark_url}");
        return Ok(());
    }

    Err(ArkResolverError::Grammar(
        crate::core::errors::grammar::ArkGrammarError::MalformedUrl(
            "no mode selected: pass one of --server, --ark, --iri, --number, --test".to_string(),
        ),
    ))
}
